//! Template-based enumeration rendering
//!
//! Uses MiniJinja templates, one per target language. Templates are embedded
//! by default and can be overridden from a directory laid out as
//! `<dir>/enums/<target>.jinja`.

pub mod context;
pub mod filters;

use minijinja::{AutoEscape, Environment};
use std::path::Path;

use crate::error::{Error, Result};
use crate::render::Target;

// Embedded templates (compiled into binary)
mod embedded {
    pub const CSHARP_ENUM: &str = include_str!("../../templates/enums/csharp.jinja");
    pub const TYPESCRIPT_ENUM: &str = include_str!("../../templates/enums/typescript.jinja");
}

/// Create a template engine with the embedded templates
pub fn engine() -> Result<Environment<'static>> {
    let mut env = Environment::new();

    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    // escaping is target specific and done with explicit filters
    env.set_auto_escape_callback(|_| AutoEscape::None);

    filters::register_filters(&mut env);

    env.add_template(template_name(Target::CSharp), embedded::CSHARP_ENUM)?;
    env.add_template(template_name(Target::TypeScript), embedded::TYPESCRIPT_ENUM)?;

    Ok(env)
}

/// Create a template engine whose templates in `custom_dir` override the
/// embedded ones
pub fn engine_with_override(custom_dir: &Path) -> Result<Environment<'static>> {
    let mut env = engine()?;

    for target in [Target::CSharp, Target::TypeScript] {
        let name = template_name(target);
        let path = custom_dir.join(name);
        if !path.exists() {
            continue;
        }
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Error::Render(format!("Failed to read {}: {}", path.display(), e))
        })?;
        tracing::debug!(template = name, path = %path.display(), "using custom template");
        env.add_template_owned(name, content)?;
    }

    Ok(env)
}

/// Get the template name for a target language
pub fn template_name(target: Target) -> &'static str {
    match target {
        Target::CSharp => "enums/csharp.jinja",
        Target::TypeScript => "enums/typescript.jinja",
    }
}

/// Render an enumeration context with the target's template
pub fn render_enum(
    env: &Environment<'_>,
    target: Target,
    ctx: &context::EnumContext,
) -> Result<String> {
    let template = env.get_template(template_name(target))?;
    Ok(template.render(ctx)?)
}
