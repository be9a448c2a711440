//! Enumeration rendering: generate source code from icon metadata
//!
//! Each style becomes one enumeration. Members keep the order the icons were
//! selected in; identifiers are derived from icon names and checked for
//! reversibility and collisions, with findings sent to a [`DiagnosticSink`].
//!
//! Rendering is deterministic: the same icons in the same order always
//! produce byte-identical output.

use std::collections::HashMap;
use std::path::Path;

use minijinja::Environment;
use serde::{Deserialize, Serialize};

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::{Error, Result};
use crate::icon::IconMetadata;
use crate::templates::{self, context};
use crate::util::{reverse_identifier, to_identifier_case};

/// Target language of generated enumerations
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    #[value(name = "csharp", alias = "cs")]
    CSharp,
    #[value(name = "typescript", alias = "ts")]
    TypeScript,
}

impl Target {
    /// File extension of generated files
    pub fn extension(self) -> &'static str {
        match self {
            Target::CSharp => "cs",
            Target::TypeScript => "ts",
        }
    }
}

/// Render configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Prepended to the identifier-cased style to form the enum name
    pub enum_prefix: String,
    /// Namespace wrapping C# enumerations
    pub namespace: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            enum_prefix: "FontAwesome5".into(),
            namespace: "Geta.Optimizely.ContentTypeIcons".into(),
        }
    }
}

/// One rendered enumeration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEnum {
    pub style: String,
    pub enum_name: String,
    pub file_name: String,
    /// Latest normalized version across the members
    pub version: String,
    pub member_count: usize,
    pub source: String,
}

/// Enumeration renderer
pub struct EnumRenderer {
    target: Target,
    config: RenderConfig,
    env: Environment<'static>,
}

impl EnumRenderer {
    pub fn new(target: Target) -> Result<Self> {
        Self::with_config(target, RenderConfig::default())
    }

    pub fn with_config(target: Target, config: RenderConfig) -> Result<Self> {
        Ok(Self {
            target,
            config,
            env: templates::engine()?,
        })
    }

    /// Use templates from `dir` where present instead of the embedded ones
    pub fn with_template_dir(mut self, dir: &Path) -> Result<Self> {
        self.env = templates::engine_with_override(dir)?;
        Ok(self)
    }

    /// Enum type name for a style, e.g. `solid` -> `FontAwesome5Solid`
    pub fn enum_name(&self, style: &str) -> String {
        format!("{}{}", self.config.enum_prefix, to_identifier_case(style))
    }

    /// Render the enumeration for `style` from already selected icons
    pub fn render(
        &self,
        style: &str,
        icons: &[&IconMetadata],
        sink: &mut dyn DiagnosticSink,
    ) -> Result<RenderedEnum> {
        let version = context::latest_version(icons.iter().copied())
            .ok_or_else(|| Error::Render(format!("no icons to render for style '{}'", style)))?;

        let mut seen: HashMap<String, &str> = HashMap::new();
        let members = icons
            .iter()
            .map(|icon| {
                let identifier = safe_identifier(style, icon, sink);
                if let Some(first) = seen.insert(identifier.clone(), &icon.name) {
                    sink.report(Diagnostic::DuplicateIdentifier {
                        style: style.to_string(),
                        identifier: identifier.clone(),
                        first: first.to_string(),
                        second: icon.name.clone(),
                    });
                }
                context::MemberView::from_icon(icon, identifier)
            })
            .collect::<Vec<_>>();

        let enum_name = self.enum_name(style);
        let ctx = context::EnumContext {
            enum_name: enum_name.clone(),
            style: style.to_string(),
            namespace: self.config.namespace.clone(),
            version: version.clone(),
            members,
        };
        let source = templates::render_enum(&self.env, self.target, &ctx)?;

        Ok(RenderedEnum {
            style: style.to_string(),
            file_name: format!("{}.{}", enum_name, self.target.extension()),
            enum_name,
            version,
            member_count: icons.len(),
            source,
        })
    }
}

/// Derive the member identifier for an icon, reporting names that do not
/// convert back
pub fn safe_identifier(style: &str, icon: &IconMetadata, sink: &mut dyn DiagnosticSink) -> String {
    let identifier = to_identifier_case(&icon.name);
    let reversed = reverse_identifier(&identifier);
    if reversed != icon.name {
        sink.report(Diagnostic::RoundTripMismatch {
            style: style.to_string(),
            name: icon.name.clone(),
            identifier: identifier.clone(),
            reversed,
        });
    }
    identifier
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectingSink;
    use crate::icon::{parse_metadata, ParseMode};
    use crate::select::select_for_style;
    use pretty_assertions::assert_eq;

    fn sample_icons() -> Vec<IconMetadata> {
        parse_metadata(
            r#"{
                "arrow-left": {
                    "label": "arrow left",
                    "unicode": "f060",
                    "styles": ["solid", "regular"],
                    "search": { "terms": ["back", "previous"] },
                    "changes": ["1.0.0", "5.0.0"]
                },
                "500px": {
                    "label": "500px",
                    "unicode": "f26e",
                    "styles": ["solid"],
                    "changes": ["4.4", "5.0.0"]
                },
                "heart": {
                    "label": "Heart",
                    "unicode": "f004",
                    "styles": ["solid"],
                    "changes": ["5.0.0", "5.9.0", "6.0.0-beta1"]
                }
            }"#,
            ParseMode::Strict,
        )
        .unwrap()
    }

    const EXPECTED_SOLID: &str = r#"//------------------------------------------------------------------------------
// <auto-generated>
//     This code was generated by a tool.
//
//     Changes to this file may cause incorrect behavior and will be lost if
//     the code is regenerated.
// </auto-generated>
//------------------------------------------------------------------------------

namespace Geta.Optimizely.ContentTypeIcons
{
    /// <summary>
    /// Font Awesome. Version 6.0.0-beta1.
    /// </summary>
    public enum FontAwesome5Solid
    {
        /// <summary>
        /// Arrow Left (arrow-left)
        /// <para>Styles: solid, regular</para>
        /// <para>Terms: back, previous</para>
        /// <para>Added in 1.0.0, updated in 5.0.0.</para>
        /// </summary>
        ArrowLeft = 0xf060,

        /// <summary>
        /// 500px (500px)
        /// <para>Added in 4.4, updated in 5.0.0.</para>
        /// </summary>
        _500px = 0xf26e,

        /// <summary>
        /// Heart (heart)
        /// <para>Added in 5.0.0, updated in 5.9.0 and 6.0.0-beta1.</para>
        /// </summary>
        Heart = 0xf004,

    }
}
"#;

    #[test]
    fn test_render_csharp_full_output() {
        let icons = sample_icons();
        let selected = select_for_style(&icons, "solid");
        let renderer = EnumRenderer::new(Target::CSharp).unwrap();
        let mut sink = CollectingSink::default();

        let rendered = renderer.render("solid", &selected, &mut sink).unwrap();

        assert_eq!(rendered.enum_name, "FontAwesome5Solid");
        assert_eq!(rendered.file_name, "FontAwesome5Solid.cs");
        assert_eq!(rendered.version, "6.0.0-beta1");
        assert_eq!(rendered.member_count, 3);
        assert_eq!(rendered.source, EXPECTED_SOLID);
        assert!(sink.diagnostics.is_empty());
    }

    #[test]
    fn test_render_typescript() {
        let icons = sample_icons();
        let selected = select_for_style(&icons, "regular");
        let renderer = EnumRenderer::new(Target::TypeScript).unwrap();
        let mut sink = CollectingSink::default();

        let rendered = renderer.render("regular", &selected, &mut sink).unwrap();

        assert_eq!(rendered.file_name, "FontAwesome5Regular.ts");
        assert_eq!(
            rendered.source,
            r#"// <auto-generated>
//     This code was generated by a tool.
//
//     Changes to this file may cause incorrect behavior and will be lost if
//     the code is regenerated.
// </auto-generated>

/**
 * Font Awesome. Version 5.0.0.
 */
export enum FontAwesome5Regular {
  /**
   * Arrow Left (arrow-left)
   *
   * Styles: solid, regular
   *
   * Terms: back, previous
   *
   * Added in 1.0.0, updated in 5.0.0.
   */
  ArrowLeft = 0xf060,
}
"#
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let icons = sample_icons();
        let selected = select_for_style(&icons, "solid");
        let renderer = EnumRenderer::new(Target::CSharp).unwrap();

        let first = renderer
            .render("solid", &selected, &mut CollectingSink::default())
            .unwrap();
        let second = renderer
            .render("solid", &selected, &mut CollectingSink::default())
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_round_trip_mismatch_reported_but_emitted() {
        let icons = parse_metadata(
            r#"{ "arrow-down-1-9": { "unicode": "f162", "styles": ["solid"], "changes": ["6.0.0"] } }"#,
            ParseMode::Strict,
        )
        .unwrap();
        let selected = select_for_style(&icons, "solid");
        let renderer = EnumRenderer::new(Target::CSharp).unwrap();
        let mut sink = CollectingSink::default();

        let rendered = renderer.render("solid", &selected, &mut sink).unwrap();

        assert!(rendered.source.contains("ArrowDown19 = 0xf162,"));
        assert_eq!(
            sink.diagnostics,
            vec![Diagnostic::RoundTripMismatch {
                style: "solid".into(),
                name: "arrow-down-1-9".into(),
                identifier: "ArrowDown19".into(),
                reversed: "arrow-down19".into(),
            }]
        );
    }

    #[test]
    fn test_duplicate_identifier_reported() {
        let icons = parse_metadata(
            r#"{
                "a-b": { "unicode": "f001", "styles": ["solid"], "changes": ["1.0.0"] },
                "a--b": { "unicode": "f002", "styles": ["solid"], "changes": ["1.0.0"] }
            }"#,
            ParseMode::Strict,
        )
        .unwrap();
        let selected = select_for_style(&icons, "solid");
        let renderer = EnumRenderer::new(Target::CSharp).unwrap();
        let mut sink = CollectingSink::default();

        renderer.render("solid", &selected, &mut sink).unwrap();

        assert!(sink.diagnostics.contains(&Diagnostic::DuplicateIdentifier {
            style: "solid".into(),
            identifier: "AB".into(),
            first: "a-b".into(),
            second: "a--b".into(),
        }));
    }

    #[test]
    fn test_empty_selection_is_an_error() {
        let renderer = EnumRenderer::new(Target::CSharp).unwrap();
        let result = renderer.render("solid", &[], &mut CollectingSink::default());
        assert!(matches!(result, Err(Error::Render(_))));
    }

    #[test]
    fn test_enum_name_for_hyphenated_style() {
        let renderer = EnumRenderer::new(Target::CSharp).unwrap();
        assert_eq!(renderer.enum_name("sharp-solid"), "FontAwesome5SharpSolid");
    }
}
