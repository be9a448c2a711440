//! Custom MiniJinja filters for enumeration templates
//!
//! Escaping differs per target: C# doc comments are XML, TypeScript doc
//! comments are JSDoc blocks that must not contain a closing `*/`.

use minijinja::Environment;

/// Register all custom filters with the environment
pub fn register_filters(env: &mut Environment<'_>) {
    env.add_filter("xml_escape", xml_escape);
    env.add_filter("jsdoc_escape", jsdoc_escape);
}

/// Escape the five XML special characters
pub fn xml_escape(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            '&' => result.push_str("&amp;"),
            other => result.push(other),
        }
    }
    result
}

/// Keep text from terminating a JSDoc block
pub fn jsdoc_escape(value: &str) -> String {
    value.replace("*/", "*\\/")
}
