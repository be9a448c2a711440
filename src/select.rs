//! Icon grouping by style

use std::collections::BTreeSet;

use crate::icon::IconMetadata;

/// Every distinct style tag across all icons, private ones included
///
/// The set is sorted so styles are always processed in the same order.
pub fn styles_of(icons: &[IconMetadata]) -> BTreeSet<&str> {
    icons
        .iter()
        .flat_map(|icon| icon.styles.iter().map(String::as_str))
        .collect()
}

/// Public icons carrying `style`, in their original order
pub fn select_for_style<'a>(icons: &'a [IconMetadata], style: &str) -> Vec<&'a IconMetadata> {
    icons
        .iter()
        .filter(|icon| !icon.private && icon.has_style(style))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::{parse_metadata, ParseMode};

    fn sample() -> Vec<IconMetadata> {
        parse_metadata(
            r#"{
                "star": { "unicode": "f005", "styles": ["solid", "regular"], "changes": ["1.0.0"] },
                "github": { "unicode": "f09b", "styles": ["brands"], "changes": ["1.0.0"] },
                "secret": { "unicode": "f0ff", "styles": ["brands"], "private": true, "changes": ["1.0.0"] },
                "heart": { "unicode": "f004", "styles": ["solid"], "changes": ["1.0.0"] }
            }"#,
            ParseMode::Strict,
        )
        .unwrap()
    }

    fn names(icons: &[&IconMetadata]) -> Vec<String> {
        icons.iter().map(|i| i.name.clone()).collect()
    }

    #[test]
    fn test_styles_of() {
        let icons = sample();
        let styles: Vec<&str> = styles_of(&icons).into_iter().collect();
        assert_eq!(styles, vec!["brands", "regular", "solid"]);
    }

    #[test]
    fn test_select_excludes_private() {
        let icons = sample();
        assert_eq!(names(&select_for_style(&icons, "brands")), vec!["github"]);
    }

    #[test]
    fn test_select_keeps_original_order() {
        let icons = sample();
        assert_eq!(
            names(&select_for_style(&icons, "solid")),
            vec!["star", "heart"]
        );
    }

    #[test]
    fn test_select_unknown_style() {
        let icons = sample();
        assert!(select_for_style(&icons, "duotone").is_empty());
    }
}
