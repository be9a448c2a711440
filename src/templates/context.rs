//! Template context structures
//!
//! Flattens icons into the strings the enumeration templates print. Every
//! optional line is `None` when it should be omitted.

use serde::Serialize;

use crate::icon::IconMetadata;
use crate::util::to_title_case;
use crate::version::{sorted_unique, IconVersion};

/// Context for one generated enumeration
#[derive(Debug, Clone, Serialize)]
pub struct EnumContext {
    /// Type name, e.g. `FontAwesome5Solid`
    pub enum_name: String,
    /// Style tag the enumeration covers
    pub style: String,
    /// C# namespace
    pub namespace: String,
    /// Latest normalized version across all members
    pub version: String,
    pub members: Vec<MemberView>,
}

/// View of one enumeration member
#[derive(Debug, Clone, Serialize)]
pub struct MemberView {
    pub identifier: String,
    pub unicode: String,
    /// Title-cased label
    pub label: String,
    /// Original kebab-case name
    pub name: String,
    /// Comma-joined styles, only for icons in more than one style
    pub styles: Option<String>,
    /// Comma-joined search terms, only when there are any
    pub terms: Option<String>,
    /// `Added in ...` sentence
    pub changelog: String,
}

impl MemberView {
    pub fn from_icon(icon: &IconMetadata, identifier: String) -> Self {
        Self {
            identifier,
            unicode: icon.unicode.clone(),
            label: to_title_case(&icon.label),
            name: icon.name.clone(),
            styles: (icon.styles.len() > 1).then(|| icon.styles.join(", ")),
            terms: (!icon.search_terms.is_empty()).then(|| icon.search_terms.join(", ")),
            changelog: changelog_line(&icon.changes),
        }
    }
}

/// Describe a change history as `Added in A, updated in B, C and D.`
///
/// Versions are sorted ascending and de-duplicated; their original spelling
/// is kept.
pub fn changelog_line(changes: &[IconVersion]) -> String {
    let versions: Vec<&str> = sorted_unique(changes)
        .into_iter()
        .map(IconVersion::as_str)
        .collect();

    match versions.split_first() {
        None => String::new(),
        Some((added, [])) => format!("Added in {}.", added),
        Some((added, updated)) => {
            format!("Added in {}, updated in {}.", added, join_with_and(updated))
        }
    }
}

/// Join with `, ` except for the final pair, which is joined with ` and `
pub fn join_with_and(items: &[&str]) -> String {
    match items.split_last() {
        None => String::new(),
        Some((last, [])) => last.to_string(),
        Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
    }
}

/// Highest version across every change of every icon, normalized
pub fn latest_version<'a, I>(icons: I) -> Option<String>
where
    I: IntoIterator<Item = &'a IconMetadata>,
{
    icons
        .into_iter()
        .flat_map(|icon| icon.changes.iter())
        .max()
        .map(IconVersion::normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::{parse_metadata, ParseMode};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn versions(tags: &[&str]) -> Vec<IconVersion> {
        tags.iter().map(|t| IconVersion::parse(t).unwrap()).collect()
    }

    #[rstest]
    #[case(&["5.0.0"], "Added in 5.0.0.")]
    #[case(&["5.0.0", "5.1.0"], "Added in 5.0.0, updated in 5.1.0.")]
    #[case(
        &["5.0.0", "5.9.0", "6.0.0-beta1"],
        "Added in 5.0.0, updated in 5.9.0 and 6.0.0-beta1."
    )]
    #[case(
        &["1.0.0", "4.4", "5.0.0", "5.10.0"],
        "Added in 1.0.0, updated in 4.4, 5.0.0 and 5.10.0."
    )]
    #[case(&["5.10.0", "5.9.0", "5.0.0"], "Added in 5.0.0, updated in 5.9.0 and 5.10.0.")]
    #[case(&["5.0.0", "5.0.0", "5.1.0"], "Added in 5.0.0, updated in 5.1.0.")]
    #[case(&["5.0.0", "5.0"], "Added in 5.0.0.")]
    fn test_changelog_line(#[case] tags: &[&str], #[case] expected: &str) {
        assert_eq!(changelog_line(&versions(tags)), expected);
    }

    #[rstest]
    #[case(&[], "")]
    #[case(&["a"], "a")]
    #[case(&["a", "b"], "a and b")]
    #[case(&["a", "b", "c"], "a, b and c")]
    #[case(&["a", "b", "c", "d"], "a, b, c and d")]
    fn test_join_with_and(#[case] items: &[&str], #[case] expected: &str) {
        assert_eq!(join_with_and(items), expected);
    }

    fn icons() -> Vec<IconMetadata> {
        parse_metadata(
            r#"{
                "star": { "label": "star outline", "unicode": "f005",
                          "styles": ["solid", "regular"], "changes": ["5.0.0"],
                          "search": { "terms": ["favorite", "rating"] } },
                "heart": { "unicode": "f004", "styles": ["solid"], "changes": ["5.2.1"] }
            }"#,
            ParseMode::Strict,
        )
        .unwrap()
    }

    #[test]
    fn test_latest_version() {
        let icons = icons();
        assert_eq!(latest_version(&icons), Some("5.2.1".to_string()));
        assert_eq!(latest_version(icons.iter().rev()), Some("5.2.1".to_string()));
        assert_eq!(latest_version(&Vec::<IconMetadata>::new()), None);
    }

    #[test]
    fn test_member_view() {
        let icons = icons();
        let star = MemberView::from_icon(&icons[0], "Star".into());
        assert_eq!(star.label, "Star Outline");
        assert_eq!(star.styles.as_deref(), Some("solid, regular"));
        assert_eq!(star.terms.as_deref(), Some("favorite, rating"));
        assert_eq!(star.changelog, "Added in 5.0.0.");

        let heart = MemberView::from_icon(&icons[1], "Heart".into());
        assert_eq!(heart.styles, None);
        assert_eq!(heart.terms, None);
    }
}
