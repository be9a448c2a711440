//! Identifier case conversions
//!
//! Icon names arrive in kebab-case (`arrow-left`) and become PascalCase enum
//! members (`ArrowLeft`). The reverse conversion exists only to check that a
//! generated identifier still maps back to the icon it came from.

/// Title-case a phrase, keeping every delimiter in place
///
/// The first letter of each word is upper-cased and the rest lower-cased.
/// Words are separated by whitespace or punctuation; apostrophes stay inside
/// a word.
///
/// # Examples
/// ```
/// use fa_enumgen::util::to_title_case;
/// assert_eq!(to_title_case("font awesome"), "Font Awesome");
/// assert_eq!(to_title_case("arrow-left"), "Arrow-Left");
/// ```
pub fn to_title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut word_start = true;
    for c in s.chars() {
        if word_start {
            result.extend(c.to_uppercase());
        } else {
            result.extend(c.to_lowercase());
        }
        word_start = is_word_boundary(c);
    }
    result
}

fn is_word_boundary(c: char) -> bool {
    c.is_whitespace() || (c.is_ascii_punctuation() && c != '\'')
}

/// Convert a kebab-case name to a PascalCase identifier
///
/// A leading digit gets an underscore prefix so the result is a valid
/// identifier in C# and TypeScript.
///
/// # Examples
/// ```
/// use fa_enumgen::util::to_identifier_case;
/// assert_eq!(to_identifier_case("arrow-left"), "ArrowLeft");
/// assert_eq!(to_identifier_case("500px"), "_500px");
/// ```
pub fn to_identifier_case(s: &str) -> String {
    let name = to_title_case(&s.replace('-', " ")).replace(' ', "");
    match name.chars().next() {
        Some(c) if c.is_ascii_digit() => format!("_{}", name),
        _ => name,
    }
}

/// Convert a PascalCase identifier back to kebab-case
///
/// # Examples
/// ```
/// use fa_enumgen::util::to_dash_case;
/// assert_eq!(to_dash_case("ArrowLeft"), "arrow-left");
/// assert_eq!(to_dash_case("_1Password"), "_1-password");
/// ```
pub fn to_dash_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;
    for c in s.chars() {
        if c.is_uppercase() && !matches!(prev, None | Some('_')) {
            result.push('-');
        }
        result.extend(c.to_lowercase());
        prev = Some(c);
    }
    result
}

/// Recover the kebab-case name an identifier was derived from
///
/// Inverse of [`to_identifier_case`] for well-formed names. Callers compare
/// the result with the original name to detect ambiguous conversions.
pub fn reverse_identifier(identifier: &str) -> String {
    let dashed = to_dash_case(identifier);
    match dashed.strip_prefix('_') {
        Some(rest) => rest.to_string(),
        None => dashed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_title_case() {
        assert_eq!(to_title_case("font awesome"), "Font Awesome");
        assert_eq!(to_title_case("arrow-left"), "Arrow-Left");
        assert_eq!(to_title_case("ARROW left"), "Arrow Left");
        assert_eq!(to_title_case("men's room"), "Men's Room");
        assert_eq!(to_title_case("500px"), "500px");
        assert_eq!(to_title_case(""), "");
    }

    #[test]
    fn test_to_identifier_case() {
        assert_eq!(to_identifier_case("arrow-left"), "ArrowLeft");
        assert_eq!(to_identifier_case("address-book"), "AddressBook");
        assert_eq!(to_identifier_case("500px"), "_500px");
        assert_eq!(to_identifier_case("42-group"), "_42Group");
        assert_eq!(to_identifier_case("solid"), "Solid");
        assert_eq!(to_identifier_case(""), "");
    }

    #[test]
    fn test_to_dash_case() {
        assert_eq!(to_dash_case("ArrowLeft"), "arrow-left");
        assert_eq!(to_dash_case("Ad"), "ad");
        assert_eq!(to_dash_case("_42Group"), "_42-group");
        assert_eq!(to_dash_case(""), "");
    }

    #[test]
    fn test_reverse_identifier() {
        assert_eq!(reverse_identifier("ArrowLeft"), "arrow-left");
        assert_eq!(reverse_identifier("_500px"), "500px");
        assert_eq!(reverse_identifier("_42Group"), "42-group");
    }

    #[test]
    fn test_ambiguous_names_do_not_round_trip() {
        // Digits after a hyphen lose the hyphen
        let id = to_identifier_case("arrow-down-1-9");
        assert_eq!(id, "ArrowDown19");
        assert_ne!(reverse_identifier(&id), "arrow-down-1-9");
    }
}
