//! Icon metadata model and parser
//!
//! The metadata document is a JSON object keyed by icon name:
//!
//! ```json
//! {
//!   "arrow-left": {
//!     "label": "Arrow left",
//!     "unicode": "f060",
//!     "styles": ["solid"],
//!     "search": { "terms": ["back", "previous"] },
//!     "changes": ["1.0.0", { "version": "5.0.0" }]
//!   }
//! }
//! ```
//!
//! Records are validated as they are converted; the [`ParseMode`] decides
//! whether an invalid record aborts the load or is skipped.

use std::collections::HashSet;
use std::fmt;
use std::io::Read;
use std::sync::OnceLock;

use regex::Regex;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};
use crate::version::IconVersion;

/// One icon from the metadata document
#[derive(Debug, Clone, PartialEq)]
pub struct IconMetadata {
    /// Kebab-case name, unique within the document
    pub name: String,
    /// Display name
    pub label: String,
    /// Hexadecimal code point, without prefix
    pub unicode: String,
    /// Style tags in document order, never empty
    pub styles: Vec<String>,
    /// Private icons never appear in generated enumerations
    pub private: bool,
    pub search_terms: Vec<String>,
    /// Change history in document order, never empty
    pub changes: Vec<IconVersion>,
}

impl IconMetadata {
    pub fn has_style(&self, style: &str) -> bool {
        self.styles.iter().any(|s| s == style)
    }

    fn from_raw(name: String, raw: RawIcon) -> Result<Self> {
        if !name_pattern().is_match(&name) {
            return Err(Error::invalid_icon(&name, "name must match [a-z0-9-]+"));
        }

        let unicode = raw
            .unicode
            .filter(|u| !u.is_empty())
            .ok_or_else(|| Error::invalid_icon(&name, "missing unicode"))?;
        if !unicode.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::invalid_icon(
                &name,
                format!("unicode '{}' is not hexadecimal", unicode),
            ));
        }

        let mut styles: Vec<String> = Vec::new();
        for style in raw.styles.or(raw.free).unwrap_or_default() {
            if !styles.contains(&style) {
                styles.push(style);
            }
        }
        if styles.is_empty() {
            return Err(Error::invalid_icon(&name, "no styles"));
        }

        if raw.changes.is_empty() {
            return Err(Error::invalid_icon(&name, "no change history"));
        }
        let changes = raw
            .changes
            .iter()
            .map(|change| {
                IconVersion::parse(change.version())
                    .map_err(|e| Error::invalid_icon(&name, e.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            label: raw.label.unwrap_or_else(|| name.clone()),
            unicode,
            styles,
            private: raw.private,
            search_terms: raw.search.and_then(|s| s.terms).unwrap_or_default(),
            changes,
            name,
        })
    }
}

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("^[a-z0-9-]+$").expect("valid icon name pattern"))
}

/// How invalid records are handled while loading metadata
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Abort the load on the first invalid record
    #[default]
    Strict,
    /// Skip invalid records with a warning
    Lenient,
}

/// Load every icon from a metadata document, in document order
pub fn load_metadata<R: Read>(reader: R, mode: ParseMode) -> Result<Vec<IconMetadata>> {
    let document: RawDocument = serde_json::from_reader(reader)?;
    collect_icons(document, mode)
}

/// Load icons from an in-memory metadata document
pub fn parse_metadata(json: &str, mode: ParseMode) -> Result<Vec<IconMetadata>> {
    let document: RawDocument = serde_json::from_str(json)?;
    collect_icons(document, mode)
}

fn collect_icons(document: RawDocument, mode: ParseMode) -> Result<Vec<IconMetadata>> {
    let mut seen = HashSet::new();
    let mut icons = Vec::with_capacity(document.0.len());

    for (name, value) in document.0 {
        let result = if seen.insert(name.clone()) {
            serde_json::from_value::<RawIcon>(value)
                .map_err(|e| Error::invalid_icon(&name, e.to_string()))
                .and_then(|raw| IconMetadata::from_raw(name, raw))
        } else {
            Err(Error::invalid_icon(&name, "duplicate name"))
        };

        match (result, mode) {
            (Ok(icon), _) => icons.push(icon),
            (Err(e), ParseMode::Strict) => return Err(e),
            (Err(e), ParseMode::Lenient) => {
                tracing::warn!(error = %e, "skipping icon");
            }
        }
    }

    tracing::debug!(count = icons.len(), "loaded icon metadata");
    Ok(icons)
}

#[derive(Debug, Deserialize)]
struct RawIcon {
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    unicode: Option<String>,
    #[serde(default)]
    styles: Option<Vec<String>>,
    #[serde(default)]
    free: Option<Vec<String>>,
    #[serde(default)]
    private: bool,
    #[serde(default)]
    search: Option<RawSearch>,
    #[serde(default)]
    changes: Vec<RawChange>,
}

#[derive(Debug, Deserialize)]
struct RawSearch {
    #[serde(default)]
    terms: Option<Vec<String>>,
}

/// A change entry is either a bare tag or an object carrying one
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawChange {
    Tag(String),
    Detailed { version: String },
}

impl RawChange {
    fn version(&self) -> &str {
        match self {
            RawChange::Tag(v) => v,
            RawChange::Detailed { version } => version,
        }
    }
}

/// Top-level object, keeping key order
///
/// Records stay untyped here so a malformed record is reported against its
/// name instead of failing the whole document.
struct RawDocument(Vec<(String, serde_json::Value)>);

impl<'de> Deserialize<'de> for RawDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = RawDocument;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping icon names to icon attributes")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, serde_json::Value>()? {
                    entries.push(entry);
                }
                Ok(RawDocument(entries))
            }
        }

        deserializer.deserialize_map(DocumentVisitor)
    }
}
