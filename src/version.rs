//! Version tags from icon change history
//!
//! Change tags carry a varying number of segments (`4.4`, `5.0.0`,
//! `6.0.0-beta1`). Each tag is normalized to a full semantic version for
//! comparison while keeping its original text for display.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, Result};

/// A change tag with its normalized semantic version
///
/// Equality and ordering use the normalized version only, so `5.2` and
/// `5.2.0` compare equal.
#[derive(Debug, Clone)]
pub struct IconVersion {
    text: String,
    version: semver::Version,
}

impl IconVersion {
    /// Parse a change tag, padding missing minor/patch segments with zero
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let (core, suffix) = match trimmed.find(['-', '+']) {
            Some(idx) => trimmed.split_at(idx),
            None => (trimmed, ""),
        };

        let segments: Vec<&str> = core.split('.').collect();
        if segments.len() > 3 || segments.iter().any(|s| s.parse::<u64>().is_err()) {
            return Err(Error::Version(text.to_string()));
        }

        let mut padded = segments.join(".");
        for _ in segments.len()..3 {
            padded.push_str(".0");
        }
        padded.push_str(suffix);

        let version =
            semver::Version::parse(&padded).map_err(|_| Error::Version(text.to_string()))?;
        Ok(Self {
            text: trimmed.to_string(),
            version,
        })
    }

    /// Tag as written in the metadata
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Normalized three-segment form
    pub fn normalized(&self) -> String {
        self.version.to_string()
    }
}

impl PartialEq for IconVersion {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version
    }
}

impl Eq for IconVersion {}

impl PartialOrd for IconVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IconVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.version.cmp(&other.version)
    }
}

impl fmt::Display for IconVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Sort ascending and drop tags whose normalized versions repeat
///
/// The first spelling of a repeated version is kept.
pub fn sorted_unique(versions: &[IconVersion]) -> Vec<&IconVersion> {
    let mut sorted: Vec<&IconVersion> = versions.iter().collect();
    // stable sort keeps document order among equal versions
    sorted.sort();
    sorted.dedup();
    sorted
}
