//! Non-fatal findings raised while rendering
//!
//! The renderer never prints. It reports through a [`DiagnosticSink`] passed
//! in by the caller, so the binary can log findings while tests inspect them.

use std::fmt;

/// Log target for diagnostics forwarded by [`TracingSink`]
pub const DIAGNOSTICS_TARGET: &str = "fa_enumgen::diagnostics";

/// A finding that needs human review but does not stop generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The generated identifier does not convert back to the icon name
    RoundTripMismatch {
        style: String,
        name: String,
        identifier: String,
        reversed: String,
    },
    /// Two icons in one enumeration produced the same identifier
    DuplicateIdentifier {
        style: String,
        identifier: String,
        first: String,
        second: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::RoundTripMismatch {
                style,
                name,
                identifier,
                reversed,
            } => write!(f, "[{}] {}\t!=\t{}\t{}", style, name, reversed, identifier),
            Diagnostic::DuplicateIdentifier {
                style,
                identifier,
                first,
                second,
            } => write!(
                f,
                "[{}] {} and {} both map to {}",
                style, first, second, identifier
            ),
        }
    }
}

/// Receiver for diagnostics
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Stores diagnostics in memory
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

/// Forwards diagnostics to `tracing` at WARN under [`DIAGNOSTICS_TARGET`]
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(target: DIAGNOSTICS_TARGET, "{}", diagnostic);
    }
}
