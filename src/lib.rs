// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # fa-enumgen
//!
//! Generates icon enumerations from the latest Font Awesome release.
//!
//! ## Core Concept
//!
//! Font Awesome ships a metadata document (`metadata/icons.json`) describing
//! every icon: its code point, its styles, and the versions that touched it.
//! fa-enumgen turns that document into one enumeration per style, so icons
//! can be referenced by name from typed code:
//!
//! ```text
//! /// <summary>
//! /// Arrow Left
//! /// <para>Styles: solid, regular</para>
//! /// <para>Added in 5.0.0.</para>
//! /// </summary>
//! ArrowLeft = 0xf060,
//! ```
//!
//! The release's webfonts and stylesheet are copied next to the generated
//! files.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fa_enumgen::{run, GeneratorConfig, GithubReleases, TracingSink};
//!
//! let config = GeneratorConfig::default();
//! let provider = GithubReleases::new(&config.asset_suffix);
//! let mut sink = TracingSink::default();
//!
//! let report = run(&config, &provider, &mut sink)?;
//! println!("{}", report.to_report());
//! ```
//!
//! ## Architecture
//!
//! ```text
//!   ArchiveProvider ──► ReleaseArchive ──► icon::load_metadata
//!                             │                    │
//!                             │             select::styles_of
//!                             │                    │
//!                             │          EnumRenderer (minijinja)
//!                             │                    │
//!                        assets::copy_*      <Prefix><Style>.cs
//! ```
//!
//! Identifier problems never stop a run: they are sent to a
//! [`DiagnosticSink`] and generation continues.

pub mod archive;
pub mod assets;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod generate;
pub mod icon;
pub mod render;
pub mod select;
pub mod source;
pub mod templates;
pub mod util;
pub mod version;

// Re-exports
pub use archive::{ArchiveFile, ReleaseArchive};
pub use config::GeneratorConfig;
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, TracingSink};
pub use error::{Error, Result};
pub use generate::{run, write_enums, GeneratedEnum, GenerationReport};
pub use icon::{load_metadata, parse_metadata, IconMetadata, ParseMode};
pub use render::{safe_identifier, EnumRenderer, RenderConfig, RenderedEnum, Target};
pub use select::{select_for_style, styles_of};
pub use source::{ArchiveProvider, GithubReleases, LocalArchive};
pub use util::{reverse_identifier, to_dash_case, to_identifier_case, to_title_case};
pub use version::IconVersion;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
