//! End-to-end generation run
//!
//! ```text
//! provider ──► archive bytes ──► ReleaseArchive
//!                                   │
//!                                   ├──► metadata ──► icons ──► per style: select ──► render ──► write
//!                                   │
//!                                   └──► fonts + stylesheet ──► copy
//! ```
//!
//! Styles are processed one at a time in sorted order. Files written before
//! a failure stay on disk.

use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::archive::ReleaseArchive;
use crate::assets;
use crate::config::GeneratorConfig;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::Result;
use crate::icon::{load_metadata, IconMetadata};
use crate::render::EnumRenderer;
use crate::select::{select_for_style, styles_of};
use crate::source::ArchiveProvider;

/// One enumeration file written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedEnum {
    pub style: String,
    pub enum_name: String,
    pub path: PathBuf,
    pub member_count: usize,
    pub version: String,
}

/// Summary of a generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// SHA-256 of the archive the run was based on
    pub archive_sha256: String,
    pub icon_count: usize,
    pub enums: Vec<GeneratedEnum>,
    /// Styles whose icons are all private
    pub skipped_styles: Vec<String>,
    pub assets: Vec<PathBuf>,
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationReport {
    /// Human-readable summary
    pub fn to_report(&self) -> String {
        let mut out = format!(
            "Archive sha256: {}\nIcons: {}\n",
            self.archive_sha256, self.icon_count
        );
        for generated in &self.enums {
            out.push_str(&format!(
                "  {} ({} icons, version {}) -> {}\n",
                generated.enum_name,
                generated.member_count,
                generated.version,
                generated.path.display()
            ));
        }
        for style in &self.skipped_styles {
            out.push_str(&format!("  skipped style '{}': no public icons\n", style));
        }
        out.push_str(&format!("Assets copied: {}\n", self.assets.len()));
        if !self.diagnostics.is_empty() {
            out.push_str(&format!(
                "Identifier diagnostics: {} (review the warnings above)\n",
                self.diagnostics.len()
            ));
        }
        out
    }
}

/// Keeps a copy of diagnostics on their way to the caller's sink
struct RecordingSink<'a> {
    inner: &'a mut dyn DiagnosticSink,
    recorded: Vec<Diagnostic>,
}

impl DiagnosticSink for RecordingSink<'_> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.recorded.push(diagnostic.clone());
        self.inner.report(diagnostic);
    }
}

/// Fetch the latest archive, generate every enumeration and copy assets
pub fn run(
    config: &GeneratorConfig,
    provider: &dyn ArchiveProvider,
    sink: &mut dyn DiagnosticSink,
) -> Result<GenerationReport> {
    config.validate()?;

    let bytes = provider.fetch_latest(&config.owner, &config.repository)?;
    let archive_sha256 = hex::encode(Sha256::digest(&bytes));
    tracing::info!(sha256 = %archive_sha256, bytes = bytes.len(), "archive received");

    let mut archive = ReleaseArchive::from_bytes(bytes)?;
    let metadata = archive.metadata(&config.metadata_path)?;
    tracing::info!(path = %metadata.path, "loading metadata");
    let icons = load_metadata(metadata.contents.as_slice(), config.parse_mode)?;

    let mut renderer = EnumRenderer::with_config(config.target, config.render_config())?;
    if let Some(dir) = &config.template_dir {
        renderer = renderer.with_template_dir(dir)?;
    }

    let mut report = GenerationReport {
        archive_sha256,
        icon_count: icons.len(),
        ..Default::default()
    };

    let mut recording = RecordingSink {
        inner: sink,
        recorded: Vec::new(),
    };
    write_enums(
        &icons,
        &renderer,
        &config.output_dir,
        &mut recording,
        &mut report,
    )?;
    report.diagnostics = recording.recorded;

    if config.copy_assets {
        report.assets = assets::copy_fonts(&mut archive, &config.fonts_dir, &config.font_output())?;
        report.assets.push(assets::copy_stylesheet(
            &mut archive,
            &config.stylesheet,
            &config.css_output(),
        )?);
    }

    Ok(report)
}

/// Render and write one enumeration per style
pub fn write_enums(
    icons: &[IconMetadata],
    renderer: &EnumRenderer,
    output_dir: &Path,
    sink: &mut dyn DiagnosticSink,
    report: &mut GenerationReport,
) -> Result<()> {
    fs::create_dir_all(output_dir)?;

    for style in styles_of(icons) {
        let selected = select_for_style(icons, style);
        if selected.is_empty() {
            tracing::warn!(style, "no public icons, skipping");
            report.skipped_styles.push(style.to_string());
            continue;
        }

        let rendered = renderer.render(style, &selected, sink)?;
        let path = output_dir.join(&rendered.file_name);
        tracing::info!(enum_name = %rendered.enum_name, icons = rendered.member_count, "generating");
        fs::write(&path, &rendered.source)?;

        report.enums.push(GeneratedEnum {
            style: rendered.style,
            enum_name: rendered.enum_name,
            path,
            member_count: rendered.member_count,
            version: rendered.version,
        });
    }

    Ok(())
}
