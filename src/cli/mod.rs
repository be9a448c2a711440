//! Command-line arguments
//!
//! Flags override values from the optional configuration file, which in
//! turn override the built-in defaults.

use std::path::PathBuf;

use clap::Parser;
use fa_enumgen::{GeneratorConfig, ParseMode, Result, Target};

/// Generate icon enumerations from the latest Font Awesome release
#[derive(Parser, Debug)]
#[command(name = "fa-enumgen", version, about, long_about = None)]
pub struct Cli {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory for generated enumerations (default: current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Use a local release archive instead of downloading
    #[arg(long)]
    pub archive: Option<PathBuf>,

    /// Target language
    #[arg(short, long, value_enum)]
    pub target: Option<Target>,

    /// Skip invalid icon records instead of aborting
    #[arg(long, default_value_t = false)]
    pub lenient: bool,

    /// Do not copy webfonts and stylesheet
    #[arg(long, default_value_t = false)]
    pub no_assets: bool,

    /// Directory containing template overrides (enums/<target>.jinja)
    #[arg(long)]
    pub template_dir: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    /// Build the run configuration from the file (if any) and flags
    pub fn to_config(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::load(path)?,
            None => GeneratorConfig::default(),
        };

        if let Some(output) = &self.output {
            config.output_dir = output.clone();
        }
        if let Some(target) = self.target {
            config.target = target;
        }
        if self.lenient {
            config.parse_mode = ParseMode::Lenient;
        }
        if self.no_assets {
            config.copy_assets = false;
        }
        if let Some(dir) = &self.template_dir {
            config.template_dir = Some(dir.clone());
        }

        config.validate()?;
        Ok(config)
    }
}
