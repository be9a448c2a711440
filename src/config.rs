//! Generator configuration
//!
//! Every setting has a default, so a run needs no configuration at all. A
//! YAML file can override any subset of fields:
//!
//! ```yaml
//! output_dir: ../Geta.Optimizely.ContentTypeIcons
//! target: csharp
//! parse_mode: lenient
//! ```

use crate::error::{Error, Result};
use crate::icon::ParseMode;
use crate::render::{RenderConfig, Target};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings for one generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// GitHub owner of the icon repository
    pub owner: String,

    /// GitHub repository name
    pub repository: String,

    /// Suffix identifying the release asset to download
    pub asset_suffix: String,

    /// Metadata document, relative to the archive root
    pub metadata_path: String,

    /// Font folder, relative to the archive root
    pub fonts_dir: String,

    /// Stylesheet, relative to the archive root
    pub stylesheet: String,

    /// Where enumeration files are written
    pub output_dir: PathBuf,

    /// Font destination, relative to `output_dir`
    pub font_destination: PathBuf,

    /// Stylesheet destination, relative to `output_dir`
    pub css_destination: PathBuf,

    /// Prefix for enum type names
    pub enum_prefix: String,

    /// Namespace of generated C# enumerations
    pub namespace: String,

    pub target: Target,

    pub parse_mode: ParseMode,

    /// Copy fonts and stylesheet after generating
    pub copy_assets: bool,

    /// Directory of template overrides (`enums/<target>.jinja`)
    pub template_dir: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let render = RenderConfig::default();
        Self {
            owner: "FortAwesome".into(),
            repository: "Font-Awesome".into(),
            asset_suffix: "-web.zip".into(),
            metadata_path: "metadata/icons.json".into(),
            fonts_dir: "webfonts".into(),
            stylesheet: "css/all.min.css".into(),
            output_dir: PathBuf::from("."),
            font_destination: PathBuf::from("module/ClientResources/fa5/webfonts"),
            css_destination: PathBuf::from("module/ClientResources/fa5/css"),
            enum_prefix: render.enum_prefix,
            namespace: render.namespace,
            target: Target::default(),
            parse_mode: ParseMode::default(),
            copy_assets: true,
            template_dir: None,
        }
    }
}

impl GeneratorConfig {
    /// Parse a YAML configuration; omitted fields keep their defaults
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_norway::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    /// Reject settings that would produce unusable output
    pub fn validate(&self) -> Result<()> {
        if self.owner.is_empty() || self.repository.is_empty() {
            return Err(Error::Config("owner and repository must be set".into()));
        }
        let mut chars = self.enum_prefix.chars();
        let valid_start = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        if !valid_start || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(Error::Config(format!(
                "enum_prefix '{}' is not a valid identifier",
                self.enum_prefix
            )));
        }
        if self.metadata_path.is_empty() || self.stylesheet.is_empty() {
            return Err(Error::Config(
                "metadata_path and stylesheet must be set".into(),
            ));
        }
        Ok(())
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            enum_prefix: self.enum_prefix.clone(),
            namespace: self.namespace.clone(),
        }
    }

    /// Absolute font destination
    pub fn font_output(&self) -> PathBuf {
        self.output_dir.join(&self.font_destination)
    }

    /// Absolute stylesheet destination
    pub fn css_output(&self) -> PathBuf {
        self.output_dir.join(&self.css_destination)
    }
}
