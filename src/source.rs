//! Release archive providers
//!
//! The generator only needs the bytes of the latest release archive. Where
//! they come from is behind [`ArchiveProvider`]: GitHub releases for normal
//! runs, a local file for offline runs and tests.

use std::path::PathBuf;

use self_update::backends::github;

use crate::error::{Error, Result};
use crate::version::IconVersion;

/// Supplies the bytes of a repository's latest release archive
pub trait ArchiveProvider {
    fn fetch_latest(&self, owner: &str, repository: &str) -> Result<Vec<u8>>;
}

/// Downloads the newest GitHub release asset whose name ends in a suffix
#[derive(Debug, Clone)]
pub struct GithubReleases {
    asset_suffix: String,
    show_progress: bool,
}

impl GithubReleases {
    pub fn new(asset_suffix: impl Into<String>) -> Self {
        Self {
            asset_suffix: asset_suffix.into(),
            show_progress: false,
        }
    }

    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }
}

impl ArchiveProvider for GithubReleases {
    fn fetch_latest(&self, owner: &str, repository: &str) -> Result<Vec<u8>> {
        tracing::info!(owner, repository, "fetching release list");

        let releases: Vec<ReleaseInfo> = github::ReleaseList::configure()
            .repo_owner(owner)
            .repo_name(repository)
            .build()
            .map_err(download_error)?
            .fetch()
            .map_err(download_error)?
            .into_iter()
            .map(ReleaseInfo::from)
            .collect();

        let (release, asset) = pick_latest(&releases, &self.asset_suffix).ok_or_else(|| {
            Error::Download(format!(
                "no release of {}/{} has an asset ending in '{}'",
                owner, repository, self.asset_suffix
            ))
        })?;
        tracing::info!(version = %release.version, asset = %asset.name, "downloading release archive");

        let mut bytes = Vec::new();
        self_update::Download::from_url(&asset.download_url)
            .set_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("application/octet-stream"),
            )
            .show_progress(self.show_progress)
            .download_to(&mut bytes)
            .map_err(download_error)?;

        tracing::debug!(bytes = bytes.len(), "download complete");
        Ok(bytes)
    }
}

fn download_error(e: self_update::errors::Error) -> Error {
    Error::Download(e.to_string())
}

/// Reads an archive already on disk, ignoring owner and repository
#[derive(Debug, Clone)]
pub struct LocalArchive {
    path: PathBuf,
}

impl LocalArchive {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ArchiveProvider for LocalArchive {
    fn fetch_latest(&self, _owner: &str, _repository: &str) -> Result<Vec<u8>> {
        tracing::info!(path = %self.path.display(), "reading local archive");
        std::fs::read(&self.path)
            .map_err(|e| Error::Download(format!("cannot read {}: {}", self.path.display(), e)))
    }
}

/// Release summary used to choose what to download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInfo {
    pub version: String,
    pub assets: Vec<AssetInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetInfo {
    pub name: String,
    pub download_url: String,
}

impl From<self_update::update::Release> for ReleaseInfo {
    fn from(release: self_update::update::Release) -> Self {
        Self {
            version: release.version,
            assets: release
                .assets
                .into_iter()
                .map(|a| AssetInfo {
                    name: a.name,
                    download_url: a.download_url,
                })
                .collect(),
        }
    }
}

/// Highest-versioned release with an asset ending in `suffix`
///
/// Releases whose version does not parse are ignored.
pub fn pick_latest<'a>(
    releases: &'a [ReleaseInfo],
    suffix: &str,
) -> Option<(&'a ReleaseInfo, &'a AssetInfo)> {
    releases
        .iter()
        .filter_map(|release| {
            let version = IconVersion::parse(release.version.trim_start_matches('v')).ok()?;
            let asset = release.assets.iter().find(|a| a.name.ends_with(suffix))?;
            Some((version, release, asset))
        })
        .max_by(|a, b| a.0.cmp(&b.0))
        .map(|(_, release, asset)| (release, asset))
}
