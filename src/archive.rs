//! Access to a downloaded release archive
//!
//! Release archives wrap everything in one top-level folder
//! (`fontawesome-free-6.5.1-web/`). All lookups are relative to that folder,
//! which is taken from the first entry of the archive.

use std::io::{Cursor, Read};

use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::{Error, Result};

/// An in-memory release archive
pub struct ReleaseArchive {
    zip: ZipArchive<Cursor<Vec<u8>>>,
    root: String,
}

/// A file read out of the archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveFile {
    /// Full path inside the archive
    pub path: String,
    /// File name without directories
    pub file_name: String,
    pub contents: Vec<u8>,
}

impl ReleaseArchive {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::EmptyArchive);
        }
        let mut zip = ZipArchive::new(Cursor::new(bytes))?;
        if zip.is_empty() {
            return Err(Error::EmptyArchive);
        }
        let first = zip.by_index_raw(0)?.name().to_string();
        let root = match first.find('/') {
            Some(idx) => first[..=idx].to_string(),
            None => String::new(),
        };
        tracing::debug!(entries = zip.len(), root = %root, "opened release archive");
        Ok(Self { zip, root })
    }

    /// Top-level folder prefix, including the trailing slash
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Path of an entry relative to the archive root
    pub fn entry_path(&self, relative: &str) -> String {
        format!("{}{}", self.root, relative.trim_start_matches('/'))
    }

    /// Read the metadata document at `relative`
    pub fn metadata(&mut self, relative: &str) -> Result<ArchiveFile> {
        let path = self.entry_path(relative);
        match self.read(&path) {
            Err(Error::Zip(ZipError::FileNotFound)) => Err(Error::MissingEntry(path)),
            other => other,
        }
    }

    /// Every file below the `dir` folder
    pub fn files_in(&mut self, dir: &str) -> Result<Vec<ArchiveFile>> {
        let prefix = format!("{}/", self.entry_path(dir).trim_end_matches('/'));
        let mut paths: Vec<String> = self
            .zip
            .file_names()
            .filter(|name| name.starts_with(&prefix) && !name.ends_with('/'))
            .filter(|name| file_name_of(name).contains('.'))
            .map(str::to_string)
            .collect();

        paths.sort();
        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            files.push(self.read(&path)?);
        }
        Ok(files)
    }

    /// The single entry whose path contains `relative` below the root
    pub fn single(&mut self, relative: &str) -> Result<ArchiveFile> {
        let pattern = self.entry_path(relative);
        let matches: Vec<String> = self
            .zip
            .file_names()
            .filter(|name| name.contains(&pattern))
            .map(str::to_string)
            .collect();

        match matches.as_slice() {
            [path] => {
                let path = path.clone();
                self.read(&path)
            }
            _ => Err(Error::StylesheetLookup {
                pattern,
                found: matches.len(),
            }),
        }
    }

    fn read(&mut self, path: &str) -> Result<ArchiveFile> {
        let mut entry = self.zip.by_name(path)?;
        let mut contents = Vec::new();
        entry.read_to_end(&mut contents)?;
        Ok(ArchiveFile {
            path: path.to_string(),
            file_name: file_name_of(path).to_string(),
            contents,
        })
    }
}

fn file_name_of(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
