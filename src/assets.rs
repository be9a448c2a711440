//! Copy font and stylesheet assets out of the release archive
//!
//! Files are written verbatim by file name, overwriting existing copies.

use std::fs;
use std::path::{Path, PathBuf};

use crate::archive::{ArchiveFile, ReleaseArchive};
use crate::error::Result;

/// Copy every font file under `fonts_dir` into `destination`
pub fn copy_fonts(
    archive: &mut ReleaseArchive,
    fonts_dir: &str,
    destination: &Path,
) -> Result<Vec<PathBuf>> {
    archive
        .files_in(fonts_dir)?
        .iter()
        .map(|file| write_asset(file, destination))
        .collect()
}

/// Copy the single stylesheet matching `stylesheet` into `destination`
pub fn copy_stylesheet(
    archive: &mut ReleaseArchive,
    stylesheet: &str,
    destination: &Path,
) -> Result<PathBuf> {
    let file = archive.single(stylesheet)?;
    write_asset(&file, destination)
}

fn write_asset(file: &ArchiveFile, destination: &Path) -> Result<PathBuf> {
    fs::create_dir_all(destination)?;
    let target = destination.join(&file.file_name);
    tracing::info!(file = %file.file_name, destination = %destination.display(), "copying asset");
    fs::write(&target, &file.contents)?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::tests::build_zip;
    use crate::error::Error;
    use tempfile::TempDir;

    fn archive() -> ReleaseArchive {
        ReleaseArchive::from_bytes(build_zip(&[
            ("fa/", ""),
            ("fa/webfonts/fa-solid-900.woff2", "solid"),
            ("fa/webfonts/fa-regular-400.woff2", "regular"),
            ("fa/css/all.min.css", "min"),
        ]))
        .unwrap()
    }

    #[test]
    fn test_copy_fonts() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("module/webfonts");

        let written = copy_fonts(&mut archive(), "webfonts", &dest).unwrap();

        assert_eq!(written.len(), 2);
        assert_eq!(fs::read(dest.join("fa-solid-900.woff2")).unwrap(), b"solid");
        assert_eq!(fs::read(dest.join("fa-regular-400.woff2")).unwrap(), b"regular");
    }

    #[test]
    fn test_copy_stylesheet_overwrites() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("css");
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("all.min.css"), "old").unwrap();

        let written = copy_stylesheet(&mut archive(), "css/all.min.css", &dest).unwrap();

        assert_eq!(written, dest.join("all.min.css"));
        assert_eq!(fs::read_to_string(&written).unwrap(), "min");
    }

    #[test]
    fn test_missing_stylesheet_aborts() {
        let temp = TempDir::new().unwrap();
        let result = copy_stylesheet(&mut archive(), "css/fontawesome.css", temp.path());
        assert!(matches!(result, Err(Error::StylesheetLookup { .. })));
    }
}
