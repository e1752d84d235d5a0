//! Writing a composed page to disk.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from writing an exported page.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The output directory could not be created.
    #[error("failed to create directory {path}: {source}")]
    DirectoryError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The page could not be written.
    #[error("failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write `html` to `path` atomically.
///
/// The page is written to a temporary file in the target directory and
/// renamed over `path`, so an existing page is never left half written.
pub fn export_page(path: &Path, html: &str) -> Result<(), ExportError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| ExportError::DirectoryError {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let write_error = |source| ExportError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    let mut temp_file = tempfile::NamedTempFile::new_in(dir).map_err(write_error)?;
    temp_file.write_all(html.as_bytes()).map_err(write_error)?;
    temp_file.flush().map_err(write_error)?;
    temp_file
        .persist(path)
        .map_err(|e| write_error(e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_export_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("site").join("public").join("index.html");

        export_page(&path, "<html></html>").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<html></html>");
    }

    #[test]
    fn test_export_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("index.html");

        export_page(&path, "first").unwrap();
        export_page(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        // No temp files left behind
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_export_into_directory_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let err = export_page(temp_dir.path(), "x").unwrap_err();
        assert!(matches!(err, ExportError::WriteError { .. }));
    }
}
