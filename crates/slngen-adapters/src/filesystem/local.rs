//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use slngen_core::{application::ports::Filesystem, error::SlngenResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> SlngenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> SlngenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }
}

pub(crate) fn map_io_error(
    path: &Path,
    e: io::Error,
    operation: &str,
) -> slngen_core::error::SlngenError {
    use slngen_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("A~.csproj");
        let fs = LocalFilesystem::new();

        fs.write_file(&path, "first").unwrap();
        fs.write_file(&path, "second").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn write_into_missing_directory_is_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("A~.csproj");

        let err = LocalFilesystem::new().write_file(&path, "x").unwrap_err();
        assert!(err.to_string().contains("Failed to write file"));
    }

    #[test]
    fn create_dir_all_creates_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out/projects");
        let fs = LocalFilesystem::new();

        fs.create_dir_all(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
