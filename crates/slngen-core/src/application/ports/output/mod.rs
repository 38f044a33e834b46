//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `slngen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::Configuration;
use crate::error::SlngenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `slngen_adapters::filesystem::LocalFilesystem` (production)
/// - `slngen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SlngenResult<()>;

    /// Write content to a file, replacing any existing file.
    fn write_file(&self, path: &Path, content: &str) -> SlngenResult<()>;
}

/// Port for the persisted configuration.
///
/// Passed explicitly to the services that need it, so nothing looks the
/// store up by name at runtime.
///
/// Implemented by:
/// - `slngen_adapters::config_store::JsonFileStore` (settings file)
/// - `slngen_adapters::config_store::MemoryConfigStore` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait ConfigurationStore: Send + Sync {
    /// Read the current snapshot.
    fn load(&self) -> SlngenResult<Configuration>;

    /// Persist a snapshot, replacing the stored one.
    fn save(&self, configuration: &Configuration) -> SlngenResult<()>;
}
