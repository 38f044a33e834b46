//! Infrastructure adapters for slngen.
//!
//! This crate implements the ports defined in `slngen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod config_store;
pub mod filesystem;

// Re-export commonly used adapters
pub use config_store::{DEFAULT_FEATURE_ID, JsonFileStore, MemoryConfigStore};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
