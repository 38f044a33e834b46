//! Configuration store adapters.

mod json_file;
mod memory;

pub use json_file::{DEFAULT_FEATURE_ID, JsonFileStore};
pub use memory::MemoryConfigStore;
