use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// File extension of every generated project document.
pub const PROJECT_EXTENSION: &str = "csproj";

/// Fixed generator parameters, supplied by the host at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Target runtime moniker written into every project document.
    pub target_framework: String,
    /// Prefix joined in front of each workspace in the compile glob.
    pub source_root: String,
    /// Source file extension selected by the compile glob.
    pub source_extension: String,
    /// Directory the project documents are written to.
    pub output_dir: PathBuf,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            target_framework: "net6.0".into(),
            source_root: "Assets".into(),
            source_extension: "cs".into(),
            output_dir: PathBuf::from("."),
        }
    }
}
