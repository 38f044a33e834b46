//! Settings-file configuration store.
//!
//! The settings file is a JSON object keyed by feature id, shared with other
//! tools that keep their own entries in it:
//!
//! ```json
//! {
//!   "slngen": {
//!     "Location": "",
//!     "Workspaces": ["Scripts~"],
//!     "ReferenceAssemblies": ["Plugins/Foo.dll"],
//!     "ReferenceProjects": []
//!   },
//!   "some.other.feature": "..."
//! }
//! ```
//!
//! Entries stored as a JSON-encoded string instead of an object are accepted
//! on load. Saving always writes an object and leaves other keys untouched.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, instrument};

use slngen_core::{
    application::{ApplicationError, ports::ConfigurationStore},
    domain::Configuration,
    error::SlngenResult,
};

use crate::filesystem::map_io_error;

/// Key used when no feature id is configured.
pub const DEFAULT_FEATURE_ID: &str = "slngen";

/// [`ConfigurationStore`] backed by one entry of a JSON settings file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    feature_id: String,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            feature_id: DEFAULT_FEATURE_ID.into(),
        }
    }

    pub fn with_feature_id(mut self, feature_id: impl Into<String>) -> Self {
        self.feature_id = feature_id.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn feature_id(&self) -> &str {
        &self.feature_id
    }

    fn read_document(&self) -> SlngenResult<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let text = std::fs::read_to_string(&self.path)
            .map_err(|e| map_io_error(&self.path, e, "read settings"))?;
        if text.trim().is_empty() {
            return Ok(Map::new());
        }

        serde_json::from_str(&text).map_err(|e| store_error(&self.path, e))
    }
}

impl ConfigurationStore for JsonFileStore {
    #[instrument(skip_all, fields(path = %self.path.display(), feature = %self.feature_id))]
    fn load(&self) -> SlngenResult<Configuration> {
        let document = self.read_document()?;

        let configuration = match document.get(&self.feature_id) {
            None | Some(Value::Null) => Configuration::default(),
            Some(Value::String(encoded)) => {
                serde_json::from_str(encoded).map_err(|e| store_error(&self.path, e))?
            }
            Some(value) => {
                serde_json::from_value(value.clone()).map_err(|e| store_error(&self.path, e))?
            }
        };

        debug!(
            workspaces = configuration.workspaces().len(),
            "Configuration loaded"
        );
        Ok(configuration)
    }

    #[instrument(skip_all, fields(path = %self.path.display(), feature = %self.feature_id))]
    fn save(&self, configuration: &Configuration) -> SlngenResult<()> {
        let mut document = self.read_document()?;
        let value = serde_json::to_value(configuration).map_err(|e| store_error(&self.path, e))?;
        document.insert(self.feature_id.clone(), value);

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| map_io_error(parent, e, "create directory"))?;
            }
        }

        let mut text = serde_json::to_string_pretty(&Value::Object(document))
            .map_err(|e| store_error(&self.path, e))?;
        text.push('\n');

        std::fs::write(&self.path, text).map_err(|e| map_io_error(&self.path, e, "write settings"))?;
        debug!("Configuration saved");
        Ok(())
    }
}

fn store_error(path: &Path, e: serde_json::Error) -> slngen_core::error::SlngenError {
    ApplicationError::StoreError {
        reason: format!("{}: {}", path.display(), e),
    }
    .into()
}
