//! Configuration Editor - the apply-and-persist path for edits.
//!
//! The synthesizer never mutates configuration. Every change goes through
//! [`ConfigurationEditor::apply`], which saves exactly once per accepted edit
//! and not at all for a rejected one.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::{
    application::ports::ConfigurationStore,
    domain::{ConfigEdit, Configuration},
    error::SlngenResult,
};

/// Applies [`ConfigEdit`] commands against a store.
pub struct ConfigurationEditor {
    store: Arc<dyn ConfigurationStore>,
}

impl ConfigurationEditor {
    pub fn new(store: Arc<dyn ConfigurationStore>) -> Self {
        Self { store }
    }

    /// Current stored snapshot.
    pub fn snapshot(&self) -> SlngenResult<Configuration> {
        self.store.load()
    }

    /// Apply `edit`, persist the result and return it.
    #[instrument(skip_all, fields(edit = ?edit))]
    pub fn apply(&self, edit: ConfigEdit) -> SlngenResult<Configuration> {
        let current = self.store.load()?;

        let next = match edit.apply_to(current) {
            Ok(next) => next,
            Err(e) => {
                warn!(error = %e, "Edit rejected");
                return Err(e.into());
            }
        };

        self.store.save(&next)?;
        info!(workspaces = next.workspaces().len(), "Configuration saved");
        Ok(next)
    }
}
