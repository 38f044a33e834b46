//! Process-wide configuration store handle.
//!
//! The host installs its store once at startup with [`install`]; code that
//! cannot receive the store through a constructor reads it with [`current`].
//! Tests call [`reset`] to return to the uninstalled state.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::{
    application::{ApplicationError, ports::ConfigurationStore},
    error::SlngenResult,
};

static STORE: RwLock<Option<Arc<dyn ConfigurationStore>>> = RwLock::new(None);

/// Install the process-wide store, returning the one it replaces.
pub fn install(store: Arc<dyn ConfigurationStore>) -> Option<Arc<dyn ConfigurationStore>> {
    debug!("Configuration store installed");
    STORE
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .replace(store)
}

/// The installed store.
pub fn current() -> SlngenResult<Arc<dyn ConfigurationStore>> {
    let guard = STORE
        .read()
        .map_err(|_| ApplicationError::StoreLockError)?;

    guard.clone().ok_or_else(|| {
        ApplicationError::AdapterNotConfigured {
            name: "configuration store",
        }
        .into()
    })
}

/// Drop the installed store.
pub fn reset() {
    STORE
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .take();
}
