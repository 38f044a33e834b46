//! In-memory configuration store.

use std::sync::{
    Arc, RwLock,
    atomic::{AtomicUsize, Ordering},
};

use slngen_core::{
    application::{ApplicationError, ports::ConfigurationStore},
    domain::Configuration,
    error::SlngenResult,
};

/// Thread-safe in-memory store. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigStore {
    inner: Arc<RwLock<Configuration>>,
    saves: Arc<AtomicUsize>,
}

impl MemoryConfigStore {
    /// Create a new store holding the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `configuration`.
    pub fn with_configuration(configuration: Configuration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(configuration)),
            saves: Arc::default(),
        }
    }

    /// How many times `save` succeeded.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl ConfigurationStore for MemoryConfigStore {
    fn load(&self) -> SlngenResult<Configuration> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.clone())
    }

    fn save(&self, configuration: &Configuration) -> SlngenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        *inner = configuration.clone();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
