//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `slngen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: project document writes
//!   - `ConfigurationStore`: configuration snapshot load/save
//!
//! - **Driving (Input) Ports**: Called by the host, implemented by services
//!   - `GenerationHooks`: project/solution regeneration events

pub mod input;
pub mod output;

pub use input::GenerationHooks;
pub use output::{ConfigurationStore, Filesystem};

#[cfg(test)]
pub use output::{MockConfigurationStore, MockFilesystem};
