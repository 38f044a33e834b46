//! Application layer for slngen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (SynthesisService, ConfigurationEditor)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Registry**: The process-wide configuration store handle
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod registry;
pub mod services;

// Re-export main services
pub use services::{ConfigurationEditor, SynthesisService};

// Re-export port traits (for adapter implementation)
pub use ports::{ConfigurationStore, Filesystem, GenerationHooks};

pub use error::ApplicationError;
