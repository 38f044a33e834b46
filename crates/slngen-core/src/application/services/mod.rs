//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "regenerate the solution" or "add a workspace".

pub mod configuration_editor;
pub mod synthesis_service;

pub use configuration_editor::ConfigurationEditor;
pub use synthesis_service::SynthesisService;
