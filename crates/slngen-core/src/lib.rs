//! slngen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for slngen, which
//! turns a small editable configuration into SDK-style project documents and
//! matching solution-file stanzas.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        slngen-cli (host + editor)       │
//! │       (Fires generation events)         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (SynthesisService, ConfigurationEditor) │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: Filesystem, ConfigurationStore)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    slngen-adapters (Infrastructure)     │
//! │   (LocalFilesystem, JsonFileStore, ..)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ProjectGuid, WorkspacePath, Document)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use slngen_core::prelude::*;
//!
//! # fn run(store: std::sync::Arc<dyn ConfigurationStore>, fs: Box<dyn Filesystem>) -> SlngenResult<()> {
//! let service = SynthesisService::new(store, fs, GeneratorSettings::default());
//! let solution = service.on_solution_file_generated(Path::new("Game.sln"), String::new())?;
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ConfigurationEditor, SynthesisService,
        ports::{ConfigurationStore, Filesystem, GenerationHooks},
        registry,
    };
    pub use crate::domain::{
        ConfigEdit, Configuration, GeneratedProject, GeneratorSettings, PathNormalizer,
        ProjectGuid, WorkspacePath,
    };
    pub use crate::error::{SlngenError, SlngenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
