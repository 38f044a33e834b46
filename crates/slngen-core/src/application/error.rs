//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The configuration store could not be read or written.
    #[error("Configuration store error: {reason}")]
    StoreError { reason: String },

    /// Store access failed (lock poisoned).
    #[error("Configuration store lock poisoned")]
    StoreLockError,

    /// Port/Adapter not configured.
    #[error("Required adapter not configured: {name}")]
    AdapterNotConfigured { name: &'static str },

    /// A project document write failed part-way through a generation pass.
    ///
    /// Documents written before the failure stay on disk. `partial_content`
    /// is the solution text with the stanzas of those workspaces appended.
    #[error("Generation stopped at workspace '{workspace}' after {completed} project(s): {reason}")]
    GenerationInterrupted {
        workspace: String,
        completed: usize,
        partial_content: String,
        reason: String,
    },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::StoreError { .. } => vec![
                "Check that the settings file is valid JSON".into(),
                "Try: slngen config path".into(),
            ],
            Self::AdapterNotConfigured { name } => vec![
                format!("Required component not configured: {}", name),
                "This is likely a configuration error".into(),
            ],
            Self::GenerationInterrupted { completed, .. } => vec![
                format!("{completed} project document(s) were written before the failure"),
                "Fix the cause and regenerate; documents are overwritten".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::GenerationInterrupted { .. } => {
                ErrorCategory::Internal
            }
            Self::StoreError { .. } | Self::AdapterNotConfigured { .. } => {
                ErrorCategory::Configuration
            }
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
