//! Unified error handling for slngen core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for slngen core operations.
#[derive(Debug, Error, Clone)]
pub enum SlngenError {
    /// Errors from the domain layer (validation failures).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl SlngenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// Solution text produced before an interrupted generation pass, if any.
    pub fn partial_content(&self) -> Option<&str> {
        match self {
            Self::Application(ApplicationError::GenerationInterrupted {
                partial_content, ..
            }) => Some(partial_content),
            _ => None,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type SlngenResult<T> = Result<T, SlngenError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn domain_category_maps_through() {
        let err: SlngenError = DomainError::EmptyPath { field: "workspace" }.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn partial_content_only_for_interrupted_generation() {
        let interrupted: SlngenError = ApplicationError::GenerationInterrupted {
            workspace: "B~".into(),
            completed: 1,
            partial_content: "header".into(),
            reason: "disk full".into(),
        }
        .into();
        assert_eq!(interrupted.partial_content(), Some("header"));

        let io: SlngenError = ApplicationError::FilesystemError {
            path: PathBuf::from("A~.csproj"),
            reason: "denied".into(),
        }
        .into();
        assert_eq!(io.partial_content(), None);
    }
}
