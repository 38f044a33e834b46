// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried inside application errors)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid workspace '{path}': {reason}")]
    InvalidWorkspace { path: String, reason: String },

    #[error("Empty path supplied for {field}")]
    EmptyPath { field: &'static str },

    #[error("'{path}' is not inside '{base}'")]
    OutsideBase { path: String, base: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("No entry at index {index} in {list} (length {len})")]
    IndexOutOfRange {
        list: &'static str,
        index: usize,
        len: usize,
    },

    // ========================================================================
    // Internal
    // ========================================================================
    #[error("Failed to serialize project document for '{assembly}': {reason}")]
    DocumentSerialization { assembly: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidWorkspace { path, .. } => vec![
                format!("Rename the directory to '{path}~' or pick another one"),
                "Workspace directories must end with '~' so the host build skips them".into(),
            ],
            Self::EmptyPath { field } => vec![format!("Provide a non-empty path for {field}")],
            Self::OutsideBase { base, .. } => vec![
                format!("Pick a directory under '{base}'"),
                "Workspaces are stored relative to the source root".into(),
            ],
            Self::IndexOutOfRange { list, len, .. } => vec![
                format!("{list} currently holds {len} entries (indices start at 0)"),
                "Try: slngen show".into(),
            ],
            Self::DocumentSerialization { .. } => {
                vec!["This is a bug, please report it with the offending configuration".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidWorkspace { .. } | Self::EmptyPath { .. } | Self::OutsideBase { .. } => {
                ErrorCategory::Validation
            }
            Self::IndexOutOfRange { .. } => ErrorCategory::NotFound,
            Self::DocumentSerialization { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
