//! Command handlers. One module per subcommand family; each exposes
//! `execute`.

use std::path::Path;

use crate::error::{CliError, CliResult, IntoCli};

pub mod completions;
pub mod config;
pub mod edit;
pub mod generate;
pub mod init;
pub mod show;

/// Absolute, UTF-8 form of a user-supplied path.
///
/// `.` components are dropped; symlinks and `..` are left alone.
pub(crate) fn absolute_string(path: &Path) -> CliResult<String> {
    let absolute = std::path::absolute(path)
        .with_cli_context(|| format!("Failed to resolve '{}'", path.display()))?;

    absolute
        .to_str()
        .map(str::to_owned)
        .ok_or_else(|| CliError::InvalidInput {
            message: format!("'{}' is not valid UTF-8", absolute.display()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_string_keeps_absolute_input() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = absolute_string(&dir.path().join("Assets/./Scripts~")).unwrap();
        assert!(resolved.ends_with("Scripts~"));
        assert!(!resolved.contains("/./"));
    }
}
