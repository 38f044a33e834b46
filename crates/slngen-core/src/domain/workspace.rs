//! Workspace paths and path normalization.
//!
//! Users pick directories and files with absolute paths; the configuration
//! stores them relative to a base directory with forward slashes only.

use std::fmt;

use crate::domain::error::DomainError;

/// Suffix every workspace directory carries so the host skips it in its own
/// native build.
pub const WORKSPACE_MARKER: char = '~';

/// A root-relative workspace directory.
///
/// Invariant: forward slashes only, final segment ends with
/// [`WORKSPACE_MARKER`]. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkspacePath(String);

impl WorkspacePath {
    /// Validate an already-relative path.
    pub fn parse(path: impl AsRef<str>) -> Result<Self, DomainError> {
        let normalized = PathNormalizer::normalize_separators(path.as_ref());
        let trimmed = normalized.trim_end_matches('/');

        if trimmed.is_empty() {
            return Err(DomainError::EmptyPath { field: "workspace" });
        }

        if PathNormalizer::is_rooted(trimmed) {
            return Err(DomainError::InvalidWorkspace {
                path: trimmed.to_string(),
                reason: "path must be relative to the source root".into(),
            });
        }

        let last = trimmed.rsplit('/').next().unwrap_or(trimmed);
        if !last.ends_with(WORKSPACE_MARKER) {
            return Err(DomainError::InvalidWorkspace {
                path: trimmed.to_string(),
                reason: format!(
                    "directory name must end with '{WORKSPACE_MARKER}' so the host build excludes it"
                ),
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Relativize `absolute` against `base`, then validate.
    ///
    /// Fails with [`DomainError::OutsideBase`] when `absolute` does not live
    /// under `base`.
    pub fn from_absolute(absolute: &str, base: &str) -> Result<Self, DomainError> {
        let relative = PathNormalizer::strip_base(absolute, base).ok_or_else(|| {
            DomainError::OutsideBase {
                path: PathNormalizer::normalize_separators(absolute),
                base: PathNormalizer::normalize_separators(base),
            }
        })?;
        Self::parse(relative)
    }

    /// Name used for the generated project file and its display name.
    pub fn assembly_name(&self) -> String {
        PathNormalizer::to_assembly_name(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for WorkspacePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for WorkspacePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Path rules shared by the edit surface and the synthesizer.
pub struct PathNormalizer;

impl PathNormalizer {
    /// Strip `base`, normalize separators and enforce the workspace marker.
    pub fn to_relative(absolute: &str, base: &str) -> Result<String, DomainError> {
        WorkspacePath::from_absolute(absolute, base).map(WorkspacePath::into_string)
    }

    /// Strip `base` and normalize separators, without the workspace rule.
    ///
    /// Paths outside `base` are returned normalized but otherwise unchanged.
    pub fn relativize(absolute: &str, base: &str) -> String {
        Self::strip_base(absolute, base).unwrap_or_else(|| Self::normalize_separators(absolute))
    }

    /// `absolute` relative to `base`, or `None` when it is not under `base`.
    /// An empty `base` accepts every path as is.
    pub fn strip_base(absolute: &str, base: &str) -> Option<String> {
        let absolute = Self::normalize_separators(absolute);
        let base = Self::normalize_separators(base);
        let base = base.trim_end_matches('/');

        if base.is_empty() {
            return Some(absolute);
        }

        match absolute.strip_prefix(base) {
            Some("") => Some(String::new()),
            Some(rest) if rest.starts_with('/') => Some(rest.trim_start_matches('/').to_string()),
            _ => None,
        }
    }

    /// `/x`, `C:/x` and `C:x` style paths.
    pub fn is_rooted(path: &str) -> bool {
        let bytes = path.as_bytes();
        path.starts_with(['/', '\\'])
            || (bytes.len() >= 2 && bytes[1] == b':' && bytes[0].is_ascii_alphabetic())
    }

    /// Replace every path separator with `.`.
    pub fn to_assembly_name(workspace: &str) -> String {
        workspace.replace(['/', '\\'], ".")
    }

    pub fn normalize_separators(path: &str) -> String {
        path.replace('\\', "/")
    }

    /// Join two relative fragments with a single `/`.
    pub fn join(base: &str, relative: &str) -> String {
        let base = Self::normalize_separators(base);
        let relative = Self::normalize_separators(relative);
        let base = base.trim_end_matches('/');

        if base.is_empty() {
            relative
        } else {
            format!("{base}/{}", relative.trim_start_matches('/'))
        }
    }

    /// File name without directory or extension: `Plugins/Foo.dll` -> `Foo`.
    pub fn file_stem(path: &str) -> &str {
        let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
        match name.rsplit_once('.') {
            Some((stem, _)) => stem,
            None => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_workspace_from_unix_path() {
        let rel = PathNormalizer::to_relative("/home/me/Game/Assets/Scripts~", "/home/me/Game/Assets");
        assert_eq!(rel.unwrap(), "Scripts~");
    }

    #[test]
    fn relative_workspace_from_windows_path() {
        let rel = PathNormalizer::to_relative(
            r"C:\Projects\Game\Assets\Shaders\Common~",
            r"C:\Projects\Game\Assets\",
        );
        assert_eq!(rel.unwrap(), "Shaders/Common~");
    }

    #[test]
    fn rejects_missing_marker() {
        let err = PathNormalizer::to_relative("/game/Assets/Scripts", "/game/Assets").unwrap_err();
        assert!(matches!(err, DomainError::InvalidWorkspace { .. }));
        assert!(err.to_string().contains("~"));
    }

    #[test]
    fn marker_must_be_on_final_segment() {
        assert!(WorkspacePath::parse("Shaders~/Common").is_err());
        assert!(WorkspacePath::parse("Shaders/Common~").is_ok());
    }

    #[test]
    fn trailing_slash_is_ignored() {
        assert_eq!(WorkspacePath::parse("Scripts~/").unwrap().as_str(), "Scripts~");
    }

    #[test]
    fn empty_workspace_rejected() {
        assert_eq!(
            WorkspacePath::from_absolute("/game/Assets", "/game/Assets"),
            Err(DomainError::EmptyPath { field: "workspace" })
        );
    }

    #[test]
    fn workspace_outside_base_rejected() {
        let err = WorkspacePath::from_absolute("/elsewhere/X~", "/game/Assets").unwrap_err();
        assert_eq!(
            err,
            DomainError::OutsideBase {
                path: "/elsewhere/X~".into(),
                base: "/game/Assets".into(),
            }
        );

        assert!(matches!(
            PathNormalizer::to_relative(r"D:\Other\Lib~", r"C:\Game\Assets"),
            Err(DomainError::OutsideBase { .. })
        ));
        assert!(matches!(
            PathNormalizer::to_relative("/game/AssetsExtra/X~", "/game/Assets"),
            Err(DomainError::OutsideBase { .. })
        ));
    }

    #[test]
    fn rooted_workspace_rejected() {
        assert!(matches!(
            WorkspacePath::parse("/elsewhere/X~"),
            Err(DomainError::InvalidWorkspace { .. })
        ));
        assert!(matches!(
            WorkspacePath::parse(r"C:\Other\X~"),
            Err(DomainError::InvalidWorkspace { .. })
        ));
        assert!(WorkspacePath::from_absolute("/elsewhere/X~", "").is_err());
    }

    #[test]
    fn path_outside_base_is_kept() {
        assert_eq!(
            PathNormalizer::relativize("/elsewhere/Lib.dll", "/game/Assets"),
            "/elsewhere/Lib.dll"
        );
    }

    #[test]
    fn base_prefix_must_end_on_segment_boundary() {
        assert_eq!(
            PathNormalizer::relativize("/game/AssetsExtra/Lib.dll", "/game/Assets"),
            "/game/AssetsExtra/Lib.dll"
        );
    }

    #[test]
    fn assembly_name_replaces_both_separators() {
        assert_eq!(PathNormalizer::to_assembly_name("Shaders/Common~"), "Shaders.Common~");
        assert_eq!(PathNormalizer::to_assembly_name(r"Shaders\Common~"), "Shaders.Common~");
        assert_eq!(
            WorkspacePath::parse("a/b/c~").unwrap().assembly_name(),
            "a.b.c~"
        );
    }

    #[test]
    fn join_handles_empty_base() {
        assert_eq!(PathNormalizer::join("", "Plugins/Foo.dll"), "Plugins/Foo.dll");
        assert_eq!(PathNormalizer::join("Assets/", "Plugins/Foo.dll"), "Assets/Plugins/Foo.dll");
        assert_eq!(PathNormalizer::join(r"Assets\Lib", "Foo.dll"), "Assets/Lib/Foo.dll");
    }

    #[test]
    fn file_stem_strips_directory_and_extension() {
        assert_eq!(PathNormalizer::file_stem("Plugins/Foo.dll"), "Foo");
        assert_eq!(PathNormalizer::file_stem(r"Plugins\Foo.Bar.dll"), "Foo.Bar");
        assert_eq!(PathNormalizer::file_stem("NoExtension"), "NoExtension");
    }
}
