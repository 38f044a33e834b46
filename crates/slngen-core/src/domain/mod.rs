// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for slngen.
//!
//! Pure logic only. Writing documents and loading configuration are
//! handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable snapshots**: `Configuration` changes only through `ConfigEdit`
//! - **Deterministic**: the same snapshot always produces the same bytes
//!
pub mod configuration;
pub mod error;
pub mod identity;
pub mod project_document;
pub mod settings;
pub mod solution;
pub mod workspace;

// Re-exports for convenience
pub use configuration::{ConfigEdit, Configuration};
pub use error::{DomainError, ErrorCategory};
pub use identity::ProjectGuid;
pub use project_document::{AssemblyReference, GeneratedProject, ProjectDocument};
pub use settings::{GeneratorSettings, PROJECT_EXTENSION};
pub use solution::{LineEnding, SDK_PROJECT_TYPE_GUID, SolutionStanza};
pub use workspace::{PathNormalizer, WORKSPACE_MARKER, WorkspacePath};

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Workspace -> project
    // ========================================================================

    #[test]
    fn single_workspace_example() {
        let cfg = Configuration::new("")
            .with_workspace("Scripts~")
            .with_reference_assembly("Plugins/Foo.dll");

        let project =
            GeneratedProject::for_workspace("Scripts~", &cfg, &GeneratorSettings::default())
                .unwrap();

        assert_eq!(project.file_name(), "Scripts~.csproj");
        assert!(project.document().contains(r#"<Reference Include="Foo">"#));
        assert!(project.document().contains("<HintPath>Assets/Plugins/Foo.dll</HintPath>"));
        assert!(project.document().contains("Scripts~/**/*"));

        let stanza = project.stanza().render(LineEnding::Lf);
        assert!(stanza.contains(r#""Scripts~", "Scripts~.csproj""#));
        assert!(stanza.contains(&ProjectGuid::derive("Scripts~").braced()));
    }

    #[test]
    fn references_are_shared_by_every_workspace() {
        let cfg = Configuration::default()
            .with_workspace("A~")
            .with_workspace("B~")
            .with_reference_assembly("Foo.dll")
            .with_reference_project("Shared/Shared.csproj");
        let settings = GeneratorSettings::default();

        let a = ProjectDocument::for_workspace("A~", &cfg, &settings);
        let b = ProjectDocument::for_workspace("B~", &cfg, &settings);

        assert_eq!(a.references, b.references);
        assert_eq!(a.project_references, b.project_references);
        assert_ne!(a.compile_glob, b.compile_glob);
    }

    #[test]
    fn configured_target_framework_is_used() {
        let settings = GeneratorSettings {
            target_framework: "net8.0".into(),
            source_root: String::new(),
            ..GeneratorSettings::default()
        };
        let doc = ProjectDocument::for_workspace("A~", &Configuration::default(), &settings);

        assert_eq!(doc.target_framework, "net8.0");
        assert_eq!(doc.compile_glob, "A~/**/*.cs");
    }

    // ========================================================================
    // Error metadata
    // ========================================================================

    #[test]
    fn invalid_workspace_is_validation_with_suggestions() {
        let err = WorkspacePath::parse("Scripts").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.suggestions().iter().any(|s| s.contains("Scripts~")));
    }

    #[test]
    fn index_error_is_not_found() {
        let err = ConfigEdit::RemoveWorkspace { index: 4 }
            .apply_to(Configuration::default())
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }
}
