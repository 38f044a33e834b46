//! End-to-end generation through the in-memory and local adapters.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use slngen_adapters::{JsonFileStore, LocalFilesystem, MemoryConfigStore, MemoryFilesystem};
use slngen_core::prelude::*;

const SOLUTION: &str = "\nMicrosoft Visual Studio Solution File, Format Version 12.00\n# Visual Studio 15\n";

fn settings_in(dir: &str) -> GeneratorSettings {
    GeneratorSettings {
        output_dir: PathBuf::from(dir),
        ..GeneratorSettings::default()
    }
}

fn synthesizer(
    cfg: Configuration,
    fs: &MemoryFilesystem,
) -> (SynthesisService, MemoryConfigStore) {
    let store = MemoryConfigStore::with_configuration(cfg);
    let service = SynthesisService::new(
        Arc::new(store.clone()),
        Box::new(fs.clone()),
        settings_in("out"),
    );
    (service, store)
}

#[test]
fn empty_workspaces_leave_solution_byte_identical() {
    let fs = MemoryFilesystem::new();
    let (svc, _) = synthesizer(
        Configuration::default().with_reference_assembly("Plugins/Foo.dll"),
        &fs,
    );

    let out = svc
        .on_solution_file_generated(Path::new("Game.sln"), SOLUTION.to_string())
        .unwrap();

    assert_eq!(out, SOLUTION);
    assert_eq!(fs.write_count(), 0);
    assert!(!fs.exists(Path::new("out")));
}

#[test]
fn single_workspace_writes_document_and_one_stanza() {
    let fs = MemoryFilesystem::new();
    let cfg = Configuration::new("")
        .with_workspace("Scripts~")
        .with_reference_assembly("Plugins/Foo.dll");
    let (svc, _) = synthesizer(cfg, &fs);

    let out = svc
        .on_solution_file_generated(Path::new("Game.sln"), SOLUTION.to_string())
        .unwrap();

    let document = fs.read_file(Path::new("out/Scripts~.csproj")).unwrap();
    assert!(document.contains(r#"<Reference Include="Foo">"#));
    assert!(document.contains("<HintPath>Assets/Plugins/Foo.dll</HintPath>"));
    assert!(document.contains("Scripts~/**/*"));
    assert!(document.ends_with('\n'));

    let appended = out.strip_prefix(SOLUTION).unwrap();
    let guid = ProjectGuid::derive("Scripts~").braced();
    assert_eq!(
        appended,
        format!(
            "Project(\"{{9A19103F-16F7-4668-BE54-9A1E7A4F7556}}\") = \"Scripts~\", \"Scripts~.csproj\", \"{guid}\"\nEndProject\n"
        )
    );
}

#[test]
fn stanzas_follow_workspace_order_with_shared_references() {
    let fs = MemoryFilesystem::new();
    let cfg = Configuration::default()
        .with_workspace("A~")
        .with_workspace("B~")
        .with_reference_assembly("Foo.dll")
        .with_reference_project("Tools/Gen.csproj");
    let (svc, _) = synthesizer(cfg, &fs);

    let out = svc
        .on_solution_file_generated(Path::new("Game.sln"), String::new())
        .unwrap();

    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("\"A~\""));
    assert_eq!(lines[1], "EndProject");
    assert!(lines[2].contains("\"B~\""));
    assert_eq!(lines[3], "EndProject");

    for name in ["out/A~.csproj", "out/B~.csproj"] {
        let doc = fs.read_file(Path::new(name)).unwrap();
        assert!(doc.contains(r#"<Reference Include="Foo">"#));
        assert!(doc.contains(r#"<ProjectReference Include="Tools/Gen.csproj"/>"#));
    }
}

#[test]
fn rejected_workspace_changes_nothing() {
    let fs = MemoryFilesystem::new();
    let store = MemoryConfigStore::new();
    let editor = ConfigurationEditor::new(Arc::new(store.clone()));

    let result = editor.apply(ConfigEdit::AddWorkspace {
        absolute: "/game/Assets/Scripts".into(),
        base: "/game/Assets".into(),
    });
    assert!(matches!(result, Err(SlngenError::Domain(_))));
    assert_eq!(store.save_count(), 0);

    let svc = SynthesisService::new(Arc::new(store), Box::new(fs.clone()), settings_in("out"));
    let out = svc
        .on_solution_file_generated(Path::new("Game.sln"), SOLUTION.to_string())
        .unwrap();
    assert_eq!(out, SOLUTION);
    assert_eq!(fs.write_count(), 0);
}

#[test]
fn regeneration_keeps_identifier_and_appends_again() {
    let fs = MemoryFilesystem::new();
    let (svc, _) = synthesizer(Configuration::default().with_workspace("Scripts~"), &fs);

    let once = svc
        .on_solution_file_generated(Path::new("Game.sln"), SOLUTION.to_string())
        .unwrap();
    let twice = svc
        .on_solution_file_generated(Path::new("Game.sln"), once.clone())
        .unwrap();

    let guid = ProjectGuid::derive("Scripts~").braced();
    assert_eq!(once.matches(&guid).count(), 1);
    assert_eq!(twice.matches(&guid).count(), 2);
    assert_eq!(twice.strip_prefix(&once), once.strip_prefix(SOLUTION));
}

#[test]
fn edits_are_visible_to_the_next_generation() {
    let fs = MemoryFilesystem::new();
    let store = MemoryConfigStore::new();
    let editor = ConfigurationEditor::new(Arc::new(store.clone()));
    let svc = SynthesisService::new(
        Arc::new(store.clone()),
        Box::new(fs.clone()),
        settings_in("out"),
    );

    editor
        .apply(ConfigEdit::AddWorkspace {
            absolute: r"C:\game\Assets\Shaders\Common~".into(),
            base: r"C:\game\Assets".into(),
        })
        .unwrap();
    assert_eq!(store.save_count(), 1);

    let out = svc
        .on_solution_file_generated(Path::new("Game.sln"), String::new())
        .unwrap();
    assert!(out.contains(r#""Shaders.Common~", "Shaders.Common~.csproj""#));
    assert!(fs.exists(Path::new("out/Shaders.Common~.csproj")));
}

#[test]
fn write_failure_keeps_earlier_documents() {
    let fs = MemoryFilesystem::new();
    fs.fail_writes_to("out/B~.csproj");
    let cfg = Configuration::default()
        .with_workspace("A~")
        .with_workspace("B~")
        .with_workspace("C~");
    let (svc, _) = synthesizer(cfg, &fs);

    let err = svc
        .on_solution_file_generated(Path::new("Game.sln"), SOLUTION.to_string())
        .unwrap_err();

    assert!(fs.exists(Path::new("out/A~.csproj")));
    assert!(!fs.exists(Path::new("out/C~.csproj")));

    let partial = err.partial_content().unwrap();
    assert!(partial.starts_with(SOLUTION));
    assert_eq!(partial.matches("EndProject").count(), 1);
}

#[test]
fn local_adapters_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("settings.json"));
    let editor = ConfigurationEditor::new(Arc::new(store.clone()));
    let base = dir.path().join("Assets");

    editor
        .apply(ConfigEdit::AddWorkspace {
            absolute: base.join("Scripts~").display().to_string(),
            base: base.display().to_string(),
        })
        .unwrap();

    let svc = SynthesisService::new(
        Arc::new(store),
        Box::new(LocalFilesystem::new()),
        GeneratorSettings {
            output_dir: dir.path().join("projects"),
            ..GeneratorSettings::default()
        },
    );
    let out = svc
        .on_solution_file_generated(&dir.path().join("Game.sln"), String::new())
        .unwrap();

    assert!(out.contains("\"Scripts~.csproj\""));
    let doc = std::fs::read_to_string(dir.path().join("projects/Scripts~.csproj")).unwrap();
    assert!(doc.starts_with("<Project Sdk=\"Microsoft.NET.Sdk\""));
}
