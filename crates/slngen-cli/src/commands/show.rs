//! `slngen show` - print the stored configuration snapshot.

use slngen_core::{
    application::{ConfigurationStore, registry},
    domain::{Configuration, PROJECT_EXTENSION, PathNormalizer, ProjectGuid},
};

use crate::{
    cli::ShowArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ShowArgs, config: &AppConfig, output: OutputManager) -> CliResult<()> {
    let snapshot = registry::current()?.load()?;

    if args.json {
        let mut json =
            serde_json::to_string_pretty(&snapshot).map_err(|e| CliError::ConfigError {
                message: format!("Failed to serialise configuration: {e}"),
                source: Some(Box::new(e)),
            })?;
        json.push('\n');
        output.data(&json)?;
        return Ok(());
    }

    output.header(&format!(
        "{} ({})",
        config.store_path().display(),
        config.store.feature_id
    ))?;
    output.print(&format!("Location: {}", display_location(&snapshot)))?;

    output.print("Workspaces:")?;
    output.indexed(&describe_workspaces(&snapshot))?;
    output.print("Reference assemblies:")?;
    output.indexed(snapshot.reference_assemblies())?;
    output.print("Reference projects:")?;
    output.indexed(snapshot.reference_projects())?;
    Ok(())
}

fn display_location(snapshot: &Configuration) -> &str {
    if snapshot.location().is_empty() {
        "(source root)"
    } else {
        snapshot.location()
    }
}

/// `Scripts~ -> Scripts~.csproj {GUID}` per workspace.
fn describe_workspaces(snapshot: &Configuration) -> Vec<String> {
    snapshot
        .workspaces()
        .iter()
        .map(|workspace| {
            let assembly = PathNormalizer::to_assembly_name(workspace);
            let guid = ProjectGuid::derive(&assembly);
            format!(
                "{workspace} -> {assembly}.{PROJECT_EXTENSION} {}",
                guid.braced()
            )
        })
        .collect()
}
