//! `slngen workspace|assembly|project|location` - edit the stored lists.
//!
//! Each invocation is one [`ConfigEdit`]: the editor loads the stored
//! snapshot, applies the edit and saves once. A rejected edit saves nothing.

use std::path::{Path, PathBuf};

use tracing::instrument;

use slngen_core::{
    application::{ConfigurationEditor, registry},
    domain::{ConfigEdit, Configuration},
};

use crate::{
    cli::{EntryCommands, PathArgs, WorkspaceCommands},
    commands::absolute_string,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Which reference list an [`EntryCommands`] acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryList {
    Assemblies,
    Projects,
}

impl EntryList {
    fn label(self) -> &'static str {
        match self {
            Self::Assemblies => "Reference assemblies",
            Self::Projects => "Reference projects",
        }
    }

    fn entries(self, configuration: &Configuration) -> &[String] {
        match self {
            Self::Assemblies => configuration.reference_assemblies(),
            Self::Projects => configuration.reference_projects(),
        }
    }

    /// Assemblies sit under the source root; projects under the project root.
    fn default_base(self, config: &AppConfig) -> PathBuf {
        match self {
            Self::Assemblies => config.source_base(),
            Self::Projects => config.project_root.clone(),
        }
    }
}

fn editor() -> CliResult<ConfigurationEditor> {
    Ok(ConfigurationEditor::new(registry::current()?))
}

/// Resolve the picked path and its base into the strings an edit carries.
fn picked(args: &PathArgs, default_base: &Path) -> CliResult<(String, String)> {
    let base = args.base.as_deref().unwrap_or(default_base);
    Ok((absolute_string(&args.path)?, absolute_string(base)?))
}

#[instrument(skip_all)]
pub fn workspace(cmd: WorkspaceCommands, config: &AppConfig, output: OutputManager) -> CliResult<()> {
    let editor = editor()?;

    let edit = match cmd {
        WorkspaceCommands::Add(args) => {
            let (absolute, base) = picked(&args, &config.source_base())?;
            ConfigEdit::AddWorkspace { absolute, base }
        }
        WorkspaceCommands::Set { index, path } => {
            let (absolute, base) = picked(&path, &config.source_base())?;
            ConfigEdit::SetWorkspace {
                index,
                absolute,
                base,
            }
        }
        WorkspaceCommands::Remove { index } => ConfigEdit::RemoveWorkspace { index },
        WorkspaceCommands::Move { from, to } => ConfigEdit::MoveWorkspace { from, to },
        WorkspaceCommands::List => {
            let snapshot = editor.snapshot()?;
            output.header("Workspaces:")?;
            output.indexed(snapshot.workspaces())?;
            return Ok(());
        }
    };

    let next = editor.apply(edit)?;
    output.success("Workspaces updated")?;
    output.indexed(next.workspaces())?;
    Ok(())
}

#[instrument(skip_all, fields(list = ?list))]
pub fn entries(
    list: EntryList,
    cmd: EntryCommands,
    config: &AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let editor = editor()?;

    let edit = match (list, cmd) {
        (EntryList::Assemblies, EntryCommands::Add(args)) => {
            let (absolute, base) = picked(&args, &list.default_base(config))?;
            ConfigEdit::AddReferenceAssembly { absolute, base }
        }
        (EntryList::Projects, EntryCommands::Add(args)) => {
            let (absolute, base) = picked(&args, &list.default_base(config))?;
            ConfigEdit::AddReferenceProject { absolute, base }
        }
        (EntryList::Assemblies, EntryCommands::Remove { index }) => {
            ConfigEdit::RemoveReferenceAssembly { index }
        }
        (EntryList::Projects, EntryCommands::Remove { index }) => {
            ConfigEdit::RemoveReferenceProject { index }
        }
        (_, EntryCommands::List) => {
            let snapshot = editor.snapshot()?;
            output.header(&format!("{}:", list.label()))?;
            output.indexed(list.entries(&snapshot))?;
            return Ok(());
        }
    };

    let next = editor.apply(edit)?;
    output.success(&format!("{} updated", list.label()))?;
    output.indexed(list.entries(&next))?;
    Ok(())
}

#[instrument(skip_all)]
pub fn location(args: PathArgs, config: &AppConfig, output: OutputManager) -> CliResult<()> {
    let (absolute, base) = picked(&args, &config.source_base())?;
    let next = editor()?.apply(ConfigEdit::SetLocation { absolute, base })?;

    let shown = if next.location().is_empty() {
        "(source root)"
    } else {
        next.location()
    };
    output.success(&format!("Location set to {shown}"))?;
    Ok(())
}
