//! The editable configuration and the edit commands that change it.
//!
//! [`Configuration`] is an immutable snapshot. The synthesizer reads one per
//! generation event; the edit surface produces a new snapshot per accepted
//! [`ConfigEdit`] and hands it to the store.

use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    workspace::{PathNormalizer, WorkspacePath},
};

/// Snapshot of the user's generation settings.
///
/// Reference lists are global: every generated project receives the same
/// assemblies and project references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Configuration {
    location: String,
    workspaces: Vec<String>,
    reference_assemblies: Vec<String>,
    reference_projects: Vec<String>,
}

impl Configuration {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..Self::default()
        }
    }

    /// Add a workspace entry as stored. Callers constructing snapshots from
    /// user input go through [`ConfigEdit::AddWorkspace`] instead.
    pub fn with_workspace(mut self, workspace: impl Into<String>) -> Self {
        self.workspaces.push(workspace.into());
        self
    }

    pub fn with_reference_assembly(mut self, assembly: impl Into<String>) -> Self {
        self.reference_assemblies.push(assembly.into());
        self
    }

    pub fn with_reference_project(mut self, project: impl Into<String>) -> Self {
        self.reference_projects.push(project.into());
        self
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn workspaces(&self) -> &[String] {
        &self.workspaces
    }

    pub fn reference_assemblies(&self) -> &[String] {
        &self.reference_assemblies
    }

    pub fn reference_projects(&self) -> &[String] {
        &self.reference_projects
    }

    pub fn is_empty(&self) -> bool {
        self.workspaces.is_empty()
    }
}

/// One accepted change to a [`Configuration`].
///
/// Paths arrive as the user picked them (absolute) together with the base
/// directory they are made relative to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigEdit {
    AddWorkspace { absolute: String, base: String },
    SetWorkspace { index: usize, absolute: String, base: String },
    RemoveWorkspace { index: usize },
    MoveWorkspace { from: usize, to: usize },
    AddReferenceAssembly { absolute: String, base: String },
    RemoveReferenceAssembly { index: usize },
    AddReferenceProject { absolute: String, base: String },
    RemoveReferenceProject { index: usize },
    SetLocation { absolute: String, base: String },
}

impl ConfigEdit {
    /// Apply to `current`, returning the next snapshot.
    ///
    /// On error `current` is dropped untouched; the caller still holds the
    /// stored snapshot and must not persist anything.
    pub fn apply_to(&self, current: Configuration) -> Result<Configuration, DomainError> {
        let mut next = current;

        match self {
            Self::AddWorkspace { absolute, base } => {
                let workspace = WorkspacePath::from_absolute(absolute, base)?;
                next.workspaces.push(workspace.into_string());
            }
            Self::SetWorkspace {
                index,
                absolute,
                base,
            } => {
                let workspace = WorkspacePath::from_absolute(absolute, base)?;
                let slot = slot_mut(&mut next.workspaces, *index, "workspaces")?;
                *slot = workspace.into_string();
            }
            Self::RemoveWorkspace { index } => {
                remove_at(&mut next.workspaces, *index, "workspaces")?;
            }
            Self::MoveWorkspace { from, to } => {
                let len = next.workspaces.len();
                if *to >= len {
                    return Err(DomainError::IndexOutOfRange {
                        list: "workspaces",
                        index: *to,
                        len,
                    });
                }
                let moved = remove_at(&mut next.workspaces, *from, "workspaces")?;
                next.workspaces.insert(*to, moved);
            }
            Self::AddReferenceAssembly { absolute, base } => {
                let path = non_empty(absolute, "reference assembly")?;
                next.reference_assemblies
                    .push(PathNormalizer::relativize(path, base));
            }
            Self::RemoveReferenceAssembly { index } => {
                remove_at(&mut next.reference_assemblies, *index, "reference assemblies")?;
            }
            Self::AddReferenceProject { absolute, base } => {
                let path = non_empty(absolute, "reference project")?;
                next.reference_projects
                    .push(PathNormalizer::relativize(path, base));
            }
            Self::RemoveReferenceProject { index } => {
                remove_at(&mut next.reference_projects, *index, "reference projects")?;
            }
            Self::SetLocation { absolute, base } => {
                next.location = PathNormalizer::relativize(absolute, base);
            }
        }

        Ok(next)
    }
}

fn non_empty<'a>(path: &'a str, field: &'static str) -> Result<&'a str, DomainError> {
    if path.trim().is_empty() {
        Err(DomainError::EmptyPath { field })
    } else {
        Ok(path)
    }
}

fn slot_mut<'a>(
    list: &'a mut [String],
    index: usize,
    name: &'static str,
) -> Result<&'a mut String, DomainError> {
    let len = list.len();
    list.get_mut(index).ok_or(DomainError::IndexOutOfRange {
        list: name,
        index,
        len,
    })
}

fn remove_at(list: &mut Vec<String>, index: usize, name: &'static str) -> Result<String, DomainError> {
    if index >= list.len() {
        return Err(DomainError::IndexOutOfRange {
            list: name,
            index,
            len: list.len(),
        });
    }
    Ok(list.remove(index))
}
