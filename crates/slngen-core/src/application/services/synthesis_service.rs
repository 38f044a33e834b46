//! Synthesis Service - main application orchestrator.
//!
//! Handles the host's regeneration events:
//! 1. Read the current configuration snapshot
//! 2. Build and write one project document per workspace
//! 3. Append one solution stanza per workspace to the host's solution text

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{ConfigurationStore, Filesystem, GenerationHooks},
    },
    domain::{Configuration, GeneratedProject, GeneratorSettings, LineEnding},
    error::SlngenResult,
};

/// Project and solution synthesizer.
pub struct SynthesisService {
    store: Arc<dyn ConfigurationStore>,
    filesystem: Box<dyn Filesystem>,
    settings: GeneratorSettings,
}

impl SynthesisService {
    pub fn new(
        store: Arc<dyn ConfigurationStore>,
        filesystem: Box<dyn Filesystem>,
        settings: GeneratorSettings,
    ) -> Self {
        Self {
            store,
            filesystem,
            settings,
        }
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Projects a pass over `configuration` would produce, without writing.
    pub fn plan(&self, configuration: &Configuration) -> SlngenResult<Vec<GeneratedProject>> {
        configuration
            .workspaces()
            .iter()
            .map(|w| {
                GeneratedProject::for_workspace(w, configuration, &self.settings)
                    .map_err(Into::into)
            })
            .collect()
    }

    /// Write every project document for `configuration` and append the
    /// matching stanzas to `content`.
    ///
    /// Appending is not deduplicated: calling this twice on the same text
    /// appends the stanza block twice, with identical identifiers.
    #[instrument(
        skip_all,
        fields(workspaces = configuration.workspaces().len())
    )]
    pub fn synthesize(
        &self,
        configuration: &Configuration,
        mut content: String,
    ) -> SlngenResult<String> {
        if configuration.is_empty() {
            debug!("No workspaces configured, solution left untouched");
            return Ok(content);
        }

        let line_ending = LineEnding::detect(&content);
        let output_dir = self.settings.output_dir.as_path();
        if !output_dir.as_os_str().is_empty() {
            self.filesystem.create_dir_all(output_dir)?;
        }

        let mut stanzas = String::new();
        for (completed, workspace) in configuration.workspaces().iter().enumerate() {
            let project = GeneratedProject::for_workspace(workspace, configuration, &self.settings)?;
            let path = output_dir.join(project.file_name());

            if let Err(e) = self.filesystem.write_file(&path, project.document()) {
                warn!(
                    error = %e,
                    path = %path.display(),
                    completed,
                    "Project document write failed"
                );
                content.push_str(&stanzas);
                return Err(ApplicationError::GenerationInterrupted {
                    workspace: workspace.clone(),
                    completed,
                    partial_content: content,
                    reason: e.to_string(),
                }
                .into());
            }

            debug!(
                assembly = project.assembly_name(),
                guid = %project.guid(),
                path = %path.display(),
                "Project document written"
            );
            stanzas.push_str(&project.stanza().render(line_ending));
        }

        content.push_str(&stanzas);
        info!(
            projects = configuration.workspaces().len(),
            "Solution stanzas appended"
        );
        Ok(content)
    }
}

impl GenerationHooks for SynthesisService {
    fn on_project_file_generated(&self, _path: &Path, content: String) -> String {
        content
    }

    #[instrument(skip_all, fields(solution = %path.display()))]
    fn on_solution_file_generated(&self, path: &Path, content: String) -> SlngenResult<String> {
        let configuration = self.store.load()?;
        self.synthesize(&configuration, content)
    }
}
