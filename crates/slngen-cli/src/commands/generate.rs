//! `slngen generate` - fire the solution event on a solution file.
//!
//! Plays the host's part: read the solution text, run one
//! [`SynthesisService`] pass over a single configuration snapshot, and
//! write back the result.

use std::io::ErrorKind;

use tracing::{debug, info, instrument};

use slngen_adapters::LocalFilesystem;
use slngen_core::application::{
    SynthesisService,
    ports::ConfigurationStore,
    registry,
};

use crate::{
    cli::GenerateArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(solution = %args.solution.display()))]
pub fn execute(args: GenerateArgs, config: &AppConfig, output: OutputManager) -> CliResult<()> {
    let store = registry::current()?;
    let snapshot = store.load()?;
    let workspaces = snapshot.workspaces().len();

    let content = match std::fs::read_to_string(&args.solution) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Solution file missing");
            if !args.stdout {
                output.warning(&format!(
                    "{} not found, starting from an empty solution",
                    args.solution.display()
                ))?;
            }
            String::new()
        }
        Err(e) => {
            return Err(CliError::IoError {
                message: format!("Failed to read '{}'", args.solution.display()),
                source: e,
            });
        }
    };

    let service = SynthesisService::new(
        store,
        Box::new(LocalFilesystem::new()),
        config.generator_settings(),
    );
    let updated = service.synthesize(&snapshot, content)?;

    if args.stdout {
        output.data(&updated)?;
        return Ok(());
    }

    if workspaces == 0 {
        output.info("No workspaces configured, solution left untouched")?;
        return Ok(());
    }

    std::fs::write(&args.solution, &updated)
        .with_cli_context(|| format!("Failed to write '{}'", args.solution.display()))?;
    info!(projects = workspaces, "Solution rewritten");

    output.success(&format!(
        "Generated {} project(s) into {} and updated {}",
        workspaces,
        service.settings().output_dir.display(),
        args.solution.display(),
    ))?;
    Ok(())
}
