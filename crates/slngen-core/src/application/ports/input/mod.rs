//! Driving (input) ports - called by the host build pipeline.

use std::path::Path;

use crate::error::SlngenResult;

/// Events a host fires while regenerating its own project and solution
/// files. Each hook receives the content the host is about to write and
/// returns what should be written instead.
pub trait GenerationHooks {
    /// A per-project file was generated.
    fn on_project_file_generated(&self, path: &Path, content: String) -> String;

    /// The solution file was generated.
    fn on_solution_file_generated(&self, path: &Path, content: String) -> SlngenResult<String>;
}
