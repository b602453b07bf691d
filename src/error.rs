/// Failures that abort a job outright, as opposed to the per-record outcomes
/// tallied in a job's report.
#[derive(Debug, Error)]
pub enum JobError {
    /// Required process configuration is missing or unusable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A bank file is not a JSON array of question objects.
    #[error("Bad question bank '{}': {reason}", .path.display())]
    ContentFormat { path: PathBuf, reason: String },

    /// No category row matches the requested slug or name.
    #[error("No category found matching '{0}'")]
    CategoryNotFound(String),
}

use std::path::PathBuf;
use thiserror::Error;
