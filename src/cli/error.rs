//! CLI-level errors (wraps library errors)

use std::path::PathBuf;

use thiserror::Error;

use crate::errors::{ConfigError, ScriptError};

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("cannot open script {path}: {source}")]
    ScriptOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    Script(#[from] ScriptError),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::ScriptOpen { .. } => crate::exitcode::NOINPUT,
            CliError::Script(ScriptError::Io(_)) => crate::exitcode::IOERR,
            CliError::Script(_) => crate::exitcode::DATAERR,
            CliError::Config(_) => crate::exitcode::CONFIG,
            CliError::Io(_) => crate::exitcode::IOERR,
        }
    }
}
