//! CLI-level errors (top level, mapped to exit codes)

use thiserror::Error;

use crate::config::ConfigError;
use crate::errors::LexiconError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Lexicon(#[from] LexiconError),

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
            CliError::Lexicon(e) => match e {
                LexiconError::FileNotFound(_) => crate::exitcode::NOINPUT,
                LexiconError::FileReadError(_) => crate::exitcode::IOERR,
                LexiconError::Domain(_) => crate::exitcode::DATAERR,
            },
            CliError::Config(_) => crate::exitcode::CONFIG,
            CliError::Io(_) => crate::exitcode::IOERR,
        }
    }
}
