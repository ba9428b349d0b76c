//! Load-failure taxonomy for lexicon files

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;

/// Failures while getting a word list from disk into memory. The tree itself
/// has no error cases; absence is reported through `false`/`None` results.
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("lexicon file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read lexicon: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub type LexiconResult<T> = Result<T, LexiconError>;
