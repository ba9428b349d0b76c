//! Domain-level errors (no external dependencies)

use std::path::PathBuf;
use thiserror::Error;

/// Domain errors represent violations of the word-list contract,
/// independent of how the content reached us.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("lexicon contains no words: {0}")]
    EmptyLexicon(PathBuf),
}
