//! Domain layer: the search tree and the word-list entity
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config
//! loading).

pub mod error;
pub mod lexicon;
pub mod tree;

pub use error::DomainError;
pub use lexicon::Lexicon;
pub use tree::SearchTree;
