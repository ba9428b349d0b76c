//! wordtree: interactive word lookup over an in-memory binary search tree.
//!
//! The tree itself lives in [`domain`] and is free of I/O concerns; the
//! [`loader`], the interactive [`session`] and the [`cli`] layer compose it
//! into the command-line tool.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod exitcode;
pub mod loader;
pub mod session;
pub mod util;

pub use domain::{Lexicon, SearchTree};
pub use errors::{LexiconError, LexiconResult};
