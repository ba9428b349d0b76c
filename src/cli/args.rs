//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// Interactive word lookup over an in-memory binary search tree
#[derive(Parser, Debug)]
#[command(name = "wordtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short = 'd', long = "debug", action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Seed for the load-time shuffle (reproducible tree shape)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Running without a subcommand starts the interactive session, same as
/// `query`.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a lexicon and answer queries interactively
    Query {
        /// Word-list file, one word per line (default from config)
        lexicon: Option<PathBuf>,
    },

    /// Show lexicon and tree statistics
    Stats {
        /// Word-list file, one word per line (default from config)
        lexicon: Option<PathBuf>,
    },

    /// Print the tree shape
    Tree {
        /// Word-list file, one word per line (default from config)
        lexicon: Option<PathBuf>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config file path
    Path,

    /// Create config template
    Init,
}
