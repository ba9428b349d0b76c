//! Command dispatch

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::instrument;

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::{self, ConfigError, Settings};
use crate::loader::{load_lexicon, plant_tree};
use crate::session::Session;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load()?;
    let seed = cli.seed.or(settings.seed);

    match &cli.command {
        Some(Commands::Query { lexicon }) => query(&resolve(lexicon, &settings), seed),
        None => query(&settings.lexicon, seed),
        Some(Commands::Stats { lexicon }) => stats(&resolve(lexicon, &settings), seed),
        Some(Commands::Tree { lexicon }) => show_tree(&resolve(lexicon, &settings), seed),
        Some(Commands::Config { command }) => config_command(command, &settings),
        Some(Commands::Completion { shell }) => {
            print_completions(*shell);
            Ok(())
        }
    }
}

fn resolve(lexicon: &Option<PathBuf>, settings: &Settings) -> PathBuf {
    lexicon.clone().unwrap_or_else(|| settings.lexicon.clone())
}

#[instrument(level = "debug")]
fn query(path: &Path, seed: Option<u64>) -> CliResult<()> {
    let lexicon = load_lexicon(path)?;
    let mut tree = plant_tree(&lexicon, seed);

    if let (Some(min), Some(max)) = (tree.min(), tree.max()) {
        output::info(&format!(
            "Loading file \"{}\", which contains {} words, ranging from \"{}\" to \"{}\".",
            path.display(),
            tree.len(),
            min,
            max
        ));
    }

    Session::new(&mut tree).run(io::stdin().lock(), io::stdout())?;
    Ok(())
}

#[instrument(level = "debug")]
fn stats(path: &Path, seed: Option<u64>) -> CliResult<()> {
    let lexicon = load_lexicon(path)?;
    let tree = plant_tree(&lexicon, seed);

    output::header(&path.display());
    output::detail(&format!("words:    {}", tree.len()));
    output::detail(&format!("distinct: {}", lexicon.distinct_count()));
    if let (Some(min), Some(max)) = (tree.min(), tree.max()) {
        output::detail(&format!("range:    \"{min}\" .. \"{max}\""));
    }
    output::detail(&format!("depth:    {}", tree.depth()));
    Ok(())
}

#[instrument(level = "debug")]
fn show_tree(path: &Path, seed: Option<u64>) -> CliResult<()> {
    let lexicon = load_lexicon(path)?;
    let tree = plant_tree(&lexicon, seed);

    output::info(&tree.render());
    Ok(())
}

fn config_command(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(&settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Path => {
            match config::global_config_path() {
                Some(path) => output::info(&path.display()),
                None => output::warning("no config directory available"),
            }
            Ok(())
        }
        ConfigCommands::Init => {
            let path = config::global_config_path().ok_or_else(|| ConfigError::Invalid {
                message: "no config directory available".to_string(),
            })?;
            if path.exists() {
                output::warning(&format!("config already exists: {}", path.display()));
                return Ok(());
            }
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
            fs::write(&path, Settings::template())?;
            output::success(&format!("created {}", path.display()));
            Ok(())
        }
    }
}

fn print_completions(shell: clap_complete::Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
