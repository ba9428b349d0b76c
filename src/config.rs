//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/wordtree/wordtree.toml`
//! 3. Environment variables: `WORDTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config error: {message}")]
    Invalid { message: String },
}

/// Raw settings for intermediate parsing (fields are Option to detect
/// "not specified", so a partial config file inherits the rest).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    lexicon: Option<PathBuf>,
    seed: Option<u64>,
}

/// Unified configuration for wordtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Word-list file loaded when no path is given on the command line
    pub lexicon: PathBuf,
    /// Fixed shuffle seed; unset means a fresh random order per run
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lexicon: PathBuf::from("english.lex"),
            seed: None,
        }
    }
}

/// Get the XDG config directory for wordtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "wordtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("wordtree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Invalid {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::Invalid {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value, base is kept otherwise.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            lexicon: overlay
                .lexicon
                .clone()
                .unwrap_or_else(|| self.lexicon.clone()),
            seed: overlay.seed.or(self.seed),
        }
    }

    /// Load settings with layered precedence: compiled defaults, then the
    /// global config file, then `WORDTREE_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        Ok(current)
    }

    /// Apply WORDTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ConfigError> {
        let builder = Config::builder().add_source(Environment::with_prefix("WORDTREE"));
        let cfg = builder.build().map_err(|e| ConfigError::Invalid {
            message: e.to_string(),
        })?;

        if let Ok(val) = cfg.get_string("lexicon") {
            settings.lexicon = PathBuf::from(val);
        }
        if let Ok(val) = cfg.get::<u64>("seed") {
            settings.seed = Some(val);
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Invalid {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# wordtree configuration
#
# Location: ~/.config/wordtree/wordtree.toml
# Every value can also be set via WORDTREE_* environment variables
# (WORDTREE_LEXICON, WORDTREE_SEED), which take precedence.

# Word-list file loaded when no path is given on the command line
# lexicon = "english.lex"

# Fixed shuffle seed for a reproducible tree shape
# seed = 42
"#
        .to_string()
    }
}
