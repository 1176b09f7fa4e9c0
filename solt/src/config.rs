//! Configuration module for the solt CLI.
//!
//! This module handles loading, saving, and managing configuration
//! settings for the solt application.

use dirs::{config_dir, home_dir};
use indexmap::IndexMap;
use num_cpus::get as get_num_cpus;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, SoltError};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "solt.toml";

/// Fallback number of lexing threads.
const DEFAULT_THREAD_COUNT: u32 = 4;

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Token style by qualified kind name, e.g. `"Keyword.Type" = "cyan"`.
    #[serde(default = "default_theme")]
    pub theme: IndexMap<String, String>,

    /// Parallelism settings.
    #[serde(default)]
    pub parallel: ParallelConfig,
}

/// Output configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Emit ANSI colors when highlighting.
    #[serde(default = "default_true")]
    pub color: bool,

    /// Merge adjacent tokens of the same kind.
    #[serde(default = "default_true")]
    pub coalesce: bool,
}

/// Parallelism configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParallelConfig {
    /// Number of files lexed at once.
    #[serde(default = "default_parallel_jobs")]
    pub jobs: u32,
}

fn default_true() -> bool {
    true
}

/// Number of available CPUs, or [`DEFAULT_THREAD_COUNT`].
fn default_parallel_jobs() -> u32 {
    get_num_cpus().try_into().unwrap_or(DEFAULT_THREAD_COUNT)
}

/// Built-in theme.
pub fn default_theme() -> IndexMap<String, String> {
    [
        ("Keyword", "bold blue"),
        ("Keyword.Type", "cyan"),
        ("Keyword.Constant", "magenta"),
        ("Keyword.Reserved", "red"),
        ("Name.Builtin", "magenta"),
        ("Name.Function", "bold green"),
        ("Name.Label", "yellow"),
        ("Literal.Number", "yellow"),
        ("Literal.String", "green"),
        ("Literal.String.Escape", "bold green"),
        ("Comment", "dim"),
        ("Comment.Preproc", "bright-magenta"),
        ("Error", "bold red"),
    ]
    .into_iter()
    .map(|(kind, style)| (kind.to_string(), style.to_string()))
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            theme: default_theme(),
            parallel: ParallelConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            coalesce: true,
        }
    }
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            jobs: default_parallel_jobs(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/solt/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SoltError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| SoltError::Config(format!("Failed to parse configuration: {}", e)))?;

        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| SoltError::Config(format!("Failed to serialize configuration: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("solt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("solt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
