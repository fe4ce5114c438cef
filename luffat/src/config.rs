//! Configuration module for the luffat CLI.
//!
//! Settings live in `luffat.toml`. Every field is optional; missing fields
//! fall back to the scanner defaults.
//!
//! ```toml
//! [scanner]
//! comments = "lua"
//! punctuation = "(){}[],;=."
//! ignore_case = false
//! allow_punctuation_in_names = false
//!
//! [names]
//! extension = "lua"
//! min_length = 3
//! ```

use dirs::{config_dir, home_dir};
use num_cpus::get as get_num_cpus;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{LuffatError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "luffat.toml";

/// Thread count used when the CPU count does not fit the field.
const DEFAULT_THREAD_COUNT: u32 = 4;

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Scanner construction settings shared by all commands.
    #[serde(default)]
    pub scanner: ScannerConfig,

    /// Settings for the `names` command.
    #[serde(default)]
    pub names: NamesConfig,
}

/// Scanner settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScannerConfig {
    /// Comment syntax: `c`, `lua` or `none`.
    #[serde(default = "default_comments")]
    pub comments: String,

    /// Punctuation set overriding the default one.
    #[serde(default)]
    pub punctuation: Option<String>,

    /// Compare expected names without regard to ASCII case.
    #[serde(default)]
    pub ignore_case: bool,

    /// Let punctuation bytes continue a name.
    #[serde(default)]
    pub allow_punctuation_in_names: bool,
}

/// `names` command settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NamesConfig {
    /// File extension to collect when none is given on the command line.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Names shorter than this are not reported.
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    /// Worker threads used to tokenize files.
    #[serde(default = "default_parallel_jobs")]
    pub jobs: u32,
}

fn default_comments() -> String {
    "c".to_string()
}

fn default_extension() -> String {
    "lua".to_string()
}

fn default_min_length() -> usize {
    1
}

fn default_parallel_jobs() -> u32 {
    get_num_cpus().try_into().unwrap_or(DEFAULT_THREAD_COUNT)
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            comments: default_comments(),
            punctuation: None,
            ignore_case: false,
            allow_punctuation_in_names: false,
        }
    }
}

impl Default for NamesConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            min_length: default_min_length(),
            jobs: default_parallel_jobs(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/luffat/`
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
            return Err(LuffatError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| LuffatError::Config(format!("Failed to parse configuration: {}", e)))?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("luffat").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("luffat").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
