//! Application settings, read from an optional TOML file.

use crate::catalog::{WordSource, DEFAULT_EXTENSION};
use crate::error::ConfigError;
use crate::words::DEFAULT_DELIMITER;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_DIR_NAME: &str = "vocab-flashcards";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const WORDS_DIR_ENV: &str = "VOCAB_WORDS_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding one file per category.
    pub words_dir: PathBuf,
    pub extension: String,
    pub delimiter: String,
    /// Shuffle the flashcard decks on entry.
    pub shuffle: bool,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words_dir: PathBuf::from("words"),
            extension: DEFAULT_EXTENSION.to_string(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            shuffle: true,
            log_file: PathBuf::from("vocab-flashcards.log"),
        }
    }
}

impl Config {
    /// `<config dir>/vocab-flashcards/config.toml`, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads `path`, or the default location when `path` is `None`. A missing
    /// file at the default location yields the defaults; an explicitly given
    /// file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::default_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        if !required && !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        Self::from_toml(&content, &path)
    }

    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.delimiter.is_empty() {
            return Err(ConfigError::EmptyDelimiter);
        }
        Ok(())
    }

    /// Applies the environment and command-line overrides, in that order.
    pub fn with_overrides(
        mut self,
        env_words_dir: Option<String>,
        cli_words_dir: Option<PathBuf>,
        no_shuffle: bool,
    ) -> Self {
        if let Some(dir) = env_words_dir.filter(|d| !d.trim().is_empty()) {
            self.words_dir = PathBuf::from(dir);
        }
        if let Some(dir) = cli_words_dir {
            self.words_dir = dir;
        }
        if no_shuffle {
            self.shuffle = false;
        }
        self
    }

    pub fn word_source(&self) -> WordSource {
        WordSource {
            dir: self.words_dir.clone(),
            extension: self.extension.clone(),
            delimiter: self.delimiter.clone(),
        }
    }
}
