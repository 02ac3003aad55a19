// File: src/config.rs
use crate::error::{Result, WordlieError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DICTIONARY_ENV: &str = "WORDLIE_DICTIONARY";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WordlieConfig {
    /// Line-oriented word list, most frequent word first.
    pub dictionary_path: PathBuf,
    /// Where to cache the parsed dictionary. Disabled when unset.
    pub snapshot_path: Option<PathBuf>,
    /// Fallback `EnvFilter` directive when `RUST_LOG` is not set.
    pub log_filter: String,
    /// Fixes the opening-letter choice, mostly for scripted runs.
    pub seed: Option<u64>,
}

impl Default for WordlieConfig {
    fn default() -> Self {
        Self {
            dictionary_path: PathBuf::from("dictionary.txt"),
            snapshot_path: None,
            log_filter: "info".to_string(),
            seed: None,
        }
    }
}

impl WordlieConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| WordlieError::Config(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .map_err(|e| WordlieError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&source)
    }

    /// Reads `path` if given (defaults otherwise), then applies the
    /// environment override for the dictionary location.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Ok(dictionary) = std::env::var(DICTIONARY_ENV) {
            if !dictionary.is_empty() {
                config.dictionary_path = PathBuf::from(dictionary);
            }
        }
        Ok(config)
    }
}
