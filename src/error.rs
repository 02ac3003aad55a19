//! Error types for the wordlie crate.

use std::path::PathBuf;
use thiserror::Error;

/// Startup failures. None of these are recoverable: the process must not
/// serve games without a loaded dictionary.
#[derive(Debug, Error)]
pub enum WordlieError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The word list was readable but held no words.
    #[error("Dictionary {path:?} contains no words")]
    EmptyDictionary { path: PathBuf },

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, WordlieError>;

/// Rejections of a player's move. The round is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no round is in progress")]
    NotStarted,

    #[error("word must start with '{expected}'")]
    WrongStartingLetter { expected: char },

    #[error("word is not in the dictionary")]
    UnknownWord,

    #[error("word was already used this round")]
    AlreadyUsed,
}
