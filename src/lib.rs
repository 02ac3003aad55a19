// src/lib.rs

pub mod bot;
pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod loader;
pub mod persistence;
pub mod startup;
pub use crate::core::dictionary::MasterDictionary;
pub use crate::core::view::DictionaryView;
pub use crate::error::{GameError, WordlieError};
pub use crate::game::{TurnOutcome, WordlieGame};
