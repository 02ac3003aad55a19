// File: src/startup.rs
use crate::config::WordlieConfig;
use crate::error::Result;
use crate::game::WordlieGame;
use crate::persistence::load_or_build;
use std::path::Path;
use std::sync::Arc;

/// Installs the global subscriber. `RUST_LOG` wins over the configured filter.
/// Logs go to stderr; stdout belongs to the front-ends.
pub fn init_logging(config: &WordlieConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Config, logging and dictionary in one step. Any error here is fatal.
pub fn boot(config_path: Option<&Path>) -> Result<WordlieGame> {
    let config = WordlieConfig::load(config_path)?;
    init_logging(&config);

    tracing::info!(dictionary = %config.dictionary_path.display(), "preparing the dictionary");
    let dictionary = Arc::new(load_or_build(&config)?);
    let game = match config.seed {
        Some(seed) => WordlieGame::with_seed(dictionary, seed),
        None => WordlieGame::new(dictionary),
    };
    tracing::info!("bot is ready");
    Ok(game)
}
