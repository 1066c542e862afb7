mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use std::path::Path;
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the configuration named by `CONFIG_PATH`, or `config.yaml`.
///
/// A missing `config.yaml` falls back to the built-in defaults; a missing
/// file named explicitly through `CONFIG_PATH` is an error.
pub async fn load() -> Result<Config> {
    match env::var("CONFIG_PATH") {
        Ok(path) => load_from(&path).await,
        Err(_) if !Path::new(DEFAULT_CONFIG_PATH).exists() => {
            debug!("No {} found, using default configuration", DEFAULT_CONFIG_PATH);
            Ok(Config::default())
        }
        Err(_) => load_from(DEFAULT_CONFIG_PATH).await,
    }
}

pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path)
        .await
        .map_err(|e| Error::config(format!("Failed to read {}: {}", config_path, e)))?;
    parse(&config_str)
}

pub fn parse(config_str: &str) -> Result<Config> {
    // An empty document deserializes as unit, not as an empty mapping.
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config = serde_yaml::from_str(config_str)?;
    Ok(config)
}
