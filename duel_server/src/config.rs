use std::{env, fs, path::PathBuf};

use anyhow::Context;
use duel_core::GameConfig;

/// Runtime settings for the server, read from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding the packaged browser bundle
    pub dist_dir: PathBuf,
    /// Optional JSON file with [`GameConfig`] overrides handed to every page
    pub game_config_path: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = match lookup("PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("PORT must be a number, got `{}`", port))?,
            None => 8000,
        };

        Ok(Self {
            port,
            dist_dir: lookup("DUEL_DIST_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("dist")),
            game_config_path: lookup("DUEL_CONFIG").map(PathBuf::from),
        })
    }

    pub fn load_game_config(&self) -> anyhow::Result<GameConfig> {
        let Some(path) = &self.game_config_path else {
            return Ok(GameConfig::default());
        };

        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read game config {}", path.display()))?;
        parse_game_config(&text).with_context(|| format!("bad game config {}", path.display()))
    }
}

pub fn parse_game_config(text: &str) -> anyhow::Result<GameConfig> {
    let config: GameConfig = serde_json::from_str(text)?;
    config.validate()?;
    Ok(config)
}
