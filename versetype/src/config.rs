//! Application settings.
//!
//! Settings are layered: serialized defaults, then `config.toml` from the
//! platform config directory (or an override path), then `VERSETYPE_*`
//! environment variables.

use std::path::PathBuf;

use derive_more::From;
use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use memoriter::DEFAULT_LINE_WIDTH;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, From, Error)]
pub enum ConfigError {
    #[error(
        "Failed to get configuration directory. Please specify the location using the `--config <path>` flag"
    )]
    NoDirectory,

    #[error("Failed to create config directory: {0}")]
    CreateDirectory(std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(Box<figment::Error>),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Settings {
    /// Maximum characters per rendered line.
    pub line_width: usize,
    /// Default translation code for new sessions.
    pub translation: String,
    /// Override for the session store location.
    pub data_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            translation: "ESV".to_owned(),
            data_dir: None,
        }
    }
}

impl Settings {
    pub fn get(override_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let config_dir = override_path
            .or_else(|| {
                ProjectDirs::from("io", "versetype", "versetype")
                    .map(|dirs| dirs.config_dir().to_path_buf())
            })
            .ok_or(ConfigError::NoDirectory)?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir)?;
        }

        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(config_dir.join("config.toml")))
            .merge(Env::prefixed("VERSETYPE_"))
            .extract()
            .map_err(|error| ConfigError::Parse(Box::new(error)))
    }
}
