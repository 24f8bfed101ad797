// src/config/app.rs
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::warn;

use super::defaults::*;
use crate::consts::{CONFIG_ENV, PROFILE_ENV};
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub layout: Layout,
    pub logging: Logging,
}

/// Where the two documents live inside a keychain directory
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub profile: String,
    pub keys_file: String,
    pub contents_file: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Logging {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: default_layout(),
            logging: default_logging(),
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        default_layout()
    }
}

impl Default for Logging {
    fn default() -> Self {
        default_logging()
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config once — falls back to defaults if missing or unreadable
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path = config_path();

        let mut conf = match config_path {
            Some(path) if path.exists() => Config::from_path(&path).unwrap_or_else(|err| {
                warn!(path = %path.display(), %err, "ignoring unreadable config, using defaults");
                Config::default()
            }),
            _ => Config::default(),
        };

        if let Ok(profile) = std::env::var(PROFILE_ENV) {
            conf.layout.profile = profile;
        }

        conf
    })
}

fn config_path() -> Option<PathBuf> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => Some(PathBuf::from(path)),
        None => dirs::config_dir().map(|dir| dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILE)),
    }
}
