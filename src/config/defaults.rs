// src/config/defaults.rs
use crate::config::app::{Layout, Logging};
use crate::consts::{DEFAULT_CONTENTS_FILE, DEFAULT_KEYS_FILE, DEFAULT_LOG_FILTER, DEFAULT_PROFILE};

pub const DEFAULT_CONFIG_DIR: &str = "agile-keychain";
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

pub fn default_layout() -> Layout {
    Layout {
        profile: DEFAULT_PROFILE.into(),
        keys_file: DEFAULT_KEYS_FILE.into(),
        contents_file: DEFAULT_CONTENTS_FILE.into(),
    }
}

pub fn default_logging() -> Logging {
    Logging {
        filter: DEFAULT_LOG_FILTER.into(),
    }
}
