// src/config/mod.rs
//! Configuration system for agile-keychain
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{load, Config, Layout, Logging};

mod app;
mod defaults;
