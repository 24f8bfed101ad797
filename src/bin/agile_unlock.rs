// src/bin/agile_unlock.rs
//! Unlock an Agile Keychain and list what it holds — key material is never printed

use std::path::PathBuf;

use agile_keychain::{AgileKeychain, MasterPassword, TracingObserver};
use anyhow::{bail, Context, Result};
use rpassword::prompt_password;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = agile_keychain::load_config();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        bail!("usage: agile-unlock <path/to/1Password.agilekeychain>");
    };

    let keychain = AgileKeychain::open(&path)
        .with_context(|| format!("Failed to open keychain at {}", path.display()))?;
    info!("Opened {}", keychain.base_dir().display());

    let key_list = keychain
        .key_list()
        .with_context(|| format!("Failed to read {}", keychain.keys_path().display()))?;

    let passphrase = MasterPassword::new(prompt_password("Master password: ")?);
    let keys = keychain
        .unlock_key_list(&key_list, &passphrase, &mut TracingObserver)
        .context("Unlock failed — wrong password or corrupt keychain")?;

    println!("\n=== KEYS ({}) ===", keys.len());
    for key in keys.values() {
        let marker = match key_list.identifier_for_level(key.level()) {
            Some(id) if id == key.identifier() => "*",
            _ => " ",
        };
        println!(
            "{marker} {:<4} {}  {} bytes  [{}]",
            key.level(),
            key.identifier(),
            key.len(),
            key.fingerprint()
        );
    }

    match keychain.entries() {
        Ok(entries) => {
            println!("\n=== ENTRIES ({}) ===", entries.len());
            for entry in &entries {
                let when = entry
                    .modified_at()
                    .map(|t| t.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "?".into());
                println!("{when}  {:<28} {}  {}", entry.entry_type, entry.title, entry.site);
            }
        }
        Err(err) => warn!("Could not read entry index: {err}"),
    }

    Ok(())
}
