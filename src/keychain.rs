// src/keychain.rs
//! Handle on an `.agilekeychain` directory
//!
//! Locates `data/<profile>/encryptionKeys.js` and `data/<profile>/contents.js`
//! and feeds them to the key recovery engine and the entry parser.
//! Read-only: nothing here writes to the keychain.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::aliases::MasterPassword;
use crate::config::{self, Layout};
use crate::consts::DATA_DIR;
use crate::entries::{parse_entries, EntryRecord};
use crate::error::CoreError;
use crate::keys::{recover_keys_with, KeyList, RecoveredKey, RecoveryObserver, TracingObserver};
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgileKeychain {
    base_dir: PathBuf,
    layout: Layout,
}

impl AgileKeychain {
    /// Open a keychain using the layout from the global config
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_layout(path, config::load().layout.clone())
    }

    /// Open a keychain with an explicit layout.
    ///
    /// The path is canonicalised, so relative and absolute paths to the same
    /// directory yield equal handles.
    pub fn open_with_layout<P: AsRef<Path>>(path: P, layout: Layout) -> Result<Self> {
        let base_dir = fs::canonicalize(path.as_ref())?;
        if !base_dir.is_dir() {
            return Err(CoreError::NotAKeychain(base_dir));
        }

        Ok(Self { base_dir, layout })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// `<base>/data/<profile>`
    pub fn profile_dir(&self) -> PathBuf {
        self.base_dir.join(DATA_DIR).join(&self.layout.profile)
    }

    pub fn keys_path(&self) -> PathBuf {
        self.profile_dir().join(&self.layout.keys_file)
    }

    pub fn contents_path(&self) -> PathBuf {
        self.profile_dir().join(&self.layout.contents_file)
    }

    pub fn key_list(&self) -> Result<KeyList> {
        let raw = fs::read_to_string(self.keys_path())?;
        Ok(KeyList::from_json(&raw)?)
    }

    pub fn entries(&self) -> Result<Vec<EntryRecord>> {
        let raw = fs::read_to_string(self.contents_path())?;
        Ok(parse_entries(&raw)?)
    }

    /// Recover and validate every key in the keychain
    pub fn unlock(&self, passphrase: &MasterPassword) -> Result<BTreeMap<String, RecoveredKey>> {
        self.unlock_with(passphrase, &mut TracingObserver)
    }

    pub fn unlock_with(
        &self,
        passphrase: &MasterPassword,
        observer: &mut dyn RecoveryObserver,
    ) -> Result<BTreeMap<String, RecoveredKey>> {
        let key_list = self.key_list()?;
        self.unlock_key_list(&key_list, passphrase, observer)
    }

    /// Recover the keys of an already loaded key list, without re-reading
    /// the keys file
    pub fn unlock_key_list(
        &self,
        key_list: &KeyList,
        passphrase: &MasterPassword,
        observer: &mut dyn RecoveryObserver,
    ) -> Result<BTreeMap<String, RecoveredKey>> {
        let keys = recover_keys_with(
            &key_list.list,
            passphrase.expose_secret().as_bytes(),
            observer,
        )?;

        info!(path = %self.base_dir.display(), keys = keys.len(), "keychain unlocked");
        Ok(keys)
    }
}
