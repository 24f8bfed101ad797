// src/lib.rs
//! agile-keychain — Key recovery for 1Password Agile Keychain vaults
//!
//! Features:
//! - OpenSSL `"Salted__"` blob parsing
//! - PBKDF2-SHA1 key unwrapping + MD5 `EVP_BytesToKey` validation
//! - Strict `contents.js` entry index decoding
//! - Zeroize-on-drop secrets via secure-gate

pub mod aliases;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod entries;
pub mod error;
pub mod keychain;
pub mod keys;
pub mod util;

pub type Result<T> = std::result::Result<T, error::CoreError>;

// Re-export everything users need at the crate root
pub use aliases::{MasterPassword, RawKey};
pub use config::load as load_config;
pub use entries::{parse_entries, EntryRecord};
pub use error::{CoreError, CryptoError, FormatError};
pub use keychain::AgileKeychain;
pub use keys::{
    recover_key, recover_keys, recover_keys_with, KeyList, KeyRecord, RecoveredKey,
    RecoveryObserver, TracingObserver,
};
