// src/consts.rs
//! Shared constants — on-disk format parameters and defaults

/// Magic prefix of an OpenSSL `enc` salted blob
pub const SALTED_MAGIC: &[u8; 8] = b"Salted__";

/// Salt length following the magic
pub const SALT_LEN: usize = 8;

/// Magic + salt
pub const SALTED_HEADER_LEN: usize = SALTED_MAGIC.len() + SALT_LEN;

pub const AES_BLOCK_SIZE: usize = 16;

/// AES-128 key and IV length
pub const AES128_KEY_LEN: usize = 16;

/// PBKDF2 output: key-encrypting key followed by IV
pub const PBKDF2_OUTPUT_LEN: usize = 2 * AES128_KEY_LEN;

/// MD5 rounds of the legacy `EVP_BytesToKey` derivation (16-byte key + 16-byte IV)
pub const LEGACY_KDF_ROUNDS: usize = 2;

/// Columns in one row of `contents.js`
pub const ENTRY_ARITY: usize = 8;

/// Hex characters kept from a BLAKE3 digest when tagging keys in logs
pub const FINGERPRINT_LEN_HEX: usize = 16;

/// Directory under the keychain root holding the profile folders
pub const DATA_DIR: &str = "data";

pub const DEFAULT_PROFILE: &str = "default";
pub const DEFAULT_KEYS_FILE: &str = "encryptionKeys.js";
pub const DEFAULT_CONTENTS_FILE: &str = "contents.js";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Env var naming an explicit config file
pub const CONFIG_ENV: &str = "AKC_CONFIG";

/// Env var overriding `layout.profile`
pub const PROFILE_ENV: &str = "AKC_PROFILE";
