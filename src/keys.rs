// src/keys.rs
//! Key recovery — unwraps and validates the keys in `encryptionKeys.js`
//!
//! Each record carries two salted blobs. `data` is the vault key wrapped with
//! a PBKDF2-SHA1 key-encrypting key; `validation` is the same key encrypted
//! under an MD5 `EVP_BytesToKey` key derived from the key itself. A candidate
//! is only released once the two agree.

use std::collections::BTreeMap;
use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::aliases::RawKey;
use crate::consts::AES_BLOCK_SIZE;
use crate::crypto::{
    aes128_cbc_decrypt, derive_legacy_key_iv, derive_pbkdf2_key, extract_salted_blob,
    pkcs7_unpad, KeyIv,
};
use crate::error::{CoreError, CryptoError, FormatError};
use crate::util::fingerprint;
use crate::Result;

/// The key-metadata document (`encryptionKeys.js`)
#[derive(Debug, Clone, Deserialize)]
pub struct KeyList {
    #[serde(rename = "SL3", default)]
    pub sl3: Option<String>,
    #[serde(rename = "SL5", default)]
    pub sl5: Option<String>,
    #[serde(rename = "list", alias = "List")]
    pub list: Vec<KeyRecord>,
}

impl KeyList {
    pub fn from_json(raw: &str) -> std::result::Result<Self, FormatError> {
        serde_json::from_str(raw).map_err(|e| FormatError::InvalidJson(e.to_string()))
    }

    /// Identifier of the key assigned to a security level (`"SL3"` or `"SL5"`)
    pub fn identifier_for_level(&self, level: &str) -> Option<&str> {
        match level {
            "SL3" => self.sl3.as_deref(),
            "SL5" => self.sl5.as_deref(),
            _ => None,
        }
    }
}

/// One wrapped key from the `list` array
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct KeyRecord {
    #[serde(rename = "identifier", alias = "Identifier")]
    pub identifier: String,
    #[serde(rename = "level", alias = "Level")]
    pub level: String,
    #[serde(rename = "iterations", alias = "Iterations")]
    pub iterations: u32,
    #[serde(rename = "data", alias = "Data")]
    pub data: String,
    #[serde(rename = "validation", alias = "Validation")]
    pub validation: String,
}

impl fmt::Debug for KeyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyRecord")
            .field("identifier", &self.identifier)
            .field("level", &self.level)
            .field("iterations", &self.iterations)
            .finish_non_exhaustive()
    }
}

/// A vault key that passed validation
pub struct RecoveredKey {
    identifier: String,
    level: String,
    key: RawKey,
}

impl RecoveredKey {
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    pub fn expose_secret(&self) -> &[u8] {
        self.key.expose_secret().as_slice()
    }

    pub fn len(&self) -> usize {
        self.expose_secret().len()
    }

    pub fn is_empty(&self) -> bool {
        self.expose_secret().is_empty()
    }

    pub fn fingerprint(&self) -> String {
        fingerprint(self.expose_secret())
    }
}

impl fmt::Debug for RecoveredKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecoveredKey")
            .field("identifier", &self.identifier)
            .field("level", &self.level)
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Notified once for every key that passes validation.
///
/// Observers only ever see the key's fingerprint, never its bytes.
pub trait RecoveryObserver {
    fn key_recovered(&mut self, identifier: &str, level: &str, fingerprint: &str);
}

/// Default observer: one `debug!` line per key
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl RecoveryObserver for TracingObserver {
    fn key_recovered(&mut self, identifier: &str, level: &str, fingerprint: &str) {
        debug!(identifier, level, fingerprint, "key validated");
    }
}

/// Recover every key in `records`, logging through [`TracingObserver`]
pub fn recover_keys(
    records: &[KeyRecord],
    passphrase: &[u8],
) -> Result<BTreeMap<String, RecoveredKey>> {
    recover_keys_with(records, passphrase, &mut TracingObserver)
}

/// Recover every key in `records`, reporting each validated key to `observer`.
///
/// The first record that fails aborts the whole batch; no partial map is returned.
pub fn recover_keys_with(
    records: &[KeyRecord],
    passphrase: &[u8],
    observer: &mut dyn RecoveryObserver,
) -> Result<BTreeMap<String, RecoveredKey>> {
    let mut keys = BTreeMap::new();

    for record in records {
        let key = recover_key(record, passphrase)?;
        observer.key_recovered(key.identifier(), key.level(), &key.fingerprint());
        keys.insert(key.identifier.clone(), key);
    }

    info!(count = keys.len(), "recovered keychain keys");
    Ok(keys)
}

/// Unwrap and validate a single record
pub fn recover_key(record: &KeyRecord, passphrase: &[u8]) -> Result<RecoveredKey> {
    let identifier = record.identifier.as_str();
    let tag = |source: FormatError| CoreError::KeyRecord {
        identifier: identifier.to_owned(),
        source,
    };

    if record.iterations == 0 {
        return Err(tag(FormatError::InvalidIterations));
    }

    let data = decode_field(&record.data, "data").map_err(tag)?;
    let validation = decode_field(&record.validation, "validation").map_err(tag)?;

    let wrapped = extract_salted_blob(&data).map_err(tag)?;
    let derived = derive_pbkdf2_key(passphrase, &wrapped.salt, record.iterations);
    let kek = KeyIv::from_material(derived.expose_secret());

    let padded = aes128_cbc_decrypt(wrapped.ciphertext, &kek.key, &kek.iv).map_err(|_| {
        CryptoError::KeyDecryptionFailed {
            identifier: identifier.to_owned(),
        }
    })?;
    // A bad pad here is what a wrong passphrase looks like.
    let candidate = Zeroizing::new(
        pkcs7_unpad(&padded, AES_BLOCK_SIZE)
            .map_err(|_| mismatch(identifier))?
            .to_vec(),
    );

    let check = extract_salted_blob(&validation).map_err(tag)?;
    let check_kiv = derive_legacy_key_iv(&candidate, &check.salt);
    let check_padded =
        aes128_cbc_decrypt(check.ciphertext, &check_kiv.key, &check_kiv.iv).map_err(tag)?;
    let check_plain =
        pkcs7_unpad(&check_padded, AES_BLOCK_SIZE).map_err(|_| mismatch(identifier))?;

    if check_plain != candidate.as_slice() {
        return Err(mismatch(identifier));
    }

    Ok(RecoveredKey {
        identifier: record.identifier.clone(),
        level: record.level.clone(),
        key: RawKey::new(candidate.to_vec()),
    })
}

fn mismatch(identifier: &str) -> CoreError {
    CryptoError::ValidationMismatch {
        identifier: identifier.to_owned(),
    }
    .into()
}

/// Base64 text as written by the keychain, which may end in one stray NUL
fn decode_field(text: &str, field: &'static str) -> std::result::Result<Vec<u8>, FormatError> {
    let text = text.strip_suffix('\0').unwrap_or(text);
    STANDARD
        .decode(text)
        .map_err(|e| FormatError::InvalidBase64 {
            field,
            reason: e.to_string(),
        })
}
