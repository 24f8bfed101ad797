// src/error.rs
//! Public error types for the entire crate

use std::path::PathBuf;

use thiserror::Error;

/// Structural problems with vault documents or blobs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("blob does not start with the \"Salted__\" header")]
    MissingSaltHeader,

    #[error("ciphertext length {0} is not a nonzero multiple of the AES block size")]
    InvalidBlockLength(usize),

    #[error("field `{field}` is not valid base64: {reason}")]
    InvalidBase64 { field: &'static str, reason: String },

    #[error("iteration count must be positive")]
    InvalidIterations,

    #[error("entry {index} is malformed: {reason}")]
    MalformedEntry { index: usize, reason: String },

    #[error("invalid JSON document: {0}")]
    InvalidJson(String),
}

/// Decryption or validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    #[error("invalid PKCS#7 padding")]
    InvalidPadding,

    #[error("could not decrypt key {identifier}")]
    KeyDecryptionFailed { identifier: String },

    #[error("key {identifier} failed validation (wrong passphrase or corrupt record)")]
    ValidationMismatch { identifier: String },
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed vault data: {0}")]
    Format(#[from] FormatError),

    #[error("Key record {identifier}: {source}")]
    KeyRecord {
        identifier: String,
        #[source]
        source: FormatError,
    },

    #[error("Crypto operation failed: {0}")]
    Crypto(#[from] CryptoError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Not an agile keychain directory: {}", .0.display())]
    NotAKeychain(PathBuf),
}

impl CoreError {
    /// The format error underneath, whether or not it was tagged with a key identifier
    pub fn format_error(&self) -> Option<&FormatError> {
        match self {
            CoreError::Format(err) | CoreError::KeyRecord { source: err, .. } => Some(err),
            _ => None,
        }
    }

    /// The crypto error underneath, if any
    pub fn crypto_error(&self) -> Option<&CryptoError> {
        match self {
            CoreError::Crypto(err) => Some(err),
            _ => None,
        }
    }
}
