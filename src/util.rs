// src/util.rs
//! Small utility functions used across the crate
//!
//! Keep this light — if it grows, split further.

use blake3::Hasher;

use crate::consts::FINGERPRINT_LEN_HEX;

/// Compute BLAKE3 hash and return as lowercase hex string
pub fn blake3_hex(data: &[u8]) -> String {
    Hasher::new().update(data).finalize().to_hex().to_string()
}

/// Short, non-reversible tag for key material in logs and CLI output
pub fn fingerprint(data: &[u8]) -> String {
    let mut hex = blake3_hex(data);
    hex.truncate(FINGERPRINT_LEN_HEX);
    hex
}
