// src/crypto/kdf.rs
//! PBKDF2-HMAC-SHA1 key-encrypting-key derivation

use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::aliases::DerivedKey32;
use crate::consts::{AES128_KEY_LEN, PBKDF2_OUTPUT_LEN, SALT_LEN};

/// An AES-128 key and IV pair, wiped on drop
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeyIv {
    pub key: [u8; AES128_KEY_LEN],
    pub iv: [u8; AES128_KEY_LEN],
}

impl KeyIv {
    /// Split 32 bytes of derived material: bytes 0–15 key, 16–31 IV
    pub fn from_material(material: &[u8; PBKDF2_OUTPUT_LEN]) -> Self {
        let mut key = [0u8; AES128_KEY_LEN];
        let mut iv = [0u8; AES128_KEY_LEN];
        key.copy_from_slice(&material[..AES128_KEY_LEN]);
        iv.copy_from_slice(&material[AES128_KEY_LEN..]);
        Self { key, iv }
    }
}

impl std::fmt::Debug for KeyIv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("KeyIv([REDACTED])")
    }
}

/// Derive 32 bytes with PBKDF2-HMAC-SHA1.
///
/// Callers split the result with [`KeyIv::from_material`].
pub fn derive_pbkdf2_key(passphrase: &[u8], salt: &[u8; SALT_LEN], iterations: u32) -> DerivedKey32 {
    let mut out = [0u8; PBKDF2_OUTPUT_LEN];
    pbkdf2_hmac::<Sha1>(passphrase, salt, iterations, &mut out);
    let derived = DerivedKey32::new(out);
    out.zeroize();
    derived
}
