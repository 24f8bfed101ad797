// src/crypto/legacy.rs
//! OpenSSL's legacy `EVP_BytesToKey` (MD5, one iteration) for AES-128
//!
//! Only used to check a recovered key against its validation blob.

use md5::{Digest, Md5};
use zeroize::Zeroize;

use crate::consts::{AES128_KEY_LEN, LEGACY_KDF_ROUNDS, PBKDF2_OUTPUT_LEN, SALT_LEN};

use super::kdf::KeyIv;

/// `h0 = MD5(secret ‖ salt)`, `h1 = MD5(h0 ‖ secret ‖ salt)`; key = h0, iv = h1
pub fn derive_legacy_key_iv(secret: &[u8], salt: &[u8; SALT_LEN]) -> KeyIv {
    let mut material = [0u8; PBKDF2_OUTPUT_LEN];

    for round in 0..LEGACY_KDF_ROUNDS {
        let mut hasher = Md5::new();
        if round > 0 {
            hasher.update(&material[(round - 1) * AES128_KEY_LEN..round * AES128_KEY_LEN]);
        }
        hasher.update(secret);
        hasher.update(salt);
        let digest = hasher.finalize();
        material[round * AES128_KEY_LEN..(round + 1) * AES128_KEY_LEN].copy_from_slice(&digest);
    }

    let key_iv = KeyIv::from_material(&material);
    material.zeroize();
    key_iv
}
