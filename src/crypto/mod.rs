// src/crypto/mod.rs
//! Pure cryptographic primitives — no I/O, no JSON
//!
//! Everything here works on in-memory buffers and reproduces the OpenSSL
//! conventions the Agile Keychain format was written with:
//! `"Salted__"` headers, the MD5 `EVP_BytesToKey` derivation, PBKDF2-SHA1,
//! AES-128-CBC and PKCS#7 padding.
mod decrypt;
mod kdf;
mod legacy;
mod padding;
mod salted;

pub use decrypt::aes128_cbc_decrypt;
pub use kdf::{derive_pbkdf2_key, KeyIv};
pub use legacy::derive_legacy_key_iv;
pub use padding::{pkcs7_pad, pkcs7_unpad};
pub use salted::{extract_salted_blob, SaltedBlob};
