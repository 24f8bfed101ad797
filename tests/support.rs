// tests/support.rs
//! Test utilities — builds synthetic Agile Keychains the way 1Password writes them

use aes::Aes128;
use agile_keychain::consts::{AES_BLOCK_SIZE, SALTED_MAGIC};
use agile_keychain::crypto::{derive_legacy_key_iv, derive_pbkdf2_key, pkcs7_pad, KeyIv};
use agile_keychain::KeyRecord;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use cbc::cipher::{block_padding::NoPadding, BlockEncryptMut, KeyIvInit};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(dead_code)]
pub const PASSPHRASE: &str = "1Password";

#[allow(dead_code)]
pub const ITERATIONS: u32 = 1000;

/// Deterministic pseudo-random bytes — fixtures must be reproducible
#[allow(dead_code)]
pub fn pattern(len: usize, seed: u8) -> Vec<u8> {
    (0..len)
        .map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed).rotate_left(3))
        .collect()
}

#[allow(dead_code)]
pub fn salt(seed: u8) -> [u8; 8] {
    let mut salt = [0u8; 8];
    salt.copy_from_slice(&pattern(8, seed));
    salt
}

/// AES-128-CBC + PKCS#7
#[allow(dead_code)]
pub fn encrypt(plaintext: &[u8], kiv: &KeyIv) -> Vec<u8> {
    let mut buf = pkcs7_pad(plaintext, AES_BLOCK_SIZE);
    let len = buf.len();
    cbc::Encryptor::<Aes128>::new(&kiv.key.into(), &kiv.iv.into())
        .encrypt_padded_mut::<NoPadding>(&mut buf, len)
        .expect("buffer is block aligned");
    buf
}

/// `"Salted__" ‖ salt ‖ ciphertext`
#[allow(dead_code)]
pub fn salted(salt: &[u8; 8], ciphertext: &[u8]) -> Vec<u8> {
    let mut out = SALTED_MAGIC.to_vec();
    out.extend_from_slice(salt);
    out.extend_from_slice(ciphertext);
    out
}

/// Wrap `raw_key` under `passphrase` (the `data` field), base64 encoded
#[allow(dead_code)]
pub fn seal_key(passphrase: &[u8], raw_key: &[u8], salt: &[u8; 8], iterations: u32) -> String {
    let derived = derive_pbkdf2_key(passphrase, salt, iterations);
    let kek = KeyIv::from_material(derived.expose_secret());
    STANDARD.encode(salted(salt, &encrypt(raw_key, &kek)))
}

/// Encrypt `raw_key` under itself (the `validation` field), base64 encoded
#[allow(dead_code)]
pub fn seal_validation(raw_key: &[u8], salt: &[u8; 8]) -> String {
    let kiv = derive_legacy_key_iv(raw_key, salt);
    STANDARD.encode(salted(salt, &encrypt(raw_key, &kiv)))
}

#[allow(dead_code)]
pub struct FixtureKey {
    pub identifier: String,
    pub level: String,
    pub raw: Vec<u8>,
}

/// A key record as written by 1Password, trailing NUL included
#[allow(dead_code)]
pub fn key_record(passphrase: &str, key: &FixtureKey, seed: u8) -> KeyRecord {
    KeyRecord {
        identifier: key.identifier.clone(),
        level: key.level.clone(),
        iterations: ITERATIONS,
        data: format!("{}\0", seal_key(passphrase.as_bytes(), &key.raw, &salt(seed), ITERATIONS)),
        validation: format!("{}\0", seal_validation(&key.raw, &salt(seed.wrapping_add(100)))),
    }
}

/// The two keys of a stock keychain: SL3 and SL5, 1024 bytes each
#[allow(dead_code)]
pub fn fixture_keys() -> Vec<FixtureKey> {
    vec![
        FixtureKey {
            identifier: "BE4CC37CD7C044E79B5CC1CC19A82A13".into(),
            level: "SL3".into(),
            raw: pattern(1024, 3),
        },
        FixtureKey {
            identifier: "98EB2E946008403280A3A8D9261018A4".into(),
            level: "SL5".into(),
            raw: pattern(1024, 5),
        },
    ]
}

#[allow(dead_code)]
pub fn fixture_records() -> Vec<KeyRecord> {
    fixture_keys()
        .iter()
        .enumerate()
        .map(|(i, key)| key_record(PASSPHRASE, key, i as u8 + 1))
        .collect()
}

#[allow(dead_code)]
pub fn encryption_keys_json(records: &[KeyRecord]) -> String {
    let list: Vec<_> = records
        .iter()
        .map(|r| {
            json!({
                "data": r.data,
                "validation": r.validation,
                "level": r.level,
                "identifier": r.identifier,
                "iterations": r.iterations,
            })
        })
        .collect();

    let id_for = |level: &str| {
        records
            .iter()
            .find(|r| r.level == level)
            .map(|r| r.identifier.clone())
    };

    json!({ "SL3": id_for("SL3"), "SL5": id_for("SL5"), "list": list }).to_string()
}

#[allow(dead_code)]
pub fn contents_json() -> String {
    json!([
        ["9E7673CCBB5B4AC9A7A8838835CB7E83", "webforms.WebForm", "Gmail", "gmail.com", 1_296_069_000i64, "", 0, "N"],
        ["2E21D652E0754BD59F6B94B0323D0142", "passwords.Password", "Router", "", 1_296_069_512i64, "", 0, "N"],
        ["67979C16A2E0453BB95F7EC10FD98E70", "wallet.financial.CreditCard", "Visa", "", 1_296_070_123i64, "", 0, "Y"],
    ])
    .to_string()
}

/// A keychain directory on disk; dropped with the TempDir
#[allow(dead_code)]
pub struct FixtureKeychain {
    dir: TempDir,
}

#[allow(dead_code)]
impl FixtureKeychain {
    pub fn new() -> Self {
        Self::with_records(&fixture_records())
    }

    pub fn with_records(records: &[KeyRecord]) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let profile = dir.path().join("1Password.agilekeychain/data/default");
        fs::create_dir_all(&profile).expect("create profile dir");
        fs::write(profile.join("encryptionKeys.js"), encryption_keys_json(records))
            .expect("write encryptionKeys.js");
        fs::write(profile.join("contents.js"), contents_json()).expect("write contents.js");
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join("1Password.agilekeychain")
    }
}
