// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical secret containers used throughout agile-keychain.
//! Everything wrapped here is zeroized on drop and redacted from `Debug`.

pub use secure_gate::{dynamic_alias, fixed_alias};

// Fixed-size secrets
fixed_alias!(DerivedKey32, 32); // PBKDF2-SHA1 output: 16-byte KEK ‖ 16-byte IV

// Dynamic secrets
dynamic_alias!(MasterPassword, String); // keychain unlock passphrase
dynamic_alias!(RawKey, Vec<u8>); // validated vault key, post-unpad
