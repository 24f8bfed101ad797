// src/crypto/salted.rs
use crate::consts::{SALTED_HEADER_LEN, SALTED_MAGIC, SALT_LEN};
use crate::error::FormatError;

/// An OpenSSL `enc` blob split into its salt and ciphertext
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaltedBlob<'a> {
    pub salt: [u8; SALT_LEN],
    pub ciphertext: &'a [u8],
}

/// Split `"Salted__" ‖ salt[8] ‖ ciphertext`.
///
/// There is no zero-salt fallback: a blob without the magic is rejected.
pub fn extract_salted_blob(bytes: &[u8]) -> Result<SaltedBlob<'_>, FormatError> {
    if bytes.len() < SALTED_HEADER_LEN || !bytes.starts_with(SALTED_MAGIC) {
        return Err(FormatError::MissingSaltHeader);
    }

    let mut salt = [0u8; SALT_LEN];
    salt.copy_from_slice(&bytes[SALTED_MAGIC.len()..SALTED_HEADER_LEN]);

    Ok(SaltedBlob {
        salt,
        ciphertext: &bytes[SALTED_HEADER_LEN..],
    })
}
