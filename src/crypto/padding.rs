// src/crypto/padding.rs
//! PKCS#7 padding

use crate::error::CryptoError;

/// Strip PKCS#7 padding.
///
/// Rejects a pad byte of zero, one larger than the buffer or the block size,
/// and any pad run that is not uniform. The check touches exactly `p` bytes.
pub fn pkcs7_unpad(data: &[u8], block_size: usize) -> Result<&[u8], CryptoError> {
    let Some(&last) = data.last() else {
        return Err(CryptoError::InvalidPadding);
    };

    let pad = usize::from(last);
    if pad == 0 || pad > data.len() || pad > block_size {
        return Err(CryptoError::InvalidPadding);
    }

    let body_len = data.len() - pad;
    let mismatch = data[body_len..].iter().fold(0u8, |acc, &b| acc | (b ^ last));
    if mismatch != 0 {
        return Err(CryptoError::InvalidPadding);
    }

    Ok(&data[..body_len])
}

/// Append PKCS#7 padding; always adds between 1 and `block_size` bytes.
///
/// `block_size` must be in `1..=255`.
pub fn pkcs7_pad(data: &[u8], block_size: usize) -> Vec<u8> {
    debug_assert!((1..=255).contains(&block_size));
    let pad = block_size - data.len() % block_size;
    let mut out = Vec::with_capacity(data.len() + pad);
    out.extend_from_slice(data);
    out.resize(data.len() + pad, pad as u8);
    out
}
