// src/crypto/decrypt.rs
use aes::Aes128;
use cbc::cipher::{block_padding::NoPadding, BlockDecryptMut, KeyIvInit};
use zeroize::Zeroizing;

use crate::consts::{AES128_KEY_LEN, AES_BLOCK_SIZE};
use crate::error::FormatError;

type Aes128CbcDec = cbc::Decryptor<Aes128>;

/// Raw AES-128-CBC decryption (in-memory); padding is left in place.
///
/// See [`super::pkcs7_unpad`] for removing it.
pub fn aes128_cbc_decrypt(
    ciphertext: &[u8],
    key: &[u8; AES128_KEY_LEN],
    iv: &[u8; AES128_KEY_LEN],
) -> Result<Zeroizing<Vec<u8>>, FormatError> {
    let len = ciphertext.len();
    if len == 0 || len % AES_BLOCK_SIZE != 0 {
        return Err(FormatError::InvalidBlockLength(len));
    }

    let mut buf = Zeroizing::new(ciphertext.to_vec());
    Aes128CbcDec::new(&(*key).into(), &(*iv).into())
        .decrypt_padded_mut::<NoPadding>(&mut buf[..])
        .map_err(|_| FormatError::InvalidBlockLength(len))?;

    Ok(buf)
}
