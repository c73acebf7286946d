// ## 📂 File: `src/crypto/block.rs`

//! AES-256-CBC with PKCS#7 padding.
//!
//! Design notes:
//! - Fixed 16-byte blocks, 32-byte keys, 16-byte IVs.
//! - Encrypt always appends padding (a full block of 0x10 when aligned).
//! - Decrypt runs in place over the caller's buffer and fails closed: the
//!   padded plaintext is only exposed after the trailer validates.

use aes::cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt, KeyInit};
use aes::Aes256;

use crate::crypto::types::{CryptoError, BLOCK_LEN_16, KEY_LEN_32};

/// AES-256 in CBC mode bound to one derived key.
#[derive(Clone)]
pub struct CbcCipher {
    cipher: Aes256,
}

impl CbcCipher {
    /// Construct from a 32-byte derived key.
    pub fn new(key: &[u8]) -> Result<Self, CryptoError> {
        let cipher = Aes256::new_from_slice(key).map_err(|_| CryptoError::InvalidKeyLen {
            expected: KEY_LEN_32,
            actual: key.len(),
        })?;
        Ok(Self { cipher })
    }

    /// Pad and encrypt `plaintext`, returning `len(plaintext)` rounded up to the next block.
    pub fn encrypt(&self, iv: &[u8; BLOCK_LEN_16], plaintext: &[u8]) -> Vec<u8> {
        let mut buf = pkcs7_pad(plaintext);
        let mut prev = *iv;
        for chunk in buf.chunks_exact_mut(BLOCK_LEN_16) {
            for (b, p) in chunk.iter_mut().zip(prev.iter()) {
                *b ^= p;
            }
            let block = GenericArray::from_mut_slice(chunk);
            self.cipher.encrypt_block(block);
            prev.copy_from_slice(chunk);
        }
        buf
    }

    /// Decrypt `buf` in place and strip the padding.
    ///
    /// # Returns
    /// - `Ok(&buf[..plain_len])` on success.
    /// - `Err(CipherLenWrong)` when `buf` is empty or not block aligned.
    /// - `Err(PaddingWrong)` when the trailer is malformed.
    ///
    /// # Notes
    /// - `buf` is overwritten whatever the outcome.
    pub fn decrypt_in_place<'a>(
        &self,
        iv: &[u8; BLOCK_LEN_16],
        buf: &'a mut [u8],
    ) -> Result<&'a [u8], CryptoError> {
        if buf.is_empty() || buf.len() % BLOCK_LEN_16 != 0 {
            return Err(CryptoError::CipherLenWrong {
                min: BLOCK_LEN_16,
                block: BLOCK_LEN_16,
                actual: buf.len(),
            });
        }

        let mut prev = *iv;
        let mut saved = [0u8; BLOCK_LEN_16];
        for chunk in buf.chunks_exact_mut(BLOCK_LEN_16) {
            saved.copy_from_slice(chunk);
            self.cipher.decrypt_block(GenericArray::from_mut_slice(chunk));
            for (b, p) in chunk.iter_mut().zip(prev.iter()) {
                *b ^= p;
            }
            prev = saved;
        }

        let plain_len = pkcs7_unpad_len(buf)?;
        Ok(&buf[..plain_len])
    }
}

/// Append `pad = 16 - len % 16` bytes of value `pad`.
pub fn pkcs7_pad(plaintext: &[u8]) -> Vec<u8> {
    let pad = BLOCK_LEN_16 - plaintext.len() % BLOCK_LEN_16;
    let mut out = Vec::with_capacity(plaintext.len() + pad);
    out.extend_from_slice(plaintext);
    out.resize(plaintext.len() + pad, pad as u8);
    out
}

/// Validate the PKCS#7 trailer and return the unpadded length.
pub fn pkcs7_unpad_len(data: &[u8]) -> Result<usize, CryptoError> {
    let pad = match data.last() {
        Some(&p) => p as usize,
        None => return Err(CryptoError::PaddingWrong),
    };
    // A zero pad byte never comes out of `pkcs7_pad`.
    if pad == 0 || pad > BLOCK_LEN_16 || pad > data.len() {
        return Err(CryptoError::PaddingWrong);
    }

    let start = data.len() - pad;
    if data[start..].iter().any(|&b| b as usize != pad) {
        return Err(CryptoError::PaddingWrong);
    }
    Ok(start)
}
