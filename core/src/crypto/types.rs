// ## 📂 File: `src/crypto/types.rs`

use thiserror::Error;

pub use crate::constants::{BLOCK_LEN_16, KEY_LEN_32, SUM_LEN_16};

/// Block-layer and integrity failures.
///
/// All of these are terminal for the decode attempt; no partial plaintext
/// is ever handed back.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Body shorter than the generation minimum, or ciphertext not block aligned.
    #[error("cipher text length error: need at least {min} bytes in {block}-byte blocks, got {actual}")]
    CipherLenWrong { min: usize, block: usize, actual: usize },

    /// Derived key does not fit AES-256.
    #[error("invalid key length: expected={expected}, actual={actual}")]
    InvalidKeyLen { expected: usize, actual: usize },

    /// Signature over ciphertext and key material does not match.
    #[error("check sum wrong")]
    CheckSumWrong,

    /// IV check byte(s) do not match the transmitted IV.
    #[error("IV check error")]
    IvCheckError,

    /// PKCS#7 trailer malformed after decryption.
    #[error("padding not correct")]
    PaddingWrong,
}
