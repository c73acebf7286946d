// ## 📂 File: `src/crypto/digest.rs`

//! MD5 helpers: the per-param `sum` and the envelope signature.
//!
//! Signature input (canonical):
//!
//! ```text
//! ciphertext        (N bytes, the body after the IV prefix)
//! key material      (32 bytes: gen0 sumHex, gen1 sumBytes)
//! ```
//!
//! Output is the digest as 32 uppercase hex chars.

use md5::{Digest as _, Md5};

use crate::crypto::types::{CryptoError, SUM_LEN_16};
use crate::constants::SIGN_LEN_32;
use crate::utils::hex_upper_32;

/// MD5 of the caller's `param` text.
#[inline]
pub fn md5_sum(param: &str) -> [u8; SUM_LEN_16] {
    Md5::digest(param.as_bytes()).into()
}

/// Incremental signature builder over `ciphertext || material`.
pub struct SignatureBuilder {
    state: Md5,
}

impl SignatureBuilder {
    #[inline]
    pub fn new() -> Self {
        Self { state: Md5::new() }
    }

    #[inline]
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.state.update(data);
        self
    }

    /// Finalize to uppercase hex, two chars per digest byte.
    #[inline]
    pub fn finalize(self) -> [u8; SIGN_LEN_32] {
        let sum: [u8; SUM_LEN_16] = self.state.finalize().into();
        hex_upper_32(&sum)
    }
}

impl Default for SignatureBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the envelope signature for `ciphertext` under `material`.
pub fn sign(ciphertext: &[u8], material: &[u8]) -> [u8; SIGN_LEN_32] {
    let mut builder = SignatureBuilder::new();
    builder.update(ciphertext).update(material);
    builder.finalize()
}

/// Recompute the signature and compare it to the transmitted one.
///
/// # Returns
/// - `Ok(())` when `expected` matches byte for byte.
/// - `Err(CryptoError::CheckSumWrong)` otherwise (including length mismatch).
pub fn verify_signature(
    expected: &[u8],
    ciphertext: &[u8],
    material: &[u8],
) -> Result<(), CryptoError> {
    let actual = sign(ciphertext, material);
    if expected == actual.as_slice() {
        Ok(())
    } else {
        Err(CryptoError::CheckSumWrong)
    }
}
