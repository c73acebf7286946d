// ## 📂 File: `src/profile/mod.rs`

//! Cipher profiles: the two protocol generations.
//!
//! A profile owns three things:
//! - the 32-byte key material derived from `param` (`mask`), also signed over,
//! - the mapping from stored key to the real AES-256 key,
//! - the transmitted IV form and its check bytes.
//!
//! Everything else (block layer, framing, signature) is shared.

pub mod gen0;
pub mod gen1;

use crate::config::{CodecConfig, Direction};
use crate::constants::{ec_tags, layout, BLOCK_LEN_16, KEY_LEN_32, SUM_LEN_16};
use crate::crypto::CryptoError;
use crate::keys::StoredKey;
use crate::types::EnvelopeError;

/// Per-message material derived from `param`. Never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct CipherMaterial {
    /// Raw MD5 of `param`; masks the IV.
    pub sum: [u8; SUM_LEN_16],
    /// Key mask and signature material (gen0: sumHex, gen1: sumBytes).
    pub mask: [u8; KEY_LEN_32],
}

/// Protocol generation, selected by the annex `ec` tag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Generation {
    /// XOR key mask, CRC-8 IV check. Tag `""` (or `"0"`).
    Gen0,
    /// Parity-selected key substitution, linear check code + LRC. Tag `"1"`.
    Gen1,
}

impl Generation {
    /// Resolve an annex `ec` tag.
    pub fn from_tag(ec: &str) -> Result<Self, EnvelopeError> {
        match ec {
            ec_tags::GEN0 | ec_tags::GEN0_EXPLICIT => Ok(Generation::Gen0),
            ec_tags::GEN1 => Ok(Generation::Gen1),
            other => Err(EnvelopeError::EncWrong { tag: other.to_owned() }),
        }
    }

    /// Tag written into the annex; generation 0 omits `ec` entirely.
    pub fn tag(self) -> &'static str {
        match self {
            Generation::Gen0 => ec_tags::GEN0,
            Generation::Gen1 => ec_tags::GEN1,
        }
    }

    /// Check bytes plus `ivEnc`.
    pub fn prefix_len(self) -> usize {
        match self {
            Generation::Gen0 => layout::GEN0_PREFIX_LEN,
            Generation::Gen1 => layout::GEN1_PREFIX_LEN,
        }
    }

    /// Prefix plus one cipher block.
    pub fn min_body_len(self) -> usize {
        match self {
            Generation::Gen0 => layout::GEN0_MIN_BODY_LEN,
            Generation::Gen1 => layout::GEN1_MIN_BODY_LEN,
        }
    }

    pub fn material(self, param: &str) -> CipherMaterial {
        match self {
            Generation::Gen0 => gen0::material(param),
            Generation::Gen1 => gen1::material(param),
        }
    }

    /// Real AES-256 key for this message.
    ///
    /// # Notes
    /// - Only generation 0 depends on `direction`; the generation-1 schedule
    ///   is the same for both roles.
    pub fn derive_key(
        self,
        direction: Direction,
        stored: &StoredKey,
        material: &CipherMaterial,
    ) -> [u8; KEY_LEN_32] {
        match self {
            Generation::Gen0 => gen0::derive_key(direction, stored, material),
            Generation::Gen1 => gen1::derive_key(stored, material),
        }
    }

    /// Obfuscate `iv` into the transmitted body prefix.
    pub fn seal_iv(
        self,
        config: &CodecConfig,
        material: &CipherMaterial,
        iv: &[u8; BLOCK_LEN_16],
    ) -> Vec<u8> {
        match self {
            Generation::Gen0 => gen0::seal_iv(&config.crc8, material, iv).to_vec(),
            Generation::Gen1 => gen1::seal_iv(material, iv).to_vec(),
        }
    }

    /// Verify the check bytes in `prefix` and recover the IV.
    pub fn open_iv(
        self,
        config: &CodecConfig,
        material: &CipherMaterial,
        prefix: &[u8],
    ) -> Result<[u8; BLOCK_LEN_16], CryptoError> {
        match self {
            Generation::Gen0 => gen0::open_iv(&config.crc8, material, prefix),
            Generation::Gen1 => gen1::open_iv(material, prefix),
        }
    }
}

impl TryFrom<u8> for Generation {
    type Error = EnvelopeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Generation::Gen0),
            1 => Ok(Generation::Gen1),
            other => Err(EnvelopeError::EncWrong { tag: other.to_string() }),
        }
    }
}

/// Fresh random IV from the thread-local CSPRNG.
pub fn random_iv() -> [u8; BLOCK_LEN_16] {
    let mut iv = [0u8; BLOCK_LEN_16];
    rand::RngCore::fill_bytes(&mut rand::thread_rng(), &mut iv);
    iv
}

/// Split a prefix into its fixed-size `ivEnc` tail.
#[inline]
pub(crate) fn iv_enc_of(prefix: &[u8], check_len: usize) -> Result<[u8; BLOCK_LEN_16], CryptoError> {
    prefix
        .get(check_len..check_len + BLOCK_LEN_16)
        .and_then(|s| s.try_into().ok())
        .ok_or(CryptoError::CipherLenWrong {
            min: check_len + BLOCK_LEN_16,
            block: BLOCK_LEN_16,
            actual: prefix.len(),
        })
}
