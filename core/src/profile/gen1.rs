// ## 📂 File: `src/profile/gen1.rs`

//! Generation 1.
//!
//! Design notes:
//! - `sumBytes` is the lowercase hex of MD5(param), unless `param` is a UUID
//!   text: then `sumBytes[2i] = sum[i]`, `sumBytes[2i+1] = uuid[15-i]`.
//! - Per key byte, odd parity of `sumBytes[i]` selects `!key ^ gray(s)`,
//!   even parity selects `reverse(key) ^ s`.
//! - The IV is masked with the raw 16-byte digest, not `sumBytes`.
//! - Prefix is `[g1][lrc][g2][ivEnc]`.

use crate::constants::{BLOCK_LEN_16, KEY_LEN_32};
use crate::crypto::{bit_reverse, gray_code, is_odd_parity, lrc, md5_sum, parse_uuid, CryptoError};
use crate::keys::StoredKey;
use crate::profile::{iv_enc_of, CipherMaterial};
use crate::utils::hex_lower_32;

pub const CHECK_LEN: usize = 3;

pub fn material(param: &str) -> CipherMaterial {
    let sum = md5_sum(param);
    let mask = match parse_uuid(param) {
        Some(uuid) => {
            let mut mask = [0u8; KEY_LEN_32];
            for i in 0..16 {
                mask[2 * i] = sum[i];
                mask[2 * i + 1] = uuid[15 - i];
            }
            mask
        }
        None => hex_lower_32(&sum),
    };
    CipherMaterial { sum, mask }
}

pub fn derive_key(stored: &StoredKey, material: &CipherMaterial) -> [u8; KEY_LEN_32] {
    let mut real = [0u8; KEY_LEN_32];
    for (i, &s) in material.mask.iter().enumerate() {
        real[i] = if is_odd_parity(s) {
            !stored[i] ^ gray_code(s)
        } else {
            bit_reverse(stored[i]) ^ s
        };
    }
    real
}

/// Linear check code over `ivEnc`: one bit per byte, from bit 3 transitions.
///
/// `cur = ivEnc[i] >> 3`; bit `(prev ^ cur) & 1` lands at position `7 - (i % 8)`
/// of `g1` (bytes 0..8) or `g2` (bytes 8..16). `prev` starts at 0 and carries
/// across the two windows.
pub fn check_codes(iv_enc: &[u8; BLOCK_LEN_16]) -> (u8, u8) {
    let (mut g1, mut g2) = (0u8, 0u8);
    let mut last = 0u8;
    for (i, &b) in iv_enc.iter().enumerate() {
        let cur = b >> 3;
        let bit = ((last ^ cur) & 0x01) << (7 - (i % 8));
        if i < 8 {
            g1 |= bit;
        } else {
            g2 |= bit;
        }
        last = cur;
    }
    (g1, g2)
}

pub fn seal_iv(material: &CipherMaterial, iv: &[u8; BLOCK_LEN_16]) -> [u8; CHECK_LEN + BLOCK_LEN_16] {
    let mut iv_enc = [0u8; BLOCK_LEN_16];
    for (i, e) in iv_enc.iter_mut().enumerate() {
        *e = !iv[i] ^ material.sum[i];
    }
    let (g1, g2) = check_codes(&iv_enc);

    let mut out = [0u8; CHECK_LEN + BLOCK_LEN_16];
    out[0] = g1;
    out[1] = lrc(&iv_enc);
    out[2] = g2;
    out[CHECK_LEN..].copy_from_slice(&iv_enc);
    out
}

pub fn open_iv(material: &CipherMaterial, prefix: &[u8]) -> Result<[u8; BLOCK_LEN_16], CryptoError> {
    let mut iv = iv_enc_of(prefix, CHECK_LEN)?;

    let (g1, g2) = check_codes(&iv);
    if g1 != prefix[0] || g2 != prefix[2] {
        return Err(CryptoError::IvCheckError);
    }
    if lrc(&iv) != prefix[1] {
        return Err(CryptoError::IvCheckError);
    }

    for (v, &s) in iv.iter_mut().zip(material.sum.iter()) {
        *v = !(*v ^ s);
    }
    Ok(iv)
}
