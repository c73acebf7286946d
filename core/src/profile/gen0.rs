// ## 📂 File: `src/profile/gen0.rs`

//! Generation 0.
//!
//! ```text
//! sum      = MD5(param)
//! sumHex   = uppercase hex(sum)                    (32 ASCII bytes)
//! realKey  = key ^ sumHex        (client-to-server)
//!          = key ^ !sumHex       (server-to-client)
//! ivEnc    = iv ^ sum
//! prefix   = [crc8(ivEnc)][ivEnc]
//! ```

use crate::config::Direction;
use crate::constants::{BLOCK_LEN_16, KEY_LEN_32};
use crate::crypto::{md5_sum, Crc8, CryptoError};
use crate::keys::StoredKey;
use crate::profile::{iv_enc_of, CipherMaterial};
use crate::utils::hex_upper_32;

pub const CHECK_LEN: usize = 1;

pub fn material(param: &str) -> CipherMaterial {
    let sum = md5_sum(param);
    CipherMaterial { sum, mask: hex_upper_32(&sum) }
}

pub fn derive_key(direction: Direction, stored: &StoredKey, material: &CipherMaterial) -> [u8; KEY_LEN_32] {
    let mut real = material.mask;
    let complement = direction.is_server_to_client();
    for (r, &k) in real.iter_mut().zip(stored.iter()) {
        *r ^= if complement { !k } else { k };
    }
    real
}

pub fn seal_iv(crc8: &Crc8, material: &CipherMaterial, iv: &[u8; BLOCK_LEN_16]) -> [u8; CHECK_LEN + BLOCK_LEN_16] {
    let mut out = [0u8; CHECK_LEN + BLOCK_LEN_16];
    for (i, (&v, &s)) in iv.iter().zip(material.sum.iter()).enumerate() {
        out[CHECK_LEN + i] = v ^ s;
    }
    out[0] = crc8.checksum(&out[CHECK_LEN..]);
    out
}

pub fn open_iv(crc8: &Crc8, material: &CipherMaterial, prefix: &[u8]) -> Result<[u8; BLOCK_LEN_16], CryptoError> {
    let mut iv = iv_enc_of(prefix, CHECK_LEN)?;
    if crc8.checksum(&iv) != prefix[0] {
        return Err(CryptoError::IvCheckError);
    }
    for (v, &s) in iv.iter_mut().zip(material.sum.iter()) {
        *v ^= s;
    }
    Ok(iv)
}
