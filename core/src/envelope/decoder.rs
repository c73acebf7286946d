// ## 📂 File: `src/envelope/decoder.rs`

//! Decode side.
//!
//! Check order, all fail closed:
//! 1. framing and annex format, generation tag
//! 2. body length against the generation minimum
//! 3. key lookup
//! 4. signature over ciphertext and key material
//! 5. IV check bytes
//! 6. block alignment and padding after decryption

use tracing::debug;

use crate::annex::unmarshal;
use crate::config::CodecConfig;
use crate::crypto::{verify_signature, CbcCipher, CryptoError};
use crate::constants::BLOCK_LEN_16;
use crate::envelope::framing::split_points;
use crate::keys::{KeyError, KeyStore};
use crate::profile::Generation;
use crate::types::{Decoded, EnvelopeError};
use crate::utils::app_platform;

/// Decode side of a channel. Owns its own key store.
#[derive(Debug, Default)]
pub struct Decoder {
    config: CodecConfig,
    keys: KeyStore,
}

impl Decoder {
    pub fn new(config: CodecConfig) -> Self {
        Self { config, keys: KeyStore::new() }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn keys(&self) -> &KeyStore {
        &self.keys
    }

    pub fn add_key(&self, version: &str, platform: &str, key: &[u8]) -> Result<(), KeyError> {
        self.keys.add_key(version, platform, key)
    }

    pub fn add_key_base64(&self, version: &str, platform: &str, b64_key: &str) -> Result<(), KeyError> {
        self.keys.add_key_base64(version, platform, b64_key)
    }

    /// Decode a token without touching the caller's bytes (copies first).
    pub fn decode(&self, token: &[u8]) -> Result<Decoded, EnvelopeError> {
        let mut buf = token.to_vec();
        self.decode_in_place(&mut buf)
    }

    /// Decode a token, decrypting inside `token`.
    ///
    /// The body region of `token` is overwritten whether or not decode succeeds.
    pub fn decode_in_place(&self, token: &mut [u8]) -> Result<Decoded, EnvelopeError> {
        self.open(token, None)
    }

    /// Like [`decode`](Self::decode), with the key looked up under `platform|app_id`.
    ///
    /// The returned `platform` is the namespaced one.
    pub fn decode_with_app_id(&self, app_id: &str, token: &[u8]) -> Result<Decoded, EnvelopeError> {
        let mut buf = token.to_vec();
        self.decode_with_app_id_in_place(app_id, &mut buf)
    }

    pub fn decode_with_app_id_in_place(&self, app_id: &str, token: &mut [u8]) -> Result<Decoded, EnvelopeError> {
        self.open(token, Some(app_id))
    }

    fn open(&self, token: &mut [u8], app_id: Option<&str>) -> Result<Decoded, EnvelopeError> {
        self.open_inner(token, app_id)
            .inspect_err(|e| debug!(error = %e, "decode rejected"))
    }

    fn open_inner(&self, token: &mut [u8], app_id: Option<&str>) -> Result<Decoded, EnvelopeError> {
        let (sign_end, annex_end) = split_points(token)?;
        let (head, body) = token.split_at_mut(annex_end + 1);
        let sign = &head[..sign_end];
        let annex = unmarshal(&head[sign_end + 1..annex_end])?;

        let generation = Generation::from_tag(&annex.ec)?;
        if body.len() < generation.min_body_len() {
            return Err(CryptoError::CipherLenWrong {
                min: generation.min_body_len(),
                block: BLOCK_LEN_16,
                actual: body.len(),
            }
            .into());
        }

        let platform = match app_id {
            Some(app_id) => app_platform(&annex.platform, app_id),
            None => annex.platform,
        };
        let stored = self.keys.get(&annex.version, &platform)?;

        let material = generation.material(&annex.param);
        let (prefix, ciphertext) = body.split_at_mut(generation.prefix_len());
        verify_signature(sign, ciphertext, &material.mask)?;

        let iv = generation.open_iv(&self.config, &material, prefix)?;
        let real_key = generation.derive_key(self.config.direction, &stored, &material);
        let plaintext = CbcCipher::new(&real_key)?
            .decrypt_in_place(&iv, ciphertext)?
            .to_vec();

        Ok(Decoded {
            version: annex.version,
            platform,
            param: annex.param,
            plaintext,
        })
    }
}
