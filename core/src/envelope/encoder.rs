// ## 📂 File: `src/envelope/encoder.rs`

use crate::annex::{encode_annex, Annex};
use crate::config::CodecConfig;
use crate::crypto::{sign, CbcCipher};
use crate::envelope::framing::assemble;
use crate::keys::{KeyError, KeyStore};
use crate::profile::{random_iv, Generation};
use crate::types::EnvelopeError;

/// Encode side of a channel. Owns its own key store.
///
/// `Encoder` is `Sync`: share it behind an `Arc` for concurrent encodes.
#[derive(Debug, Default)]
pub struct Encoder {
    config: CodecConfig,
    keys: KeyStore,
}

impl Encoder {
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

    /// Encrypt `plaintext` into a `sign.annex.body` token.
    ///
    /// # Returns
    /// - `Err(Key(KeyMissing))` when no key is provisioned for `(version, platform)`.
    /// - `Err(Annex(ReservedSeparator))` when a field contains 0x1E or 0x1F.
    ///
    /// # Notes
    /// - A fresh random IV is drawn per call, so two encodes of the same
    ///   input never produce the same token.
    pub fn encode(
        &self,
        version: &str,
        platform: &str,
        plaintext: &[u8],
        param: &str,
        generation: Generation,
    ) -> Result<Vec<u8>, EnvelopeError> {
        let stored = self.keys.get(version, platform)?;
        let annex = encode_annex(&Annex::new(version, platform, param, generation.tag()))?;

        let material = generation.material(param);
        let real_key = generation.derive_key(self.config.direction, &stored, &material);

        let iv = random_iv();
        let prefix = generation.seal_iv(&self.config, &material, &iv);
        let ciphertext = CbcCipher::new(&real_key)?.encrypt(&iv, plaintext);

        let signature = sign(&ciphertext, &material.mask);
        Ok(assemble(&signature, &annex, &prefix, &ciphertext))
    }
}
