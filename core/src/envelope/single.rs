// ## 📂 File: `src/envelope/single.rs`

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::config::{CodecConfig, Direction};
use crate::envelope::encoder::Encoder;
use crate::keys::KeyError;
use crate::profile::Generation;
use crate::types::EnvelopeError;

/// Encoder pinned to one `(version, platform, key)`.
///
/// Always client-to-server, always generation 0.
#[derive(Debug)]
pub struct SingleKeyEncoder {
    version: String,
    platform: String,
    inner: Encoder,
}

impl SingleKeyEncoder {
    pub fn new(version: &str, platform: &str, key: &[u8]) -> Result<Self, KeyError> {
        let inner = Encoder::new(CodecConfig::new(Direction::ClientToServer));
        inner.add_key(version, platform, key)?;
        Ok(Self {
            version: version.to_owned(),
            platform: platform.to_owned(),
            inner,
        })
    }

    pub fn from_base64(version: &str, platform: &str, b64_key: &str) -> Result<Self, KeyError> {
        let key = STANDARD.decode(b64_key)?;
        Self::new(version, platform, &key)
    }

    pub fn encode(&self, plaintext: &[u8], param: &str) -> Result<Vec<u8>, EnvelopeError> {
        self.inner
            .encode(&self.version, &self.platform, plaintext, param, Generation::Gen0)
    }
}
