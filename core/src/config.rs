// ## 📂 File: `src/config.rs`

//! Codec configuration and JSON keyring provisioning.
//!
//! Design notes:
//! - `Direction` is the role flag. It is never transmitted; both ends of a
//!   channel must be configured with the same value.
//! - `Crc8` is the generation-0 IV check primitive, pinned to CRC-8/SMBUS
//!   by default.
//! - `KeyringConfig` is a convenience for hosts that keep keys in JSON; the
//!   store itself does not care where keys come from.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::crypto::Crc8;
use crate::keys::{KeyError, KeyStore};
use crate::utils::app_platform;

/// Role flag shared out of band by both endpoints.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Role flag `false`: generation 0 masks with the raw sumHex byte.
    #[default]
    ClientToServer,
    /// Role flag `true`: generation 0 masks with the complemented sumHex byte.
    ServerToClient,
}

impl Direction {
    #[inline]
    pub fn is_server_to_client(self) -> bool {
        matches!(self, Direction::ServerToClient)
    }
}

impl From<bool> for Direction {
    fn from(stoc: bool) -> Self {
        if stoc { Direction::ServerToClient } else { Direction::ClientToServer }
    }
}

/// Settings shared by an encoder/decoder pair.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodecConfig {
    pub direction: Direction,
    pub crc8: Crc8,
}

impl CodecConfig {
    pub fn new(direction: Direction) -> Self {
        Self { direction, crc8: Crc8::default() }
    }

    pub fn with_crc8(mut self, crc8: Crc8) -> Self {
        self.crc8 = crc8;
        self
    }
}

/// One provisioned key as it appears in a JSON keyring.
#[derive(Clone, Serialize, Deserialize)]
pub struct KeyEntry {
    pub version: String,
    pub platform: String,
    /// When set, the key is stored under `platform|app_id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    /// Standard base64 of the 32-byte key.
    pub key: String,
}

impl fmt::Debug for KeyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyEntry")
            .field("version", &self.version)
            .field("platform", &self.platform)
            .field("app_id", &self.app_id)
            .field("key", &"<redacted>")
            .finish()
    }
}

/// JSON keyring:
///
/// ```json
/// { "direction": "server_to_client",
///   "keys": [ { "version": "v1", "platform": "ios", "key": "<base64>" } ] }
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct KeyringConfig {
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub keys: Vec<KeyEntry>,
}

impl KeyringConfig {
    pub fn from_json(json: &str) -> Result<Self, KeyError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn codec_config(&self) -> CodecConfig {
        CodecConfig::new(self.direction)
    }

    /// Insert every entry into `store`; stops at the first bad key.
    pub fn apply(&self, store: &KeyStore) -> Result<(), KeyError> {
        for entry in &self.keys {
            match &entry.app_id {
                Some(app_id) => store.add_key_base64(
                    &entry.version,
                    &app_platform(&entry.platform, app_id),
                    &entry.key,
                )?,
                None => store.add_key_base64(&entry.version, &entry.platform, &entry.key)?,
            }
        }
        Ok(())
    }
}
