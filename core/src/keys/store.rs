// ## 📂 File: `src/keys/store.rs`

use std::collections::HashMap;
use std::fmt;
use std::sync::{PoisonError, RwLock};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::{debug, warn};

use crate::constants::KEY_LEN_32;
use crate::keys::types::KeyError;

/// Raw 32-byte key as provisioned by the host application.
pub type StoredKey = [u8; KEY_LEN_32];

/// Keyed lookup store, constructed empty and filled at provisioning time.
#[derive(Default)]
pub struct KeyStore {
    keys: RwLock<HashMap<String, StoredKey>>,
}

impl KeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or overwrite) the key for `(version, platform)`.
    ///
    /// # Returns
    /// - `Err(KeyError::KeyLenWrong)` unless `key` is exactly 32 bytes.
    ///
    /// # Notes
    /// - Both names are lowercased first, so `("V1", "Android")` and
    ///   `("v1", "android")` address the same entry.
    /// - Overwriting an existing entry is logged, not rejected.
    pub fn add_key(&self, version: &str, platform: &str, key: &[u8]) -> Result<(), KeyError> {
        let key: StoredKey = key
            .try_into()
            .map_err(|_| KeyError::KeyLenWrong { actual: key.len() })?;

        let id = store_id(version, platform);
        let mut keys = self.keys.write().unwrap_or_else(PoisonError::into_inner);
        if keys.insert(id, key).is_some() {
            warn!(
                version = %version.to_lowercase(),
                platform = %platform.to_lowercase(),
                "overwrote existing key"
            );
        } else {
            debug!(
                version = %version.to_lowercase(),
                platform = %platform.to_lowercase(),
                "key added"
            );
        }
        Ok(())
    }

    /// Base64-decode (standard alphabet, padded) then [`add_key`](Self::add_key).
    pub fn add_key_base64(&self, version: &str, platform: &str, b64_key: &str) -> Result<(), KeyError> {
        let key = STANDARD.decode(b64_key)?;
        self.add_key(version, platform, &key)
    }

    /// Copy out the key for `(version, platform)`.
    pub fn get(&self, version: &str, platform: &str) -> Result<StoredKey, KeyError> {
        let keys = self.keys.read().unwrap_or_else(PoisonError::into_inner);
        keys.get(&store_id(version, platform))
            .copied()
            .ok_or_else(|| KeyError::KeyMissing {
                version: version.to_owned(),
                platform: platform.to_owned(),
            })
    }

    pub fn contains(&self, version: &str, platform: &str) -> bool {
        let keys = self.keys.read().unwrap_or_else(PoisonError::into_inner);
        keys.contains_key(&store_id(version, platform))
    }

    pub fn len(&self) -> usize {
        self.keys.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Never print key bytes.
impl fmt::Debug for KeyStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyStore").field("entries", &self.len()).finish()
    }
}

#[inline]
fn store_id(version: &str, platform: &str) -> String {
    format!("{}|{}", version.to_lowercase(), platform.to_lowercase())
}
