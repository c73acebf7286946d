// ## 📂 File: `src/keys/types.rs`

use thiserror::Error;

/// Provisioning errors.
#[derive(Debug, Error)]
pub enum KeyError {
    /// Stored keys must be exactly 32 bytes.
    #[error("key length must be 32 bytes, got {actual}")]
    KeyLenWrong { actual: usize },

    /// No key for the (normalized) version and platform.
    #[error("key missed for version={version} and platform={platform}")]
    KeyMissing { version: String, platform: String },

    #[error("base64 key decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("keyring config error: {0}")]
    Config(#[from] serde_json::Error),
}
