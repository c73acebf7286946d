//! cipher-envelope
//!
//! Keyed message envelope codec. Turns a plaintext plus routing parameters
//! (version, platform, param, generation) into a `sign.annex.body` token and
//! back, given the key shared for `(version, platform)`.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;
pub mod config;

// Layers, leaf first
pub mod crypto;
pub mod keys;
pub mod annex;
pub mod profile;
pub mod envelope;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::config::{CodecConfig, Direction, KeyringConfig};
    pub use crate::crypto::Crc8;
    pub use crate::envelope::{Decoder, Encoder, SingleKeyEncoder};
    pub use crate::keys::{KeyError, KeyStore};
    pub use crate::profile::Generation;
    pub use crate::types::{Decoded, EnvelopeError, ErrorKind};
}
