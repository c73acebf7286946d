// ## 📂 File: `src/envelope/mod.rs`

//! Envelope layer: `sign.annex.body` tokens.
//!
//! ```text
//! sign   32 uppercase hex chars, MD5(ciphertext || key material)
//! annex  standard base64 of the metadata record
//! body   [check bytes][ivEnc; 16][AES-256-CBC ciphertext]   (raw bytes)
//! ```
//!
//! Encode: annex + profile -> block layer -> framing.
//! Decode: framing -> annex -> key lookup -> profile (by `ec`) -> block layer.

pub mod framing;
pub mod encoder;
pub mod decoder;
pub mod single;

pub use framing::*;
pub use encoder::*;
pub use decoder::*;
pub use single::*;
