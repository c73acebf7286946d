// ## 📂 File: `src/annex/mod.rs`

//! Annex: the base64-wrapped metadata record carried in the token's middle segment.
//!
//! Layout before base64 (standard alphabet, padded):
//!
//! ```text
//! param<US>{param}<RS>version<US>{version}<RS>platform<US>{platform}[<RS>ec<US>{ec}]
//! ```
//!
//! with `<RS>` = 0x1E and `<US>` = 0x1F. `ec` is omitted when empty.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
