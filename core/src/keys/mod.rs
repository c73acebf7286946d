//! Key store: `(version, platform) -> 32-byte key`.
//!
//! Design notes:
//! - Version and platform are lowercased on insert and on lookup.
//! - Reads are concurrent; writes serialize behind an `RwLock`.
//! - Keys are never removed; re-provisioning overwrites with a warning.

pub mod types;
pub mod store;

pub use types::*;
pub use store::*;
