// ## 📂 File: `src/constants.rs`

//! Wire constants shared by the annex, profile and envelope layers.
//! Changing any of these breaks compatibility with tokens already in flight.

/// Segment separator between `sign`, `annex` and `body`.
pub const DOT: u8 = b'.';

/// Separates annex groups (`key<US>value` pairs).
pub const GROUP_SEP: u8 = 0x1E;

/// Separates the key from the value inside one annex group.
pub const UNIT_SEP: u8 = 0x1F;

/// Stored (provisioned) key length in bytes, also the AES-256 key length.
pub const KEY_LEN_32: usize = 32;

/// AES block size and IV length.
pub const BLOCK_LEN_16: usize = 16;

/// MD5 digest length.
pub const SUM_LEN_16: usize = 16;

/// Signature length: uppercase hex of a 16-byte MD5 digest.
pub const SIGN_LEN_32: usize = SUM_LEN_16 * 2;

/// Joins platform and application id when keys are namespaced per app.
pub const APP_SEP: char = '|';

/// Annex unit names.
pub mod units {
    pub const PARAM: &str = "param";
    pub const VERSION: &str = "version";
    pub const PLATFORM: &str = "platform";
    pub const EC: &str = "ec";
}

/// Body layout per generation.
///
/// ```text
/// gen0: [crc8][ivEnc; 16][ciphertext]
/// gen1: [g1][lrc][g2][ivEnc; 16][ciphertext]
/// ```
pub mod layout {
    use super::BLOCK_LEN_16;

    pub const GEN0_PREFIX_LEN: usize = 1 + BLOCK_LEN_16;
    pub const GEN1_PREFIX_LEN: usize = 3 + BLOCK_LEN_16;

    /// Prefix plus at least one cipher block.
    pub const GEN0_MIN_BODY_LEN: usize = GEN0_PREFIX_LEN + BLOCK_LEN_16; // 33
    pub const GEN1_MIN_BODY_LEN: usize = GEN1_PREFIX_LEN + BLOCK_LEN_16; // 35
}

/// Annex `ec` tags.
pub mod ec_tags {
    pub const GEN0: &str = "";
    pub const GEN0_EXPLICIT: &str = "0";
    pub const GEN1: &str = "1";
}
