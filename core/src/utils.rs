// ## 📂 File: `src/utils.rs`

use crate::constants::APP_SEP;

/// Hex-encode a 16-byte digest, two uppercase chars per byte, no separators.
///
/// Every byte keeps both nibbles, so a leading zero nibble is never dropped.
#[inline]
pub fn hex_upper_32(sum: &[u8; 16]) -> [u8; 32] {
    let mut out = hex_lower_32(sum);
    out.make_ascii_uppercase();
    out
}

/// Lowercase counterpart of [`hex_upper_32`].
#[inline]
pub fn hex_lower_32(sum: &[u8; 16]) -> [u8; 32] {
    let mut out = [0u8; 32];
    // Fixed 16 -> 32 sizes, the length check inside cannot fail.
    let _ = hex::encode_to_slice(sum, &mut out);
    out
}

/// Platform namespaced by application id: `platform|app_id`.
pub fn app_platform(platform: &str, app_id: &str) -> String {
    let mut out = String::with_capacity(platform.len() + 1 + app_id.len());
    out.push_str(platform);
    out.push(APP_SEP);
    out.push_str(app_id);
    out
}
