// ## 📂 File: `src/crypto/uuid.rs`

/// Length of the textual UUID form: 32 hex digits plus 4 hyphens.
pub const UUID_TEXT_LEN: usize = 36;

/// True for exactly 36 bytes made of 32 hex digits (either case) and 4 hyphens.
///
/// Hyphen positions are not checked, only their count.
pub fn is_valid_uuid(s: &str) -> bool {
    if s.len() != UUID_TEXT_LEN {
        return false;
    }

    let (mut digits, mut hyphens) = (0usize, 0usize);
    for b in s.bytes() {
        match b {
            b'0'..=b'9' | b'a'..=b'f' | b'A'..=b'F' => digits += 1,
            b'-' => hyphens += 1,
            _ => return false,
        }
    }
    digits == 32 && hyphens == 4
}

/// Parse a UUID text into its 16 raw bytes (hyphens stripped, hex decoded).
///
/// Returns `None` for anything [`is_valid_uuid`] rejects.
pub fn parse_uuid(s: &str) -> Option<[u8; 16]> {
    if !is_valid_uuid(s) {
        return None;
    }
    let digits: Vec<u8> = s.bytes().filter(|&b| b != b'-').collect();
    let mut raw = [0u8; 16];
    hex::decode_to_slice(&digits, &mut raw).ok()?;
    Some(raw)
}
