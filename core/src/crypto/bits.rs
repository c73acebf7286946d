// ## 📂 File: `src/crypto/bits.rs`

//! Bit-transform primitives used by the generation-1 key schedule and IV check.
//!
//! Design notes:
//! - Tables are built by `const fn` at compile time; there is no runtime init
//!   step and nothing mutable is shared.
//! - Every table is a plain `[u8; 256]` indexed by the input byte.

/// Parity (XOR-fold of all 8 bits) of each byte: 1 when odd, 0 when even.
pub static PARITY_TABLE: [u8; 256] = build_parity();

/// Reflected binary Gray code of each byte: `x ^ (x >> 1)`.
pub static GRAY_CODES: [u8; 256] = build_gray();

/// Each byte with its 8 bits in reverse order.
pub static BIT_REVERSES: [u8; 256] = build_reverses();

const fn build_parity() -> [u8; 256] {
    let mut t = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        t[i] = ((i as u8).count_ones() & 1) as u8;
        i += 1;
    }
    t
}

const fn build_gray() -> [u8; 256] {
    let mut t = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let b = i as u8;
        // Top bit passes through; each lower bit is b[j] ^ b[j + 1].
        t[i] = b ^ (b >> 1);
        i += 1;
    }
    t
}

const fn build_reverses() -> [u8; 256] {
    let mut t = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        t[i] = (i as u8).reverse_bits();
        i += 1;
    }
    t
}

#[inline]
pub fn is_odd_parity(b: u8) -> bool {
    PARITY_TABLE[b as usize] == 1
}

#[inline]
pub fn gray_code(b: u8) -> u8 {
    GRAY_CODES[b as usize]
}

#[inline]
pub fn bit_reverse(b: u8) -> u8 {
    BIT_REVERSES[b as usize]
}

/// Longitudinal redundancy check: two's-complement negation of the byte sum.
///
/// Adding the LRC to the sum of `data` yields 0 (mod 256).
#[inline]
pub fn lrc(data: &[u8]) -> u8 {
    data.iter()
        .fold(0u8, |acc, &b| acc.wrapping_add(b))
        .wrapping_neg()
}
