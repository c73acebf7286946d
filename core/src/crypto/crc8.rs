// ## 📂 File: `src/crypto/crc8.rs`

//! Table-driven CRC-8 used as the generation-0 IV check byte.
//!
//! Design notes:
//! - The CRC variant is an interoperability parameter: both ends must use the
//!   same polynomial, init and xorout. [`Crc8::SMBUS`] is the default.
//! - Non-reflected (MSB-first) variants only.

use std::fmt;

/// A non-reflected CRC-8 with a precomputed lookup table.
#[derive(Clone, PartialEq, Eq)]
pub struct Crc8 {
    poly: u8,
    init: u8,
    xorout: u8,
    table: [u8; 256],
}

impl Crc8 {
    /// CRC-8/SMBUS: poly 0x07, init 0x00, xorout 0x00. Check("123456789") = 0xF4.
    pub const SMBUS: Crc8 = Crc8::new(0x07, 0x00, 0x00);

    /// Build a CRC-8 engine. Table generation runs at compile time for consts.
    pub const fn new(poly: u8, init: u8, xorout: u8) -> Self {
        let mut table = [0u8; 256];
        let mut i = 0;
        while i < 256 {
            let mut crc = i as u8;
            let mut bit = 0;
            while bit < 8 {
                crc = if crc & 0x80 != 0 { (crc << 1) ^ poly } else { crc << 1 };
                bit += 1;
            }
            table[i] = crc;
            i += 1;
        }
        Self { poly, init, xorout, table }
    }

    #[inline]
    pub fn checksum(&self, data: &[u8]) -> u8 {
        let crc = data
            .iter()
            .fold(self.init, |crc, &b| self.table[(crc ^ b) as usize]);
        crc ^ self.xorout
    }

    pub fn poly(&self) -> u8 {
        self.poly
    }

    pub fn init(&self) -> u8 {
        self.init
    }

    pub fn xorout(&self) -> u8 {
        self.xorout
    }
}

impl fmt::Debug for Crc8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Crc8")
            .field("poly", &format_args!("{:#04x}", self.poly))
            .field("init", &format_args!("{:#04x}", self.init))
            .field("xorout", &format_args!("{:#04x}", self.xorout))
            .finish()
    }
}

impl Default for Crc8 {
    fn default() -> Self {
        Crc8::SMBUS
    }
}
