// ## 📂 File: `src/envelope/framing.rs`

use crate::constants::{DOT, SIGN_LEN_32};
use crate::types::EnvelopeError;

/// Borrowed view of the three token segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segments<'a> {
    pub sign: &'a [u8],
    pub annex: &'a [u8],
    pub body: &'a [u8],
}

/// Positions of the two separating dots.
///
/// The first `.` ends `sign`, the next one ends `annex`; the body is the
/// remainder and may itself contain `.` bytes.
pub fn split_points(data: &[u8]) -> Result<(usize, usize), EnvelopeError> {
    let first = data
        .iter()
        .position(|&b| b == DOT)
        .ok_or(EnvelopeError::DotPartsWrong)?;
    let second = data[first + 1..]
        .iter()
        .position(|&b| b == DOT)
        .ok_or(EnvelopeError::DotPartsWrong)?;
    Ok((first, first + 1 + second))
}

pub fn split(data: &[u8]) -> Result<Segments<'_>, EnvelopeError> {
    let (first, second) = split_points(data)?;
    Ok(Segments {
        sign: &data[..first],
        annex: &data[first + 1..second],
        body: &data[second + 1..],
    })
}

/// Join `sign . annex . prefix ciphertext` into one token.
pub fn assemble(sign: &[u8; SIGN_LEN_32], annex: &str, prefix: &[u8], ciphertext: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(SIGN_LEN_32 + 1 + annex.len() + 1 + prefix.len() + ciphertext.len());
    out.extend_from_slice(sign);
    out.push(DOT);
    out.extend_from_slice(annex.as_bytes());
    out.push(DOT);
    out.extend_from_slice(prefix);
    out.extend_from_slice(ciphertext);
    out
}
