// ## 📂 File: `src/types.rs`

use thiserror::Error;

use crate::{annex::AnnexError, crypto::CryptoError, keys::KeyError};

/// Unified envelope error covering framing, annex, provisioning and crypto.
/// - `#[from]` conversions let `?` flow across the layers.
/// - Messages never carry key material.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// Token does not contain two `.` separators.
    #[error("dot parts not correct")]
    DotPartsWrong,

    /// Annex `ec` tag names no known generation.
    #[error("enc wrong: unsupported generation tag {tag:?}")]
    EncWrong { tag: String },

    #[error("annex error: {0}")]
    Annex(#[from] AnnexError),

    #[error("key error: {0}")]
    Key(#[from] KeyError),

    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),
}

/// Flat view of the error taxonomy, for callers that only branch on the kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    DotPartsWrong,
    GroupsNotEnough,
    UnitsNotEnough,
    UnsupportedUnit,
    ReservedSeparator,
    NotUtf8,
    EncWrong,
    Base64,
    KeyLenWrong,
    KeyMissing,
    Config,
    CheckSumWrong,
    IvCheckError,
    PaddingWrong,
    CipherLenWrong,
}

impl EnvelopeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EnvelopeError::DotPartsWrong => ErrorKind::DotPartsWrong,
            EnvelopeError::EncWrong { .. } => ErrorKind::EncWrong,
            EnvelopeError::Annex(e) => match e {
                AnnexError::Base64(_) => ErrorKind::Base64,
                AnnexError::GroupsNotEnough { .. } => ErrorKind::GroupsNotEnough,
                AnnexError::UnitsNotEnough { .. } => ErrorKind::UnitsNotEnough,
                AnnexError::UnsupportedUnit { .. } => ErrorKind::UnsupportedUnit,
                AnnexError::ReservedSeparator { .. } => ErrorKind::ReservedSeparator,
                AnnexError::NotUtf8 { .. } => ErrorKind::NotUtf8,
            },
            EnvelopeError::Key(e) => match e {
                KeyError::Base64(_) => ErrorKind::Base64,
                KeyError::KeyLenWrong { .. } => ErrorKind::KeyLenWrong,
                KeyError::KeyMissing { .. } => ErrorKind::KeyMissing,
                KeyError::Config(_) => ErrorKind::Config,
            },
            EnvelopeError::Crypto(e) => match e {
                CryptoError::CheckSumWrong => ErrorKind::CheckSumWrong,
                CryptoError::IvCheckError => ErrorKind::IvCheckError,
                CryptoError::PaddingWrong => ErrorKind::PaddingWrong,
                CryptoError::CipherLenWrong { .. } => ErrorKind::CipherLenWrong,
                CryptoError::InvalidKeyLen { .. } => ErrorKind::KeyLenWrong,
            },
        }
    }
}

/// Successful decode: the annex fields plus the recovered plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub version: String,
    pub platform: String,
    pub param: String,
    pub plaintext: Vec<u8>,
}
