// ## 📂 File: `src/annex/types.rs`

use thiserror::Error;

use crate::constants::{GROUP_SEP, UNIT_SEP};

/// Annex metadata record.
///
/// `ec` is the raw generation tag; an empty string means generation 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annex {
    pub version: String,
    pub platform: String,
    pub param: String,
    pub ec: String,
}

impl Annex {
    pub fn new(
        version: impl Into<String>,
        platform: impl Into<String>,
        param: impl Into<String>,
        ec: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            platform: platform.into(),
            param: param.into(),
            ec: ec.into(),
        }
    }

    /// Reject values that would split into extra groups or units on decode.
    pub fn validate(&self) -> Result<(), AnnexError> {
        for (field, value) in [
            ("version", &self.version),
            ("platform", &self.platform),
            ("param", &self.param),
            ("ec", &self.ec),
        ] {
            if value.bytes().any(|b| b == GROUP_SEP || b == UNIT_SEP) {
                return Err(AnnexError::ReservedSeparator { field });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum AnnexError {
    #[error("annex base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Fewer than the three mandatory groups.
    #[error("groups not enough: have={have}, need=3")]
    GroupsNotEnough { have: usize },

    /// A group did not split into exactly `key<US>value`.
    #[error("units not enough: group {index} has {have} units, need 2")]
    UnitsNotEnough { index: usize, have: usize },

    #[error("unsupported unit: {name:?}")]
    UnsupportedUnit { name: String },

    #[error("annex field {field} contains a reserved separator byte")]
    ReservedSeparator { field: &'static str },

    #[error("annex unit {name} is not valid UTF-8")]
    NotUtf8 { name: &'static str },
}
