// ## 📂 File: `src/annex/decode.rs`

//! Annex decoding.
//!
//! Design notes:
//! - Group order is irrelevant; a repeated unit keeps its last value.
//! - Missing `version`/`platform`/`param` are not reported here. They surface
//!   downstream as a key lookup or signature failure.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::annex::types::{Annex, AnnexError};
use crate::constants::{units, GROUP_SEP, UNIT_SEP};

/// Base64-decode and parse an annex segment.
///
/// # Returns
/// - `Err(Base64)` when the segment is not standard padded base64.
/// - `Err(GroupsNotEnough)` for fewer than 3 groups.
/// - `Err(UnitsNotEnough)` when a group is not exactly `key<US>value`.
/// - `Err(UnsupportedUnit)` for any key outside `version|platform|param|ec`.
pub fn unmarshal(annex: &[u8]) -> Result<Annex, AnnexError> {
    let origin = STANDARD.decode(annex)?;

    let groups: Vec<&[u8]> = origin.split(|&b| b == GROUP_SEP).collect();
    if groups.len() < 3 {
        return Err(AnnexError::GroupsNotEnough { have: groups.len() });
    }

    let mut out = Annex::default();
    for (index, group) in groups.iter().enumerate() {
        let parts: Vec<&[u8]> = group.split(|&b| b == UNIT_SEP).collect();
        let [name, value] = parts.as_slice() else {
            return Err(AnnexError::UnitsNotEnough { index, have: parts.len() });
        };

        let (slot, name) = match *name {
            n if n == units::VERSION.as_bytes() => (&mut out.version, units::VERSION),
            n if n == units::PLATFORM.as_bytes() => (&mut out.platform, units::PLATFORM),
            n if n == units::PARAM.as_bytes() => (&mut out.param, units::PARAM),
            n if n == units::EC.as_bytes() => (&mut out.ec, units::EC),
            other => {
                return Err(AnnexError::UnsupportedUnit {
                    name: String::from_utf8_lossy(other).into_owned(),
                })
            }
        };
        *slot = std::str::from_utf8(value)
            .map_err(|_| AnnexError::NotUtf8 { name })?
            .to_owned();
    }

    Ok(out)
}
