// ## 📂 File: `src/annex/encode.rs`

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::annex::types::{Annex, AnnexError};
use crate::constants::{units, GROUP_SEP, UNIT_SEP};

/// Serialize the annex fields, base64 wrapped.
///
/// # Notes
/// - Group order is fixed: `param`, `version`, `platform`, then `ec` when non-empty.
/// - No validation happens here; see [`encode_annex`] for the checked path.
pub fn marshal(version: &str, platform: &str, param: &str, ec: &str) -> String {
    let mut buf = Vec::with_capacity(
        units::PARAM.len() + param.len()
            + units::VERSION.len() + version.len()
            + units::PLATFORM.len() + platform.len()
            + units::EC.len() + ec.len()
            + 8,
    );

    fn put_unit(buf: &mut Vec<u8>, name: &str, value: &str) {
        buf.extend_from_slice(name.as_bytes());
        buf.push(UNIT_SEP);
        buf.extend_from_slice(value.as_bytes());
    }

    put_unit(&mut buf, units::PARAM, param);
    buf.push(GROUP_SEP);
    put_unit(&mut buf, units::VERSION, version);
    buf.push(GROUP_SEP);
    put_unit(&mut buf, units::PLATFORM, platform);
    if !ec.is_empty() {
        buf.push(GROUP_SEP);
        put_unit(&mut buf, units::EC, ec);
    }

    STANDARD.encode(buf)
}

/// Validate then [`marshal`].
pub fn encode_annex(annex: &Annex) -> Result<String, AnnexError> {
    annex.validate()?;
    Ok(marshal(&annex.version, &annex.platform, &annex.param, &annex.ec))
}
