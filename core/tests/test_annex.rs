// Annex marshal / unmarshal.

#[cfg(test)]
mod tests {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use cipher_envelope::annex::{encode_annex, marshal, unmarshal, Annex, AnnexError};
    use proptest::prelude::*;

    fn raw(groups: &[&[u8]]) -> String {
        STANDARD.encode(groups.join(&0x1E))
    }

// # ✅ 1. Layout

    #[test]
    fn marshal_fixed_order_without_ec() {
        let b64 = marshal("v1", "ios", "abc", "");
        let bytes = STANDARD.decode(b64).unwrap();
        assert_eq!(bytes, b"param\x1Fabc\x1Eversion\x1Fv1\x1Eplatform\x1Fios");
    }

    #[test]
    fn marshal_appends_ec_when_present() {
        let b64 = marshal("v1", "ios", "abc", "1");
        let bytes = STANDARD.decode(b64).unwrap();
        assert_eq!(bytes, b"param\x1Fabc\x1Eversion\x1Fv1\x1Eplatform\x1Fios\x1Eec\x1F1");
    }

    #[test]
    fn unmarshal_roundtrip() {
        let a = unmarshal(marshal("v2", "android", "uid-9", "1").as_bytes()).unwrap();
        assert_eq!(a, Annex::new("v2", "android", "uid-9", "1"));

        let a = unmarshal(marshal("v2", "android", "uid-9", "").as_bytes()).unwrap();
        assert_eq!(a.ec, "");
    }

    #[test]
    fn unmarshal_ignores_group_order_and_last_duplicate_wins() {
        let b64 = raw(&[b"platform\x1Fweb", b"param\x1Fp", b"version\x1Fv0", b"version\x1Fv9"]);
        let a = unmarshal(b64.as_bytes()).unwrap();
        assert_eq!(a, Annex::new("v9", "web", "p", ""));
    }

    #[test]
    fn unmarshal_does_not_require_the_triple() {
        // Missing version is detected later, not here.
        let b64 = raw(&[b"param\x1Fp", b"platform\x1Fweb", b"ec\x1F1"]);
        let a = unmarshal(b64.as_bytes()).unwrap();
        assert_eq!(a.version, "");
        assert_eq!(a.ec, "1");
    }

    #[test]
    fn empty_values_survive() {
        let a = unmarshal(marshal("", "", "", "").as_bytes()).unwrap();
        assert_eq!(a, Annex::default());
    }

// # ✅ 2. Errors

    #[test]
    fn unmarshal_rejects_bad_base64() {
        let err = unmarshal(b"@@not base64@@").unwrap_err();
        assert!(matches!(err, AnnexError::Base64(_)));
    }

    #[test]
    fn unmarshal_rejects_too_few_groups() {
        let b64 = raw(&[b"param\x1Fp", b"version\x1Fv"]);
        let err = unmarshal(b64.as_bytes()).unwrap_err();
        assert!(matches!(err, AnnexError::GroupsNotEnough { have: 2 }));
    }

    #[test]
    fn unmarshal_rejects_bad_unit_count() {
        let b64 = raw(&[b"param\x1Fp", b"version", b"platform\x1Fweb"]);
        let err = unmarshal(b64.as_bytes()).unwrap_err();
        assert!(matches!(err, AnnexError::UnitsNotEnough { index: 1, have: 1 }));

        let b64 = raw(&[b"param\x1Fp\x1Fx", b"version\x1Fv", b"platform\x1Fweb"]);
        let err = unmarshal(b64.as_bytes()).unwrap_err();
        assert!(matches!(err, AnnexError::UnitsNotEnough { index: 0, have: 3 }));
    }

    #[test]
    fn unmarshal_rejects_unknown_unit() {
        let b64 = raw(&[b"param\x1Fp", b"version\x1Fv", b"colour\x1Fblue"]);
        let err = unmarshal(b64.as_bytes()).unwrap_err();
        assert!(matches!(err, AnnexError::UnsupportedUnit { ref name } if name == "colour"));
    }

    #[test]
    fn unmarshal_rejects_non_utf8_values() {
        let b64 = raw(&[b"param\x1F\xFF\xFE", b"version\x1Fv", b"platform\x1Fweb"]);
        let err = unmarshal(b64.as_bytes()).unwrap_err();
        assert!(matches!(err, AnnexError::NotUtf8 { name: "param" }));
    }

    #[test]
    fn encode_annex_rejects_reserved_bytes() {
        let err = encode_annex(&Annex::new("v1", "ios", "a\x1Eb", "")).unwrap_err();
        assert!(matches!(err, AnnexError::ReservedSeparator { field: "param" }));

        let err = encode_annex(&Annex::new("v\x1F1", "ios", "ab", "")).unwrap_err();
        assert!(matches!(err, AnnexError::ReservedSeparator { field: "version" }));
    }

// # ✅ 3. Property: unmarshal(marshal(x)) == x for separator-free text

    proptest! {
        #[test]
        fn prop_annex_idempotent(
            version in "[ -~]{0,16}",
            platform in "[ -~]{0,16}",
            param in "[ -~]{0,40}",
            ec in "[ -~]{0,4}",
        ) {
            let b64 = marshal(&version, &platform, &param, &ec);
            let a = unmarshal(b64.as_bytes()).unwrap();
            prop_assert_eq!(a, Annex::new(version, platform, param, ec));
        }
    }
}
