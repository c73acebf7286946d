// Token framing: `sign . annex . body`.

#[cfg(test)]
mod tests {
    use cipher_envelope::envelope::{assemble, split, split_points};
    use cipher_envelope::types::{EnvelopeError, ErrorKind};

// # ✅ 1. Split

    #[test]
    fn split_three_segments() {
        let seg = split(b"SIGN.YW5uZXg=.body").unwrap();
        assert_eq!(seg.sign, b"SIGN");
        assert_eq!(seg.annex, b"YW5uZXg=");
        assert_eq!(seg.body, b"body");
    }

    #[test]
    fn body_may_contain_dots() {
        let seg = split(b"S.A.b.o.d.y").unwrap();
        assert_eq!(seg.sign, b"S");
        assert_eq!(seg.annex, b"A");
        assert_eq!(seg.body, b"b.o.d.y");
    }

    #[test]
    fn empty_segments_are_allowed_by_framing() {
        let seg = split(b"..").unwrap();
        assert!(seg.sign.is_empty() && seg.annex.is_empty() && seg.body.is_empty());
        assert_eq!(split_points(b"..").unwrap(), (0, 1));
    }

    #[test]
    fn fewer_than_two_dots_rejected() {
        for bad in [&b""[..], b"nodots", b"one.dot"] {
            let err = split(bad).unwrap_err();
            assert!(matches!(err, EnvelopeError::DotPartsWrong));
            assert_eq!(err.kind(), ErrorKind::DotPartsWrong);
        }
    }

// # ✅ 2. Assemble

    #[test]
    fn assemble_then_split() {
        let sign = [b'A'; 32];
        let token = assemble(&sign, "QUJD", &[1, 2, 3], &[b'.', 5]);
        assert_eq!(token.len(), 32 + 1 + 4 + 1 + 3 + 2);

        let seg = split(&token).unwrap();
        assert_eq!(seg.sign, &sign[..]);
        assert_eq!(seg.annex, b"QUJD");
        assert_eq!(seg.body, &[1, 2, 3, b'.', 5][..]);
    }
}
