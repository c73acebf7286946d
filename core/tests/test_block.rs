// AES-256-CBC / PKCS#7 block layer.

#[cfg(test)]
mod tests {
    use cipher_envelope::crypto::{pkcs7_pad, pkcs7_unpad_len, CbcCipher, CryptoError};
    use proptest::prelude::*;

    const KEY: [u8; 32] = [0x42; 32];
    const IV: [u8; 16] = [0x24; 16];

// # ✅ 1. Padding

    #[test]
    fn pad_appends_pad_value_bytes() {
        let out = pkcs7_pad(b"hello");
        assert_eq!(out.len(), 16);
        assert_eq!(&out[..5], b"hello");
        assert!(out[5..].iter().all(|&b| b == 11));
    }

    #[test]
    fn pad_aligned_input_gets_full_block() {
        let out = pkcs7_pad(&[7u8; 16]);
        assert_eq!(out.len(), 32);
        assert!(out[16..].iter().all(|&b| b == 16));

        let empty = pkcs7_pad(&[]);
        assert_eq!(empty, vec![16u8; 16]);
    }

    #[test]
    fn unpad_rejects_malformed_trailers() {
        let mut block = pkcs7_pad(b"hello");
        assert_eq!(pkcs7_unpad_len(&block).unwrap(), 5);

        // pad value above the block size
        block[15] = 17;
        assert!(matches!(pkcs7_unpad_len(&block), Err(CryptoError::PaddingWrong)));

        // zero pad value
        block[15] = 0;
        assert!(matches!(pkcs7_unpad_len(&block), Err(CryptoError::PaddingWrong)));

        // inconsistent run
        let mut block = pkcs7_pad(b"hello");
        block[10] = 3;
        assert!(matches!(pkcs7_unpad_len(&block), Err(CryptoError::PaddingWrong)));

        assert!(matches!(pkcs7_unpad_len(&[]), Err(CryptoError::PaddingWrong)));
    }

// # ✅ 2. CBC

    #[test]
    fn rejects_wrong_key_length() {
        let err = CbcCipher::new(&[0u8; 16]).err().unwrap();
        assert!(matches!(err, CryptoError::InvalidKeyLen { expected: 32, actual: 16 }));
    }

    #[test]
    fn encrypt_decrypt_roundtrip_in_place() {
        let cipher = CbcCipher::new(&KEY).unwrap();
        let mut ct = cipher.encrypt(&IV, b"attack at dawn, attack at dusk");
        assert_eq!(ct.len(), 32);

        let plain = cipher.decrypt_in_place(&IV, &mut ct).unwrap();
        assert_eq!(plain, b"attack at dawn, attack at dusk");
    }

    #[test]
    fn chaining_hides_repeated_blocks() {
        let cipher = CbcCipher::new(&KEY).unwrap();
        let ct = cipher.encrypt(&IV, &[0xAB; 32]);
        assert_ne!(ct[..16], ct[16..32]);
    }

    #[test]
    fn decrypt_rejects_unaligned_or_empty() {
        let cipher = CbcCipher::new(&KEY).unwrap();

        let mut empty: Vec<u8> = Vec::new();
        assert!(matches!(
            cipher.decrypt_in_place(&IV, &mut empty),
            Err(CryptoError::CipherLenWrong { .. })
        ));

        let mut short = vec![0u8; 17];
        assert!(matches!(
            cipher.decrypt_in_place(&IV, &mut short),
            Err(CryptoError::CipherLenWrong { .. })
        ));
    }

    #[test]
    fn iv_change_corrupts_first_block_only() {
        let cipher = CbcCipher::new(&KEY).unwrap();
        let plain = [0x11u8; 40];
        let mut ct = cipher.encrypt(&IV, &plain);

        let mut other_iv = IV;
        other_iv[0] ^= 0x01;
        let got = cipher.decrypt_in_place(&other_iv, &mut ct).unwrap();
        assert_eq!(got[0], 0x10);
        assert_eq!(&got[1..], &plain[1..]);
    }

    proptest! {
        #[test]
        fn prop_roundtrip(plain in proptest::collection::vec(any::<u8>(), 0..100),
                          key in any::<[u8; 32]>(),
                          iv in any::<[u8; 16]>()) {
            let cipher = CbcCipher::new(&key).unwrap();
            let mut ct = cipher.encrypt(&iv, &plain);
            prop_assert_eq!(ct.len(), (plain.len() / 16 + 1) * 16);
            let got = cipher.decrypt_in_place(&iv, &mut ct).unwrap();
            prop_assert_eq!(got, plain.as_slice());
        }
    }
}
