// Codec configuration and JSON keyring provisioning.

#[cfg(test)]
mod tests {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use cipher_envelope::config::{CodecConfig, Direction, KeyringConfig};
    use cipher_envelope::crypto::Crc8;
    use cipher_envelope::envelope::{Decoder, Encoder};
    use cipher_envelope::keys::{KeyError, KeyStore};
    use cipher_envelope::profile::Generation;

    fn keyring_json() -> String {
        format!(
            r#"{{
                "direction": "server_to_client",
                "keys": [
                    {{ "version": "v1", "platform": "ios", "key": "{k1}" }},
                    {{ "version": "v1", "platform": "ios", "app_id": "shop", "key": "{k2}" }}
                ]
            }}"#,
            k1 = STANDARD.encode([1u8; 32]),
            k2 = STANDARD.encode([2u8; 32]),
        )
    }

    #[test]
    fn direction_defaults_and_bool_mapping() {
        assert_eq!(Direction::default(), Direction::ClientToServer);
        assert_eq!(Direction::from(true), Direction::ServerToClient);
        assert!(!Direction::from(false).is_server_to_client());
        assert_eq!(CodecConfig::default().crc8, Crc8::SMBUS);
    }

    #[test]
    fn keyring_parses_and_applies() {
        let cfg = KeyringConfig::from_json(&keyring_json()).unwrap();
        assert_eq!(cfg.direction, Direction::ServerToClient);
        assert_eq!(cfg.keys.len(), 2);

        let store = KeyStore::new();
        cfg.apply(&store).unwrap();
        assert_eq!(store.get("v1", "ios").unwrap(), [1u8; 32]);
        assert_eq!(store.get("v1", "ios|shop").unwrap(), [2u8; 32]);
    }

    #[test]
    fn keyring_direction_is_optional() {
        let cfg = KeyringConfig::from_json(r#"{ "keys": [] }"#).unwrap();
        assert_eq!(cfg.direction, Direction::ClientToServer);
        assert!(cfg.keys.is_empty());
    }

    #[test]
    fn keyring_rejects_bad_json_and_bad_keys() {
        let err = KeyringConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, KeyError::Config(_)));

        let cfg = KeyringConfig::from_json(&format!(
            r#"{{ "keys": [ {{ "version": "v1", "platform": "ios", "key": "{}" }} ] }}"#,
            STANDARD.encode([0u8; 16])
        ))
        .unwrap();
        let err = cfg.apply(&KeyStore::new()).unwrap_err();
        assert!(matches!(err, KeyError::KeyLenWrong { actual: 16 }));
    }

    #[test]
    fn keyring_debug_redacts_keys() {
        let cfg = KeyringConfig::from_json(&keyring_json()).unwrap();
        let dbg = format!("{cfg:?}");
        assert!(dbg.contains("<redacted>"));
        assert!(!dbg.contains(&STANDARD.encode([1u8; 32])));
    }

    #[test]
    fn keyring_provisions_a_working_pair() {
        let cfg = KeyringConfig::from_json(&keyring_json()).unwrap();
        let enc = Encoder::new(cfg.codec_config());
        let dec = Decoder::new(cfg.codec_config());
        cfg.apply(enc.keys()).unwrap();
        cfg.apply(dec.keys()).unwrap();

        let token = enc.encode("v1", "ios", b"ping", "p", Generation::Gen1).unwrap();
        assert_eq!(dec.decode(&token).unwrap().plaintext, b"ping");
    }

    #[test]
    fn mismatched_crc8_breaks_gen0_iv_check() {
        let enc = Encoder::new(CodecConfig::default());
        let dec = Decoder::new(CodecConfig::default().with_crc8(Crc8::new(0x07, 0x00, 0x55)));
        enc.add_key("v1", "ios", &[3u8; 32]).unwrap();
        dec.add_key("v1", "ios", &[3u8; 32]).unwrap();

        let token = enc.encode("v1", "ios", b"ping", "p", Generation::Gen0).unwrap();
        let err = dec.decode(&token).unwrap_err();
        assert_eq!(err.kind(), cipher_envelope::types::ErrorKind::IvCheckError);
    }
}
