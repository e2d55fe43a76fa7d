#[cfg(test)]
mod tests {
    use txbase_core::{
        ids::{ChainId, IdError},
        constants::ID_LEN,
    };

    #[test]
    fn hex_display_and_parse_agree() {
        let id = ChainId::new([0xAB; ID_LEN]);
        let s = id.to_string();
        assert_eq!(s.len(), ID_LEN * 2);
        assert_eq!(s.parse::<ChainId>().unwrap(), id);
    }

    #[test]
    fn debug_wraps_hex() {
        let id = ChainId::new([0x01; ID_LEN]);
        assert_eq!(format!("{id:?}"), format!("ChainId({})", "01".repeat(32)));
    }

    #[test]
    fn from_slice_rejects_wrong_length() {
        let err = ChainId::from_slice(&[1u8; 31]).unwrap_err();
        assert_eq!(err, IdError::InvalidLength { have: 31, need: 32 });
        assert!(ChainId::from_slice(&[1u8; 33]).is_err());
        assert_eq!(ChainId::from_slice(&[1u8; 32]).unwrap(), ChainId::new([1; 32]));
    }

    #[test]
    fn parse_rejects_bad_hex() {
        assert!(matches!("zz".parse::<ChainId>(), Err(IdError::InvalidHex(_))));
        assert!(matches!("abcd".parse::<ChainId>(), Err(IdError::InvalidLength { have: 2, need: 32 })));
    }

    #[test]
    fn empty_is_all_zero() {
        assert!(ChainId::EMPTY.is_empty());
        assert_eq!(ChainId::default(), ChainId::EMPTY);
        assert!(!ChainId::new([1; ID_LEN]).is_empty());
    }

    #[test]
    fn equality_is_byte_equality() {
        let mut raw = [0x33; ID_LEN];
        let a = ChainId::new(raw);
        raw[31] ^= 1;
        let b = ChainId::from(raw);
        assert_ne!(a, b);
        assert_eq!(a, ChainId::new([0x33; ID_LEN]));
    }

    #[test]
    fn serde_as_hex_string() {
        let id = ChainId::new([0xFE; ID_LEN]);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", "fe".repeat(32)));
        assert_eq!(serde_json::from_str::<ChainId>(&json).unwrap(), id);
        assert!(serde_json::from_str::<ChainId>("\"00\"").is_err());
    }
}
