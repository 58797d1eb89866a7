use krishi_core::{stable_hash_bytes, stable_hash_hex};
use proptest::prelude::*;

proptest! {
    #[test]
    fn hash_is_deterministic(payload in proptest::collection::vec(any::<u8>(), 0..256)) {
        prop_assert_eq!(stable_hash_hex(&payload), stable_hash_hex(&payload));
    }

    #[test]
    fn hex_rendering_matches_digest_bytes(payload in proptest::collection::vec(any::<u8>(), 0..64)) {
        let hex = stable_hash_hex(&payload);
        let digest = stable_hash_bytes(&payload);
        prop_assert_eq!(hex.len(), 64);
        for (i, byte) in digest.iter().enumerate() {
            let parsed = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).unwrap();
            prop_assert_eq!(parsed, *byte);
        }
    }
}
