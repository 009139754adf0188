//! Property tests for content hashing.

use proptest::prelude::*;

use widgetpack::{hash, HashLength};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Hashes are lowercase hex of exactly the requested length.
    #[test]
    fn property_hash_shape(
        bytes in proptest::collection::vec(any::<u8>(), 0..512),
        len in 1usize..=64,
    ) {
        let length = HashLength::new(len).unwrap();
        let h = hash(&bytes, length);
        prop_assert_eq!(h.len(), len);
        prop_assert!(h.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
    }

    /// PROPERTY: A shorter hash is a prefix of a longer one.
    #[test]
    fn property_truncation_is_prefix(
        bytes in proptest::collection::vec(any::<u8>(), 0..256),
        a in 1usize..=64,
        b in 1usize..=64,
    ) {
        let (short, long) = if a <= b { (a, b) } else { (b, a) };
        let short_hash = hash(&bytes, HashLength::new(short).unwrap());
        let long_hash = hash(&bytes, HashLength::new(long).unwrap());
        prop_assert!(long_hash.starts_with(&short_hash));
    }

    /// PROPERTY: Flipping any byte changes the full digest.
    #[test]
    fn property_single_byte_change_changes_hash(
        bytes in proptest::collection::vec(any::<u8>(), 1..256),
        index in any::<prop::sample::Index>(),
    ) {
        let full = HashLength::new(64).unwrap();
        let mut changed = bytes.clone();
        let i = index.index(changed.len());
        changed[i] ^= 0x01;
        prop_assert_ne!(hash(&bytes, full), hash(&changed, full));
    }
}

#[test]
fn lengths_outside_range_are_rejected() {
    assert!(HashLength::new(0).is_err());
    assert!(HashLength::new(65).is_err());
}
