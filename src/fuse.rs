//! The `fuse` hash-combination primitive.
//!
//! `fuse` combines two 256-bit hashes into one, associatively and
//! non-commutatively, in six wrapping 64-bit additions and one wrapping
//! 64-bit multiplication. The output word order concentrates mixing in
//! `w0`, the word [`crate::hamt`] reads first — this co-design is
//! load-bearing and must not be reordered.

use tracing::debug;

use crate::error::IdentityError;
use crate::words::{Hash, Words};

/// Combine two hashes. Checks the result against the low-entropy predicate
/// and fails with [`IdentityError::LowEntropy`] if it applies.
pub fn fuse(a: Hash, b: Hash) -> Result<Hash, IdentityError> {
    let out = fuse_unchecked(a, b);
    if low_entropy(out) {
        debug!(a = ?a, b = ?b, "fuse produced a low-entropy hash, rejecting");
        return Err(IdentityError::LowEntropy);
    }
    Ok(out)
}

/// Combine two hashes without the low-entropy check. For internal
/// reductions whose final result will itself be validated at the API
/// boundary; never exposed directly across that boundary.
pub fn fuse_unchecked(a: Hash, b: Hash) -> Hash {
    let a = a.to_words();
    let b = b.to_words();

    let c0 = a
        .w0()
        .wrapping_add(a.w3().wrapping_mul(b.w2()))
        .wrapping_add(b.w0());
    let c1 = a.w1().wrapping_add(b.w1());
    let c2 = a.w2().wrapping_add(b.w2());
    let c3 = a.w3().wrapping_add(b.w3());

    Hash::from_words(Words::new(c0, c1, c2, c3))
}

/// True iff the low 32 bits of all four words are zero.
pub fn low_entropy(h: Hash) -> bool {
    let w = h.to_words();
    [w.w0(), w.w1(), w.w2(), w.w3()]
        .iter()
        .all(|word| (word & 0xFFFF_FFFF) == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::sha256;
    use proptest::prelude::*;

    fn h(data: &[u8]) -> Hash {
        Hash::from_bytes(sha256(data))
    }

    #[test]
    fn s1_deterministic() {
        let a = fuse(h(b"hello"), h(b"world")).unwrap();
        let b = fuse(h(b"hello"), h(b"world")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn s2_associative_concrete() {
        let one = h(b"one");
        let two = h(b"two");
        let three = h(b"three");
        let left = fuse_unchecked(fuse_unchecked(one, two), three);
        let right = fuse_unchecked(one, fuse_unchecked(two, three));
        assert_eq!(left, right);
    }

    #[test]
    fn s3_low_entropy_predicate() {
        let words = Words::new(
            0x1234_5678_0000_0000,
            0xABCD_EF00_0000_0000,
            0x9876_5432_0000_0000,
            0xFEDC_BA98_0000_0000,
        );
        assert!(low_entropy(Hash::from_words(words)));
        assert!(!low_entropy(h(b"normal data")));
    }

    proptest! {
        #[test]
        fn associative_exact(
            a in proptest::array::uniform32(any::<u8>()),
            b in proptest::array::uniform32(any::<u8>()),
            c in proptest::array::uniform32(any::<u8>()),
        ) {
            let (a, b, c) = (Hash::from_bytes(a), Hash::from_bytes(b), Hash::from_bytes(c));
            let left = fuse_unchecked(fuse_unchecked(a, b), c);
            let right = fuse_unchecked(a, fuse_unchecked(b, c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn non_commutative_when_distinct(
            a in proptest::array::uniform32(any::<u8>()),
            b in proptest::array::uniform32(any::<u8>()),
        ) {
            let (a, b) = (Hash::from_bytes(a), Hash::from_bytes(b));
            prop_assume!(a != b);
            prop_assert_ne!(fuse_unchecked(a, b), fuse_unchecked(b, a));
        }

        #[test]
        fn non_identity(
            a in proptest::array::uniform32(any::<u8>()),
            b in proptest::array::uniform32(any::<u8>()),
        ) {
            let (a, b) = (Hash::from_bytes(a), Hash::from_bytes(b));
            let out = fuse_unchecked(a, b);
            prop_assert_ne!(out, a);
            prop_assert_ne!(out, b);
        }
    }
}
