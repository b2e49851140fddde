//! Integration coverage for the leaf hasher's canonical byte encodings and
//! type-tagging discipline (§4.6, §8 invariants 4/7/8, scenario S6).

mod common;

use dacite::leaf;
use dacite::types::{builtin_type_hash, type_hash, BuiltinType};

#[test]
fn all_21_builtin_type_hashes_are_pairwise_distinct() {
    use std::collections::HashSet;
    let hashes: HashSet<_> = BuiltinType::ALL.iter().map(|t| t.type_hash()).collect();
    assert_eq!(hashes.len(), 21);
}

#[test]
fn type_hash_is_precomputable_and_matches_on_demand_computation() {
    for ty in BuiltinType::ALL {
        assert_eq!(builtin_type_hash(ty), type_hash(ty.name()));
    }
}

#[test]
fn s6_i32_zero_and_i64_zero_differ() {
    assert_ne!(leaf::i32_(0).unwrap(), leaf::i64_(0).unwrap());
}

#[test]
fn s6_u32_and_i32_with_same_numeric_value_differ() {
    assert_ne!(leaf::u32_(7).unwrap(), leaf::i32_(7).unwrap());
}

#[test]
fn distinct_types_never_alias_same_bytes() {
    // u8(0) and bool(false) both canonicalize to a single zero byte, but
    // the type tag must keep them apart (§3 invariant 4).
    assert_ne!(leaf::u8_(0).unwrap(), leaf::bool_(false).unwrap());
}

#[test]
fn nan_payload_and_sign_do_not_affect_identity() {
    let a = leaf::f64_(f64::from_bits(0x7FF8_0000_0000_0001)).unwrap();
    let b = leaf::f64_(f64::from_bits(0xFFF8_0000_0000_0002)).unwrap();
    let c = leaf::f64_(f64::NAN).unwrap();
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn negative_zero_and_positive_zero_float_bit_patterns_differ() {
    // IEEE-754 -0.0 and 0.0 have distinct bit patterns and are not
    // NaN-canonicalized, so their leaf hashes differ: encoding is bit-for-bit
    // canonical, not numeric-equality based.
    assert_ne!(leaf::f64_(0.0).unwrap(), leaf::f64_(-0.0).unwrap());
}

#[test]
fn char_hashes_use_utf8_encoding_and_differ_per_code_point() {
    let ascii = leaf::char_('A').unwrap();
    let multibyte = leaf::char_('€').unwrap();
    assert_ne!(ascii, multibyte);
    assert_eq!(leaf::char_('€').unwrap(), multibyte);
}

#[test]
fn i256_and_u256_with_identical_bytes_differ_by_type() {
    let mut bytes = [0u8; 32];
    bytes[31] = 0xFF;
    assert_ne!(leaf::i256(bytes).unwrap(), leaf::u256(bytes).unwrap());
}

#[test]
fn null_has_a_single_stable_hash() {
    assert_eq!(leaf::null().unwrap(), leaf::null().unwrap());
}

#[test]
fn widening_an_integer_changes_its_hash_even_for_equal_numeric_value() {
    let widths: Vec<_> = [
        leaf::i8_(5).unwrap(),
        leaf::i16_(5).unwrap(),
        leaf::i32_(5).unwrap(),
        leaf::i64_(5).unwrap(),
        leaf::i128_(5).unwrap(),
    ];
    for i in 0..widths.len() {
        for j in (i + 1)..widths.len() {
            assert_ne!(widths[i], widths[j], "width index {i} collided with {j}");
        }
    }
}
