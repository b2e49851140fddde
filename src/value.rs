//! `Value`: the tagged union of leaf, string, blob, vector, and map values,
//! and `value_hash`, the dispatch that assigns every value its identity
//! (§3, §4.4, §9 "Dynamic polymorphism over value kinds").

use crate::error::IdentityResult;
use crate::finger_tree::FingerTree;
use crate::fuse::fuse;
use crate::leaf;
use crate::map::{self, Map};
use crate::parallel::{self, Config};
use crate::seq;
use crate::types::{builtin_type_hash, BuiltinType};
use crate::words::Hash;

/// A value in the Dacite type system. Immutable; identity is assigned by
/// [`Value::value_hash`] and never depends on time, location, or the
/// representation chosen for a collection's backing structure.
#[derive(Clone)]
pub enum Value {
    Null,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    I256([u8; 32]),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    U256([u8; 32]),
    F32(f32),
    F64(f64),
    Char(char),
    String(FingerTree<char>),
    Blob(FingerTree<u8>),
    Vector(FingerTree<Value>),
    Map(Map<Value, Value>),
}

impl Value {
    pub fn string_from(s: &str) -> Value {
        Value::String(FingerTree::from_iter(s.chars()))
    }

    pub fn blob_from(bytes: &[u8]) -> Value {
        Value::Blob(FingerTree::from_iter(bytes.iter().copied()))
    }

    pub fn vector_from(items: impl IntoIterator<Item = Value>) -> Value {
        Value::Vector(FingerTree::from_iter(items))
    }

    pub fn empty_map() -> Value {
        Value::Map(Map::new())
    }

    /// Insert `key -> value` into a map `Value`, replacing any prior entry
    /// with the same key hash. Panics if called on a non-`Map` value: a
    /// shape mismatch here is a programmer error, not a recoverable
    /// `IdentityError`.
    pub fn map_insert(&self, key: Value, value: Value) -> IdentityResult<Value> {
        let Value::Map(map) = self else {
            panic!("map_insert called on a non-map value");
        };
        let key_hash = key.value_hash()?;
        Ok(Value::Map(map.insert(key_hash, key, value)))
    }

    /// Assign this value its 256-bit content address.
    pub fn value_hash(&self) -> IdentityResult<Hash> {
        self.value_hash_with(Config::default())
    }

    /// Same as [`Value::value_hash`], but with explicit control over
    /// parallel child-hash fan-out (§5).
    pub fn value_hash_with(&self, config: Config) -> IdentityResult<Hash> {
        match self {
            Value::Null => leaf::null(),
            Value::Bool(b) => leaf::bool_(*b),
            Value::I8(v) => leaf::i8_(*v),
            Value::I16(v) => leaf::i16_(*v),
            Value::I32(v) => leaf::i32_(*v),
            Value::I64(v) => leaf::i64_(*v),
            Value::I128(v) => leaf::i128_(*v),
            Value::I256(v) => leaf::i256(*v),
            Value::U8(v) => leaf::u8_(*v),
            Value::U16(v) => leaf::u16_(*v),
            Value::U32(v) => leaf::u32_(*v),
            Value::U64(v) => leaf::u64_(*v),
            Value::U128(v) => leaf::u128_(*v),
            Value::U256(v) => leaf::u256(*v),
            Value::F32(v) => leaf::f32_(*v),
            Value::F64(v) => leaf::f64_(*v),
            Value::Char(c) => leaf::char_(*c),
            Value::String(chars) => {
                let items = chars.to_vec();
                let hashes: Vec<Hash> = parallel::map_items(&items, config, |c| leaf::char_(*c))
                    .into_iter()
                    .collect::<IdentityResult<Vec<_>>>()?;
                let data = seq::data_hash(&hashes)?;
                fuse(builtin_type_hash(BuiltinType::String), data)
            }
            Value::Blob(bytes) => {
                let items = bytes.to_vec();
                let hashes: Vec<Hash> = parallel::map_items(&items, config, |b| leaf::u8_(*b))
                    .into_iter()
                    .collect::<IdentityResult<Vec<_>>>()?;
                let data = seq::data_hash(&hashes)?;
                fuse(builtin_type_hash(BuiltinType::Blob), data)
            }
            Value::Vector(elems) => {
                // `Value` holds `Rc` (via `FingerTree`/`Map`) and so is
                // neither `Sync` nor `Send` — unlike the `char`/`u8` leaves
                // of the `String`/`Blob` branches above, its child hashes
                // cannot be fanned out through `parallel::map_items`. Fold
                // sequentially; `fuse`'s associativity (§4.3) means this
                // differs only in wall-clock cost from a parallel fan-out,
                // never in the result.
                let items = elems.to_vec();
                let hashes: Vec<Hash> = items
                    .iter()
                    .map(|v| v.value_hash_with(config))
                    .collect::<IdentityResult<Vec<_>>>()?;
                let data = seq::data_hash(&hashes)?;
                fuse(builtin_type_hash(BuiltinType::Vector), data)
            }
            Value::Map(m) => {
                let triples = m.entries();
                let pairs: Vec<(Hash, Hash)> = triples
                    .iter()
                    .map(|(key_hash, _, v)| Ok((*key_hash, v.value_hash_with(config)?)))
                    .collect::<IdentityResult<Vec<_>>>()?;
                let mut hashes = map::entry_hashes(&pairs, None)?;
                let data = map::data_hash(&mut hashes)?;
                fuse(builtin_type_hash(BuiltinType::Map), data)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s6_empty_string_and_blob_differ() {
        let s = Value::string_from("").value_hash().unwrap();
        let b = Value::blob_from(&[]).value_hash().unwrap();
        assert_ne!(s, b);
    }

    #[test]
    fn s5_vector_permutation_sensitive() {
        let v1 = Value::vector_from([Value::I32(1), Value::I32(2), Value::I32(3)]);
        let v2 = Value::vector_from([Value::I32(3), Value::I32(2), Value::I32(1)]);
        assert_ne!(v1.value_hash().unwrap(), v2.value_hash().unwrap());
    }

    #[test]
    fn s4_map_insertion_order_independent() {
        let m1 = Value::empty_map()
            .map_insert(Value::I32(1), Value::I32(10))
            .unwrap()
            .map_insert(Value::I32(2), Value::I32(20))
            .unwrap();
        let m2 = Value::empty_map()
            .map_insert(Value::I32(2), Value::I32(20))
            .unwrap()
            .map_insert(Value::I32(1), Value::I32(10))
            .unwrap();
        assert_eq!(m1.value_hash().unwrap(), m2.value_hash().unwrap());
    }

    #[test]
    fn string_value_matches_manual_char_fold() {
        let s = Value::string_from("ab");
        let expected_data = seq::data_hash(&[
            leaf::char_('a').unwrap(),
            leaf::char_('b').unwrap(),
        ])
        .unwrap();
        let expected = fuse(builtin_type_hash(BuiltinType::String), expected_data).unwrap();
        assert_eq!(s.value_hash().unwrap(), expected);
    }

    #[test]
    fn map_duplicate_key_replaces() {
        let m = Value::empty_map()
            .map_insert(Value::I32(1), Value::I32(10))
            .unwrap()
            .map_insert(Value::I32(1), Value::I32(99))
            .unwrap();
        let Value::Map(inner) = &m else { unreachable!() };
        assert_eq!(inner.len(), 1);
    }

    #[test]
    fn determinism_across_repeated_calls() {
        let v = Value::vector_from([Value::Bool(true), Value::Null]);
        assert_eq!(v.value_hash().unwrap(), v.value_hash().unwrap());
    }
}
