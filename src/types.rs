//! Type registry: canonical type names and their 256-bit type hashes.
//!
//! `TypeHash = SHA-256(utf8(TypeName))`. The registry is open — any UTF-8
//! string is a valid type name, and a type hash is always computable on
//! demand with no central allocation. The built-in `dacite.core/…` names
//! are precomputed once behind a [`once_cell::sync::Lazy`].

use once_cell::sync::Lazy;

use crate::digest::sha256;
use crate::words::Hash;

/// The built-in, reserved type names, in the exact order they are defined
/// by the external interface contract. Exactly 21 entries.
pub const BUILTIN_NAMES: [&str; 21] = [
    "dacite.core/null",
    "dacite.core/bool",
    "dacite.core/i8",
    "dacite.core/i16",
    "dacite.core/i32",
    "dacite.core/i64",
    "dacite.core/i128",
    "dacite.core/i256",
    "dacite.core/u8",
    "dacite.core/u16",
    "dacite.core/u32",
    "dacite.core/u64",
    "dacite.core/u128",
    "dacite.core/u256",
    "dacite.core/f32",
    "dacite.core/f64",
    "dacite.core/char",
    "dacite.core/string",
    "dacite.core/blob",
    "dacite.core/vector",
    "dacite.core/map",
];

/// Compute the type hash for an arbitrary canonical type name. Works for
/// both built-in and extension names; built-in lookups are served from the
/// precomputed table by [`builtin_type_hash`] when the caller knows the
/// enum, but this function is always correct.
pub fn type_hash(name: &str) -> Hash {
    Hash::from_bytes(sha256(name.as_bytes()))
}

/// The built-in leaf/collection kinds, mirroring [`BUILTIN_NAMES`] in the
/// same order. Gives callers a closed enum to match on instead of stringly
/// typed lookups for the types the engine itself constructs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinType {
    Null,
    Bool,
    I8,
    I16,
    I32,
    I64,
    I128,
    I256,
    U8,
    U16,
    U32,
    U64,
    U128,
    U256,
    F32,
    F64,
    Char,
    String,
    Blob,
    Vector,
    Map,
}

impl BuiltinType {
    pub const ALL: [BuiltinType; 21] = [
        BuiltinType::Null,
        BuiltinType::Bool,
        BuiltinType::I8,
        BuiltinType::I16,
        BuiltinType::I32,
        BuiltinType::I64,
        BuiltinType::I128,
        BuiltinType::I256,
        BuiltinType::U8,
        BuiltinType::U16,
        BuiltinType::U32,
        BuiltinType::U64,
        BuiltinType::U128,
        BuiltinType::U256,
        BuiltinType::F32,
        BuiltinType::F64,
        BuiltinType::Char,
        BuiltinType::String,
        BuiltinType::Blob,
        BuiltinType::Vector,
        BuiltinType::Map,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            BuiltinType::Null => "dacite.core/null",
            BuiltinType::Bool => "dacite.core/bool",
            BuiltinType::I8 => "dacite.core/i8",
            BuiltinType::I16 => "dacite.core/i16",
            BuiltinType::I32 => "dacite.core/i32",
            BuiltinType::I64 => "dacite.core/i64",
            BuiltinType::I128 => "dacite.core/i128",
            BuiltinType::I256 => "dacite.core/i256",
            BuiltinType::U8 => "dacite.core/u8",
            BuiltinType::U16 => "dacite.core/u16",
            BuiltinType::U32 => "dacite.core/u32",
            BuiltinType::U64 => "dacite.core/u64",
            BuiltinType::U128 => "dacite.core/u128",
            BuiltinType::U256 => "dacite.core/u256",
            BuiltinType::F32 => "dacite.core/f32",
            BuiltinType::F64 => "dacite.core/f64",
            BuiltinType::Char => "dacite.core/char",
            BuiltinType::String => "dacite.core/string",
            BuiltinType::Blob => "dacite.core/blob",
            BuiltinType::Vector => "dacite.core/vector",
            BuiltinType::Map => "dacite.core/map",
        }
    }

    pub fn type_hash(&self) -> Hash {
        builtin_table()[*self as usize]
    }
}

fn builtin_table() -> &'static [Hash; 21] {
    static TABLE: Lazy<[Hash; 21]> = Lazy::new(|| {
        let mut out = [Hash::from_bytes([0; 32]); 21];
        for (i, ty) in BuiltinType::ALL.iter().enumerate() {
            out[i] = type_hash(ty.name());
        }
        out
    });
    &TABLE
}

/// Look up the type hash for a built-in by enum variant. Precomputed once
/// per process.
pub fn builtin_type_hash(ty: BuiltinType) -> Hash {
    ty.type_hash()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_names_match_table_order() {
        for (ty, name) in BuiltinType::ALL.iter().zip(BUILTIN_NAMES.iter()) {
            assert_eq!(ty.name(), *name);
        }
    }

    #[test]
    fn all_21_builtins_pairwise_distinct() {
        let hashes: HashSet<Hash> = BuiltinType::ALL.iter().map(|t| t.type_hash()).collect();
        assert_eq!(hashes.len(), 21);
    }

    #[test]
    fn type_hash_is_sha256_of_utf8_name() {
        let expected = Hash::from_bytes(sha256(b"dacite.core/i32"));
        assert_eq!(type_hash("dacite.core/i32"), expected);
        assert_eq!(BuiltinType::I32.type_hash(), expected);
    }

    #[test]
    fn extension_name_hashes_without_registration() {
        let a = type_hash("myorg.widgets/gadget");
        let b = type_hash("myorg.widgets/gadget");
        assert_eq!(a, b);
        assert_ne!(a, type_hash("myorg.widgets/other"));
    }
}
