//! Leaf hasher: type-tagged hashing of bounded primitives.
//!
//! `leaf_hash = fuse(type_hash, SHA-256(canonical_bytes(value)))`. Canonical
//! byte encodings are fixed by this module so independent implementations
//! agree byte-for-byte.

use crate::digest::sha256;
use crate::error::IdentityResult;
use crate::fuse::fuse;
use crate::types::{builtin_type_hash, BuiltinType};
use crate::words::Hash;

/// NaN payloads are canonicalized to the standard quiet-NaN, zero-payload
/// bit pattern before hashing, so any two NaN floats regarded as logically
/// equal produce the same hash (invariant #2).
const F32_CANONICAL_NAN: u32 = 0x7FC0_0000;
const F64_CANONICAL_NAN: u64 = 0x7FF8_0000_0000_0000;

fn leaf_hash(ty: BuiltinType, canonical_bytes: &[u8]) -> IdentityResult<Hash> {
    let data_hash = Hash::from_bytes(sha256(canonical_bytes));
    fuse(builtin_type_hash(ty), data_hash)
}

pub fn null() -> IdentityResult<Hash> {
    leaf_hash(BuiltinType::Null, &[])
}

pub fn bool_(value: bool) -> IdentityResult<Hash> {
    leaf_hash(BuiltinType::Bool, &[u8::from(value)])
}

pub fn char_(value: char) -> IdentityResult<Hash> {
    let mut buf = [0u8; 4];
    let s = value.encode_utf8(&mut buf);
    leaf_hash(BuiltinType::Char, s.as_bytes())
}

macro_rules! signed_leaf {
    ($name:ident, $ty:ty, $builtin:expr) => {
        pub fn $name(value: $ty) -> IdentityResult<Hash> {
            leaf_hash($builtin, &value.to_be_bytes())
        }
    };
}

macro_rules! unsigned_leaf {
    ($name:ident, $ty:ty, $builtin:expr) => {
        pub fn $name(value: $ty) -> IdentityResult<Hash> {
            leaf_hash($builtin, &value.to_be_bytes())
        }
    };
}

signed_leaf!(i8_, i8, BuiltinType::I8);
signed_leaf!(i16_, i16, BuiltinType::I16);
signed_leaf!(i32_, i32, BuiltinType::I32);
signed_leaf!(i64_, i64, BuiltinType::I64);
signed_leaf!(i128_, i128, BuiltinType::I128);

unsigned_leaf!(u8_, u8, BuiltinType::U8);
unsigned_leaf!(u16_, u16, BuiltinType::U16);
unsigned_leaf!(u32_, u32, BuiltinType::U32);
unsigned_leaf!(u64_, u64, BuiltinType::U64);
unsigned_leaf!(u128_, u128, BuiltinType::U128);

/// `i256`: represented at the API boundary as 32 big-endian two's-complement
/// bytes (no native 256-bit integer type in `std`).
pub fn i256(be_bytes: [u8; 32]) -> IdentityResult<Hash> {
    leaf_hash(BuiltinType::I256, &be_bytes)
}

/// `u256`: represented at the API boundary as 32 big-endian unsigned bytes.
pub fn u256(be_bytes: [u8; 32]) -> IdentityResult<Hash> {
    leaf_hash(BuiltinType::U256, &be_bytes)
}

pub fn f32_(value: f32) -> IdentityResult<Hash> {
    let bits = if value.is_nan() {
        F32_CANONICAL_NAN
    } else {
        value.to_bits()
    };
    leaf_hash(BuiltinType::F32, &bits.to_be_bytes())
}

pub fn f64_(value: f64) -> IdentityResult<Hash> {
    let bits = if value.is_nan() {
        F64_CANONICAL_NAN
    } else {
        value.to_bits()
    };
    leaf_hash(BuiltinType::F64, &bits.to_be_bytes())
}
