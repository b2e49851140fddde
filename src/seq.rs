//! Order-preserving sequence hashing, shared by `string`, `blob`, and
//! `vector` values (§4.7).
//!
//! The fold is specified left-to-right so semantics are fixed; associativity
//! of [`crate::fuse::fuse`] is what lets [`crate::parallel`] compute the
//! child hashes that feed this fold concurrently without changing the
//! result.

use crate::digest::sha256;
use crate::error::IdentityResult;
use crate::fuse::fuse;
use crate::words::Hash;

/// Fold child value hashes, in order, into the sequence's `data_hash`.
/// The empty sequence falls back to the leaf convention
/// (`SHA-256(empty)`), giving every empty sequence kind a well-defined,
/// type-distinguished hash via `value_hash = fuse(type_hash, data_hash)`.
pub fn data_hash(children: &[Hash]) -> IdentityResult<Hash> {
    let mut iter = children.iter();
    let Some(&first) = iter.next() else {
        return Ok(Hash::from_bytes(sha256(&[])));
    };
    let mut acc = first;
    for &h in iter {
        acc = fuse(acc, h)?;
    }
    Ok(acc)
}
