//! SHA-256 digest primitive.
//!
//! A thin wrapper over the `sha2` crate. Pure, no shared state: every call
//! owns its own hasher instance. The only failure mode is SHA-256 being
//! unavailable at process start, which is not representable as a `Result` —
//! it is a fatal initialization error on any platform this crate supports.

use sha2::{Digest as _, Sha256};

/// Hash `data` in one shot and return the 32-byte digest.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Hash the concatenation of several byte slices without copying them into
/// one buffer first. Used by the leaf hasher to combine a type tag with
/// canonical value bytes when that is cheaper than allocating.
pub fn sha256_many(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}
