//! dacite — the identity engine for a content-addressed, immutable,
//! distributed data substrate.
//!
//! Every value in the type system gets a 256-bit [`words::Hash`] derived
//! deterministically from its type and contents, composed from four
//! layers (leaves first):
//!
//! - [`digest`] + [`words`]: SHA-256 and the 256-bit ↔ four-word codec.
//! - [`fuse`]: the associative, non-commutative hash-combination
//!   primitive that everything above it is built from.
//! - [`types`] + [`leaf`]: the open type registry and type-tagged leaf
//!   hashing rules.
//! - [`seq`] / [`finger_tree`] and [`map`] / [`hamt`]: order-preserving
//!   sequence hashing and order-independent map hashing, backed by
//!   persistent finger trees and a 32-way HAMT respectively.
//! - [`value`]: the `Value` tagged union and `value_hash` dispatch tying
//!   the above together.
//! - [`parallel`]: optional `rayon`-backed fan-out for computing child
//!   hashes concurrently, safe because of `fuse`'s associativity.
//!
//! Feature flags:
//! - `rayon`: parallel child-hash computation for sequences and maps.
//! - `python`: expose a PyO3 module with safe error mapping.
//!
//! FFI (C ABI) symbols are always exported; the Python module only with
//! `--features python`.

#![forbid(unsafe_op_in_unsafe_fn)]
#![deny(rust_2018_idioms, unused_must_use)]

pub mod digest;
pub mod error;
pub mod ffi;
pub mod finger_tree;
pub mod fuse;
pub mod hamt;
pub mod leaf;
pub mod map;
pub mod parallel;
pub mod seq;
pub mod types;
pub mod value;
pub mod words;

#[cfg(feature = "python")]
pub mod py;

pub use error::{IdentityError, IdentityResult};
pub use fuse::fuse as fuse_hashes;
pub use types::type_hash;
pub use value::Value;
pub use words::Hash;

/// Return a static list of compile-time feature flags that were enabled.
pub fn enabled_features() -> &'static [&'static str] {
    const FEATS: &[&str] = &[
        #[cfg(feature = "rayon")]
        "rayon",
        #[cfg(feature = "python")]
        "python",
    ];
    FEATS
}
