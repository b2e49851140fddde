//! Order-independent map hashing and the persistent, HAMT-backed `Map`
//! value type (§4.7–§4.8).
//!
//! Identity is a function of the *multiset* of entries: entry hashes are
//! sorted by unsigned big-endian byte order (the natural `Ord` on
//! [`Hash`], which compares its 32-byte buffer lexicographically) before
//! the canonical left fold, so insertion order never affects the result.

use std::rc::Rc;

use tracing::debug;

use crate::digest::sha256;
use crate::error::IdentityResult;
use crate::fuse::fuse;
use crate::hamt::{self, Node, MAX_TRIE_DEPTH};
use crate::words::Hash;

/// Fold a map's entry hashes into its `data_hash`. `entry_hashes` is sorted
/// in place — callers that need the original order should clone first.
/// Empty maps fall back to the leaf convention, matching [`crate::seq`].
pub fn data_hash(entry_hashes: &mut [Hash]) -> IdentityResult<Hash> {
    entry_hashes.sort_unstable();
    let mut iter = entry_hashes.iter();
    let Some(&first) = iter.next() else {
        return Ok(Hash::from_bytes(sha256(&[])));
    };
    let mut acc = first;
    for &h in iter {
        acc = fuse(acc, h)?;
    }
    Ok(acc)
}

/// A persistent map from values to values, backed by a 32-way HAMT keyed
/// on `key.value_hash()`. Duplicate keys replace rather than accumulate,
/// matching the "at most one entry per key" rule in §4.7.
#[derive(Clone)]
pub struct Map<K, V> {
    root: Rc<Node<(K, V)>>,
    len: usize,
}

impl<K: Clone, V: Clone> Map<K, V> {
    pub fn new() -> Self {
        Map {
            root: Rc::new(Node::Empty),
            len: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Insert `key -> value`, keyed by `key_hash = key.value_hash()`.
    /// Replaces any existing entry with the same key hash.
    pub fn insert(&self, key_hash: Hash, key: K, value: V) -> Map<K, V> {
        let had_key = hamt::get(&self.root, 0, &key_hash).is_some();
        let new_root = hamt::insert(&self.root, 0, key_hash, (key, value));
        Map {
            root: Rc::new(new_root),
            len: if had_key { self.len } else { self.len + 1 },
        }
    }

    pub fn get(&self, key_hash: &Hash) -> Option<&V> {
        hamt::get(&self.root, 0, key_hash).map(|(_, v)| v)
    }

    /// All `(key_hash, key, value)` triples, in arbitrary trie order. The
    /// order is never meaningful for identity — see [`data_hash`].
    pub fn entries(&self) -> Vec<(Hash, K, V)> {
        hamt::entries(&self.root)
            .into_iter()
            .map(|(h, (k, v))| (h, k, v))
            .collect()
    }
}

impl<K: Clone, V: Clone> Default for Map<K, V> {
    fn default() -> Self {
        Map::new()
    }
}

/// Build a map's `entry_hash` list from `(key.value_hash, value.value_hash)`
/// pairs, logging if any entry falls into the HAMT's collision bucket —
/// a cryptographic anomaly worth surfacing, not a silent branch.
pub fn entry_hashes(pairs: &[(Hash, Hash)], depth_hint: Option<usize>) -> IdentityResult<Vec<Hash>> {
    if let Some(depth) = depth_hint {
        if depth >= MAX_TRIE_DEPTH {
            debug!(depth, "map entry fell into HAMT collision bucket");
        }
    }
    pairs
        .iter()
        .map(|(k, v)| fuse(*k, *v))
        .collect::<Result<Vec<_>, _>>()
}
