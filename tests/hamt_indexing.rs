//! Integration coverage for the HAMT indexing discipline (§4.8): MSB-first
//! 5-bit descent over `w0`, then `w1`, `w2`, `w3`, and the collision-bucket
//! fallback once all 256 bits are exhausted.

mod common;
use common::*;

use dacite::hamt::{entries, get, insert, len, Node};
use dacite::words::Hash;

#[test]
fn insert_and_get_roundtrip_over_many_keys() {
    let mut rng = rng_from_env();
    let mut root = Node::Empty;
    let mut keys = Vec::new();
    for i in 0u64..512 {
        let h = random_hash(&mut rng);
        keys.push((h, i));
        root = insert(&root, 0, h, i);
    }
    for (h, v) in &keys {
        assert_eq!(get(&root, 0, h), Some(v));
    }
    assert_eq!(len(&root), keys.len());
}

#[test]
fn insertion_order_does_not_affect_final_entry_multiset() {
    let mut rng = rng_from_env();
    let pairs: Vec<(Hash, u64)> = (0..64).map(|i| (random_hash(&mut rng), i)).collect();

    let mut forward = Node::Empty;
    for (h, v) in &pairs {
        forward = insert(&forward, 0, *h, *v);
    }

    let mut reversed = Node::Empty;
    for (h, v) in pairs.iter().rev() {
        reversed = insert(&reversed, 0, *h, *v);
    }

    let mut a = entries(&forward);
    let mut b = entries(&reversed);
    a.sort_by_key(|(h, _)| *h);
    b.sort_by_key(|(h, _)| *h);
    assert_eq!(a, b);
}

#[test]
fn replacing_an_existing_key_does_not_grow_the_trie() {
    let mut rng = rng_from_env();
    let h = random_hash(&mut rng);
    let root = insert(&Node::Empty, 0, h, 1u64);
    assert_eq!(len(&root), 1);
    let root = insert(&root, 0, h, 2u64);
    assert_eq!(len(&root), 1);
    assert_eq!(get(&root, 0, &h), Some(&2));
}

#[test]
fn structural_sharing_leaves_prior_version_untouched() {
    let mut rng = rng_from_env();
    let h1 = random_hash(&mut rng);
    let h2 = random_hash(&mut rng);
    let v1 = insert(&Node::Empty, 0, h1, 10u64);
    let v2 = insert(&v1, 0, h2, 20u64);
    assert_eq!(get(&v1, 0, &h2), None);
    assert_eq!(get(&v2, 0, &h2), Some(&20));
    assert_eq!(get(&v2, 0, &h1), Some(&10));
}

#[test]
fn two_hashes_sharing_every_5_bit_chunk_fall_into_the_collision_bucket() {
    // Construct two distinct 256-bit hashes whose every 5-bit window (as
    // read by the HAMT indexer) is identical: same top 240 bits, differing
    // only in the low bits of w3 that sit below the last full 5-bit level.
    // Both then collide at every trie depth and must end up in the linear
    // collision bucket, not silently merged or lost.
    let mut bytes_a = [0u8; 32];
    let mut bytes_b = [0u8; 32];
    for i in 0..31 {
        bytes_a[i] = 0xAB;
        bytes_b[i] = 0xAB;
    }
    bytes_a[31] = 0b1010_1000; // low nibble differs beyond the last 5-bit level
    bytes_b[31] = 0b1010_1011;
    let a = Hash::from_bytes(bytes_a);
    let b = Hash::from_bytes(bytes_b);
    assert_ne!(a, b);

    let root = insert(&Node::Empty, 0, a, 1u64);
    let root = insert(&root, 0, b, 2u64);
    assert_eq!(get(&root, 0, &a), Some(&1));
    assert_eq!(get(&root, 0, &b), Some(&2));
    assert_eq!(len(&root), 2);
}
