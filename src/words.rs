//! The 256-bit `Hash` type and its two interchangeable representations:
//! a 32-byte big-endian buffer (I/O, equality) and four 64-bit words
//! (arithmetic inside [`crate::fuse`]).

use std::fmt;

/// An opaque 256-bit content hash.
///
/// Word order is most-significant-first: `w0` occupies bytes `0..8`,
/// `w3` occupies bytes `24..32`. `w0` is the word [`crate::fuse`] mixes
/// most heavily and the word the HAMT indexer consumes first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hash([u8; 32]);

impl Hash {
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Hash(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Split into four big-endian 64-bit words, most significant first.
    pub fn to_words(&self) -> Words {
        let b = &self.0;
        Words([
            u64::from_be_bytes(b[0..8].try_into().unwrap()),
            u64::from_be_bytes(b[8..16].try_into().unwrap()),
            u64::from_be_bytes(b[16..24].try_into().unwrap()),
            u64::from_be_bytes(b[24..32].try_into().unwrap()),
        ])
    }

    /// Exact inverse of [`Hash::to_words`].
    pub fn from_words(words: Words) -> Self {
        let mut bytes = [0u8; 32];
        bytes[0..8].copy_from_slice(&words.0[0].to_be_bytes());
        bytes[8..16].copy_from_slice(&words.0[1].to_be_bytes());
        bytes[16..24].copy_from_slice(&words.0[2].to_be_bytes());
        bytes[24..32].copy_from_slice(&words.0[3].to_be_bytes());
        Hash(bytes)
    }

    /// Lowercase hex encoding, the canonical text form for wire use.
    pub fn to_hex(&self) -> String {
        let mut s = String::with_capacity(64);
        for b in &self.0 {
            s.push_str(&format!("{:02x}", b));
        }
        s
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self.to_hex())
    }
}

impl From<[u8; 32]> for Hash {
    fn from(bytes: [u8; 32]) -> Self {
        Hash(bytes)
    }
}

/// The four 64-bit words of a [`Hash`], most significant first.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Words([u64; 4]);

impl Words {
    pub const fn new(w0: u64, w1: u64, w2: u64, w3: u64) -> Self {
        Words([w0, w1, w2, w3])
    }

    pub const fn w0(&self) -> u64 {
        self.0[0]
    }
    pub const fn w1(&self) -> u64 {
        self.0[1]
    }
    pub const fn w2(&self) -> u64 {
        self.0[2]
    }
    pub const fn w3(&self) -> u64 {
        self.0[3]
    }

    pub const fn as_array(&self) -> [u64; 4] {
        self.0
    }
}
