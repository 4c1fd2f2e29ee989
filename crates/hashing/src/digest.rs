//! SHA-256 digest builder for cache keys.
//!
//! Every token is framed with a one-byte type tag, and variable-length
//! tokens carry a little-endian length prefix, so no two distinct token
//! sequences feed identical bytes to the underlying hash.

use crate::hasher::ValueHasher;
use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};
use std::fmt;

// Token type tags. Fixed-width tokens need no length prefix.
const TAG_STR: u8 = b'S';
const TAG_I64: u8 = b'I';
const TAG_U64: u8 = b'U';
const TAG_BOOL: u8 = b'B';
const TAG_BYTES: u8 = b'R';

/// A finalized cache-key fingerprint in `sha256:<hex>` form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Digest(String);

impl Digest {
    /// The `sha256:<hex>` rendering of this digest.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// SHA-256 implementation of [`ValueHasher`].
///
/// Builder style: append tokens, then [`finalize`](Self::finalize) into a
/// [`Digest`].
pub struct DigestHasher {
    hasher: Sha256,
}

impl DigestHasher {
    /// Create a hasher with no content appended.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hasher: Sha256::new(),
        }
    }

    fn put_framed(&mut self, tag: u8, bytes: &[u8]) {
        self.hasher.update([tag]);
        self.hasher.update((bytes.len() as u64).to_le_bytes());
        self.hasher.update(bytes);
    }

    /// Finalize and return the hex-encoded digest.
    #[must_use]
    pub fn finalize(self) -> Digest {
        let result = self.hasher.finalize();
        Digest(format!("sha256:{}", hex::encode(result)))
    }
}

impl Default for DigestHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueHasher for DigestHasher {
    fn put_str(&mut self, s: &str) {
        self.put_framed(TAG_STR, s.as_bytes());
    }

    fn put_i64(&mut self, n: i64) {
        self.hasher.update([TAG_I64]);
        self.hasher.update(n.to_le_bytes());
    }

    fn put_u64(&mut self, n: u64) {
        self.hasher.update([TAG_U64]);
        self.hasher.update(n.to_le_bytes());
    }

    fn put_bool(&mut self, b: bool) {
        self.hasher.update([TAG_BOOL, u8::from(b)]);
    }

    fn put_bytes(&mut self, bytes: &[u8]) {
        self.put_framed(TAG_BYTES, bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digest_of(build: impl FnOnce(&mut DigestHasher)) -> Digest {
        let mut hasher = DigestHasher::new();
        build(&mut hasher);
        hasher.finalize()
    }

    #[test]
    fn test_same_token_sequence_same_digest() {
        let a = digest_of(|h| {
            h.put_str("inputs");
            h.put_u64(2);
            h.put_i64(-7);
        });
        let b = digest_of(|h| {
            h.put_str("inputs");
            h.put_u64(2);
            h.put_i64(-7);
        });
        assert_eq!(a, b);
    }

    #[test]
    fn test_string_framing_prevents_concatenation_collisions() {
        let a = digest_of(|h| {
            h.put_str("ab");
            h.put_str("c");
        });
        let b = digest_of(|h| {
            h.put_str("a");
            h.put_str("bc");
        });
        assert_ne!(a, b);
    }

    #[test]
    fn test_token_tags_discriminate_types() {
        let as_str = digest_of(|h| h.put_str("x"));
        let as_bytes = digest_of(|h| h.put_bytes(b"x"));
        assert_ne!(as_str, as_bytes);

        let as_i64 = digest_of(|h| h.put_i64(1));
        let as_u64 = digest_of(|h| h.put_u64(1));
        assert_ne!(as_i64, as_u64);
    }

    #[test]
    fn test_append_order_is_significant() {
        let a = digest_of(|h| {
            h.put_str("key");
            h.put_str("value");
        });
        let b = digest_of(|h| {
            h.put_str("value");
            h.put_str("key");
        });
        assert_ne!(a, b);
    }

    #[test]
    fn test_digest_rendering() {
        let digest = digest_of(|h| h.put_bool(true));
        let rendered = digest.to_string();
        assert!(rendered.starts_with("sha256:"));
        assert_eq!(rendered.len(), "sha256:".len() + 64);
        assert_eq!(rendered, digest.as_str());
    }

    #[test]
    fn test_digest_serde_transparent() {
        let digest = digest_of(|h| h.put_u64(0));
        let json = serde_json::to_string(&digest).unwrap();
        assert_eq!(json, format!("\"{}\"", digest.as_str()));
        let back: Digest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, digest);
    }
}
