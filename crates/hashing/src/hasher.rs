//! The typed append-only hashing sink.

/// Append-only sink for folding typed primitives into a fingerprint.
///
/// Implementations must be deterministic: appending the same sequence of
/// tokens always produces the same final state, and distinct token
/// sequences must not collide through framing ambiguity (for example,
/// `put_str("ab")` followed by `put_str("c")` must differ from
/// `put_str("a")` followed by `put_str("bc")`).
///
/// A hasher is single-owner for the duration of one hashing pass; callers
/// hand out `&mut` access and finalize once all content is appended.
pub trait ValueHasher {
    /// Append a string token.
    fn put_str(&mut self, s: &str);

    /// Append a signed integer token.
    fn put_i64(&mut self, n: i64);

    /// Append an unsigned integer token (entry and element counts).
    fn put_u64(&mut self, n: u64);

    /// Append a boolean token.
    fn put_bool(&mut self, b: bool);

    /// Append a raw byte-sequence token.
    fn put_bytes(&mut self, bytes: &[u8]);
}
