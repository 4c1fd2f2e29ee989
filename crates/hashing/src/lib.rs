//! Typed hash accumulator and cache-key digest builder for snapval.
//!
//! This crate provides the hashing side of the snapshot subsystem:
//! - [`ValueHasher`]: an append-only sink accepting typed primitives
//!   (strings, integers, booleans, byte sequences)
//! - [`DigestHasher`]: a SHA-256 implementation of the sink with
//!   unambiguous token framing
//! - [`Digest`]: the finalized `sha256:<hex>` cache-key fingerprint
//!
//! The order of appends is significant: two hashing passes produce the
//! same [`Digest`] if and only if they append the same token sequence.

mod digest;
mod hasher;

pub use digest::{Digest, DigestHasher};
pub use hasher::ValueHasher;
