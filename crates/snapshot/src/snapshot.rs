//! Immutable structural snapshots of runtime values.
//!
//! A [`ValueSnapshot`] is created once by the [`ValueSnapshotter`], held
//! immutably for the lifetime of a cache-key computation or change
//! comparison, and never mutated. Equality, ordering, and hashing are
//! structural; object identity (the `Arc` allocation) only matters for
//! the re-snapshot protocol, where "same instance back" means "no change".

use crate::snapshotter::ValueSnapshotter;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use snapval_hashing::{Digest, DigestHasher, ValueHasher};
use std::sync::Arc;
use tracing::trace;

/// An immutable structural capture of a runtime [`Value`].
///
/// The variant set is closed and exhaustively matched by every operation,
/// so adding a variant forces every operation to handle it.
///
/// `Set` elements and `Map` entries are canonically ordered at
/// construction (by the snapshot's total order), which makes the derived
/// equality and the hash token stream independent of insertion order: two
/// snapshots built from the same elements in different orders are equal
/// and produce the same digest.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ValueSnapshot {
    /// Snapshot of the absent value.
    Null,
    /// Snapshot of a boolean scalar.
    Bool(bool),
    /// Snapshot of an integer scalar.
    Integer(i64),
    /// Snapshot of a string scalar.
    String(String),
    /// Snapshot of an ordered sequence; equality is positional.
    List(Vec<ValueSnapshot>),
    /// Snapshot of an unordered collection, canonically ordered.
    Set(Vec<ValueSnapshot>),
    /// Snapshot of a key-unique mapping, canonically ordered by key.
    ///
    /// Keys are themselves snapshots with working equality and hashing.
    Map(Vec<(ValueSnapshot, ValueSnapshot)>),
    /// Snapshot of a foreign value, captured by fingerprint only.
    Opaque {
        /// Name of the foreign type.
        type_name: String,
        /// Fingerprint of the foreign value's serialized bytes.
        fingerprint: Digest,
    },
}

impl ValueSnapshot {
    /// Snapshot an ordered sequence of child snapshots.
    #[must_use]
    pub fn list(elements: impl IntoIterator<Item = Self>) -> Self {
        Self::List(elements.into_iter().collect())
    }

    /// Snapshot an unordered collection of child snapshots.
    ///
    /// Elements are sorted into canonical order. Precondition: elements
    /// are unique under structural equality (guaranteed when built from a
    /// set-shaped source); uniqueness is not validated here.
    #[must_use]
    pub fn set(elements: impl IntoIterator<Item = Self>) -> Self {
        let mut elements: Vec<Self> = elements.into_iter().collect();
        elements.sort_unstable();
        Self::Set(elements)
    }

    /// Snapshot a key-unique mapping of child snapshots.
    ///
    /// Entries are sorted into canonical order by key. Precondition: keys
    /// are unique under structural equality (guaranteed when built from a
    /// key-unique source mapping); uniqueness is not validated here.
    #[must_use]
    pub fn map(entries: impl IntoIterator<Item = (Self, Self)>) -> Self {
        let mut entries: Vec<(Self, Self)> = entries.into_iter().collect();
        entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        Self::Map(entries)
    }

    /// Fold this snapshot's structure into a hash accumulator.
    ///
    /// Each variant appends a discriminator token, containers append their
    /// entry count before their children, and children append recursively.
    /// Equal snapshots append identical token sequences to any hasher; the
    /// snapshot itself is untouched.
    pub fn append_to_hasher(&self, hasher: &mut dyn ValueHasher) {
        match self {
            Self::Null => hasher.put_str("Null"),
            Self::Bool(b) => {
                hasher.put_str("Boolean");
                hasher.put_bool(*b);
            }
            Self::Integer(n) => {
                hasher.put_str("Integer");
                hasher.put_i64(*n);
            }
            Self::String(s) => {
                hasher.put_str("String");
                hasher.put_str(s);
            }
            Self::List(elements) => {
                hasher.put_str("List");
                hasher.put_u64(elements.len() as u64);
                for element in elements {
                    element.append_to_hasher(hasher);
                }
            }
            Self::Set(elements) => {
                hasher.put_str("Set");
                hasher.put_u64(elements.len() as u64);
                for element in elements {
                    element.append_to_hasher(hasher);
                }
            }
            Self::Map(entries) => {
                hasher.put_str("Map");
                hasher.put_u64(entries.len() as u64);
                for (key, value) in entries {
                    key.append_to_hasher(hasher);
                    value.append_to_hasher(hasher);
                }
            }
            Self::Opaque {
                type_name,
                fingerprint,
            } => {
                hasher.put_str("Opaque");
                hasher.put_str(type_name);
                hasher.put_str(fingerprint.as_str());
            }
        }
    }

    /// The cache-key digest of this snapshot.
    #[must_use]
    pub fn digest(&self) -> Digest {
        let mut hasher = DigestHasher::new();
        self.append_to_hasher(&mut hasher);
        hasher.finalize()
    }

    /// Re-snapshot a value against a previously recorded snapshot.
    ///
    /// Snapshots `value` and compares it structurally against `this`. When
    /// nothing changed, the recorded instance is returned (same `Arc`
    /// allocation), so upstream caches relying on identity shortcuts see
    /// no change and nothing is spuriously invalidated. Otherwise the
    /// fresh snapshot is returned, signaling a change.
    #[must_use]
    pub fn snapshot(
        this: &Arc<Self>,
        value: &Value,
        snapshotter: &ValueSnapshotter,
    ) -> Arc<Self> {
        let fresh = snapshotter.snapshot(value);
        if *fresh == **this {
            trace!("re-snapshot unchanged, keeping recorded instance");
            Arc::clone(this)
        } else {
            fresh
        }
    }
}
