//! The mutable runtime value model.
//!
//! [`Value`] is what the snapshotter consumes and what isolation
//! reconstructs: an ordinary, mutable tree of scalars and containers.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A runtime value used as a task input, output, or cache key component.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Value {
    /// The absent value.
    Null,
    /// A boolean scalar.
    Bool(bool),
    /// An integer scalar.
    Integer(i64),
    /// A string scalar.
    String(String),
    /// An ordered sequence.
    List(Vec<Value>),
    /// An unordered collection of unique values.
    Set(BTreeSet<Value>),
    /// A key-unique mapping.
    Map(BTreeMap<Value, Value>),
    /// A foreign value this layer cannot decompose, carried as its
    /// serialized bytes. Snapshotting captures only a fingerprint.
    Opaque(OpaqueValue),
}

/// A foreign value captured as a type name plus serialized bytes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OpaqueValue {
    /// Name of the foreign type, used in fingerprints and diagnostics.
    pub type_name: String,
    /// Serialized representation of the foreign value.
    pub bytes: Vec<u8>,
}

impl OpaqueValue {
    /// Create an opaque value from a type name and its serialized bytes.
    #[must_use]
    pub fn new(type_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            type_name: type_name.into(),
            bytes: bytes.into(),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<OpaqueValue> for Value {
    fn from(opaque: OpaqueValue) -> Self {
        Self::Opaque(opaque)
    }
}
