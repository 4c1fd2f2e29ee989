//! Isolation: reconstructing independent runtime values from snapshots.
//!
//! Isolation is an optional capability: every variant except `Opaque`
//! supports it. An opaque snapshot records only a fingerprint of a
//! foreign value, so there is nothing to reconstruct from.

use crate::error::{Error, Result};
use crate::snapshot::ValueSnapshot;
use crate::value::Value;
use std::collections::{BTreeMap, BTreeSet};

impl ValueSnapshot {
    /// Whether this snapshot supports isolation.
    ///
    /// Shallow, variant-level check; a supporting container may still fail
    /// to isolate when a nested member does not support it.
    #[must_use]
    pub fn supports_isolation(&self) -> bool {
        self.isolation_blocker().is_none()
    }

    /// The foreign type name blocking isolation, if any.
    fn isolation_blocker(&self) -> Option<&str> {
        match self {
            Self::Opaque { type_name, .. } => Some(type_name),
            _ => None,
        }
    }

    /// Reconstruct an independent, mutation-safe copy of the captured value.
    ///
    /// Allocates fresh containers populated entirely from recursively
    /// isolated children, so the result shares no mutable state with the
    /// snapshot or with any previously isolated copy. Reentrant: repeated
    /// calls yield independent values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotIsolatable`] when any member of the snapshot
    /// graph is a foreign value. The failure is immediate; no partially
    /// populated result is ever returned.
    pub fn isolate(&self) -> Result<Value> {
        match self {
            Self::Null => Ok(Value::Null),
            Self::Bool(b) => Ok(Value::Bool(*b)),
            Self::Integer(n) => Ok(Value::Integer(*n)),
            Self::String(s) => Ok(Value::String(s.clone())),
            Self::List(elements) => {
                let mut list = Vec::with_capacity(elements.len());
                for element in elements {
                    list.push(element.isolate()?);
                }
                Ok(Value::List(list))
            }
            Self::Set(elements) => {
                let mut set = BTreeSet::new();
                for element in elements {
                    set.insert(element.isolate()?);
                }
                Ok(Value::Set(set))
            }
            Self::Map(entries) => {
                let mut map = BTreeMap::new();
                for (key, value) in entries {
                    // Both sides must support isolation before either is
                    // isolated; a blocked entry fails the whole call
                    // rather than being dropped.
                    if let Some(foreign) = key
                        .isolation_blocker()
                        .or_else(|| value.isolation_blocker())
                    {
                        return Err(Error::not_isolatable(foreign));
                    }
                    map.insert(key.isolate()?, value.isolate()?);
                }
                Ok(Value::Map(map))
            }
            Self::Opaque { type_name, .. } => Err(Error::not_isolatable(type_name)),
        }
    }
}
