//! Turning runtime values into snapshots and re-comparing them.

use crate::snapshot::ValueSnapshot;
use crate::value::Value;
use snapval_hashing::{DigestHasher, ValueHasher};
use std::sync::Arc;
use tracing::debug;

/// Produces [`ValueSnapshot`]s from runtime [`Value`]s.
///
/// Stateless and cheap to share. Snapshots come back behind an `Arc`
/// because the re-snapshot protocol preserves the allocation of an
/// unchanged recorded snapshot, which callers detect with
/// [`Arc::ptr_eq`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ValueSnapshotter;

impl ValueSnapshotter {
    /// Create a snapshotter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Snapshot a runtime value.
    #[must_use]
    pub fn snapshot(&self, value: &Value) -> Arc<ValueSnapshot> {
        Arc::new(self.snapshot_inner(value))
    }

    fn snapshot_inner(&self, value: &Value) -> ValueSnapshot {
        match value {
            Value::Null => ValueSnapshot::Null,
            Value::Bool(b) => ValueSnapshot::Bool(*b),
            Value::Integer(n) => ValueSnapshot::Integer(*n),
            Value::String(s) => ValueSnapshot::String(s.clone()),
            Value::List(elements) => {
                ValueSnapshot::list(elements.iter().map(|e| self.snapshot_inner(e)))
            }
            Value::Set(elements) => {
                ValueSnapshot::set(elements.iter().map(|e| self.snapshot_inner(e)))
            }
            Value::Map(entries) => ValueSnapshot::map(
                entries
                    .iter()
                    .map(|(k, v)| (self.snapshot_inner(k), self.snapshot_inner(v))),
            ),
            Value::Opaque(opaque) => {
                // Capture foreign values by fingerprint; the bytes are not
                // retained, which is what makes the snapshot non-isolatable.
                let mut hasher = DigestHasher::new();
                hasher.put_str(&opaque.type_name);
                hasher.put_bytes(&opaque.bytes);
                ValueSnapshot::Opaque {
                    type_name: opaque.type_name.clone(),
                    fingerprint: hasher.finalize(),
                }
            }
        }
    }

    /// Re-snapshot `value` against a previously recorded snapshot.
    ///
    /// Returns the recorded instance itself when the value is structurally
    /// unchanged, and a fresh snapshot otherwise. See
    /// [`ValueSnapshot::snapshot`] for the identity contract.
    #[must_use]
    pub fn snapshot_against(
        &self,
        previous: &Arc<ValueSnapshot>,
        value: &Value,
    ) -> Arc<ValueSnapshot> {
        let next = ValueSnapshot::snapshot(previous, value, self);
        if !Arc::ptr_eq(&next, previous) {
            debug!(digest = %next.digest(), "value changed, replacing recorded snapshot");
        }
        next
    }
}
