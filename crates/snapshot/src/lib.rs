//! Immutable value snapshots, change detection, and isolation for snapval.
//!
//! This crate captures arbitrary runtime values as immutable, structurally
//! comparable snapshots for incremental-build change detection and
//! build-result caching:
//! - [`Value`]: the mutable runtime value model (scalars, lists, sets,
//!   maps, opaque foreign values)
//! - [`ValueSnapshot`]: the immutable structural capture, with
//!   deterministic hashing and structural equality
//! - [`ValueSnapshotter`]: turns values into snapshots and re-compares
//!   them against previously recorded snapshots
//! - isolation: reconstructing an independent, aliasing-free copy of the
//!   captured value, failing with [`Error::NotIsolatable`] when the
//!   snapshot graph contains a member that cannot be reconstructed
//!
//! # Overview
//!
//! Change detection snapshots a task's inputs, folds the snapshots into a
//! cache-key digest, and compares fresh snapshots against recorded ones.
//! Two executions share cached output exactly when their snapshots are
//! structurally equal and hash to the same digest. Snapshots are immutable
//! and `Send + Sync`; hashing, comparison, and isolation may all run
//! concurrently on one instance.
//!
//! # Example
//!
//! ```ignore
//! use snapval_snapshot::{Value, ValueSnapshotter};
//! use std::collections::BTreeMap;
//!
//! let snapshotter = ValueSnapshotter::new();
//!
//! let mut inputs = BTreeMap::new();
//! inputs.insert(Value::from("optimize"), Value::from(true));
//! let recorded = snapshotter.snapshot(&Value::Map(inputs.clone()));
//!
//! // No change: the recorded instance itself comes back.
//! let again = snapshotter.snapshot_against(&recorded, &Value::Map(inputs));
//! assert!(std::sync::Arc::ptr_eq(&recorded, &again));
//!
//! // Hand a safe mutable copy to the next task execution.
//! let fresh_inputs = recorded.isolate()?;
//! ```

mod error;
mod isolate;
mod snapshot;
mod snapshotter;
mod value;

pub use error::{Error, Result};
pub use snapshot::ValueSnapshot;
pub use snapshotter::ValueSnapshotter;
pub use value::{OpaqueValue, Value};

// Re-export the hashing surface so callers can drive custom accumulators.
pub use snapval_hashing::{Digest, DigestHasher, ValueHasher};
