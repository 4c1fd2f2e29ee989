//! Error types for the snapshot crate.

use miette::Diagnostic;
use thiserror::Error;

/// Error type for snapshot operations.
///
/// Hashing and structural comparison are total functions over any
/// well-formed snapshot graph; only isolation can fail.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// Isolation was attempted on a snapshot graph containing a member
    /// that cannot be reconstructed as a runtime value.
    #[error("cannot isolate snapshot of foreign value `{type_name}`")]
    #[diagnostic(
        code(snapval::snapshot::not_isolatable),
        help("Foreign values are captured by fingerprint only; they hash and compare but cannot be reconstructed")
    )]
    NotIsolatable {
        /// Type name of the non-isolatable member.
        type_name: String,
    },
}

impl Error {
    /// Create a not-isolatable error for the named foreign type.
    #[must_use]
    pub fn not_isolatable(type_name: impl Into<String>) -> Self {
        Self::NotIsolatable {
            type_name: type_name.into(),
        }
    }
}

/// Result type for snapshot operations.
pub type Result<T> = std::result::Result<T, Error>;
