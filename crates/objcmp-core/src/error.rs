//! Error types for diff operations.

use std::fmt;

use thiserror::Error;

use crate::value::ValueKind;

/// Which comparison root an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Source,
    Target,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Source => f.write_str("source"),
            Side::Target => f.write_str("target"),
        }
    }
}

/// Errors that can occur while classifying the keys of two values.
///
/// Equality checks never fail; only the diff roots are validated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// A comparison root could not be viewed as a keyed collection.
    /// Only mappings, sequences, and strings are accepted.
    #[error("invalid {side} argument: expected a mapping, sequence, or string, got {kind}")]
    InvalidArgument { side: Side, kind: ValueKind },
}

/// Convenience alias used throughout objcmp-core.
pub type Result<T> = std::result::Result<T, DiffError>;
