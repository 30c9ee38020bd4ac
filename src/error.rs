//! Error types for nullable value conversion.

use thiserror::Error;

use crate::types::SqlValue;

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for conversions at the driver boundary.
///
/// Both variants are conversion failures: an inbound value either has a
/// kind the wrapper cannot coerce, or an integer value that does not fit
/// the wrapper's width. Outbound conversion never produces an error for
/// the types in this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Inbound value kind is incompatible with the wrapper's native type.
    #[error("cannot scan {found} into {target}")]
    IncompatibleType {
        target: &'static str,
        found: &'static str,
    },

    /// Inbound integer value does not fit the target width.
    #[error("value {value} out of range for {target}")]
    OutOfRange { target: &'static str, value: i64 },
}

impl Error {
    /// Create an incompatible-type error for a rejected inbound value.
    pub fn incompatible(target: &'static str, found: &SqlValue) -> Self {
        Self::IncompatibleType {
            target,
            found: found.kind(),
        }
    }

    /// Create an out-of-range error for an integer that overflows `target`.
    pub fn out_of_range(target: &'static str, value: i64) -> Self {
        Self::OutOfRange { target, value }
    }
}
