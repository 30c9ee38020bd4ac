//! Conversion traits for the driver boundary.
//!
//! `FromSql` is the inbound direction (driver value into wrapper) and
//! `ToSql` the outbound direction (wrapper into driver value). Together
//! they are the only interface between the wrapper types and whatever
//! database access layer feeds them.

use crate::error::Result;
use crate::types::SqlValue;

/// Inbound conversion: populate a wrapper from a driver-supplied value.
pub trait FromSql: Default {
    /// Coerce `value` into this wrapper's native type and store it.
    ///
    /// On success both the value and the validity flag are replaced
    /// together. On failure the receiver is left unchanged, but callers
    /// should treat it as unusable and not inspect it further.
    ///
    /// # Errors
    /// Returns a conversion error if `value` has an incompatible kind or
    /// an integer value outside the wrapper's range.
    fn scan(&mut self, value: SqlValue) -> Result<()>;

    /// Construct a fresh wrapper from a driver-supplied value.
    fn from_sql(value: SqlValue) -> Result<Self> {
        let mut out = Self::default();
        out.scan(value)?;
        Ok(out)
    }
}

/// Outbound conversion: produce a value for the driver's write path.
pub trait ToSql {
    /// Convert this wrapper into a driver-acceptable value.
    ///
    /// A NULL wrapper produces `SqlValue::Null`; a valid wrapper
    /// produces its value's kind. Infallible for every type in this
    /// crate, but the contract keeps the `Result` because a driver
    /// boundary is allowed to reject values.
    fn to_sql(&self) -> Result<SqlValue>;
}
