//! Nullable integer wrappers in the three supported widths.

use crate::convert::{FromSql, ToSql};
use crate::error::{Error, Result};
use crate::hex;

use super::value::SqlValue;

/// Nullable 64-bit signed integer.
///
/// `value` is meaningless when `valid` is false; use `get` or `is_null`
/// instead of reading the fields directly unless constructing literally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NullInt64 {
    /// The wrapped integer.
    pub value: i64,
    /// True if `value` reflects a non-NULL database value.
    pub valid: bool,
}

impl NullInt64 {
    /// Create a valid wrapper holding `value`.
    pub fn new(value: i64) -> Self {
        Self { value, valid: true }
    }

    /// Create a NULL wrapper.
    pub fn null() -> Self {
        Self::default()
    }

    /// Check if the underlying value is NULL.
    pub fn is_null(&self) -> bool {
        !self.valid
    }

    /// Get the value, or `None` when NULL.
    pub fn get(&self) -> Option<i64> {
        if self.valid {
            Some(self.value)
        } else {
            None
        }
    }

    /// Lowercase base-16 rendering of the value; empty string when NULL.
    pub fn hex_string(&self) -> String {
        if !self.valid {
            return String::new();
        }
        hex::int_to_hex(self.value)
    }
}

impl FromSql for NullInt64 {
    fn scan(&mut self, value: SqlValue) -> Result<()> {
        let scanned = match value {
            SqlValue::Null => Self::null(),
            SqlValue::Int16(v) => Self::new(i64::from(v)),
            SqlValue::Int32(v) => Self::new(i64::from(v)),
            SqlValue::Int64(v) => Self::new(v),
            other => return Err(Error::incompatible("NullInt64", &other)),
        };
        *self = scanned;
        Ok(())
    }
}

impl ToSql for NullInt64 {
    fn to_sql(&self) -> Result<SqlValue> {
        if self.valid {
            Ok(SqlValue::Int64(self.value))
        } else {
            Ok(SqlValue::Null)
        }
    }
}

/// Nullable 32-bit signed integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NullInt32 {
    /// The wrapped integer.
    pub value: i32,
    /// True if `value` reflects a non-NULL database value.
    pub valid: bool,
}

impl NullInt32 {
    /// Create a valid wrapper holding `value`.
    pub fn new(value: i32) -> Self {
        Self { value, valid: true }
    }

    /// Create a NULL wrapper.
    pub fn null() -> Self {
        Self::default()
    }

    /// Check if the underlying value is NULL.
    pub fn is_null(&self) -> bool {
        !self.valid
    }

    /// Get the value, or `None` when NULL.
    pub fn get(&self) -> Option<i32> {
        if self.valid {
            Some(self.value)
        } else {
            None
        }
    }

    /// Lowercase base-16 rendering of the value; empty string when NULL.
    pub fn hex_string(&self) -> String {
        if !self.valid {
            return String::new();
        }
        hex::int_to_hex(self.value)
    }
}

impl FromSql for NullInt32 {
    fn scan(&mut self, value: SqlValue) -> Result<()> {
        let scanned = match value {
            SqlValue::Null => Self::null(),
            SqlValue::Int16(v) => Self::new(i32::from(v)),
            SqlValue::Int32(v) => Self::new(v),
            SqlValue::Int64(v) => {
                let narrowed =
                    i32::try_from(v).map_err(|_| Error::out_of_range("NullInt32", v))?;
                Self::new(narrowed)
            }
            other => return Err(Error::incompatible("NullInt32", &other)),
        };
        *self = scanned;
        Ok(())
    }
}

impl ToSql for NullInt32 {
    fn to_sql(&self) -> Result<SqlValue> {
        if self.valid {
            Ok(SqlValue::Int32(self.value))
        } else {
            Ok(SqlValue::Null)
        }
    }
}

/// Nullable 16-bit signed integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NullInt16 {
    /// The wrapped integer.
    pub value: i16,
    /// True if `value` reflects a non-NULL database value.
    pub valid: bool,
}

impl NullInt16 {
    /// Create a valid wrapper holding `value`.
    pub fn new(value: i16) -> Self {
        Self { value, valid: true }
    }

    /// Create a NULL wrapper.
    pub fn null() -> Self {
        Self::default()
    }

    /// Check if the underlying value is NULL.
    pub fn is_null(&self) -> bool {
        !self.valid
    }

    /// Get the value, or `None` when NULL.
    pub fn get(&self) -> Option<i16> {
        if self.valid {
            Some(self.value)
        } else {
            None
        }
    }

    /// Lowercase base-16 rendering of the value; empty string when NULL.
    pub fn hex_string(&self) -> String {
        if !self.valid {
            return String::new();
        }
        hex::int_to_hex(self.value)
    }
}

impl FromSql for NullInt16 {
    fn scan(&mut self, value: SqlValue) -> Result<()> {
        let scanned = match value {
            SqlValue::Null => Self::null(),
            SqlValue::Int16(v) => Self::new(v),
            SqlValue::Int32(v) => {
                let narrowed = i16::try_from(v)
                    .map_err(|_| Error::out_of_range("NullInt16", i64::from(v)))?;
                Self::new(narrowed)
            }
            SqlValue::Int64(v) => {
                let narrowed =
                    i16::try_from(v).map_err(|_| Error::out_of_range("NullInt16", v))?;
                Self::new(narrowed)
            }
            other => return Err(Error::incompatible("NullInt16", &other)),
        };
        *self = scanned;
        Ok(())
    }
}

impl ToSql for NullInt16 {
    fn to_sql(&self) -> Result<SqlValue> {
        if self.valid {
            Ok(SqlValue::Int16(self.value))
        } else {
            Ok(SqlValue::Null)
        }
    }
}
