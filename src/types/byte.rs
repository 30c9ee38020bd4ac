//! Nullable single-byte wrapper.

use crate::convert::{FromSql, ToSql};
use crate::error::{Error, Result};

use super::value::SqlValue;

/// Nullable single byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NullByte {
    /// The wrapped byte.
    pub value: u8,
    /// True if `value` reflects a non-NULL database value.
    pub valid: bool,
}

impl NullByte {
    /// Create a valid wrapper holding `value`.
    pub fn new(value: u8) -> Self {
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
    pub fn get(&self) -> Option<u8> {
        if self.valid {
            Some(self.value)
        } else {
            None
        }
    }
}

impl FromSql for NullByte {
    fn scan(&mut self, value: SqlValue) -> Result<()> {
        let scanned = match value {
            SqlValue::Null => Self::null(),
            SqlValue::Int16(v) => Self::new(byte_in_range(i64::from(v))?),
            SqlValue::Int32(v) => Self::new(byte_in_range(i64::from(v))?),
            SqlValue::Int64(v) => Self::new(byte_in_range(v)?),
            // A byte sequence is byte-compatible only at length one.
            SqlValue::Bytes(b) if b.len() == 1 => Self::new(b[0]),
            other => return Err(Error::incompatible("NullByte", &other)),
        };
        *self = scanned;
        Ok(())
    }
}

impl ToSql for NullByte {
    fn to_sql(&self) -> Result<SqlValue> {
        if self.valid {
            // The boundary has no single-byte kind; bytes travel as
            // 64-bit integers on the write path.
            Ok(SqlValue::Int64(i64::from(self.value)))
        } else {
            Ok(SqlValue::Null)
        }
    }
}

fn byte_in_range(value: i64) -> Result<u8> {
    u8::try_from(value).map_err(|_| Error::out_of_range("NullByte", value))
}
