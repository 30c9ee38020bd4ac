//! Nullable string wrapper.

use crate::convert::{FromSql, ToSql};
use crate::error::{Error, Result};
use crate::hex;

use super::value::SqlValue;

/// Nullable UTF-8 string.
///
/// Distinguishes three states a text column can be in: NULL, empty but
/// present, and non-empty. `is_null`, `is_present`, and `is_empty` each
/// answer one of those questions directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NullString {
    /// The wrapped string.
    pub value: String,
    /// True if `value` reflects a non-NULL database value.
    pub valid: bool,
}

impl NullString {
    /// Create a valid wrapper holding `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            valid: true,
        }
    }

    /// Create a NULL wrapper.
    pub fn null() -> Self {
        Self::default()
    }

    /// Check if the underlying value is NULL.
    pub fn is_null(&self) -> bool {
        !self.valid
    }

    /// Check if the value is a non-empty string.
    pub fn is_present(&self) -> bool {
        self.valid && !self.value.is_empty()
    }

    /// Check if the value is either NULL or an empty string.
    ///
    /// Use `is_null` to test specifically for NULL.
    pub fn is_empty(&self) -> bool {
        !self.valid || self.value.is_empty()
    }

    /// Get the value, or `None` when NULL.
    pub fn get(&self) -> Option<&str> {
        if self.valid {
            Some(&self.value)
        } else {
            None
        }
    }

    /// Lowercase hex encoding of the value's UTF-8 bytes.
    ///
    /// A NULL wrapper encodes the empty byte sequence, never the
    /// residual `value` field. It is possible for `valid` to be false
    /// while `value` holds leftover text; that text must not leak.
    pub fn hex_string(&self) -> String {
        let src = if self.valid { self.value.as_str() } else { "" };

        hex::bytes_to_hex(src.as_bytes())
    }

    /// Lowercase hex encoding of the SHA-256 digest of the value's
    /// UTF-8 bytes; always exactly 64 characters.
    ///
    /// A NULL wrapper digests the empty byte sequence, under the same
    /// rule as `hex_string`: leftover text behind an invalid wrapper
    /// must not leak through the digest.
    pub fn digest_string(&self) -> String {
        let src = if self.valid { self.value.as_str() } else { "" };

        hex::sha256_hex(src.as_bytes())
    }
}

impl FromSql for NullString {
    fn scan(&mut self, value: SqlValue) -> Result<()> {
        let scanned = match value {
            SqlValue::Null => Self::null(),
            SqlValue::Text(s) => Self::new(s),
            SqlValue::Bytes(b) => match String::from_utf8(b) {
                Ok(text) => Self::new(text),
                // Byte sequences only coerce when they are valid UTF-8.
                Err(_) => {
                    return Err(Error::IncompatibleType {
                        target: "NullString",
                        found: "BYTES",
                    })
                }
            },
            other => return Err(Error::incompatible("NullString", &other)),
        };
        *self = scanned;
        Ok(())
    }
}

impl ToSql for NullString {
    fn to_sql(&self) -> Result<SqlValue> {
        if self.valid {
            Ok(SqlValue::Text(self.value.clone()))
        } else {
            Ok(SqlValue::Null)
        }
    }
}
