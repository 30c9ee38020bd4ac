//! Nullable date/time wrapper.

use chrono::NaiveDateTime;

use crate::convert::{FromSql, ToSql};
use crate::error::{Error, Result};

use super::value::SqlValue;

/// Nullable date/time value without timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NullTime {
    /// The wrapped date/time.
    pub value: NaiveDateTime,
    /// True if `value` reflects a non-NULL database value.
    pub valid: bool,
}

impl NullTime {
    /// Create a valid wrapper holding `value`.
    pub fn new(value: NaiveDateTime) -> Self {
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
    pub fn get(&self) -> Option<NaiveDateTime> {
        if self.valid {
            Some(self.value)
        } else {
            None
        }
    }
}

impl FromSql for NullTime {
    fn scan(&mut self, value: SqlValue) -> Result<()> {
        let scanned = match value {
            SqlValue::Null => Self::null(),
            SqlValue::DateTime(dt) => Self::new(dt),
            other => return Err(Error::incompatible("NullTime", &other)),
        };
        *self = scanned;
        Ok(())
    }
}

impl ToSql for NullTime {
    fn to_sql(&self) -> Result<SqlValue> {
        if self.valid {
            Ok(SqlValue::DateTime(self.value))
        } else {
            Ok(SqlValue::Null)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("2012-12-12 12:12:12", "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_new_time() {
        let val = NullTime::new(sample());
        assert!(val.valid);
        assert_eq!(val.value, sample());
        assert_eq!(val.get(), Some(sample()));
    }

    #[test]
    fn test_time_null() {
        assert!(NullTime::null().is_null());
        assert!(NullTime::default().is_null());
        assert_eq!(NullTime::null().get(), None);
        assert!(!NullTime::new(sample()).is_null());
    }

    #[test]
    fn test_time_scan() {
        let mut val = NullTime::null();
        val.scan(SqlValue::DateTime(sample())).unwrap();
        assert_eq!(val.get(), Some(sample()));

        val.scan(SqlValue::Null).unwrap();
        assert!(val.is_null());
    }

    #[test]
    fn test_time_scan_incompatible() {
        let mut val = NullTime::new(sample());

        // Textual timestamps are not coerced; only native date/time
        // values cross the boundary into this wrapper.
        let err = val
            .scan(SqlValue::Text("2012-12-12 12:12:12".to_string()))
            .unwrap_err();
        assert!(matches!(err, Error::IncompatibleType { target: "NullTime", found: "TEXT" }));
        assert_eq!(val.get(), Some(sample()));

        assert!(val.scan(SqlValue::Int64(0)).is_err());
    }

    #[test]
    fn test_time_to_sql() {
        assert_eq!(
            NullTime::new(sample()).to_sql().unwrap(),
            SqlValue::DateTime(sample())
        );
        assert_eq!(NullTime::null().to_sql().unwrap(), SqlValue::Null);
    }
}
