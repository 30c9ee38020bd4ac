//! Nullable SQL value wrappers
//!
//! Wrapper types that pair a native value with a validity flag,
//! mirroring how relational databases distinguish NULL from a
//! present-but-default value. Each wrapper adds semantic predicates
//! (`is_null`, and `is_present`/`is_empty` for strings), hexadecimal
//! rendering for integers and strings, and the two conversions that
//! connect it to a database access layer: `scan` (driver value in) and
//! `to_sql` (driver value out).
//!
//! # Example
//!
//! ```
//! use sql_nullable_rs::{FromSql, NullInt32, NullString, SqlValue, ToSql};
//!
//! // Scan driver-supplied column values into wrappers.
//! let mut quantity = NullInt32::null();
//! quantity.scan(SqlValue::Int64(42))?;
//! assert_eq!(quantity.get(), Some(42));
//! assert_eq!(quantity.hex_string(), "2a");
//!
//! let name = NullString::from_sql(SqlValue::Null)?;
//! assert!(name.is_null());
//! assert!(name.is_empty());
//!
//! // Write back: NULL stays observably NULL.
//! assert_eq!(name.to_sql()?, SqlValue::Null);
//! assert_eq!(quantity.to_sql()?, SqlValue::Int32(42));
//! # Ok::<(), sql_nullable_rs::Error>(())
//! ```

pub mod convert;
pub mod error;
pub mod types;

mod hex;

// Re-export main types
pub use convert::{FromSql, ToSql};
pub use error::{Error, Result};
pub use types::{NullByte, NullInt16, NullInt32, NullInt64, NullString, NullTime, SqlValue};
