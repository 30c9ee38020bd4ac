//! Nullable wrapper types and the driver boundary value.

mod byte;
mod int;
mod string;
mod time;
mod value;

pub use byte::NullByte;
pub use int::{NullInt16, NullInt32, NullInt64};
pub use string::NullString;
pub use time::NullTime;
pub use value::SqlValue;
