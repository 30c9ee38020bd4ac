//! End-to-end tests for the scan/to_sql boundary.
//!
//! Run with: cargo test --test test_scan_value

use chrono::NaiveDateTime;
use sql_nullable_rs::{
    Error, FromSql, NullByte, NullInt16, NullInt32, NullInt64, NullString, NullTime, SqlValue,
    ToSql,
};

fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

/// Scan a simulated driver row into typed wrappers, the way a data
/// access layer would after fetching one row.
#[test]
fn test_scan_row_into_wrappers() {
    // id, name, flags, created_at, note
    let row = vec![
        SqlValue::Int64(12345),
        SqlValue::Text("miraculous".to_string()),
        SqlValue::Int16(128),
        SqlValue::DateTime(ts("2012-12-12 12:12:12")),
        SqlValue::Null,
    ];
    let mut row = row.into_iter();

    let mut id = NullInt64::null();
    let mut name = NullString::null();
    let mut flags = NullInt16::null();
    let mut created_at = NullTime::null();
    let mut note = NullString::null();

    id.scan(row.next().unwrap()).unwrap();
    name.scan(row.next().unwrap()).unwrap();
    flags.scan(row.next().unwrap()).unwrap();
    created_at.scan(row.next().unwrap()).unwrap();
    note.scan(row.next().unwrap()).unwrap();

    assert_eq!(id.get(), Some(12345));
    assert_eq!(id.hex_string(), "3039");

    assert!(name.is_present());
    assert_eq!(name.get(), Some("miraculous"));

    assert_eq!(flags.get(), Some(128));
    assert_eq!(flags.hex_string(), "80");

    assert_eq!(created_at.get(), Some(ts("2012-12-12 12:12:12")));

    assert!(note.is_null());
    assert!(note.is_empty());
    assert!(!note.is_present());
}

/// NULL must survive a write/read round trip and stay observably
/// distinct from every valid value.
#[test]
fn test_null_round_trip() {
    let null_name = NullString::null();
    let empty_name = NullString::new("");

    let out_null = null_name.to_sql().unwrap();
    let out_empty = empty_name.to_sql().unwrap();

    assert_eq!(out_null, SqlValue::Null);
    assert_eq!(out_empty, SqlValue::Text(String::new()));
    assert_ne!(out_null, out_empty);

    let back = NullString::from_sql(out_null).unwrap();
    assert!(back.is_null());
    let back = NullString::from_sql(out_empty).unwrap();
    assert!(!back.is_null());
    assert!(back.is_empty());
}

/// Valid wrappers round-trip their value and validity through the
/// boundary unchanged.
#[test]
fn test_value_round_trip() {
    let id = NullInt64::new(-7);
    let back = NullInt64::from_sql(id.to_sql().unwrap()).unwrap();
    assert_eq!(back, id);

    let flags = NullInt16::new(i16::MIN);
    let back = NullInt16::from_sql(flags.to_sql().unwrap()).unwrap();
    assert_eq!(back, flags);

    let created = NullTime::new(ts("1999-06-15 12:30:45"));
    let back = NullTime::from_sql(created.to_sql().unwrap()).unwrap();
    assert_eq!(back, created);

    // Bytes travel outbound as integers and scan back in range.
    let marker = NullByte::new(0x7f);
    assert_eq!(marker.to_sql().unwrap(), SqlValue::Int64(127));
    let back = NullByte::from_sql(marker.to_sql().unwrap()).unwrap();
    assert_eq!(back, marker);
}

/// Width narrowing at the boundary: wider driver integers scan into
/// narrower wrappers only when the value fits.
#[test]
fn test_scan_width_narrowing() {
    let mut count = NullInt32::null();
    count.scan(SqlValue::Int64(1)).unwrap();
    assert_eq!(count.get(), Some(1));

    let err = count.scan(SqlValue::Int64(4294967296)).unwrap_err();
    assert!(
        matches!(err, Error::OutOfRange { .. }),
        "expected out-of-range, got: {err}"
    );
    // The failed scan must not have clobbered the previous value.
    assert_eq!(count.get(), Some(1));

    let mut small = NullInt16::null();
    assert!(small.scan(SqlValue::Int64(65536)).is_err());
    assert!(small.scan(SqlValue::Int64(-65536)).is_err());
    small.scan(SqlValue::Int64(1)).unwrap();
    assert_eq!(small.get(), Some(1));
}

/// Incompatible kinds are rejected with a message naming both sides.
#[test]
fn test_scan_incompatible_kind_message() {
    let mut id = NullInt64::null();
    let err = id.scan(SqlValue::Text("12".to_string())).unwrap_err();
    assert_eq!(err.to_string(), "cannot scan TEXT into NullInt64");

    let mut count = NullInt32::null();
    let err = count.scan(SqlValue::Int64(4294967296)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "value 4294967296 out of range for NullInt32"
    );
}

/// The hex and digest renderings used for fingerprinting string columns.
#[test]
fn test_hex_and_digest_rendering() {
    let secret = NullString::new("hello");
    assert_eq!(secret.hex_string(), "68656c6c6f");
    assert_eq!(
        secret.digest_string(),
        "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
    );

    // Invalid wrappers render as empty input regardless of leftovers.
    let stale = NullString {
        value: "leftover".to_string(),
        valid: false,
    };
    assert_eq!(stale.hex_string(), "");
    assert_eq!(
        stale.digest_string(),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

/// Option interop on the driver value side.
#[test]
fn test_option_into_sql_value() {
    let present: Option<i64> = Some(99);
    let absent: Option<i64> = None;

    let mut val = NullInt64::null();
    val.scan(SqlValue::from(present)).unwrap();
    assert_eq!(val.get(), Some(99));

    val.scan(SqlValue::from(absent)).unwrap();
    assert!(val.is_null());
    assert_eq!(val.get(), None);
}
