//! Hexadecimal and digest rendering helpers.

use sha2::Sha256;

/// Render a signed integer as lowercase base-16 text.
///
/// Accepts any of the supported integer widths and widens to 64 bits
/// before converting. The rendering is the textual form of the
/// mathematical value: no padding, no `0x` prefix, and a leading `-`
/// for negative values rather than a two's-complement bit pattern.
pub(crate) fn int_to_hex(value: impl Into<i64>) -> String {
    let value: i64 = value.into();

    if value < 0 {
        // unsigned_abs keeps i64::MIN representable.
        format!("-{:x}", value.unsigned_abs())
    } else {
        format!("{:x}", value)
    }
}

/// Convert bytes to lowercase hex string.
pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Compute the SHA-256 digest of `data` and return it hex encoded.
///
/// Always 64 lowercase hex characters.
pub(crate) fn sha256_hex(data: &[u8]) -> String {
    use sha2::Digest;
    let mut hasher = Sha256::new();
    hasher.update(data);
    let digest: [u8; 32] = hasher.finalize().into();
    bytes_to_hex(&digest)
}
