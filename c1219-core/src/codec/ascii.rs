//! Fixed-width ASCII fields

use crate::error::{C1219Error, C1219Result};

/// Decode a fixed-width character field, dropping trailing NUL and space padding
pub fn decode_fixed(bytes: &[u8]) -> String {
    let end = bytes
        .iter()
        .rposition(|&b| b != 0x00 && b != b' ')
        .map_or(0, |i| i + 1);
    // Latin-1 mapping keeps every byte value representable
    bytes[..end].iter().map(|&b| b as char).collect()
}

/// Encode `value` into exactly `width` bytes, truncating and NUL padding
pub fn encode_fixed(value: &str, width: usize) -> C1219Result<Vec<u8>> {
    if !value.is_ascii() {
        return Err(C1219Error::InvalidData(format!(
            "non-ASCII characters in fixed field: {:?}",
            value
        )));
    }
    let mut out = vec![0u8; width];
    let len = value.len().min(width);
    out[..len].copy_from_slice(&value.as_bytes()[..len]);
    Ok(out)
}
