//! Minimal-length big-endian two's-complement encoding for decimal
//! unscaled values.

use crate::error::DecodeError;

const MAX_PRECISION: i64 = 38;

/// Encode an unscaled value as the shortest big-endian two's-complement
/// byte sequence that preserves its sign.
pub(crate) fn to_minimal_be_bytes(value: i128) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let mut start = 0;
    while start < bytes.len() - 1 {
        let redundant_zero = bytes[start] == 0x00 && bytes[start + 1] & 0x80 == 0;
        let redundant_ones = bytes[start] == 0xFF && bytes[start + 1] & 0x80 != 0;
        if redundant_zero || redundant_ones {
            start += 1;
        } else {
            break;
        }
    }
    bytes[start..].to_vec()
}

/// Decode a big-endian two's-complement byte sequence, rejecting
/// sequences that are empty, longer than 128 bits, or not minimal.
pub(crate) fn from_minimal_be_bytes(
    bytes: &[u8],
    precision: i64,
    scale: i64,
) -> Result<i128, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::MalformedVariant {
            entity: "Decimal128",
            detail: "empty unscaled value".to_string(),
        });
    }
    if bytes.len() > 16 {
        return Err(DecodeError::DecimalOverflow {
            precision,
            scale,
            detail: format!("{}-byte value exceeds 128 bits", bytes.len()),
        });
    }
    if bytes.len() > 1 {
        let redundant_zero = bytes[0] == 0x00 && bytes[1] & 0x80 == 0;
        let redundant_ones = bytes[0] == 0xFF && bytes[1] & 0x80 != 0;
        if redundant_zero || redundant_ones {
            return Err(DecodeError::MalformedVariant {
                entity: "Decimal128",
                detail: "non-minimal unscaled value encoding".to_string(),
            });
        }
    }

    let fill = if bytes[0] & 0x80 != 0 { 0xFF } else { 0x00 };
    let mut buf = [fill; 16];
    buf[16 - bytes.len()..].copy_from_slice(bytes);
    let value = i128::from_be_bytes(buf);

    check_precision(value, precision, scale)?;
    Ok(value)
}

/// Verify that `precision`/`scale` can represent `value`.
pub(crate) fn check_precision(value: i128, precision: i64, scale: i64) -> Result<(), DecodeError> {
    if precision < 1 || precision > MAX_PRECISION {
        return Err(DecodeError::DecimalOverflow {
            precision,
            scale,
            detail: format!("precision must be within 1..={MAX_PRECISION}"),
        });
    }
    if scale < 0 || scale > precision {
        return Err(DecodeError::DecimalOverflow {
            precision,
            scale,
            detail: "scale must be within 0..=precision".to_string(),
        });
    }
    let bound = 10_i128.pow(precision as u32);
    if value <= -bound || value >= bound {
        return Err(DecodeError::DecimalOverflow {
            precision,
            scale,
            detail: format!("unscaled value {value} has more than {precision} digits"),
        });
    }
    Ok(())
}
