//! Decimal128 wire encoding: minimal-length big-endian two's complement
//! for the unscaled value, validated against precision and scale.

use prost::Message;

use planir_core::ScalarValue;
use planir_proto::protocol::{self, scalar_value::Value};
use planir_proto::{decode_scalar_value, encode_scalar_value};

fn decimal(value: i128, precision: usize, scale: usize) -> ScalarValue {
    ScalarValue::Decimal128 {
        value,
        precision,
        scale,
    }
}

fn wire_bytes_of(v: &ScalarValue) -> Vec<u8> {
    let encoded = encode_scalar_value(v);
    let wire = protocol::ScalarValue::decode(encoded.as_slice()).unwrap();
    let Some(Value::Decimal128Value(d)) = wire.value else {
        panic!("expected a Decimal128 value");
    };
    d.value
}

fn assert_roundtrip(v: ScalarValue) {
    let decoded = decode_scalar_value(&encode_scalar_value(&v)).unwrap();
    assert_eq!(decoded, v);
}

#[test]
fn boundary_magnitudes_roundtrip() {
    let max_38_digits: i128 = 10_i128.pow(38) - 1;
    for v in [
        decimal(0, 1, 0),
        decimal(1, 1, 0),
        decimal(-1, 1, 0),
        decimal(max_38_digits, 38, 0),
        decimal(-max_38_digits, 38, 0),
        decimal(max_38_digits, 38, 38),
        decimal(99_999, 5, 2),
        decimal(-99_999, 5, 2),
    ] {
        assert_roundtrip(v);
    }
}

#[test]
fn unscaled_value_uses_minimal_byte_length() {
    // one byte while the value fits i8, two as soon as the sign bit would flip
    for (value, len) in [
        (0_i128, 1),
        (1, 1),
        (-1, 1),
        (127, 1),
        (128, 2),
        (-128, 1),
        (-129, 2),
        (32_767, 2),
        (32_768, 3),
    ] {
        let bytes = wire_bytes_of(&decimal(value, 38, 0));
        assert_eq!(bytes.len(), len, "value {value} encoded as {bytes:?}");
    }
}

#[test]
fn sign_survives_the_minimal_encoding() {
    for value in [-1_i128, -128, -129, -32_768, -1_000_000_007] {
        let decoded = decode_scalar_value(&encode_scalar_value(&decimal(value, 38, 0))).unwrap();
        let ScalarValue::Decimal128 { value: v, .. } = decoded else {
            panic!("expected Decimal128");
        };
        assert_eq!(v, value);
    }
}

#[test]
fn negative_leading_byte_is_preserved_not_stripped() {
    // -256 = 0xFF 0x00: the 0xFF is the sign byte, not padding
    let bytes = wire_bytes_of(&decimal(-256, 38, 0));
    assert_eq!(bytes, [0xFF, 0x00]);
    assert_roundtrip(decimal(-256, 38, 0));
}

#[test]
fn precision_and_scale_travel_with_the_value() {
    let decoded = decode_scalar_value(&encode_scalar_value(&decimal(12_345, 7, 3))).unwrap();
    let ScalarValue::Decimal128 {
        value,
        precision,
        scale,
    } = decoded
    else {
        panic!("expected Decimal128");
    };
    assert_eq!(value, 12_345);
    assert_eq!(precision, 7);
    assert_eq!(scale, 3);
}

#[test]
fn full_width_negative_boundary_roundtrips() {
    // the most negative value representable in 38 digits
    let v = -(10_i128.pow(38) - 1);
    let bytes = wire_bytes_of(&decimal(v, 38, 10));
    assert_eq!(bytes.len(), 16);
    assert_roundtrip(decimal(v, 38, 10));
}
