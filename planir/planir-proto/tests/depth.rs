//! Nesting depth limits: deeply nested trees must encode without
//! exhausting the stack, and hostile, deeply nested input must fail
//! with `DepthExceeded` instead of crashing.

use prost::Message;

use planir_core::{DataType, Expr, Field, PrimitiveScalarType, ScalarType, ScalarValue, col};
use planir_proto::protocol::{self, logical_expr_node::ExprType};
use planir_proto::{
    DEFAULT_MAX_DEPTH, DecodeError, DecodeOptions, decode_data_type_with_options, decode_expr,
    decode_expr_with_options, decode_field, decode_scalar_value, decode_scalar_value_with_options,
    encode_data_type, encode_expr, encode_field, encode_scalar_value,
};

fn not_chain(levels: usize) -> Expr {
    let mut expr = col("x");
    for _ in 0..levels {
        expr = Expr::Not(Box::new(expr));
    }
    expr
}

fn push_varint(out: &mut Vec<u8>, mut v: u64) {
    loop {
        let byte = (v & 0x7F) as u8;
        v >>= 7;
        if v == 0 {
            out.push(byte);
            break;
        }
        out.push(byte | 0x80);
    }
}

/// Length-delimited field `tag` wrapping `payload`. Tags here are < 16 so a
/// single key byte suffices.
fn wrap_field(tag: u32, payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(payload.len() + 6);
    out.push(((tag << 3) | 2) as u8);
    push_varint(&mut out, payload.len() as u64);
    out.extend_from_slice(payload);
    out
}

/// Wire bytes for a column expression wrapped in `levels` NOT nodes, built
/// iteratively from the inside out so the test never recurses.
fn deep_not_bytes(levels: usize) -> Vec<u8> {
    let mut node = protocol::LogicalExprNode {
        expr_type: Some(ExprType::Column(protocol::Column {
            name: "x".to_string(),
            relation: None,
        })),
    }
    .encode_to_vec();
    for _ in 0..levels {
        // Not { expr = node } inside LogicalExprNode { not_expr = ... }
        let not_msg = wrap_field(1, &node);
        node = wrap_field(8, &not_msg);
    }
    node
}

#[test]
fn ten_thousand_deep_expression_fails_with_depth_exceeded() {
    let bytes = deep_not_bytes(10_000);
    let err = decode_expr(&bytes).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::DepthExceeded {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    ));
}

#[test]
fn ten_thousand_deep_expression_encodes() {
    // Must match the hand-framed bytes, and must not blow the stack.
    let bytes = encode_expr(&not_chain(10_000));
    assert_eq!(bytes, deep_not_bytes(10_000));
}

#[test]
fn left_nested_binary_chain_encodes_at_depth_ten_thousand() {
    let mut expr = col("a");
    for _ in 0..10_000 {
        expr = Expr::BinaryExpr {
            left: Box::new(expr),
            op: "AND".to_string(),
            right: Box::new(Expr::Literal(ScalarValue::Boolean(true))),
        };
    }
    let bytes = encode_expr(&expr);
    let err = decode_expr(&bytes).unwrap_err();
    assert!(matches!(err, DecodeError::DepthExceeded { .. }));
}

#[test]
fn deeply_nested_field_encodes_and_decode_fails_with_depth_exceeded() {
    let mut field = Field::new("item", DataType::Int32, true);
    for _ in 0..2_000 {
        field = Field::new("item", DataType::List(Box::new(field)), true);
    }
    let bytes = encode_field(&field);
    let err = decode_field(&bytes).unwrap_err();
    assert!(matches!(err, DecodeError::DepthExceeded { .. }));
}

#[test]
fn expression_within_default_depth_roundtrips() {
    let expr = not_chain(40);
    let decoded = decode_expr(&encode_expr(&expr)).unwrap();
    assert_eq!(decoded, expr);
}

#[test]
fn configured_depth_limit_rejects_deeper_input() {
    let bytes = encode_expr(&not_chain(20));
    let opts = DecodeOptions { max_depth: 10 };
    let err = decode_expr_with_options(&bytes, &opts).unwrap_err();
    assert!(matches!(err, DecodeError::DepthExceeded { max_depth: 10 }));
}

#[test]
fn raised_depth_limit_admits_deeper_input() {
    let mut t = ScalarType::Primitive(PrimitiveScalarType::Int32);
    for _ in 0..80 {
        t = ScalarType::List(Box::new(t));
    }
    let value = ScalarValue::NullList(t);
    let bytes = encode_scalar_value(&value);

    let err = decode_scalar_value(&bytes).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::DepthExceeded {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    ));

    let opts = DecodeOptions { max_depth: 90 };
    let decoded = decode_scalar_value_with_options(&bytes, &opts).unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn wire_nesting_cap_applies_even_with_a_generous_limit() {
    // the wire layer stops at 100 nested messages no matter the option
    let bytes = deep_not_bytes(500);
    let opts = DecodeOptions { max_depth: 1_000 };
    let err = decode_expr_with_options(&bytes, &opts).unwrap_err();
    assert!(matches!(err, DecodeError::DepthExceeded { max_depth: 1_000 }));
}

#[test]
fn deep_data_type_fails_with_depth_exceeded() {
    let mut dt = DataType::Int32;
    for _ in 0..30 {
        dt = DataType::List(Box::new(Field::new("item", dt, true)));
    }
    let bytes = encode_data_type(&dt);
    let opts = DecodeOptions { max_depth: 8 };
    let err = decode_data_type_with_options(&bytes, &opts).unwrap_err();
    assert!(matches!(err, DecodeError::DepthExceeded { max_depth: 8 }));
}

#[test]
fn deep_scalar_type_fails_with_depth_exceeded() {
    let mut t = ScalarType::Primitive(PrimitiveScalarType::Int32);
    for _ in 0..30 {
        t = ScalarType::List(Box::new(t));
    }
    let bytes = encode_scalar_value(&ScalarValue::NullList(t));
    let opts = DecodeOptions { max_depth: 8 };
    let err = decode_scalar_value_with_options(&bytes, &opts).unwrap_err();
    assert!(matches!(err, DecodeError::DepthExceeded { max_depth: 8 }));
}

#[test]
fn depth_failure_is_deterministic() {
    let bytes = deep_not_bytes(10_000);
    for _ in 0..3 {
        let err = decode_expr(&bytes).unwrap_err();
        assert!(matches!(err, DecodeError::DepthExceeded { .. }));
    }
}
