//! Public encode/decode entry points.
//!
//! Every function here is a pure transformation of its input; the codec
//! keeps no state between calls and is safe to use from any number of
//! threads at once.

use planir_core::{DataType, DfSchema, Expr, Field, ScalarValue, Schema, WindowFrame};
use prost::Message;

use crate::depth;
use crate::error::DecodeError;
use crate::from_wire;
use crate::protocol;
use crate::emit;

/// Default maximum nesting depth accepted by the decode entry points.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Knobs for the decode entry points.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Maximum nesting depth of the decoded tree. Deeper input fails with
    /// [`DecodeError::DepthExceeded`]. The wire layer additionally caps
    /// message nesting at 100 regardless of this setting.
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

fn wire_error(e: prost::DecodeError, opts: &DecodeOptions) -> DecodeError {
    // prost reports its own nesting cap as a generic decode error; fold it
    // into the depth taxonomy so deep input fails the same way everywhere.
    if e.to_string().contains("recursion limit") {
        DecodeError::DepthExceeded {
            max_depth: opts.max_depth,
        }
    } else {
        DecodeError::Wire(e)
    }
}

pub fn encode_data_type(data_type: &DataType) -> Vec<u8> {
    emit::data_type_bytes(data_type)
}

pub fn decode_data_type(buf: &[u8]) -> Result<DataType, DecodeError> {
    decode_data_type_with_options(buf, &DecodeOptions::default())
}

pub fn decode_data_type_with_options(
    buf: &[u8],
    opts: &DecodeOptions,
) -> Result<DataType, DecodeError> {
    let wire = protocol::ArrowType::decode(buf).map_err(|e| wire_error(e, opts))?;
    depth::check_type(&wire, opts.max_depth)?;
    from_wire::data_type_from_wire(wire)
}

pub fn encode_field(field: &Field) -> Vec<u8> {
    emit::field_bytes(field)
}

pub fn decode_field(buf: &[u8]) -> Result<Field, DecodeError> {
    decode_field_with_options(buf, &DecodeOptions::default())
}

pub fn decode_field_with_options(buf: &[u8], opts: &DecodeOptions) -> Result<Field, DecodeError> {
    let wire = protocol::Field::decode(buf).map_err(|e| wire_error(e, opts))?;
    depth::check_field(&wire, opts.max_depth)?;
    from_wire::field_from_wire(wire)
}

pub fn encode_schema(schema: &Schema) -> Vec<u8> {
    emit::schema_bytes(schema)
}

pub fn decode_schema(buf: &[u8]) -> Result<Schema, DecodeError> {
    decode_schema_with_options(buf, &DecodeOptions::default())
}

pub fn decode_schema_with_options(buf: &[u8], opts: &DecodeOptions) -> Result<Schema, DecodeError> {
    let wire = protocol::Schema::decode(buf).map_err(|e| wire_error(e, opts))?;
    depth::check_schema(&wire, opts.max_depth)?;
    from_wire::schema_from_wire(wire)
}

pub fn encode_df_schema(schema: &DfSchema) -> Vec<u8> {
    emit::df_schema_bytes(schema)
}

pub fn decode_df_schema(buf: &[u8]) -> Result<DfSchema, DecodeError> {
    decode_df_schema_with_options(buf, &DecodeOptions::default())
}

pub fn decode_df_schema_with_options(
    buf: &[u8],
    opts: &DecodeOptions,
) -> Result<DfSchema, DecodeError> {
    let wire = protocol::DfSchema::decode(buf).map_err(|e| wire_error(e, opts))?;
    depth::check_df_schema(&wire, opts.max_depth)?;
    from_wire::df_schema_from_wire(wire)
}

pub fn encode_scalar_value(value: &ScalarValue) -> Vec<u8> {
    emit::scalar_bytes(value)
}

pub fn decode_scalar_value(buf: &[u8]) -> Result<ScalarValue, DecodeError> {
    decode_scalar_value_with_options(buf, &DecodeOptions::default())
}

pub fn decode_scalar_value_with_options(
    buf: &[u8],
    opts: &DecodeOptions,
) -> Result<ScalarValue, DecodeError> {
    let wire = protocol::ScalarValue::decode(buf).map_err(|e| wire_error(e, opts))?;
    depth::check_scalar(&wire, opts.max_depth)?;
    from_wire::scalar_from_wire(wire)
}

pub fn encode_expr(expr: &Expr) -> Vec<u8> {
    emit::expr_bytes(expr)
}

pub fn decode_expr(buf: &[u8]) -> Result<Expr, DecodeError> {
    decode_expr_with_options(buf, &DecodeOptions::default())
}

pub fn decode_expr_with_options(buf: &[u8], opts: &DecodeOptions) -> Result<Expr, DecodeError> {
    let wire = protocol::LogicalExprNode::decode(buf).map_err(|e| wire_error(e, opts))?;
    depth::check_expr(&wire, opts.max_depth)?;
    from_wire::expr_from_wire(wire)
}

pub fn encode_window_frame(frame: &WindowFrame) -> Vec<u8> {
    emit::window_frame_to_wire(frame).encode_to_vec()
}

pub fn decode_window_frame(buf: &[u8]) -> Result<WindowFrame, DecodeError> {
    decode_window_frame_with_options(buf, &DecodeOptions::default())
}

pub fn decode_window_frame_with_options(
    buf: &[u8],
    opts: &DecodeOptions,
) -> Result<WindowFrame, DecodeError> {
    // Frames do not nest, so no depth pass is needed here.
    let wire = protocol::WindowFrame::decode(buf).map_err(|e| wire_error(e, opts))?;
    from_wire::window_frame_from_wire(wire)
}
