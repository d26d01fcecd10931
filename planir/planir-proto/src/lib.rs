//! Wire codec for the `planir` logical model.
//!
//! Encodes [`planir_core`] trees into length-prefixed tagged records and
//! decodes them back, byte-for-byte faithfully, across process and
//! language boundaries. The field tags and enumeration values in
//! [`protocol`] are permanently reserved; see that module for the
//! compatibility rules.
//!
//! Decoding validates everything encoding takes for granted: unknown
//! discriminants, missing required children, narrow-integer ranges,
//! decimal precision, list element homogeneity, and nesting depth all
//! surface as a typed [`DecodeError`] instead of a coerced default.

mod codec;
mod decimal;
mod depth;
mod emit;
mod error;
mod from_wire;
pub mod protocol;

pub use codec::{
    DEFAULT_MAX_DEPTH, DecodeOptions, decode_data_type, decode_data_type_with_options,
    decode_df_schema, decode_df_schema_with_options, decode_expr, decode_expr_with_options,
    decode_field, decode_field_with_options, decode_scalar_value,
    decode_scalar_value_with_options, decode_schema, decode_schema_with_options,
    decode_window_frame, decode_window_frame_with_options, encode_data_type, encode_df_schema,
    encode_expr, encode_field, encode_scalar_value, encode_schema, encode_window_frame,
};
pub use error::DecodeError;
