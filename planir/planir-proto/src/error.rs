//! Decode-time errors.
//!
//! Encoding a well-formed in-memory tree cannot fail; every error here is
//! raised while turning wire bytes back into the logical model. Corrupt or
//! incompatible input is always surfaced, never coerced into a default.

use planir_core::ScalarType;

/// Error returned by the decode entry points.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The byte stream itself is malformed (truncated record, bad varint).
    #[error("malformed wire bytes: {0}")]
    Wire(#[source] prost::DecodeError),

    /// A discriminant outside the known set for this schema version.
    /// Readers fail closed here instead of defaulting.
    #[error("unknown variant value {value} for {entity}")]
    UnknownVariant { entity: &'static str, value: i32 },

    /// Zero populated union arms, or a payload present where it must not be.
    #[error("malformed {entity}: {detail}")]
    MalformedVariant { entity: &'static str, detail: String },

    /// A structurally required child record is absent.
    #[error("{entity} is missing required field '{field}'")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    /// The decoded pieces disagree with each other, e.g. a primitive-typed
    /// field carrying child fields.
    #[error("structural mismatch in {entity}: {detail}")]
    StructuralMismatch { entity: &'static str, detail: String },

    /// A list literal element whose implied type disagrees with the list's
    /// declared element type.
    #[error("list element type mismatch: declared {declared:?}, element implies {actual:?}")]
    ElementTypeMismatch {
        declared: ScalarType,
        actual: ScalarType,
    },

    /// A narrow-width value carried in a wider wire container is out of
    /// range for its logical width.
    #[error("value {value} out of range for {entity}")]
    IntegerOverflow { entity: &'static str, value: i64 },

    /// A decimal whose byte sequence or precision/scale pair cannot
    /// represent the value.
    #[error("decimal overflow (precision {precision}, scale {scale}): {detail}")]
    DecimalOverflow {
        precision: i64,
        scale: i64,
        detail: String,
    },

    /// The input nests deeper than the configured maximum.
    #[error("nesting depth exceeds configured maximum of {max_depth}")]
    DepthExceeded { max_depth: usize },
}
