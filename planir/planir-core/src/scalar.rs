//! Scalar literal values and their declared types.

use std::fmt;

/// Type tag for a scalar literal or typed null.
///
/// The wire codec assigns each variant a permanently reserved numeric
/// value; this enum only names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveScalarType {
    Bool,
    UInt8,
    Int8,
    UInt16,
    Int16,
    UInt32,
    Int32,
    UInt64,
    Int64,
    Float32,
    Float64,
    Utf8,
    LargeUtf8,
    Date32,
    TimeMicrosecond,
    TimeNanosecond,
    Null,
    Decimal128,
    Date64,
    TimeSecond,
    TimeMillisecond,
    IntervalYearMonth,
    IntervalDayTime,
}

/// Declared type of a list literal's elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Primitive(PrimitiveScalarType),
    /// Elements are themselves lists of the inner type.
    List(Box<ScalarType>),
}

/// A list literal: a declared element type plus the elements themselves.
///
/// Every element's implied type must equal `element_type`; an empty list
/// still carries its declared element type.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarListValue {
    pub element_type: ScalarType,
    pub values: Vec<ScalarValue>,
}

impl ScalarListValue {
    pub fn new(element_type: ScalarType, values: Vec<ScalarValue>) -> Self {
        Self {
            element_type,
            values,
        }
    }
}

/// A scalar literal.
///
/// Exactly one variant per concrete width/kind; no lossy conversions.
/// Nulls are typed: [`ScalarValue::Null`] carries the type the null
/// belongs to, and [`ScalarValue::NullList`] the element type of the
/// absent list.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Boolean(bool),
    Utf8(String),
    LargeUtf8(String),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    Date32(i32),
    Date64(i64),
    TimeSecond(i64),
    TimeMillisecond(i64),
    TimeMicrosecond(i64),
    TimeNanosecond(i64),
    IntervalYearMonth(i32),
    IntervalDayTime(i64),
    List(ScalarListValue),
    NullList(ScalarType),
    Null(PrimitiveScalarType),
    /// Fixed-point decimal: unscaled value with explicit precision and
    /// scale. The wire form is a minimal-length big-endian
    /// two's-complement byte sequence.
    Decimal128 {
        value: i128,
        precision: usize,
        scale: usize,
    },
}

impl ScalarValue {
    /// The implied [`ScalarType`] of this value, used to validate list
    /// homogeneity.
    pub fn scalar_type(&self) -> ScalarType {
        use PrimitiveScalarType as P;
        match self {
            ScalarValue::Boolean(_) => ScalarType::Primitive(P::Bool),
            ScalarValue::Utf8(_) => ScalarType::Primitive(P::Utf8),
            ScalarValue::LargeUtf8(_) => ScalarType::Primitive(P::LargeUtf8),
            ScalarValue::Int8(_) => ScalarType::Primitive(P::Int8),
            ScalarValue::Int16(_) => ScalarType::Primitive(P::Int16),
            ScalarValue::Int32(_) => ScalarType::Primitive(P::Int32),
            ScalarValue::Int64(_) => ScalarType::Primitive(P::Int64),
            ScalarValue::UInt8(_) => ScalarType::Primitive(P::UInt8),
            ScalarValue::UInt16(_) => ScalarType::Primitive(P::UInt16),
            ScalarValue::UInt32(_) => ScalarType::Primitive(P::UInt32),
            ScalarValue::UInt64(_) => ScalarType::Primitive(P::UInt64),
            ScalarValue::Float32(_) => ScalarType::Primitive(P::Float32),
            ScalarValue::Float64(_) => ScalarType::Primitive(P::Float64),
            ScalarValue::Date32(_) => ScalarType::Primitive(P::Date32),
            ScalarValue::Date64(_) => ScalarType::Primitive(P::Date64),
            ScalarValue::TimeSecond(_) => ScalarType::Primitive(P::TimeSecond),
            ScalarValue::TimeMillisecond(_) => ScalarType::Primitive(P::TimeMillisecond),
            ScalarValue::TimeMicrosecond(_) => ScalarType::Primitive(P::TimeMicrosecond),
            ScalarValue::TimeNanosecond(_) => ScalarType::Primitive(P::TimeNanosecond),
            ScalarValue::IntervalYearMonth(_) => ScalarType::Primitive(P::IntervalYearMonth),
            ScalarValue::IntervalDayTime(_) => ScalarType::Primitive(P::IntervalDayTime),
            ScalarValue::List(lv) => ScalarType::List(Box::new(lv.element_type.clone())),
            ScalarValue::NullList(t) => ScalarType::List(Box::new(t.clone())),
            ScalarValue::Null(t) => ScalarType::Primitive(*t),
            ScalarValue::Decimal128 { .. } => ScalarType::Primitive(P::Decimal128),
        }
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            ScalarValue::Boolean(_) => "Boolean",
            ScalarValue::Utf8(_) => "Utf8",
            ScalarValue::LargeUtf8(_) => "LargeUtf8",
            ScalarValue::Int8(_) => "Int8",
            ScalarValue::Int16(_) => "Int16",
            ScalarValue::Int32(_) => "Int32",
            ScalarValue::Int64(_) => "Int64",
            ScalarValue::UInt8(_) => "UInt8",
            ScalarValue::UInt16(_) => "UInt16",
            ScalarValue::UInt32(_) => "UInt32",
            ScalarValue::UInt64(_) => "UInt64",
            ScalarValue::Float32(_) => "Float32",
            ScalarValue::Float64(_) => "Float64",
            ScalarValue::Date32(_) => "Date32",
            ScalarValue::Date64(_) => "Date64",
            ScalarValue::TimeSecond(_) => "TimeSecond",
            ScalarValue::TimeMillisecond(_) => "TimeMillisecond",
            ScalarValue::TimeMicrosecond(_) => "TimeMicrosecond",
            ScalarValue::TimeNanosecond(_) => "TimeNanosecond",
            ScalarValue::IntervalYearMonth(_) => "IntervalYearMonth",
            ScalarValue::IntervalDayTime(_) => "IntervalDayTime",
            ScalarValue::List(_) => "List",
            ScalarValue::NullList(_) => "NullList",
            ScalarValue::Null(_) => "Null",
            ScalarValue::Decimal128 { .. } => "Decimal128",
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Boolean(v) => write!(f, "{v}"),
            ScalarValue::Utf8(v) | ScalarValue::LargeUtf8(v) => write!(f, "'{v}'"),
            ScalarValue::Int8(v) => write!(f, "{v}"),
            ScalarValue::Int16(v) => write!(f, "{v}"),
            ScalarValue::Int32(v) => write!(f, "{v}"),
            ScalarValue::Int64(v) => write!(f, "{v}"),
            ScalarValue::UInt8(v) => write!(f, "{v}"),
            ScalarValue::UInt16(v) => write!(f, "{v}"),
            ScalarValue::UInt32(v) => write!(f, "{v}"),
            ScalarValue::UInt64(v) => write!(f, "{v}"),
            ScalarValue::Float32(v) => write!(f, "{v}"),
            ScalarValue::Float64(v) => write!(f, "{v}"),
            ScalarValue::Date32(v) => write!(f, "Date32({v})"),
            ScalarValue::Date64(v) => write!(f, "Date64({v})"),
            ScalarValue::TimeSecond(v) => write!(f, "TimeSecond({v})"),
            ScalarValue::TimeMillisecond(v) => write!(f, "TimeMillisecond({v})"),
            ScalarValue::TimeMicrosecond(v) => write!(f, "TimeMicrosecond({v})"),
            ScalarValue::TimeNanosecond(v) => write!(f, "TimeNanosecond({v})"),
            ScalarValue::IntervalYearMonth(v) => write!(f, "IntervalYearMonth({v})"),
            ScalarValue::IntervalDayTime(v) => write!(f, "IntervalDayTime({v})"),
            ScalarValue::List(lv) => {
                f.write_str("[")?;
                for (i, v) in lv.values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
            ScalarValue::NullList(_) => f.write_str("NULL"),
            ScalarValue::Null(_) => f.write_str("NULL"),
            ScalarValue::Decimal128 {
                value,
                precision,
                scale,
            } => write!(f, "{value}e-{scale}p{precision}"),
        }
    }
}
