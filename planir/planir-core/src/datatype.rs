//! Logical mirror of the columnar type system.

use crate::field::Field;

/// Granularity of a timestamp, time-of-day, or duration type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Second,
    Millisecond,
    Microsecond,
    Nanosecond,
}

/// Granularity of a calendar interval type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalUnit {
    YearMonth,
    DayTime,
}

/// Logical data type of a column or scalar.
///
/// Exactly one variant describes a value's type; nested variants own their
/// child [`Field`]s by value, so a type is always a finite tree.
#[derive(Debug, Clone, PartialEq)]
pub enum DataType {
    Null,
    Boolean,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float16,
    Float32,
    Float64,
    Utf8,
    LargeUtf8,
    Binary,
    /// Binary with a fixed byte width per value.
    FixedSizeBinary(i32),
    LargeBinary,
    Date32,
    Date64,
    Duration(TimeUnit),
    /// Instant at the given granularity, optionally anchored to a timezone.
    Timestamp(TimeUnit, Option<String>),
    Time32(TimeUnit),
    Time64(TimeUnit),
    Interval(IntervalUnit),
    /// Fixed-point decimal with `whole` integer digits and `fractional`
    /// digits after the point.
    Decimal { whole: u64, fractional: u64 },
    List(Box<Field>),
    LargeList(Box<Field>),
    FixedSizeList(Box<Field>, i32),
    Struct(Vec<Field>),
    Union(Vec<Field>),
    /// Dictionary-encoded column: `key` indexes into a dictionary of `value`.
    Dictionary(Box<DataType>, Box<DataType>),
}

impl DataType {
    /// Whether this type embeds child fields or types.
    pub fn is_nested(&self) -> bool {
        matches!(
            self,
            DataType::List(_)
                | DataType::LargeList(_)
                | DataType::FixedSizeList(_, _)
                | DataType::Struct(_)
                | DataType::Union(_)
                | DataType::Dictionary(_, _)
        )
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            DataType::Int8
                | DataType::Int16
                | DataType::Int32
                | DataType::Int64
                | DataType::UInt8
                | DataType::UInt16
                | DataType::UInt32
                | DataType::UInt64
                | DataType::Float16
                | DataType::Float32
                | DataType::Float64
                | DataType::Decimal { .. }
        )
    }
}
