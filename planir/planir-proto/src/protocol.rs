//! Wire records for plan interchange.
//!
//! These structs are written by hand rather than generated: the field tags
//! and enumeration values are the cross-process contract, permanently
//! reserved once assigned, so they are spelled out literally. Tags must
//! never be renumbered or reused, even for removed variants; the gaps
//! (`PrimitiveScalarType` 18-19, `WindowExprNode` 3 and 7, the
//! out-of-sequence `LARGE_BINARY`/`LARGE_UTF8`) are reserved history.

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct EmptyMessage {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Field {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, optional, boxed, tag = "2")]
    pub arrow_type: Option<Box<ArrowType>>,
    #[prost(bool, tag = "3")]
    pub nullable: bool,
    /// Populated only for struct/union-shaped types.
    #[prost(message, repeated, tag = "4")]
    pub children: Vec<Field>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Schema {
    #[prost(message, repeated, tag = "1")]
    pub columns: Vec<Field>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ColumnRelation {
    #[prost(string, tag = "1")]
    pub relation: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Column {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, optional, tag = "2")]
    pub relation: Option<ColumnRelation>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DfField {
    #[prost(message, optional, tag = "1")]
    pub field: Option<Field>,
    #[prost(message, optional, tag = "2")]
    pub qualifier: Option<ColumnRelation>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DfSchema {
    #[prost(message, repeated, tag = "1")]
    pub columns: Vec<DfField>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Timestamp {
    #[prost(enumeration = "TimeUnit", tag = "1")]
    pub time_unit: i32,
    /// Empty string means no timezone.
    #[prost(string, tag = "2")]
    pub timezone: String,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Decimal {
    #[prost(uint64, tag = "1")]
    pub whole: u64,
    #[prost(uint64, tag = "2")]
    pub fractional: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct List {
    #[prost(message, optional, boxed, tag = "1")]
    pub field_type: Option<Box<Field>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FixedSizeList {
    #[prost(message, optional, boxed, tag = "1")]
    pub field_type: Option<Box<Field>>,
    #[prost(int32, tag = "2")]
    pub list_size: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Struct {
    #[prost(message, repeated, tag = "1")]
    pub sub_field_types: Vec<Field>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Union {
    #[prost(message, repeated, tag = "1")]
    pub union_types: Vec<Field>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Dictionary {
    #[prost(message, optional, boxed, tag = "1")]
    pub key: Option<Box<ArrowType>>,
    #[prost(message, optional, boxed, tag = "2")]
    pub value: Option<Box<ArrowType>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ArrowType {
    #[prost(
        oneof = "arrow_type::ArrowTypeEnum",
        tags = "1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32"
    )]
    pub arrow_type_enum: Option<arrow_type::ArrowTypeEnum>,
}

/// Nested types in `ArrowType`.
pub mod arrow_type {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum ArrowTypeEnum {
        #[prost(message, tag = "1")]
        None(super::EmptyMessage),
        #[prost(message, tag = "2")]
        Bool(super::EmptyMessage),
        #[prost(message, tag = "3")]
        Uint8(super::EmptyMessage),
        #[prost(message, tag = "4")]
        Int8(super::EmptyMessage),
        #[prost(message, tag = "5")]
        Uint16(super::EmptyMessage),
        #[prost(message, tag = "6")]
        Int16(super::EmptyMessage),
        #[prost(message, tag = "7")]
        Uint32(super::EmptyMessage),
        #[prost(message, tag = "8")]
        Int32(super::EmptyMessage),
        #[prost(message, tag = "9")]
        Uint64(super::EmptyMessage),
        #[prost(message, tag = "10")]
        Int64(super::EmptyMessage),
        #[prost(message, tag = "11")]
        Float16(super::EmptyMessage),
        #[prost(message, tag = "12")]
        Float32(super::EmptyMessage),
        #[prost(message, tag = "13")]
        Float64(super::EmptyMessage),
        #[prost(message, tag = "14")]
        Utf8(super::EmptyMessage),
        #[prost(message, tag = "15")]
        Binary(super::EmptyMessage),
        #[prost(int32, tag = "16")]
        FixedSizeBinary(i32),
        #[prost(message, tag = "17")]
        Date32(super::EmptyMessage),
        #[prost(message, tag = "18")]
        Date64(super::EmptyMessage),
        #[prost(enumeration = "super::TimeUnit", tag = "19")]
        Duration(i32),
        #[prost(message, tag = "20")]
        Timestamp(super::Timestamp),
        #[prost(enumeration = "super::TimeUnit", tag = "21")]
        Time32(i32),
        #[prost(enumeration = "super::TimeUnit", tag = "22")]
        Time64(i32),
        #[prost(enumeration = "super::IntervalUnit", tag = "23")]
        Interval(i32),
        #[prost(message, tag = "24")]
        Decimal(super::Decimal),
        #[prost(message, tag = "25")]
        List(Box<super::List>),
        #[prost(message, tag = "26")]
        LargeList(Box<super::List>),
        #[prost(message, tag = "27")]
        FixedSizeList(Box<super::FixedSizeList>),
        #[prost(message, tag = "28")]
        Struct(super::Struct),
        #[prost(message, tag = "29")]
        Union(super::Union),
        #[prost(message, tag = "30")]
        Dictionary(Box<super::Dictionary>),
        // 31/32 assigned after 30; kept out of sequence forever.
        #[prost(message, tag = "31")]
        LargeBinary(super::EmptyMessage),
        #[prost(message, tag = "32")]
        LargeUtf8(super::EmptyMessage),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ScalarType {
    #[prost(oneof = "scalar_type::Datatype", tags = "1, 2")]
    pub datatype: Option<scalar_type::Datatype>,
}

/// Nested types in `ScalarType`.
pub mod scalar_type {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Datatype {
        #[prost(enumeration = "super::PrimitiveScalarType", tag = "1")]
        Scalar(i32),
        /// Element type of a list-of-lists.
        #[prost(message, tag = "2")]
        List(Box<super::ScalarType>),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ScalarListValue {
    /// Declared element type; authoritative even for an empty list.
    #[prost(message, optional, tag = "1")]
    pub datatype: Option<ScalarType>,
    #[prost(message, repeated, tag = "2")]
    pub values: Vec<ScalarValue>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Decimal128 {
    /// Unscaled value, minimal-length big-endian two's complement.
    #[prost(bytes = "vec", tag = "1")]
    pub value: Vec<u8>,
    #[prost(int64, tag = "2")]
    pub p: i64,
    #[prost(int64, tag = "3")]
    pub s: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ScalarValue {
    #[prost(
        oneof = "scalar_value::Value",
        tags = "1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25"
    )]
    pub value: Option<scalar_value::Value>,
}

/// Nested types in `ScalarValue`.
pub mod scalar_value {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Value {
        #[prost(bool, tag = "1")]
        BoolValue(bool),
        #[prost(string, tag = "2")]
        Utf8Value(String),
        #[prost(string, tag = "3")]
        LargeUtf8Value(String),
        /// Carried in a wider container; range-checked on decode.
        #[prost(int32, tag = "4")]
        Int8Value(i32),
        #[prost(int32, tag = "5")]
        Int16Value(i32),
        #[prost(int32, tag = "6")]
        Int32Value(i32),
        #[prost(int64, tag = "7")]
        Int64Value(i64),
        #[prost(uint32, tag = "8")]
        Uint8Value(u32),
        #[prost(uint32, tag = "9")]
        Uint16Value(u32),
        #[prost(uint32, tag = "10")]
        Uint32Value(u32),
        #[prost(uint64, tag = "11")]
        Uint64Value(u64),
        #[prost(float, tag = "12")]
        Float32Value(f32),
        #[prost(double, tag = "13")]
        Float64Value(f64),
        #[prost(int32, tag = "14")]
        Date32Value(i32),
        #[prost(int64, tag = "15")]
        TimeMicrosecondValue(i64),
        #[prost(int64, tag = "16")]
        TimeNanosecondValue(i64),
        #[prost(message, tag = "17")]
        ListValue(super::ScalarListValue),
        #[prost(message, tag = "18")]
        NullListValue(super::ScalarType),
        #[prost(enumeration = "super::PrimitiveScalarType", tag = "19")]
        NullValue(i32),
        #[prost(message, tag = "20")]
        Decimal128Value(super::Decimal128),
        #[prost(int64, tag = "21")]
        Date64Value(i64),
        #[prost(int64, tag = "22")]
        TimeSecondValue(i64),
        #[prost(int64, tag = "23")]
        TimeMillisecondValue(i64),
        #[prost(int32, tag = "24")]
        IntervalYearmonthValue(i32),
        #[prost(int64, tag = "25")]
        IntervalDaytimeValue(i64),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogicalExprNode {
    #[prost(
        oneof = "logical_expr_node::ExprType",
        tags = "1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18"
    )]
    pub expr_type: Option<logical_expr_node::ExprType>,
}

/// Nested types in `LogicalExprNode`.
pub mod logical_expr_node {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum ExprType {
        #[prost(message, tag = "1")]
        Column(super::Column),
        #[prost(message, tag = "2")]
        Alias(Box<super::AliasNode>),
        #[prost(message, tag = "3")]
        Literal(super::ScalarValue),
        #[prost(message, tag = "4")]
        BinaryExpr(Box<super::BinaryExprNode>),
        #[prost(message, tag = "5")]
        AggregateExpr(super::AggregateExprNode),
        #[prost(message, tag = "6")]
        IsNullExpr(Box<super::IsNull>),
        #[prost(message, tag = "7")]
        IsNotNullExpr(Box<super::IsNotNull>),
        #[prost(message, tag = "8")]
        NotExpr(Box<super::Not>),
        #[prost(message, tag = "9")]
        Between(Box<super::BetweenNode>),
        #[prost(message, tag = "10")]
        Case(Box<super::CaseNode>),
        #[prost(message, tag = "11")]
        Cast(Box<super::CastNode>),
        #[prost(message, tag = "12")]
        Sort(Box<super::SortExprNode>),
        #[prost(message, tag = "13")]
        Negative(Box<super::NegativeNode>),
        #[prost(message, tag = "14")]
        InList(Box<super::InListNode>),
        #[prost(bool, tag = "15")]
        Wildcard(bool),
        #[prost(message, tag = "16")]
        ScalarFunction(super::ScalarFunctionNode),
        #[prost(message, tag = "17")]
        TryCast(Box<super::TryCastNode>),
        #[prost(message, tag = "18")]
        WindowExpr(Box<super::WindowExprNode>),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AliasNode {
    #[prost(message, optional, boxed, tag = "1")]
    pub expr: Option<Box<LogicalExprNode>>,
    #[prost(string, tag = "2")]
    pub alias: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BinaryExprNode {
    #[prost(message, optional, boxed, tag = "1")]
    pub l: Option<Box<LogicalExprNode>>,
    #[prost(message, optional, boxed, tag = "2")]
    pub r: Option<Box<LogicalExprNode>>,
    #[prost(string, tag = "3")]
    pub op: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IsNull {
    #[prost(message, optional, boxed, tag = "1")]
    pub expr: Option<Box<LogicalExprNode>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IsNotNull {
    #[prost(message, optional, boxed, tag = "1")]
    pub expr: Option<Box<LogicalExprNode>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Not {
    #[prost(message, optional, boxed, tag = "1")]
    pub expr: Option<Box<LogicalExprNode>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NegativeNode {
    #[prost(message, optional, boxed, tag = "1")]
    pub expr: Option<Box<LogicalExprNode>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BetweenNode {
    #[prost(message, optional, boxed, tag = "1")]
    pub expr: Option<Box<LogicalExprNode>>,
    #[prost(bool, tag = "2")]
    pub negated: bool,
    #[prost(message, optional, boxed, tag = "3")]
    pub low: Option<Box<LogicalExprNode>>,
    #[prost(message, optional, boxed, tag = "4")]
    pub high: Option<Box<LogicalExprNode>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CaseNode {
    #[prost(message, optional, boxed, tag = "1")]
    pub expr: Option<Box<LogicalExprNode>>,
    #[prost(message, repeated, tag = "2")]
    pub when_then_expr: Vec<WhenThen>,
    #[prost(message, optional, boxed, tag = "3")]
    pub else_expr: Option<Box<LogicalExprNode>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WhenThen {
    #[prost(message, optional, tag = "1")]
    pub when_expr: Option<LogicalExprNode>,
    #[prost(message, optional, tag = "2")]
    pub then_expr: Option<LogicalExprNode>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CastNode {
    #[prost(message, optional, boxed, tag = "1")]
    pub expr: Option<Box<LogicalExprNode>>,
    #[prost(message, optional, tag = "2")]
    pub arrow_type: Option<ArrowType>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TryCastNode {
    #[prost(message, optional, boxed, tag = "1")]
    pub expr: Option<Box<LogicalExprNode>>,
    #[prost(message, optional, tag = "2")]
    pub arrow_type: Option<ArrowType>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SortExprNode {
    #[prost(message, optional, boxed, tag = "1")]
    pub expr: Option<Box<LogicalExprNode>>,
    #[prost(bool, tag = "2")]
    pub asc: bool,
    #[prost(bool, tag = "3")]
    pub nulls_first: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InListNode {
    #[prost(message, optional, boxed, tag = "1")]
    pub expr: Option<Box<LogicalExprNode>>,
    #[prost(message, repeated, tag = "2")]
    pub list: Vec<LogicalExprNode>,
    #[prost(bool, tag = "3")]
    pub negated: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ScalarFunctionNode {
    #[prost(enumeration = "ScalarFunction", tag = "1")]
    pub fun: i32,
    #[prost(message, repeated, tag = "2")]
    pub args: Vec<LogicalExprNode>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AggregateExprNode {
    #[prost(enumeration = "AggregateFunction", tag = "1")]
    pub aggr_function: i32,
    #[prost(message, repeated, tag = "2")]
    pub expr: Vec<LogicalExprNode>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WindowExprNode {
    #[prost(oneof = "window_expr_node::WindowFunction", tags = "1, 2")]
    pub window_function: Option<window_expr_node::WindowFunction>,
    // tag 3 reserved
    #[prost(message, repeated, tag = "4")]
    pub expr: Vec<LogicalExprNode>,
    #[prost(message, repeated, tag = "5")]
    pub partition_by: Vec<LogicalExprNode>,
    #[prost(message, repeated, tag = "6")]
    pub order_by: Vec<LogicalExprNode>,
    // tag 7 reserved
    #[prost(oneof = "window_expr_node::WindowFrame", tags = "8")]
    pub window_frame: Option<window_expr_node::WindowFrame>,
}

/// Nested types in `WindowExprNode`.
pub mod window_expr_node {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum WindowFunction {
        #[prost(enumeration = "super::AggregateFunction", tag = "1")]
        AggrFunction(i32),
        #[prost(enumeration = "super::BuiltInWindowFunction", tag = "2")]
        BuiltInFunction(i32),
    }

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum WindowFrame {
        #[prost(message, tag = "8")]
        Frame(super::WindowFrame),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WindowFrame {
    #[prost(enumeration = "WindowFrameUnits", tag = "1")]
    pub window_frame_units: i32,
    #[prost(message, optional, tag = "2")]
    pub start_bound: Option<WindowFrameBound>,
    /// Absence of an end bound is meaningful and distinct from any
    /// present value, hence the single-arm oneof.
    #[prost(oneof = "window_frame::EndBound", tags = "3")]
    pub end_bound: Option<window_frame::EndBound>,
}

/// Nested types in `WindowFrame`.
pub mod window_frame {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum EndBound {
        #[prost(message, tag = "3")]
        Bound(super::WindowFrameBound),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WindowFrameBound {
    #[prost(enumeration = "WindowFrameBoundType", tag = "1")]
    pub window_frame_bound_type: i32,
    /// Only preceding/following bounds carry an offset.
    #[prost(oneof = "window_frame_bound::BoundValue", tags = "2")]
    pub bound_value: Option<window_frame_bound::BoundValue>,
}

/// Nested types in `WindowFrameBound`.
pub mod window_frame_bound {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum BoundValue {
        #[prost(uint64, tag = "2")]
        Value(u64),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum TimeUnit {
    Second = 0,
    Millisecond = 1,
    Microsecond = 2,
    Nanosecond = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum IntervalUnit {
    YearMonth = 0,
    DayTime = 1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PrimitiveScalarType {
    Bool = 0,
    Uint8 = 1,
    Int8 = 2,
    Uint16 = 3,
    Int16 = 4,
    Uint32 = 5,
    Int32 = 6,
    Uint64 = 7,
    Int64 = 8,
    Float32 = 9,
    Float64 = 10,
    Utf8 = 11,
    LargeUtf8 = 12,
    Date32 = 13,
    TimeMicrosecond = 14,
    TimeNanosecond = 15,
    Null = 16,
    Decimal128 = 17,
    // 18-19 reserved
    Date64 = 20,
    TimeSecond = 21,
    TimeMillisecond = 22,
    IntervalYearmonth = 23,
    IntervalDaytime = 24,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum AggregateFunction {
    Min = 0,
    Max = 1,
    Sum = 2,
    Avg = 3,
    Count = 4,
    ApproxDistinct = 5,
    ArrayAgg = 6,
    Variance = 7,
    VariancePop = 8,
    Covariance = 9,
    CovariancePop = 10,
    Stddev = 11,
    StddevPop = 12,
    Correlation = 13,
    ApproxPercentileCont = 14,
    ApproxMedian = 15,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ScalarFunction {
    Sqrt = 0,
    Sin = 1,
    Cos = 2,
    Tan = 3,
    Asin = 4,
    Acos = 5,
    Atan = 6,
    Exp = 7,
    Log = 8,
    Log2 = 9,
    Log10 = 10,
    Floor = 11,
    Ceil = 12,
    Round = 13,
    Trunc = 14,
    Abs = 15,
    Signum = 16,
    Octetlength = 17,
    Concat = 18,
    Lower = 19,
    Upper = 20,
    Trim = 21,
    Ltrim = 22,
    Rtrim = 23,
    Totimestamp = 24,
    Array = 25,
    Nullif = 26,
    Datepart = 27,
    Datetrunc = 28,
    Md5 = 29,
    Sha224 = 30,
    Sha256 = 31,
    Sha384 = 32,
    Sha512 = 33,
    Ln = 34,
    Totimestampmillis = 35,
    Digest = 36,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum BuiltInWindowFunction {
    RowNumber = 0,
    Rank = 1,
    DenseRank = 2,
    PercentRank = 3,
    CumeDist = 4,
    Ntile = 5,
    Lag = 6,
    Lead = 7,
    FirstValue = 8,
    LastValue = 9,
    NthValue = 10,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum WindowFrameUnits {
    Rows = 0,
    Range = 1,
    Groups = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum WindowFrameBoundType {
    CurrentRow = 0,
    Preceding = 1,
    Following = 2,
}
