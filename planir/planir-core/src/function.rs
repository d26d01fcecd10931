//! Closed function enumerations carried by aggregate, scalar-function,
//! and window expressions.

use std::fmt;

/// Aggregate functions addressable over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateFunction {
    Min,
    Max,
    Sum,
    Avg,
    Count,
    ApproxDistinct,
    ArrayAgg,
    Variance,
    VariancePop,
    Covariance,
    CovariancePop,
    Stddev,
    StddevPop,
    Correlation,
    ApproxPercentileCont,
    ApproxMedian,
}

impl fmt::Display for AggregateFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Min => "MIN",
            Self::Max => "MAX",
            Self::Sum => "SUM",
            Self::Avg => "AVG",
            Self::Count => "COUNT",
            Self::ApproxDistinct => "APPROX_DISTINCT",
            Self::ArrayAgg => "ARRAY_AGG",
            Self::Variance => "VAR",
            Self::VariancePop => "VAR_POP",
            Self::Covariance => "COVAR",
            Self::CovariancePop => "COVAR_POP",
            Self::Stddev => "STDDEV",
            Self::StddevPop => "STDDEV_POP",
            Self::Correlation => "CORR",
            Self::ApproxPercentileCont => "APPROX_PERCENTILE_CONT",
            Self::ApproxMedian => "APPROX_MEDIAN",
        };
        f.write_str(name)
    }
}

/// Built-in scalar functions addressable over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarFunction {
    Sqrt,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Exp,
    Log,
    Log2,
    Log10,
    Floor,
    Ceil,
    Round,
    Trunc,
    Abs,
    Signum,
    OctetLength,
    Concat,
    Lower,
    Upper,
    Trim,
    Ltrim,
    Rtrim,
    ToTimestamp,
    Array,
    NullIf,
    DatePart,
    DateTrunc,
    Md5,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Ln,
    ToTimestampMillis,
    Digest,
}

impl fmt::Display for ScalarFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sqrt => "sqrt",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Exp => "exp",
            Self::Log => "log",
            Self::Log2 => "log2",
            Self::Log10 => "log10",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
            Self::Round => "round",
            Self::Trunc => "trunc",
            Self::Abs => "abs",
            Self::Signum => "signum",
            Self::OctetLength => "octet_length",
            Self::Concat => "concat",
            Self::Lower => "lower",
            Self::Upper => "upper",
            Self::Trim => "trim",
            Self::Ltrim => "ltrim",
            Self::Rtrim => "rtrim",
            Self::ToTimestamp => "to_timestamp",
            Self::Array => "array",
            Self::NullIf => "nullif",
            Self::DatePart => "date_part",
            Self::DateTrunc => "date_trunc",
            Self::Md5 => "md5",
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
            Self::Ln => "ln",
            Self::ToTimestampMillis => "to_timestamp_millis",
            Self::Digest => "digest",
        };
        f.write_str(name)
    }
}

/// Window functions that are not aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltInWindowFunction {
    RowNumber,
    Rank,
    DenseRank,
    PercentRank,
    CumeDist,
    Ntile,
    Lag,
    Lead,
    FirstValue,
    LastValue,
    NthValue,
}

impl fmt::Display for BuiltInWindowFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RowNumber => "ROW_NUMBER",
            Self::Rank => "RANK",
            Self::DenseRank => "DENSE_RANK",
            Self::PercentRank => "PERCENT_RANK",
            Self::CumeDist => "CUME_DIST",
            Self::Ntile => "NTILE",
            Self::Lag => "LAG",
            Self::Lead => "LEAD",
            Self::FirstValue => "FIRST_VALUE",
            Self::LastValue => "LAST_VALUE",
            Self::NthValue => "NTH_VALUE",
        };
        f.write_str(name)
    }
}

/// Function slot of a window expression: either an aggregate evaluated
/// over the frame or a dedicated window function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowFunction {
    Aggregate(AggregateFunction),
    BuiltIn(BuiltInWindowFunction),
}

impl fmt::Display for WindowFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aggregate(fun) => fun.fmt(f),
            Self::BuiltIn(fun) => fun.fmt(f),
        }
    }
}
