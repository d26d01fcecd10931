//! Conversion from wire records back to the logical model.
//!
//! Every structural invariant is re-validated here: unknown discriminants
//! fail closed, required children must be present, and values carried in
//! wider wire containers are range-checked against their logical width.
//! Callers run the depth check first, so recursion below is bounded.

use planir_core::{
    AggregateFunction, BuiltInWindowFunction, Column, DataType, DfField, DfSchema, Expr, Field,
    IntervalUnit, PrimitiveScalarType, ScalarFunction, ScalarListValue, ScalarType, ScalarValue,
    Schema, TimeUnit, WindowFrame, WindowFrameBound, WindowFrameUnits, WindowFunction,
};

use crate::decimal;
use crate::error::DecodeError;
use crate::protocol;
use crate::protocol::arrow_type::ArrowTypeEnum;
use crate::protocol::logical_expr_node::ExprType;

fn missing(entity: &'static str, field: &'static str) -> DecodeError {
    DecodeError::MissingField { entity, field }
}

fn no_variant(entity: &'static str) -> DecodeError {
    DecodeError::MalformedVariant {
        entity,
        detail: "no variant populated".to_string(),
    }
}

pub(crate) fn data_type_from_wire(t: protocol::ArrowType) -> Result<DataType, DecodeError> {
    let arm = t.arrow_type_enum.ok_or_else(|| no_variant("ArrowType"))?;
    let dt = match arm {
        ArrowTypeEnum::None(_) => DataType::Null,
        ArrowTypeEnum::Bool(_) => DataType::Boolean,
        ArrowTypeEnum::Uint8(_) => DataType::UInt8,
        ArrowTypeEnum::Int8(_) => DataType::Int8,
        ArrowTypeEnum::Uint16(_) => DataType::UInt16,
        ArrowTypeEnum::Int16(_) => DataType::Int16,
        ArrowTypeEnum::Uint32(_) => DataType::UInt32,
        ArrowTypeEnum::Int32(_) => DataType::Int32,
        ArrowTypeEnum::Uint64(_) => DataType::UInt64,
        ArrowTypeEnum::Int64(_) => DataType::Int64,
        ArrowTypeEnum::Float16(_) => DataType::Float16,
        ArrowTypeEnum::Float32(_) => DataType::Float32,
        ArrowTypeEnum::Float64(_) => DataType::Float64,
        ArrowTypeEnum::Utf8(_) => DataType::Utf8,
        ArrowTypeEnum::LargeUtf8(_) => DataType::LargeUtf8,
        ArrowTypeEnum::Binary(_) => DataType::Binary,
        ArrowTypeEnum::FixedSizeBinary(width) => DataType::FixedSizeBinary(width),
        ArrowTypeEnum::LargeBinary(_) => DataType::LargeBinary,
        ArrowTypeEnum::Date32(_) => DataType::Date32,
        ArrowTypeEnum::Date64(_) => DataType::Date64,
        ArrowTypeEnum::Duration(unit) => DataType::Duration(time_unit_from_wire(unit)?),
        ArrowTypeEnum::Timestamp(ts) => {
            let unit = time_unit_from_wire(ts.time_unit)?;
            let timezone = if ts.timezone.is_empty() {
                None
            } else {
                Some(ts.timezone)
            };
            DataType::Timestamp(unit, timezone)
        }
        ArrowTypeEnum::Time32(unit) => DataType::Time32(time_unit_from_wire(unit)?),
        ArrowTypeEnum::Time64(unit) => DataType::Time64(time_unit_from_wire(unit)?),
        ArrowTypeEnum::Interval(unit) => DataType::Interval(interval_unit_from_wire(unit)?),
        ArrowTypeEnum::Decimal(d) => DataType::Decimal {
            whole: d.whole,
            fractional: d.fractional,
        },
        ArrowTypeEnum::List(list) => {
            let field = list.field_type.ok_or_else(|| missing("List", "field_type"))?;
            DataType::List(Box::new(field_from_wire(*field)?))
        }
        ArrowTypeEnum::LargeList(list) => {
            let field = list
                .field_type
                .ok_or_else(|| missing("LargeList", "field_type"))?;
            DataType::LargeList(Box::new(field_from_wire(*field)?))
        }
        ArrowTypeEnum::FixedSizeList(list) => {
            let field = list
                .field_type
                .ok_or_else(|| missing("FixedSizeList", "field_type"))?;
            DataType::FixedSizeList(Box::new(field_from_wire(*field)?), list.list_size)
        }
        ArrowTypeEnum::Struct(s) => DataType::Struct(
            s.sub_field_types
                .into_iter()
                .map(field_from_wire)
                .collect::<Result<_, _>>()?,
        ),
        ArrowTypeEnum::Union(u) => DataType::Union(
            u.union_types
                .into_iter()
                .map(field_from_wire)
                .collect::<Result<_, _>>()?,
        ),
        ArrowTypeEnum::Dictionary(d) => {
            let key = d.key.ok_or_else(|| missing("Dictionary", "key"))?;
            let value = d.value.ok_or_else(|| missing("Dictionary", "value"))?;
            DataType::Dictionary(
                Box::new(data_type_from_wire(*key)?),
                Box::new(data_type_from_wire(*value)?),
            )
        }
    };
    Ok(dt)
}

pub(crate) fn field_from_wire(field: protocol::Field) -> Result<Field, DecodeError> {
    let arrow_type = field
        .arrow_type
        .ok_or_else(|| missing("Field", "arrow_type"))?;
    let data_type = data_type_from_wire(*arrow_type)?;
    let children = field
        .children
        .into_iter()
        .map(field_from_wire)
        .collect::<Result<Vec<_>, _>>()?;
    if !data_type.is_nested() && !children.is_empty() {
        return Err(DecodeError::StructuralMismatch {
            entity: "Field",
            detail: format!(
                "field '{}' has a non-nested type but {} child fields",
                field.name,
                children.len()
            ),
        });
    }
    Ok(Field {
        name: field.name,
        data_type,
        nullable: field.nullable,
        children,
    })
}

pub(crate) fn schema_from_wire(schema: protocol::Schema) -> Result<Schema, DecodeError> {
    Ok(Schema {
        fields: schema
            .columns
            .into_iter()
            .map(field_from_wire)
            .collect::<Result<_, _>>()?,
    })
}

pub(crate) fn df_schema_from_wire(schema: protocol::DfSchema) -> Result<DfSchema, DecodeError> {
    let fields = schema
        .columns
        .into_iter()
        .map(|df| {
            let field = df.field.ok_or_else(|| missing("DfField", "field"))?;
            Ok(DfField {
                field: field_from_wire(field)?,
                qualifier: df.qualifier.map(|q| q.relation),
            })
        })
        .collect::<Result<Vec<_>, DecodeError>>()?;
    Ok(DfSchema { fields })
}

pub(crate) fn column_from_wire(column: protocol::Column) -> Column {
    Column {
        relation: column.relation.map(|r| r.relation),
        name: column.name,
    }
}

pub(crate) fn scalar_type_from_wire(t: protocol::ScalarType) -> Result<ScalarType, DecodeError> {
    match t.datatype.ok_or_else(|| no_variant("ScalarType"))? {
        protocol::scalar_type::Datatype::Scalar(p) => {
            Ok(ScalarType::Primitive(primitive_from_wire(p)?))
        }
        protocol::scalar_type::Datatype::List(inner) => {
            Ok(ScalarType::List(Box::new(scalar_type_from_wire(*inner)?)))
        }
    }
}

pub(crate) fn scalar_from_wire(value: protocol::ScalarValue) -> Result<ScalarValue, DecodeError> {
    use protocol::scalar_value::Value;
    let arm = value.value.ok_or_else(|| no_variant("ScalarValue"))?;
    let scalar = match arm {
        Value::BoolValue(v) => ScalarValue::Boolean(v),
        Value::Utf8Value(v) => ScalarValue::Utf8(v),
        Value::LargeUtf8Value(v) => ScalarValue::LargeUtf8(v),
        Value::Int8Value(v) => {
            ScalarValue::Int8(i8::try_from(v).map_err(|_| DecodeError::IntegerOverflow {
                entity: "int8_value",
                value: i64::from(v),
            })?)
        }
        Value::Int16Value(v) => {
            ScalarValue::Int16(i16::try_from(v).map_err(|_| DecodeError::IntegerOverflow {
                entity: "int16_value",
                value: i64::from(v),
            })?)
        }
        Value::Int32Value(v) => ScalarValue::Int32(v),
        Value::Int64Value(v) => ScalarValue::Int64(v),
        Value::Uint8Value(v) => {
            ScalarValue::UInt8(u8::try_from(v).map_err(|_| DecodeError::IntegerOverflow {
                entity: "uint8_value",
                value: i64::from(v),
            })?)
        }
        Value::Uint16Value(v) => {
            ScalarValue::UInt16(u16::try_from(v).map_err(|_| DecodeError::IntegerOverflow {
                entity: "uint16_value",
                value: i64::from(v),
            })?)
        }
        Value::Uint32Value(v) => ScalarValue::UInt32(v),
        Value::Uint64Value(v) => ScalarValue::UInt64(v),
        Value::Float32Value(v) => ScalarValue::Float32(v),
        Value::Float64Value(v) => ScalarValue::Float64(v),
        Value::Date32Value(v) => ScalarValue::Date32(v),
        Value::Date64Value(v) => ScalarValue::Date64(v),
        Value::TimeSecondValue(v) => ScalarValue::TimeSecond(v),
        Value::TimeMillisecondValue(v) => ScalarValue::TimeMillisecond(v),
        Value::TimeMicrosecondValue(v) => ScalarValue::TimeMicrosecond(v),
        Value::TimeNanosecondValue(v) => ScalarValue::TimeNanosecond(v),
        Value::IntervalYearmonthValue(v) => ScalarValue::IntervalYearMonth(v),
        Value::IntervalDaytimeValue(v) => ScalarValue::IntervalDayTime(v),
        Value::ListValue(lv) => list_from_wire(lv)?,
        Value::NullListValue(t) => ScalarValue::NullList(scalar_type_from_wire(t)?),
        Value::NullValue(t) => ScalarValue::Null(primitive_from_wire(t)?),
        Value::Decimal128Value(d) => {
            let value = decimal::from_minimal_be_bytes(&d.value, d.p, d.s)?;
            ScalarValue::Decimal128 {
                value,
                precision: d.p as usize,
                scale: d.s as usize,
            }
        }
    };
    Ok(scalar)
}

fn list_from_wire(lv: protocol::ScalarListValue) -> Result<ScalarValue, DecodeError> {
    let declared = scalar_type_from_wire(
        lv.datatype
            .ok_or_else(|| missing("ScalarListValue", "datatype"))?,
    )?;
    let mut values = Vec::with_capacity(lv.values.len());
    for v in lv.values {
        let v = scalar_from_wire(v)?;
        let actual = v.scalar_type();
        if actual != declared {
            return Err(DecodeError::ElementTypeMismatch {
                declared,
                actual,
            });
        }
        values.push(v);
    }
    Ok(ScalarValue::List(ScalarListValue::new(declared, values)))
}

fn required_expr(
    entity: &'static str,
    field: &'static str,
    expr: Option<Box<protocol::LogicalExprNode>>,
) -> Result<Box<Expr>, DecodeError> {
    let node = expr.ok_or_else(|| missing(entity, field))?;
    Ok(Box::new(expr_from_wire(*node)?))
}

fn optional_expr(
    expr: Option<Box<protocol::LogicalExprNode>>,
) -> Result<Option<Box<Expr>>, DecodeError> {
    expr.map(|node| expr_from_wire(*node).map(Box::new)).transpose()
}

fn expr_list(nodes: Vec<protocol::LogicalExprNode>) -> Result<Vec<Expr>, DecodeError> {
    nodes.into_iter().map(expr_from_wire).collect()
}

pub(crate) fn expr_from_wire(node: protocol::LogicalExprNode) -> Result<Expr, DecodeError> {
    let arm = node.expr_type.ok_or_else(|| no_variant("LogicalExprNode"))?;
    let expr = match arm {
        ExprType::Column(c) => Expr::Column(column_from_wire(c)),
        ExprType::Alias(n) => Expr::Alias(required_expr("AliasNode", "expr", n.expr)?, n.alias),
        ExprType::Literal(v) => Expr::Literal(scalar_from_wire(v)?),
        ExprType::BinaryExpr(n) => Expr::BinaryExpr {
            left: required_expr("BinaryExprNode", "l", n.l)?,
            right: required_expr("BinaryExprNode", "r", n.r)?,
            op: n.op,
        },
        ExprType::AggregateExpr(n) => Expr::AggregateFunction {
            fun: aggregate_function_from_wire(n.aggr_function)?,
            args: expr_list(n.expr)?,
        },
        ExprType::IsNullExpr(n) => Expr::IsNull(required_expr("IsNull", "expr", n.expr)?),
        ExprType::IsNotNullExpr(n) => Expr::IsNotNull(required_expr("IsNotNull", "expr", n.expr)?),
        ExprType::NotExpr(n) => Expr::Not(required_expr("Not", "expr", n.expr)?),
        ExprType::Between(n) => Expr::Between {
            expr: required_expr("BetweenNode", "expr", n.expr)?,
            negated: n.negated,
            low: required_expr("BetweenNode", "low", n.low)?,
            high: required_expr("BetweenNode", "high", n.high)?,
        },
        ExprType::Case(n) => {
            let when_then = n
                .when_then_expr
                .into_iter()
                .map(|wt| {
                    let when = wt.when_expr.ok_or_else(|| missing("WhenThen", "when_expr"))?;
                    let then = wt.then_expr.ok_or_else(|| missing("WhenThen", "then_expr"))?;
                    Ok((expr_from_wire(when)?, expr_from_wire(then)?))
                })
                .collect::<Result<Vec<_>, DecodeError>>()?;
            Expr::Case {
                expr: optional_expr(n.expr)?,
                when_then,
                else_expr: optional_expr(n.else_expr)?,
            }
        }
        ExprType::Cast(n) => Expr::Cast {
            expr: required_expr("CastNode", "expr", n.expr)?,
            data_type: data_type_from_wire(
                n.arrow_type.ok_or_else(|| missing("CastNode", "arrow_type"))?,
            )?,
        },
        ExprType::TryCast(n) => Expr::TryCast {
            expr: required_expr("TryCastNode", "expr", n.expr)?,
            data_type: data_type_from_wire(
                n.arrow_type
                    .ok_or_else(|| missing("TryCastNode", "arrow_type"))?,
            )?,
        },
        ExprType::Sort(n) => Expr::Sort {
            expr: required_expr("SortExprNode", "expr", n.expr)?,
            asc: n.asc,
            nulls_first: n.nulls_first,
        },
        ExprType::Negative(n) => Expr::Negative(required_expr("NegativeNode", "expr", n.expr)?),
        ExprType::InList(n) => Expr::InList {
            expr: required_expr("InListNode", "expr", n.expr)?,
            list: expr_list(n.list)?,
            negated: n.negated,
        },
        ExprType::Wildcard(_) => Expr::Wildcard,
        ExprType::ScalarFunction(n) => Expr::ScalarFunction {
            fun: scalar_function_from_wire(n.fun)?,
            args: expr_list(n.args)?,
        },
        ExprType::WindowExpr(n) => {
            let n = *n;
            let fun = match n
                .window_function
                .ok_or_else(|| missing("WindowExprNode", "window_function"))?
            {
                protocol::window_expr_node::WindowFunction::AggrFunction(f) => {
                    WindowFunction::Aggregate(aggregate_function_from_wire(f)?)
                }
                protocol::window_expr_node::WindowFunction::BuiltInFunction(f) => {
                    WindowFunction::BuiltIn(built_in_window_function_from_wire(f)?)
                }
            };
            let frame = match n.window_frame {
                Some(protocol::window_expr_node::WindowFrame::Frame(f)) => {
                    Some(window_frame_from_wire(f)?)
                }
                None => None,
            };
            Expr::WindowFunction {
                fun,
                args: expr_list(n.expr)?,
                partition_by: expr_list(n.partition_by)?,
                order_by: expr_list(n.order_by)?,
                frame,
            }
        }
    };
    Ok(expr)
}

pub(crate) fn window_frame_from_wire(
    frame: protocol::WindowFrame,
) -> Result<WindowFrame, DecodeError> {
    let units = units_from_wire(frame.window_frame_units)?;
    let start = frame
        .start_bound
        .ok_or_else(|| missing("WindowFrame", "start_bound"))?;
    let end_bound = match frame.end_bound {
        Some(protocol::window_frame::EndBound::Bound(b)) => Some(bound_from_wire(b)?),
        None => None,
    };
    Ok(WindowFrame {
        units,
        start_bound: bound_from_wire(start)?,
        end_bound,
    })
}

pub(crate) fn bound_from_wire(
    bound: protocol::WindowFrameBound,
) -> Result<WindowFrameBound, DecodeError> {
    let kind = protocol::WindowFrameBoundType::try_from(bound.window_frame_bound_type).map_err(
        |_| DecodeError::UnknownVariant {
            entity: "WindowFrameBoundType",
            value: bound.window_frame_bound_type,
        },
    )?;
    let value = bound
        .bound_value
        .map(|protocol::window_frame_bound::BoundValue::Value(v)| v);
    match (kind, value) {
        (protocol::WindowFrameBoundType::CurrentRow, None) => Ok(WindowFrameBound::CurrentRow),
        (protocol::WindowFrameBoundType::CurrentRow, Some(_)) => {
            Err(DecodeError::MalformedVariant {
                entity: "WindowFrameBound",
                detail: "offset payload on a CURRENT ROW bound".to_string(),
            })
        }
        (protocol::WindowFrameBoundType::Preceding, Some(v)) => Ok(WindowFrameBound::Preceding(v)),
        (protocol::WindowFrameBoundType::Following, Some(v)) => Ok(WindowFrameBound::Following(v)),
        (protocol::WindowFrameBoundType::Preceding, None)
        | (protocol::WindowFrameBoundType::Following, None) => {
            Err(missing("WindowFrameBound", "bound_value"))
        }
    }
}

fn units_from_wire(value: i32) -> Result<WindowFrameUnits, DecodeError> {
    let units = protocol::WindowFrameUnits::try_from(value).map_err(|_| {
        DecodeError::UnknownVariant {
            entity: "WindowFrameUnits",
            value,
        }
    })?;
    Ok(match units {
        protocol::WindowFrameUnits::Rows => WindowFrameUnits::Rows,
        protocol::WindowFrameUnits::Range => WindowFrameUnits::Range,
        protocol::WindowFrameUnits::Groups => WindowFrameUnits::Groups,
    })
}

fn time_unit_from_wire(value: i32) -> Result<TimeUnit, DecodeError> {
    let unit = protocol::TimeUnit::try_from(value).map_err(|_| DecodeError::UnknownVariant {
        entity: "TimeUnit",
        value,
    })?;
    Ok(match unit {
        protocol::TimeUnit::Second => TimeUnit::Second,
        protocol::TimeUnit::Millisecond => TimeUnit::Millisecond,
        protocol::TimeUnit::Microsecond => TimeUnit::Microsecond,
        protocol::TimeUnit::Nanosecond => TimeUnit::Nanosecond,
    })
}

fn interval_unit_from_wire(value: i32) -> Result<IntervalUnit, DecodeError> {
    let unit =
        protocol::IntervalUnit::try_from(value).map_err(|_| DecodeError::UnknownVariant {
            entity: "IntervalUnit",
            value,
        })?;
    Ok(match unit {
        protocol::IntervalUnit::YearMonth => IntervalUnit::YearMonth,
        protocol::IntervalUnit::DayTime => IntervalUnit::DayTime,
    })
}

fn primitive_from_wire(value: i32) -> Result<PrimitiveScalarType, DecodeError> {
    use protocol::PrimitiveScalarType as W;
    let p = W::try_from(value).map_err(|_| DecodeError::UnknownVariant {
        entity: "PrimitiveScalarType",
        value,
    })?;
    Ok(match p {
        W::Bool => PrimitiveScalarType::Bool,
        W::Uint8 => PrimitiveScalarType::UInt8,
        W::Int8 => PrimitiveScalarType::Int8,
        W::Uint16 => PrimitiveScalarType::UInt16,
        W::Int16 => PrimitiveScalarType::Int16,
        W::Uint32 => PrimitiveScalarType::UInt32,
        W::Int32 => PrimitiveScalarType::Int32,
        W::Uint64 => PrimitiveScalarType::UInt64,
        W::Int64 => PrimitiveScalarType::Int64,
        W::Float32 => PrimitiveScalarType::Float32,
        W::Float64 => PrimitiveScalarType::Float64,
        W::Utf8 => PrimitiveScalarType::Utf8,
        W::LargeUtf8 => PrimitiveScalarType::LargeUtf8,
        W::Date32 => PrimitiveScalarType::Date32,
        W::TimeMicrosecond => PrimitiveScalarType::TimeMicrosecond,
        W::TimeNanosecond => PrimitiveScalarType::TimeNanosecond,
        W::Null => PrimitiveScalarType::Null,
        W::Decimal128 => PrimitiveScalarType::Decimal128,
        W::Date64 => PrimitiveScalarType::Date64,
        W::TimeSecond => PrimitiveScalarType::TimeSecond,
        W::TimeMillisecond => PrimitiveScalarType::TimeMillisecond,
        W::IntervalYearmonth => PrimitiveScalarType::IntervalYearMonth,
        W::IntervalDaytime => PrimitiveScalarType::IntervalDayTime,
    })
}

fn aggregate_function_from_wire(value: i32) -> Result<AggregateFunction, DecodeError> {
    use protocol::AggregateFunction as W;
    let f = W::try_from(value).map_err(|_| DecodeError::UnknownVariant {
        entity: "AggregateFunction",
        value,
    })?;
    Ok(match f {
        W::Min => AggregateFunction::Min,
        W::Max => AggregateFunction::Max,
        W::Sum => AggregateFunction::Sum,
        W::Avg => AggregateFunction::Avg,
        W::Count => AggregateFunction::Count,
        W::ApproxDistinct => AggregateFunction::ApproxDistinct,
        W::ArrayAgg => AggregateFunction::ArrayAgg,
        W::Variance => AggregateFunction::Variance,
        W::VariancePop => AggregateFunction::VariancePop,
        W::Covariance => AggregateFunction::Covariance,
        W::CovariancePop => AggregateFunction::CovariancePop,
        W::Stddev => AggregateFunction::Stddev,
        W::StddevPop => AggregateFunction::StddevPop,
        W::Correlation => AggregateFunction::Correlation,
        W::ApproxPercentileCont => AggregateFunction::ApproxPercentileCont,
        W::ApproxMedian => AggregateFunction::ApproxMedian,
    })
}

fn scalar_function_from_wire(value: i32) -> Result<ScalarFunction, DecodeError> {
    use protocol::ScalarFunction as W;
    let f = W::try_from(value).map_err(|_| DecodeError::UnknownVariant {
        entity: "ScalarFunction",
        value,
    })?;
    Ok(match f {
        W::Sqrt => ScalarFunction::Sqrt,
        W::Sin => ScalarFunction::Sin,
        W::Cos => ScalarFunction::Cos,
        W::Tan => ScalarFunction::Tan,
        W::Asin => ScalarFunction::Asin,
        W::Acos => ScalarFunction::Acos,
        W::Atan => ScalarFunction::Atan,
        W::Exp => ScalarFunction::Exp,
        W::Log => ScalarFunction::Log,
        W::Log2 => ScalarFunction::Log2,
        W::Log10 => ScalarFunction::Log10,
        W::Floor => ScalarFunction::Floor,
        W::Ceil => ScalarFunction::Ceil,
        W::Round => ScalarFunction::Round,
        W::Trunc => ScalarFunction::Trunc,
        W::Abs => ScalarFunction::Abs,
        W::Signum => ScalarFunction::Signum,
        W::Octetlength => ScalarFunction::OctetLength,
        W::Concat => ScalarFunction::Concat,
        W::Lower => ScalarFunction::Lower,
        W::Upper => ScalarFunction::Upper,
        W::Trim => ScalarFunction::Trim,
        W::Ltrim => ScalarFunction::Ltrim,
        W::Rtrim => ScalarFunction::Rtrim,
        W::Totimestamp => ScalarFunction::ToTimestamp,
        W::Array => ScalarFunction::Array,
        W::Nullif => ScalarFunction::NullIf,
        W::Datepart => ScalarFunction::DatePart,
        W::Datetrunc => ScalarFunction::DateTrunc,
        W::Md5 => ScalarFunction::Md5,
        W::Sha224 => ScalarFunction::Sha224,
        W::Sha256 => ScalarFunction::Sha256,
        W::Sha384 => ScalarFunction::Sha384,
        W::Sha512 => ScalarFunction::Sha512,
        W::Ln => ScalarFunction::Ln,
        W::Totimestampmillis => ScalarFunction::ToTimestampMillis,
        W::Digest => ScalarFunction::Digest,
    })
}

fn built_in_window_function_from_wire(value: i32) -> Result<BuiltInWindowFunction, DecodeError> {
    use protocol::BuiltInWindowFunction as W;
    let f = W::try_from(value).map_err(|_| DecodeError::UnknownVariant {
        entity: "BuiltInWindowFunction",
        value,
    })?;
    Ok(match f {
        W::RowNumber => BuiltInWindowFunction::RowNumber,
        W::Rank => BuiltInWindowFunction::Rank,
        W::DenseRank => BuiltInWindowFunction::DenseRank,
        W::PercentRank => BuiltInWindowFunction::PercentRank,
        W::CumeDist => BuiltInWindowFunction::CumeDist,
        W::Ntile => BuiltInWindowFunction::Ntile,
        W::Lag => BuiltInWindowFunction::Lag,
        W::Lead => BuiltInWindowFunction::Lead,
        W::FirstValue => BuiltInWindowFunction::FirstValue,
        W::LastValue => BuiltInWindowFunction::LastValue,
        W::NthValue => BuiltInWindowFunction::NthValue,
    })
}
