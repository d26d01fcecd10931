//! Conversion from the logical model to wire bytes.
//!
//! Encoding a well-formed tree is total, so nothing here returns
//! `Result`. Recursive entities are emitted bottom-up over an explicit
//! work stack: each child record is encoded to bytes first and the
//! parent splices those bytes in as length-delimited fields, so
//! arbitrarily deep trees encode without native call recursion. Flat
//! records and the non-recursive parts of each node go through the
//! [`protocol`] structs.

use planir_core::{
    AggregateFunction, BuiltInWindowFunction, Column, DataType, DfSchema, Expr, Field,
    IntervalUnit, PrimitiveScalarType, ScalarFunction, ScalarType, ScalarValue, Schema, TimeUnit,
    WindowFrame, WindowFrameBound, WindowFunction,
};
use prost::Message;

use crate::decimal;
use crate::protocol;
use crate::protocol::arrow_type::ArrowTypeEnum;

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

/// Append a length-delimited field `tag` wrapping `payload`.
fn push_framed(out: &mut Vec<u8>, tag: u32, payload: &[u8]) {
    push_varint(out, (u64::from(tag) << 3) | 2);
    push_varint(out, payload.len() as u64);
    out.extend_from_slice(payload);
}

fn framed(tag: u32, payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(payload.len() + 8);
    push_framed(&mut out, tag, payload);
    out
}

pub(crate) fn expr_bytes(root: &Expr) -> Vec<u8> {
    enum Step<'a> {
        Enter(&'a Expr),
        Exit(&'a Expr),
    }
    let mut work = vec![Step::Enter(root)];
    let mut done: Vec<Vec<u8>> = Vec::new();
    while let Some(step) = work.pop() {
        match step {
            Step::Enter(e) => {
                work.push(Step::Exit(e));
                // reversed so the first child is encoded first
                for child in expr_children(e).into_iter().rev() {
                    work.push(Step::Enter(child));
                }
            }
            Step::Exit(e) => {
                let n = expr_children(e).len();
                let kids = done.split_off(done.len() - n);
                done.push(expr_record(e, kids));
            }
        }
    }
    done.pop().unwrap_or_default()
}

/// Child expressions in the order [`expr_record`] consumes their bytes.
fn expr_children<'a>(e: &'a Expr) -> Vec<&'a Expr> {
    match e {
        Expr::Column(_) | Expr::Literal(_) | Expr::Wildcard => Vec::new(),
        Expr::Alias(child, _)
        | Expr::IsNull(child)
        | Expr::IsNotNull(child)
        | Expr::Not(child)
        | Expr::Negative(child)
        | Expr::Cast { expr: child, .. }
        | Expr::TryCast { expr: child, .. }
        | Expr::Sort { expr: child, .. } => vec![child.as_ref()],
        Expr::BinaryExpr { left, right, .. } => vec![left.as_ref(), right.as_ref()],
        Expr::Between {
            expr, low, high, ..
        } => vec![expr.as_ref(), low.as_ref(), high.as_ref()],
        Expr::Case {
            expr,
            when_then,
            else_expr,
        } => expr
            .as_deref()
            .into_iter()
            .chain(when_then.iter().flat_map(|(w, t)| [w, t]))
            .chain(else_expr.as_deref())
            .collect(),
        Expr::InList { expr, list, .. } => {
            std::iter::once(expr.as_ref()).chain(list.iter()).collect()
        }
        Expr::ScalarFunction { args, .. } | Expr::AggregateFunction { args, .. } => {
            args.iter().collect()
        }
        Expr::WindowFunction {
            args,
            partition_by,
            order_by,
            ..
        } => args
            .iter()
            .chain(partition_by.iter())
            .chain(order_by.iter())
            .collect(),
    }
}

/// One encoded `LogicalExprNode`, given the already-encoded children.
fn expr_record(e: &Expr, kids: Vec<Vec<u8>>) -> Vec<u8> {
    use crate::protocol::logical_expr_node::ExprType;
    match e {
        Expr::Column(c) => protocol::LogicalExprNode {
            expr_type: Some(ExprType::Column(column_to_wire(c))),
        }
        .encode_to_vec(),
        Expr::Wildcard => protocol::LogicalExprNode {
            expr_type: Some(ExprType::Wildcard(true)),
        }
        .encode_to_vec(),
        Expr::Literal(v) => framed(3, &scalar_bytes(v)),
        Expr::Alias(_, alias) => {
            let mut inner = framed(1, &kids[0]);
            inner.extend(
                protocol::AliasNode {
                    expr: None,
                    alias: alias.clone(),
                }
                .encode_to_vec(),
            );
            framed(2, &inner)
        }
        Expr::BinaryExpr { op, .. } => {
            let mut inner = framed(1, &kids[0]);
            push_framed(&mut inner, 2, &kids[1]);
            inner.extend(
                protocol::BinaryExprNode {
                    l: None,
                    r: None,
                    op: op.clone(),
                }
                .encode_to_vec(),
            );
            framed(4, &inner)
        }
        Expr::IsNull(_) => framed(6, &framed(1, &kids[0])),
        Expr::IsNotNull(_) => framed(7, &framed(1, &kids[0])),
        Expr::Not(_) => framed(8, &framed(1, &kids[0])),
        Expr::Negative(_) => framed(13, &framed(1, &kids[0])),
        Expr::Between { negated, .. } => {
            let mut inner = framed(1, &kids[0]);
            inner.extend(
                protocol::BetweenNode {
                    expr: None,
                    negated: *negated,
                    low: None,
                    high: None,
                }
                .encode_to_vec(),
            );
            push_framed(&mut inner, 3, &kids[1]);
            push_framed(&mut inner, 4, &kids[2]);
            framed(9, &inner)
        }
        Expr::Case {
            expr,
            when_then,
            else_expr,
        } => {
            let mut kids = kids.into_iter();
            let mut inner = Vec::new();
            if expr.is_some() {
                push_framed(&mut inner, 1, &kids.next().unwrap_or_default());
            }
            for _ in when_then {
                let mut pair = framed(1, &kids.next().unwrap_or_default());
                push_framed(&mut pair, 2, &kids.next().unwrap_or_default());
                push_framed(&mut inner, 2, &pair);
            }
            if else_expr.is_some() {
                push_framed(&mut inner, 3, &kids.next().unwrap_or_default());
            }
            framed(10, &inner)
        }
        Expr::Cast { data_type, .. } => {
            let mut inner = framed(1, &kids[0]);
            push_framed(&mut inner, 2, &data_type_bytes(data_type));
            framed(11, &inner)
        }
        Expr::TryCast { data_type, .. } => {
            let mut inner = framed(1, &kids[0]);
            push_framed(&mut inner, 2, &data_type_bytes(data_type));
            framed(17, &inner)
        }
        Expr::Sort {
            asc, nulls_first, ..
        } => {
            let mut inner = framed(1, &kids[0]);
            inner.extend(
                protocol::SortExprNode {
                    expr: None,
                    asc: *asc,
                    nulls_first: *nulls_first,
                }
                .encode_to_vec(),
            );
            framed(12, &inner)
        }
        Expr::InList { negated, .. } => {
            let mut inner = framed(1, &kids[0]);
            for k in &kids[1..] {
                push_framed(&mut inner, 2, k);
            }
            inner.extend(
                protocol::InListNode {
                    expr: None,
                    list: vec![],
                    negated: *negated,
                }
                .encode_to_vec(),
            );
            framed(14, &inner)
        }
        Expr::ScalarFunction { fun, .. } => {
            let mut inner = protocol::ScalarFunctionNode {
                fun: scalar_function_to_wire(*fun) as i32,
                args: vec![],
            }
            .encode_to_vec();
            for k in &kids {
                push_framed(&mut inner, 2, k);
            }
            framed(16, &inner)
        }
        Expr::AggregateFunction { fun, .. } => {
            let mut inner = protocol::AggregateExprNode {
                aggr_function: aggregate_function_to_wire(*fun) as i32,
                expr: vec![],
            }
            .encode_to_vec();
            for k in &kids {
                push_framed(&mut inner, 2, k);
            }
            framed(5, &inner)
        }
        Expr::WindowFunction {
            fun,
            args,
            partition_by,
            frame,
            ..
        } => {
            let window_function = match fun {
                WindowFunction::Aggregate(f) => {
                    protocol::window_expr_node::WindowFunction::AggrFunction(
                        aggregate_function_to_wire(*f) as i32,
                    )
                }
                WindowFunction::BuiltIn(f) => {
                    protocol::window_expr_node::WindowFunction::BuiltInFunction(
                        built_in_window_function_to_wire(*f) as i32,
                    )
                }
            };
            let mut inner = protocol::WindowExprNode {
                window_function: Some(window_function),
                expr: vec![],
                partition_by: vec![],
                order_by: vec![],
                window_frame: frame
                    .as_ref()
                    .map(|f| protocol::window_expr_node::WindowFrame::Frame(window_frame_to_wire(f))),
            }
            .encode_to_vec();
            let args_end = args.len();
            let partition_end = args_end + partition_by.len();
            for k in &kids[..args_end] {
                push_framed(&mut inner, 4, k);
            }
            for k in &kids[args_end..partition_end] {
                push_framed(&mut inner, 5, k);
            }
            for k in &kids[partition_end..] {
                push_framed(&mut inner, 6, k);
            }
            framed(18, &inner)
        }
    }
}

pub(crate) fn data_type_bytes(dt: &DataType) -> Vec<u8> {
    run_type_machine(TypeStep::EnterType(dt))
}

pub(crate) fn field_bytes(field: &Field) -> Vec<u8> {
    run_type_machine(TypeStep::EnterField(field))
}

pub(crate) fn schema_bytes(schema: &Schema) -> Vec<u8> {
    let mut out = Vec::new();
    for f in &schema.fields {
        push_framed(&mut out, 1, &field_bytes(f));
    }
    out
}

pub(crate) fn df_schema_bytes(schema: &DfSchema) -> Vec<u8> {
    let mut out = Vec::new();
    for df in &schema.fields {
        let mut inner = framed(1, &field_bytes(&df.field));
        inner.extend(
            protocol::DfField {
                field: None,
                qualifier: df.qualifier.as_ref().map(|q| protocol::ColumnRelation {
                    relation: q.clone(),
                }),
            }
            .encode_to_vec(),
        );
        push_framed(&mut out, 1, &inner);
    }
    out
}

enum TypeStep<'a> {
    EnterType(&'a DataType),
    ExitType(&'a DataType),
    EnterField(&'a Field),
    ExitField(&'a Field),
}

fn run_type_machine(init: TypeStep<'_>) -> Vec<u8> {
    let mut work = vec![init];
    let mut done: Vec<Vec<u8>> = Vec::new();
    while let Some(step) = work.pop() {
        match step {
            TypeStep::EnterType(dt) => {
                work.push(TypeStep::ExitType(dt));
                match dt {
                    DataType::List(f) | DataType::LargeList(f) | DataType::FixedSizeList(f, _) => {
                        work.push(TypeStep::EnterField(f.as_ref()));
                    }
                    DataType::Struct(fs) | DataType::Union(fs) => {
                        for f in fs.iter().rev() {
                            work.push(TypeStep::EnterField(f));
                        }
                    }
                    DataType::Dictionary(key, value) => {
                        work.push(TypeStep::EnterType(value.as_ref()));
                        work.push(TypeStep::EnterType(key.as_ref()));
                    }
                    _ => {}
                }
            }
            TypeStep::ExitType(dt) => {
                let bytes = match dt {
                    DataType::List(_) => {
                        let kid = done.pop().unwrap_or_default();
                        framed(25, &framed(1, &kid))
                    }
                    DataType::LargeList(_) => {
                        let kid = done.pop().unwrap_or_default();
                        framed(26, &framed(1, &kid))
                    }
                    DataType::FixedSizeList(_, size) => {
                        let kid = done.pop().unwrap_or_default();
                        let mut inner = framed(1, &kid);
                        inner.extend(
                            protocol::FixedSizeList {
                                field_type: None,
                                list_size: *size,
                            }
                            .encode_to_vec(),
                        );
                        framed(27, &inner)
                    }
                    DataType::Struct(fs) => {
                        let kids = done.split_off(done.len() - fs.len());
                        let mut inner = Vec::new();
                        for k in &kids {
                            push_framed(&mut inner, 1, k);
                        }
                        framed(28, &inner)
                    }
                    DataType::Union(fs) => {
                        let kids = done.split_off(done.len() - fs.len());
                        let mut inner = Vec::new();
                        for k in &kids {
                            push_framed(&mut inner, 1, k);
                        }
                        framed(29, &inner)
                    }
                    DataType::Dictionary(_, _) => {
                        let kids = done.split_off(done.len() - 2);
                        let mut inner = framed(1, &kids[0]);
                        push_framed(&mut inner, 2, &kids[1]);
                        framed(30, &inner)
                    }
                    flat => flat_arrow_arm(flat)
                        .map(|arm| {
                            protocol::ArrowType {
                                arrow_type_enum: Some(arm),
                            }
                            .encode_to_vec()
                        })
                        .unwrap_or_default(),
                };
                done.push(bytes);
            }
            TypeStep::EnterField(f) => {
                work.push(TypeStep::ExitField(f));
                for c in f.children.iter().rev() {
                    work.push(TypeStep::EnterField(c));
                }
                work.push(TypeStep::EnterType(&f.data_type));
            }
            TypeStep::ExitField(f) => {
                let kids = done.split_off(done.len() - 1 - f.children.len());
                let mut bytes = protocol::Field {
                    name: f.name.clone(),
                    arrow_type: None,
                    nullable: f.nullable,
                    children: vec![],
                }
                .encode_to_vec();
                push_framed(&mut bytes, 2, &kids[0]);
                for k in &kids[1..] {
                    push_framed(&mut bytes, 4, k);
                }
                done.push(bytes);
            }
        }
    }
    done.pop().unwrap_or_default()
}

/// Wire arm for the types that embed no child field or type.
fn flat_arrow_arm(dt: &DataType) -> Option<ArrowTypeEnum> {
    let empty = protocol::EmptyMessage {};
    let arm = match dt {
        DataType::Null => ArrowTypeEnum::None(empty),
        DataType::Boolean => ArrowTypeEnum::Bool(empty),
        DataType::UInt8 => ArrowTypeEnum::Uint8(empty),
        DataType::Int8 => ArrowTypeEnum::Int8(empty),
        DataType::UInt16 => ArrowTypeEnum::Uint16(empty),
        DataType::Int16 => ArrowTypeEnum::Int16(empty),
        DataType::UInt32 => ArrowTypeEnum::Uint32(empty),
        DataType::Int32 => ArrowTypeEnum::Int32(empty),
        DataType::UInt64 => ArrowTypeEnum::Uint64(empty),
        DataType::Int64 => ArrowTypeEnum::Int64(empty),
        DataType::Float16 => ArrowTypeEnum::Float16(empty),
        DataType::Float32 => ArrowTypeEnum::Float32(empty),
        DataType::Float64 => ArrowTypeEnum::Float64(empty),
        DataType::Utf8 => ArrowTypeEnum::Utf8(empty),
        DataType::LargeUtf8 => ArrowTypeEnum::LargeUtf8(empty),
        DataType::Binary => ArrowTypeEnum::Binary(empty),
        DataType::FixedSizeBinary(width) => ArrowTypeEnum::FixedSizeBinary(*width),
        DataType::LargeBinary => ArrowTypeEnum::LargeBinary(empty),
        DataType::Date32 => ArrowTypeEnum::Date32(empty),
        DataType::Date64 => ArrowTypeEnum::Date64(empty),
        DataType::Duration(unit) => ArrowTypeEnum::Duration(time_unit_to_wire(*unit) as i32),
        DataType::Timestamp(unit, timezone) => ArrowTypeEnum::Timestamp(protocol::Timestamp {
            time_unit: time_unit_to_wire(*unit) as i32,
            timezone: timezone.clone().unwrap_or_default(),
        }),
        DataType::Time32(unit) => ArrowTypeEnum::Time32(time_unit_to_wire(*unit) as i32),
        DataType::Time64(unit) => ArrowTypeEnum::Time64(time_unit_to_wire(*unit) as i32),
        DataType::Interval(unit) => ArrowTypeEnum::Interval(interval_unit_to_wire(*unit) as i32),
        DataType::Decimal { whole, fractional } => ArrowTypeEnum::Decimal(protocol::Decimal {
            whole: *whole,
            fractional: *fractional,
        }),
        DataType::List(_)
        | DataType::LargeList(_)
        | DataType::FixedSizeList(_, _)
        | DataType::Struct(_)
        | DataType::Union(_)
        | DataType::Dictionary(_, _) => return None,
    };
    Some(arm)
}

pub(crate) fn scalar_bytes(root: &ScalarValue) -> Vec<u8> {
    enum Step<'a> {
        Enter(&'a ScalarValue),
        Exit(&'a ScalarValue),
    }
    let mut work = vec![Step::Enter(root)];
    let mut done: Vec<Vec<u8>> = Vec::new();
    while let Some(step) = work.pop() {
        match step {
            Step::Enter(v) => {
                work.push(Step::Exit(v));
                if let ScalarValue::List(lv) = v {
                    for element in lv.values.iter().rev() {
                        work.push(Step::Enter(element));
                    }
                }
            }
            Step::Exit(v) => {
                let bytes = match v {
                    ScalarValue::List(lv) => {
                        let kids = done.split_off(done.len() - lv.values.len());
                        let mut inner = framed(1, &scalar_type_bytes(&lv.element_type));
                        for k in &kids {
                            push_framed(&mut inner, 2, k);
                        }
                        framed(17, &inner)
                    }
                    ScalarValue::NullList(t) => framed(18, &scalar_type_bytes(t)),
                    flat => flat_scalar_arm(flat)
                        .map(|arm| protocol::ScalarValue { value: Some(arm) }.encode_to_vec())
                        .unwrap_or_default(),
                };
                done.push(bytes);
            }
        }
    }
    done.pop().unwrap_or_default()
}

/// A declared element type is a chain of list wrappers around one
/// primitive, so it is emitted with a plain loop.
fn scalar_type_bytes(t: &ScalarType) -> Vec<u8> {
    let mut lists = 0usize;
    let mut cur = t;
    let primitive = loop {
        match cur {
            ScalarType::List(inner) => {
                lists += 1;
                cur = inner;
            }
            ScalarType::Primitive(p) => break *p,
        }
    };
    let mut bytes = protocol::ScalarType {
        datatype: Some(protocol::scalar_type::Datatype::Scalar(
            primitive_to_wire(primitive) as i32,
        )),
    }
    .encode_to_vec();
    for _ in 0..lists {
        bytes = framed(2, &bytes);
    }
    bytes
}

/// Wire arm for the scalar values that embed no child value.
fn flat_scalar_arm(value: &ScalarValue) -> Option<protocol::scalar_value::Value> {
    use protocol::scalar_value::Value;
    let arm = match value {
        ScalarValue::Boolean(v) => Value::BoolValue(*v),
        ScalarValue::Utf8(v) => Value::Utf8Value(v.clone()),
        ScalarValue::LargeUtf8(v) => Value::LargeUtf8Value(v.clone()),
        ScalarValue::Int8(v) => Value::Int8Value(i32::from(*v)),
        ScalarValue::Int16(v) => Value::Int16Value(i32::from(*v)),
        ScalarValue::Int32(v) => Value::Int32Value(*v),
        ScalarValue::Int64(v) => Value::Int64Value(*v),
        ScalarValue::UInt8(v) => Value::Uint8Value(u32::from(*v)),
        ScalarValue::UInt16(v) => Value::Uint16Value(u32::from(*v)),
        ScalarValue::UInt32(v) => Value::Uint32Value(*v),
        ScalarValue::UInt64(v) => Value::Uint64Value(*v),
        ScalarValue::Float32(v) => Value::Float32Value(*v),
        ScalarValue::Float64(v) => Value::Float64Value(*v),
        ScalarValue::Date32(v) => Value::Date32Value(*v),
        ScalarValue::Date64(v) => Value::Date64Value(*v),
        ScalarValue::TimeSecond(v) => Value::TimeSecondValue(*v),
        ScalarValue::TimeMillisecond(v) => Value::TimeMillisecondValue(*v),
        ScalarValue::TimeMicrosecond(v) => Value::TimeMicrosecondValue(*v),
        ScalarValue::TimeNanosecond(v) => Value::TimeNanosecondValue(*v),
        ScalarValue::IntervalYearMonth(v) => Value::IntervalYearmonthValue(*v),
        ScalarValue::IntervalDayTime(v) => Value::IntervalDaytimeValue(*v),
        ScalarValue::Null(t) => Value::NullValue(primitive_to_wire(*t) as i32),
        ScalarValue::Decimal128 {
            value,
            precision,
            scale,
        } => Value::Decimal128Value(protocol::Decimal128 {
            value: decimal::to_minimal_be_bytes(*value),
            p: *precision as i64,
            s: *scale as i64,
        }),
        ScalarValue::List(_) | ScalarValue::NullList(_) => return None,
    };
    Some(arm)
}

pub(crate) fn column_to_wire(column: &Column) -> protocol::Column {
    protocol::Column {
        name: column.name.clone(),
        relation: column.relation.as_ref().map(|r| protocol::ColumnRelation {
            relation: r.clone(),
        }),
    }
}

pub(crate) fn window_frame_to_wire(frame: &WindowFrame) -> protocol::WindowFrame {
    protocol::WindowFrame {
        window_frame_units: units_to_wire(frame.units) as i32,
        start_bound: Some(bound_to_wire(frame.start_bound)),
        end_bound: frame
            .end_bound
            .map(|b| protocol::window_frame::EndBound::Bound(bound_to_wire(b))),
    }
}

pub(crate) fn bound_to_wire(bound: WindowFrameBound) -> protocol::WindowFrameBound {
    let (bound_type, value) = match bound {
        WindowFrameBound::CurrentRow => (protocol::WindowFrameBoundType::CurrentRow, None),
        WindowFrameBound::Preceding(n) => (protocol::WindowFrameBoundType::Preceding, Some(n)),
        WindowFrameBound::Following(n) => (protocol::WindowFrameBoundType::Following, Some(n)),
    };
    protocol::WindowFrameBound {
        window_frame_bound_type: bound_type as i32,
        bound_value: value.map(protocol::window_frame_bound::BoundValue::Value),
    }
}

pub(crate) fn time_unit_to_wire(unit: TimeUnit) -> protocol::TimeUnit {
    match unit {
        TimeUnit::Second => protocol::TimeUnit::Second,
        TimeUnit::Millisecond => protocol::TimeUnit::Millisecond,
        TimeUnit::Microsecond => protocol::TimeUnit::Microsecond,
        TimeUnit::Nanosecond => protocol::TimeUnit::Nanosecond,
    }
}

pub(crate) fn interval_unit_to_wire(unit: IntervalUnit) -> protocol::IntervalUnit {
    match unit {
        IntervalUnit::YearMonth => protocol::IntervalUnit::YearMonth,
        IntervalUnit::DayTime => protocol::IntervalUnit::DayTime,
    }
}

pub(crate) fn units_to_wire(units: planir_core::WindowFrameUnits) -> protocol::WindowFrameUnits {
    use planir_core::WindowFrameUnits as U;
    match units {
        U::Rows => protocol::WindowFrameUnits::Rows,
        U::Range => protocol::WindowFrameUnits::Range,
        U::Groups => protocol::WindowFrameUnits::Groups,
    }
}

pub(crate) fn primitive_to_wire(p: PrimitiveScalarType) -> protocol::PrimitiveScalarType {
    use protocol::PrimitiveScalarType as W;
    match p {
        PrimitiveScalarType::Bool => W::Bool,
        PrimitiveScalarType::UInt8 => W::Uint8,
        PrimitiveScalarType::Int8 => W::Int8,
        PrimitiveScalarType::UInt16 => W::Uint16,
        PrimitiveScalarType::Int16 => W::Int16,
        PrimitiveScalarType::UInt32 => W::Uint32,
        PrimitiveScalarType::Int32 => W::Int32,
        PrimitiveScalarType::UInt64 => W::Uint64,
        PrimitiveScalarType::Int64 => W::Int64,
        PrimitiveScalarType::Float32 => W::Float32,
        PrimitiveScalarType::Float64 => W::Float64,
        PrimitiveScalarType::Utf8 => W::Utf8,
        PrimitiveScalarType::LargeUtf8 => W::LargeUtf8,
        PrimitiveScalarType::Date32 => W::Date32,
        PrimitiveScalarType::TimeMicrosecond => W::TimeMicrosecond,
        PrimitiveScalarType::TimeNanosecond => W::TimeNanosecond,
        PrimitiveScalarType::Null => W::Null,
        PrimitiveScalarType::Decimal128 => W::Decimal128,
        PrimitiveScalarType::Date64 => W::Date64,
        PrimitiveScalarType::TimeSecond => W::TimeSecond,
        PrimitiveScalarType::TimeMillisecond => W::TimeMillisecond,
        PrimitiveScalarType::IntervalYearMonth => W::IntervalYearmonth,
        PrimitiveScalarType::IntervalDayTime => W::IntervalDaytime,
    }
}

pub(crate) fn aggregate_function_to_wire(f: AggregateFunction) -> protocol::AggregateFunction {
    use protocol::AggregateFunction as W;
    match f {
        AggregateFunction::Min => W::Min,
        AggregateFunction::Max => W::Max,
        AggregateFunction::Sum => W::Sum,
        AggregateFunction::Avg => W::Avg,
        AggregateFunction::Count => W::Count,
        AggregateFunction::ApproxDistinct => W::ApproxDistinct,
        AggregateFunction::ArrayAgg => W::ArrayAgg,
        AggregateFunction::Variance => W::Variance,
        AggregateFunction::VariancePop => W::VariancePop,
        AggregateFunction::Covariance => W::Covariance,
        AggregateFunction::CovariancePop => W::CovariancePop,
        AggregateFunction::Stddev => W::Stddev,
        AggregateFunction::StddevPop => W::StddevPop,
        AggregateFunction::Correlation => W::Correlation,
        AggregateFunction::ApproxPercentileCont => W::ApproxPercentileCont,
        AggregateFunction::ApproxMedian => W::ApproxMedian,
    }
}

pub(crate) fn scalar_function_to_wire(f: ScalarFunction) -> protocol::ScalarFunction {
    use protocol::ScalarFunction as W;
    match f {
        ScalarFunction::Sqrt => W::Sqrt,
        ScalarFunction::Sin => W::Sin,
        ScalarFunction::Cos => W::Cos,
        ScalarFunction::Tan => W::Tan,
        ScalarFunction::Asin => W::Asin,
        ScalarFunction::Acos => W::Acos,
        ScalarFunction::Atan => W::Atan,
        ScalarFunction::Exp => W::Exp,
        ScalarFunction::Log => W::Log,
        ScalarFunction::Log2 => W::Log2,
        ScalarFunction::Log10 => W::Log10,
        ScalarFunction::Floor => W::Floor,
        ScalarFunction::Ceil => W::Ceil,
        ScalarFunction::Round => W::Round,
        ScalarFunction::Trunc => W::Trunc,
        ScalarFunction::Abs => W::Abs,
        ScalarFunction::Signum => W::Signum,
        ScalarFunction::OctetLength => W::Octetlength,
        ScalarFunction::Concat => W::Concat,
        ScalarFunction::Lower => W::Lower,
        ScalarFunction::Upper => W::Upper,
        ScalarFunction::Trim => W::Trim,
        ScalarFunction::Ltrim => W::Ltrim,
        ScalarFunction::Rtrim => W::Rtrim,
        ScalarFunction::ToTimestamp => W::Totimestamp,
        ScalarFunction::Array => W::Array,
        ScalarFunction::NullIf => W::Nullif,
        ScalarFunction::DatePart => W::Datepart,
        ScalarFunction::DateTrunc => W::Datetrunc,
        ScalarFunction::Md5 => W::Md5,
        ScalarFunction::Sha224 => W::Sha224,
        ScalarFunction::Sha256 => W::Sha256,
        ScalarFunction::Sha384 => W::Sha384,
        ScalarFunction::Sha512 => W::Sha512,
        ScalarFunction::Ln => W::Ln,
        ScalarFunction::ToTimestampMillis => W::Totimestampmillis,
        ScalarFunction::Digest => W::Digest,
    }
}

pub(crate) fn built_in_window_function_to_wire(
    f: BuiltInWindowFunction,
) -> protocol::BuiltInWindowFunction {
    use protocol::BuiltInWindowFunction as W;
    match f {
        BuiltInWindowFunction::RowNumber => W::RowNumber,
        BuiltInWindowFunction::Rank => W::Rank,
        BuiltInWindowFunction::DenseRank => W::DenseRank,
        BuiltInWindowFunction::PercentRank => W::PercentRank,
        BuiltInWindowFunction::CumeDist => W::CumeDist,
        BuiltInWindowFunction::Ntile => W::Ntile,
        BuiltInWindowFunction::Lag => W::Lag,
        BuiltInWindowFunction::Lead => W::Lead,
        BuiltInWindowFunction::FirstValue => W::FirstValue,
        BuiltInWindowFunction::LastValue => W::LastValue,
        BuiltInWindowFunction::NthValue => W::NthValue,
    }
}
