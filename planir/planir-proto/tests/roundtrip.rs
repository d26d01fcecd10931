//! Round-trip coverage: for every constructible value, decode(encode(v))
//! must reproduce a structurally equal value.

use planir_core::{
    AggregateFunction, BuiltInWindowFunction, Column, DataType, DfField, DfSchema, Expr, Field,
    IntervalUnit, PrimitiveScalarType, ScalarFunction, ScalarListValue, ScalarType, ScalarValue,
    Schema, TimeUnit, WindowFrame, WindowFrameBound, WindowFrameUnits, WindowFunction, col, lit,
};
use planir_proto::{
    decode_data_type, decode_df_schema, decode_expr, decode_field, decode_scalar_value,
    decode_schema, decode_window_frame, encode_data_type, encode_df_schema, encode_expr,
    encode_field, encode_scalar_value, encode_schema, encode_window_frame,
};

fn assert_data_type_roundtrip(dt: DataType) {
    let decoded = decode_data_type(&encode_data_type(&dt)).unwrap();
    assert_eq!(decoded, dt);
}

fn assert_scalar_roundtrip(v: ScalarValue) {
    let decoded = decode_scalar_value(&encode_scalar_value(&v)).unwrap();
    assert_eq!(decoded, v);
}

fn assert_expr_roundtrip(e: Expr) {
    let decoded = decode_expr(&encode_expr(&e)).unwrap();
    assert_eq!(decoded, e);
}

#[test]
fn data_type_roundtrip_every_flat_variant() {
    for dt in [
        DataType::Null,
        DataType::Boolean,
        DataType::Int8,
        DataType::Int16,
        DataType::Int32,
        DataType::Int64,
        DataType::UInt8,
        DataType::UInt16,
        DataType::UInt32,
        DataType::UInt64,
        DataType::Float16,
        DataType::Float32,
        DataType::Float64,
        DataType::Utf8,
        DataType::LargeUtf8,
        DataType::Binary,
        DataType::LargeBinary,
        DataType::FixedSizeBinary(16),
        DataType::Date32,
        DataType::Date64,
        DataType::Duration(TimeUnit::Millisecond),
        DataType::Timestamp(TimeUnit::Nanosecond, None),
        DataType::Timestamp(TimeUnit::Microsecond, Some("UTC".to_string())),
        DataType::Time32(TimeUnit::Second),
        DataType::Time64(TimeUnit::Nanosecond),
        DataType::Interval(IntervalUnit::YearMonth),
        DataType::Interval(IntervalUnit::DayTime),
        DataType::Decimal {
            whole: 38,
            fractional: 10,
        },
    ] {
        assert_data_type_roundtrip(dt);
    }
}

#[test]
fn data_type_roundtrip_nested_variants() {
    let item = Field::new("item", DataType::Int32, true);
    assert_data_type_roundtrip(DataType::List(Box::new(item.clone())));
    assert_data_type_roundtrip(DataType::LargeList(Box::new(item.clone())));
    assert_data_type_roundtrip(DataType::FixedSizeList(Box::new(item.clone()), 4));
    assert_data_type_roundtrip(DataType::Struct(vec![
        Field::new("x", DataType::Int32, false),
        Field::new("y", DataType::Utf8, true),
    ]));
    assert_data_type_roundtrip(DataType::Union(vec![
        Field::new("i", DataType::Int64, true),
        Field::new("f", DataType::Float64, true),
    ]));
    assert_data_type_roundtrip(DataType::Dictionary(
        Box::new(DataType::Int32),
        Box::new(DataType::Utf8),
    ));
    // dictionary of list of struct, three levels deep
    assert_data_type_roundtrip(DataType::Dictionary(
        Box::new(DataType::Int8),
        Box::new(DataType::List(Box::new(Field::new(
            "item",
            DataType::Struct(vec![Field::new("v", DataType::Float32, true)]),
            true,
        )))),
    ));
    assert_data_type_roundtrip(DataType::Struct(vec![]));
}

#[test]
fn nested_struct_field_preserves_children_and_order() {
    let field = Field::new(
        "point",
        DataType::Struct(vec![
            Field::new("x", DataType::Int32, false),
            Field::new("y", DataType::Int32, false),
        ]),
        false,
    )
    .with_children(vec![
        Field::new("x", DataType::Int32, false),
        Field::new("y", DataType::Int32, false),
    ]);

    let decoded = decode_field(&encode_field(&field)).unwrap();
    assert_eq!(decoded, field);
    assert_eq!(decoded.children[0].name, "x");
    assert_eq!(decoded.children[1].name, "y");
    assert!(!decoded.children[0].nullable);
    assert!(!decoded.children[1].nullable);
}

#[test]
fn schema_roundtrip_preserves_column_order() {
    let schema = Schema::new(vec![
        Field::new("c", DataType::Utf8, true),
        Field::new("a", DataType::Int64, false),
        Field::new("b", DataType::Float64, true),
    ]);
    let decoded = decode_schema(&encode_schema(&schema)).unwrap();
    assert_eq!(decoded, schema);
    let names: Vec<_> = decoded.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["c", "a", "b"]);
}

#[test]
fn empty_schema_roundtrips() {
    let decoded = decode_schema(&encode_schema(&Schema::default())).unwrap();
    assert!(decoded.fields.is_empty());
}

#[test]
fn df_schema_roundtrip_keeps_qualifiers_independent_of_nullability() {
    let schema = DfSchema::new(vec![
        DfField::new(Field::new("id", DataType::Int64, false), Some("orders")),
        DfField::new(Field::new("note", DataType::Utf8, true), None::<&str>),
    ]);
    let decoded = decode_df_schema(&encode_df_schema(&schema)).unwrap();
    assert_eq!(decoded, schema);
    assert_eq!(decoded.fields[0].qualifier.as_deref(), Some("orders"));
    assert_eq!(decoded.fields[1].qualifier, None);
}

#[test]
fn scalar_roundtrip_every_primitive_variant() {
    for v in [
        ScalarValue::Boolean(true),
        ScalarValue::Boolean(false),
        ScalarValue::Utf8(String::new()),
        ScalarValue::Utf8("hello".to_string()),
        ScalarValue::LargeUtf8("big".to_string()),
        ScalarValue::Int8(i8::MIN),
        ScalarValue::Int8(i8::MAX),
        ScalarValue::Int16(i16::MIN),
        ScalarValue::Int32(0),
        ScalarValue::Int32(i32::MIN),
        ScalarValue::Int64(i64::MAX),
        ScalarValue::Int64(i64::MIN),
        ScalarValue::UInt8(u8::MAX),
        ScalarValue::UInt16(u16::MAX),
        ScalarValue::UInt32(u32::MAX),
        ScalarValue::UInt64(u64::MAX),
        ScalarValue::Float32(0.0),
        ScalarValue::Float32(f32::MIN_POSITIVE),
        ScalarValue::Float64(-1234.5),
        ScalarValue::Date32(-719_162),
        ScalarValue::Date64(1_640_995_200_000),
        ScalarValue::TimeSecond(86_399),
        ScalarValue::TimeMillisecond(1),
        ScalarValue::TimeMicrosecond(0),
        ScalarValue::TimeNanosecond(i64::MAX),
        ScalarValue::IntervalYearMonth(-14),
        ScalarValue::IntervalDayTime(1 << 40),
    ] {
        assert_scalar_roundtrip(v);
    }
}

#[test]
fn scalar_roundtrip_typed_nulls() {
    assert_scalar_roundtrip(ScalarValue::Null(PrimitiveScalarType::Bool));
    assert_scalar_roundtrip(ScalarValue::Null(PrimitiveScalarType::Utf8));
    assert_scalar_roundtrip(ScalarValue::Null(PrimitiveScalarType::IntervalDayTime));
    assert_scalar_roundtrip(ScalarValue::NullList(ScalarType::Primitive(
        PrimitiveScalarType::Int64,
    )));
    assert_scalar_roundtrip(ScalarValue::NullList(ScalarType::List(Box::new(
        ScalarType::Primitive(PrimitiveScalarType::Utf8),
    ))));
}

#[test]
fn empty_list_preserves_declared_element_type() {
    let list = ScalarValue::List(ScalarListValue::new(
        ScalarType::Primitive(PrimitiveScalarType::Float64),
        vec![],
    ));
    let decoded = decode_scalar_value(&encode_scalar_value(&list)).unwrap();
    let ScalarValue::List(lv) = decoded else {
        panic!("expected List");
    };
    assert_eq!(
        lv.element_type,
        ScalarType::Primitive(PrimitiveScalarType::Float64)
    );
    assert!(lv.values.is_empty());
}

#[test]
fn homogeneous_list_roundtrips() {
    let list = ScalarValue::List(ScalarListValue::new(
        ScalarType::Primitive(PrimitiveScalarType::Int32),
        vec![
            ScalarValue::Int32(1),
            ScalarValue::Null(PrimitiveScalarType::Int32),
            ScalarValue::Int32(-3),
        ],
    ));
    assert_scalar_roundtrip(list);
}

#[test]
fn nested_list_of_lists_roundtrips() {
    let inner_type = ScalarType::Primitive(PrimitiveScalarType::Utf8);
    let list = ScalarValue::List(ScalarListValue::new(
        ScalarType::List(Box::new(inner_type.clone())),
        vec![
            ScalarValue::List(ScalarListValue::new(
                inner_type.clone(),
                vec![ScalarValue::Utf8("a".to_string())],
            )),
            ScalarValue::NullList(inner_type),
        ],
    ));
    assert_scalar_roundtrip(list);
}

#[test]
fn expr_roundtrip_terminals() {
    assert_expr_roundtrip(Expr::Column(Column::new(Some("t1"), "a")));
    assert_expr_roundtrip(Expr::Column(Column::from_name("a")));
    assert_expr_roundtrip(lit(ScalarValue::Utf8("x".to_string())));
    assert_expr_roundtrip(Expr::Wildcard);
}

#[test]
fn binary_comparison_scenario() {
    let bytes = encode_expr(&col("a").eq(lit(ScalarValue::Int32(5))));
    let decoded = decode_expr(&bytes).unwrap();
    let Expr::BinaryExpr { left, op, right } = decoded else {
        panic!("expected BinaryExpr");
    };
    assert_eq!(op, "=");
    assert_eq!(*left, Expr::Column(Column::from_name("a")));
    assert_eq!(*right, Expr::Literal(ScalarValue::Int32(5)));
}

#[test]
fn expr_roundtrip_unary_variants() {
    let inner = col("flag");
    assert_expr_roundtrip(Expr::Not(Box::new(inner.clone())));
    assert_expr_roundtrip(Expr::IsNull(Box::new(inner.clone())));
    assert_expr_roundtrip(Expr::IsNotNull(Box::new(inner.clone())));
    assert_expr_roundtrip(Expr::Negative(Box::new(col("x"))));
    assert_expr_roundtrip(inner.alias("renamed"));
}

#[test]
fn expr_roundtrip_between_and_in_list() {
    assert_expr_roundtrip(Expr::Between {
        expr: Box::new(col("v")),
        negated: true,
        low: Box::new(lit(ScalarValue::Int64(0))),
        high: Box::new(lit(ScalarValue::Int64(100))),
    });
    assert_expr_roundtrip(Expr::InList {
        expr: Box::new(col("id")),
        list: vec![
            lit(ScalarValue::Int32(1)),
            lit(ScalarValue::Int32(2)),
            lit(ScalarValue::Int32(3)),
        ],
        negated: false,
    });
    assert_expr_roundtrip(Expr::InList {
        expr: Box::new(col("id")),
        list: vec![],
        negated: true,
    });
}

#[test]
fn expr_roundtrip_case_variants() {
    assert_expr_roundtrip(Expr::Case {
        expr: None,
        when_then: vec![(
            col("a").gt(lit(ScalarValue::Int32(0))),
            lit(ScalarValue::Utf8("pos".to_string())),
        )],
        else_expr: None,
    });
    assert_expr_roundtrip(Expr::Case {
        expr: Some(Box::new(col("grade"))),
        when_then: vec![
            (lit(ScalarValue::Int32(1)), lit(ScalarValue::Utf8("a".into()))),
            (lit(ScalarValue::Int32(2)), lit(ScalarValue::Utf8("b".into()))),
        ],
        else_expr: Some(Box::new(lit(ScalarValue::Utf8("f".into())))),
    });
}

#[test]
fn expr_roundtrip_casts_and_sort() {
    assert_expr_roundtrip(Expr::Cast {
        expr: Box::new(col("s")),
        data_type: DataType::Timestamp(TimeUnit::Nanosecond, Some("UTC".to_string())),
    });
    assert_expr_roundtrip(Expr::TryCast {
        expr: Box::new(col("s")),
        data_type: DataType::Decimal {
            whole: 12,
            fractional: 4,
        },
    });
    assert_expr_roundtrip(col("ts").sort(true, false));
}

#[test]
fn expr_roundtrip_function_calls() {
    assert_expr_roundtrip(Expr::ScalarFunction {
        fun: ScalarFunction::Sqrt,
        args: vec![col("x")],
    });
    assert_expr_roundtrip(Expr::ScalarFunction {
        fun: ScalarFunction::Digest,
        args: vec![col("x"), lit(ScalarValue::Utf8("sha256".to_string()))],
    });
    assert_expr_roundtrip(Expr::AggregateFunction {
        fun: AggregateFunction::Min,
        args: vec![col("v")],
    });
    assert_expr_roundtrip(Expr::AggregateFunction {
        fun: AggregateFunction::ApproxMedian,
        args: vec![col("v")],
    });
}

#[test]
fn expr_roundtrip_window_variants() {
    assert_expr_roundtrip(Expr::WindowFunction {
        fun: WindowFunction::BuiltIn(BuiltInWindowFunction::NthValue),
        args: vec![col("v"), lit(ScalarValue::Int64(2))],
        partition_by: vec![col("dept")],
        order_by: vec![col("salary").sort(false, false)],
        frame: Some(WindowFrame::new(
            WindowFrameUnits::Range,
            WindowFrameBound::Preceding(10),
            Some(WindowFrameBound::Following(10)),
        )),
    });
    assert_expr_roundtrip(Expr::WindowFunction {
        fun: WindowFunction::Aggregate(AggregateFunction::Sum),
        args: vec![col("v")],
        partition_by: vec![],
        order_by: vec![],
        frame: None,
    });
}

#[test]
fn deeply_mixed_expression_roundtrips() {
    // exercises expressions, scalars, and types nested through each other
    let expr = Expr::Case {
        expr: None,
        when_then: vec![(
            Expr::InList {
                expr: Box::new(Expr::Cast {
                    expr: Box::new(col("raw")),
                    data_type: DataType::List(Box::new(Field::new("item", DataType::Int32, true))),
                }),
                list: vec![lit(ScalarValue::List(ScalarListValue::new(
                    ScalarType::Primitive(PrimitiveScalarType::Int32),
                    vec![ScalarValue::Int32(1), ScalarValue::Int32(2)],
                )))],
                negated: false,
            },
            col("then_col").alias("result"),
        )],
        else_expr: Some(Box::new(Expr::Negative(Box::new(col("fallback"))))),
    };
    assert_expr_roundtrip(expr);
}

#[test]
fn window_frame_roundtrip_with_and_without_end_bound() {
    for frame in [
        WindowFrame::new(
            WindowFrameUnits::Rows,
            WindowFrameBound::Preceding(0),
            Some(WindowFrameBound::Following(0)),
        ),
        WindowFrame::new(WindowFrameUnits::Range, WindowFrameBound::CurrentRow, None),
        WindowFrame::new(
            WindowFrameUnits::Groups,
            WindowFrameBound::Preceding(u64::MAX),
            Some(WindowFrameBound::CurrentRow),
        ),
    ] {
        let decoded = decode_window_frame(&encode_window_frame(&frame)).unwrap();
        assert_eq!(decoded, frame);
    }
}

#[test]
fn absent_end_bound_is_distinct_from_zero_valued_bound() {
    let without = WindowFrame::new(WindowFrameUnits::Rows, WindowFrameBound::CurrentRow, None);
    let with_zero = WindowFrame::new(
        WindowFrameUnits::Rows,
        WindowFrameBound::CurrentRow,
        Some(WindowFrameBound::Following(0)),
    );
    let a = decode_window_frame(&encode_window_frame(&without)).unwrap();
    let b = decode_window_frame(&encode_window_frame(&with_zero)).unwrap();
    assert_eq!(a.end_bound, None);
    assert_eq!(b.end_bound, Some(WindowFrameBound::Following(0)));
    assert_ne!(a, b);
}
