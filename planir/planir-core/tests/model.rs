use planir_core::{
    AggregateFunction, BuiltInWindowFunction, Column, DataType, DfField, DfSchema, Expr, Field,
    PrimitiveScalarType, ScalarListValue, ScalarType, ScalarValue, Schema, SchemaError,
    WindowFrame, WindowFrameBound, WindowFrameUnits, WindowFunction, col, lit,
};

#[test]
fn field_new_sets_all_fields() {
    let field = Field::new("count", DataType::Int64, false);
    assert_eq!(field.name, "count");
    assert!(matches!(field.data_type, DataType::Int64));
    assert!(!field.nullable);
    assert!(field.children.is_empty());
}

#[test]
fn field_with_children_attaches_children() {
    let field = Field::new(
        "point",
        DataType::Struct(vec![
            Field::new("x", DataType::Int32, false),
            Field::new("y", DataType::Int32, false),
        ]),
        true,
    )
    .with_children(vec![
        Field::new("x", DataType::Int32, false),
        Field::new("y", DataType::Int32, false),
    ]);
    assert_eq!(field.children.len(), 2);
    assert_eq!(field.children[0].name, "x");
    assert_eq!(field.children[1].name, "y");
}

#[test]
fn data_type_is_nested() {
    assert!(!DataType::Int32.is_nested());
    assert!(!DataType::Utf8.is_nested());
    assert!(!DataType::FixedSizeBinary(16).is_nested());
    assert!(DataType::Struct(vec![]).is_nested());
    assert!(DataType::List(Box::new(Field::new("item", DataType::Int8, true))).is_nested());
    assert!(
        DataType::Dictionary(Box::new(DataType::Int32), Box::new(DataType::Utf8)).is_nested()
    );
}

#[test]
fn data_type_is_numeric() {
    assert!(DataType::Int8.is_numeric());
    assert!(DataType::Float64.is_numeric());
    assert!(
        DataType::Decimal {
            whole: 10,
            fractional: 2
        }
        .is_numeric()
    );
    assert!(!DataType::Utf8.is_numeric());
    assert!(!DataType::Boolean.is_numeric());
}

#[test]
fn schema_field_with_name_finds_field() {
    let schema = Schema::new(vec![
        Field::new("a", DataType::Int32, false),
        Field::new("b", DataType::Utf8, true),
    ]);
    let field = schema.field_with_name("b").unwrap();
    assert!(matches!(field.data_type, DataType::Utf8));
}

#[test]
fn schema_field_with_name_reports_missing_field() {
    let schema = Schema::new(vec![Field::new("a", DataType::Int32, false)]);
    let err = schema.field_with_name("missing").unwrap_err();
    assert!(matches!(err, SchemaError::FieldNotFound { name, .. } if name == "missing"));
}

#[test]
fn df_schema_qualified_lookup_matches_both_components() {
    let schema = DfSchema::new(vec![
        DfField::new(Field::new("id", DataType::Int64, false), Some("orders")),
        DfField::new(
            Field::new("id", DataType::Int64, false),
            Some("customers"),
        ),
        DfField::new(Field::new("total", DataType::Float64, true), None::<&str>),
    ]);
    let found = schema.field_with_qualified_name("customers", "id").unwrap();
    assert_eq!(found.qualifier.as_deref(), Some("customers"));
    assert!(schema.field_with_qualified_name("orders", "total").is_err());
}

#[test]
fn column_equality_is_componentwise() {
    let a = Column::new(Some("t"), "x");
    let b = Column::new(Some("t"), "x");
    let c = Column::from_name("x");
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn column_display_includes_qualifier() {
    assert_eq!(Column::new(Some("t"), "x").to_string(), "t.x");
    assert_eq!(Column::from_name("x").to_string(), "x");
}

#[test]
fn scalar_type_of_list_reflects_declared_element_type() {
    let list = ScalarValue::List(ScalarListValue::new(
        ScalarType::Primitive(PrimitiveScalarType::Int32),
        vec![],
    ));
    assert_eq!(
        list.scalar_type(),
        ScalarType::List(Box::new(ScalarType::Primitive(PrimitiveScalarType::Int32)))
    );
}

#[test]
fn scalar_type_of_typed_null_is_its_declared_type() {
    let null = ScalarValue::Null(PrimitiveScalarType::Float64);
    assert_eq!(
        null.scalar_type(),
        ScalarType::Primitive(PrimitiveScalarType::Float64)
    );
}

#[test]
fn expr_builders_produce_binary_tree() {
    let expr = col("a").eq(lit(ScalarValue::Int32(5)));
    let Expr::BinaryExpr { left, op, right } = expr else {
        panic!("expected BinaryExpr");
    };
    assert_eq!(op, "=");
    assert_eq!(*left, Expr::Column(Column::from_name("a")));
    assert_eq!(*right, Expr::Literal(ScalarValue::Int32(5)));
}

#[test]
fn expr_display_renders_sql_like_text() {
    let expr = col("a")
        .gt_eq(lit(ScalarValue::Int64(10)))
        .and(col("b").is_null());
    assert_eq!(expr.to_string(), "a >= 10 AND b IS NULL");

    let between = Expr::Between {
        expr: Box::new(col("x")),
        negated: true,
        low: Box::new(lit(ScalarValue::Int32(1))),
        high: Box::new(lit(ScalarValue::Int32(9))),
    };
    assert_eq!(between.to_string(), "x NOT BETWEEN 1 AND 9");
}

#[test]
fn window_expr_display_includes_over_clause() {
    let expr = Expr::WindowFunction {
        fun: WindowFunction::BuiltIn(BuiltInWindowFunction::RowNumber),
        args: vec![],
        partition_by: vec![col("dept")],
        order_by: vec![col("salary").sort(false, true)],
        frame: Some(WindowFrame::new(
            WindowFrameUnits::Rows,
            WindowFrameBound::Preceding(3),
            Some(WindowFrameBound::CurrentRow),
        )),
    };
    assert_eq!(
        expr.to_string(),
        "ROW_NUMBER() OVER (PARTITION BY dept ORDER BY salary DESC NULLS FIRST \
         ROWS BETWEEN 3 PRECEDING AND CURRENT ROW)"
    );
}

#[test]
fn aggregate_display_uses_sql_names() {
    let expr = Expr::AggregateFunction {
        fun: AggregateFunction::ApproxMedian,
        args: vec![col("v")],
    };
    assert_eq!(expr.to_string(), "APPROX_MEDIAN(v)");
}

#[test]
fn case_display_covers_all_clauses() {
    let expr = Expr::Case {
        expr: Some(Box::new(col("grade"))),
        when_then: vec![(lit(ScalarValue::Int32(1)), lit(ScalarValue::Utf8("a".into())))],
        else_expr: Some(Box::new(lit(ScalarValue::Utf8("f".into())))),
    };
    assert_eq!(expr.to_string(), "CASE grade WHEN 1 THEN 'a' ELSE 'f' END");
}
