//! Nesting-depth validation for decoded wire trees.
//!
//! Runs over the wire structs with an explicit work stack before any
//! recursive conversion, so conversion recursion is always bounded by the
//! configured maximum and adversarially deep input cannot exhaust the
//! native stack.

use crate::error::DecodeError;
use crate::protocol;
use crate::protocol::arrow_type::ArrowTypeEnum;
use crate::protocol::logical_expr_node::ExprType;

enum Node<'a> {
    Expr(&'a protocol::LogicalExprNode),
    Type(&'a protocol::ArrowType),
    Field(&'a protocol::Field),
    Scalar(&'a protocol::ScalarValue),
    ScalarType(&'a protocol::ScalarType),
}

pub(crate) fn check_expr(node: &protocol::LogicalExprNode, max_depth: usize) -> Result<(), DecodeError> {
    check(vec![Node::Expr(node)], max_depth)
}

pub(crate) fn check_type(node: &protocol::ArrowType, max_depth: usize) -> Result<(), DecodeError> {
    check(vec![Node::Type(node)], max_depth)
}

pub(crate) fn check_field(node: &protocol::Field, max_depth: usize) -> Result<(), DecodeError> {
    check(vec![Node::Field(node)], max_depth)
}

pub(crate) fn check_schema(node: &protocol::Schema, max_depth: usize) -> Result<(), DecodeError> {
    check(node.columns.iter().map(Node::Field).collect(), max_depth)
}

pub(crate) fn check_df_schema(node: &protocol::DfSchema, max_depth: usize) -> Result<(), DecodeError> {
    let roots = node
        .columns
        .iter()
        .filter_map(|c| c.field.as_ref())
        .map(Node::Field)
        .collect();
    check(roots, max_depth)
}

pub(crate) fn check_scalar(node: &protocol::ScalarValue, max_depth: usize) -> Result<(), DecodeError> {
    check(vec![Node::Scalar(node)], max_depth)
}

fn check(roots: Vec<Node<'_>>, max_depth: usize) -> Result<(), DecodeError> {
    let mut stack: Vec<(Node<'_>, usize)> = roots.into_iter().map(|n| (n, 1)).collect();

    while let Some((node, depth)) = stack.pop() {
        if depth > max_depth {
            return Err(DecodeError::DepthExceeded { max_depth });
        }
        let child = depth + 1;
        match node {
            Node::Expr(e) => push_expr_children(e, child, &mut stack),
            Node::Type(t) => push_type_children(t, child, &mut stack),
            Node::Field(f) => {
                if let Some(t) = &f.arrow_type {
                    stack.push((Node::Type(t), child));
                }
                for c in &f.children {
                    stack.push((Node::Field(c), child));
                }
            }
            Node::Scalar(s) => push_scalar_children(s, child, &mut stack),
            Node::ScalarType(t) => {
                if let Some(protocol::scalar_type::Datatype::List(inner)) = &t.datatype {
                    stack.push((Node::ScalarType(inner), child));
                }
            }
        }
    }
    Ok(())
}

fn push_expr_children<'a>(
    e: &'a protocol::LogicalExprNode,
    depth: usize,
    stack: &mut Vec<(Node<'a>, usize)>,
) {
    let push_opt = |stack: &mut Vec<(Node<'a>, usize)>, e: &'a Option<Box<protocol::LogicalExprNode>>| {
        if let Some(e) = e {
            stack.push((Node::Expr(e), depth));
        }
    };
    match &e.expr_type {
        None => {}
        Some(ExprType::Column(_)) | Some(ExprType::Wildcard(_)) => {}
        Some(ExprType::Alias(n)) => push_opt(stack, &n.expr),
        Some(ExprType::Literal(v)) => stack.push((Node::Scalar(v), depth)),
        Some(ExprType::BinaryExpr(n)) => {
            push_opt(stack, &n.l);
            push_opt(stack, &n.r);
        }
        Some(ExprType::AggregateExpr(n)) => {
            stack.extend(n.expr.iter().map(|e| (Node::Expr(e), depth)));
        }
        Some(ExprType::IsNullExpr(n)) => push_opt(stack, &n.expr),
        Some(ExprType::IsNotNullExpr(n)) => push_opt(stack, &n.expr),
        Some(ExprType::NotExpr(n)) => push_opt(stack, &n.expr),
        Some(ExprType::Between(n)) => {
            push_opt(stack, &n.expr);
            push_opt(stack, &n.low);
            push_opt(stack, &n.high);
        }
        Some(ExprType::Case(n)) => {
            push_opt(stack, &n.expr);
            for wt in &n.when_then_expr {
                if let Some(w) = &wt.when_expr {
                    stack.push((Node::Expr(w), depth));
                }
                if let Some(t) = &wt.then_expr {
                    stack.push((Node::Expr(t), depth));
                }
            }
            push_opt(stack, &n.else_expr);
        }
        Some(ExprType::Cast(n)) => {
            push_opt(stack, &n.expr);
            if let Some(t) = &n.arrow_type {
                stack.push((Node::Type(t), depth));
            }
        }
        Some(ExprType::TryCast(n)) => {
            push_opt(stack, &n.expr);
            if let Some(t) = &n.arrow_type {
                stack.push((Node::Type(t), depth));
            }
        }
        Some(ExprType::Sort(n)) => push_opt(stack, &n.expr),
        Some(ExprType::Negative(n)) => push_opt(stack, &n.expr),
        Some(ExprType::InList(n)) => {
            push_opt(stack, &n.expr);
            stack.extend(n.list.iter().map(|e| (Node::Expr(e), depth)));
        }
        Some(ExprType::ScalarFunction(n)) => {
            stack.extend(n.args.iter().map(|e| (Node::Expr(e), depth)));
        }
        Some(ExprType::WindowExpr(n)) => {
            stack.extend(n.expr.iter().map(|e| (Node::Expr(e), depth)));
            stack.extend(n.partition_by.iter().map(|e| (Node::Expr(e), depth)));
            stack.extend(n.order_by.iter().map(|e| (Node::Expr(e), depth)));
        }
    }
}

fn push_type_children<'a>(
    t: &'a protocol::ArrowType,
    depth: usize,
    stack: &mut Vec<(Node<'a>, usize)>,
) {
    match &t.arrow_type_enum {
        Some(ArrowTypeEnum::List(n)) | Some(ArrowTypeEnum::LargeList(n)) => {
            if let Some(f) = &n.field_type {
                stack.push((Node::Field(f), depth));
            }
        }
        Some(ArrowTypeEnum::FixedSizeList(n)) => {
            if let Some(f) = &n.field_type {
                stack.push((Node::Field(f), depth));
            }
        }
        Some(ArrowTypeEnum::Struct(n)) => {
            stack.extend(n.sub_field_types.iter().map(|f| (Node::Field(f), depth)));
        }
        Some(ArrowTypeEnum::Union(n)) => {
            stack.extend(n.union_types.iter().map(|f| (Node::Field(f), depth)));
        }
        Some(ArrowTypeEnum::Dictionary(n)) => {
            if let Some(k) = &n.key {
                stack.push((Node::Type(k), depth));
            }
            if let Some(v) = &n.value {
                stack.push((Node::Type(v), depth));
            }
        }
        _ => {}
    }
}

fn push_scalar_children<'a>(
    s: &'a protocol::ScalarValue,
    depth: usize,
    stack: &mut Vec<(Node<'a>, usize)>,
) {
    use crate::protocol::scalar_value::Value;
    match &s.value {
        Some(Value::ListValue(lv)) => {
            if let Some(t) = &lv.datatype {
                stack.push((Node::ScalarType(t), depth));
            }
            stack.extend(lv.values.iter().map(|v| (Node::Scalar(v), depth)));
        }
        Some(Value::NullListValue(t)) => stack.push((Node::ScalarType(t), depth)),
        _ => {}
    }
}
