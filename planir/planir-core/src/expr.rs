//! Logical expression trees.

use std::fmt;

use crate::column::Column;
use crate::datatype::DataType;
use crate::function::{AggregateFunction, ScalarFunction, WindowFunction};
use crate::scalar::ScalarValue;
use crate::window::WindowFrame;

/// A node in a logical expression tree.
///
/// Exactly one variant is populated; most variants own child
/// expressions, so trees may nest arbitrarily deep. [`Expr::Column`] and
/// [`Expr::Literal`] are the terminals.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a field of the input relation.
    Column(Column),
    /// Child expression renamed in the output schema.
    Alias(Box<Expr>, String),
    Literal(ScalarValue),
    /// Infix operation; the operator is carried as its SQL spelling
    /// (`"="`, `"AND"`, `"+"`, ...).
    BinaryExpr {
        left: Box<Expr>,
        op: String,
        right: Box<Expr>,
    },
    IsNull(Box<Expr>),
    IsNotNull(Box<Expr>),
    Not(Box<Expr>),
    /// Arithmetic negation.
    Negative(Box<Expr>),
    Between {
        expr: Box<Expr>,
        negated: bool,
        low: Box<Expr>,
        high: Box<Expr>,
    },
    Case {
        /// Operand compared against each `when`; absent for the searched
        /// form (`CASE WHEN cond THEN ...`).
        expr: Option<Box<Expr>>,
        when_then: Vec<(Expr, Expr)>,
        else_expr: Option<Box<Expr>>,
    },
    /// Cast that fails at evaluation time on invalid input.
    Cast {
        expr: Box<Expr>,
        data_type: DataType,
    },
    /// Cast that yields null on invalid input.
    TryCast {
        expr: Box<Expr>,
        data_type: DataType,
    },
    /// Sort key specification; only meaningful in order-by position.
    Sort {
        expr: Box<Expr>,
        asc: bool,
        nulls_first: bool,
    },
    InList {
        expr: Box<Expr>,
        list: Vec<Expr>,
        negated: bool,
    },
    /// `*` projection.
    Wildcard,
    ScalarFunction {
        fun: ScalarFunction,
        args: Vec<Expr>,
    },
    AggregateFunction {
        fun: AggregateFunction,
        args: Vec<Expr>,
    },
    WindowFunction {
        fun: WindowFunction,
        args: Vec<Expr>,
        partition_by: Vec<Expr>,
        order_by: Vec<Expr>,
        frame: Option<WindowFrame>,
    },
}

impl Expr {
    fn binary(self, op: &str, right: Expr) -> Expr {
        Expr::BinaryExpr {
            left: Box::new(self),
            op: op.to_string(),
            right: Box::new(right),
        }
    }

    pub fn eq(self, other: Expr) -> Expr {
        self.binary("=", other)
    }

    pub fn not_eq(self, other: Expr) -> Expr {
        self.binary("!=", other)
    }

    pub fn lt(self, other: Expr) -> Expr {
        self.binary("<", other)
    }

    pub fn lt_eq(self, other: Expr) -> Expr {
        self.binary("<=", other)
    }

    pub fn gt(self, other: Expr) -> Expr {
        self.binary(">", other)
    }

    pub fn gt_eq(self, other: Expr) -> Expr {
        self.binary(">=", other)
    }

    pub fn and(self, other: Expr) -> Expr {
        self.binary("AND", other)
    }

    pub fn or(self, other: Expr) -> Expr {
        self.binary("OR", other)
    }

    pub fn alias(self, name: impl Into<String>) -> Expr {
        Expr::Alias(Box::new(self), name.into())
    }

    pub fn is_null(self) -> Expr {
        Expr::IsNull(Box::new(self))
    }

    pub fn is_not_null(self) -> Expr {
        Expr::IsNotNull(Box::new(self))
    }

    /// Wrap in a sort-key specification.
    pub fn sort(self, asc: bool, nulls_first: bool) -> Expr {
        Expr::Sort {
            expr: Box::new(self),
            asc,
            nulls_first,
        }
    }
}

fn fmt_expr_list(f: &mut fmt::Formatter<'_>, exprs: &[Expr]) -> fmt::Result {
    for (i, e) in exprs.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{e}")?;
    }
    Ok(())
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Column(c) => write!(f, "{c}"),
            Expr::Alias(e, name) => write!(f, "{e} AS {name}"),
            Expr::Literal(v) => write!(f, "{v}"),
            Expr::BinaryExpr { left, op, right } => write!(f, "{left} {op} {right}"),
            Expr::IsNull(e) => write!(f, "{e} IS NULL"),
            Expr::IsNotNull(e) => write!(f, "{e} IS NOT NULL"),
            Expr::Not(e) => write!(f, "NOT {e}"),
            Expr::Negative(e) => write!(f, "(- {e})"),
            Expr::Between {
                expr,
                negated,
                low,
                high,
            } => {
                let not = if *negated { "NOT " } else { "" };
                write!(f, "{expr} {not}BETWEEN {low} AND {high}")
            }
            Expr::Case {
                expr,
                when_then,
                else_expr,
            } => {
                f.write_str("CASE")?;
                if let Some(e) = expr {
                    write!(f, " {e}")?;
                }
                for (when, then) in when_then {
                    write!(f, " WHEN {when} THEN {then}")?;
                }
                if let Some(e) = else_expr {
                    write!(f, " ELSE {e}")?;
                }
                f.write_str(" END")
            }
            Expr::Cast { expr, data_type } => write!(f, "CAST({expr} AS {data_type:?})"),
            Expr::TryCast { expr, data_type } => write!(f, "TRY_CAST({expr} AS {data_type:?})"),
            Expr::Sort {
                expr,
                asc,
                nulls_first,
            } => {
                let dir = if *asc { "ASC" } else { "DESC" };
                let nulls = if *nulls_first {
                    "NULLS FIRST"
                } else {
                    "NULLS LAST"
                };
                write!(f, "{expr} {dir} {nulls}")
            }
            Expr::InList {
                expr,
                list,
                negated,
            } => {
                let not = if *negated { "NOT " } else { "" };
                write!(f, "{expr} {not}IN (")?;
                fmt_expr_list(f, list)?;
                f.write_str(")")
            }
            Expr::Wildcard => f.write_str("*"),
            Expr::ScalarFunction { fun, args } => {
                write!(f, "{fun}(")?;
                fmt_expr_list(f, args)?;
                f.write_str(")")
            }
            Expr::AggregateFunction { fun, args } => {
                write!(f, "{fun}(")?;
                fmt_expr_list(f, args)?;
                f.write_str(")")
            }
            Expr::WindowFunction {
                fun,
                args,
                partition_by,
                order_by,
                frame,
            } => {
                write!(f, "{fun}(")?;
                fmt_expr_list(f, args)?;
                f.write_str(") OVER (")?;
                if !partition_by.is_empty() {
                    f.write_str("PARTITION BY ")?;
                    fmt_expr_list(f, partition_by)?;
                }
                if !order_by.is_empty() {
                    if !partition_by.is_empty() {
                        f.write_str(" ")?;
                    }
                    f.write_str("ORDER BY ")?;
                    fmt_expr_list(f, order_by)?;
                }
                if let Some(frame) = frame {
                    write!(f, " {frame}")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Unqualified column reference expression.
pub fn col(name: impl Into<String>) -> Expr {
    Expr::Column(Column::from_name(name))
}

/// Literal expression.
pub fn lit(value: ScalarValue) -> Expr {
    Expr::Literal(value)
}
