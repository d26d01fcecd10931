//! Wire-independent logical model for relational query-plan interchange.
//!
//! This crate provides the value types shipped between a planner and its
//! executors: the columnar type system ([`DataType`] / [`Field`] /
//! [`Schema`]), scalar literals ([`ScalarValue`]), expression trees
//! ([`Expr`]), and window-frame metadata ([`WindowFrame`]). All types are
//! immutable records with structural equality; encoding them to bytes is
//! the job of `planir-proto`.

mod column;
mod datatype;
mod error;
mod expr;
mod field;
mod function;
mod scalar;
mod window;

pub use column::Column;
pub use datatype::{DataType, IntervalUnit, TimeUnit};
pub use error::SchemaError;
pub use expr::{Expr, col, lit};
pub use field::{DfField, DfSchema, Field, Schema};
pub use function::{AggregateFunction, BuiltInWindowFunction, ScalarFunction, WindowFunction};
pub use scalar::{PrimitiveScalarType, ScalarListValue, ScalarType, ScalarValue};
pub use window::{WindowFrame, WindowFrameBound, WindowFrameUnits};
