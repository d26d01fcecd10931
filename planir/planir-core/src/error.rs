//! Errors raised by schema lookups.

/// Error returned by [`Schema`](crate::Schema) and [`DfSchema`](crate::DfSchema)
/// name lookups.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// No field matched the requested `(qualifier, name)` pair.
    #[error("no field named '{name}' for qualifier {qualifier:?}")]
    FieldNotFound {
        name: String,
        qualifier: Option<String>,
    },
}
