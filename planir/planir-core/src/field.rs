//! Named, typed schema nodes and the schemas built from them.

use crate::datatype::DataType;
use crate::error::SchemaError;

/// A named, nullable, typed schema node.
///
/// `children` is populated only for struct/union-shaped types; for every
/// other type it stays empty. The wire codec rejects a primitive-typed
/// field that arrives with children.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub data_type: DataType,
    pub nullable: bool,
    pub children: Vec<Field>,
}

impl Field {
    pub fn new(name: impl Into<String>, data_type: DataType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable,
            children: Vec::new(),
        }
    }

    /// Attach child fields, consuming and returning `self`.
    pub fn with_children(mut self, children: Vec<Field>) -> Self {
        self.children = children;
        self
    }
}

/// An ordered sequence of fields; order is column position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schema {
    pub fields: Vec<Field>,
}

impl Schema {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Look up a field by name.
    pub fn field_with_name(&self, name: &str) -> Result<&Field, SchemaError> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| SchemaError::FieldNotFound {
                name: name.to_string(),
                qualifier: None,
            })
    }
}

/// A [`Field`] paired with the relation (table or alias) it came from.
///
/// Qualifier presence is independent of nullability; an unqualified field
/// is still addressable by bare name.
#[derive(Debug, Clone, PartialEq)]
pub struct DfField {
    pub field: Field,
    pub qualifier: Option<String>,
}

impl DfField {
    pub fn new(field: Field, qualifier: Option<impl Into<String>>) -> Self {
        Self {
            field,
            qualifier: qualifier.map(Into::into),
        }
    }
}

/// A schema whose fields carry relation qualifiers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DfSchema {
    pub fields: Vec<DfField>,
}

impl DfSchema {
    pub fn new(fields: Vec<DfField>) -> Self {
        Self { fields }
    }

    /// Look up a field by `(qualifier, name)`; both components must match.
    pub fn field_with_qualified_name(
        &self,
        qualifier: &str,
        name: &str,
    ) -> Result<&DfField, SchemaError> {
        self.fields
            .iter()
            .find(|f| f.qualifier.as_deref() == Some(qualifier) && f.field.name == name)
            .ok_or_else(|| SchemaError::FieldNotFound {
                name: name.to_string(),
                qualifier: Some(qualifier.to_string()),
            })
    }
}
