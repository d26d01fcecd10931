//! Column references.

use std::fmt;

/// Reference to a field by `(qualifier, name)`, not by position.
///
/// Two columns are equal iff both components match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    pub relation: Option<String>,
    pub name: String,
}

impl Column {
    pub fn new(relation: Option<impl Into<String>>, name: impl Into<String>) -> Self {
        Self {
            relation: relation.map(Into::into),
            name: name.into(),
        }
    }

    /// Unqualified column reference.
    pub fn from_name(name: impl Into<String>) -> Self {
        Self {
            relation: None,
            name: name.into(),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.relation {
            Some(r) => write!(f, "{r}.{}", self.name),
            None => f.write_str(&self.name),
        }
    }
}
