//! Reference to a requested backend type.

use super::ClassId;
use std::fmt;

/// A requested implementation: a registered name, alias or path, or a class
/// identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A canonical name, alias, or `/`-separated path of names.
    Name(String),
    /// A class identity.
    Class(ClassId),
}

impl From<&str> for TypeRef {
    fn from(value: &str) -> Self {
        Self::Name(value.to_owned())
    }
}

impl From<String> for TypeRef {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}

impl From<ClassId> for TypeRef {
    fn from(value: ClassId) -> Self {
        Self::Class(value)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Class(id) => write!(f, "class {id}"),
        }
    }
}
