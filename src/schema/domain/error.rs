//! Declaration-time diagnostics for property schemas.

use thiserror::Error;

/// A descriptor shape that the deriver tolerates but normalizes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DescriptorIssue {
    /// The field declares `type` alongside `anyOf` or `oneOf`; `type` is
    /// dropped from the derived schema.
    #[error("field '{0}' declares both 'type' and alternative shapes; 'type' will be dropped")]
    TypeWithAlternatives(String),

    /// The field declares `items` but its type does not include `array`.
    #[error("field '{0}' declares 'items' without an array type")]
    ItemsWithoutArray(String),
}

/// Error returned by strict validation of a property schema.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("property schema has {} malformed descriptor(s)", .issues.len())]
pub struct SchemaDeclarationError {
    /// Every issue found, in declaration order.
    pub issues: Vec<DescriptorIssue>,
}
