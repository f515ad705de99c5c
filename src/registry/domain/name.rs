//! Validated backend name type and the class-name formatting rule.

use super::BackendDomainError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Separator between directory names in a registry path.
pub const PATH_SEPARATOR: char = '/';

/// Canonical name or alias under which a class is registered.
///
/// Names are trimmed but keep their case, so `OpenAI` and `openai` are
/// distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BackendName(String);

impl BackendName {
    /// Creates a validated backend name.
    ///
    /// # Errors
    ///
    /// Returns [`BackendDomainError::EmptyBackendName`] when the value is empty
    /// after trimming, or [`BackendDomainError::InvalidBackendName`] when it
    /// contains [`PATH_SEPARATOR`].
    pub fn new(value: impl Into<String>) -> Result<Self, BackendDomainError> {
        let raw = value.into();
        let normalized = raw.trim();

        if normalized.is_empty() {
            return Err(BackendDomainError::EmptyBackendName);
        }

        if normalized.contains(PATH_SEPARATOR) {
            return Err(BackendDomainError::InvalidBackendName(raw));
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the backend name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BackendName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for BackendName {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for BackendName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Formats the name a class registers under when none is declared.
///
/// The first `strip_depth` ancestor identifiers (nearest first) are tried as
/// suffixes of `type_name`; the first one that matches is removed. A suffix
/// equal to the whole identifier is never stripped.
#[must_use]
pub fn format_class_name(type_name: &str, ancestors: &[String], strip_depth: usize) -> String {
    ancestors
        .iter()
        .take(strip_depth)
        .filter(|ancestor| !ancestor.is_empty() && ancestor.len() < type_name.len())
        .find_map(|ancestor| type_name.strip_suffix(ancestor.as_str()))
        .unwrap_or(type_name)
        .to_owned()
}
