//! Runtime property values of a backend instance.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw construction arguments, keyed by property name.
pub type BackendArgs = Map<String, Value>;

/// The `alias` property: one alias or a list of aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AliasList {
    /// A single alias.
    One(String),
    /// Several aliases.
    Many(Vec<String>),
}

impl AliasList {
    /// Iterates over the aliases.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let slice = match self {
            Self::One(alias) => std::slice::from_ref(alias),
            Self::Many(aliases) => aliases.as_slice(),
        };
        slice.iter().map(String::as_str)
    }
}

/// Property values shared by every backend instance.
///
/// Properties a concrete backend declares beyond the base set land in
/// [`extra`](Self::extra).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendProps {
    /// Instance name; unset means the class's canonical name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Availability flag; construction defaults it to `true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Icon name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Additional names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<AliasList>,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Class-specific properties.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BackendProps {
    /// Builds props from construction arguments.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] when a base property has the wrong JSON
    /// type.
    pub fn from_args(args: BackendArgs) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(args))
    }
}
