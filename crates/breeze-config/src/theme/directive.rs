//! Override directives for a single selector.
//!
//! A directive is what a configuration document says about one selector in
//! a preset:
//!
//! ```yaml
//! # Suppress - drop the preset's rule for this selector entirely
//! strong: none
//!
//! # Patch - replace individual properties, keep the rest
//! pre code:
//!   white-space: pre-wrap
//! ```
//!
//! The literal string `none` is the only accepted string form. Any other
//! string, and any value that is neither a string nor a mapping, is a schema
//! error.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;

use crate::css::{check_value, normalize_property};
use crate::error::ConfigError;

/// The sentinel string that suppresses a preset rule.
pub const SUPPRESS: &str = "none";

/// Property name → value declarations of one CSS rule.
///
/// Property names are stored in kebab-case. Iteration order is sorted by
/// property name so that output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations {
    props: BTreeMap<String, String>,
}

impl Declarations {
    /// Creates an empty declaration block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning `self` for chaining.
    ///
    /// The name is taken as written; use [`parse_mapping`](Self::parse_mapping)
    /// for normalized input from documents.
    pub fn set(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(property, value);
        self
    }

    /// Sets a property in place. Returns the previous value, if any.
    pub fn insert(
        &mut self,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.props.insert(property.into(), value.into())
    }

    /// Returns the value of a property.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.props.get(property).map(String::as_str)
    }

    /// Returns true if the property is declared.
    pub fn contains(&self, property: &str) -> bool {
        self.props.contains_key(property)
    }

    /// Iterates `(property, value)` pairs in property order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Applies `patch` on top of `self`.
    ///
    /// Properties in `patch` replace those in `self`; properties only in
    /// `self` are kept.
    pub fn patched(&self, patch: &Declarations) -> Declarations {
        let mut merged = self.clone();
        merged
            .props
            .extend(patch.props.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }

    /// Parses declarations from a YAML mapping.
    ///
    /// `key` is the dotted path of the mapping, used in error messages.
    pub fn parse_mapping(map: &serde_yaml::Mapping, key: &str) -> Result<Self, ConfigError> {
        let mut decls = Declarations::new();

        for (name, value) in map {
            let name = name.as_str().ok_or_else(|| {
                ConfigError::schema(key, format!("property names must be strings, got {:?}", name))
            })?;
            let property =
                normalize_property(name).map_err(|message| ConfigError::schema(key, message))?;
            let prop_key = format!("{}.{}", key, name);

            let value = match value {
                serde_yaml::Value::String(s) => s.trim().to_string(),
                serde_yaml::Value::Number(n) => n.to_string(),
                other => {
                    return Err(ConfigError::schema(
                        prop_key,
                        format!("expected a string or number, got {}", type_name(other)),
                    ))
                }
            };
            if value.is_empty() {
                return Err(ConfigError::schema(prop_key, "value is empty"));
            }
            check_value(&value).map_err(|message| ConfigError::schema(&prop_key, message))?;

            decls.props.insert(property, value);
        }

        Ok(decls)
    }
}

impl serde::Serialize for Declarations {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.props.len()))?;
        for (k, v) in &self.props {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Declarations {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut decls = Declarations::new();
        for (k, v) in iter {
            decls.insert(k, v);
        }
        decls
    }
}

/// What an override document says about one selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Emit no rule for the selector, whatever the preset defines.
    Suppress,
    /// Replace the listed properties; keep the preset's other properties.
    Patch(Declarations),
}

impl Directive {
    /// Parses a directive from a YAML value.
    ///
    /// - String `none` → [`Directive::Suppress`]
    /// - Mapping → [`Directive::Patch`]
    pub fn parse(value: &serde_yaml::Value, key: &str) -> Result<Self, ConfigError> {
        match value {
            serde_yaml::Value::String(s) if s.trim() == SUPPRESS => Ok(Directive::Suppress),
            serde_yaml::Value::String(s) => Err(ConfigError::schema(
                key,
                format!(
                    "expected \"{}\" or a property mapping, got string '{}'",
                    SUPPRESS, s
                ),
            )),
            serde_yaml::Value::Mapping(map) => {
                Ok(Directive::Patch(Declarations::parse_mapping(map, key)?))
            }
            other => Err(ConfigError::schema(
                key,
                format!(
                    "expected \"{}\" or a property mapping, got {}",
                    SUPPRESS,
                    type_name(other)
                ),
            )),
        }
    }

    /// Returns true for [`Directive::Suppress`].
    pub fn is_suppress(&self) -> bool {
        matches!(self, Directive::Suppress)
    }

    /// Returns the patch declarations, or `None` for a suppression.
    pub fn declarations(&self) -> Option<&Declarations> {
        match self {
            Directive::Patch(decls) => Some(decls),
            Directive::Suppress => None,
        }
    }

    /// Combines two directives for the same selector, `later` taking precedence.
    ///
    /// A later suppression wins outright. A later patch on top of an earlier
    /// patch merges property-wise; on top of a suppression it replaces it.
    pub fn then(self, later: Directive) -> Directive {
        match (self, later) {
            (Directive::Patch(earlier), Directive::Patch(later)) => {
                Directive::Patch(earlier.patched(&later))
            }
            (_, later) => later,
        }
    }
}

impl serde::Serialize for Directive {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Directive::Suppress => serializer.serialize_str(SUPPRESS),
            Directive::Patch(decls) => decls.serialize(serializer),
        }
    }
}

pub(crate) fn type_name(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}
