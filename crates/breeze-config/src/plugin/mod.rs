//! Plugin references and the registry that resolves them.
//!
//! A document lists plugins by identifier. The [`PluginRegistry`] knows which
//! identifiers exist; anything it does not know is a fatal
//! [`ConfigError::UnknownPlugin`](crate::ConfigError::UnknownPlugin), raised
//! before any content is scanned.
//!
//! ```yaml
//! plugins:
//!   - "@tailwindcss/typography"            # bare identifier
//!   - name: "@tailwindcss/forms"           # identifier with options
//!     options:
//!       strategy: class
//! ```
//!
//! Plugins that style the same theme key are layered in list order, so the
//! last one wins on conflict.

mod builtin;
mod registry;

pub use builtin::{
    AspectRatioPlugin, ContainerQueriesPlugin, FormsPlugin, TypographyPlugin, TYPOGRAPHY_KEY,
};
pub use registry::PluginRegistry;

use crate::error::ConfigError;
use crate::theme::{type_name, Stylesheet};

/// A generator extension known to the registry.
pub trait Plugin: Send + Sync + std::fmt::Debug {
    /// Canonical identifier, e.g. `@tailwindcss/typography`.
    fn id(&self) -> &str;

    /// Alternative identifiers accepted in documents.
    fn aliases(&self) -> &[&'static str] {
        &[]
    }

    /// The `theme.extend` key this plugin reads, if any.
    fn theme_key(&self) -> Option<&str> {
        None
    }

    /// Default stylesheet for [`theme_key`](Plugin::theme_key).
    fn preset(&self) -> Option<&Stylesheet> {
        None
    }

    /// Checks the options given with the plugin reference.
    ///
    /// The default accepts no options at all.
    fn validate_options(&self, options: &serde_yaml::Mapping) -> Result<(), String> {
        if options.is_empty() {
            Ok(())
        } else {
            Err("this plugin takes no options".to_string())
        }
    }

    /// Returns true if `name` is the identifier or one of the aliases.
    fn answers_to(&self, name: &str) -> bool {
        self.id() == name || self.aliases().iter().any(|alias| *alias == name)
    }
}

/// A plugin as listed in a document.
#[derive(Debug, Clone, PartialEq)]
pub struct PluginRef {
    id: String,
    options: serde_yaml::Mapping,
}

impl PluginRef {
    /// References a plugin without options.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            options: serde_yaml::Mapping::new(),
        }
    }

    /// Adds an option, returning `self` for chaining.
    pub fn with_option(mut self, name: &str, value: impl Into<serde_yaml::Value>) -> Self {
        self.options
            .insert(serde_yaml::Value::String(name.to_string()), value.into());
        self
    }

    /// The identifier as written.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn options(&self) -> &serde_yaml::Mapping {
        &self.options
    }

    /// Parses one entry of the `plugins` sequence.
    ///
    /// - String → identifier without options
    /// - Mapping with `name` (and optional `options` mapping)
    pub fn parse(value: &serde_yaml::Value, key: &str) -> Result<Self, ConfigError> {
        match value {
            serde_yaml::Value::String(s) => {
                let id = s.trim();
                if id.is_empty() {
                    return Err(ConfigError::schema(key, "plugin identifier is empty"));
                }
                Ok(PluginRef::new(id))
            }
            serde_yaml::Value::Mapping(map) => {
                let id = match map.get("name") {
                    Some(serde_yaml::Value::String(s)) if !s.trim().is_empty() => s.trim(),
                    Some(other) => {
                        return Err(ConfigError::schema(
                            format!("{}.name", key),
                            format!("expected a non-empty string, got {}", type_name(other)),
                        ))
                    }
                    None => return Err(ConfigError::schema(key, "missing 'name'")),
                };

                let options = match map.get("options") {
                    None | Some(serde_yaml::Value::Null) => serde_yaml::Mapping::new(),
                    Some(serde_yaml::Value::Mapping(options)) => options.clone(),
                    Some(other) => {
                        return Err(ConfigError::schema(
                            format!("{}.options", key),
                            format!("expected a mapping, got {}", type_name(other)),
                        ))
                    }
                };

                for (name, _) in map {
                    if !matches!(name.as_str(), Some("name") | Some("options")) {
                        return Err(ConfigError::schema(
                            key,
                            format!("unexpected entry {:?}", name),
                        ));
                    }
                }

                Ok(PluginRef {
                    id: id.to_string(),
                    options,
                })
            }
            other => Err(ConfigError::schema(
                key,
                format!(
                    "expected a plugin identifier or mapping, got {}",
                    type_name(other)
                ),
            )),
        }
    }
}

impl From<&str> for PluginRef {
    fn from(id: &str) -> Self {
        PluginRef::new(id)
    }
}

impl From<String> for PluginRef {
    fn from(id: String) -> Self {
        PluginRef::new(id)
    }
}
