//! Document parser: YAML value → [`ConfigDocument`].
//!
//! The parser walks the root mapping once. Recognized keys are parsed by
//! their section types; everything else is handled according to
//! [`UnknownKeys`].

use std::collections::BTreeMap;

use crate::content::ContentConfig;
use crate::error::ConfigError;
use crate::plugin::{PluginRef, TYPOGRAPHY_KEY};
use crate::theme::{type_name, TypographyOverrides};

use super::config::{ConfigDocument, ThemeConfig};
use super::options::{LoadOptions, UnknownKeys};

/// Top-level keys the document format defines.
pub const RECOGNIZED_KEYS: &[&str] = &["content", "plugins", "theme"];

/// Parses YAML text.
pub(crate) fn parse_yaml(yaml: &str, options: LoadOptions) -> Result<ConfigDocument, ConfigError> {
    let root: serde_yaml::Value =
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::parse(e.to_string()))?;
    parse_value(&root, options)
}

/// Parses JSON text. JSON documents go through the same value walker.
pub(crate) fn parse_json(json: &str, options: LoadOptions) -> Result<ConfigDocument, ConfigError> {
    let json: serde_json::Value =
        serde_json::from_str(json).map_err(|e| ConfigError::parse(e.to_string()))?;
    let root = serde_yaml::to_value(&json).map_err(|e| ConfigError::parse(e.to_string()))?;
    parse_value(&root, options)
}

/// Parses an already-deserialized document.
pub(crate) fn parse_value(
    root: &serde_yaml::Value,
    options: LoadOptions,
) -> Result<ConfigDocument, ConfigError> {
    let map = root.as_mapping().ok_or_else(|| {
        ConfigError::parse(format!(
            "config root must be a mapping, got {}",
            type_name(root)
        ))
    })?;

    let mut doc = ConfigDocument::new();
    for (key, value) in map {
        let name = key
            .as_str()
            .ok_or_else(|| ConfigError::parse(format!("top-level keys must be strings, got {:?}", key)))?;

        match name {
            "content" => doc.content = ContentConfig::parse(value)?,
            "plugins" => doc.plugins = parse_plugins(value)?,
            "theme" => doc.theme = parse_theme(value)?,
            other => match options.unknown_keys {
                UnknownKeys::Ignore => {
                    tracing::debug!(key = other, "ignoring unrecognized top-level key");
                    doc.ignored.push(other.to_string());
                }
                UnknownKeys::Reject => {
                    return Err(ConfigError::UnknownKey {
                        key: other.to_string(),
                    })
                }
            },
        }
    }

    Ok(doc)
}

fn parse_plugins(value: &serde_yaml::Value) -> Result<Vec<PluginRef>, ConfigError> {
    let items = value.as_sequence().ok_or_else(|| {
        ConfigError::schema(
            "plugins",
            format!("expected a sequence, got {}", type_name(value)),
        )
    })?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| PluginRef::parse(item, &format!("plugins[{}]", i)))
        .collect()
}

fn parse_theme(value: &serde_yaml::Value) -> Result<ThemeConfig, ConfigError> {
    let map = value.as_mapping().ok_or_else(|| {
        ConfigError::schema("theme", format!("expected a mapping, got {}", type_name(value)))
    })?;

    let mut theme = ThemeConfig::default();
    for (key, body) in map {
        let name = key.as_str().ok_or_else(|| {
            ConfigError::schema("theme", format!("keys must be strings, got {:?}", key))
        })?;

        if name != "extend" {
            theme.base.insert(name.to_string(), body.clone());
            continue;
        }

        let extend = body.as_mapping().ok_or_else(|| {
            ConfigError::schema(
                "theme.extend",
                format!("expected a mapping, got {}", type_name(body)),
            )
        })?;
        let mut extra = BTreeMap::new();
        for (ext_key, ext_body) in extend {
            let ext_name = ext_key.as_str().ok_or_else(|| {
                ConfigError::schema("theme.extend", format!("keys must be strings, got {:?}", ext_key))
            })?;
            if ext_name == TYPOGRAPHY_KEY {
                theme.typography = TypographyOverrides::parse(
                    ext_body,
                    &format!("theme.extend.{}", TYPOGRAPHY_KEY),
                )?;
            } else {
                extra.insert(ext_name.to_string(), ext_body.clone());
            }
        }
        theme.extend = extra;
    }

    Ok(theme)
}
