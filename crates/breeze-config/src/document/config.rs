//! The configuration document.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::content::ContentConfig;
use crate::css::{check_value, normalize_property};
use crate::error::ConfigError;
use crate::plugin::{PluginRef, TYPOGRAPHY_KEY};
use crate::theme::{Declarations, TypographyOverrides};

use super::options::LoadOptions;
use super::parser;

/// File names looked up by [`ConfigDocument::discover`], in priority order.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    "breeze.config.yaml",
    "breeze.config.yml",
    "breeze.config.json",
];

/// The `theme` section.
///
/// Only `theme.extend.typography` is interpreted. Other theme values are kept
/// verbatim so tools can inspect them.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct ThemeConfig {
    pub(crate) typography: TypographyOverrides,
    pub(crate) extend: BTreeMap<String, serde_yaml::Value>,
    pub(crate) base: BTreeMap<String, serde_yaml::Value>,
}

/// A parsed configuration document.
///
/// A document is either loaded from YAML/JSON or assembled with the builder
/// methods. Both paths produce the same value. Builder mistakes such as an
/// unparsable selector are held back and reported by
/// [`validate`](Self::validate).
///
/// # Example
///
/// ```rust
/// use breeze_config::ConfigDocument;
///
/// let built = ConfigDocument::new()
///     .with_content("./src/*.rs")
///     .with_plugin("@tailwindcss/typography")
///     .suppress("DEFAULT", "strong")
///     .patch("DEFAULT", "pre code", [("whiteSpace", "pre-wrap")]);
/// built.validate().unwrap();
///
/// let loaded = ConfigDocument::from_yaml(r#"
/// content: ["./src/*.rs"]
/// plugins: ["@tailwindcss/typography"]
/// theme:
///   extend:
///     typography:
///       DEFAULT:
///         css:
///           strong: none
///           pre code: { whiteSpace: pre-wrap }
/// "#).unwrap();
///
/// assert_eq!(built.typography(), loaded.typography());
/// assert_eq!(built.plugins(), loaded.plugins());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigDocument {
    pub(crate) content: ContentConfig,
    pub(crate) plugins: Vec<PluginRef>,
    pub(crate) theme: ThemeConfig,
    pub(crate) ignored: Vec<String>,
    source_path: Option<PathBuf>,
    deferred: Vec<(String, String)>,
}

impl ConfigDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a YAML document with default options.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Self::from_yaml_with(yaml, LoadOptions::default())
    }

    /// Parses a YAML document.
    pub fn from_yaml_with(yaml: &str, options: LoadOptions) -> Result<Self, ConfigError> {
        let doc = parser::parse_yaml(yaml, options)?;
        doc.validate()?;
        Ok(doc)
    }

    /// Parses a JSON document with default options.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::from_json_with(json, LoadOptions::default())
    }

    /// Parses a JSON document.
    pub fn from_json_with(json: &str, options: LoadOptions) -> Result<Self, ConfigError> {
        let doc = parser::parse_json(json, options)?;
        doc.validate()?;
        Ok(doc)
    }

    /// Loads a document from a file with default options.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::from_file_with(path, LoadOptions::default())
    }

    /// Loads a document from a file.
    ///
    /// Files ending in `.json` are parsed as JSON, everything else as YAML.
    /// The path is remembered so `relative` content patterns can be anchored
    /// at the file's directory.
    pub fn from_file_with<P: AsRef<Path>>(
        path: P,
        options: LoadOptions,
    ) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let parsed = if is_json {
            parser::parse_json(&text, options)
        } else {
            parser::parse_yaml(&text, options)
        };
        let mut doc = parsed.map_err(|e| e.with_path(path))?;
        doc.validate()?;

        tracing::debug!(path = %path.display(), "loaded config document");
        doc.source_path = Some(path.to_path_buf());
        Ok(doc)
    }

    /// Finds the first config file in `dir`, following [`CONFIG_FILE_NAMES`].
    pub fn discover<P: AsRef<Path>>(dir: P) -> Option<PathBuf> {
        let dir = dir.as_ref();
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    }

    /// Adds a content pattern, returning the document for chaining.
    pub fn with_content(mut self, pattern: impl Into<String>) -> Self {
        self.content.push(pattern.into());
        self
    }

    /// Replaces the whole content section.
    pub fn with_content_config(mut self, content: ContentConfig) -> Self {
        self.content = content;
        self
    }

    /// Appends a plugin reference.
    pub fn with_plugin(mut self, plugin: impl Into<PluginRef>) -> Self {
        self.plugins.push(plugin.into());
        self
    }

    /// Sets the `theme.extend.typography` overrides.
    pub fn with_typography(mut self, overrides: TypographyOverrides) -> Self {
        self.theme.typography = overrides;
        self
    }

    /// Suppresses a preset selector in a typography variant.
    pub fn suppress(mut self, variant: &str, selector: &str) -> Self {
        let result = self.theme.typography.suppress(variant, selector);
        self.defer(result);
        self
    }

    /// Patches properties of a selector in a typography variant.
    ///
    /// Property names may be camelCase or kebab-case.
    pub fn patch<I, K, V>(mut self, variant: &str, selector: &str, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let key = format!("theme.extend.{}.{}.css.{}", TYPOGRAPHY_KEY, variant, selector);
        let mut declarations = Declarations::new();
        for (name, value) in properties {
            let value = value.into().trim().to_string();
            let checked = normalize_property(name.as_ref()).and_then(|property| {
                if value.is_empty() {
                    return Err("value is empty".to_string());
                }
                check_value(&value).map(|()| property)
            });
            match checked {
                Ok(property) => {
                    declarations.insert(property, value);
                }
                Err(message) => self.deferred.push((key.clone(), message)),
            }
        }

        let result = self.theme.typography.patch(variant, selector, declarations);
        self.defer(result);
        self
    }

    fn defer(&mut self, result: Result<(), ConfigError>) {
        match result {
            Ok(()) => {}
            Err(ConfigError::Schema { key, message }) => self.deferred.push((key, message)),
            Err(other) => self
                .deferred
                .push((format!("theme.extend.{}", TYPOGRAPHY_KEY), other.to_string())),
        }
    }

    /// Checks the parts of the document that can be checked without a
    /// plugin registry or a filesystem.
    ///
    /// Plugin identifiers are checked by
    /// [`BuildPlan::prepare`](crate::BuildPlan::prepare).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some((key, message)) = self.deferred.first() {
            return Err(ConfigError::schema(key, message.as_str()));
        }
        self.content.validate("content")
    }

    pub fn content(&self) -> &ContentConfig {
        &self.content
    }

    pub fn plugins(&self) -> &[PluginRef] {
        &self.plugins
    }

    /// Overrides under `theme.extend.typography`.
    pub fn typography(&self) -> &TypographyOverrides {
        &self.theme.typography
    }

    /// A raw `theme.extend` value other than `typography`.
    pub fn theme_extension(&self, key: &str) -> Option<&serde_yaml::Value> {
        self.theme.extend.get(key)
    }

    /// A raw `theme` value outside `extend`.
    pub fn theme_value(&self, key: &str) -> Option<&serde_yaml::Value> {
        self.theme.base.get(key)
    }

    /// Top-level keys skipped during permissive loading, in document order.
    pub fn ignored_keys(&self) -> &[String] {
        &self.ignored
    }

    /// The file this document was loaded from, if any.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Directory of [`source_path`](Self::source_path).
    ///
    /// A bare file name such as `breeze.config.yaml` lives in `.`.
    pub fn config_dir(&self) -> Option<&Path> {
        self.source_path
            .as_deref()
            .and_then(Path::parent)
            .map(|dir| {
                if dir.as_os_str().is_empty() {
                    Path::new(".")
                } else {
                    dir
                }
            })
    }
}
