//! Error and warning types for configuration loading.
//!
//! [`ConfigError`] covers every fatal condition: malformed input, schema
//! violations, unknown plugins and unreadable files. All of them are raised
//! before a [`BuildPlan`](crate::BuildPlan) exists, so a consumer never sees
//! partial output.
//!
//! [`Warning`] is the non-fatal counterpart. Warnings are collected on the
//! plan and also logged through `tracing`.

use std::path::{Path, PathBuf};

/// Errors that can occur while loading or validating a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document text is not valid YAML/JSON, or its root is not a mapping.
    #[error("Failed to parse config{}: {message}", location(.path.as_deref()))]
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the underlying parser.
        message: String,
    },

    /// A recognized key holds a value of the wrong shape.
    #[error("Invalid value for '{key}': {message}")]
    Schema {
        /// Dotted path of the offending key, e.g. `theme.extend.typography`.
        key: String,
        /// Description of what was wrong.
        message: String,
    },

    /// An unrecognized top-level key under strict loading.
    #[error("Unknown top-level key '{key}'")]
    UnknownKey { key: String },

    /// A listed plugin is not registered.
    #[error("Unknown plugin '{id}' (known plugins: {})", .known.join(", "))]
    UnknownPlugin {
        /// The identifier as written in the document.
        id: String,
        /// Identifiers the registry does know about.
        known: Vec<String>,
    },

    /// A plugin rejected its options.
    #[error("Invalid options for plugin '{id}': {message}")]
    PluginOptions { id: String, message: String },

    /// The configuration file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A content pattern could not be expanded.
    #[error("Failed to expand content pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },
}

impl ConfigError {
    /// Create a schema error for the given key path.
    pub fn schema(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Schema {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a parse error without a source path.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            path: None,
            message: message.into(),
        }
    }

    /// Attaches a source path to parse errors. Other variants pass through.
    pub(crate) fn with_path(self, source: &Path) -> Self {
        match self {
            Self::Parse { path: None, message } => Self::Parse {
                path: Some(source.to_path_buf()),
                message,
            },
            other => other,
        }
    }

    /// Returns true for schema-shaped failures (`Schema` and `UnknownKey`).
    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema { .. } | Self::UnknownKey { .. })
    }
}

fn location(path: Option<&Path>) -> String {
    path.map(|p| format!(" {}", p.display())).unwrap_or_default()
}

/// Non-fatal conditions found while preparing a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The document lists no content patterns at all.
    NoContentPatterns,
    /// Content patterns were given but matched no files.
    EmptyMatch { patterns: Vec<String> },
    /// Theme overrides target a key no loaded plugin provides.
    OverridesWithoutPlugin { theme_key: String },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::NoContentPatterns => {
                write!(f, "no content patterns configured; no utilities will be generated")
            }
            Warning::EmptyMatch { patterns } => {
                write!(
                    f,
                    "content patterns matched no files: {}",
                    patterns.join(", ")
                )
            }
            Warning::OverridesWithoutPlugin { theme_key } => {
                write!(
                    f,
                    "theme.extend.{} is set but no loaded plugin uses it",
                    theme_key
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_without_path() {
        let err = ConfigError::parse("unexpected end of input");
        assert_eq!(
            err.to_string(),
            "Failed to parse config: unexpected end of input"
        );
    }

    #[test]
    fn test_parse_error_with_path() {
        let err = ConfigError::parse("bad").with_path(Path::new("breeze.config.yaml"));
        let msg = err.to_string();
        assert!(msg.contains("breeze.config.yaml"));
        assert!(msg.contains("bad"));
    }

    #[test]
    fn test_with_path_keeps_other_variants() {
        let err = ConfigError::schema("content", "expected a sequence")
            .with_path(Path::new("x.yaml"));
        assert!(matches!(err, ConfigError::Schema { .. }));
    }

    #[test]
    fn test_unknown_plugin_lists_known() {
        let err = ConfigError::UnknownPlugin {
            id: "nope".to_string(),
            known: vec!["a".to_string(), "b".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("'nope'"));
        assert!(msg.contains("a, b"));
    }

    #[test]
    fn test_is_schema() {
        assert!(ConfigError::schema("plugins", "x").is_schema());
        assert!(ConfigError::UnknownKey { key: "x".into() }.is_schema());
        assert!(!ConfigError::parse("x").is_schema());
    }

    #[test]
    fn test_warning_display() {
        let w = Warning::EmptyMatch {
            patterns: vec!["./a/*.rs".into(), "./b/*.rs".into()],
        };
        assert!(w.to_string().contains("./a/*.rs, ./b/*.rs"));
    }
}
