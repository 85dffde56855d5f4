//! Content patterns: which files a generator scans for class names.
//!
//! ```yaml
//! # Short form - patterns relative to the working directory
//! content: ["./src/*.rs", "./templates/**/*.html"]
//!
//! # Long form - patterns relative to the config file
//! content:
//!   relative: true
//!   files:
//!     - "./src/**/*.rs"
//!     - "!./src/generated/**"     # exclusion
//! ```
//!
//! Resolving patterns that match nothing is not an error. The generator
//! would simply produce no utilities, so the result carries a
//! [`Warning::EmptyMatch`] instead.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Warning};
use crate::theme::type_name;

/// Prefix marking an exclusion pattern.
pub const EXCLUDE_PREFIX: char = '!';

/// The `content` section of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentConfig {
    patterns: Vec<String>,
    relative: bool,
}

impl ContentConfig {
    /// Creates an empty content section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pattern, returning `self` for chaining.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.patterns.push(pattern.into());
        self
    }

    /// Sets whether patterns resolve against the config file's directory.
    pub fn relative_to_config(mut self, relative: bool) -> Self {
        self.relative = relative;
        self
    }

    /// All patterns as written, exclusions included.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_relative(&self) -> bool {
        self.relative
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub(crate) fn push(&mut self, pattern: String) {
        self.patterns.push(pattern);
    }

    /// Parses the value of the `content` key.
    pub fn parse(value: &serde_yaml::Value) -> Result<Self, ConfigError> {
        match value {
            serde_yaml::Value::Sequence(items) => Self::parse_files(items, "content"),
            serde_yaml::Value::Mapping(map) => {
                let mut config = match map.get("files") {
                    Some(serde_yaml::Value::Sequence(items)) => {
                        Self::parse_files(items, "content.files")?
                    }
                    Some(other) => {
                        return Err(ConfigError::schema(
                            "content.files",
                            format!("expected a sequence of strings, got {}", type_name(other)),
                        ))
                    }
                    None => return Err(ConfigError::schema("content", "missing 'files'")),
                };

                match map.get("relative") {
                    None => {}
                    Some(serde_yaml::Value::Bool(relative)) => config.relative = *relative,
                    Some(other) => {
                        return Err(ConfigError::schema(
                            "content.relative",
                            format!("expected a boolean, got {}", type_name(other)),
                        ))
                    }
                }

                for (name, _) in map {
                    if !matches!(name.as_str(), Some("files") | Some("relative")) {
                        tracing::debug!(entry = ?name, "ignoring unrecognized content entry");
                    }
                }

                Ok(config)
            }
            other => Err(ConfigError::schema(
                "content",
                format!("expected a sequence of strings, got {}", type_name(other)),
            )),
        }
    }

    fn parse_files(items: &[serde_yaml::Value], key: &str) -> Result<Self, ConfigError> {
        let mut config = ContentConfig::new();
        for (i, item) in items.iter().enumerate() {
            let pattern = item.as_str().ok_or_else(|| {
                ConfigError::schema(
                    format!("{}[{}]", key, i),
                    format!("expected a string, got {}", type_name(item)),
                )
            })?;
            config.push(pattern.to_string());
        }
        config.validate(key)?;
        Ok(config)
    }

    /// Checks every pattern for glob syntax.
    pub fn validate(&self, key: &str) -> Result<(), ConfigError> {
        let mut seen = BTreeSet::new();
        for (i, pattern) in self.patterns.iter().enumerate() {
            let item_key = format!("{}[{}]", key, i);
            let glob_text = pattern.strip_prefix(EXCLUDE_PREFIX).unwrap_or(pattern).trim();
            if glob_text.is_empty() {
                return Err(ConfigError::schema(item_key, "pattern is empty"));
            }
            glob::Pattern::new(glob_text).map_err(|e| {
                ConfigError::schema(&item_key, format!("invalid glob '{}': {}", pattern, e))
            })?;
            if !seen.insert(pattern.as_str()) {
                tracing::debug!(pattern = %pattern, "duplicate content pattern");
            }
        }
        Ok(())
    }

    /// Expands the patterns into a file list.
    ///
    /// `cwd` is used as the base for relative patterns unless the section is
    /// marked `relative` and `config_dir` is known.
    pub fn resolve(
        &self,
        cwd: &Path,
        config_dir: Option<&Path>,
    ) -> Result<ResolvedContent, ConfigError> {
        let base = match (self.relative, config_dir) {
            (true, Some(dir)) => dir,
            _ => cwd,
        };

        let mut warnings = Vec::new();
        if self.patterns.is_empty() {
            tracing::warn!("no content patterns configured");
            warnings.push(Warning::NoContentPatterns);
            return Ok(ResolvedContent {
                files: Vec::new(),
                warnings,
            });
        }

        let mut included = BTreeSet::new();
        let mut excludes = Vec::new();
        for pattern in &self.patterns {
            match pattern.strip_prefix(EXCLUDE_PREFIX) {
                Some(exclude) => {
                    let full = anchor(base, exclude.trim());
                    let compiled = glob::Pattern::new(&full).map_err(|e| ConfigError::Pattern {
                        pattern: pattern.clone(),
                        message: e.to_string(),
                    })?;
                    excludes.push(compiled);
                }
                None => expand(base, pattern, &mut included)?,
            }
        }

        let files: Vec<PathBuf> = included
            .into_iter()
            .filter(|path| !excludes.iter().any(|ex| ex.matches_path(path)))
            .collect();

        if files.is_empty() {
            tracing::warn!(patterns = ?self.patterns, "content patterns matched no files");
            warnings.push(Warning::EmptyMatch {
                patterns: self.patterns.clone(),
            });
        } else {
            tracing::debug!(count = files.len(), "resolved content files");
        }

        Ok(ResolvedContent { files, warnings })
    }
}

/// Files matched by a [`ContentConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedContent {
    files: Vec<PathBuf>,
    warnings: Vec<Warning>,
}

impl ResolvedContent {
    /// Matched files, sorted and deduplicated.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub(crate) fn into_parts(self) -> (Vec<PathBuf>, Vec<Warning>) {
        (self.files, self.warnings)
    }
}

/// Joins a pattern onto the base directory, stripping a leading `./`.
fn anchor(base: &Path, pattern: &str) -> String {
    if Path::new(pattern).is_absolute() {
        return pattern.to_string();
    }
    let relative = pattern.strip_prefix("./").unwrap_or(pattern);
    if base.as_os_str().is_empty() {
        return relative.to_string();
    }
    let escaped = glob::Pattern::escape(&base.to_string_lossy());
    if escaped.ends_with('/') {
        format!("{}{}", escaped, relative)
    } else {
        format!("{}/{}", escaped, relative)
    }
}

fn expand(base: &Path, pattern: &str, into: &mut BTreeSet<PathBuf>) -> Result<(), ConfigError> {
    let full = anchor(base, pattern.trim());
    let entries = glob::glob(&full).map_err(|e| ConfigError::Pattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => {
                into.insert(path);
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(path = %e.path().display(), error = %e.error(), "skipping unreadable content entry");
            }
        }
    }
    Ok(())
}
