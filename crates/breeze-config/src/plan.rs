//! Build preparation.
//!
//! [`BuildPlan::prepare`] turns a document into everything a generator needs
//! before it scans a single file:
//!
//! 1. plugins are resolved against the registry (unknown ids abort here)
//! 2. presets of plugins reading `theme.extend.typography` are layered in
//!    plugin order
//! 3. the document's overrides are applied on top
//! 4. content patterns are expanded into a file list
//!
//! The document itself is validated right after plugin resolution, so
//! builder mistakes held by [`ConfigDocument`] surface here too. Errors from
//! steps 1-3 mean content is never touched.

use std::path::{Path, PathBuf};

use crate::document::ConfigDocument;
use crate::error::{ConfigError, Warning};
use crate::plugin::{PluginRegistry, TYPOGRAPHY_KEY};
use crate::theme::Stylesheet;

/// Filesystem context for [`BuildPlan::prepare`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanContext {
    cwd: PathBuf,
}

impl PlanContext {
    /// Resolves relative content patterns against `cwd`.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }

    /// Uses the process working directory.
    pub fn current() -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir().map_err(|source| ConfigError::Load {
            path: PathBuf::from("."),
            source,
        })?;
        Ok(Self::new(cwd))
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }
}

/// A validated, ready-to-run build.
#[derive(Debug, Clone)]
pub struct BuildPlan {
    plugins: Vec<String>,
    typography: Option<Stylesheet>,
    files: Vec<PathBuf>,
    warnings: Vec<Warning>,
}

impl BuildPlan {
    /// Prepares a build for `doc`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownPlugin`] and [`ConfigError::PluginOptions`] from
    /// plugin resolution, any error [`ConfigDocument::validate`] reports, or
    /// [`ConfigError::Pattern`] if a content pattern cannot be expanded.
    /// Empty matches are warnings, not errors.
    ///
    /// # Example
    ///
    /// ```rust
    /// use breeze_config::{BuildPlan, ConfigDocument, PlanContext, PluginRegistry};
    ///
    /// let doc = ConfigDocument::from_yaml(r#"
    /// content: ["./nothing-here/*.rs"]
    /// plugins: ["@tailwindcss/typography"]
    /// theme:
    ///   extend:
    ///     typography:
    ///       DEFAULT:
    ///         css:
    ///           strong: none
    /// "#).unwrap();
    ///
    /// let dir = std::env::temp_dir();
    /// let plan = BuildPlan::prepare(&doc, &PluginRegistry::with_builtins(), &PlanContext::new(&dir))
    ///     .unwrap();
    ///
    /// let prose = plan.typography().unwrap();
    /// assert!(prose.get("DEFAULT", "strong").is_none());
    /// assert!(prose.get("DEFAULT", "p").is_some());
    /// assert!(plan.is_empty());
    /// assert_eq!(plan.warnings().len(), 1);
    /// ```
    pub fn prepare(
        doc: &ConfigDocument,
        registry: &PluginRegistry,
        context: &PlanContext,
    ) -> Result<Self, ConfigError> {
        let resolved = registry.resolve(doc.plugins())?;
        doc.validate()?;
        let mut warnings = Vec::new();

        let mut preset: Option<Stylesheet> = None;
        for plugin in resolved
            .iter()
            .filter(|p| p.theme_key() == Some(TYPOGRAPHY_KEY))
        {
            let layer = plugin.preset().cloned().unwrap_or_default();
            preset = Some(match preset {
                Some(below) => below.merge(layer),
                None => layer,
            });
        }

        let typography = match preset {
            Some(base) => Some(base.apply_overrides(doc.typography())),
            None => {
                if !doc.typography().is_empty() {
                    tracing::warn!(
                        theme_key = TYPOGRAPHY_KEY,
                        "typography overrides present but no plugin reads them"
                    );
                    warnings.push(Warning::OverridesWithoutPlugin {
                        theme_key: TYPOGRAPHY_KEY.to_string(),
                    });
                }
                None
            }
        };

        let (files, content_warnings) = doc
            .content()
            .resolve(context.cwd(), doc.config_dir())?
            .into_parts();
        warnings.extend(content_warnings);

        let plugins: Vec<String> = resolved.iter().map(|p| p.id().to_string()).collect();
        tracing::info!(
            plugins = plugins.len(),
            files = files.len(),
            warnings = warnings.len(),
            "build plan ready"
        );

        Ok(Self {
            plugins,
            typography,
            files,
            warnings,
        })
    }

    /// Canonical ids of the loaded plugins, in document order.
    pub fn plugins(&self) -> &[String] {
        &self.plugins
    }

    /// Effective typography stylesheet, or `None` without a typography
    /// plugin.
    pub fn typography(&self) -> Option<&Stylesheet> {
        self.typography.as_ref()
    }

    /// Files to scan, sorted.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Returns true when there is nothing to scan.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
