//! Plugin registry.
//!
//! # Resolution
//!
//! [`PluginRegistry::resolve`] walks a document's plugin list twice:
//!
//! 1. every identifier is looked up; the first unknown one aborts with
//!    [`ConfigError::UnknownPlugin`]
//! 2. every plugin validates its options
//!
//! Only when both passes succeed is the ordered plugin list returned, so an
//! unknown plugin is always reported ahead of any option problem.

use crate::error::ConfigError;

use super::builtin::{AspectRatioPlugin, ContainerQueriesPlugin, FormsPlugin, TypographyPlugin};
use super::{Plugin, PluginRef};

/// Registry of plugins a generator knows how to load.
///
/// # Example
///
/// ```rust
/// use breeze_config::{PluginRef, PluginRegistry};
///
/// let registry = PluginRegistry::with_builtins();
/// let plugins = registry
///     .resolve(&[PluginRef::new("forms"), PluginRef::new("@tailwindcss/typography")])
///     .unwrap();
/// assert_eq!(plugins[1].id(), "@tailwindcss/typography");
///
/// assert!(registry.resolve(&[PluginRef::new("not-a-real-plugin")]).is_err());
/// ```
#[derive(Debug, Default)]
pub struct PluginRegistry {
    plugins: Vec<Box<dyn Plugin>>,
}

impl PluginRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the first-party plugins.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(FormsPlugin));
        registry.register(Box::new(TypographyPlugin));
        registry.register(Box::new(AspectRatioPlugin));
        registry.register(Box::new(ContainerQueriesPlugin));
        registry
    }

    /// Registers a plugin. A plugin with the same identifier is replaced.
    pub fn register(&mut self, plugin: Box<dyn Plugin>) {
        if let Some(slot) = self.plugins.iter_mut().find(|p| p.id() == plugin.id()) {
            tracing::debug!(id = plugin.id(), "replacing registered plugin");
            *slot = plugin;
        } else {
            self.plugins.push(plugin);
        }
    }

    /// Looks up a plugin by identifier or alias.
    ///
    /// Exact identifiers take precedence over aliases.
    pub fn get(&self, name: &str) -> Option<&dyn Plugin> {
        self.plugins
            .iter()
            .find(|p| p.id() == name)
            .or_else(|| self.plugins.iter().find(|p| p.answers_to(name)))
            .map(|p| p.as_ref())
    }

    /// Canonical identifiers in registration order.
    pub fn ids(&self) -> Vec<String> {
        self.plugins.iter().map(|p| p.id().to_string()).collect()
    }

    /// Iterates registered plugins in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Plugin> {
        self.plugins.iter().map(|p| p.as_ref())
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Resolves a document's plugin list, preserving its order.
    pub fn resolve(&self, refs: &[PluginRef]) -> Result<Vec<&dyn Plugin>, ConfigError> {
        let mut resolved = Vec::with_capacity(refs.len());
        for plugin_ref in refs {
            let plugin = self
                .get(plugin_ref.id())
                .ok_or_else(|| ConfigError::UnknownPlugin {
                    id: plugin_ref.id().to_string(),
                    known: self.ids(),
                })?;
            resolved.push(plugin);
        }

        for (plugin, plugin_ref) in resolved.iter().zip(refs) {
            plugin
                .validate_options(plugin_ref.options())
                .map_err(|message| ConfigError::PluginOptions {
                    id: plugin.id().to_string(),
                    message,
                })?;
        }

        tracing::debug!(count = resolved.len(), "resolved plugins");
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Stylesheet;

    #[derive(Debug)]
    struct LocalPlugin {
        id: &'static str,
    }

    impl Plugin for LocalPlugin {
        fn id(&self) -> &str {
            self.id
        }

        fn theme_key(&self) -> Option<&str> {
            Some("typography")
        }

        fn preset(&self) -> Option<&Stylesheet> {
            None
        }
    }

    #[test]
    fn test_new_is_empty() {
        let registry = PluginRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.resolve(&[PluginRef::new("forms")]).is_err());
    }

    #[test]
    fn test_builtins() {
        let registry = PluginRegistry::with_builtins();
        assert_eq!(registry.len(), 4);
        assert_eq!(
            registry.ids(),
            vec![
                "@tailwindcss/forms",
                "@tailwindcss/typography",
                "@tailwindcss/aspect-ratio",
                "@tailwindcss/container-queries",
            ]
        );
    }

    #[test]
    fn test_get_by_alias() {
        let registry = PluginRegistry::with_builtins();
        assert_eq!(
            registry.get("typography").map(|p| p.id()),
            Some("@tailwindcss/typography")
        );
        assert!(registry.get("nope").is_none());
    }

    #[test]
    fn test_resolve_preserves_order() {
        let registry = PluginRegistry::with_builtins();
        let plugins = registry
            .resolve(&[
                PluginRef::new("@tailwindcss/typography"),
                PluginRef::new("@tailwindcss/forms"),
            ])
            .unwrap();
        let ids: Vec<_> = plugins.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["@tailwindcss/typography", "@tailwindcss/forms"]);
    }

    #[test]
    fn test_resolve_unknown_plugin() {
        let registry = PluginRegistry::with_builtins();
        let err = registry
            .resolve(&[PluginRef::new("forms"), PluginRef::new("not-a-real-plugin")])
            .unwrap_err();
        match err {
            ConfigError::UnknownPlugin { id, known } => {
                assert_eq!(id, "not-a-real-plugin");
                assert_eq!(known.len(), 4);
            }
            other => panic!("expected UnknownPlugin, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_plugin_reported_before_bad_options() {
        let registry = PluginRegistry::with_builtins();
        let err = registry
            .resolve(&[
                PluginRef::new("forms").with_option("strategy", "fancy"),
                PluginRef::new("not-a-real-plugin"),
            ])
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownPlugin { .. }));
    }

    #[test]
    fn test_resolve_bad_options() {
        let registry = PluginRegistry::with_builtins();
        let err = registry
            .resolve(&[PluginRef::new("forms").with_option("strategy", "fancy")])
            .unwrap_err();
        assert!(
            matches!(err, ConfigError::PluginOptions { ref id, .. } if id == "@tailwindcss/forms")
        );
    }

    #[test]
    fn test_register_replaces_same_id() {
        let mut registry = PluginRegistry::with_builtins();
        registry.register(Box::new(LocalPlugin {
            id: "@tailwindcss/typography",
        }));
        assert_eq!(registry.len(), 4);
        let plugin = registry.get("@tailwindcss/typography").unwrap();
        assert!(plugin.preset().is_none());
    }

    #[test]
    fn test_id_takes_precedence_over_alias() {
        let mut registry = PluginRegistry::with_builtins();
        registry.register(Box::new(LocalPlugin { id: "forms" }));
        assert_eq!(registry.len(), 5);
        assert_eq!(registry.get("forms").map(|p| p.id()), Some("forms"));
        assert_eq!(
            registry.get("@tailwindcss/forms").map(|p| p.id()),
            Some("@tailwindcss/forms")
        );

        let plugins = registry.resolve(&[PluginRef::new("forms")]).unwrap();
        assert_eq!(plugins[0].id(), "forms");
    }

    #[test]
    fn test_register_custom() {
        let mut registry = PluginRegistry::new();
        registry.register(Box::new(LocalPlugin { id: "local/prose" }));
        assert!(registry.resolve(&[PluginRef::new("local/prose")]).is_ok());
    }
}
