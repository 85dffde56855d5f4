//! Typed override tree for `theme.extend.typography`.
//!
//! The YAML shape follows the typography plugin's own theme key:
//!
//! ```yaml
//! typography:
//!   DEFAULT:            # variant name
//!     css:              # mapping, or a sequence of mappings merged in order
//!       strong: none
//!       pre code:
//!         white-space: pre-wrap
//!   lg:
//!     css:
//!       img: none
//! ```

use std::collections::BTreeMap;

use crate::css::Selector;
use crate::error::ConfigError;

use super::directive::{type_name, Declarations, Directive};

/// The variant every preset defines and that applies without a size modifier.
pub const DEFAULT_VARIANT: &str = "DEFAULT";

/// Directives for one variant, keyed by selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantOverrides {
    css: BTreeMap<Selector, Directive>,
}

impl VariantOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directive for a selector. A later call for the same selector
    /// replaces the earlier one.
    pub fn set(&mut self, selector: Selector, directive: Directive) {
        self.css.insert(selector, directive);
    }

    /// Returns the directive for a selector.
    pub fn get(&self, selector: &str) -> Option<&Directive> {
        self.css.get(selector)
    }

    /// Iterates `(selector, directive)` pairs in selector order.
    pub fn iter(&self) -> impl Iterator<Item = (&Selector, &Directive)> {
        self.css.iter()
    }

    pub fn len(&self) -> usize {
        self.css.len()
    }

    pub fn is_empty(&self) -> bool {
        self.css.is_empty()
    }

    /// Parses a variant body (`{ css: ... }`).
    fn parse(value: &serde_yaml::Value, key: &str) -> Result<Self, ConfigError> {
        let map = value.as_mapping().ok_or_else(|| {
            ConfigError::schema(key, format!("expected a mapping, got {}", type_name(value)))
        })?;

        let mut overrides = VariantOverrides::new();
        for (name, body) in map {
            match name.as_str() {
                Some("css") => {
                    let css_key = format!("{}.css", key);
                    match body {
                        serde_yaml::Value::Mapping(css) => {
                            overrides.absorb(css, &css_key)?;
                        }
                        serde_yaml::Value::Sequence(items) => {
                            for (i, item) in items.iter().enumerate() {
                                let item_key = format!("{}[{}]", css_key, i);
                                let css = item.as_mapping().ok_or_else(|| {
                                    ConfigError::schema(
                                        &item_key,
                                        format!("expected a mapping, got {}", type_name(item)),
                                    )
                                })?;
                                overrides.absorb(css, &item_key)?;
                            }
                        }
                        other => {
                            return Err(ConfigError::schema(
                                css_key,
                                format!(
                                    "expected a mapping or a sequence of mappings, got {}",
                                    type_name(other)
                                ),
                            ))
                        }
                    }
                }
                Some(other) => {
                    tracing::debug!(key, entry = other, "ignoring unrecognized typography entry");
                }
                None => {
                    return Err(ConfigError::schema(
                        key,
                        format!("keys must be strings, got {:?}", name),
                    ))
                }
            }
        }

        Ok(overrides)
    }

    /// Merges a css mapping into this variant. Later entries win per selector.
    fn absorb(&mut self, css: &serde_yaml::Mapping, key: &str) -> Result<(), ConfigError> {
        for (sel, value) in css {
            let text = sel.as_str().ok_or_else(|| {
                ConfigError::schema(key, format!("selectors must be strings, got {:?}", sel))
            })?;
            let sel_key = format!("{}.{}", key, text);
            let selector =
                Selector::parse(text).map_err(|message| ConfigError::schema(&sel_key, message))?;
            let directive = Directive::parse(value, &sel_key)?;

            let combined = match self.css.remove(&selector) {
                Some(earlier) => earlier.then(directive),
                None => directive,
            };
            self.css.insert(selector, combined);
        }
        Ok(())
    }
}

/// Overrides for every typography variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypographyOverrides {
    variants: BTreeMap<String, VariantOverrides>,
}

impl TypographyOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the value of `theme.extend.typography`.
    pub fn parse(value: &serde_yaml::Value, key: &str) -> Result<Self, ConfigError> {
        let map = value.as_mapping().ok_or_else(|| {
            ConfigError::schema(key, format!("expected a mapping, got {}", type_name(value)))
        })?;

        let mut overrides = TypographyOverrides::new();
        for (name, body) in map {
            let variant = name.as_str().ok_or_else(|| {
                ConfigError::schema(key, format!("variant names must be strings, got {:?}", name))
            })?;
            let parsed = VariantOverrides::parse(body, &format!("{}.{}", key, variant))?;
            overrides.variants.insert(variant.to_string(), parsed);
        }
        Ok(overrides)
    }

    /// Suppresses a selector in a variant.
    ///
    /// Fails if the selector text is not a usable selector.
    pub fn suppress(&mut self, variant: &str, selector: &str) -> Result<(), ConfigError> {
        let sel = self.selector(variant, selector)?;
        self.variant_mut(variant).set(sel, Directive::Suppress);
        Ok(())
    }

    /// Patches properties of a selector in a variant.
    ///
    /// A second patch for the same selector merges property-wise.
    pub fn patch(
        &mut self,
        variant: &str,
        selector: &str,
        declarations: Declarations,
    ) -> Result<(), ConfigError> {
        let sel = self.selector(variant, selector)?;
        let entry = self.variant_mut(variant);
        let combined = match entry.css.remove(&sel) {
            Some(earlier) => earlier.then(Directive::Patch(declarations)),
            None => Directive::Patch(declarations),
        };
        entry.set(sel, combined);
        Ok(())
    }

    /// Returns the overrides for a variant.
    pub fn variant(&self, name: &str) -> Option<&VariantOverrides> {
        self.variants.get(name)
    }

    /// Iterates `(variant, overrides)` pairs in variant-name order.
    pub fn variants(&self) -> impl Iterator<Item = (&str, &VariantOverrides)> {
        self.variants.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns true if no variant carries any directive.
    pub fn is_empty(&self) -> bool {
        self.variants.values().all(VariantOverrides::is_empty)
    }

    /// Total number of directives across variants.
    pub fn len(&self) -> usize {
        self.variants.values().map(VariantOverrides::len).sum()
    }

    fn variant_mut(&mut self, name: &str) -> &mut VariantOverrides {
        self.variants.entry(name.to_string()).or_default()
    }

    fn selector(&self, variant: &str, selector: &str) -> Result<Selector, ConfigError> {
        Selector::parse(selector).map_err(|message| {
            ConfigError::schema(
                format!("theme.extend.typography.{}.css.{}", variant, selector),
                message,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "theme.extend.typography";

    fn parse(text: &str) -> Result<TypographyOverrides, ConfigError> {
        let value: serde_yaml::Value = serde_yaml::from_str(text).unwrap();
        TypographyOverrides::parse(&value, KEY)
    }

    #[test]
    fn test_parse_default_variant() {
        let overrides = parse(
            r#"
            DEFAULT:
              css:
                strong: none
                "code::before":
                  content: none
                pre code:
                  white-space: pre-wrap
            "#,
        )
        .unwrap();

        let variant = overrides.variant(DEFAULT_VARIANT).unwrap();
        assert_eq!(variant.len(), 3);
        assert!(variant.get("strong").unwrap().is_suppress());
        assert_eq!(
            variant.get("pre code").unwrap().declarations().unwrap().get("white-space"),
            Some("pre-wrap")
        );
    }

    #[test]
    fn test_parse_css_sequence_merges_in_order() {
        let overrides = parse(
            r#"
            DEFAULT:
              css:
                - a:
                    color: red
                    text-decoration: none
                - a:
                    color: blue
                - strong:
                    font-weight: 700
                - strong: none
            "#,
        )
        .unwrap();

        let variant = overrides.variant(DEFAULT_VARIANT).unwrap();
        let a = variant.get("a").unwrap().declarations().unwrap();
        assert_eq!(a.get("color"), Some("blue"));
        assert_eq!(a.get("text-decoration"), Some("none"));
        assert!(variant.get("strong").unwrap().is_suppress());
    }

    #[test]
    fn test_parse_multiple_variants() {
        let overrides = parse(
            r#"
            DEFAULT:
              css: { img: none }
            lg:
              css: { figure: none }
            "#,
        )
        .unwrap();
        assert_eq!(overrides.variants().count(), 2);
        assert_eq!(overrides.len(), 2);
    }

    #[test]
    fn test_parse_variant_without_css_is_empty() {
        let overrides = parse("DEFAULT: {}").unwrap();
        assert!(overrides.is_empty());
    }

    #[test]
    fn test_parse_not_mapping() {
        let err = parse("[1, 2]").unwrap_err();
        assert!(matches!(err, ConfigError::Schema { ref key, .. } if key == KEY));
    }

    #[test]
    fn test_parse_bad_directive_reports_full_path() {
        let err = parse("DEFAULT:\n  css:\n    strong: 5").unwrap_err();
        match err {
            ConfigError::Schema { key, .. } => {
                assert_eq!(key, "theme.extend.typography.DEFAULT.css.strong")
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_css_scalar_rejected() {
        assert!(parse("DEFAULT:\n  css: none").is_err());
    }

    #[test]
    fn test_parse_bad_selector_rejected() {
        assert!(parse("DEFAULT:\n  css:\n    'a; b': none").is_err());
    }

    #[test]
    fn test_builder_suppress_and_patch() {
        let mut overrides = TypographyOverrides::new();
        overrides.suppress("DEFAULT", "img").unwrap();
        overrides
            .patch(
                "DEFAULT",
                "pre code",
                Declarations::new().set("white-space", "pre-wrap"),
            )
            .unwrap();
        overrides
            .patch("DEFAULT", "pre code", Declarations::new().set("tab-size", "4"))
            .unwrap();

        let variant = overrides.variant("DEFAULT").unwrap();
        let decls = variant.get("pre code").unwrap().declarations().unwrap();
        assert_eq!(decls.len(), 2);
        assert!(variant.get("img").unwrap().is_suppress());
    }

    #[test]
    fn test_builder_rejects_bad_selector() {
        let mut overrides = TypographyOverrides::new();
        assert!(overrides.suppress("DEFAULT", "").is_err());
    }
}
