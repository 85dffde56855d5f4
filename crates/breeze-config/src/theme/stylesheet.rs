//! Resolved preset stylesheets and the override merge.
//!
//! A [`Stylesheet`] is what a preset looks like once all directives have been
//! applied: variant → selector → declarations. There are no sentinels left in
//! a stylesheet; a suppressed selector simply has no rule.
//!
//! ## How Overrides Apply
//!
//! For every variant and every selector present in either the preset or the
//! overrides:
//!
//! 1. `Suppress` → the selector gets no rule, whatever the preset says
//! 2. `Patch` → override properties replace preset properties, the rest stay
//! 3. no directive → the preset rule is kept as is
//!
//! A patch for a selector the preset does not define creates a new rule.
//! Nothing recurses below the selector level.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::css::Selector;

use super::directive::{Declarations, Directive};
use super::overrides::TypographyOverrides;

/// Rules of one variant, keyed by selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: BTreeMap<Selector, Declarations>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the declarations for a selector.
    pub fn get(&self, selector: &str) -> Option<&Declarations> {
        self.rules.get(selector)
    }

    /// Returns true if the selector has a rule.
    pub fn contains(&self, selector: &str) -> bool {
        self.rules.contains_key(selector)
    }

    /// Iterates `(selector, declarations)` pairs in selector order.
    pub fn iter(&self) -> impl Iterator<Item = (&Selector, &Declarations)> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn insert(&mut self, selector: Selector, declarations: Declarations) {
        self.rules.insert(selector, declarations);
    }
}

/// A preset stylesheet with variants such as `DEFAULT` and `lg`.
///
/// # Example
///
/// ```rust
/// use breeze_config::{Declarations, Stylesheet, TypographyOverrides};
///
/// let preset = Stylesheet::new()
///     .rule("DEFAULT", "strong", Declarations::new().set("font-weight", "600"))
///     .rule("DEFAULT", "pre code", Declarations::new().set("padding", "0"));
///
/// let mut overrides = TypographyOverrides::new();
/// overrides.suppress("DEFAULT", "strong").unwrap();
///
/// let merged = preset.apply_overrides(&overrides);
/// let rules = merged.variant("DEFAULT").unwrap();
/// assert!(!rules.contains("strong"));
/// assert!(rules.contains("pre code"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Stylesheet {
    variants: BTreeMap<String, RuleSet>,
}

impl Stylesheet {
    /// Creates an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule, returning `self` for chaining.
    ///
    /// Selectors that fail [`Selector::parse`] are skipped with a warning; the
    /// builder is meant for presets written in code.
    pub fn rule(mut self, variant: &str, selector: &str, declarations: Declarations) -> Self {
        match Selector::parse(selector) {
            Ok(sel) => self
                .variants
                .entry(variant.to_string())
                .or_default()
                .insert(sel, declarations),
            Err(message) => {
                tracing::warn!(variant, selector, %message, "skipping invalid preset selector");
            }
        }
        self
    }

    /// Returns the rules of a variant.
    pub fn variant(&self, name: &str) -> Option<&RuleSet> {
        self.variants.get(name)
    }

    /// Iterates `(variant, rules)` pairs in variant-name order.
    pub fn variants(&self) -> impl Iterator<Item = (&str, &RuleSet)> {
        self.variants.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the rule for a selector in a variant.
    pub fn get(&self, variant: &str, selector: &str) -> Option<&Declarations> {
        self.variants.get(variant).and_then(|rules| rules.get(selector))
    }

    /// Returns true if no variant has any rule.
    pub fn is_empty(&self) -> bool {
        self.variants.values().all(RuleSet::is_empty)
    }

    /// Total number of rules across variants.
    pub fn len(&self) -> usize {
        self.variants.values().map(RuleSet::len).sum()
    }

    /// Layers another stylesheet on top of this one.
    ///
    /// Rules from `other` replace rules for the same variant and selector.
    /// Used to stack presets from several plugins in load order.
    pub fn merge(mut self, other: Stylesheet) -> Self {
        for (variant, rules) in other.variants {
            self.variants.entry(variant).or_default().rules.extend(rules.rules);
        }
        self
    }

    /// Applies a configuration's overrides to this preset.
    pub fn apply_overrides(&self, overrides: &TypographyOverrides) -> Stylesheet {
        let mut merged = self.clone();

        for (variant, directives) in overrides.variants() {
            let rules = merged.variants.entry(variant.to_string()).or_default();

            for (selector, directive) in directives.iter() {
                match directive {
                    Directive::Suppress => {
                        if rules.rules.remove(selector).is_some() {
                            tracing::debug!(variant, %selector, "suppressed preset rule");
                        }
                    }
                    Directive::Patch(patch) => {
                        let patched = match rules.rules.get(selector) {
                            Some(base) => base.patched(patch),
                            None => patch.clone(),
                        };
                        tracing::trace!(variant, %selector, props = patch.len(), "patched preset rule");
                        rules.insert(selector.clone(), patched);
                    }
                }
            }
        }

        merged.variants.retain(|_, rules| !rules.is_empty());
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preset() -> Stylesheet {
        Stylesheet::new()
            .rule(
                "DEFAULT",
                "strong",
                Declarations::new()
                    .set("color", "var(--tw-prose-bold)")
                    .set("font-weight", "600"),
            )
            .rule(
                "DEFAULT",
                "code::before",
                Declarations::new().set("content", "\"`\""),
            )
            .rule(
                "DEFAULT",
                "pre code",
                Declarations::new()
                    .set("background-color", "transparent")
                    .set("padding", "0")
                    .set("white-space", "pre"),
            )
            .rule(
                "lg",
                "strong",
                Declarations::new().set("font-size", "1em"),
            )
    }

    // =========================================================================
    // Builder
    // =========================================================================

    #[test]
    fn test_new_is_empty() {
        assert!(Stylesheet::new().is_empty());
        assert_eq!(Stylesheet::new().len(), 0);
    }

    #[test]
    fn test_rule_builder() {
        let sheet = preset();
        assert_eq!(sheet.len(), 4);
        assert_eq!(sheet.variants().count(), 2);
        assert_eq!(sheet.get("DEFAULT", "strong").unwrap().get("font-weight"), Some("600"));
    }

    #[test]
    fn test_rule_builder_skips_invalid_selector() {
        let sheet = Stylesheet::new().rule("DEFAULT", "a {", Declarations::new());
        assert!(sheet.is_empty());
    }

    // =========================================================================
    // apply_overrides
    // =========================================================================

    #[test]
    fn test_no_overrides_is_identity() {
        let sheet = preset();
        assert_eq!(sheet.apply_overrides(&TypographyOverrides::new()), sheet);
    }

    #[test]
    fn test_suppress_removes_rule() {
        let mut overrides = TypographyOverrides::new();
        overrides.suppress("DEFAULT", "strong").unwrap();

        let merged = preset().apply_overrides(&overrides);
        assert!(merged.get("DEFAULT", "strong").is_none());
        // Other variants are untouched.
        assert!(merged.get("lg", "strong").is_some());
    }

    #[test]
    fn test_suppress_missing_selector_is_noop() {
        let mut overrides = TypographyOverrides::new();
        overrides.suppress("DEFAULT", "figure").unwrap();

        let merged = preset().apply_overrides(&overrides);
        assert_eq!(merged, preset());
    }

    #[test]
    fn test_patch_keeps_other_properties() {
        let mut overrides = TypographyOverrides::new();
        overrides
            .patch(
                "DEFAULT",
                "pre code",
                Declarations::new().set("white-space", "pre-wrap"),
            )
            .unwrap();

        let merged = preset().apply_overrides(&overrides);
        let rule = merged.get("DEFAULT", "pre code").unwrap();
        assert_eq!(rule.get("white-space"), Some("pre-wrap"));
        assert_eq!(rule.get("padding"), Some("0"));
        assert_eq!(rule.get("background-color"), Some("transparent"));
    }

    #[test]
    fn test_patch_new_selector_creates_rule() {
        let mut overrides = TypographyOverrides::new();
        overrides
            .patch("DEFAULT", "kbd", Declarations::new().set("font-family", "inherit"))
            .unwrap();

        let merged = preset().apply_overrides(&overrides);
        assert_eq!(
            merged.get("DEFAULT", "kbd").unwrap().get("font-family"),
            Some("inherit")
        );
    }

    #[test]
    fn test_patch_new_variant() {
        let mut overrides = TypographyOverrides::new();
        overrides
            .patch("xl", "p", Declarations::new().set("margin", "0"))
            .unwrap();

        let merged = preset().apply_overrides(&overrides);
        assert!(merged.variant("xl").is_some());
    }

    #[test]
    fn test_suppressing_all_rules_drops_variant() {
        let mut overrides = TypographyOverrides::new();
        overrides.suppress("lg", "strong").unwrap();

        let merged = preset().apply_overrides(&overrides);
        assert!(merged.variant("lg").is_none());
    }

    // =========================================================================
    // merge
    // =========================================================================

    #[test]
    fn test_merge_later_wins() {
        let base = preset();
        let later = Stylesheet::new().rule(
            "DEFAULT",
            "strong",
            Declarations::new().set("font-weight", "800"),
        );

        let merged = base.merge(later);
        let strong = merged.get("DEFAULT", "strong").unwrap();
        assert_eq!(strong.get("font-weight"), Some("800"));
        // Whole-rule replacement, not a property merge.
        assert!(strong.get("color").is_none());
        assert_eq!(merged.len(), 4);
    }

    #[test]
    fn test_serialize_shape() {
        let sheet = Stylesheet::new().rule(
            "DEFAULT",
            "strong",
            Declarations::new().set("font-weight", "600"),
        );
        let json = serde_json::to_string(&sheet).unwrap();
        assert_eq!(json, r#"{"DEFAULT":{"strong":{"font-weight":"600"}}}"#);
    }
}
