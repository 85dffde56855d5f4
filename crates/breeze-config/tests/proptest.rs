//! Property-based tests for breeze-config using proptest.

use breeze_config::{
    typography_preset, ConfigDocument, ConfigError, Declarations, Stylesheet, DEFAULT_VARIANT,
};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

const SELECTORS: &[&str] = &[
    "p", "a", "strong", "em", "code", "pre", "pre code", "img", "figure", "h1", "h2",
    "blockquote", "ul > li", "code::before",
];

const PROPERTIES: &[&str] = &["color", "margin-top", "font-weight", "white-space", "content"];

fn selector_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(SELECTORS)
}

fn declarations_strategy() -> impl Strategy<Value = Vec<(&'static str, String)>> {
    prop::collection::vec((prop::sample::select(PROPERTIES), "[a-z0-9]{1,8}"), 1..4)
}

/// A plugin entry that is a bare identifier.
fn plugin_id_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,12}".prop_map(|s| format!("'{}'", s))
}

fn yaml_plugins(entries: &[String]) -> String {
    format!("plugins: [{}]\n", entries.join(", "))
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// A plugin list of identifiers always parses.
    #[test]
    fn string_plugin_lists_load(ids in prop::collection::vec(plugin_id_strategy(), 0..6)) {
        let doc = ConfigDocument::from_yaml(&yaml_plugins(&ids));
        prop_assert!(doc.is_ok());
        prop_assert_eq!(doc.unwrap().plugins().len(), ids.len());
    }

    /// Any number anywhere in the plugin list is a schema error at its index.
    #[test]
    fn numbers_in_plugin_lists_are_schema_errors(
        mut ids in prop::collection::vec(plugin_id_strategy(), 0..6),
        number in any::<i32>(),
        slot in any::<prop::sample::Index>(),
    ) {
        let at = slot.index(ids.len() + 1);
        ids.insert(at, number.to_string());

        let err = ConfigDocument::from_yaml(&yaml_plugins(&ids)).unwrap_err();
        let expected = format!("plugins[{}]", at);
        prop_assert!(
            matches!(err, ConfigError::Schema { ref key, .. } if *key == expected),
            "unexpected error: {:?}", err
        );
    }

    /// Suppressed selectors never survive the merge, whatever else is patched.
    #[test]
    fn suppression_always_wins(
        suppressed in prop::collection::btree_set(selector_strategy(), 1..5),
        patched in prop::collection::vec((selector_strategy(), declarations_strategy()), 0..5),
    ) {
        let mut doc = ConfigDocument::new();
        for (selector, decls) in &patched {
            if !suppressed.contains(selector) {
                doc = doc.patch(DEFAULT_VARIANT, selector, decls.iter().map(|(k, v)| (*k, v.clone())));
            }
        }
        for selector in &suppressed {
            doc = doc.suppress(DEFAULT_VARIANT, selector);
        }
        prop_assert!(doc.validate().is_ok());

        let merged = typography_preset().apply_overrides(doc.typography());
        for selector in &suppressed {
            prop_assert!(merged.get(DEFAULT_VARIANT, selector).is_none());
        }
    }

    /// Patching never drops a preset property, and patched values always land.
    #[test]
    fn patches_are_non_destructive(
        selector in selector_strategy(),
        decls in declarations_strategy(),
    ) {
        let doc = ConfigDocument::new().patch(
            DEFAULT_VARIANT,
            selector,
            decls.iter().map(|(k, v)| (*k, v.clone())),
        );
        let merged = typography_preset().apply_overrides(doc.typography());
        let rule = merged.get(DEFAULT_VARIANT, selector).unwrap();

        if let Some(base) = typography_preset().get(DEFAULT_VARIANT, selector) {
            for (property, _) in base.iter() {
                prop_assert!(rule.contains(property));
            }
        }
        let expected: Declarations = decls.iter().map(|(k, v)| (*k, v.clone())).collect();
        for (property, value) in expected.iter() {
            prop_assert_eq!(rule.get(property), Some(value));
        }
    }

    /// Layering a stylesheet on itself changes nothing.
    #[test]
    fn merge_with_self_is_identity(selector in selector_strategy(), decls in declarations_strategy()) {
        let sheet = Stylesheet::new().rule(
            DEFAULT_VARIANT,
            selector,
            decls.iter().map(|(k, v)| (*k, v.clone())).collect(),
        );
        prop_assert_eq!(sheet.clone().merge(sheet.clone()), sheet);
    }
}
