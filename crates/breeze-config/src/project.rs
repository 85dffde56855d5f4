//! This repository's own configuration.
//!
//! The same document ships as `breeze.config.yaml` at the workspace root.
//! Prose keeps the preset's spacing and colours but drops the emphasis,
//! media and inline-code decorations, and lets code blocks wrap.

use crate::document::ConfigDocument;
use crate::theme::DEFAULT_VARIANT;

/// Preset selectors the project suppresses in the `DEFAULT` variant.
pub const SUPPRESSED_SELECTORS: &[&str] = &["strong", "img", "figure", "a", "code", "pre"];

/// Builds the project configuration.
pub fn project_config() -> ConfigDocument {
    let doc = ConfigDocument::new()
        .with_content("./src/*.rs")
        .with_plugin("@tailwindcss/forms")
        .with_plugin("@tailwindcss/typography");

    SUPPRESSED_SELECTORS
        .iter()
        .fold(doc, |doc, selector| doc.suppress(DEFAULT_VARIANT, selector))
        .patch(DEFAULT_VARIANT, "code::before", [("content", "none")])
        .patch(DEFAULT_VARIANT, "code::after", [("content", "none")])
        .patch(DEFAULT_VARIANT, "pre code", [("white-space", "pre-wrap")])
}
