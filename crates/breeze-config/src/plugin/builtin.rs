//! Registry entries for the first-party plugins.
//!
//! Only what the configuration layer needs is modelled: identifiers, the
//! theme key a plugin reads, its preset, and its options.

use crate::theme::{typography_preset, Stylesheet};

use super::Plugin;

/// `@tailwindcss/forms`: form element resets.
#[derive(Debug, Default, Clone, Copy)]
pub struct FormsPlugin;

impl Plugin for FormsPlugin {
    fn id(&self) -> &str {
        "@tailwindcss/forms"
    }

    fn aliases(&self) -> &[&'static str] {
        &["forms"]
    }

    fn validate_options(&self, options: &serde_yaml::Mapping) -> Result<(), String> {
        for (name, value) in options {
            match name.as_str() {
                Some("strategy") => match value.as_str() {
                    Some("base") | Some("class") => {}
                    _ => {
                        return Err(format!(
                            "strategy must be \"base\" or \"class\", got {:?}",
                            value
                        ))
                    }
                },
                _ => return Err(format!("unknown option {:?}", name)),
            }
        }
        Ok(())
    }
}

/// `@tailwindcss/typography`: the `prose` rich-text styles.
#[derive(Debug, Default, Clone, Copy)]
pub struct TypographyPlugin;

/// Theme key read by [`TypographyPlugin`].
pub const TYPOGRAPHY_KEY: &str = "typography";

impl Plugin for TypographyPlugin {
    fn id(&self) -> &str {
        "@tailwindcss/typography"
    }

    fn aliases(&self) -> &[&'static str] {
        &["typography"]
    }

    fn theme_key(&self) -> Option<&str> {
        Some(TYPOGRAPHY_KEY)
    }

    fn preset(&self) -> Option<&Stylesheet> {
        Some(typography_preset())
    }

    fn validate_options(&self, options: &serde_yaml::Mapping) -> Result<(), String> {
        for (name, value) in options {
            match name.as_str() {
                Some("className") => {
                    let class = value
                        .as_str()
                        .ok_or_else(|| format!("className must be a string, got {:?}", value))?;
                    let valid = !class.is_empty()
                        && !class.starts_with(|c: char| c.is_ascii_digit())
                        && class
                            .chars()
                            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
                    if !valid {
                        return Err(format!("className '{}' is not a valid class name", class));
                    }
                }
                Some("target") => match value.as_str() {
                    Some("modern") | Some("legacy") => {}
                    _ => {
                        return Err(format!(
                            "target must be \"modern\" or \"legacy\", got {:?}",
                            value
                        ))
                    }
                },
                _ => return Err(format!("unknown option {:?}", name)),
            }
        }
        Ok(())
    }
}

/// `@tailwindcss/aspect-ratio`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AspectRatioPlugin;

impl Plugin for AspectRatioPlugin {
    fn id(&self) -> &str {
        "@tailwindcss/aspect-ratio"
    }

    fn aliases(&self) -> &[&'static str] {
        &["aspect-ratio"]
    }
}

/// `@tailwindcss/container-queries`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContainerQueriesPlugin;

impl Plugin for ContainerQueriesPlugin {
    fn id(&self) -> &str {
        "@tailwindcss/container-queries"
    }

    fn aliases(&self) -> &[&'static str] {
        &["container-queries"]
    }
}
