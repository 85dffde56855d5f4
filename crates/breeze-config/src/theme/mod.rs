//! Theme overrides and the presets they apply to.
//!
//! Plugins ship presets: default stylesheets keyed by variant and selector.
//! A configuration document does not restate a preset. It lists
//! [`Directive`]s that either suppress a selector outright or patch some of
//! its properties, and [`Stylesheet::apply_overrides`] folds them in.
//!
//! ## Design Decision: Suppress vs. Patch as a Type
//!
//! In the document format, `"none"` and a property mapping share a slot. In
//! Rust they are two variants of one enum, so every consumer has to handle
//! the suppression case explicitly:
//!
//! ```rust
//! use breeze_config::Directive;
//!
//! fn describe(d: &Directive) -> String {
//!     match d {
//!         Directive::Suppress => "removed".to_string(),
//!         Directive::Patch(decls) => format!("{} properties patched", decls.len()),
//!     }
//! }
//! ```
//!
//! ## See Also
//!
//! - [`crate::css`]: selector and value checks
//! - [`crate::plugin`]: which plugin provides which preset

mod directive;
mod overrides;
mod preset;
mod stylesheet;

pub use directive::{Declarations, Directive, SUPPRESS};
pub(crate) use directive::type_name;
pub use overrides::{TypographyOverrides, VariantOverrides, DEFAULT_VARIANT};
pub use preset::typography_preset;
pub use stylesheet::{RuleSet, Stylesheet};
