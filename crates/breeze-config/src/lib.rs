//! Typed configuration documents for utility-first CSS generators.
//!
//! `breeze-config` loads the document that tells a generator which files to
//! scan, which plugins to enable, and how to adjust plugin presets. It checks
//! everything up front so that a generator either gets a complete
//! [`BuildPlan`] or a single [`ConfigError`].
//!
//! # Quick Start
//!
//! ```rust
//! use breeze_config::{BuildPlan, ConfigDocument, PlanContext, PluginRegistry};
//!
//! let doc = ConfigDocument::from_yaml(r#"
//! content: ["./src/*.rs"]
//! plugins: ["@tailwindcss/forms", "@tailwindcss/typography"]
//! theme:
//!   extend:
//!     typography:
//!       DEFAULT:
//!         css:
//!           strong: none
//!           "pre code": { whiteSpace: pre-wrap }
//! "#).unwrap();
//!
//! let registry = PluginRegistry::with_builtins();
//! let plan = BuildPlan::prepare(&doc, &registry, &PlanContext::new(std::env::temp_dir())).unwrap();
//!
//! let prose = plan.typography().unwrap();
//! assert!(prose.get("DEFAULT", "strong").is_none());
//! for warning in plan.warnings() {
//!     eprintln!("warning: {warning}");
//! }
//! ```
//!
//! # Overrides
//!
//! Under `theme.extend.typography.<variant>.css`, each selector maps to
//! either:
//!
//! - `none`: the preset rule is removed entirely
//! - a property mapping: those properties are replaced or added, all other
//!   preset properties stay
//!
//! Property names may be written camelCase (`whiteSpace`) or kebab-case
//! (`white-space`).
//!
//! # Errors and Warnings
//!
//! Malformed documents and unknown plugins are fatal and raised before any
//! content is touched. Content patterns that match nothing only produce a
//! [`Warning`], which is also logged through `tracing`.

pub mod content;
pub mod css;
pub mod document;
mod error;
pub mod plan;
pub mod plugin;
mod project;
pub mod theme;

pub use content::{ContentConfig, ResolvedContent, EXCLUDE_PREFIX};
pub use css::Selector;
pub use document::{ConfigDocument, LoadOptions, UnknownKeys, CONFIG_FILE_NAMES, RECOGNIZED_KEYS};
pub use error::{ConfigError, Warning};
pub use plan::{BuildPlan, PlanContext};
pub use plugin::{
    AspectRatioPlugin, ContainerQueriesPlugin, FormsPlugin, Plugin, PluginRef, PluginRegistry,
    TypographyPlugin, TYPOGRAPHY_KEY,
};
pub use project::{project_config, SUPPRESSED_SELECTORS};
pub use theme::{
    typography_preset, Declarations, Directive, RuleSet, Stylesheet, TypographyOverrides,
    VariantOverrides, DEFAULT_VARIANT, SUPPRESS,
};
