//! Configuration documents.
//!
//! A document has three recognized top-level keys:
//!
//! ```yaml
//! content: ["./src/*.rs"]
//! plugins:
//!   - "@tailwindcss/forms"
//!   - "@tailwindcss/typography"
//! theme:
//!   extend:
//!     typography:
//!       DEFAULT:
//!         css:
//!           strong: none                    # suppress the preset rule
//!           "pre code":
//!             whiteSpace: pre-wrap          # patch one property
//! ```
//!
//! Loading is fail-fast: the first malformed section aborts with a
//! [`ConfigError`](crate::ConfigError) naming the offending key.

mod config;
mod options;
mod parser;

pub use config::{ConfigDocument, CONFIG_FILE_NAMES};
pub use options::{LoadOptions, UnknownKeys};
pub use parser::RECOGNIZED_KEYS;
