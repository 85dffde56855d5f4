//! Loading options.

/// What to do with top-level keys the document format does not define.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownKeys {
    /// Skip them. Generators conventionally ignore keys they do not know,
    /// which keeps older tools working with newer documents.
    #[default]
    Ignore,
    /// Fail with [`ConfigError::UnknownKey`](crate::ConfigError::UnknownKey).
    Reject,
}

/// Options for [`ConfigDocument`](crate::ConfigDocument) loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    pub unknown_keys: UnknownKeys,
}

impl LoadOptions {
    /// Permissive loading: unknown top-level keys are ignored.
    pub fn new() -> Self {
        Self::default()
    }

    /// Strict loading: unknown top-level keys are errors.
    pub fn strict() -> Self {
        Self {
            unknown_keys: UnknownKeys::Reject,
        }
    }
}
