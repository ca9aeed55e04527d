//! Configuration error types.

/// Errors that can occur when reading, parsing, or interpreting a config sheet.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the sheet from disk.
    #[error("failed to read config: {0}")]
    Read(#[source] std::io::Error),

    /// A non-empty line had no `key = value` shape.
    #[error("syntax error at line {line}: {text:?}")]
    Syntax {
        /// 1-based line number of the offending line.
        line: usize,
        /// The offending line, trimmed.
        text: String,
    },

    /// A required key was absent from the sheet.
    #[error("missing config key: {0:?}")]
    MissingKey(String),

    /// A value could not be parsed into the requested type.
    #[error("invalid value {value:?} for key {key:?}: expected {expected}")]
    InvalidValue {
        /// Key whose value failed to parse.
        key: String,
        /// The raw value text.
        value: String,
        /// Name of the expected type.
        expected: &'static str,
    },
}
