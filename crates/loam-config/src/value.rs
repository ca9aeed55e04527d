//! Borrowed view of a single config value with typed parsing.

use std::str::FromStr;

use crate::ConfigError;

/// A single value looked up from a [`crate::ConfigSheet`].
///
/// The value is stored as text and converted on demand, so callers that use
/// a value repeatedly should parse it once and keep the result.
#[derive(Clone, Copy, Debug)]
pub struct Value<'a> {
    key: &'a str,
    raw: &'a str,
}

impl<'a> Value<'a> {
    pub(crate) fn new(key: &'a str, raw: &'a str) -> Self {
        Self { key, raw }
    }

    /// Returns the raw value text.
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Parses the value into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the key and the raw text
    /// when the conversion fails.
    pub fn parse<T: FromStr>(&self) -> Result<T, ConfigError> {
        self.raw
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue {
                key: self.key.to_string(),
                value: self.raw.to_string(),
                expected: std::any::type_name::<T>(),
            })
    }

    /// Parses the value into `T`, falling back to `default` when the text
    /// does not convert.
    pub fn parse_or<T: FromStr>(&self, default: T) -> T {
        self.raw.parse::<T>().unwrap_or(default)
    }
}
