//! Parsing and lookup for flat `key = value` sheets.

use std::collections::BTreeMap;
use std::path::Path;

use crate::{ConfigError, Value};

/// Knobs for the line parser.
///
/// The one option that matters in practice is the comment set: sheets whose
/// values legitimately contain `#` (hex colors in biome data) restrict
/// comments to `;`.
#[derive(Clone, Debug)]
pub struct ParseOptions {
    /// Characters that start a single-line comment.
    pub comment_chars: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            comment_chars: "#;".to_string(),
        }
    }
}

/// An immutable collection of string keys and values parsed from a flat
/// `key = value` text file.
///
/// Keys are dotted to form namespaces (`terrain.scale`, `ocean.color`), but
/// the sheet itself is flat; namespacing is a convention between producers
/// and consumers. Equality compares all entries, which is what hot reload
/// uses to detect changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigSheet {
    entries: BTreeMap<String, String>,
}

impl ConfigSheet {
    /// Creates an empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a sheet from text with default options (`#` and `;` comments).
    ///
    /// Lines are trimmed; blank lines and comments are skipped; the
    /// remainder must contain `=`, splitting into a trimmed key and value.
    /// Empty values are allowed, empty keys are not.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Syntax`] with the 1-based line number for any
    /// line that survives trimming but has no key/value shape.
    pub fn parse_str(text: &str) -> Result<Self, ConfigError> {
        Self::parse_str_with(text, &ParseOptions::default())
    }

    /// Parses a sheet from text with explicit [`ParseOptions`].
    pub fn parse_str_with(text: &str, options: &ParseOptions) -> Result<Self, ConfigError> {
        let mut entries = BTreeMap::new();

        for (idx, raw_line) in text.lines().enumerate() {
            let line = match raw_line.find(|c| options.comment_chars.contains(c)) {
                Some(pos) => &raw_line[..pos],
                None => raw_line,
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let syntax_error = || ConfigError::Syntax {
                line: idx + 1,
                text: raw_line.trim().to_string(),
            };

            let (key, value) = line.split_once('=').ok_or_else(syntax_error)?;
            let key = key.trim();
            if key.is_empty() {
                return Err(syntax_error());
            }
            entries.insert(key.to_string(), value.trim().to_string());
        }

        Ok(Self { entries })
    }

    /// Loads and parses a sheet from a file with default options.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with(path, &ParseOptions::default())
    }

    /// Loads and parses a sheet from a file with explicit [`ParseOptions`].
    pub fn load_with(path: &Path, options: &ParseOptions) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        let sheet = Self::parse_str_with(&text, options)?;
        tracing::debug!(path = %path.display(), entries = sheet.len(), "loaded config sheet");
        Ok(sheet)
    }

    /// Re-reads the file and returns `Some(new_sheet)` if its contents
    /// differ from `self`, `None` when nothing changed.
    pub fn reload(&self, path: &Path) -> Result<Option<Self>, ConfigError> {
        let new_sheet = Self::load(path)?;
        if &new_sheet != self {
            tracing::info!(path = %path.display(), "config sheet changed");
            Ok(Some(new_sheet))
        } else {
            Ok(None)
        }
    }

    /// Looks up a required key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] when the key is absent.
    pub fn get(&self, key: &str) -> Result<Value<'_>, ConfigError> {
        match self.entries.get_key_value(key) {
            Some((k, v)) => Ok(Value::new(k, v)),
            None => Err(ConfigError::MissingKey(key.to_string())),
        }
    }

    /// Looks up an optional key.
    pub fn try_get(&self, key: &str) -> Option<Value<'_>> {
        self.entries.get_key_value(key).map(|(k, v)| Value::new(k, v))
    }

    /// Inserts or overwrites an entry.
    pub fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    /// Number of entries in the sheet.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the sheet has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_sheet() {
        let sheet = ConfigSheet::parse_str(
            "seed = 1337\n\
             chunk_side_length = 64\n\
             terrain.scale = 2.5\n",
        )
        .unwrap();
        assert_eq!(sheet.len(), 3);
        assert_eq!(sheet.get("seed").unwrap().parse::<i32>().unwrap(), 1337);
        assert!((sheet.get("terrain.scale").unwrap().parse::<f32>().unwrap() - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let sheet = ConfigSheet::parse_str(
            "# full-line comment\n\
             ; alternate comment style\n\
             \n\
             seed = 7   ; trailing comment\n\
             fudge = 1.1 # also trailing\n",
        )
        .unwrap();
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.get("seed").unwrap().as_str(), "7");
        assert_eq!(sheet.get("fudge").unwrap().as_str(), "1.1");
    }

    #[test]
    fn test_semicolon_only_comments_keep_hex_values() {
        let options = ParseOptions {
            comment_chars: ";".to_string(),
        };
        let sheet = ConfigSheet::parse_str_with(
            "ocean.color = #1a3c8b ; hex survives\n",
            &options,
        )
        .unwrap();
        assert_eq!(sheet.get("ocean.color").unwrap().as_str(), "#1a3c8b");
    }

    #[test]
    fn test_missing_delimiter_is_syntax_error() {
        let err = ConfigSheet::parse_str("seed = 1\nthis line is broken\n").unwrap_err();
        match err {
            ConfigError::Syntax { line, text } => {
                assert_eq!(line, 2);
                assert_eq!(text, "this line is broken");
            }
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_key_rejected_empty_value_allowed() {
        assert!(ConfigSheet::parse_str("= 5\n").is_err());

        let sheet = ConfigSheet::parse_str("title =\n").unwrap();
        assert_eq!(sheet.get("title").unwrap().as_str(), "");
    }

    #[test]
    fn test_missing_key_error() {
        let sheet = ConfigSheet::parse_str("seed = 1\n").unwrap();
        let err = sheet.get("moisture.octaves").unwrap_err();
        assert!(err.to_string().contains("moisture.octaves"));
    }

    #[test]
    fn test_equality_detects_changes() {
        let a = ConfigSheet::parse_str("seed = 1\nfudge = 1.2\n").unwrap();
        let b = ConfigSheet::parse_str("fudge = 1.2\nseed = 1\n").unwrap();
        let c = ConfigSheet::parse_str("seed = 2\nfudge = 1.2\n").unwrap();
        assert_eq!(a, b, "entry order must not affect equality");
        assert_ne!(a, c);
    }

    #[test]
    fn test_load_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.txt");
        std::fs::write(&path, "seed = 1\n").unwrap();

        let sheet = ConfigSheet::load(&path).unwrap();
        assert!(sheet.reload(&path).unwrap().is_none());

        std::fs::write(&path, "seed = 2\n").unwrap();
        let reloaded = sheet.reload(&path).unwrap().expect("change detected");
        assert_eq!(reloaded.get("seed").unwrap().parse::<i32>().unwrap(), 2);
    }
}
