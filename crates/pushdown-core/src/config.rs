//! Parser configuration.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Depth of the parse stack used when nothing else is configured.
pub const DEFAULT_STACK_DEPTH: usize = 100;

/// Number of shifts after a syntax error during which further errors are
/// not reported.
pub const DEFAULT_QUIET_SHIFTS: u32 = 3;

/// How the parse stack is sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackLimit {
    /// At most this many entries, including the bottom entry. Overflowing
    /// aborts the parse.
    Fixed(usize),
    /// Starts with `initial` entries and grows on demand.
    Growable {
        /// Initial capacity.
        #[serde(default = "default_depth")]
        initial: usize,
    },
}

impl Default for StackLimit {
    fn default() -> Self {
        Self::Fixed(DEFAULT_STACK_DEPTH)
    }
}

const fn default_depth() -> usize {
    DEFAULT_STACK_DEPTH
}

/// Settings for a [`Parser`](crate::Parser).
///
/// ```
/// use pushdown_core::{ParserConfig, StackLimit};
///
/// let config = ParserConfig::from_json_str(r#"{ "stack": { "fixed": 40 } }"#).unwrap();
/// assert_eq!(config.stack, StackLimit::Fixed(40));
/// assert_eq!(config.quiet_shifts, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserConfig {
    pub stack: StackLimit,
    /// Length of the quiet window after a syntax error, in shifted tokens.
    pub quiet_shifts: u32,
    /// When set, trace events are logged through `tracing` with this prefix.
    pub trace_prefix: Option<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            stack: StackLimit::default(),
            quiet_shifts: DEFAULT_QUIET_SHIFTS,
            trace_prefix: None,
        }
    }
}

impl ParserConfig {
    /// A configuration with a fixed stack of `depth` entries.
    #[must_use]
    pub fn with_depth(depth: usize) -> Self {
        Self {
            stack: StackLimit::Fixed(depth),
            ..Self::default()
        }
    }

    /// A configuration with a growable stack.
    #[must_use]
    pub fn growable() -> Self {
        Self {
            stack: StackLimit::Growable {
                initial: DEFAULT_STACK_DEPTH,
            },
            ..Self::default()
        }
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or describes an empty
    /// fixed stack.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Reads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid
    /// configuration.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.stack == StackLimit::Fixed(0) {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = ParserConfig::default();
        assert_eq!(config.stack, StackLimit::Fixed(100));
        assert_eq!(config.quiet_shifts, 3);
        assert!(config.trace_prefix.is_none());
    }

    #[test]
    fn test_from_json_growable() {
        let config = ParserConfig::from_json_str(
            r#"{ "stack": { "growable": {} }, "quiet_shifts": 5, "trace_prefix": "sql: " }"#,
        )
        .unwrap();
        assert_eq!(config.stack, StackLimit::Growable { initial: 100 });
        assert_eq!(config.quiet_shifts, 5);
        assert_eq!(config.trace_prefix.as_deref(), Some("sql: "));
    }

    #[test]
    fn test_from_json_empty_object_is_default() {
        assert_eq!(
            ParserConfig::from_json_str("{}").unwrap(),
            ParserConfig::default()
        );
    }

    #[test]
    fn test_zero_depth_rejected() {
        let err = ParserConfig::from_json_str(r#"{ "stack": { "fixed": 0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroDepth));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = ParserConfig::from_json_str(r#"{ "depth": 10 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "stack": {{ "fixed": 12 }} }}"#).unwrap();
        let config = ParserConfig::from_path(file.path()).unwrap();
        assert_eq!(config.stack, StackLimit::Fixed(12));
    }

    #[test]
    fn test_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = ParserConfig::from_path(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
