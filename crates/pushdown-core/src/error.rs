//! Error types for the parser driver.

use std::path::PathBuf;

use crate::tables::SymbolCode;

/// Errors returned by [`Parser`](crate::Parser) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DriverError {
    /// The parse stack hit its capacity, or growing it failed.
    ///
    /// The stack has been unwound and every value on it disposed. The parser
    /// refuses further input until [`Parser::reset`](crate::Parser::reset).
    #[error("parser stack overflow (capacity {capacity})")]
    StackOverflow {
        /// Capacity of the stack when the push was refused.
        capacity: usize,
    },

    /// Allocating the initial parse stack failed.
    #[error("failed to allocate a parse stack of {requested} entries")]
    AllocationFailure {
        /// Number of entries requested.
        requested: usize,
    },

    /// Input was fed after the parse accepted, failed or overflowed.
    #[error("parser already finished; reset it before feeding more input")]
    Finished,
}

/// Inconsistencies detected by [`ParseTables::validate`](crate::ParseTables::validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// The action code ranges overlap or are out of order.
    #[error("action code ranges are not ordered")]
    Bounds,

    /// A table has the wrong number of entries.
    #[error("table '{table}' has {found} entries, expected {expected}")]
    LengthMismatch {
        /// Name of the offending table.
        table: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        found: usize,
    },

    /// A rule reduces to a terminal or an unknown symbol.
    #[error("rule {rule} has invalid left-hand side {lhs}")]
    BadRuleLhs {
        /// Offending rule.
        rule: usize,
        /// Its left-hand side.
        lhs: SymbolCode,
    },

    /// An action code falls between the defined ranges.
    #[error("action code {0} is outside every action range")]
    BadActionCode(u16),

    /// A fallback maps to a non-terminal or to a terminal that itself falls back.
    #[error("fallback {from} -> {to} is invalid")]
    BadFallback {
        /// Terminal with the fallback.
        from: usize,
        /// Substitute terminal.
        to: SymbolCode,
    },

    /// The wildcard or error symbol is not a valid code.
    #[error("symbol {0} is not valid here")]
    BadSymbol(SymbolCode),
}

/// Errors that can occur while loading a [`ParserConfig`](crate::ParserConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Reading the configuration file failed.
    #[error("failed to read config '{path}': {source}")]
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The configuration is not valid JSON for [`ParserConfig`](crate::ParserConfig).
    #[error("invalid parser config: {0}")]
    Json(#[from] serde_json::Error),

    /// A fixed stack needs room for at least the bottom entry.
    #[error("stack depth must be at least 1")]
    ZeroDepth,
}
