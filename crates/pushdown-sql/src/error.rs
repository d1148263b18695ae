//! Error types for SQL scanning and parsing.

use std::fmt;

use pushdown_core::{DriverError, Span};
use serde::Serialize;

/// Errors raised by the SQL scanner.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A `'...'` literal with no closing quote.
    #[error("unterminated string literal at offset {offset}")]
    UnterminatedString {
        /// Offset of the opening quote.
        offset: usize,
    },

    /// A `"..."`, `` `...` `` or `[...]` identifier with no closing delimiter.
    #[error("unterminated quoted identifier at offset {offset}")]
    UnterminatedIdentifier {
        /// Offset of the opening delimiter.
        offset: usize,
    },

    /// An `x'...'` literal with an odd number of digits or a non-hex character.
    #[error("malformed blob literal {text} at offset {offset}")]
    MalformedBlob { text: String, offset: usize },

    /// Text that starts no token.
    #[error("unrecognized token: \"{text}\"")]
    Unrecognized { text: String, offset: usize },
}

/// One problem recorded while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub message: String,
    /// Location of the offending token or construct.
    pub span: Span,
}

impl Diagnostic {
    #[must_use]
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at position {}..{}",
            self.message, self.span.start, self.span.end
        )
    }
}

/// Errors returned by [`parse_sql`](crate::parse_sql).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SqlError {
    /// The text could not be scanned.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// The statements are not valid SQL. Holds every diagnostic recorded,
    /// the first one being the syntax error that stopped a clean parse.
    #[error("{}", first_message(.diagnostics))]
    Syntax { diagnostics: Vec<Diagnostic> },

    /// The statements nest deeper than the parse stack allows.
    #[error("parser stack overflow")]
    StackOverflow { capacity: usize },

    /// The driver refused to run.
    #[error(transparent)]
    Driver(DriverError),
}

impl SqlError {
    /// The recorded diagnostics, empty unless this is a syntax error.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Self::Syntax { diagnostics } => diagnostics,
            _ => &[],
        }
    }
}

impl From<DriverError> for SqlError {
    fn from(err: DriverError) -> Self {
        match err {
            DriverError::StackOverflow { capacity } => Self::StackOverflow { capacity },
            other => Self::Driver(other),
        }
    }
}

fn first_message(diagnostics: &[Diagnostic]) -> &str {
    diagnostics
        .first()
        .map_or("syntax error", |diagnostic| diagnostic.message.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_displays_first_message() {
        let err = SqlError::Syntax {
            diagnostics: vec![
                Diagnostic::new("near \"FROM\": syntax error", Span::new(7, 11)),
                Diagnostic::new("incomplete input", Span::new(11, 11)),
            ],
        };
        assert_eq!(err.to_string(), "near \"FROM\": syntax error");
        assert_eq!(err.diagnostics().len(), 2);
    }

    #[test]
    fn test_overflow_from_driver_error() {
        let err = SqlError::from(DriverError::StackOverflow { capacity: 10 });
        assert_eq!(err, SqlError::StackOverflow { capacity: 10 });
        assert_eq!(err.to_string(), "parser stack overflow");
        assert!(matches!(
            SqlError::from(DriverError::Finished),
            SqlError::Driver(DriverError::Finished)
        ));
    }

    #[test]
    fn test_lex_error_message() {
        let err = SqlError::from(LexError::Unrecognized {
            text: "^".to_string(),
            offset: 3,
        });
        assert_eq!(err.to_string(), "unrecognized token: \"^\"");
    }
}
