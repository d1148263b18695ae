//! Error types for full-text query parsing.

use pushdown_core::{DriverError, Span};

/// Errors returned by [`parse_query`](crate::parse_query).
///
/// Only the first problem in a query is reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FtsError {
    /// The query could not be scanned.
    #[error("{message}")]
    Lex { message: String, offset: usize },

    /// A syntax error, or a semantic error raised by a rule such as an
    /// unknown column or a malformed NEAR group.
    #[error("{message}")]
    Query { message: String, span: Span },

    /// The query nests deeper than the parse stack allows.
    #[error("fts5: parser stack overflow")]
    StackOverflow { capacity: usize },

    /// The driver refused to run.
    #[error(transparent)]
    Driver(DriverError),
}

impl FtsError {
    pub(crate) fn query(message: impl Into<String>, span: Span) -> Self {
        Self::Query {
            message: message.into(),
            span,
        }
    }
}

impl From<DriverError> for FtsError {
    fn from(err: DriverError) -> Self {
        match err {
            DriverError::StackOverflow { capacity } => Self::StackOverflow { capacity },
            other => Self::Driver(other),
        }
    }
}
