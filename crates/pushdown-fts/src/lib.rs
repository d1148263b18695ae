//! # pushdown-fts
//!
//! The FTS5 full-text query grammar, run through the `pushdown-core`
//! driver.
//!
//! This crate provides:
//! - [`FTS_TABLES`]: the compiled LALR(1) tables
//! - [`Lexer`]: the query scanner
//! - [`FtsGrammar`]: semantic actions building an [`Expr`]
//! - [`parse_query`]: the query runner
//!
//! ## Parsing a query
//!
//! ```rust
//! use pushdown_fts::{parse_query, Expr};
//!
//! let query = parse_query("title : sqlite* OR NEAR(fast parser, 5)").unwrap();
//! let Expr::Or { left, right } = &query.expr else {
//!     panic!("expected OR");
//! };
//! assert_eq!(left.to_string(), "{title} : sqlite*");
//! assert_eq!(right.to_string(), "NEAR(fast parser, 5)");
//!
//! let err = parse_query("a AND").unwrap_err();
//! assert_eq!(err.to_string(), "fts5: syntax error near \"\"");
//! ```
//!
//! Operator precedence, loosest first: `OR`, `AND`, `NOT`. Juxtaposed
//! phrases bind tighter than any operator.

pub mod error;
pub mod expr;
pub mod grammar;
pub mod lexer;
pub mod tables;

use pushdown_core::{Outcome, Parser, ParserConfig, ParserStats, Span};
use serde::Serialize;

pub use error::FtsError;
pub use expr::{Colset, Expr, Nearset, Phrase, Term, DEFAULT_NEAR_DISTANCE};
pub use grammar::{FtsContext, FtsGrammar, FtsValue};
pub use lexer::{FtsToken, Lexer};
pub use tables::{token, FTS_TABLES};

/// A successfully parsed query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FtsQuery {
    pub expr: Expr,
    pub stats: ParserStats,
}

/// Parses a query with no column restriction and the default parser
/// configuration.
///
/// # Errors
///
/// See [`parse_query_with`].
pub fn parse_query(query: &str) -> Result<FtsQuery, FtsError> {
    parse_query_with(query, FtsContext::new(), &ParserConfig::default())
}

/// Parses a query whose colsets may only name `columns`.
///
/// # Errors
///
/// See [`parse_query_with`].
pub fn parse_query_with_columns(query: &str, columns: &[&str]) -> Result<FtsQuery, FtsError> {
    parse_query_with(
        query,
        FtsContext::with_columns(columns.iter().copied()),
        &ParserConfig::default(),
    )
}

/// Parses a query. Parsing stops at the first error.
///
/// # Errors
///
/// Returns [`FtsError::Lex`] if the query cannot be scanned,
/// [`FtsError::Query`] for a syntax or rule error, and
/// [`FtsError::StackOverflow`] if the query nests too deeply.
pub fn parse_query_with(
    query: &str,
    mut ctx: FtsContext,
    config: &ParserConfig,
) -> Result<FtsQuery, FtsError> {
    let tokens = Lexer::new(query).tokenize()?;
    tracing::debug!(tokens = tokens.len(), "scanned fts query");

    let mut parser = Parser::new(FtsGrammar, config)?;
    let mut outcome = Outcome::Pending;
    for token in tokens {
        outcome = parser.consume(token.code, FtsValue::Token(token), &mut ctx)?;
        if ctx.has_error() || !outcome.is_pending() {
            break;
        }
    }

    if let Some(err) = ctx.error {
        return Err(err);
    }
    match outcome {
        Outcome::Accepted(Some(FtsValue::Expr(expr))) => Ok(FtsQuery {
            expr,
            stats: *parser.stats(),
        }),
        _ => Err(FtsError::Query {
            message: "fts5: syntax error near \"\"".to_string(),
            span: Span::empty_at(query.len()),
        }),
    }
}
