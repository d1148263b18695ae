//! # pushdown-sql
//!
//! The SQLite statement grammar, run through the `pushdown-core` driver.
//!
//! This crate provides:
//! - [`SQL_TABLES`]: the compiled LALR(1) tables (328 rules, keyword
//!   fallback to `ID`, `ANY` as the wildcard terminal)
//! - [`Lexer`]: a scanner producing grammar terminals
//! - [`SqlGrammar`]: semantic actions building a concrete syntax tree
//! - [`parse_sql`]: the statement runner tying them together
//!
//! ## Parsing statements
//!
//! ```rust
//! use pushdown_sql::parse_sql;
//!
//! let parsed = parse_sql("SELECT * FROM users WHERE id = 1").unwrap();
//! assert_eq!(parsed.statements, 1);
//!
//! let tree = parsed.tree.unwrap();
//! assert!(tree.find("where_opt").is_some_and(|w| !w.is_empty()));
//!
//! let err = parse_sql("SELECT * FROM").unwrap_err();
//! assert_eq!(err.to_string(), "incomplete input");
//! ```

pub mod error;
pub mod grammar;
pub mod lexer;
pub mod syntax;
pub mod tables;

use pushdown_core::{Outcome, Parser, ParserConfig, ParserStats, Span};
use serde::Serialize;

pub use error::{Diagnostic, LexError, SqlError};
pub use grammar::{ExplainMode, SqlContext, SqlGrammar};
pub use lexer::{Lexer, SqlToken};
pub use syntax::{SqlValue, SyntaxNode};
pub use tables::{token, SQL_TABLES};

/// A successfully parsed batch of statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SqlParse {
    /// The `input` node, or `None` when the text held no tokens.
    pub tree: Option<SyntaxNode>,
    /// Number of complete statements, empty `;` statements excluded.
    pub statements: usize,
    pub explain: ExplainMode,
    pub stats: ParserStats,
}

/// Parses one or more `;`-separated SQL statements with the default
/// parser configuration.
///
/// # Errors
///
/// See [`parse_sql_with`].
pub fn parse_sql(sql: &str) -> Result<SqlParse, SqlError> {
    parse_sql_with(sql, &ParserConfig::default())
}

/// Parses one or more `;`-separated SQL statements.
///
/// A missing final `;` is supplied. Parsing continues past syntax errors so
/// every diagnostic is collected.
///
/// # Errors
///
/// Returns [`SqlError::Lex`] if the text cannot be scanned,
/// [`SqlError::Syntax`] if any diagnostic was recorded, and
/// [`SqlError::StackOverflow`] if the statements nest too deeply.
pub fn parse_sql_with(sql: &str, config: &ParserConfig) -> Result<SqlParse, SqlError> {
    let tokens = Lexer::new(sql).tokenize()?;
    tracing::debug!(tokens = tokens.len(), "scanned sql");

    let mut parser = Parser::new(SqlGrammar, config)?;
    let mut ctx = SqlContext::new();
    let mut outcome = Outcome::Pending;
    let mut last = None;
    let end = sql.len();

    for token in tokens.into_iter().filter(|token| !token.is_eof()) {
        last = Some(token.code);
        outcome = parser.consume(token.code, SqlValue::Token(token), &mut ctx)?;
        if !outcome.is_pending() {
            break;
        }
    }

    if last.is_none() {
        return Ok(SqlParse {
            tree: None,
            statements: 0,
            explain: ExplainMode::Off,
            stats: *parser.stats(),
        });
    }

    if outcome.is_pending() && last != Some(token::SEMI) {
        let semi = SqlToken::synthetic(token::SEMI, end);
        outcome = parser.consume(token::SEMI, SqlValue::Token(semi), &mut ctx)?;
    }
    if outcome.is_pending() {
        let eof = SqlToken::synthetic(token::EOF, end);
        outcome = parser.consume(token::EOF, SqlValue::Token(eof), &mut ctx)?;
    }

    let stats = *parser.stats();
    match outcome {
        Outcome::Accepted(Some(SqlValue::Node(tree))) if ctx.diagnostics.is_empty() => {
            Ok(SqlParse {
                tree: Some(tree),
                statements: ctx.statements,
                explain: ctx.explain,
                stats,
            })
        }
        _ => {
            let mut diagnostics = ctx.diagnostics;
            if diagnostics.is_empty() {
                diagnostics.push(Diagnostic::new("incomplete input", Span::empty_at(end)));
            }
            Err(SqlError::Syntax { diagnostics })
        }
    }
}
