//! # pushdown-core
//!
//! A table-driven LALR(1) push parser in the style of the lemon parser
//! generator's driver.
//!
//! This crate provides:
//! - [`ParseTables`]: compressed action/goto tables for one grammar
//! - [`Parser`]: the driver, fed one terminal at a time
//! - [`Grammar`]: the seam where a grammar plugs in its semantic actions,
//!   error reporting and value disposal
//! - Error recovery with an optional `error` symbol, fallback tokens and a
//!   wildcard token
//!
//! ## Feeding a parser
//!
//! ```rust,ignore
//! use pushdown_core::{Outcome, Parser, ParserConfig};
//!
//! let mut parser = Parser::new(MyGrammar, &ParserConfig::default())?;
//! for (code, value) in tokens {
//!     match parser.consume(code, value, &mut ctx)? {
//!         Outcome::Pending => continue,
//!         Outcome::Accepted(tree) => return Ok(tree),
//!         Outcome::Failed => break,
//!     }
//! }
//! ```
//!
//! Values handed to the parser are owned by it until they are moved into a
//! reduction, returned on accept, or passed to [`Grammar::dispose`]. Each
//! value takes exactly one of those paths, including when the parser is
//! dropped mid-parse.

pub mod config;
pub mod driver;
pub mod error;
pub mod grammar;
pub mod recovery;
pub mod resolver;
pub mod span;
pub mod stack;
pub mod tables;
pub mod trace;

pub use config::{ParserConfig, StackLimit};
pub use driver::{Outcome, Parser, ParserStats};
pub use error::{ConfigError, DriverError, TableError};
pub use grammar::{Grammar, Rhs};
pub use recovery::RecoveryState;
pub use resolver::{find_reduce_action, find_shift_action, Resolution, Substitution};
pub use span::Span;
pub use stack::StackEntry;
pub use tables::{Action, ActionBounds, ParseTables, RuleId, RuleInfo, StateId, SymbolCode};
pub use trace::{LogTrace, TraceEvent, TraceLog, TraceSink};
