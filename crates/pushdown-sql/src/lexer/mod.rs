//! SQL scanner.
//!
//! This module provides a hand-written lexer that turns SQL text into
//! grammar terminals, one [`SqlToken`] per lexeme.

mod token;
mod tokenizer;

pub use token::{keyword_code, SqlToken};
pub use tokenizer::Lexer;
