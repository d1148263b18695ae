//! Full-text query scanner.
//!
//! Barewords and `"quoted strings"` both scan as `STRING`; only the exact
//! uppercase barewords `AND`, `OR` and `NOT` are operators.

use std::borrow::Cow;

use pushdown_core::{Span, SymbolCode};
use serde::Serialize;

use crate::error::FtsError;
use crate::tables::{token, FTS_TABLES};

/// One lexeme of a query. `text` is the source text, quotes included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FtsToken {
    pub code: SymbolCode,
    pub text: String,
    pub span: Span,
}

impl FtsToken {
    #[must_use]
    pub fn new(code: SymbolCode, text: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            text: text.into(),
            span,
        }
    }

    /// Grammar name of the terminal.
    #[must_use]
    pub fn name(&self) -> &'static str {
        FTS_TABLES.symbol_name(self.code)
    }

    #[must_use]
    pub const fn is_eof(&self) -> bool {
        self.code == token::EOF
    }

    /// The text with surrounding quotes removed and `""` unescaped.
    #[must_use]
    pub fn value(&self) -> Cow<'_, str> {
        match self
            .text
            .strip_prefix('"')
            .and_then(|inner| inner.strip_suffix('"'))
        {
            Some(inner) if inner.contains("\"\"") => Cow::Owned(inner.replace("\"\"", "\"")),
            Some(inner) => Cow::Borrowed(inner),
            None => Cow::Borrowed(&self.text),
        }
    }
}

/// Characters that may appear in a bareword.
#[must_use]
pub fn is_bareword_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '\u{1a}' || !c.is_ascii()
}

/// A lexer that tokenizes a full-text query.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn token(&self, code: SymbolCode, start: usize) -> FtsToken {
        FtsToken::new(code, &self.input[start..self.pos], Span::new(start, self.pos))
    }

    /// Scans the next token, or end-of-input once the query is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`FtsError::Lex`] for an unterminated string or a character
    /// that starts no token.
    pub fn next_token(&mut self) -> Result<FtsToken, FtsError> {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
        let start = self.pos;
        let Some(c) = self.advance() else {
            return Ok(FtsToken::new(token::EOF, "", Span::empty_at(start)));
        };

        let code = match c {
            '(' => token::LP,
            ')' => token::RP,
            '{' => token::LCP,
            '}' => token::RCP,
            ':' => token::COLON,
            ',' => token::COMMA,
            '+' => token::PLUS,
            '*' => token::STAR,
            '"' => {
                loop {
                    match self.advance() {
                        Some('"') if self.peek() == Some('"') => {
                            self.advance();
                        }
                        Some('"') => break,
                        Some(_) => {}
                        None => {
                            return Err(FtsError::Lex {
                                message: "unterminated string".to_string(),
                                offset: start,
                            })
                        }
                    }
                }
                token::STRING
            }
            c if is_bareword_char(c) => {
                while self.peek().is_some_and(is_bareword_char) {
                    self.advance();
                }
                match &self.input[start..self.pos] {
                    "AND" => token::AND,
                    "OR" => token::OR,
                    "NOT" => token::NOT,
                    _ => token::STRING,
                }
            }
            c => {
                return Err(FtsError::Lex {
                    message: format!("fts5: syntax error near \"{c}\""),
                    offset: start,
                })
            }
        };
        Ok(self.token(code, start))
    }

    /// Tokenizes the whole query. The last token is always end-of-input.
    ///
    /// # Errors
    ///
    /// Stops at the first lex error.
    pub fn tokenize(&mut self) -> Result<Vec<FtsToken>, FtsError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                return Ok(tokens);
            }
        }
    }
}
