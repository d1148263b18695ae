//! SQL tokenizer implementation.

use pushdown_core::{Span, SymbolCode};

use super::{keyword_code, SqlToken};
use crate::error::LexError;
use crate::tables::token;

/// A lexer that tokenizes SQL input into grammar terminals.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the character `n` places ahead without advancing.
    fn peek_nth(&self, n: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(n)
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consumes the current character if it is `expected`.
    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    /// Skips whitespace and comments. An unterminated block comment runs to
    /// the end of the input.
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            self.advance_while(char::is_whitespace);

            if self.peek() == Some('-') && self.peek_nth(1) == Some('-') {
                self.advance_while(|c| c != '\n');
                continue;
            }

            if self.peek() == Some('/') && self.peek_nth(1) == Some('*') {
                self.advance(); // /
                self.advance(); // *
                loop {
                    match self.advance() {
                        Some('*') if self.peek() == Some('/') => {
                            self.advance();
                            break;
                        }
                        None => break,
                        _ => {}
                    }
                }
                continue;
            }

            break;
        }
    }

    /// Creates a span from start to current position.
    fn make_span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    fn text(&self) -> &'a str {
        &self.input[self.start..self.pos]
    }

    /// Creates a token covering the current span.
    fn make_token(&self, code: SymbolCode) -> SqlToken {
        SqlToken::new(code, self.text(), self.make_span())
    }

    fn unrecognized(&self) -> LexError {
        LexError::Unrecognized {
            text: self.text().to_string(),
            offset: self.start,
        }
    }

    /// Scans an identifier or keyword.
    fn scan_identifier(&mut self) -> SqlToken {
        self.advance_while(is_id_char);
        let code = keyword_code(self.text()).unwrap_or(token::ID);
        self.make_token(code)
    }

    /// Scans a quoted string or identifier; a doubled `close` is an escape.
    fn scan_quoted(&mut self, close: char, code: SymbolCode) -> Result<SqlToken, LexError> {
        loop {
            match self.advance() {
                Some(c) if c == close => {
                    if !self.eat(close) {
                        return Ok(self.make_token(code));
                    }
                }
                Some(_) => {}
                None if code == token::STRING => {
                    return Err(LexError::UnterminatedString { offset: self.start })
                }
                None => return Err(LexError::UnterminatedIdentifier { offset: self.start }),
            }
        }
    }

    /// Scans a bracketed identifier (`[column name]`).
    fn scan_bracketed(&mut self) -> Result<SqlToken, LexError> {
        self.advance_while(|c| c != ']');
        if self.eat(']') {
            Ok(self.make_token(token::ID))
        } else {
            Err(LexError::UnterminatedIdentifier { offset: self.start })
        }
    }

    /// Scans a number (integer or float). The first digit, or the leading
    /// `.`, has been consumed.
    fn scan_number(&mut self, first: char) -> Result<SqlToken, LexError> {
        let mut code = if first == '.' {
            token::FLOAT
        } else {
            token::INTEGER
        };
        self.advance_while(|c| c.is_ascii_digit());

        if code == token::INTEGER && self.peek() == Some('.') {
            code = token::FLOAT;
            self.advance(); // consume .
            self.advance_while(|c| c.is_ascii_digit());
        }

        // Check for exponent
        if matches!(self.peek(), Some('e' | 'E')) {
            let digit_at = if matches!(self.peek_nth(1), Some('+' | '-')) {
                2
            } else {
                1
            };
            if self.peek_nth(digit_at).is_some_and(|c| c.is_ascii_digit()) {
                code = token::FLOAT;
                for _ in 0..digit_at {
                    self.advance();
                }
                self.advance_while(|c| c.is_ascii_digit());
            }
        }

        // "12abc" is not a number followed by an identifier.
        if self.peek().is_some_and(is_id_char) {
            self.advance_while(is_id_char);
            return Err(self.unrecognized());
        }
        Ok(self.make_token(code))
    }

    /// Scans a blob literal. `x'` has been consumed.
    fn scan_blob(&mut self) -> Result<SqlToken, LexError> {
        let mut digits = 0usize;
        let mut valid = true;
        loop {
            match self.advance() {
                Some('\'') => break,
                Some(c) if c.is_ascii_hexdigit() => digits += 1,
                Some(_) => valid = false,
                None => {
                    valid = false;
                    break;
                }
            }
        }
        if valid && digits % 2 == 0 {
            Ok(self.make_token(token::BLOB))
        } else {
            Err(LexError::MalformedBlob {
                text: self.text().to_string(),
                offset: self.start,
            })
        }
    }

    /// Scans a host parameter after its sigil: `?NNN` takes digits, the
    /// named forms take identifier characters.
    fn scan_variable(&mut self, sigil: char) -> Result<SqlToken, LexError> {
        if sigil == '?' {
            self.advance_while(|c| c.is_ascii_digit());
            return Ok(self.make_token(token::VARIABLE));
        }
        let name_start = self.pos;
        self.advance_while(is_id_char);
        if sigil == '$' {
            // Tcl-style names: $a::b(index)
            while self.peek() == Some(':') && self.peek_nth(1) == Some(':') {
                self.advance();
                self.advance();
                self.advance_while(is_id_char);
            }
            if self.peek() == Some('(') {
                self.advance_while(|c| c != ')' && !c.is_whitespace());
                if !self.eat(')') {
                    return Err(self.unrecognized());
                }
            }
        }
        if self.pos == name_start {
            return Err(self.unrecognized());
        }
        Ok(self.make_token(token::VARIABLE))
    }

    /// Scans the next token. Returns an end-of-input token once the input
    /// is exhausted.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] for unterminated literals, malformed blobs and
    /// characters that start no token.
    pub fn next_token(&mut self) -> Result<SqlToken, LexError> {
        self.skip_whitespace_and_comments();
        self.start = self.pos;

        let Some(c) = self.advance() else {
            return Ok(SqlToken::synthetic(token::EOF, self.pos));
        };

        let code = match c {
            // Single-character tokens
            ';' => token::SEMI,
            '(' => token::LP,
            ')' => token::RP,
            ',' => token::COMMA,
            '+' => token::PLUS,
            '-' => token::MINUS,
            '*' => token::STAR,
            '/' => token::SLASH,
            '%' => token::REM,
            '&' => token::BITAND,
            '~' => token::BITNOT,

            // Potentially multi-character tokens
            '=' => {
                self.eat('=');
                token::EQ
            }
            '<' => {
                if self.eat('=') {
                    token::LE
                } else if self.eat('>') {
                    token::NE
                } else if self.eat('<') {
                    token::LSHIFT
                } else {
                    token::LT
                }
            }
            '>' => {
                if self.eat('=') {
                    token::GE
                } else if self.eat('>') {
                    token::RSHIFT
                } else {
                    token::GT
                }
            }
            '!' => {
                if self.eat('=') {
                    token::NE
                } else {
                    return Err(self.unrecognized());
                }
            }
            '|' => {
                if self.eat('|') {
                    token::CONCAT
                } else {
                    token::BITOR
                }
            }
            '.' if self.peek().is_some_and(|c| c.is_ascii_digit()) => {
                return self.scan_number(c);
            }
            '.' => token::DOT,

            // String literals and quoted identifiers
            '\'' => return self.scan_quoted('\'', token::STRING),
            '"' => return self.scan_quoted('"', token::ID),
            '`' => return self.scan_quoted('`', token::ID),
            '[' => return self.scan_bracketed(),

            // Blob literals
            'X' | 'x' if self.peek() == Some('\'') => {
                self.advance();
                return self.scan_blob();
            }

            '?' | ':' | '@' | '$' | '#' => return self.scan_variable(c),

            c if c.is_ascii_digit() => return self.scan_number(c),

            // Identifiers and keywords
            c if is_id_start(c) => return Ok(self.scan_identifier()),

            _ => return Err(self.unrecognized()),
        };
        Ok(self.make_token(code))
    }

    /// Tokenizes the entire input. The last token is always end-of-input.
    ///
    /// # Errors
    ///
    /// Stops at the first [`LexError`].
    pub fn tokenize(&mut self) -> Result<Vec<SqlToken>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }
}

fn is_id_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$' || !c.is_ascii()
}
