#![allow(dead_code)]

use pushdown_core::{Outcome, Parser, ParserConfig, SymbolCode, TraceEvent, TraceLog};
use pushdown_fts::{
    parse_query, token, Colset, Expr, FtsContext, FtsError, FtsGrammar, FtsQuery, FtsToken,
    FtsValue, Lexer, Nearset, Phrase, Term, DEFAULT_NEAR_DISTANCE, FTS_TABLES,
};

pub fn parse(query: &str) -> FtsQuery {
    parse_query(query).unwrap_or_else(|e| panic!("Failed to parse: {query}\nError: {e:?}"))
}

pub fn expr(query: &str) -> Expr {
    parse(query).expr
}

pub fn parse_err(query: &str) -> FtsError {
    parse_query(query).expect_err(&format!("Expected parse error for: {query}"))
}

pub fn message(query: &str) -> String {
    parse_err(query).to_string()
}

/// A nearset leaf holding one phrase of whitespace-separated terms.
pub fn leaf(text: &str) -> Expr {
    Expr::Nearset(Nearset::phrase(Phrase::from_text(text, false)))
}

/// Shorthand for the only nearset of a single-nearset query.
pub fn nearset(query: &str) -> Nearset {
    match expr(query) {
        Expr::Nearset(nearset) => nearset,
        other => panic!("expected a nearset for {query}, got {other}"),
    }
}

pub fn terms(phrase: &Phrase) -> Vec<(&str, bool)> {
    phrase
        .terms
        .iter()
        .map(|Term { text, prefix }| (text.as_str(), *prefix))
        .collect()
}

/// Feeds `query` the way the query runner does, recording the trace.
pub fn trace(query: &str) -> (Vec<TraceEvent>, FtsContext) {
    let tokens = Lexer::new(query)
        .tokenize()
        .unwrap_or_else(|e| panic!("Failed to scan: {query}\nError: {e}"));
    let mut parser = Parser::new(FtsGrammar, &ParserConfig::default()).expect("parser");
    let log = TraceLog::new();
    parser.set_trace(Some(Box::new(log.clone())));
    let mut ctx = FtsContext::new();
    for token in tokens {
        let outcome = parser
            .consume(token.code, FtsValue::Token(token), &mut ctx)
            .expect("driver error");
        if ctx.has_error() || !matches!(outcome, Outcome::Pending) {
            break;
        }
    }
    (log.events(), ctx)
}

/// Names of the rules reduced for `query`, in order.
pub fn reductions(query: &str) -> Vec<&'static str> {
    trace(query)
        .0
        .iter()
        .filter_map(|event| match event {
            TraceEvent::Reduce { rule } => Some(FTS_TABLES.rule_name(*rule)),
            _ => None,
        })
        .collect()
}

/// Recursive descent parser for the query language, used as an oracle for
/// the table-driven one.
///
/// ```text
/// or       := and (OR and)*
/// and      := not (AND not)*
/// not      := primary (NOT primary)*
/// primary  := LP or RP | cnearset cnearset*
/// cnearset := LCP STRING+ RCP COLON nearset | STRING COLON nearset | nearset
/// nearset  := STRING LP phrase+ [COMMA STRING] RP | phrase
/// phrase   := STRING [STAR] (PLUS STRING [STAR])*
/// ```
pub struct Reference {
    tokens: Vec<FtsToken>,
    pos: usize,
}

impl Reference {
    /// Parses `query`, returning `None` wherever the query is rejected.
    pub fn parse(query: &str) -> Option<Expr> {
        let tokens = Lexer::new(query).tokenize().ok()?;
        let mut parser = Self { tokens, pos: 0 };
        let expr = parser.or()?;
        parser.expect(token::EOF)?;
        Some(expr)
    }

    fn peek_nth(&self, n: usize) -> SymbolCode {
        self.tokens
            .get(self.pos + n)
            .map_or(token::EOF, |token| token.code)
    }

    fn peek(&self) -> SymbolCode {
        self.peek_nth(0)
    }

    fn eat(&mut self, code: SymbolCode) -> bool {
        if self.peek() == code {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, code: SymbolCode) -> Option<FtsToken> {
        if self.peek() == code {
            self.pos += 1;
            Some(self.tokens[self.pos - 1].clone())
        } else {
            None
        }
    }

    fn or(&mut self) -> Option<Expr> {
        let mut left = self.and()?;
        while self.eat(token::OR) {
            left = Expr::or(left, self.and()?);
        }
        Some(left)
    }

    fn and(&mut self) -> Option<Expr> {
        let mut left = self.not()?;
        while self.eat(token::AND) {
            left = Expr::and(left, self.not()?);
        }
        Some(left)
    }

    fn not(&mut self) -> Option<Expr> {
        let mut left = self.primary()?;
        while self.eat(token::NOT) {
            left = Expr::not(left, self.primary()?);
        }
        Some(left)
    }

    fn primary(&mut self) -> Option<Expr> {
        if self.eat(token::LP) {
            let expr = self.or()?;
            self.expect(token::RP)?;
            return Some(expr);
        }
        let mut expr = Expr::Nearset(self.cnearset()?);
        while matches!(self.peek(), token::STRING | token::LCP) {
            expr = Expr::and(expr, Expr::Nearset(self.cnearset()?));
        }
        Some(expr)
    }

    fn cnearset(&mut self) -> Option<Nearset> {
        let mut colset = None;
        if self.eat(token::LCP) {
            let mut columns = Colset::default();
            columns.insert(self.expect(token::STRING)?.value());
            while self.peek() == token::STRING {
                columns.insert(self.expect(token::STRING)?.value());
            }
            self.expect(token::RCP)?;
            self.expect(token::COLON)?;
            colset = Some(columns);
        } else if self.peek() == token::STRING && self.peek_nth(1) == token::COLON {
            let mut columns = Colset::default();
            columns.insert(self.expect(token::STRING)?.value());
            self.expect(token::COLON)?;
            colset = Some(columns);
        }
        let mut nearset = self.nearset()?;
        nearset.colset = colset;
        Some(nearset)
    }

    fn nearset(&mut self) -> Option<Nearset> {
        if self.peek() == token::STRING && self.peek_nth(1) == token::LP {
            let keyword = self.expect(token::STRING)?;
            self.expect(token::LP)?;
            let mut phrases = vec![self.phrase()?];
            while self.peek() == token::STRING {
                phrases.push(self.phrase()?);
            }
            let mut distance = DEFAULT_NEAR_DISTANCE;
            if self.eat(token::COMMA) {
                let text = self.expect(token::STRING)?.text;
                if !text.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                distance = text.parse().ok()?;
            }
            self.expect(token::RP)?;
            if !keyword.text.eq_ignore_ascii_case("near") {
                return None;
            }
            return Some(Nearset::near(phrases, distance));
        }
        Some(Nearset::phrase(self.phrase()?))
    }

    fn phrase(&mut self) -> Option<Phrase> {
        let mut phrase = Phrase::default();
        loop {
            let text = self.expect(token::STRING)?.value().into_owned();
            let star = self.eat(token::STAR);
            phrase.append(&text, star);
            if !self.eat(token::PLUS) {
                return Some(phrase);
            }
        }
    }
}
