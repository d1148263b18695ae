//! Semantic actions and error hooks for the full-text query grammar.

use pushdown_core::{Grammar, ParseTables, Rhs, RuleId, Span, SymbolCode};

use crate::error::FtsError;
use crate::expr::{Colset, Expr, Nearset, Phrase, DEFAULT_NEAR_DISTANCE};
use crate::lexer::FtsToken;
use crate::tables::FTS_TABLES;

/// Semantic value of a stack entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FtsValue {
    Token(FtsToken),
    Expr(Expr),
    Nearset(Nearset),
    Phrases(Vec<Phrase>),
    Phrase(Phrase),
    Colset(Colset),
    /// `neardist_opt`: the distance token, if one was given.
    Distance(Option<FtsToken>),
    /// `star_opt`
    Star(bool),
}

impl FtsValue {
    fn into_token(self) -> Option<FtsToken> {
        match self {
            Self::Token(token) => Some(token),
            _ => None,
        }
    }

    fn into_expr(self) -> Option<Expr> {
        match self {
            Self::Expr(expr) => Some(expr),
            Self::Nearset(nearset) => Some(Expr::Nearset(nearset)),
            _ => None,
        }
    }

    fn into_nearset(self) -> Option<Nearset> {
        match self {
            Self::Nearset(nearset) => Some(nearset),
            _ => None,
        }
    }

    fn into_phrase(self) -> Option<Phrase> {
        match self {
            Self::Phrase(phrase) => Some(phrase),
            _ => None,
        }
    }
}

/// State threaded through one query parse.
#[derive(Debug, Default)]
pub struct FtsContext {
    /// The first error raised, if any. Later ones are dropped.
    pub error: Option<FtsError>,
    /// Known column names. When set, colsets may only name these.
    pub columns: Option<Vec<String>>,
}

impl FtsContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            error: None,
            columns: Some(columns.into_iter().map(Into::into).collect()),
        }
    }

    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.error.is_some()
    }

    fn fail(&mut self, err: FtsError) {
        tracing::debug!(%err, "fts error");
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    /// Resolves a colset name against the known columns, returning the
    /// column's declared spelling.
    fn column(&mut self, token: &FtsToken) -> Option<String> {
        let name = token.value();
        let Some(columns) = &self.columns else {
            return Some(name.into_owned());
        };
        let found = columns
            .iter()
            .find(|column| column.eq_ignore_ascii_case(&name))
            .cloned();
        match found {
            Some(column) => Some(column),
            None => {
                self.fail(FtsError::query(format!("no such column: {name}"), token.span));
                None
            }
        }
    }
}

/// The full-text query grammar. Builds an [`Expr`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FtsGrammar;

impl Grammar for FtsGrammar {
    type Value = FtsValue;
    type Context = FtsContext;

    fn tables(&self) -> &'static ParseTables {
        &FTS_TABLES
    }

    fn reduce(
        &self,
        rule: RuleId,
        rhs: &mut Rhs<'_, FtsValue>,
        ctx: &mut FtsContext,
    ) -> Option<FtsValue> {
        let mut take = |index: usize| rhs.take(index);
        let value = match rule {
            // input ::= expr
            // expr ::= exprlist
            // cnearset ::= nearset
            0 | 5 | 8 => take(0)?,
            // expr ::= expr AND|OR|NOT expr
            1..=3 => {
                let left = take(0)?.into_expr()?;
                let right = take(2)?.into_expr()?;
                FtsValue::Expr(match rule {
                    1 => Expr::and(left, right),
                    2 => Expr::or(left, right),
                    _ => Expr::not(left, right),
                })
            }
            // expr ::= LP expr RP
            4 => take(1)?,
            // exprlist ::= cnearset
            6 => FtsValue::Expr(take(0)?.into_expr()?),
            // exprlist ::= exprlist cnearset
            7 => {
                let left = take(0)?.into_expr()?;
                let right = take(1)?.into_expr()?;
                FtsValue::Expr(Expr::and(left, right))
            }
            // cnearset ::= colset COLON nearset
            9 => {
                let colset = match take(0)? {
                    FtsValue::Colset(colset) => colset,
                    _ => return None,
                };
                let mut nearset = take(2)?.into_nearset()?;
                nearset.colset = Some(colset);
                FtsValue::Nearset(nearset)
            }
            // colset ::= LCP colsetlist RCP
            10 => take(1)?,
            // colset ::= STRING
            // colsetlist ::= STRING
            11 | 13 => {
                let token = take(0)?.into_token()?;
                let mut colset = Colset::default();
                if let Some(column) = ctx.column(&token) {
                    colset.insert(column);
                }
                FtsValue::Colset(colset)
            }
            // colsetlist ::= colsetlist STRING
            12 => {
                let mut colset = match take(0)? {
                    FtsValue::Colset(colset) => colset,
                    _ => return None,
                };
                let token = take(1)?.into_token()?;
                if let Some(column) = ctx.column(&token) {
                    colset.insert(column);
                }
                FtsValue::Colset(colset)
            }
            // nearset ::= phrase
            14 => FtsValue::Nearset(Nearset::phrase(take(0)?.into_phrase()?)),
            // nearset ::= STRING LP nearphrases neardist_opt RP
            15 => {
                let keyword = take(0)?.into_token()?;
                let phrases = match take(2)? {
                    FtsValue::Phrases(phrases) => phrases,
                    _ => return None,
                };
                let distance = match take(3)? {
                    FtsValue::Distance(token) => token,
                    _ => return None,
                };
                check_near_keyword(&keyword, ctx);
                let distance = near_distance(distance.as_ref(), ctx);
                FtsValue::Nearset(Nearset::near(phrases, distance))
            }
            // nearphrases ::= phrase
            16 => FtsValue::Phrases(vec![take(0)?.into_phrase()?]),
            // nearphrases ::= nearphrases phrase
            17 => {
                let mut phrases = match take(0)? {
                    FtsValue::Phrases(phrases) => phrases,
                    _ => return None,
                };
                phrases.push(take(1)?.into_phrase()?);
                FtsValue::Phrases(phrases)
            }
            // neardist_opt ::=
            18 => FtsValue::Distance(None),
            // neardist_opt ::= COMMA STRING
            19 => FtsValue::Distance(take(1)?.into_token()),
            // phrase ::= phrase PLUS STRING star_opt
            20 => {
                let mut phrase = take(0)?.into_phrase()?;
                let token = take(2)?.into_token()?;
                let star = matches!(take(3)?, FtsValue::Star(true));
                phrase.append(&token.value(), star);
                FtsValue::Phrase(phrase)
            }
            // phrase ::= STRING star_opt
            21 => {
                let token = take(0)?.into_token()?;
                let star = matches!(take(1)?, FtsValue::Star(true));
                FtsValue::Phrase(Phrase::from_text(&token.value(), star))
            }
            // star_opt ::= STAR
            22 => FtsValue::Star(true),
            // star_opt ::=
            23 => FtsValue::Star(false),
            _ => return None,
        };
        Some(value)
    }

    fn syntax_error(&self, _symbol: SymbolCode, value: Option<&FtsValue>, ctx: &mut FtsContext) {
        let (text, span) = match value {
            Some(FtsValue::Token(token)) => (token.text.as_str(), token.span),
            _ => ("", Span::default()),
        };
        ctx.fail(FtsError::query(
            format!("fts5: syntax error near \"{text}\""),
            span,
        ));
    }

    fn stack_overflow(&self, ctx: &mut FtsContext) {
        ctx.fail(FtsError::query(
            "fts5: parser stack overflow",
            Span::default(),
        ));
    }
}

/// A `STRING (` group is only valid when the string is the bare word NEAR.
fn check_near_keyword(keyword: &FtsToken, ctx: &mut FtsContext) {
    if !keyword.text.eq_ignore_ascii_case("NEAR") {
        ctx.fail(FtsError::query(
            format!("fts5: syntax error near \"{}\"", keyword.text),
            keyword.span,
        ));
    }
}

fn near_distance(token: Option<&FtsToken>, ctx: &mut FtsContext) -> u32 {
    let Some(token) = token else {
        return DEFAULT_NEAR_DISTANCE;
    };
    let digits = !token.text.is_empty() && token.text.bytes().all(|b| b.is_ascii_digit());
    match token.text.parse::<u32>() {
        Ok(distance) if digits => distance,
        _ => {
            ctx.fail(FtsError::query(
                format!("expected integer, got \"{}\"", token.text),
                token.span,
            ));
            DEFAULT_NEAR_DISTANCE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::token;

    #[test]
    fn test_tables_validate() {
        assert_eq!(FTS_TABLES.validate(), Ok(()));
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(FTS_TABLES.rule_name(9), "cnearset ::= colset COLON nearset");
        assert_eq!(
            FTS_TABLES.rule_name(15),
            "nearset ::= STRING LP nearphrases neardist_opt RP"
        );
        assert_eq!(FTS_TABLES.rule_name(23), "star_opt ::=");
    }

    #[test]
    fn test_keeps_first_error() {
        let mut ctx = FtsContext::new();
        let near = FtsToken::new(token::STRING, "neer", Span::new(0, 4));
        check_near_keyword(&near, &mut ctx);
        let dist = FtsToken::new(token::STRING, "x", Span::new(9, 10));
        assert_eq!(near_distance(Some(&dist), &mut ctx), DEFAULT_NEAR_DISTANCE);
        assert_eq!(
            ctx.error,
            Some(FtsError::query(
                "fts5: syntax error near \"neer\"",
                Span::new(0, 4)
            ))
        );
    }

    #[test]
    fn test_near_keyword_ignores_case() {
        let mut ctx = FtsContext::new();
        check_near_keyword(&FtsToken::new(token::STRING, "nEaR", Span::new(0, 4)), &mut ctx);
        assert!(!ctx.has_error());
    }

    #[test]
    fn test_distance_must_be_digits() {
        let mut ctx = FtsContext::new();
        let tok = |text: &str| FtsToken::new(token::STRING, text, Span::default());
        assert_eq!(near_distance(None, &mut ctx), 10);
        assert_eq!(near_distance(Some(&tok("0")), &mut ctx), 0);
        assert_eq!(near_distance(Some(&tok("25")), &mut ctx), 25);
        assert!(!ctx.has_error());
        near_distance(Some(&tok("\"5\"")), &mut ctx);
        assert_eq!(
            ctx.error.map(|e| e.to_string()),
            Some("expected integer, got \"\"5\"\"".to_string())
        );
    }

    #[test]
    fn test_column_resolution() {
        let mut ctx = FtsContext::with_columns(["Title", "body"]);
        let tok = |text: &str| FtsToken::new(token::STRING, text, Span::new(0, text.len()));
        assert_eq!(ctx.column(&tok("title")), Some("Title".to_string()));
        assert_eq!(ctx.column(&tok("\"body\"")), Some("body".to_string()));
        assert_eq!(ctx.column(&tok("author")), None);
        assert_eq!(
            ctx.error.map(|e| e.to_string()),
            Some("no such column: author".to_string())
        );
    }
}
