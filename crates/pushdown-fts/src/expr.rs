//! The full-text query tree built by the grammar's actions.

use std::fmt;

use serde::Serialize;

use crate::lexer::is_bareword_char;

/// Default token distance of a `NEAR(...)` group without an explicit one.
pub const DEFAULT_NEAR_DISTANCE: u32 = 10;

/// A boolean combination of nearsets.
///
/// Juxtaposed nearsets (`a b`) parse as [`Expr::And`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Expr {
    And { left: Box<Expr>, right: Box<Expr> },
    Or { left: Box<Expr>, right: Box<Expr> },
    /// Rows matching `left` but not `right`.
    Not { left: Box<Expr>, right: Box<Expr> },
    Nearset(Nearset),
}

impl Expr {
    #[must_use]
    pub fn and(left: Self, right: Self) -> Self {
        Self::And {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    #[must_use]
    pub fn or(left: Self, right: Self) -> Self {
        Self::Or {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    #[must_use]
    pub fn not(left: Self, right: Self) -> Self {
        Self::Not {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// The nearsets of the expression, left to right.
    #[must_use]
    pub fn nearsets(&self) -> Vec<&Nearset> {
        let mut out = Vec::new();
        self.collect_nearsets(&mut out);
        out
    }

    fn collect_nearsets<'a>(&'a self, out: &mut Vec<&'a Nearset>) {
        match self {
            Self::And { left, right } | Self::Or { left, right } | Self::Not { left, right } => {
                left.collect_nearsets(out);
                right.collect_nearsets(out);
            }
            Self::Nearset(nearset) => out.push(nearset),
        }
    }
}

/// One or more phrases, optionally grouped with `NEAR` and restricted to a
/// set of columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Nearset {
    pub phrases: Vec<Phrase>,
    /// Maximum token distance for a `NEAR(...)` group; `None` for a plain
    /// phrase.
    pub distance: Option<u32>,
    pub colset: Option<Colset>,
}

impl Nearset {
    /// A nearset holding a single phrase.
    #[must_use]
    pub fn phrase(phrase: Phrase) -> Self {
        Self {
            phrases: vec![phrase],
            distance: None,
            colset: None,
        }
    }

    #[must_use]
    pub fn near(phrases: Vec<Phrase>, distance: u32) -> Self {
        Self {
            phrases,
            distance: Some(distance),
            colset: None,
        }
    }

    #[must_use]
    pub const fn is_near(&self) -> bool {
        self.distance.is_some()
    }
}

/// A sequence of terms that must appear adjacent, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Phrase {
    pub terms: Vec<Term>,
}

impl Phrase {
    /// Splits `text` on whitespace, marking the last term as a prefix when
    /// `prefix` is set.
    #[must_use]
    pub fn from_text(text: &str, prefix: bool) -> Self {
        let mut phrase = Self::default();
        phrase.append(text, prefix);
        phrase
    }

    /// Appends the terms of `text`, as `phrase + "text"` does.
    pub fn append(&mut self, text: &str, prefix: bool) {
        let start = self.terms.len();
        self.terms.extend(text.split_whitespace().map(Term::new));
        if prefix && self.terms.len() > start {
            if let Some(last) = self.terms.last_mut() {
                last.prefix = true;
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Term {
    pub text: String,
    /// Matches any token starting with `text`.
    pub prefix: bool,
}

impl Term {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            prefix: false,
        }
    }

    #[must_use]
    pub fn prefix(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            prefix: true,
        }
    }
}

/// Column names a nearset is restricted to, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Colset {
    pub columns: Vec<String>,
}

impl Colset {
    /// Adds `column` unless an ASCII case-insensitive match is present.
    pub fn insert(&mut self, column: impl Into<String>) {
        let column = column.into();
        if !self.contains(&column) {
            self.columns.push(column);
        }
    }

    #[must_use]
    pub fn contains(&self, column: &str) -> bool {
        self.columns
            .iter()
            .any(|existing| existing.eq_ignore_ascii_case(column))
    }
}

/// Writes `word` bare when it would scan back as the same string, quoted
/// otherwise.
fn write_word(f: &mut fmt::Formatter<'_>, word: &str) -> fmt::Result {
    let bare = !word.is_empty()
        && word.chars().all(is_bareword_char)
        && !matches!(word, "AND" | "OR" | "NOT");
    if bare {
        f.write_str(word)
    } else {
        write!(f, "\"{}\"", word.replace('"', "\"\""))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And { left, right } => write!(f, "({left} AND {right})"),
            Self::Or { left, right } => write!(f, "({left} OR {right})"),
            Self::Not { left, right } => write!(f, "({left} NOT {right})"),
            Self::Nearset(nearset) => write!(f, "{nearset}"),
        }
    }
}

impl fmt::Display for Nearset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(colset) = &self.colset {
            write!(f, "{colset} : ")?;
        }
        match self.distance {
            Some(distance) => {
                f.write_str("NEAR(")?;
                for (i, phrase) in self.phrases.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{phrase}")?;
                }
                write!(f, ", {distance})")
            }
            None => self.phrases.iter().try_for_each(|phrase| write!(f, "{phrase}")),
        }
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return f.write_str("\"\"");
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_word(f, &self.text)?;
        if self.prefix {
            f.write_str("*")?;
        }
        Ok(())
    }
}

impl fmt::Display for Colset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write_word(f, column)?;
        }
        f.write_str("}")
    }
}
