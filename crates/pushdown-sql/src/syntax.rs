//! Concrete syntax tree built by the SQL semantic actions.
//!
//! Every reduction produces a [`SyntaxNode`] named after the rule's
//! left-hand side, holding the right-hand side values in source order.
//! Empty rules (such as `where_opt ::=`) produce childless nodes, so the
//! tree records every optional clause that was left out.

use std::fmt;

use pushdown_core::{RuleId, Span, SymbolCode};
use serde::Serialize;

use crate::lexer::SqlToken;

/// Semantic value carried on the SQL parse stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SqlValue {
    Token(SqlToken),
    Node(SyntaxNode),
}

impl SqlValue {
    #[must_use]
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::Token(token) => Some(token.span),
            Self::Node(node) => node.span,
        }
    }

    #[must_use]
    pub fn as_node(&self) -> Option<&SyntaxNode> {
        match self {
            Self::Node(node) => Some(node),
            Self::Token(_) => None,
        }
    }

    #[must_use]
    pub fn as_token(&self) -> Option<&SqlToken> {
        match self {
            Self::Token(token) => Some(token),
            Self::Node(_) => None,
        }
    }

    /// The first token at or below this value.
    #[must_use]
    pub fn first_token(&self) -> Option<&SqlToken> {
        match self {
            Self::Token(token) => Some(token),
            Self::Node(node) => node.children.iter().find_map(Self::first_token),
        }
    }
}

/// An interior node: one reduced rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxNode {
    /// Name of the nonterminal, e.g. `oneselect`.
    pub kind: &'static str,
    pub symbol: SymbolCode,
    /// The rule that was reduced.
    pub rule: RuleId,
    /// Covers every token below the node. `None` for empty productions.
    pub span: Option<Span>,
    pub children: Vec<SqlValue>,
}

impl SyntaxNode {
    #[must_use]
    pub fn new(
        kind: &'static str,
        symbol: SymbolCode,
        rule: RuleId,
        children: Vec<SqlValue>,
    ) -> Self {
        let span = children
            .iter()
            .filter_map(SqlValue::span)
            .reduce(Span::merge);
        Self {
            kind,
            symbol,
            rule,
            span,
            children,
        }
    }

    /// True when the node was produced by an empty rule.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// This node and every node below it, in pre-order.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// The first node of `kind` in pre-order, possibly `self`.
    #[must_use]
    pub fn find(&self, kind: &str) -> Option<&SyntaxNode> {
        self.descendants().find(|node| node.kind == kind)
    }

    /// Every node of `kind`, in pre-order.
    pub fn find_all<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a SyntaxNode> + 'a {
        self.descendants().filter(move |node| node.kind == kind)
    }

    /// Every token below this node, in source order.
    #[must_use]
    pub fn tokens(&self) -> Vec<&SqlToken> {
        let mut tokens = Vec::new();
        collect_tokens(self, &mut tokens);
        tokens
    }

    /// Direct child nodes, skipping tokens.
    pub fn child_nodes(&self) -> impl DoubleEndedIterator<Item = &SyntaxNode> {
        self.children.iter().filter_map(SqlValue::as_node)
    }
}

fn collect_tokens<'a>(node: &'a SyntaxNode, out: &mut Vec<&'a SqlToken>) {
    for child in &node.children {
        match child {
            SqlValue::Token(token) => out.push(token),
            SqlValue::Node(node) => collect_tokens(node, out),
        }
    }
}

/// Pre-order iterator returned by [`SyntaxNode::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a SyntaxNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a SyntaxNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.child_nodes().rev());
        Some(node)
    }
}

/// S-expression form: `(kind child...)`, tokens as their source text.
impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.kind)?;
        for child in &self.children {
            write!(f, " {child}")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(token) => write!(f, "{}", token.text),
            Self::Node(node) => write!(f, "{node}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::token;

    fn leaf(code: SymbolCode, text: &str, start: usize) -> SqlValue {
        SqlValue::Token(SqlToken::new(
            code,
            text,
            Span::new(start, start + text.len()),
        ))
    }

    fn sample() -> SyntaxNode {
        // (nm users) (as) wrapped in a parent
        let nm = SyntaxNode::new("nm", 1, 10, vec![leaf(token::ID, "users", 5)]);
        let empty = SyntaxNode::new("as", 2, 11, Vec::new());
        SyntaxNode::new(
            "from",
            3,
            12,
            vec![
                leaf(token::FROM, "FROM", 0),
                SqlValue::Node(nm),
                SqlValue::Node(empty),
            ],
        )
    }

    #[test]
    fn test_span_covers_children() {
        let node = sample();
        assert_eq!(node.span, Some(Span::new(0, 10)));
        assert_eq!(node.find("as").unwrap().span, None);
    }

    #[test]
    fn test_descendants_pre_order() {
        let node = sample();
        let kinds: Vec<_> = node.descendants().map(|n| n.kind).collect();
        assert_eq!(kinds, vec!["from", "nm", "as"]);
    }

    #[test]
    fn test_find_and_tokens() {
        let node = sample();
        assert!(node.find("as").unwrap().is_empty());
        assert!(node.find("where_opt").is_none());
        let texts: Vec<_> = node.tokens().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["FROM", "users"]);
        assert_eq!(
            SqlValue::Node(node).first_token().map(|t| t.text.as_str()),
            Some("FROM")
        );
    }

    #[test]
    fn test_display_as_s_expression() {
        assert_eq!(sample().to_string(), "(from FROM (nm users) (as))");
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["kind"], "from");
        assert_eq!(json["children"][0]["text"], "FROM");
        assert_eq!(json["children"][1]["kind"], "nm");
        assert!(json["children"][2]["span"].is_null());
    }
}
