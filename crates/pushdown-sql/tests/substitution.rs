//! Keyword fallback to `ID` and the `ANY` wildcard.

mod common;
use common::*;

use pushdown_core::TraceEvent;
use pushdown_sql::token;

#[test]
fn keyword_falls_back_to_identifier() {
    let (events, ctx) = trace("SELECT abort FROM t");
    assert!(events.contains(&TraceEvent::Fallback {
        from: token::ABORT,
        to: token::ID,
    }));
    assert!(ctx.diagnostics.is_empty());
    assert_eq!(events.last(), Some(&TraceEvent::Accept));
}

#[test]
fn fallback_keyword_parses_like_identifier() {
    let as_keyword = parse_tree("SELECT * FROM abort");
    let as_identifier = parse_tree("SELECT * FROM aborts");
    let kinds = |tree: &pushdown_sql::SyntaxNode| {
        tree.descendants().map(|node| node.kind).collect::<Vec<_>>()
    };
    assert_eq!(kinds(&as_keyword), kinds(&as_identifier));

    let table = as_keyword.find("nm").unwrap().tokens()[0].clone();
    assert_eq!(table.code, token::ABORT);
    assert_eq!(table.text, "abort");
}

#[test]
fn several_keywords_as_names() {
    let tree = parse_tree("SELECT key, action, plan FROM replace");
    let names: Vec<_> = tree
        .tokens()
        .iter()
        .filter(|t| t.code != token::ID)
        .map(|t| t.name())
        .collect();
    assert_eq!(
        names,
        vec!["SELECT", "KEY", "COMMA", "ACTION", "COMMA", "PLAN", "FROM", "REPLACE", "SEMI"]
    );
}

#[test]
fn non_fallback_keyword_is_a_syntax_error() {
    assert_eq!(
        messages("SELECT * FROM select"),
        vec!["near \"select\": syntax error"]
    );
}

#[test]
fn module_arguments_match_the_wildcard() {
    let (events, ctx) = trace("CREATE VIRTUAL TABLE docs USING fts5(title, body)");
    let wildcards = events
        .iter()
        .filter(|event| **event == TraceEvent::Wildcard { symbol: token::ID })
        .count();
    assert_eq!(wildcards, 2);
    assert!(ctx.diagnostics.is_empty());
    assert_eq!(ctx.statements, 1);
}

#[test]
fn module_arguments_are_kept_in_the_tree() {
    let tree = parse_tree("CREATE VIRTUAL TABLE docs USING fts5(title, body)");
    let args: Vec<_> = tree
        .find_all("vtabargtoken")
        .flat_map(|node| node.tokens())
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(args, vec!["title", "body"]);
}
