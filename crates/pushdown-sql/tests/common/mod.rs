#![allow(dead_code)]

use pushdown_core::{Outcome, Parser, ParserConfig, TraceEvent, TraceLog};
use pushdown_sql::{
    parse_sql, token, Lexer, SqlContext, SqlError, SqlGrammar, SqlParse, SqlToken, SqlValue,
    SyntaxNode, SQL_TABLES,
};

pub fn parse(sql: &str) -> SqlParse {
    parse_sql(sql).unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_tree(sql: &str) -> SyntaxNode {
    parse(sql)
        .tree
        .unwrap_or_else(|| panic!("No tree for: {sql}"))
}

pub fn parse_err(sql: &str) -> SqlError {
    parse_sql(sql).expect_err(&format!("Expected parse error for: {sql}"))
}

/// Messages of every diagnostic recorded for `sql`.
pub fn messages(sql: &str) -> Vec<String> {
    parse_err(sql)
        .diagnostics()
        .iter()
        .map(|d| d.message.clone())
        .collect()
}

/// Feeds `sql` the way the statement runner does, recording the trace.
pub fn trace(sql: &str) -> (Vec<TraceEvent>, SqlContext) {
    let mut tokens: Vec<SqlToken> = Lexer::new(sql)
        .tokenize()
        .unwrap_or_else(|e| panic!("Failed to scan: {sql}\nError: {e}"));
    tokens.retain(|t| !t.is_eof());
    if tokens.last().map(|t| t.code) != Some(token::SEMI) {
        tokens.push(SqlToken::synthetic(token::SEMI, sql.len()));
    }
    tokens.push(SqlToken::synthetic(token::EOF, sql.len()));

    let mut parser = Parser::new(SqlGrammar, &ParserConfig::default()).expect("parser");
    let log = TraceLog::new();
    parser.set_trace(Some(Box::new(log.clone())));
    let mut ctx = SqlContext::new();
    for token in tokens {
        let outcome = parser
            .consume(token.code, SqlValue::Token(token), &mut ctx)
            .expect("driver error");
        if !matches!(outcome, Outcome::Pending) {
            break;
        }
    }
    (log.events(), ctx)
}

/// Names of the rules reduced for `sql`, in order.
pub fn reductions(sql: &str) -> Vec<&'static str> {
    trace(sql)
        .0
        .iter()
        .filter_map(|event| match event {
            TraceEvent::Reduce { rule } => Some(SQL_TABLES.rule_name(*rule)),
            _ => None,
        })
        .collect()
}

/// Kinds of the direct child nodes of the first `kind` node.
pub fn child_kinds(tree: &SyntaxNode, kind: &str) -> Vec<&'static str> {
    tree.find(kind)
        .unwrap_or_else(|| panic!("no {kind} node in {tree}"))
        .child_nodes()
        .map(|node| node.kind)
        .collect()
}
