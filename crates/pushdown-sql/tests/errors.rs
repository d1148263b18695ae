//! Syntax errors, rule-level diagnostics and driver limits.

mod common;
use common::*;

use pushdown_core::ParserConfig;
use pushdown_sql::{parse_sql_with, LexError, SqlError};

#[test]
fn error_missing_table_is_incomplete_input() {
    assert_eq!(parse_err("SELECT * FROM").to_string(), "incomplete input");
    assert_eq!(parse_err("SELECT").to_string(), "incomplete input");
}

#[test]
fn error_unexpected_token_is_named() {
    let err = parse_err("SELECT FROM t");
    assert_eq!(err.to_string(), "near \"FROM\": syntax error");
    let diagnostic = &err.diagnostics()[0];
    assert_eq!(diagnostic.span.start, 7);
    assert_eq!(diagnostic.span.end, 11);
}

#[test]
fn error_extra_token() {
    assert_eq!(messages("SELECT 1 2"), vec!["near \"2\": syntax error"]);
}

#[test]
fn error_reporting_resumes_after_quiet_window() {
    assert_eq!(
        messages("SELECT ) FROM t; SELECT 1; SELECT 2; SELECT 3; SELECT ,"),
        vec!["near \")\": syntax error", "near \",\": syntax error"]
    );
}

#[test]
fn error_at_end_of_input_is_reported_once() {
    assert_eq!(
        messages("SELECT FROM t; SELECT 1; SELECT ("),
        vec!["near \"FROM\": syntax error", "incomplete input"]
    );
}

#[test]
fn error_unknown_table_option() {
    assert_eq!(
        messages("CREATE TABLE t(a) WITHOUT foo"),
        vec!["unknown table option: foo"]
    );
    assert!(parse_sql_with("CREATE TABLE t(a) WITHOUT ROWID", &ParserConfig::default()).is_ok());
}

#[test]
fn error_register_variable_outside_nested_parse() {
    assert_eq!(messages("SELECT #1"), vec!["near \"#1\": syntax error"]);
    assert!(parse_sql_with("SELECT #name", &ParserConfig::default()).is_ok());
}

#[test]
fn error_trigger_restrictions() {
    assert_eq!(
        messages("CREATE TRIGGER tr AFTER INSERT ON t BEGIN UPDATE main.t SET a = 1; END"),
        vec![
            "qualified table names are not allowed on INSERT, UPDATE, and DELETE \
             statements within triggers"
        ]
    );
    assert_eq!(
        messages("CREATE TRIGGER tr AFTER INSERT ON t BEGIN UPDATE t INDEXED BY i SET a = 1; END"),
        vec![
            "the INDEXED BY clause is not allowed on UPDATE or DELETE statements \
             within triggers"
        ]
    );
    assert_eq!(
        messages("CREATE TRIGGER tr AFTER INSERT ON t BEGIN DELETE FROM t NOT INDEXED; END"),
        vec![
            "the NOT INDEXED clause is not allowed on UPDATE or DELETE statements \
             within triggers"
        ]
    );
}

#[test]
fn error_lex_failures_surface() {
    assert_eq!(
        parse_err("SELECT 'abc"),
        SqlError::Lex(LexError::UnterminatedString { offset: 7 })
    );
    assert_eq!(
        parse_err("SELECT ^ FROM t").to_string(),
        "unrecognized token: \"^\""
    );
}

#[test]
fn error_nesting_beyond_fixed_stack() {
    let sql = "SELECT (((((((((((1)))))))))))";
    assert_eq!(
        parse_sql_with(sql, &ParserConfig::with_depth(18)),
        Err(SqlError::StackOverflow { capacity: 18 })
    );
    assert!(parse_sql_with(sql, &ParserConfig::with_depth(19)).is_ok());
    assert!(parse_sql_with(sql, &ParserConfig::growable()).is_ok());
}

#[test]
fn error_overflow_message() {
    let err = parse_sql_with("SELECT 1", &ParserConfig::with_depth(2)).unwrap_err();
    assert_eq!(err.to_string(), "parser stack overflow");
}
