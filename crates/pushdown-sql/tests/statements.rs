//! Statements the SQL grammar accepts, and the trees it builds.

mod common;
use common::*;

use pushdown_sql::{parse_sql, ExplainMode};

#[test]
fn select_star_reduces_through_select_rules() {
    let reduced = reductions("SELECT * FROM t");
    let position = |name: &str| {
        reduced
            .iter()
            .position(|rule| *rule == name)
            .unwrap_or_else(|| panic!("{name} not reduced: {reduced:?}"))
    };
    let oneselect = position(
        "oneselect ::= SELECT distinct selcollist from where_opt groupby_opt having_opt orderby_opt limit_opt",
    );
    let selectnowith = position("selectnowith ::= oneselect");
    let select = position("select ::= with selectnowith");
    assert!(oneselect < selectnowith && selectnowith < select);
    assert_eq!(reduced.last(), Some(&"input ::= cmdlist"));
}

#[test]
fn select_star_has_empty_optional_clauses() {
    let tree = parse_tree("SELECT * FROM t");
    for clause in [
        "where_opt",
        "groupby_opt",
        "having_opt",
        "orderby_opt",
        "limit_opt",
    ] {
        let node = tree.find(clause).unwrap_or_else(|| panic!("no {clause}"));
        assert!(node.is_empty(), "{clause} should be empty");
    }
    assert_eq!(
        child_kinds(&tree, "oneselect"),
        vec![
            "distinct",
            "selcollist",
            "from",
            "where_opt",
            "groupby_opt",
            "having_opt",
            "orderby_opt",
            "limit_opt",
        ]
    );
}

#[test]
fn tree_tokens_follow_source_order() {
    let tree = parse_tree("SELECT id, name FROM users WHERE active = 1");
    let texts: Vec<_> = tree.tokens().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(
        texts,
        vec!["SELECT", "id", ",", "name", "FROM", "users", "WHERE", "active", "=", "1", ""]
    );
    let where_clause = tree.find("where_opt").unwrap();
    assert!(!where_clause.is_empty());
    assert_eq!(
        where_clause.span.map(|s| s.start..s.end),
        Some(27..43)
    );
}

#[test]
fn display_is_an_s_expression() {
    let tree = parse_tree("VACUUM");
    let rendered = tree.to_string();
    assert!(rendered.starts_with("(input (cmdlist (ecmd (explain) (cmdx (cmd VACUUM"));
    assert!(rendered.ends_with(')'));
}

#[test]
fn counts_statements() {
    assert_eq!(parse("SELECT 1; SELECT 2;").statements, 2);
    assert_eq!(parse("SELECT 1; SELECT 2").statements, 2);
    assert_eq!(parse(";;").statements, 0);
    assert_eq!(parse("BEGIN; COMMIT").statements, 2);
}

#[test]
fn empty_text_has_no_tree() {
    let parsed = parse("");
    assert!(parsed.tree.is_none());
    assert_eq!(parsed.statements, 0);
    let parsed = parse("  -- only a comment\n");
    assert!(parsed.tree.is_none());
}

#[test]
fn explain_modes() {
    assert_eq!(parse("SELECT 1").explain, ExplainMode::Off);
    assert_eq!(parse("EXPLAIN SELECT 1").explain, ExplainMode::Explain);
    assert_eq!(
        parse("EXPLAIN QUERY PLAN SELECT 1").explain,
        ExplainMode::QueryPlan
    );
}

#[test]
fn accepts_common_statements() {
    let statements = [
        "CREATE TABLE users (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL, email TEXT UNIQUE)",
        "CREATE TEMP TABLE IF NOT EXISTS t(a, b DEFAULT 0) WITHOUT rowid",
        "INSERT INTO users (name, email) VALUES ('alice', 'a@example.com')",
        "INSERT OR REPLACE INTO t SELECT * FROM s",
        "UPDATE users SET name = 'bob' WHERE id = ?1",
        "DELETE FROM users WHERE name LIKE 'a%'",
        "BEGIN IMMEDIATE TRANSACTION; ROLLBACK",
        "CREATE INDEX idx ON users(name DESC)",
        "DROP TABLE IF EXISTS users",
        "WITH RECURSIVE c(x) AS (SELECT 1 UNION ALL SELECT x + 1 FROM c LIMIT 10) SELECT x FROM c",
        "SELECT a.id, b.name FROM a LEFT OUTER JOIN b ON a.id = b.a_id ORDER BY b.name DESC LIMIT 5 OFFSET 10",
        "SELECT CASE WHEN x > 0 THEN 'pos' ELSE 'neg' END FROM t",
        "SELECT count(*), max(x) FROM t GROUP BY y HAVING count(*) > 1",
        "SELECT * FROM t WHERE x IN (SELECT y FROM u) AND z BETWEEN 1 AND 2",
        "SELECT x'00ff', 1.5e3, -x, ~y, a || b, CAST(x AS TEXT) FROM t",
        "SELECT :name, @p, $v",
        "CREATE TRIGGER tr AFTER INSERT ON t BEGIN UPDATE t SET a = 1; END",
        "PRAGMA foo = 1",
        "ATTACH DATABASE 'x.db' AS x",
        "ALTER TABLE t ADD COLUMN c TEXT",
        "ALTER TABLE t RENAME TO u",
        "SELECT DISTINCT a FROM t NATURAL JOIN u USING (id)",
        "SELECT * FROM t INDEXED BY i",
        "SELECT * FROM t NOT INDEXED",
        "CREATE VIEW v AS SELECT 1",
        "SAVEPOINT sp; RELEASE sp",
        "REINDEX",
        "ANALYZE t",
        "DETACH x",
    ];
    for sql in statements {
        let parsed = parse(sql);
        assert!(parsed.tree.is_some(), "no tree for {sql}");
        assert!(parsed.statements >= 1, "no statement counted for {sql}");
    }
}

#[test]
fn trigger_body_is_one_statement() {
    let parsed = parse("CREATE TRIGGER tr AFTER INSERT ON t BEGIN UPDATE t SET a = 1; END");
    assert_eq!(parsed.statements, 1);
    let tree = parsed.tree.unwrap();
    assert!(tree.find("trigger_cmd").is_some());
}

#[test]
fn stats_are_reported() {
    let parsed = parse("SELECT * FROM t");
    // Four scanned tokens, the implied `;` and end of input.
    assert_eq!(parsed.stats.tokens, 6);
    assert_eq!(parsed.stats.syntax_errors, 0);
    assert_eq!(parsed.stats.peak_depth, 14);
}

#[test]
fn tree_serializes_to_json() {
    let parsed = parse_sql("SELECT 1").unwrap();
    let json = serde_json::to_value(&parsed).unwrap();
    assert_eq!(json["statements"], 1);
    assert_eq!(json["explain"], "off");
    assert_eq!(json["tree"]["kind"], "input");
}
