//! The table-driven parser agrees with a hand-written recursive descent
//! parser on every short query.

mod common;
use common::*;

use pushdown_fts::parse_query;

const WORDS: [&str; 15] = [
    "a", "b", "NEAR", "5", "AND", "OR", "NOT", "(", ")", "{", "}", ":", ",", "+", "*",
];

fn check(query: &str) -> bool {
    let table = parse_query(query).ok().map(|parsed| parsed.expr);
    let reference = Reference::parse(query);
    assert_eq!(table, reference, "disagreement on {query:?}");
    table.is_some()
}

#[test]
fn agrees_on_hand_picked_queries() {
    let queries = [
        "a",
        "a b c",
        "a OR b c AND d NOT e",
        "(a OR b) NOT (c AND d)",
        "NEAR(a b)",
        "NEAR(a + b* c, 7) x",
        "{a b} : c + d OR e : f",
        "x : NEAR(y z, 0)",
        "\"quoted phrase\"* AND \"a \"\"b\"\"\"",
        "a (b)",
        "near(a, 1)",
        "NEAR(a, b)",
        "a OR OR b",
        "((a) OR (b))",
    ];
    for query in queries {
        check(query);
    }
}

#[test]
fn agrees_on_every_query_up_to_four_tokens() {
    let mut queries = vec![String::new()];
    let mut accepted = 0;
    for _ in 0..4 {
        queries = queries
            .iter()
            .flat_map(|prefix| {
                WORDS.iter().map(move |word| {
                    if prefix.is_empty() {
                        (*word).to_string()
                    } else {
                        format!("{prefix} {word}")
                    }
                })
            })
            .collect();
        accepted += queries.iter().filter(|query| check(query)).count();
    }
    assert!(accepted > 1000, "only {accepted} queries accepted");
}
