//! Parse tables for the full-text query grammar.
//!
//! The grammar has no fallback tokens and no wildcard.
//! Generated from the grammar by the table generator; do not edit.

use pushdown_core::{ActionBounds, ParseTables, RuleInfo, SymbolCode};

/// Terminal symbol codes.
pub mod token {
    use pushdown_core::SymbolCode;

    pub const EOF: SymbolCode = 0;
    pub const OR: SymbolCode = 1;
    pub const AND: SymbolCode = 2;
    pub const NOT: SymbolCode = 3;
    pub const TERM: SymbolCode = 4;
    pub const COLON: SymbolCode = 5;
    pub const LP: SymbolCode = 6;
    pub const RP: SymbolCode = 7;
    pub const LCP: SymbolCode = 8;
    pub const RCP: SymbolCode = 9;
    pub const STRING: SymbolCode = 10;
    pub const COMMA: SymbolCode = 11;
    pub const PLUS: SymbolCode = 12;
    pub const STAR: SymbolCode = 13;
}

/// Code of the first nonterminal.
pub const FIRST_NONTERMINAL: SymbolCode = 15;

#[rustfmt::skip]
static SYMBOL_NAMES: [&str; 26] = [
    "$",
    "OR",
    "AND",
    "NOT",
    "TERM",
    "COLON",
    "LP",
    "RP",
    "LCP",
    "RCP",
    "STRING",
    "COMMA",
    "PLUS",
    "STAR",
    "error",
    "input",
    "expr",
    "cnearset",
    "exprlist",
    "nearset",
    "colset",
    "colsetlist",
    "nearphrases",
    "phrase",
    "neardist_opt",
    "star_opt",
];

#[rustfmt::skip]
static RULE_NAMES: [&str; 24] = [
    "input ::= expr",
    "expr ::= expr AND expr",
    "expr ::= expr OR expr",
    "expr ::= expr NOT expr",
    "expr ::= LP expr RP",
    "expr ::= exprlist",
    "exprlist ::= cnearset",
    "exprlist ::= exprlist cnearset",
    "cnearset ::= nearset",
    "cnearset ::= colset COLON nearset",
    "colset ::= LCP colsetlist RCP",
    "colset ::= STRING",
    "colsetlist ::= colsetlist STRING",
    "colsetlist ::= STRING",
    "nearset ::= phrase",
    "nearset ::= STRING LP nearphrases neardist_opt RP",
    "nearphrases ::= phrase",
    "nearphrases ::= nearphrases phrase",
    "neardist_opt ::=",
    "neardist_opt ::= COMMA STRING",
    "phrase ::= phrase PLUS STRING star_opt",
    "phrase ::= STRING star_opt",
    "star_opt ::= STAR",
    "star_opt ::=",
];

#[rustfmt::skip]
static RULES: [RuleInfo; 24] = [
    RuleInfo::new(15, 1), RuleInfo::new(16, 3), RuleInfo::new(16, 3), RuleInfo::new(16, 3),
    RuleInfo::new(16, 3), RuleInfo::new(16, 1), RuleInfo::new(18, 1), RuleInfo::new(18, 2),
    RuleInfo::new(17, 1), RuleInfo::new(17, 3), RuleInfo::new(20, 3), RuleInfo::new(20, 1),
    RuleInfo::new(21, 2), RuleInfo::new(21, 1), RuleInfo::new(19, 1), RuleInfo::new(19, 5),
    RuleInfo::new(22, 1), RuleInfo::new(22, 2), RuleInfo::new(24, 0), RuleInfo::new(24, 2),
    RuleInfo::new(23, 4), RuleInfo::new(23, 2), RuleInfo::new(25, 1), RuleInfo::new(25, 0),
];

#[rustfmt::skip]
static ACTION: [u16; 78] = [
    89, 15, 46, 5, 48, 24, 12, 19, 23, 14, 46, 5, 48, 24, 20, 21,
    23, 43, 46, 5, 48, 24, 6, 18, 23, 17, 46, 5, 48, 24, 75, 7,
    23, 25, 46, 5, 48, 24, 62, 47, 23, 48, 24, 7, 11, 23, 9, 3,
    4, 2, 62, 50, 52, 44, 64, 3, 4, 2, 49, 4, 2, 1, 23, 11,
    16, 9, 12, 2, 10, 61, 53, 59, 62, 60, 22, 13, 55, 8,
];

#[rustfmt::skip]
static LOOKAHEAD: [SymbolCode; 78] = [
    15, 16, 17, 18, 19, 20, 10, 11, 23, 16, 17, 18, 19, 20, 23, 24,
    23, 16, 17, 18, 19, 20, 22, 23, 23, 16, 17, 18, 19, 20, 5, 6,
    23, 16, 17, 18, 19, 20, 13, 17, 23, 19, 20, 6, 8, 23, 10, 1,
    2, 3, 13, 9, 10, 7, 0, 1, 2, 3, 19, 2, 3, 6, 23, 8,
    21, 10, 10, 3, 10, 25, 10, 10, 13, 25, 12, 10, 7, 5,
];

#[rustfmt::skip]
static SHIFT_OFFSET: [i16; 26] = [
    55, 55, 55, 55, 55, 36, -4, 56, 58, 25, 37, 60, 59, 59, 46, 54,
    42, 57, 62, 61, 62, 69, 65, 62, 72, 64,
];

#[rustfmt::skip]
static REDUCE_OFFSET: [i16; 14] = [
    -15, -7, 1, 9, 17, 22, -9, 0, 39, 44, 44, 43, 44, 48,
];

#[rustfmt::skip]
static DEFAULT_ACTION: [u16; 26] = [
    88, 88, 88, 88, 88, 69, 82, 88, 88, 87, 87, 88, 87, 87, 88, 88,
    88, 66, 80, 88, 81, 88, 88, 78, 88, 65,
];

#[rustfmt::skip]
static FALLBACK: [SymbolCode; 0] = [
];

/// Tables for the full-text query grammar.
pub static FTS_TABLES: ParseTables = ParseTables {
    name: "fts",
    symbol_names: &SYMBOL_NAMES,
    rule_names: &RULE_NAMES,
    rules: &RULES,
    action: &ACTION,
    lookahead: &LOOKAHEAD,
    shift_offset: &SHIFT_OFFSET,
    reduce_offset: &REDUCE_OFFSET,
    default_action: &DEFAULT_ACTION,
    fallback: &FALLBACK,
    shift_use_default: -5,
    reduce_use_default: -16,
    bounds: ActionBounds {
        max_shift: 25,
        min_shift_reduce: 40,
        max_shift_reduce: 63,
        min_reduce: 64,
        max_reduce: 87,
        error: 88,
        accept: 89,
        no_action: 90,
    },
    terminal_count: 14,
    no_code: 27,
    wildcard: None,
    error_symbol: None,
};
