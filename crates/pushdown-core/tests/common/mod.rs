#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use pushdown_core::{
    ActionBounds, DriverError, Grammar, Outcome, ParseTables, Parser, ParserConfig, ParserStats,
    Rhs, RuleId, RuleInfo, SymbolCode, TraceLog,
};

// A statement-list grammar:
//
//   program ::= list.
//   list ::= list stmt.
//   list ::= stmt.
//   stmt ::= ID SEMI.
//   stmt ::= error SEMI.

pub const EOF: SymbolCode = 0;
pub const ID: SymbolCode = 1;
pub const SEMI: SymbolCode = 2;
pub const ERROR: SymbolCode = 3;

const N: u16 = 7;
const NA: u16 = 16;

#[rustfmt::skip]
const ACTION: [u16; 42] = [
    NA, 2, NA, NA, NA, NA, NA,
    9, 2, NA, NA, NA, NA, NA,
    NA, NA, 7, NA, NA, NA, NA,
    NA, NA, 8, NA, NA, NA, NA,
    NA, NA, NA, 3, 15, 1, 6,
    NA, NA, NA, 3, NA, NA, 5,
];

#[rustfmt::skip]
const LOOKAHEAD: [SymbolCode; 42] = [
    N, 1, N, N, N, N, N,
    0, 1, N, N, N, N, N,
    N, N, 2, N, N, N, N,
    N, N, 2, N, N, N, N,
    N, N, N, 3, 4, 5, 6,
    N, N, N, 3, N, N, 6,
];

const RULES: [RuleInfo; 5] = [
    RuleInfo::new(4, 1),
    RuleInfo::new(5, 2),
    RuleInfo::new(5, 1),
    RuleInfo::new(6, 2),
    RuleInfo::new(6, 2),
];

const SYMBOL_NAMES: [&str; 7] = ["$", "ID", "SEMI", "error", "program", "list", "stmt"];

const RULE_NAMES: [&str; 5] = [
    "program ::= list",
    "list ::= list stmt",
    "list ::= stmt",
    "stmt ::= ID SEMI",
    "stmt ::= error SEMI",
];

const BOUNDS: ActionBounds = ActionBounds {
    max_shift: 3,
    min_shift_reduce: 4,
    max_shift_reduce: 8,
    min_reduce: 9,
    max_reduce: 13,
    error: 14,
    accept: 15,
    no_action: NA,
};

const STMT: ParseTables = ParseTables {
    name: "stmt",
    symbol_names: &SYMBOL_NAMES,
    rule_names: &RULE_NAMES,
    rules: &RULES,
    action: &ACTION,
    lookahead: &LOOKAHEAD,
    shift_offset: &[0, 7, 14, 21],
    reduce_offset: &[28, 35],
    default_action: &[14, 14, 14, 14],
    fallback: &[],
    shift_use_default: -100,
    reduce_use_default: -100,
    bounds: BOUNDS,
    terminal_count: 3,
    no_code: N,
    wildcard: None,
    error_symbol: Some(ERROR),
};

/// The statement grammar with `error` as its recovery symbol.
pub static RECOVERING: ParseTables = STMT;

/// The same automaton with recovery by token discard only.
pub static DISCARDING: ParseTables = ParseTables {
    name: "stmt-discard",
    error_symbol: None,
    ..STMT
};

#[derive(Debug, Default)]
pub struct Ctx {
    pub errors: Vec<String>,
    pub accepted: bool,
    pub failed: bool,
    pub overflowed: bool,
}

/// Builds space-separated strings; records every disposed value.
pub struct StmtGrammar {
    pub tables: &'static ParseTables,
    pub disposed: Rc<RefCell<Vec<String>>>,
}

impl StmtGrammar {
    pub fn new(tables: &'static ParseTables) -> Self {
        Self {
            tables,
            disposed: Rc::default(),
        }
    }
}

impl Grammar for StmtGrammar {
    type Value = String;
    type Context = Ctx;

    fn tables(&self) -> &'static ParseTables {
        self.tables
    }

    fn reduce(&self, rule: RuleId, rhs: &mut Rhs<'_, String>, _ctx: &mut Ctx) -> Option<String> {
        match rule {
            0 => rhs.take(0).map(|list| format!("[{list}]")),
            1 => {
                let list = rhs.take(0).unwrap_or_default();
                let stmt = rhs.take(1).unwrap_or_default();
                Some(format!("{list} {stmt}"))
            }
            // The SEMI values are left behind on purpose.
            2 | 3 => rhs.take(0),
            4 => Some("<error>".to_string()),
            _ => None,
        }
    }

    fn syntax_error(&self, _symbol: SymbolCode, value: Option<&String>, ctx: &mut Ctx) {
        ctx.errors.push(value.cloned().unwrap_or_default());
    }

    fn stack_overflow(&self, ctx: &mut Ctx) {
        ctx.overflowed = true;
    }

    fn parse_failed(&self, ctx: &mut Ctx) {
        ctx.failed = true;
    }

    fn parse_accepted(&self, ctx: &mut Ctx) {
        ctx.accepted = true;
    }

    fn dispose(&self, _symbol: SymbolCode, value: String) {
        self.disposed.borrow_mut().push(value);
    }
}

/// Maps a test token to its code: `$` ends input, `;` is SEMI, anything
/// else is ID.
pub fn code(token: &str) -> SymbolCode {
    match token {
        "$" => EOF,
        t if t.starts_with(';') => SEMI,
        _ => ID,
    }
}

/// Splits `input` on whitespace, numbering semicolons so every token text
/// is unique.
pub fn tokens(input: &str) -> Vec<String> {
    let mut semis = 0;
    input
        .split_whitespace()
        .map(|token| {
            if token == ";" {
                semis += 1;
                format!(";{semis}")
            } else {
                token.to_string()
            }
        })
        .collect()
}

#[derive(Debug)]
pub struct Run {
    pub last: Result<Outcome<String>, DriverError>,
    pub fed: Vec<String>,
    pub ctx: Ctx,
    pub disposed: Vec<String>,
    pub stats: ParserStats,
    pub trace: TraceLog,
}

impl Run {
    pub fn result(&self) -> Option<&str> {
        match &self.last {
            Ok(Outcome::Accepted(value)) => value.as_deref(),
            _ => None,
        }
    }
}

/// Feeds `input` until the parse ends, then drops the parser.
pub fn run_with(tables: &'static ParseTables, input: &str, config: &ParserConfig) -> Run {
    let grammar = StmtGrammar::new(tables);
    let disposed = Rc::clone(&grammar.disposed);
    let mut parser = Parser::new(grammar, config).expect("parser allocation");
    let trace = TraceLog::new();
    parser.set_trace(Some(Box::new(trace.clone())));

    let mut ctx = Ctx::default();
    let mut fed = Vec::new();
    let mut last = Ok(Outcome::Pending);
    for token in tokens(input) {
        fed.push(token.clone());
        last = parser.consume(code(&token), token, &mut ctx);
        if !matches!(last, Ok(Outcome::Pending)) {
            break;
        }
    }
    let stats = *parser.stats();
    drop(parser);
    let disposed = disposed.borrow().clone();
    Run {
        last,
        fed,
        ctx,
        disposed,
        stats,
        trace,
    }
}

pub fn run(tables: &'static ParseTables, input: &str) -> Run {
    run_with(tables, input, &ParserConfig::default())
}

/// Every fed token is either a word of the result or was disposed, once.
pub fn assert_each_value_released_once(run: &Run) {
    let mut released: Vec<String> = run.disposed.clone();
    if let Some(result) = run.result() {
        released.extend(
            result
                .trim_start_matches('[')
                .trim_end_matches(']')
                .split_whitespace()
                .filter(|word| *word != "<error>")
                .map(str::to_string),
        );
    }
    let mut fed = run.fed.clone();
    released.sort();
    fed.sort();
    assert_eq!(released, fed, "values released: {:?}", run.disposed);
}
