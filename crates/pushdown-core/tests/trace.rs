//! Trace events emitted by the driver.

mod common;
use common::*;

use pushdown_core::{LogTrace, Outcome, Parser, ParserConfig, TraceEvent};

#[test]
fn test_reductions_in_order() {
    let run = run(&RECOVERING, "a ; $");
    // stmt ::= ID SEMI, list ::= stmt, program ::= list
    assert_eq!(run.trace.reductions(), vec![3, 2, 0]);
}

#[test]
fn test_event_sequence_for_single_statement() {
    let run = run(&RECOVERING, "a ; $");
    let events = run.trace.events();
    assert_eq!(events[0], TraceEvent::Input { symbol: ID });
    assert_eq!(events[1], TraceEvent::Shift { symbol: ID, state: 2 });
    assert_eq!(events[2], TraceEvent::Return { depth: 2 });
    assert_eq!(events[3], TraceEvent::Input { symbol: SEMI });
    assert_eq!(events[4], TraceEvent::ShiftReduce { symbol: SEMI, rule: 3 });
    assert_eq!(events.last(), Some(&TraceEvent::Accept));
}

#[test]
fn test_recovery_events() {
    let run = run(&RECOVERING, "a ; b c ; d ; e ; $");
    let events = run.trace.events();
    let position = |wanted: &TraceEvent| events.iter().position(|event| event == wanted);
    let error = position(&TraceEvent::SyntaxError { symbol: ID }).unwrap();
    let pop = position(&TraceEvent::Pop { symbol: ID }).unwrap();
    let shift_error = position(&TraceEvent::Shift {
        symbol: ERROR,
        state: 3,
    })
    .unwrap();
    let discard = position(&TraceEvent::Discard { symbol: ID }).unwrap();
    assert!(error < pop && pop < shift_error && shift_error < discard);
}

#[test]
fn test_render_uses_names() {
    let event = TraceEvent::Reduce { rule: 3 };
    assert_eq!(event.render(&RECOVERING), "Reduce [stmt ::= ID SEMI]");
    let event = TraceEvent::Shift { symbol: ID, state: 2 };
    assert_eq!(event.render(&RECOVERING), "Shift 'ID', go to state 2");
}

#[test]
fn test_log_trace_from_config() {
    let config = ParserConfig {
        trace_prefix: Some("stmt: ".to_string()),
        ..ParserConfig::default()
    };
    let mut parser = Parser::new(StmtGrammar::new(&RECOVERING), &config).unwrap();
    let mut ctx = Ctx::default();
    let mut last = Ok(Outcome::Pending);
    for token in tokens("a ; $") {
        last = parser.consume(code(&token), token, &mut ctx);
    }
    assert_eq!(last, Ok(Outcome::Accepted(Some("[a]".to_string()))));

    parser.set_trace(Some(Box::new(LogTrace::default())));
    parser.set_trace(None);
}
