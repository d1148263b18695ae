//! Fixed and growable stack behaviour.

mod common;
use common::*;

use pushdown_core::{DriverError, Outcome, Parser, ParserConfig, TraceEvent};

#[test]
fn test_fixed_stack_overflow_unwinds() {
    // The deepest point of "a ; b ;" is four entries.
    let run = run_with(&RECOVERING, "a ; b ; $", &ParserConfig::with_depth(3));
    assert_eq!(run.last, Err(DriverError::StackOverflow { capacity: 3 }));
    assert!(run.ctx.overflowed);
    assert!(!run.ctx.accepted);
    assert_eq!(run.fed, vec!["a", ";1", "b", ";2"]);
    assert!(run.stats.peak_depth <= 3);
    assert_each_value_released_once(&run);
}

#[test]
fn test_fixed_stack_exactly_deep_enough() {
    let run = run_with(&RECOVERING, "a ; b ; $", &ParserConfig::with_depth(4));
    assert_eq!(run.result(), Some("[a b]"));
    assert_eq!(run.stats.peak_depth, 4);
}

#[test]
fn test_single_entry_stack_overflows_on_first_shift() {
    let run = run_with(&RECOVERING, "a ; $", &ParserConfig::with_depth(1));
    assert_eq!(run.last, Err(DriverError::StackOverflow { capacity: 1 }));
    assert_eq!(run.fed, vec!["a"]);
    assert_eq!(run.disposed, vec!["a"]);
}

#[test]
fn test_input_after_overflow_is_refused_until_reset() {
    let grammar = StmtGrammar::new(&RECOVERING);
    let disposed = std::rc::Rc::clone(&grammar.disposed);
    let mut parser = Parser::new(grammar, &ParserConfig::with_depth(3)).unwrap();
    let mut ctx = Ctx::default();
    for token in tokens("a ; b") {
        assert_eq!(parser.consume(code(&token), token, &mut ctx), Ok(Outcome::Pending));
    }
    assert_eq!(
        parser.consume(SEMI, ";".to_string(), &mut ctx),
        Err(DriverError::StackOverflow { capacity: 3 })
    );
    assert!(parser.is_finished());
    assert_eq!(parser.depth(), 0);

    assert_eq!(
        parser.consume(ID, "late".to_string(), &mut ctx),
        Err(DriverError::Finished)
    );
    assert!(disposed.borrow().contains(&"late".to_string()));

    parser.reset();
    let mut last = Ok(Outcome::Pending);
    for token in tokens("c ; $") {
        last = parser.consume(code(&token), token, &mut ctx);
    }
    assert_eq!(last, Ok(Outcome::Accepted(Some("[c]".to_string()))));
}

#[test]
fn test_growable_stack_grows_instead_of_overflowing() {
    let config = ParserConfig {
        stack: pushdown_core::StackLimit::Growable { initial: 2 },
        ..ParserConfig::default()
    };
    let run = run_with(&RECOVERING, "a ; b ; $", &config);
    assert_eq!(run.result(), Some("[a b]"));
    assert!(run
        .trace
        .events()
        .contains(&TraceEvent::StackGrow { capacity: 104 }));
}

#[test]
fn test_growable_capacity_is_reported() {
    let config = ParserConfig {
        stack: pushdown_core::StackLimit::Growable { initial: 1 },
        ..ParserConfig::default()
    };
    let grammar = StmtGrammar::new(&RECOVERING);
    let mut parser = Parser::new(grammar, &config).unwrap();
    assert_eq!(parser.capacity(), 1);
    parser
        .consume(ID, "a".to_string(), &mut Ctx::default())
        .unwrap();
    assert_eq!(parser.capacity(), 102);
    assert_eq!(parser.depth(), 2);
}
