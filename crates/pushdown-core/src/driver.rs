//! The push-parser driver.
//!
//! The caller feeds one terminal at a time with [`Parser::consume`]; the
//! driver shifts, reduces and recovers until that terminal is consumed or
//! the parse ends.

use serde::Serialize;

use crate::config::ParserConfig;
use crate::error::DriverError;
use crate::grammar::{Grammar, Rhs};
use crate::recovery::{Recovery, RecoveryState};
use crate::resolver::{find_reduce_action, find_shift_action, Substitution};
use crate::stack::{Overflow, ParseStack, Pushed, StackEntry};
use crate::tables::{Action, ParseTables, RuleId, StateId, SymbolCode};
use crate::trace::{LogTrace, TraceEvent, TraceSink};

/// Result of feeding one terminal.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome<V> {
    /// The terminal was consumed; more input is expected.
    Pending,
    /// The start symbol was recognized. Carries the value of the start rule.
    Accepted(Option<V>),
    /// Error recovery gave up. The stack has been unwound.
    Failed,
}

impl<V> Outcome<V> {
    /// True for [`Outcome::Pending`].
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Counters kept across one parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParserStats {
    /// Terminals fed through `consume`.
    pub tokens: usize,
    /// Entries pushed, including nonterminals after reductions.
    pub shifts: usize,
    pub reductions: usize,
    /// Syntax errors reported to the grammar.
    pub syntax_errors: usize,
    /// Lookaheads thrown away by error recovery.
    pub discarded: usize,
    /// Largest stack depth reached.
    pub peak_depth: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Idle,
    Running,
    Finished,
}

enum Step<V> {
    Continue,
    Accepted(Option<V>),
    Failed,
}

/// A table-driven LALR(1) parser for grammar `G`.
pub struct Parser<G: Grammar> {
    grammar: G,
    stack: ParseStack<G::Value>,
    recovery: Recovery,
    status: Status,
    stats: ParserStats,
    trace: Option<Box<dyn TraceSink + Send>>,
}

impl<G: Grammar> Parser<G> {
    /// Creates a parser and allocates its stack.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::AllocationFailure`] if the stack cannot be
    /// allocated.
    pub fn new(grammar: G, config: &ParserConfig) -> Result<Self, DriverError> {
        let trace = config
            .trace_prefix
            .as_ref()
            .map(|prefix| Box::new(LogTrace::new(prefix.clone())) as Box<dyn TraceSink + Send>);
        Ok(Self {
            grammar,
            stack: ParseStack::new(config.stack)?,
            recovery: Recovery::new(config.quiet_shifts),
            status: Status::Idle,
            stats: ParserStats::default(),
            trace,
        })
    }

    /// Replaces the trace sink. `None` turns tracing off.
    pub fn set_trace(&mut self, sink: Option<Box<dyn TraceSink + Send>>) {
        self.trace = sink;
    }

    #[must_use]
    pub const fn grammar(&self) -> &G {
        &self.grammar
    }

    #[must_use]
    pub const fn stats(&self) -> &ParserStats {
        &self.stats
    }

    /// Current stack depth, including the bottom entry once started.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Current stack capacity.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.stack.capacity()
    }

    /// Symbols on the stack, bottom first.
    #[must_use]
    pub fn stack_symbols(&self) -> Vec<SymbolCode> {
        self.stack.symbols()
    }

    #[must_use]
    pub const fn recovery_state(&self) -> RecoveryState {
        self.recovery.state()
    }

    /// True once the parse accepted, failed or overflowed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == Status::Finished
    }

    /// Feeds one terminal and its semantic value.
    ///
    /// Code `0` ends the input.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::StackOverflow`] when the stack cannot grow, and
    /// [`DriverError::Finished`] if the parse already ended. In both cases
    /// `value` has been disposed.
    pub fn consume(
        &mut self,
        symbol: SymbolCode,
        value: G::Value,
        ctx: &mut G::Context,
    ) -> Result<Outcome<G::Value>, DriverError> {
        let mut lookahead = Some(value);
        let result = self.run(symbol, &mut lookahead, ctx);
        // Anything not shifted or handed to the grammar is released here.
        self.dispose_value(symbol, lookahead.take());
        result
    }

    /// Unwinds the stack, disposing every value on it.
    ///
    /// Calling it again, or on a parser that never started, does nothing.
    /// The parser can be fed again afterwards.
    pub fn teardown(&mut self) {
        self.unwind();
        self.recovery.reset();
        self.status = Status::Idle;
    }

    /// Tears down and clears the statistics.
    pub fn reset(&mut self) {
        self.teardown();
        self.stats = ParserStats::default();
        self.stack.reset_peak();
    }

    fn run(
        &mut self,
        symbol: SymbolCode,
        lookahead: &mut Option<G::Value>,
        ctx: &mut G::Context,
    ) -> Result<Outcome<G::Value>, DriverError> {
        let tables = self.grammar.tables();
        match self.status {
            Status::Finished => return Err(DriverError::Finished),
            Status::Idle => self.initialize(ctx)?,
            Status::Running => {}
        }
        self.stats.tokens += 1;
        self.emit(&TraceEvent::Input { symbol });

        let mut error_hit = false;
        loop {
            let Some(state) = self.stack.top().map(|entry| entry.state) else {
                return Ok(self.fail(ctx));
            };
            let resolution = find_shift_action(tables, state, symbol);
            match resolution.substitution {
                Some(Substitution::Fallback { from, to }) => {
                    self.emit(&TraceEvent::Fallback { from, to });
                }
                Some(Substitution::Wildcard { symbol }) => {
                    self.emit(&TraceEvent::Wildcard { symbol });
                }
                None => {}
            }
            match resolution.action {
                Action::Shift(next) => {
                    self.push(next, symbol, lookahead.take(), ctx)?;
                    self.recovery.on_shift();
                    return Ok(self.pending());
                }
                Action::ShiftReduce(rule) => {
                    self.push(tables.bounds.reduce_state(rule), symbol, lookahead.take(), ctx)?;
                    self.recovery.on_shift();
                    return Ok(self.pending());
                }
                Action::Reduce(rule) => match self.reduce(rule, ctx)? {
                    Step::Continue => {}
                    Step::Accepted(result) => return Ok(Outcome::Accepted(result)),
                    Step::Failed => return Ok(Outcome::Failed),
                },
                Action::Accept => {
                    self.accept(ctx);
                    return Ok(Outcome::Accepted(None));
                }
                Action::Error => {
                    if let Some(outcome) = self.recover(symbol, lookahead, &mut error_hit, ctx)? {
                        return Ok(outcome);
                    }
                }
            }
        }
    }

    /// Pushes the bottom entry: state 0, end-of-input symbol, no value.
    fn initialize(&mut self, ctx: &mut G::Context) -> Result<(), DriverError> {
        self.status = Status::Running;
        self.recovery.reset();
        match self.stack.push(StackEntry::new(0, 0, None)) {
            Ok(_) => {
                self.stats.peak_depth = self.stack.peak();
                Ok(())
            }
            Err(overflow) => Err(self.overflow(overflow, ctx)),
        }
    }

    fn pending(&mut self) -> Outcome<G::Value> {
        self.emit(&TraceEvent::Return {
            depth: self.stack.len(),
        });
        Outcome::Pending
    }

    /// Handles an error action. Returns `Some` when `consume` should return.
    fn recover(
        &mut self,
        symbol: SymbolCode,
        lookahead: &mut Option<G::Value>,
        error_hit: &mut bool,
        ctx: &mut G::Context,
    ) -> Result<Option<Outcome<G::Value>>, DriverError> {
        let tables = self.grammar.tables();
        let Some(error_symbol) = tables.error_symbol else {
            if self.recovery.should_report() {
                self.report(symbol, lookahead.as_ref(), ctx);
            }
            self.recovery.enter();
            self.discard(symbol, lookahead);
            if symbol == 0 {
                return Ok(Some(self.fail(ctx)));
            }
            return Ok(Some(self.pending()));
        };

        if self.recovery.should_report() && !*error_hit {
            self.report(symbol, lookahead.as_ref(), ctx);
        }
        let top_symbol = self.stack.top().map(|entry| entry.symbol);
        if top_symbol == Some(error_symbol) || *error_hit {
            self.discard(symbol, lookahead);
            self.recovery.enter();
            if symbol == 0 {
                return Ok(Some(self.fail(ctx)));
            }
            return Ok(Some(self.pending()));
        }

        match self.pop_to_error_state(tables, error_symbol) {
            Some(state) if symbol != 0 => {
                self.push(state, error_symbol, None, ctx)?;
                self.recovery.enter();
                *error_hit = true;
                Ok(None)
            }
            _ => Ok(Some(self.fail(ctx))),
        }
    }

    /// Pops entries until the exposed state can shift the error symbol.
    fn pop_to_error_state(
        &mut self,
        tables: &'static ParseTables,
        error_symbol: SymbolCode,
    ) -> Option<StateId> {
        loop {
            let state = self.stack.top()?.state;
            match find_reduce_action(tables, state, error_symbol) {
                Action::Shift(next) => return Some(next),
                Action::ShiftReduce(rule) => return Some(tables.bounds.reduce_state(rule)),
                _ => {
                    let entry = self.stack.pop()?;
                    self.emit(&TraceEvent::Pop {
                        symbol: entry.symbol,
                    });
                    self.dispose_entry(entry);
                }
            }
        }
    }

    fn reduce(&mut self, rule: RuleId, ctx: &mut G::Context) -> Result<Step<G::Value>, DriverError> {
        let tables = self.grammar.tables();
        let Some(info) = tables.rule(rule) else {
            tracing::warn!(grammar = tables.name, rule, "reduce by unknown rule");
            self.fail(ctx);
            return Ok(Step::Failed);
        };
        self.stats.reductions += 1;
        self.emit(&TraceEvent::Reduce { rule });

        let size = usize::from(info.rhs_len);
        let result = {
            let mut rhs = Rhs::new(self.stack.top_mut(size));
            self.grammar.reduce(rule, &mut rhs, ctx)
        };
        let grammar = &self.grammar;
        for entry in self.stack.pop_n(size) {
            if let Some(value) = entry.value {
                grammar.dispose(entry.symbol, value);
            }
        }

        let Some(exposed) = self.stack.top().map(|entry| entry.state) else {
            self.dispose_value(info.lhs, result);
            self.fail(ctx);
            return Ok(Step::Failed);
        };
        match find_reduce_action(tables, exposed, info.lhs) {
            Action::Shift(next) => {
                self.push(next, info.lhs, result, ctx)?;
                Ok(Step::Continue)
            }
            Action::ShiftReduce(next_rule) => {
                self.push(tables.bounds.reduce_state(next_rule), info.lhs, result, ctx)?;
                Ok(Step::Continue)
            }
            Action::Accept => {
                self.accept(ctx);
                Ok(Step::Accepted(result))
            }
            Action::Reduce(_) | Action::Error => {
                tracing::warn!(
                    grammar = tables.name,
                    state = exposed,
                    symbol = tables.symbol_name(info.lhs),
                    "no goto for reduced symbol"
                );
                self.dispose_value(info.lhs, result);
                self.fail(ctx);
                Ok(Step::Failed)
            }
        }
    }

    fn push(
        &mut self,
        state: StateId,
        symbol: SymbolCode,
        value: Option<G::Value>,
        ctx: &mut G::Context,
    ) -> Result<(), DriverError> {
        let tables = self.grammar.tables();
        match self.stack.push(StackEntry::new(state, symbol, value)) {
            Ok(pushed) => {
                if let Pushed::Grew(capacity) = pushed {
                    tracing::debug!(grammar = tables.name, capacity, "parse stack grew");
                    self.emit(&TraceEvent::StackGrow { capacity });
                }
                self.stats.shifts += 1;
                self.stats.peak_depth = self.stack.peak();
                if let Some(rule) = tables.bounds.pending_rule(state) {
                    self.emit(&TraceEvent::ShiftReduce { symbol, rule });
                } else {
                    self.emit(&TraceEvent::Shift { symbol, state });
                }
                Ok(())
            }
            Err(overflow) => Err(self.overflow(overflow, ctx)),
        }
    }

    /// Disposes the refused entry and everything on the stack.
    fn overflow(&mut self, overflow: Overflow<G::Value>, ctx: &mut G::Context) -> DriverError {
        let capacity = overflow.capacity;
        self.dispose_entry(overflow.entry);
        tracing::debug!(grammar = self.grammar.tables().name, capacity, "parse stack overflow");
        self.emit(&TraceEvent::StackOverflow { capacity });
        self.unwind();
        self.status = Status::Finished;
        self.grammar.stack_overflow(ctx);
        DriverError::StackOverflow { capacity }
    }

    fn accept(&mut self, ctx: &mut G::Context) {
        self.emit(&TraceEvent::Accept);
        self.unwind();
        self.status = Status::Finished;
        self.grammar.parse_accepted(ctx);
    }

    fn fail(&mut self, ctx: &mut G::Context) -> Outcome<G::Value> {
        self.emit(&TraceEvent::Fail);
        self.unwind();
        self.status = Status::Finished;
        self.grammar.parse_failed(ctx);
        Outcome::Failed
    }

    fn report(&mut self, symbol: SymbolCode, value: Option<&G::Value>, ctx: &mut G::Context) {
        let tables = self.grammar.tables();
        self.stats.syntax_errors += 1;
        tracing::debug!(
            grammar = tables.name,
            symbol = tables.symbol_name(symbol),
            "syntax error"
        );
        self.emit(&TraceEvent::SyntaxError { symbol });
        self.grammar.syntax_error(symbol, value, ctx);
    }

    fn discard(&mut self, symbol: SymbolCode, lookahead: &mut Option<G::Value>) {
        self.stats.discarded += 1;
        self.emit(&TraceEvent::Discard { symbol });
        self.dispose_value(symbol, lookahead.take());
    }

    fn dispose_value(&self, symbol: SymbolCode, value: Option<G::Value>) {
        if let Some(value) = value {
            self.grammar.dispose(symbol, value);
        }
    }

    fn dispose_entry(&self, entry: StackEntry<G::Value>) {
        self.dispose_value(entry.symbol, entry.value);
    }

    fn unwind(&mut self) {
        while let Some(entry) = self.stack.pop() {
            self.dispose_entry(entry);
        }
    }

    fn emit(&mut self, event: &TraceEvent) {
        if let Some(sink) = self.trace.as_mut() {
            sink.event(self.grammar.tables(), event);
        }
    }
}

impl<G: Grammar> Drop for Parser<G> {
    fn drop(&mut self) {
        self.unwind();
    }
}

impl<G: Grammar> std::fmt::Debug for Parser<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("grammar", &self.grammar.tables().name)
            .field("depth", &self.stack.len())
            .field("capacity", &self.stack.capacity())
            .field("status", &self.status)
            .field("recovery", &self.recovery.state())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
