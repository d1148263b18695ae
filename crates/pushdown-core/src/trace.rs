//! Observational tracing of driver steps.
//!
//! A [`TraceSink`] attached to a parser receives one [`TraceEvent`] per
//! automaton step. [`LogTrace`] forwards them to `tracing` at TRACE level;
//! [`TraceLog`] collects them for inspection.

use std::sync::{Arc, Mutex, PoisonError};

use crate::tables::{ParseTables, RuleId, StateId, SymbolCode};

/// One step of the automaton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    /// A terminal was fed to the parser.
    Input { symbol: SymbolCode },
    /// A symbol was pushed and the automaton moved to `state`.
    Shift { symbol: SymbolCode, state: StateId },
    /// A symbol was pushed with a reduction by `rule` pending.
    ShiftReduce { symbol: SymbolCode, rule: RuleId },
    /// A rule was reduced.
    Reduce { rule: RuleId },
    /// `from` had no action and was replaced by `to`.
    Fallback { from: SymbolCode, to: SymbolCode },
    /// `symbol` had no action and matched the wildcard terminal.
    Wildcard { symbol: SymbolCode },
    /// A syntax error was reported on `symbol`.
    SyntaxError { symbol: SymbolCode },
    /// The lookahead was thrown away during recovery.
    Discard { symbol: SymbolCode },
    /// An entry was popped during recovery.
    Pop { symbol: SymbolCode },
    /// The stack grew to `capacity` entries.
    StackGrow { capacity: usize },
    /// The stack overflowed at `capacity` entries.
    StackOverflow { capacity: usize },
    Accept,
    Fail,
    /// `consume` returned with `depth` entries on the stack.
    Return { depth: usize },
}

impl TraceEvent {
    /// Renders the event with symbol and rule names from `tables`.
    #[must_use]
    pub fn render(&self, tables: &ParseTables) -> String {
        let name = |symbol: &SymbolCode| tables.symbol_name(*symbol);
        match self {
            Self::Input { symbol } => format!("Input '{}'", name(symbol)),
            Self::Shift { symbol, state } => {
                format!("Shift '{}', go to state {state}", name(symbol))
            }
            Self::ShiftReduce { symbol, rule } => format!(
                "Shift '{}', pending reduce [{}]",
                name(symbol),
                tables.rule_name(*rule)
            ),
            Self::Reduce { rule } => format!("Reduce [{}]", tables.rule_name(*rule)),
            Self::Fallback { from, to } => format!("FALLBACK {} => {}", name(from), name(to)),
            Self::Wildcard { symbol } => format!("WILDCARD {} matched", name(symbol)),
            Self::SyntaxError { symbol } => format!("Syntax error on '{}'", name(symbol)),
            Self::Discard { symbol } => format!("Discard input token {}", name(symbol)),
            Self::Pop { symbol } => format!("Popping {}", name(symbol)),
            Self::StackGrow { capacity } => format!("Stack grows to {capacity} entries"),
            Self::StackOverflow { capacity } => format!("Stack overflow at {capacity} entries"),
            Self::Accept => "Accept!".to_string(),
            Self::Fail => "Fail!".to_string(),
            Self::Return { depth } => format!("Return, stack depth {depth}"),
        }
    }
}

/// Receiver of trace events.
pub trait TraceSink {
    fn event(&mut self, tables: &ParseTables, event: &TraceEvent);
}

/// Logs every event through `tracing` at TRACE level.
#[derive(Debug, Clone, Default)]
pub struct LogTrace {
    prefix: String,
}

impl LogTrace {
    /// Creates a sink that prepends `prefix` to every line.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl TraceSink for LogTrace {
    fn event(&mut self, tables: &ParseTables, event: &TraceEvent) {
        tracing::trace!(grammar = tables.name, "{}{}", self.prefix, event.render(tables));
    }
}

/// Collects events in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct TraceLog {
    events: Arc<Mutex<Vec<TraceEvent>>>,
}

impl TraceLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the events recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<TraceEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Rules reduced so far, in order.
    #[must_use]
    pub fn reductions(&self) -> Vec<RuleId> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                TraceEvent::Reduce { rule } => Some(rule),
                _ => None,
            })
            .collect()
    }

    /// Forgets every recorded event.
    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl TraceSink for TraceLog {
    fn event(&mut self, _tables: &ParseTables, event: &TraceEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}
