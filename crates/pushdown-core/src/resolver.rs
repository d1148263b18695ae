//! Action lookup in compressed tables.

use crate::tables::{Action, ParseTables, StateId, SymbolCode};

/// A lookahead replaced during lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Substitution {
    /// The terminal's fallback was used.
    Fallback { from: SymbolCode, to: SymbolCode },
    /// The wildcard cell of the state matched `symbol`.
    Wildcard { symbol: SymbolCode },
}

/// Result of a terminal lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub action: Action,
    pub substitution: Option<Substitution>,
}

impl Resolution {
    const fn plain(action: Action) -> Self {
        Self {
            action,
            substitution: None,
        }
    }
}

/// Finds the action for terminal `lookahead` in `state`.
///
/// When the state has no cell for the lookahead, its fallback terminal is
/// tried, then the wildcard cell, then the state's default action. End of
/// input (code 0) is never substituted.
#[must_use]
pub fn find_shift_action(tables: &ParseTables, state: StateId, lookahead: SymbolCode) -> Resolution {
    let bounds = &tables.bounds;
    if let Some(rule) = bounds.pending_rule(state) {
        return Resolution::plain(Action::Reduce(rule));
    }
    let default = Resolution::plain(bounds.decode(tables.default_for(state)));
    let offset = match tables.shift_offset.get(usize::from(state)) {
        Some(&offset) if offset != tables.shift_use_default => i32::from(offset),
        _ => return default,
    };

    let mut symbol = lookahead;
    let mut substitution = None;
    loop {
        if let Some(code) = tables.cell(offset + i32::from(symbol), symbol) {
            return Resolution {
                action: bounds.decode(code),
                substitution,
            };
        }
        if symbol == 0 {
            return default;
        }
        match tables.fallback.get(usize::from(symbol)) {
            Some(&to) if to != 0 => {
                substitution = Some(Substitution::Fallback { from: symbol, to });
                symbol = to;
            }
            _ => break,
        }
    }

    if let Some(wildcard) = tables.wildcard {
        if let Some(code) = tables.cell(offset + i32::from(wildcard), wildcard) {
            return Resolution {
                action: bounds.decode(code),
                substitution: Some(Substitution::Wildcard { symbol: lookahead }),
            };
        }
    }
    default
}

/// Finds the goto action for nonterminal `symbol` exposed in `state`.
#[must_use]
pub fn find_reduce_action(tables: &ParseTables, state: StateId, symbol: SymbolCode) -> Action {
    let bounds = &tables.bounds;
    let default = bounds.decode(tables.default_for(state));
    let offset = match tables.reduce_offset.get(usize::from(state)) {
        Some(&offset) if offset != tables.reduce_use_default => i32::from(offset),
        _ => return default,
    };
    tables
        .cell(offset + i32::from(symbol), symbol)
        .map_or(default, |code| bounds.decode(code))
}
