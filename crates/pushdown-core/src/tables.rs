//! Compiled LALR(1) action tables.
//!
//! A grammar is shipped as a [`ParseTables`] value holding `'static` slices
//! produced by the table generator. The layout is the compressed lemon
//! layout: one packed action table with a parallel lookahead table used to
//! verify that a cell belongs to the state being queried, per-state offsets
//! into it for terminals (shift offsets) and nonterminals (reduce offsets),
//! and a default action per state.

use crate::error::TableError;

/// Code of a grammar symbol. Terminals come first, `0` is end of input.
pub type SymbolCode = u16;

/// Index of an automaton state.
pub type StateId = u16;

/// Index of a grammar rule.
pub type RuleId = u16;

/// Left-hand side and right-hand side length of one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleInfo {
    /// Nonterminal produced by the rule.
    pub lhs: SymbolCode,
    /// Number of symbols on the right-hand side.
    pub rhs_len: u8,
}

impl RuleInfo {
    /// Creates a rule descriptor.
    #[must_use]
    pub const fn new(lhs: SymbolCode, rhs_len: u8) -> Self {
        Self { lhs, rhs_len }
    }
}

/// A decoded entry of the action table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Push the lookahead and move to the state.
    Shift(StateId),
    /// Push the lookahead, then reduce by the rule on the next step.
    ShiftReduce(RuleId),
    /// Reduce by the rule.
    Reduce(RuleId),
    /// The start symbol was recognized.
    Accept,
    /// Syntax error.
    Error,
}

/// Partition of the raw action code space.
///
/// Codes `0..=max_shift` are shifts, `min_shift_reduce..=max_shift_reduce`
/// shift-reduces, `min_reduce..=max_reduce` reduces. `error`, `accept` and
/// `no_action` are single codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionBounds {
    pub max_shift: u16,
    pub min_shift_reduce: u16,
    pub max_shift_reduce: u16,
    pub min_reduce: u16,
    pub max_reduce: u16,
    pub error: u16,
    pub accept: u16,
    pub no_action: u16,
}

impl ActionBounds {
    /// Decodes a raw action code.
    ///
    /// Codes outside every range (including `no_action`) decode to
    /// [`Action::Error`].
    #[must_use]
    pub const fn decode(&self, code: u16) -> Action {
        if code <= self.max_shift {
            Action::Shift(code)
        } else if code >= self.min_shift_reduce && code <= self.max_shift_reduce {
            Action::ShiftReduce(code - self.min_shift_reduce)
        } else if code >= self.min_reduce && code <= self.max_reduce {
            Action::Reduce(code - self.min_reduce)
        } else if code == self.accept {
            Action::Accept
        } else {
            Action::Error
        }
    }

    /// Stack state recorded for a pending reduction of `rule`.
    ///
    /// After a shift-reduce the pushed entry carries this pseudo-state, which
    /// the resolver turns back into [`Action::Reduce`] without a lookup.
    #[must_use]
    pub const fn reduce_state(&self, rule: RuleId) -> StateId {
        self.min_reduce + rule
    }

    /// Returns the rule pending in `state`, if it is a reduce pseudo-state.
    #[must_use]
    pub const fn pending_rule(&self, state: StateId) -> Option<RuleId> {
        if state >= self.min_reduce {
            Some(state - self.min_reduce)
        } else {
            None
        }
    }

    fn is_gap(&self, code: u16) -> bool {
        code > self.max_shift && code < self.min_shift_reduce
            || code > self.max_shift_reduce && code < self.min_reduce
            || code > self.max_reduce && code < self.error
    }
}

/// Immutable tables for one grammar.
#[derive(Debug)]
pub struct ParseTables {
    /// Name used in trace output and diagnostics.
    pub name: &'static str,
    /// Display name of every symbol, indexed by code.
    pub symbol_names: &'static [&'static str],
    /// Display text of every rule, indexed by rule id.
    pub rule_names: &'static [&'static str],
    /// Shape of every rule, indexed by rule id.
    pub rules: &'static [RuleInfo],
    /// Packed action codes.
    pub action: &'static [u16],
    /// Symbol each action cell belongs to, parallel to `action`.
    pub lookahead: &'static [SymbolCode],
    /// Per-state offset of terminal actions.
    pub shift_offset: &'static [i16],
    /// Per-state offset of goto actions.
    pub reduce_offset: &'static [i16],
    /// Per-state action taken when no cell matches.
    pub default_action: &'static [u16],
    /// Substitute terminal for a terminal with no action. `0` means none.
    pub fallback: &'static [SymbolCode],
    /// Marker in `shift_offset` meaning "always use the default".
    pub shift_use_default: i16,
    /// Marker in `reduce_offset` meaning "always use the default".
    pub reduce_use_default: i16,
    pub bounds: ActionBounds,
    /// Number of terminal symbols.
    pub terminal_count: u16,
    /// One past the largest valid symbol code.
    pub no_code: SymbolCode,
    /// Terminal that matches any lookahead the state has no action for.
    pub wildcard: Option<SymbolCode>,
    /// Symbol shifted during error recovery.
    pub error_symbol: Option<SymbolCode>,
}

impl ParseTables {
    /// Decodes the action code stored at `index`, if `index` is a cell
    /// owned by `symbol`.
    pub(crate) fn cell(&self, index: i32, symbol: SymbolCode) -> Option<u16> {
        let index = usize::try_from(index).ok()?;
        if *self.lookahead.get(index)? == symbol {
            self.action.get(index).copied()
        } else {
            None
        }
    }

    pub(crate) fn default_for(&self, state: StateId) -> u16 {
        self.default_action
            .get(usize::from(state))
            .copied()
            .unwrap_or(self.bounds.error)
    }

    /// Returns the rule descriptor for `rule`.
    #[must_use]
    pub fn rule(&self, rule: RuleId) -> Option<RuleInfo> {
        self.rules.get(usize::from(rule)).copied()
    }

    /// Returns the display name of `symbol`, or `"?"`.
    #[must_use]
    pub fn symbol_name(&self, symbol: SymbolCode) -> &'static str {
        self.symbol_names
            .get(usize::from(symbol))
            .copied()
            .unwrap_or("?")
    }

    /// Returns the display text of `rule`, or `"?"`.
    #[must_use]
    pub fn rule_name(&self, rule: RuleId) -> &'static str {
        self.rule_names.get(usize::from(rule)).copied().unwrap_or("?")
    }

    /// Looks up a symbol code by display name.
    #[must_use]
    pub fn symbol_code(&self, name: &str) -> Option<SymbolCode> {
        self.symbol_names
            .iter()
            .position(|candidate| *candidate == name)
            .and_then(|index| SymbolCode::try_from(index).ok())
    }

    /// Returns true if `symbol` is a terminal.
    #[must_use]
    pub const fn is_terminal(&self, symbol: SymbolCode) -> bool {
        symbol < self.terminal_count
    }

    /// Number of states with their own row of terminal actions.
    #[must_use]
    pub fn state_count(&self) -> usize {
        self.default_action.len()
    }

    /// Checks that the tables are internally consistent.
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found.
    pub fn validate(&self) -> Result<(), TableError> {
        let b = &self.bounds;
        if !(b.max_shift < b.min_shift_reduce
            && b.min_shift_reduce <= b.max_shift_reduce
            && b.max_shift_reduce < b.min_reduce
            && b.min_reduce <= b.max_reduce
            && b.max_reduce < b.error
            && b.error < b.accept
            && b.accept < b.no_action)
        {
            return Err(TableError::Bounds);
        }
        if self.action.len() != self.lookahead.len() {
            return Err(TableError::LengthMismatch {
                table: "lookahead",
                expected: self.action.len(),
                found: self.lookahead.len(),
            });
        }
        if self.shift_offset.len() > self.default_action.len() {
            return Err(TableError::LengthMismatch {
                table: "shift_offset",
                expected: self.default_action.len(),
                found: self.shift_offset.len(),
            });
        }
        if self.reduce_offset.len() > self.default_action.len() {
            return Err(TableError::LengthMismatch {
                table: "reduce_offset",
                expected: self.default_action.len(),
                found: self.reduce_offset.len(),
            });
        }
        if self.symbol_names.len() < usize::from(self.terminal_count)
            || self.symbol_names.len() > usize::from(self.no_code)
        {
            return Err(TableError::LengthMismatch {
                table: "symbol_names",
                expected: usize::from(self.no_code),
                found: self.symbol_names.len(),
            });
        }
        let rule_count = usize::from(b.max_reduce - b.min_reduce) + 1;
        for (table, found) in [("rules", self.rules.len()), ("rule_names", self.rule_names.len())] {
            if found != rule_count {
                return Err(TableError::LengthMismatch {
                    table,
                    expected: rule_count,
                    found,
                });
            }
        }
        for (rule, info) in self.rules.iter().enumerate() {
            if self.is_terminal(info.lhs) || info.lhs >= self.no_code {
                return Err(TableError::BadRuleLhs {
                    rule,
                    lhs: info.lhs,
                });
            }
        }
        for &code in self.action.iter().chain(self.default_action) {
            if b.is_gap(code) || code > b.no_action {
                return Err(TableError::BadActionCode(code));
            }
        }
        for (from, &to) in self.fallback.iter().enumerate() {
            if to == 0 {
                continue;
            }
            let chained = self.fallback.get(usize::from(to)).is_some_and(|&next| next != 0);
            if !self.is_terminal(to) || chained {
                return Err(TableError::BadFallback { from, to });
            }
        }
        if let Some(wildcard) = self.wildcard {
            if !self.is_terminal(wildcard) {
                return Err(TableError::BadSymbol(wildcard));
            }
        }
        if let Some(error) = self.error_symbol {
            if error >= self.no_code {
                return Err(TableError::BadSymbol(error));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: ActionBounds = ActionBounds {
        max_shift: 3,
        min_shift_reduce: 4,
        max_shift_reduce: 8,
        min_reduce: 9,
        max_reduce: 13,
        error: 14,
        accept: 15,
        no_action: 16,
    };

    #[test]
    fn test_decode_ranges() {
        assert_eq!(BOUNDS.decode(0), Action::Shift(0));
        assert_eq!(BOUNDS.decode(3), Action::Shift(3));
        assert_eq!(BOUNDS.decode(4), Action::ShiftReduce(0));
        assert_eq!(BOUNDS.decode(8), Action::ShiftReduce(4));
        assert_eq!(BOUNDS.decode(9), Action::Reduce(0));
        assert_eq!(BOUNDS.decode(13), Action::Reduce(4));
        assert_eq!(BOUNDS.decode(14), Action::Error);
        assert_eq!(BOUNDS.decode(15), Action::Accept);
        assert_eq!(BOUNDS.decode(16), Action::Error);
    }

    #[test]
    fn test_reduce_state_round_trips_to_rule() {
        let state = BOUNDS.reduce_state(3);
        assert_eq!(state, 12);
        assert_eq!(BOUNDS.pending_rule(state), Some(3));
        assert_eq!(BOUNDS.pending_rule(2), None);
    }
}
