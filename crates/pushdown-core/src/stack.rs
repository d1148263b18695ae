//! The parse stack.

use crate::config::StackLimit;
use crate::error::DriverError;
use crate::tables::{StateId, SymbolCode};

/// One entry of the parse stack.
#[derive(Debug)]
pub struct StackEntry<V> {
    /// Automaton state after this entry was pushed.
    pub state: StateId,
    /// Symbol this entry stands for.
    pub symbol: SymbolCode,
    /// Semantic value, if any is still owned by the entry.
    pub value: Option<V>,
}

impl<V> StackEntry<V> {
    pub(crate) const fn new(state: StateId, symbol: SymbolCode, value: Option<V>) -> Self {
        Self {
            state,
            symbol,
            value,
        }
    }
}

/// Outcome of a successful push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pushed {
    InPlace,
    Grew(usize),
}

/// A refused push. The entry is handed back so its value can be disposed.
#[derive(Debug)]
pub(crate) struct Overflow<V> {
    pub entry: StackEntry<V>,
    pub capacity: usize,
}

#[derive(Debug)]
pub(crate) struct ParseStack<V> {
    entries: Vec<StackEntry<V>>,
    capacity: usize,
    growable: bool,
    peak: usize,
}

impl<V> ParseStack<V> {
    pub fn new(limit: StackLimit) -> Result<Self, DriverError> {
        let (capacity, growable) = match limit {
            StackLimit::Fixed(depth) => (depth, false),
            StackLimit::Growable { initial } => (initial, true),
        };
        let mut entries = Vec::new();
        entries
            .try_reserve_exact(capacity)
            .map_err(|_| DriverError::AllocationFailure {
                requested: capacity,
            })?;
        Ok(Self {
            entries,
            capacity,
            growable,
            peak: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    pub const fn peak(&self) -> usize {
        self.peak
    }

    pub fn reset_peak(&mut self) {
        self.peak = self.entries.len();
    }

    pub fn top(&self) -> Option<&StackEntry<V>> {
        self.entries.last()
    }

    pub fn push(&mut self, entry: StackEntry<V>) -> Result<Pushed, Overflow<V>> {
        let mut pushed = Pushed::InPlace;
        if self.entries.len() >= self.capacity {
            if !self.growable {
                return Err(Overflow {
                    entry,
                    capacity: self.capacity,
                });
            }
            let grown = self.capacity.saturating_mul(2).saturating_add(100);
            let additional = grown - self.entries.len();
            if self.entries.try_reserve_exact(additional).is_err() {
                return Err(Overflow {
                    entry,
                    capacity: self.capacity,
                });
            }
            self.capacity = grown;
            pushed = Pushed::Grew(grown);
        }
        self.entries.push(entry);
        self.peak = self.peak.max(self.entries.len());
        Ok(pushed)
    }

    pub fn pop(&mut self) -> Option<StackEntry<V>> {
        self.entries.pop()
    }

    /// The topmost `n` entries, bottom first.
    pub fn top_mut(&mut self, n: usize) -> &mut [StackEntry<V>] {
        let start = self.entries.len().saturating_sub(n);
        &mut self.entries[start..]
    }

    /// Removes the topmost `n` entries, yielding them top first.
    pub fn pop_n(&mut self, n: usize) -> impl Iterator<Item = StackEntry<V>> + '_ {
        let start = self.entries.len().saturating_sub(n);
        self.entries.drain(start..).rev()
    }

    pub fn symbols(&self) -> Vec<SymbolCode> {
        self.entries.iter().map(|entry| entry.symbol).collect()
    }
}
