//! The interface between the driver and a concrete grammar.

use crate::stack::StackEntry;
use crate::tables::{ParseTables, RuleId, SymbolCode};

/// A grammar: compiled tables plus the code run on reductions and errors.
///
/// `Value` is the semantic value carried by stack entries. The driver owns
/// every value it is given and hands each one back exactly once, either to
/// [`Grammar::reduce`] (through [`Rhs::take`]), to the caller on accept, or
/// to [`Grammar::dispose`].
pub trait Grammar {
    type Value;
    /// Caller state threaded through every callback.
    type Context;

    fn tables(&self) -> &'static ParseTables;

    /// Runs the semantic action of `rule` and returns the value of its
    /// left-hand side. Values left in `rhs` are disposed afterwards.
    fn reduce(
        &self,
        rule: RuleId,
        rhs: &mut Rhs<'_, Self::Value>,
        ctx: &mut Self::Context,
    ) -> Option<Self::Value>;

    /// Called when a syntax error is reported on `symbol`.
    fn syntax_error(
        &self,
        symbol: SymbolCode,
        value: Option<&Self::Value>,
        ctx: &mut Self::Context,
    );

    /// Called after the stack overflowed and was unwound.
    fn stack_overflow(&self, _ctx: &mut Self::Context) {}

    /// Called after error recovery gave up and the stack was unwound.
    fn parse_failed(&self, _ctx: &mut Self::Context) {}

    /// Called when the start symbol is recognized.
    fn parse_accepted(&self, _ctx: &mut Self::Context) {}

    /// Releases a value that no reduction consumed.
    fn dispose(&self, _symbol: SymbolCode, value: Self::Value) {
        drop(value);
    }
}

/// The right-hand side of a rule being reduced, leftmost symbol first.
#[derive(Debug)]
pub struct Rhs<'a, V> {
    entries: &'a mut [StackEntry<V>],
}

impl<'a, V> Rhs<'a, V> {
    pub(crate) fn new(entries: &'a mut [StackEntry<V>]) -> Self {
        Self { entries }
    }

    /// Number of right-hand side symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Symbol at `index`.
    #[must_use]
    pub fn symbol(&self, index: usize) -> Option<SymbolCode> {
        self.entries.get(index).map(|entry| entry.symbol)
    }

    /// Borrows the value at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&V> {
        self.entries.get(index).and_then(|entry| entry.value.as_ref())
    }

    /// Takes ownership of the value at `index`.
    pub fn take(&mut self, index: usize) -> Option<V> {
        self.entries.get_mut(index).and_then(|entry| entry.value.take())
    }

    /// Takes every remaining value with its symbol, leftmost first.
    pub fn take_all(&mut self) -> Vec<(SymbolCode, Option<V>)> {
        self.entries
            .iter_mut()
            .map(|entry| (entry.symbol, entry.value.take()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rhs_take_leaves_none() {
        let mut entries = vec![
            StackEntry::new(1, 5, Some("a")),
            StackEntry::new(2, 6, Some("b")),
        ];
        let mut rhs = Rhs::new(&mut entries);
        assert_eq!(rhs.len(), 2);
        assert_eq!(rhs.symbol(1), Some(6));
        assert_eq!(rhs.take(1), Some("b"));
        assert_eq!(rhs.take(1), None);
        assert_eq!(rhs.get(0), Some(&"a"));
        assert_eq!(rhs.take_all(), vec![(5, Some("a")), (6, None)]);
    }
}
