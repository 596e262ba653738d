use super::clock::{Clock, SystemClock};
use super::transaction::Kind;
use super::Amount;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One successfully applied transaction: what happened, for how much, when.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub kind: Kind,
    pub amount: Amount,
    pub recorded_at: DateTime<Utc>,
}

/// Append-only log of the transactions an account accepted.
///
/// The history never validates anything: accounts only record a transaction
/// after the balance mutation succeeded, so every entry in here corresponds
/// to exactly one successful mutation, in the order they were applied.
/// There is no way to remove or rewrite an entry.
pub struct History {
    entries: Vec<Entry>,
    clock: Box<dyn Clock + Send>,
}

impl History {
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// Create an empty history that timestamps entries with the given clock.
    pub fn with_clock(clock: Box<dyn Clock + Send>) -> Self {
        Self {
            entries: Vec::new(),
            clock,
        }
    }

    // Only account implementations get to append, and only after the
    // corresponding balance mutation succeeded.
    pub(super) fn record(&mut self, kind: Kind, amount: Amount) {
        self.entries.push(Entry {
            kind,
            amount,
            recorded_at: self.clock.now(),
        });
    }

    /// All recorded entries, in the order they were applied.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// How many recorded entries are of the given kind.
    pub fn count_of(&self, kind: Kind) -> usize {
        self.entries.iter().filter(|entry| entry.kind == kind).count()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::History;
    use crate::ledger::clock::test_clock::FixedClock;
    use crate::ledger::transaction::Kind;

    use rust_decimal_macros::dec;

    #[test]
    fn test_record_keeps_insertion_order() {
        let mut history = History::new();
        history.record(Kind::Deposit, dec!(100));
        history.record(Kind::Withdrawal, dec!(30));
        history.record(Kind::Deposit, dec!(5));

        let kinds: Vec<Kind> = history.entries().iter().map(|e| e.kind).collect();
        assert_eq!(vec![Kind::Deposit, Kind::Withdrawal, Kind::Deposit], kinds);
    }

    #[test]
    fn test_record_uses_the_injected_clock() {
        let clock = FixedClock::at_noon();
        let want = clock.0;

        let mut history = History::with_clock(Box::new(clock));
        history.record(Kind::Deposit, dec!(1));

        assert_eq!(want, history.entries()[0].recorded_at);
    }

    #[test]
    fn test_count_of() {
        let mut history = History::new();
        assert_eq!(0, history.count_of(Kind::Withdrawal));

        history.record(Kind::Withdrawal, dec!(10));
        history.record(Kind::Deposit, dec!(10));
        history.record(Kind::Withdrawal, dec!(10));

        assert_eq!(2, history.count_of(Kind::Withdrawal));
        assert_eq!(1, history.count_of(Kind::Deposit));
    }
}
