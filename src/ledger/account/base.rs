use super::{Account, TransactionError};
use crate::ledger::clock::Clock;
use crate::ledger::customer::Holder;
use crate::ledger::history::History;
use crate::ledger::transaction::Kind;
use crate::ledger::{AccountNumber, Amount, DEFAULT_BRANCH};

/// The plain account: a balance, identifying numbers, the holder it was
/// opened for, and the history of everything it accepted.
///
/// The balance is only reachable through `deposit` and `withdraw`, so it is
/// always exactly the sum of accepted deposits minus accepted withdrawals,
/// and a withdrawal can never push it below zero.
pub struct BaseAccount {
    number: AccountNumber,
    holder: Holder,
    balance: Amount,
    history: History,
}

impl BaseAccount {
    /// Open an account for `holder`, with a zero balance and an empty
    /// history. The (holder, number) pair never changes afterwards.
    pub fn open(holder: Holder, number: AccountNumber) -> Self {
        Self {
            number,
            holder,
            balance: Amount::ZERO,
            history: History::new(),
        }
    }

    /// Like [`Self::open`], but history entries are timestamped with the
    /// given clock instead of the system clock.
    pub fn open_with_clock(
        holder: Holder,
        number: AccountNumber,
        clock: Box<dyn Clock + Send>,
    ) -> Self {
        Self {
            number,
            holder,
            balance: Amount::ZERO,
            history: History::with_clock(clock),
        }
    }
}

impl Account for BaseAccount {
    fn deposit(&mut self, amount: Amount) -> Result<(), TransactionError> {
        if amount <= Amount::ZERO {
            return Err(TransactionError::InvalidAmount);
        }

        self.balance += amount;
        self.history.record(Kind::Deposit, amount);

        Ok(())
    }

    fn withdraw(&mut self, amount: Amount) -> Result<(), TransactionError> {
        // The exceeds-balance check comes first, the positivity check second:
        // withdrawing 0 from an empty account is an invalid amount, not
        // insufficient funds.
        if amount > self.balance {
            return Err(TransactionError::InsufficientFunds);
        }
        if amount <= Amount::ZERO {
            return Err(TransactionError::InvalidAmount);
        }

        self.balance -= amount;
        self.history.record(Kind::Withdrawal, amount);

        Ok(())
    }

    fn balance(&self) -> Amount {
        self.balance
    }

    fn number(&self) -> AccountNumber {
        self.number
    }

    fn branch(&self) -> &str {
        DEFAULT_BRANCH
    }

    fn holder(&self) -> &Holder {
        &self.holder
    }

    fn history(&self) -> &History {
        &self.history
    }
}

#[cfg(test)]
mod deposit_tests {
    use super::{Account, BaseAccount, TransactionError};
    use crate::ledger::customer::Holder;

    use rust_decimal_macros::dec;

    fn some_account() -> BaseAccount {
        BaseAccount::open(Holder::new("Ada Lovelace", "00000000000"), 1)
    }

    #[test]
    fn test_deposit_ok() {
        let mut acc = some_account();

        let got = acc.deposit(dec!(3.0));
        assert_eq!(Ok(()), got);
        assert_eq!(dec!(3.0), acc.balance());
        assert_eq!(1, acc.history().entries().len());
    }

    #[test]
    fn test_deposit_non_positive_amount() {
        for amount in vec![dec!(0), dec!(-5), dec!(-0.01)] {
            let mut acc = some_account();

            let got = acc.deposit(amount);
            assert_eq!(Err(TransactionError::InvalidAmount), got);
            assert_eq!(dec!(0), acc.balance());
            assert!(acc.history().entries().is_empty());
        }
    }
}


#[cfg(test)]
mod open_tests {
    use super::{Account, BaseAccount, DEFAULT_BRANCH};
    use crate::ledger::clock::test_clock::FixedClock;
    use crate::ledger::customer::Holder;

    use rust_decimal_macros::dec;

    #[test]
    fn test_open_starts_empty() {
        let acc = BaseAccount::open(Holder::new("Grace Hopper", "11111111111"), 7);

        assert_eq!(dec!(0), acc.balance());
        assert_eq!(7, acc.number());
        assert_eq!(DEFAULT_BRANCH, acc.branch());
        assert_eq!("Grace Hopper", acc.holder().name());
        assert!(acc.history().entries().is_empty());
    }

    #[test]
    fn test_open_with_clock_timestamps_history() {
        let clock = FixedClock::at_noon();
        let want = clock.0;

        let mut acc = BaseAccount::open_with_clock(
            Holder::new("Grace Hopper", "11111111111"),
            7,
            Box::new(clock),
        );
        acc.deposit(dec!(5)).expect("deposit should succeed");

        assert_eq!(want, acc.history().entries()[0].recorded_at);
    }
}
