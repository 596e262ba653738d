use super::{Account, BaseAccount, LimitBreach, TransactionError};
use crate::ledger::clock::Clock;
use crate::ledger::customer::Holder;
use crate::ledger::history::History;
use crate::ledger::transaction::Kind;
use crate::ledger::{
    AccountNumber, Amount, DEFAULT_MAX_WITHDRAWALS, DEFAULT_WITHDRAWAL_CEILING,
};

use std::fmt;

/// A checking account: a [`BaseAccount`] plus a withdrawal policy.
///
/// Two limits apply before the normal withdrawal checks: no single
/// withdrawal may exceed the ceiling, and the account may only ever accept
/// `max_withdrawals` withdrawals in total. The count is taken from the
/// history, so it survives anything short of dropping the account.
pub struct CheckingAccount {
    base: BaseAccount,
    ceiling: Amount,
    max_withdrawals: usize,
}

impl CheckingAccount {
    /// Open a checking account with the default policy (ceiling 500, at
    /// most 3 withdrawals).
    pub fn open(holder: Holder, number: AccountNumber) -> Self {
        Self::with_policy(
            BaseAccount::open(holder, number),
            DEFAULT_WITHDRAWAL_CEILING,
            DEFAULT_MAX_WITHDRAWALS,
        )
    }

    /// Like [`Self::open`], with an injected clock for history timestamps.
    pub fn open_with_clock(
        holder: Holder,
        number: AccountNumber,
        clock: Box<dyn Clock + Send>,
    ) -> Self {
        Self::with_policy(
            BaseAccount::open_with_clock(holder, number, clock),
            DEFAULT_WITHDRAWAL_CEILING,
            DEFAULT_MAX_WITHDRAWALS,
        )
    }

    /// Wrap an account with an explicit withdrawal policy.
    pub fn with_policy(base: BaseAccount, ceiling: Amount, max_withdrawals: usize) -> Self {
        Self {
            base,
            ceiling,
            max_withdrawals,
        }
    }

    /// The largest amount a single withdrawal may move.
    pub fn ceiling(&self) -> Amount {
        self.ceiling
    }

    /// How many withdrawals this account accepts over its lifetime.
    pub fn max_withdrawals(&self) -> usize {
        self.max_withdrawals
    }
}

impl Account for CheckingAccount {
    fn deposit(&mut self, amount: Amount) -> Result<(), TransactionError> {
        self.base.deposit(amount)
    }

    fn withdraw(&mut self, amount: Amount) -> Result<(), TransactionError> {
        // Policy checks run in a fixed order and short-circuit: ceiling
        // first, count second, then the base checks (funds, positivity).
        if amount > self.ceiling {
            return Err(TransactionError::LimitExceeded(LimitBreach::Ceiling));
        }
        if self.base.history().count_of(Kind::Withdrawal) >= self.max_withdrawals {
            return Err(TransactionError::LimitExceeded(LimitBreach::Count));
        }

        self.base.withdraw(amount)
    }

    fn balance(&self) -> Amount {
        self.base.balance()
    }

    fn number(&self) -> AccountNumber {
        self.base.number()
    }

    fn branch(&self) -> &str {
        self.base.branch()
    }

    fn holder(&self) -> &Holder {
        self.base.holder()
    }

    fn history(&self) -> &History {
        self.base.history()
    }
}

/// Human-readable summary, for display only.
impl fmt::Display for CheckingAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Branch:\t\t{}\nAccount:\t{}\nHolder:\t\t{}",
            self.branch(),
            self.number(),
            self.holder().name(),
        )
    }
}


#[cfg(test)]
mod display_tests {
    use super::CheckingAccount;
    use crate::ledger::customer::Holder;

    #[test]
    fn test_summary() {
        let acc = CheckingAccount::open(Holder::new("Ada Lovelace", "00000000000"), 42);

        let want = "Branch:\t\t0001\nAccount:\t42\nHolder:\t\tAda Lovelace";
        assert_eq!(want.to_string(), acc.to_string());
    }
}
