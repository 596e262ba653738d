use super::account::{Account, TransactionError};
use super::{Amount, DECIMAL_PRECISION};

use serde::Serialize;

/// The two things a customer can ask for: putting money in, taking money out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Deposit,
    Withdrawal,
}

/// A single requested operation against one account.
///
/// A transaction is an immutable value: it is created, applied once, and
/// discarded. Only its effect survives, as a history entry on the account
/// that accepted it. Validation is entirely the account's job; the
/// transaction just dispatches on its kind and hands back the typed result.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    kind: Kind,
    amount: Amount,
}

impl Transaction {
    // The new() function ensures we can only create amounts with a decimal
    // precision of 2.
    pub fn new(kind: Kind, amount: Amount) -> Self {
        Self {
            kind,
            amount: amount.round_dp(DECIMAL_PRECISION),
        }
    }

    pub fn deposit(amount: Amount) -> Self {
        Self::new(Kind::Deposit, amount)
    }

    pub fn withdrawal(amount: Amount) -> Self {
        Self::new(Kind::Withdrawal, amount)
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Apply this transaction to an account.
    ///
    /// The account validates the amount against its own rules and, on
    /// success, appends the matching entry to its history.
    pub fn apply(&self, account: &mut dyn Account) -> Result<(), TransactionError> {
        match self.kind {
            Kind::Deposit => account.deposit(self.amount),
            Kind::Withdrawal => account.withdraw(self.amount),
        }
    }
}

#[test]
// Decimal precision is 2 places. We should be unable to have more precise amounts.
fn test_transaction_decimal_precision() {
    use rust_decimal_macros::dec;

    for (raw_amount, want_amount) in vec![
        (dec!(1.0), dec!(1.0)),
        (dec!(0.999), dec!(1.0)),
        (dec!(1.001), dec!(1.0)),
        (dec!(1.23), dec!(1.23)),
        (dec!(1.235), dec!(1.24)),
    ] {
        let tx = Transaction::withdrawal(raw_amount);
        assert_eq!(want_amount, tx.amount());
    }
}

#[cfg(test)]
mod apply_tests {
    use super::Transaction;
    use crate::ledger::account::{Account, BaseAccount, TransactionError};
    use crate::ledger::customer::Holder;
    use crate::ledger::transaction::Kind;

    use rust_decimal_macros::dec;

    fn some_account() -> BaseAccount {
        BaseAccount::open(Holder::new("Ada Lovelace", "00000000000"), 42)
    }

    #[test]
    fn test_apply_deposit_mutates_and_records() {
        let mut acc = some_account();

        let got = Transaction::deposit(dec!(70)).apply(&mut acc);
        assert_eq!(Ok(()), got);
        assert_eq!(dec!(70), acc.balance());
        assert_eq!(1, acc.history().entries().len());
        assert_eq!(Kind::Deposit, acc.history().entries()[0].kind);
    }

    #[test]
    fn test_apply_surfaces_the_account_error() {
        let mut acc = some_account();

        let got = Transaction::withdrawal(dec!(10)).apply(&mut acc);
        assert_eq!(Err(TransactionError::InsufficientFunds), got);
        assert_eq!(dec!(0), acc.balance());
        assert!(acc.history().entries().is_empty());
    }
}
