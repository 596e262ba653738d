mod base;
mod checking;

pub use base::BaseAccount;
pub use checking::CheckingAccount;

use super::customer::Holder;
use super::history::History;
use super::{AccountNumber, Amount};

use std::fmt;
use thiserror::Error;

/// Note: I chose to keep errors simple here.
/// All three kinds are recoverable: the caller gets the reason back and can
/// retry with corrected input. Nothing in the ledger panics over a rejected
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransactionError {
    /// The amount is not strictly positive.
    #[error("the amount is invalid: it must be strictly positive")]
    InvalidAmount,

    /// Funds in the account are insufficient for a withdrawal.
    #[error("the funds in the account are insufficient for this withdrawal")]
    InsufficientFunds,

    /// A checking-account withdrawal limit was hit.
    #[error("withdrawal rejected: {0}")]
    LimitExceeded(LimitBreach),
}

/// Which checking-account limit rejected the withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitBreach {
    /// The amount exceeds the per-withdrawal ceiling.
    Ceiling,

    /// The account already used up its maximum number of withdrawals.
    Count,
}

impl fmt::Display for LimitBreach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ceiling => write!(f, "the amount exceeds the withdrawal ceiling"),
            Self::Count => write!(f, "the maximum number of withdrawals was reached"),
        }
    }
}

/// The behavior every account variant offers.
///
/// [`BaseAccount`] is the plain implementation; variants like
/// [`CheckingAccount`] compose one and override only the policy they care
/// about. Mutation goes exclusively through `deposit` and `withdraw`: on
/// success the balance changes and a history entry is appended, on failure
/// nothing is touched.
pub trait Account {
    fn deposit(&mut self, amount: Amount) -> Result<(), TransactionError>;
    fn withdraw(&mut self, amount: Amount) -> Result<(), TransactionError>;

    /// Current balance: the sum of accepted deposits minus accepted
    /// withdrawals. Never negative.
    fn balance(&self) -> Amount;

    fn number(&self) -> AccountNumber;
    fn branch(&self) -> &str;

    /// The customer this account was opened for. Set at creation, immutable.
    fn holder(&self) -> &Holder;

    fn history(&self) -> &History;
}
