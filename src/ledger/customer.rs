use super::account::{Account, TransactionError};
use super::transaction::Transaction;
use super::AccountNumber;

use chrono::NaiveDate;
use std::fmt;

/// The identifying snapshot of the customer an account was opened for.
///
/// Accounts keep this owned copy instead of a reference back into the
/// [`Customer`]: the customer owns its accounts, so a back-reference would
/// create a cycle. The snapshot is taken at open time and never changes,
/// which preserves the one-owner-forever rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holder {
    name: String,
    national_id: String,
}

impl Holder {
    pub fn new(name: impl Into<String>, national_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            national_id: national_id.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn national_id(&self) -> &str {
        &self.national_id
    }
}

/// A customer: an address and the accounts opened in their name.
///
/// Uniqueness of account numbers is the caller's responsibility; opening
/// two accounts with the same number is not rejected here.
pub struct Customer {
    address: String,
    accounts: Vec<Box<dyn Account>>,
}

impl Customer {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            accounts: Vec::new(),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Add an account to this customer's collection.
    pub fn open_account(&mut self, account: Box<dyn Account>) {
        self.accounts.push(account);
    }

    pub fn accounts(&self) -> &[Box<dyn Account>] {
        &self.accounts
    }

    /// The first owned account with the given number, if any.
    pub fn account_mut(&mut self, number: AccountNumber) -> Option<&mut dyn Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.number() == number)
            .map(|account| &mut **account as &mut dyn Account)
    }

    /// Submit a transaction against an account.
    ///
    /// Known gap, kept on purpose: nothing checks that `account` actually
    /// belongs to this customer. Any transaction can be submitted against
    /// any account. Callers that care about ownership have to enforce it
    /// themselves.
    pub fn submit(
        &self,
        account: &mut dyn Account,
        transaction: &Transaction,
    ) -> Result<(), TransactionError> {
        transaction.apply(account)
    }
}

/// A customer who is a physical person, with the extra identity fields.
///
/// Composes a [`Customer`] rather than subclassing it; the account and
/// transaction operations are reached through [`Self::customer`] /
/// [`Self::customer_mut`].
pub struct PhysicalPerson {
    customer: Customer,
    name: String,
    birth_date: NaiveDate,
    national_id: String,
}

impl PhysicalPerson {
    pub fn new(
        name: impl Into<String>,
        birth_date: NaiveDate,
        national_id: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            customer: Customer::new(address),
            name: name.into(),
            birth_date,
            national_id: national_id.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn national_id(&self) -> &str {
        &self.national_id
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn customer_mut(&mut self) -> &mut Customer {
        &mut self.customer
    }

    /// The snapshot new accounts get bound to.
    pub fn holder(&self) -> Holder {
        Holder::new(self.name.clone(), self.national_id.clone())
    }
}

impl fmt::Display for PhysicalPerson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, ID: {}", self.name, self.national_id)
    }
}
