//! The core ledger: customers, accounts, withdrawal policies and the
//! append-only transaction history.
//!
//! Everything in this module is synchronous and single-threaded: an account
//! is mutated by one caller at a time, and a mutation (balance update +
//! history append) is a single critical section. Anything that wants to
//! share accounts across threads must serialize access per account.

pub mod account;
pub mod clock;
pub mod customer;
pub mod history;
pub mod process;
pub mod transaction;

use rust_decimal_macros::dec;

// Using named types doesn't provide any compiler help, but it helps a lot with
// readability.
// Consider the following, when creating the session HashMap:
// (1) accounts: HashMap<u32, CheckingAccount>
// (2) accounts: HashMap<AccountNumber, CheckingAccount>
// Implementation (1) would most likely need comments, and could be confusing.
// Implementation (2) is self-explanatory.
// Besides, maintenance is easier: changing account numbers e.g. from u32 to
// u64 is trivial.
pub type AccountNumber = u32;

// I decided to use a decimal library instead of the built-in f32 type, to be
// safer when dealing with money, and making the decimal precision easier to
// deal with.
pub type Amount = rust_decimal::Decimal;
const DECIMAL_PRECISION: u32 = 2;

/// Branch code shared by every account; the ledger models a single branch.
pub const DEFAULT_BRANCH: &str = "0001";

/// Default per-withdrawal ceiling of a checking account.
pub const DEFAULT_WITHDRAWAL_CEILING: Amount = dec!(500);

/// Default maximum number of withdrawals on a checking account.
///
/// The cap applies over the whole life of the account: nothing ever resets
/// the counter, there is no daily boundary.
pub const DEFAULT_MAX_WITHDRAWALS: usize = 3;
