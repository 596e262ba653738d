use super::account::{Account, CheckingAccount, TransactionError};
use super::customer::Holder;
use super::transaction::Transaction;
use super::AccountNumber;

use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender};

/// One parsed session operation: which account it targets, who that account
/// belongs to, and the transaction to apply.
#[derive(Debug, PartialEq)]
pub struct Operation {
    pub account: AccountNumber,
    pub holder: Holder,
    pub transaction: Transaction,
}

/// Apply a stream of operations to a session of checking accounts.
///
/// Accounts are opened with the default policy the first time their number
/// shows up, bound to the holder named on that first record. Rejected
/// operations are streamed out as (account number, error) pairs; once every
/// operation has been processed, the final accounts are sent to
/// `accounts_tx`.
pub fn process(
    operations: Receiver<Operation>,
    accounts_tx: Sender<CheckingAccount>,
) -> Receiver<(AccountNumber, TransactionError)> {
    let (tx, rx) = mpsc::channel();

    // We apply all operations in a new thread, to be able to stream errors as
    // we go.
    std::thread::spawn(move || {
        let mut accounts: HashMap<AccountNumber, CheckingAccount> = HashMap::new();

        for operation in operations {
            let Operation {
                account: number,
                holder,
                transaction,
            } = operation;

            let account = accounts
                .entry(number)
                .or_insert_with(move || CheckingAccount::open(holder, number));

            if let Err(err) = transaction.apply(account) {
                tx.send((number, err)).unwrap(); // Would only fail if the rx is disconnected, which should not happen here.
            };
        }

        // We can only start sending account information once we have
        // processed all the operations.
        for (_, account) in accounts {
            accounts_tx.send(account).unwrap(); // Would only fail if the rx is disconnected, which should not happen here.
        }
    });

    rx
}
