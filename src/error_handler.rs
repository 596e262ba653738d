use crate::input;
use crate::ledger::account::TransactionError;
use crate::ledger::AccountNumber;

use std::sync::mpsc::Receiver;

// Rejected rows and rejected operations don't stop a session: a bad record
// only affects itself, so we report it and keep processing everything else.
//
// The report goes through `tracing` rather than stdout, so it never mixes
// with the CSV summary the session writes, and whoever runs the binary can
// filter or silence it with the usual env-filter knobs.
pub fn report(
    input_errors: Receiver<input::Error>,
    transaction_errors: Receiver<(AccountNumber, TransactionError)>,
) -> Vec<std::thread::JoinHandle<()>> {
    vec![
        std::thread::spawn(move || {
            for err in input_errors {
                tracing::warn!(%err, "discarding unreadable record");
            }
        }),
        std::thread::spawn(move || {
            for (account, err) in transaction_errors {
                tracing::warn!(account, %err, "operation rejected");
            }
        }),
    ]
}
