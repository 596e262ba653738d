use crate::ledger::account::{Account, CheckingAccount};
use crate::ledger::transaction::Kind;
use crate::ledger::{AccountNumber, Amount};

use serde::Serialize;
use std::sync::mpsc::Receiver;

#[derive(Serialize)]
struct AccountRecord {
    account: AccountNumber,

    branch: String,

    holder: String,

    balance: Amount,

    /// How many withdrawals the account has used out of its maximum.
    withdrawals: usize,
}

impl AccountRecord {
    fn new(acc: &CheckingAccount) -> Self {
        Self {
            account: acc.number(),
            branch: acc.branch().to_string(),
            holder: acc.holder().name().to_string(),
            balance: acc.balance(),
            withdrawals: acc.history().count_of(Kind::Withdrawal),
        }
    }
}

/// Writes the received accounts to the given stream, as CSV, sorted by
/// account number so the output is deterministic.
pub fn write(
    output_stream: impl std::io::Write,
    accounts: Receiver<CheckingAccount>,
) -> Result<(), csv::Error> {
    let mut accounts: Vec<CheckingAccount> = accounts.iter().collect();
    accounts.sort_unstable_by_key(|account| account.number());

    let mut writer = csv::Writer::from_writer(output_stream);

    for account in &accounts {
        writer.serialize(AccountRecord::new(account))?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod write_tests {
    use crate::ledger::account::{Account, CheckingAccount};
    use crate::ledger::customer::Holder;

    use rust_decimal_macros::dec;
    use std::sync::mpsc;

    #[test]
    fn test_write_accounts() {
        let (accounts_tx, accounts) = mpsc::channel();
        let mut output_stream = Vec::new();

        // Sent out of order on purpose: the writer sorts by account number.
        for (number, name, deposit, withdrawals) in vec![
            (3, "Grace Hopper", dec!(500.01), vec![dec!(500), dec!(0.01)]),
            (1, "Ada Lovelace", dec!(6.0), vec![]),
            (2, "Annie Easley", dec!(130), vec![dec!(5.37)]),
        ] {
            let mut account = CheckingAccount::open(Holder::new(name, ""), number);
            account.deposit(deposit).unwrap();
            for amount in withdrawals {
                account.withdraw(amount).unwrap();
            }
            accounts_tx.send(account).unwrap();
        }
        drop(accounts_tx);

        super::write(&mut output_stream, accounts).unwrap();

        let want = r#"account,branch,holder,balance,withdrawals
1,0001,Ada Lovelace,6.0,0
2,0001,Annie Easley,124.63,1
3,0001,Grace Hopper,0.00,2
"#;
        assert_eq!(want.to_string(), String::from_utf8(output_stream).unwrap(),);
    }
}
