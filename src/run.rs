use crate::ledger::process::process;
use crate::{error_handler, input, output};

use std::sync::mpsc;

/// Run a full session: parse operations from `input_stream`, apply them to
/// the ledger, report rejected rows and operations, and write the final
/// account summaries to `output_stream`.
pub fn run(input_stream: impl std::io::Read + Send + 'static, output_stream: impl std::io::Write) {
    let (operations, input_errors) = input::parse(input_stream);

    let (accounts_tx, accounts) = mpsc::channel();
    let transaction_errors = process(operations, accounts_tx);

    let reporters = error_handler::report(input_errors, transaction_errors);

    output::write(output_stream, accounts).expect("failed to write the session summary");

    for reporter in reporters {
        reporter.join().expect("an error reporter panicked");
    }
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    // A whole session, end to end: bad rows and rejected operations are
    // dropped, accepted operations shape the final balances.
    fn test_run() {
        let data = r#"account,holder,type,amount
1,Ada Lovelace,deposit,100.0
2,Grace Hopper,deposit,1000
a row that cannot be parsed
1,Ada Lovelace,withdrawal,30
2,Grace Hopper,withdrawal,600
2,Grace Hopper,withdrawal,500"#;
        let input = std::io::Cursor::new(data);
        let mut output = Vec::new();

        run(input, &mut output);

        let want = r#"account,branch,holder,balance,withdrawals
1,0001,Ada Lovelace,70.0,1
2,0001,Grace Hopper,500,1
"#;
        assert_eq!(want.to_string(), String::from_utf8(output).unwrap());
    }
}
