use crate::ledger::customer::Holder;
use crate::ledger::process::Operation;
use crate::ledger::transaction::{Kind, Transaction};
use crate::ledger::{AccountNumber, Amount};

use serde::Deserialize;
use std::sync::mpsc::{self, Receiver, Sender};
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum Error {
    /// CSV is malformed.
    #[error("malformed CSV: {0}")]
    Csv(String),

    /// Data format is incorrect.
    #[error("invalid record: {0}")]
    Format(String),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<<OperationRecord as TryInto<Operation>>::Error> for Error {
    fn from(err: <OperationRecord as TryInto<Operation>>::Error) -> Self {
        Self::Format(err.to_string())
    }
}

// When parsing, I'm making the assumption that we don't want to completely
// abort on errors: a session file is mostly independent rows, so bad rows
// are streamed out on the error channel and good rows keep flowing.
pub fn parse(
    input_stream: (impl std::io::Read + Send + 'static),
) -> (Receiver<Operation>, Receiver<Error>) {
    let (operation_tx, operation_rx): (Sender<Operation>, Receiver<Operation>) = mpsc::channel();
    let (error_tx, error_rx): (Sender<Error>, Receiver<Error>) = mpsc::channel();

    let buffered = std::io::BufReader::new(input_stream);
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(buffered);

    // Moving to a new thread so we can start processing the operations immediately.
    std::thread::spawn(move || {
        for record in reader.deserialize::<OperationRecord>() {
            match convert(record) {
                Ok(operation) => operation_tx.send(operation).unwrap(), // Would only fail if the rx is disconnected, which should not happen here.
                Err(err) => error_tx.send(err).unwrap(), // Would only fail if the rx is disconnected, which should not happen here.
            };
        }
    });

    (operation_rx, error_rx)
}

// Convert from a csv deserialise result into an operation result.
fn convert(record: Result<OperationRecord, csv::Error>) -> Result<Operation, Error> {
    Ok(record?.try_into()?)
}

// I have an OperationRecord type because I can't directly deserialise into my
// "domain" type, i.e. Operation.
// See https://github.com/BurntSushi/rust-csv/issues/211.
//
// This gives me way more flexibility in crafting a clean Operation type,
// that makes the rest of the code easier to reason about. Besides, the
// internal Operation type makes no assumption on how the operations are
// actually formatted, so both domain logic and parsing are easier to maintain.
#[derive(Debug, Deserialize)]
pub struct OperationRecord {
    account: AccountNumber,

    holder: String,

    #[serde(rename = "type")]
    op_type: OperationRecordType,

    amount: Amount,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationRecordType {
    Deposit,
    Withdrawal,
}

impl TryFrom<OperationRecord> for Operation {
    type Error = &'static str;

    fn try_from(record: OperationRecord) -> Result<Self, Self::Error> {
        if record.holder.is_empty() {
            return Err("missing holder name");
        }

        let kind = match record.op_type {
            OperationRecordType::Deposit => Kind::Deposit,
            OperationRecordType::Withdrawal => Kind::Withdrawal,
        };

        Ok(Self {
            account: record.account,
            // Session records identify holders by name only; there is no
            // national id column.
            holder: Holder::new(record.holder, ""),
            transaction: Transaction::new(kind, record.amount),
        })
    }
}

#[test]
// Parsing well-formed data should return a stream of Operation.
fn test_parse_ok() {
    let data = r#"account,holder,type,amount
1,Ada Lovelace,deposit,100.0
1,Ada Lovelace,withdrawal,40.5
2,Grace Hopper,deposit,7"#;
    let reader = std::io::Cursor::new(data);
    let (operations, errors) = parse(reader);

    assert_eq!(3, operations.iter().count());
    assert_eq!(0, errors.iter().count());
}

#[test]
fn test_parse_ok_with_whitespace() {
    let data = r#"account,   holder,     type,amount
1, Ada Lovelace, deposit, 100.0
    1 ,  Ada Lovelace  ,   withdrawal ,  40.5
2,Grace Hopper,            deposit,7"#;
    let reader = std::io::Cursor::new(data);
    let (operations, errors) = parse(reader);

    assert_eq!(3, operations.iter().count());
    assert_eq!(0, errors.iter().count());
}

#[test]
// Parsing incorrectly formatted data should stream an Err per bad row.
fn test_parse_invalid_format() {
    for (data, err_contains) in vec![
        (
            r#"account,holder,type,amount
1,Ada Lovelace,some_unknown_op_type,1.0"#,
            "unknown variant `some_unknown_op_type`",
        ),
        (
            r#"account,holder,type,amount
,Ada Lovelace,deposit,1.0"#, // missing account
            "cannot parse integer from empty string",
        ),
        (
            r#"account,holder,type,amount
1,Ada Lovelace,deposit"#,
            "found record with 3 fields, but the previous record has 4 fields",
        ),
        (
            r#"account,holder,type,amount
1,Ada Lovelace,deposit,1.0,,,"#,
            "found record with 7 fields, but the previous record has 4 fields",
        ),
    ] {
        let reader = std::io::Cursor::new(data);
        let (operations, errors) = parse(reader);

        assert_eq!(0, operations.iter().count());

        let errs: Vec<Error> = errors.iter().collect();
        assert_eq!(1, errs.len());

        match &errs[0] {
            Error::Csv(msg) => assert!(msg.contains(err_contains), "{:?}", msg),
            _ => panic!("unexpected error"),
        }
    }
}

#[test]
// Records without a holder name should fail to convert into an Operation.
fn test_parse_invalid_data() {
    let data = r#"account,holder,type,amount
1,,deposit,1.0"#;
    let reader = std::io::Cursor::new(data);
    let (operations, errors) = parse(reader);

    assert_eq!(0, operations.iter().count());

    let errs: Vec<Error> = errors.iter().collect();
    assert_eq!(vec![Error::Format("missing holder name".to_string())], errs);
}

#[test]
// Bad rows don't stop the remaining rows from being parsed.
fn test_parse_keeps_going_after_errors() {
    let data = r#"account,holder,type,amount
1,Ada Lovelace,deposit,100.0
not a record at all
2,Grace Hopper,deposit,7"#;
    let reader = std::io::Cursor::new(data);
    let (operations, errors) = parse(reader);

    assert_eq!(2, operations.iter().count());
    assert_eq!(1, errors.iter().count());
}

#[test]
// When the records are well formed, they should be correctly converted into Operation.
fn test_operation_record_into_operation_well_formed() {
    use rust_decimal_macros::dec;

    let test_cases: Vec<(OperationRecord, Operation)> = vec![
        (
            OperationRecord {
                account: 1,
                holder: "Ada Lovelace".to_string(),
                op_type: OperationRecordType::Deposit,
                amount: dec!(1.2),
            },
            Operation {
                account: 1,
                holder: Holder::new("Ada Lovelace", ""),
                transaction: Transaction::deposit(dec!(1.2)),
            },
        ),
        (
            OperationRecord {
                account: 2,
                holder: "Grace Hopper".to_string(),
                op_type: OperationRecordType::Withdrawal,
                amount: dec!(2.999),
            },
            Operation {
                account: 2,
                holder: Holder::new("Grace Hopper", ""),
                // Amounts are normalized to 2 decimal places on construction.
                transaction: Transaction::withdrawal(dec!(3.00)),
            },
        ),
    ];

    for (record, want) in test_cases {
        assert_eq!(want, record.try_into().unwrap());
    }
}
