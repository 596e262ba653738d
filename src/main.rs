use bank_ledger::run::run;

use std::fs::File;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "operations.csv".to_string());
    let input = File::open(path).expect("cannot open the operations file");

    run(input, std::io::stdout());
}
