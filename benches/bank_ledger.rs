use bank_ledger::run::run;
use criterion::{criterion_group, criterion_main, Criterion};

pub fn bench_session_7000_lines(c: &mut Criterion) {
    c.bench_function("session_large_file_7_000", |b| {
        let data = format!(
            "account,holder,type,amount\n{}",
            r#"1,Ada Lovelace,deposit,100.0
        2,Grace Hopper,deposit,50
        badly formated record
        1,Ada Lovelace,withdrawal,20.5
        2,Grace Hopper,withdrawal,600
        3,Annie Easley,deposit,7
        another bad record"#
                .repeat(1_000)
        );
        let cursor = std::io::Cursor::new(data);

        b.iter(move || run(cursor.clone(), std::io::sink()))
    });
}

pub fn bench_session_140000_lines(c: &mut Criterion) {
    c.bench_function("session_large_file_140_000", |b| {
        let data = format!(
            "account,holder,type,amount\n{}",
            r#"1,Ada Lovelace,deposit,100.0
        2,Grace Hopper,deposit,50
        badly formated record
        1,Ada Lovelace,withdrawal,20.5
        2,Grace Hopper,withdrawal,600
        3,Annie Easley,deposit,7
        another bad record"#
                .repeat(20_000)
        );
        let cursor = std::io::Cursor::new(data);

        b.iter(move || run(cursor.clone(), std::io::sink()))
    });
}

criterion_group!(
    benches,
    bench_session_7000_lines,
    bench_session_140000_lines,
);
criterion_main!(benches);
