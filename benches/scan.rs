// SPDX short identifier: Unlicense

use criterion::{
    black_box,
    criterion_group,
    criterion_main,
    Criterion,
    BenchmarkId
};
use std::time::Duration;
use cryptonote_wallet::{
    common::*,
    random::OsScalarSource,
    scan::{
        self,
        DerivationSecret,
        OutputRecord
    }
};

fn scan_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scan");
    group.sample_size(50);
    group.measurement_time(Duration::from_secs(5));

    let view = KeyPair::generate(&OsScalarSource);
    let transaction = KeyPair::generate(&OsScalarSource);
    let derivation = DerivationSecret::from_sender(transaction.secret(), view.public());

    group.bench_with_input(BenchmarkId::new("Derive", "Shared secret"), &(),
    |b, ()| b.iter(|| {
        black_box(DerivationSecret::from_receiver(view.secret(), transaction.public()));
    }));

    for (outputs, spend_keys) in [(2, 1), (16, 1), (16, 16)] {
        let spend: Vec<PublicKey> = (0..spend_keys)
            .map(|_| *KeyPair::generate(&OsScalarSource).public())
            .collect();
        //one output in every transaction pays the first spend key
        let records: Vec<OutputRecord> = (0..outputs as u64)
            .map(|index| OutputRecord {
                amount: index,
                key: if index == 0 {
                    *derivation.output_public_key(index, &spend[0]).as_bytes()
                } else {
                    *KeyPair::generate(&OsScalarSource).public().as_bytes()
                }
            })
            .collect();

        let name = format!("{} outputs, {} spend keys", outputs, spend_keys);
        group.bench_with_input(BenchmarkId::new("Scan", name), &(records, spend),
        |b, (records, spend)| b.iter(|| {
            black_box(scan::scan(transaction.public(), records, view.secret(), spend));
        }));
    }
}

criterion_group!(scans, scan_benchmark);
criterion_main!(scans);
