// Hashing & signing benchmarks for the Aurum client.
//
// Covers the canonical instruction digest, aggregate transaction hashing
// at various batch sizes, batch signing, and derived-identifier
// computation.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use aurum_protocol::identity::Ed25519Signer;
use aurum_protocol::transaction::{Argument, ClientTransaction, InstanceId, Instruction};

fn sample_instruction(n: u64) -> Instruction {
    Instruction::spawn(
        InstanceId::from_bytes([n as u8; 32]),
        "coin",
        vec![
            Argument::new("type", b"aur".to_vec()),
            Argument::new("amount", n.to_le_bytes().to_vec()),
        ],
    )
    .with_signer_counters(vec![n])
}

fn bench_instruction_hash(c: &mut Criterion) {
    let instr = sample_instruction(1);

    c.bench_function("tx/instruction_hash", |b| {
        b.iter(|| instr.hash());
    });
}

fn bench_transaction_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("tx/transaction_hash");

    for size in [1, 10, 100, 1000] {
        let tx = ClientTransaction::new((0..size).map(sample_instruction).collect());

        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &tx, |b, tx| {
            b.iter(|| tx.hash());
        });
    }

    group.finish();
}

fn bench_sign_transaction(c: &mut Criterion) {
    let signer = Ed25519Signer::from_seed(&[7u8; 32]);
    let tx = ClientTransaction::new((0..10).map(sample_instruction).collect());

    c.bench_function("tx/sign_10_instructions", |b| {
        b.iter(|| tx.sign_with(&[&signer]));
    });
}

fn bench_derive_id(c: &mut Criterion) {
    let signer = Ed25519Signer::from_seed(&[7u8; 32]);
    let tx = ClientTransaction::from(sample_instruction(1));
    let signed = tx.sign_with(&[&signer]);

    c.bench_function("tx/derive_id", |b| {
        b.iter(|| signed.instructions[0].derive_id(""));
    });
}

criterion_group!(
    benches,
    bench_instruction_hash,
    bench_transaction_hash,
    bench_sign_transaction,
    bench_derive_id,
);
criterion_main!(benches);
