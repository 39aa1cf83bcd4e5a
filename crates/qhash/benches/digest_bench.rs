//! Benchmarks for the digest pipeline
//!
//! Run with: cargo bench -p qhash

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qhash::{QuantumHasher, build_circuit, encode};
use qhash_sim::simulate;

/// Benchmark circuit construction alone
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_circuit");

    for len in &[1usize, 2, 3] {
        let input = vec![0xa5u8; *len];
        let encoded = encode(&input).unwrap();
        group.bench_with_input(BenchmarkId::new("bytes", len), &encoded, |b, encoded| {
            b.iter(|| build_circuit(black_box(encoded)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark simulation by register width
fn bench_simulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");
    group.sample_size(10);

    for len in &[1usize, 2, 3] {
        let input = vec![0x3cu8; *len];
        let circuit = build_circuit(&encode(&input).unwrap()).unwrap();
        group.bench_with_input(
            BenchmarkId::new("qubits", circuit.num_qubits()),
            &circuit,
            |b, circuit| {
                b.iter(|| simulate(black_box(circuit)).unwrap());
            },
        );
    }

    group.finish();
}

/// Benchmark full digests
fn bench_digest(c: &mut Criterion) {
    let mut group = c.benchmark_group("digest");
    group.sample_size(10);
    let hasher = QuantumHasher::default();

    group.bench_function("two_bytes", |b| {
        b.iter(|| hasher.digest(black_box(b"qh")).unwrap());
    });

    group.bench_function("long_input", |b| {
        let input = vec![0x42u8; 4096];
        b.iter(|| hasher.digest(black_box(&input)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_build, bench_simulate, bench_digest);
criterion_main!(benches);
