// benches/roundtrip.rs
//! Round-trip (encrypt → decrypt) benchmarks for every cipher adapter

use cipherbench_rs::consts::DEFAULT_MESSAGE_SIZES;
use cipherbench_rs::{filler_message, CipherAdapter, CipherKind, KeyMaterial};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

fn bench_roundtrip(c: &mut Criterion) {
    let keys = KeyMaterial::fixed();
    let mut group = c.benchmark_group("roundtrip");

    for kind in CipherKind::ALL {
        let adapter = kind.adapter(&keys);

        for &size in &DEFAULT_MESSAGE_SIZES {
            let message = filler_message(size);

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::new(kind.name(), size), &message, |b, msg| {
                b.iter(|| adapter.roundtrip(black_box(msg)).unwrap());
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_roundtrip);
criterion_main!(benches);
