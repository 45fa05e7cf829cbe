//! Criterion benchmarks for text-to-binary conversion.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

/// Build a text index with `n` groups of fanout `m`.
fn synthetic_index(m: i8, n: i8) -> Vec<u8> {
    let mut text = format!("{} 0 {}\n", m, n);
    for i in 0..n as i32 {
        for j in 0..(m as i32 - 1) {
            let tp = (i + j) % 127;
            let drp = -((i * j) % 127);
            text.push_str(&format!("{} k{:02} {} ", tp, j % 100, drp));
        }
        text.push_str(&format!("{}\n", i % 127));
    }
    text.into_bytes()
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    for m in [1i8, 8, 64, 127] {
        let input = synthetic_index(m, 127);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_function(format!("fanout_{}", m), |b| {
            b.iter(|| btree_txt2bin::convert(black_box(&input)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
