use longnum::Int;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_mul(c: &mut Criterion) {
    let a = Int::from_hex(&"9E3779B97F4A7C15".repeat(32));
    let b = Int::from_hex(&"6A09E667F3BCC908".repeat(32));

    c.bench_function("karatsuba mul 2048-bit", |bench| {
        bench.iter(|| black_box(&a) * black_box(&b))
    });
}

criterion_group!(benches, bench_mul);
criterion_main!(benches);
