//! Pack/unpack throughput

use bit_codec::{pack, unpack};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_pack(c: &mut Criterion) {
    let values = [0u16, 999, 500, 42];
    c.bench_function("pack_record", |b| b.iter(|| pack(black_box(&values))));
}

fn bench_unpack(c: &mut Criterion) {
    let buffer = pack(&[0, 999, 500, 42]);
    c.bench_function("unpack_record", |b| b.iter(|| unpack(black_box(&buffer))));
}

criterion_group!(benches, bench_pack, bench_unpack);
criterion_main!(benches);
