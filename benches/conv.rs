use pin_shim::{__uint64, ADDRINT, INT32, UINT8, decstr, hexstr};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_hexstr(c: &mut Criterion) {
    c.bench_function("hexstr u8", |b| b.iter(|| hexstr(black_box::<UINT8>(0xAB))));
    c.bench_function("hexstr u64 max", |b| {
        b.iter(|| hexstr(black_box(__uint64::MAX)))
    });
    c.bench_function("hexstr addrint", |b| {
        b.iter(|| hexstr(black_box::<ADDRINT>(0x7fff_1234)))
    });
}

pub fn bench_decstr(c: &mut Criterion) {
    c.bench_function("decstr i32 min", |b| b.iter(|| decstr(black_box(INT32::MIN))));
    c.bench_function("decstr u64 max", |b| {
        b.iter(|| decstr(black_box(__uint64::MAX)))
    });
}

criterion_group!(benches, bench_hexstr, bench_decstr);
criterion_main!(benches);
