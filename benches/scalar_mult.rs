use edwards25519::table;
use edwards25519::{scalar_mult, scalar_mult_base};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const SCALAR: [u8; 32] = [
    0x1a, 0x2b, 0x3c, 0x4d, 0x5e, 0x6f, 0x70, 0x81, 0x92, 0xa3, 0xb4, 0xc5, 0xd6, 0xe7, 0xf8, 0x09,
    0x10, 0x21, 0x32, 0x43, 0x54, 0x65, 0x76, 0x87, 0x98, 0xa9, 0xba, 0xcb, 0xdc, 0xed, 0xfe, 0x0f,
];

pub fn bench_scalar_mult_base(c: &mut Criterion) {
    c.bench_function("scalar_mult_base", |b| {
        b.iter(|| scalar_mult_base(black_box(&SCALAR)))
    });
}

pub fn bench_scalar_mult(c: &mut Criterion) {
    let base = table::base_point();
    c.bench_function("scalar_mult", |b| {
        b.iter(|| scalar_mult(black_box(&base), black_box(&SCALAR)))
    });
}

criterion_group!(benches, bench_scalar_mult_base, bench_scalar_mult);
criterion_main!(benches);
