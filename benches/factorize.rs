// benches/factorize.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use qsieve::factorize;
use qsieve::integer_math::arithmetic::{integer_sqrt, mod_pow};

fn bench_mod_pow(c: &mut Criterion) {
    c.bench_function("mod_pow 64-bit", |b| {
        b.iter(|| {
            mod_pow(
                black_box(463001234381863703),
                black_box(1216 / 2),
                black_box(1217),
            )
        })
    });
}

fn bench_integer_sqrt(c: &mut Criterion) {
    c.bench_function("integer_sqrt", |b| {
        b.iter(|| integer_sqrt(black_box(61782576236670853)))
    });
}

fn bench_factorize_8051(c: &mut Criterion) {
    c.bench_function("factorize 8051", |b| {
        b.iter(|| factorize(black_box(8051), black_box(5), black_box(10)))
    });
}

criterion_group!(benches, bench_mod_pow, bench_integer_sqrt, bench_factorize_8051);
criterion_main!(benches);
