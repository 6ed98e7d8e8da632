/*
 * // Copyright 2026 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use const_trig::{cos, cosf, floor, pow_integer, sin, sinf, tan, tanf};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("libm::tan", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::tan(i as f64 / 100.));
            }
        })
    });

    c.bench_function("system::tan", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(f64::tan(i as f64 / 100.));
            }
        })
    });

    c.bench_function("const-trig: tan", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(tan(i as f64 / 100.));
            }
        })
    });

    c.bench_function("const-trig: tanf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(tanf(i as f32 / 100.));
            }
        })
    });

    c.bench_function("libm::cos", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::cos(i as f64 / 100.));
            }
        })
    });

    c.bench_function("const-trig: cos", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(cos(i as f64 / 100.));
            }
        })
    });

    c.bench_function("const-trig: cosf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(cosf(i as f32 / 100.));
            }
        })
    });

    c.bench_function("libm::sin", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::sin(i as f64 / 100.));
            }
        })
    });

    c.bench_function("const-trig: sin", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(sin(i as f64 / 100.));
            }
        })
    });

    c.bench_function("const-trig: sinf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(sinf(i as f32 / 100.));
            }
        })
    });

    c.bench_function("const-trig: floor", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(floor(i as f64 / -7.));
            }
        })
    });

    c.bench_function("const-trig: pow_integer", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(pow_integer(1.0001, i));
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
