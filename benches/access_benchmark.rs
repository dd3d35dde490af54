// ============================================================================
// Point Access Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Compile-time access - const index and axis tag
// 2. Run-time checked access - `get` with a bounds check
// 3. Unchecked access - `get_unchecked`
// 4. Printing - rendering mixed values
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fixed_dim::point::axis::Z;
use fixed_dim::point::FixedPoint;
use fixed_dim::print::{format_all, BraceStyle};
use std::hint::black_box;

fn benchmark_compile_time_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile_time_access");
    let point = FixedPoint::<f64, 3>::new([7.8, 9.8, 3.5]);

    group.bench_function("at_const_index", |b| {
        b.iter(|| *black_box(&point).at::<2>());
    });

    group.bench_function("axis_tag", |b| {
        b.iter(|| *black_box(&point).axis::<Z>());
    });

    group.finish();
}

fn benchmark_runtime_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("runtime_access");
    let point = FixedPoint::<i64, 16>::new([7; 16]);

    for index in [0usize, 8, 15, 16].iter() {
        group.bench_with_input(BenchmarkId::new("checked", index), index, |b, &index| {
            b.iter(|| black_box(&point).get(black_box(index)).copied());
        });

        if *index < 16 {
            group.bench_with_input(BenchmarkId::new("unchecked", index), index, |b, &index| {
                // SAFETY: only indices below 16 reach this benchmark.
                b.iter(|| unsafe { *black_box(&point).get_unchecked(black_box(index)) });
            });
        }
    }

    group.finish();
}

fn benchmark_printing(c: &mut Criterion) {
    let style = BraceStyle::default();

    c.bench_function("format_all_mixed", |b| {
        b.iter(|| {
            format_all(
                black_box(&style),
                &[&1, &2, &3, &"hello", &5.0f32, &3.25, &'A'],
            )
        });
    });
}

criterion_group!(
    benches,
    benchmark_compile_time_access,
    benchmark_runtime_access,
    benchmark_printing
);
criterion_main!(benches);
