//! Benchmark for `Maybe` combinators: all, `cat_maybes`, `lift_a2` and match2.
//!
//! Measures the overhead of the combinators against plain `Option` code.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use perhaps::maybe::{Match2, Maybe, all, cat_maybes, lift_a2, match2};
use std::hint::black_box;

fn build_values(size: usize, absent_every: usize) -> Vec<Maybe<usize>> {
    (0..size)
        .map(|index| {
            if absent_every != 0 && index % absent_every == 0 {
                Maybe::absent()
            } else {
                Maybe::unit(index)
            }
        })
        .collect()
}

// =============================================================================
// all
// =============================================================================

fn benchmark_all(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("all");

    for size in [10, 100, 1000] {
        let values = build_values(size, 0);
        group.bench_with_input(
            BenchmarkId::new("all_present", size),
            &values,
            |bencher, values| {
                bencher.iter(|| {
                    let result = all(values.iter().copied(), |collected| {
                        collected.iter().sum::<usize>()
                    });
                    black_box(result)
                });
            },
        );

        // Absent at index 0 stops consumption immediately
        let short_circuit = build_values(size, size);
        group.bench_with_input(
            BenchmarkId::new("absent_first", size),
            &short_circuit,
            |bencher, values| {
                bencher.iter(|| {
                    let result = all(values.iter().copied(), |collected| collected.len());
                    black_box(result)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("option_collect", size),
            &values,
            |bencher, values| {
                bencher.iter(|| {
                    let result: Option<Vec<usize>> =
                        values.iter().copied().map(Maybe::into_option).collect();
                    black_box(result.map(|collected| collected.iter().sum::<usize>()))
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// cat_maybes
// =============================================================================

fn benchmark_cat_maybes(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("cat_maybes");

    for size in [10, 100, 1000] {
        let values = build_values(size, 3);
        group.bench_with_input(
            BenchmarkId::new("every_third_absent", size),
            &values,
            |bencher, values| {
                bencher.iter(|| black_box(cat_maybes(values.iter().copied())));
            },
        );
    }

    group.finish();
}

// =============================================================================
// lift_a2 / match2
// =============================================================================

fn benchmark_lift_a2(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("lift_a2");

    group.bench_function("both_present", |bencher| {
        bencher.iter(|| {
            let result = lift_a2(
                black_box(Maybe::unit(20)),
                black_box(Maybe::unit(22)),
                |a: i32, b: i32| a + b,
            );
            black_box(result)
        });
    });

    group.bench_function("chained_map", |bencher| {
        bencher.iter(|| {
            let result = black_box(Maybe::unit(1))
                .map(|value: i32| value + 1)
                .bind(|value| Maybe::of(value.checked_mul(2)))
                .map(|value| value.to_string());
            black_box(result)
        });
    });

    group.finish();
}

fn benchmark_match2(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("match2");

    let pairs = [
        (Maybe::unit(1), Maybe::unit(2)),
        (Maybe::unit(1), Maybe::absent()),
        (Maybe::absent(), Maybe::unit(2)),
        (Maybe::absent(), Maybe::absent()),
    ];

    group.bench_function("one_shot", |bencher| {
        bencher.iter(|| {
            let mut total = 0;
            for (first, second) in pairs {
                total += match2(
                    black_box(first),
                    black_box(second),
                    Match2 {
                        first: |a: i32| a,
                        second: |b: i32| b,
                        both: |a: i32, b: i32| a + b,
                        neither: || 0,
                    },
                );
            }
            black_box(total)
        });
    });

    let matcher = Match2::new(|a: i32| a, |b: i32| b, |a: i32, b: i32| a + b, || 0);
    group.bench_function("reusable_apply", |bencher| {
        bencher.iter(|| {
            let total: i32 = pairs
                .iter()
                .map(|&(first, second)| matcher.apply(black_box(first), black_box(second)))
                .sum();
            black_box(total)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_all,
    benchmark_cat_maybes,
    benchmark_lift_a2,
    benchmark_match2
);

criterion_main!(benches);
