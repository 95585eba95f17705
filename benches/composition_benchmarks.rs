use cim_predicate::{predicate, PredicateOperations, SharedPredicate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn leaves() -> (SharedPredicate<i64>, SharedPredicate<i64>) {
    (
        predicate("positive", |x: &i64| *x > 0),
        predicate("small", |x: &i64| *x < 1_000),
    )
}

fn benchmark_cached_composition(c: &mut Criterion) {
    let ops = PredicateOperations::<i64>::default();
    let (a, b) = leaves();
    ops.and(&a, &b).unwrap();

    c.bench_function("and_cache_hit", |bencher| {
        bencher.iter(|| black_box(ops.and(&a, &b).unwrap()))
    });

    c.bench_function("not_fresh_allocation", |bencher| {
        bencher.iter(|| black_box(ops.not(&a).unwrap()))
    });
}

fn benchmark_evaluation_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluation_depth");
    let ops = PredicateOperations::<i64>::default();
    let (a, b) = leaves();

    for depth in [1usize, 4, 16, 64] {
        let mut expr = ops.and(&a, &b).unwrap();
        for _ in 1..depth {
            expr = ops.xor(&expr, &a).unwrap();
        }

        group.bench_with_input(BenchmarkId::from_parameter(depth), &expr, |bencher, expr| {
            bencher.iter(|| black_box(expr.apply(black_box(&42))))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_cached_composition,
    benchmark_evaluation_depth
);
criterion_main!(benches);
