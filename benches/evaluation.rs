use criterion::{black_box, criterion_group, criterion_main, Criterion};
use evalexpr::{build_operator_tree, DefaultNumericTypes};
use rand::Rng;
use std::collections::HashMap;

/// Benchmark simple arithmetic against comparable evaluator crates.
fn benchmark_simple_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Simple arithmetic");

    let expr = "2 + 3 * 4";
    let no_vars = HashMap::new();
    let precompiled_evalexpr = build_operator_tree::<DefaultNumericTypes>(expr).unwrap();

    group.bench_function("formulite", |b| {
        b.iter(|| formulite::evaluate(black_box(expr), &no_vars).unwrap())
    });

    group.bench_function("native_rust", |b| b.iter(|| black_box(2.0 + 3.0 * 4.0)));

    group.bench_function("meval", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });

    group.bench_function("precompiled_evalexpr", |b| {
        b.iter(|| precompiled_evalexpr.eval().unwrap())
    });
}

/// Benchmark the shape the tools actually use: one formula string evaluated
/// in a tight loop over a level range, fresh bindings per data point.
fn benchmark_curve_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("Curve sweep");

    let expr = "base * 1.1 ** level + clamp(level - 10, 0, 50)";
    let mut rng = rand::rng();
    let base: f64 = rng.random_range(5.0..50.0);

    group.bench_function("formulite_100_levels", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for level in 0..100 {
                let vars = HashMap::from([
                    ("base".to_string(), base),
                    ("level".to_string(), level as f64),
                ]);
                total += formulite::evaluate(black_box(expr), &vars).unwrap();
            }
            black_box(total)
        })
    });

    group.bench_function("native_rust_100_levels", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for level in 0..100 {
                let level = level as f64;
                total += base * 1.1f64.powf(level) + (level - 10.0).max(0.0).min(50.0);
            }
            black_box(total)
        })
    });
}

/// Benchmark registry-heavy formulas.
fn benchmark_function_calls(c: &mut Criterion) {
    let mut group = c.benchmark_group("Function call evaluation");

    let expr = "lerp(sqrt(16), pow(3, 2), 0.5) + hypot(3, 4)";
    let no_vars = HashMap::new();

    group.bench_function("formulite", |b| {
        b.iter(|| formulite::evaluate(black_box(expr), &no_vars).unwrap())
    });

    group.bench_function("native_rust", |b| {
        b.iter(|| {
            let a = 16.0f64.sqrt();
            let b2 = 3.0f64.powf(2.0);
            black_box(a + (b2 - a) * 0.5 + 3.0f64.hypot(4.0))
        })
    });
}

criterion_group!(
    benches,
    benchmark_simple_arithmetic,
    benchmark_curve_sweep,
    benchmark_function_calls,
);
criterion_main!(benches);
