//! Criterion benchmarks for the poweq_core solvers and pipeline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use poweq_core::dispatch::{solve, Engine, Strategy};
use poweq_core::math::solvers::{BisectionSolver, NewtonRaphsonSolver, SolverConfig};
use poweq_core::types::Job;

/// Jobs with two roots each and growing coefficients.
fn generate_jobs(count: usize) -> Vec<Job> {
    (0..count)
        .map(|i| {
            let k = 0.01 + 0.5 * i as f64 / count as f64;
            Job::new(i as i64, 2.0, std::f64::consts::E, k, 1e-6, 1e3)
        })
        .collect()
}

/// Benchmark the generic solvers on a cubic.
fn bench_generic_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("generic_solvers");
    let f = |x: f64| x * x * x - x - 2.0;
    let f_prime = |x: f64| 3.0 * x * x - 1.0;

    for tol in [1e-6, 1e-10, 1e-14] {
        let config = SolverConfig::new(tol, 200);
        group.bench_with_input(BenchmarkId::new("newton", tol), &config, |b, config| {
            let solver = NewtonRaphsonSolver::new(*config);
            b.iter(|| solver.find_root(f, f_prime, black_box(1.5)));
        });
        group.bench_with_input(BenchmarkId::new("bisection", tol), &config, |b, config| {
            let solver = BisectionSolver::new(*config);
            b.iter(|| solver.find_root(f, black_box(1.0), black_box(2.0)));
        });
    }

    group.finish();
}

/// Benchmark each strategy on a two-root job.
fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategies");
    let job = Job::new(1, 2.0, std::f64::consts::E, 0.1, 0.1, 10.0);

    for strategy in Strategy::ALL {
        group.bench_with_input(
            BenchmarkId::new("solve", strategy.as_str()),
            &strategy,
            |b, strategy| b.iter(|| solve(black_box(&job), *strategy)),
        );
    }

    group.finish();
}

/// Benchmark the full pipeline over job sets of different sizes.
fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    let engine = Engine::default();

    for size in [10, 100, 1000] {
        let jobs = generate_jobs(size);
        group.bench_with_input(BenchmarkId::new("run_auto", size), &jobs, |b, jobs| {
            b.iter(|| {
                for job in jobs {
                    let _ = engine.run(black_box(job), Strategy::Auto);
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generic_solvers, bench_strategies, bench_engine);
criterion_main!(benches);
