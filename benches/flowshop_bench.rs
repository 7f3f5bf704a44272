//! Criterion benchmarks for u-flowshop.
//!
//! Uses synthetic random instances to measure engine throughput and the
//! cost of individual search steps.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_flowshop::engine::schedule;
use u_flowshop::ga::{GaConfig, GaRunner, GaState};
use u_flowshop::models::Instance;
use u_flowshop::random::{create_rng, random_permutation};
use u_flowshop::sa::{SaConfig, SaRunner, SaState};

/// Random instance with processing times in 1..100 and 1-3 machines per stage.
fn random_instance(jobs: usize, stages: usize, seed: u64) -> Instance {
    let mut rng = create_rng(seed);
    let machines = (0..stages).map(|_| rng.random_range(1..=3)).collect();
    let matrix = (0..stages)
        .map(|_| (0..jobs).map(|_| rng.random_range(1..100) as f64).collect())
        .collect();
    Instance::from_stage_major(jobs, stages, machines, matrix).expect("valid synthetic instance")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");

    for (jobs, stages) in [(20usize, 5usize), (50, 10), (100, 20)] {
        let instance = random_instance(jobs, stages, 42);
        let perm = random_permutation(jobs, &mut create_rng(1));
        group.bench_with_input(
            BenchmarkId::new(format!("n{jobs}_s{stages}"), jobs),
            &(instance, perm),
            |b, (inst, p)| b.iter(|| black_box(schedule(black_box(inst), black_box(p)))),
        );
    }
    group.finish();
}

fn bench_ga_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_generation");
    group.sample_size(10);

    for (jobs, pop) in [(20usize, 50usize), (50, 100)] {
        let instance = random_instance(jobs, 5, 42);
        let config = GaConfig::default()
            .with_population_size(pop)
            .with_parallel(false);
        let state = GaState::random(&instance, pop, &mut create_rng(7));
        group.bench_with_input(
            BenchmarkId::new(format!("n{jobs}_p{pop}"), jobs),
            &(instance, config, state),
            |b, (inst, cfg, st)| {
                let mut rng = create_rng(42);
                b.iter(|| black_box(GaRunner::step(inst, cfg, st, &mut rng)))
            },
        );
    }
    group.finish();
}

fn bench_sa_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa_1000_steps");
    group.sample_size(10);

    for &jobs in &[20usize, 50] {
        let instance = random_instance(jobs, 5, 42);
        let config = SaConfig::default();
        group.bench_with_input(
            BenchmarkId::from_parameter(jobs),
            &(instance, config),
            |b, (inst, cfg)| {
                b.iter(|| {
                    let mut rng = create_rng(42);
                    let mut state = SaState::random(inst, cfg, &mut rng);
                    for _ in 0..1000 {
                        match SaRunner::step(inst, cfg, &state, &mut rng) {
                            Ok((next, _)) => state = next,
                            Err(e) => panic!("annealing step failed: {e}"),
                        }
                    }
                    black_box(state)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_engine, bench_ga_generation, bench_sa_steps);
criterion_main!(benches);
