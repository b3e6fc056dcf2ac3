//! Criterion benchmarks for the partitioning GA.
//!
//! Uses a fixed pseudo-random 50-task instance so runs are comparable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use task_partition_ga::ga::{GaConfig, GaRunner, Selection};
use task_partition_ga::{fitness, Candidate, TaskSet};

fn instance(n: usize) -> TaskSet {
    let mut rng = StdRng::seed_from_u64(12345);
    let durations: Vec<u32> = (0..n).map(|_| rng.random_range(1..100)).collect();
    let budget = durations.iter().map(|&d| d as u64).sum::<u64>() * 6 / 10;
    TaskSet::new(durations, budget).expect("benchmark instance is valid")
}

fn bench_fitness(c: &mut Criterion) {
    let tasks = instance(500);
    let mut rng = StdRng::seed_from_u64(1);
    let candidate = Candidate::create_random(tasks.task_count(), &mut rng);

    c.bench_function("fitness_500_tasks", |b| {
        b.iter(|| fitness::fitness(black_box(candidate.assignment()), black_box(&tasks)))
    });
}

fn bench_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_run_50_tasks");
    group.sample_size(10);
    let tasks = instance(50);

    for selection in [Selection::Roulette, Selection::RawCostRoulette] {
        let config = GaConfig::default()
            .with_max_generations(100)
            .with_selection(selection)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{selection:?}")),
            &config,
            |b, config| b.iter(|| GaRunner::run(black_box(&tasks), config)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_fitness, bench_run);
criterion_main!(benches);
