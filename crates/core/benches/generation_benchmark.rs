//! Benchmarks pour la génération parallèle

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use motifgen_core::{GeneratorConfig, ParallelGenerator, ProbabilityVector, SeededRngFactory};
use std::time::Duration;

fn benchmark_generation(c: &mut Criterion) {
    let sizes = vec![
        ("small", 10_000),
        ("medium", 200_000),
        ("large", 1_000_000),
    ];

    let mut group = c.benchmark_group("Generation Performance");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(10);

    let generator = ParallelGenerator::new(GeneratorConfig::default()).unwrap();
    let probs = ProbabilityVector::uniform();

    for (name, count) in sizes {
        group.bench_function(format!("generate_{}", name), |b| {
            b.iter(|| generator.generate_all(black_box(count), 50, &probs));
        });
    }

    group.finish();
}

fn benchmark_chunk_threshold(c: &mut Criterion) {
    let mut group = c.benchmark_group("Chunk Threshold");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(10);

    let probs = ProbabilityVector::uniform();

    for threshold in [10_000, 100_000, 500_000] {
        let config = GeneratorConfig {
            chunk_threshold: threshold,
            threads: None,
        };
        let generator = ParallelGenerator::with_factory(config, SeededRngFactory::new(42)).unwrap();

        group.bench_function(format!("threshold_{}", threshold), |b| {
            b.iter(|| generator.generate_all(black_box(500_000), 50, &probs));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_generation, benchmark_chunk_threshold);
criterion_main!(benches);
