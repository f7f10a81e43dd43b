//! Benchmarks pour le comptage de motifs et le filtrage

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use motifgen_core::{
    find_most_frequent_motif, find_most_frequent_motif_par, EntropyFilter, GeneratorConfig,
    ParallelGenerator, ProbabilityVector, SeededRngFactory,
};
use std::time::Duration;

fn benchmark_motif(c: &mut Criterion) {
    let generator =
        ParallelGenerator::with_factory(GeneratorConfig::default(), SeededRngFactory::new(7))
            .unwrap();
    let sequences = generator.generate_all(100_000, 50, &ProbabilityVector::uniform());

    let mut group = c.benchmark_group("Motif Search");
    group.measurement_time(Duration::from_secs(15));
    group.sample_size(10);

    for k in [4, 6, 10] {
        group.bench_function(format!("sequential_k{}", k), |b| {
            b.iter(|| find_most_frequent_motif(black_box(&sequences), k));
        });
        group.bench_function(format!("parallel_k{}", k), |b| {
            b.iter(|| find_most_frequent_motif_par(black_box(&sequences), k));
        });
    }

    group.finish();
}

fn benchmark_entropy_filter(c: &mut Criterion) {
    let generator =
        ParallelGenerator::with_factory(GeneratorConfig::default(), SeededRngFactory::new(7))
            .unwrap();
    let sequences = generator.generate_all(200_000, 50, &ProbabilityVector::uniform());
    let filter = EntropyFilter::default();

    let mut group = c.benchmark_group("Entropy Filter");
    group.sample_size(10);

    group.bench_function("filter", |b| {
        b.iter(|| filter.filter(black_box(&sequences)));
    });
    group.bench_function("filter_par", |b| {
        b.iter(|| filter.filter_par(black_box(&sequences)));
    });

    group.finish();
}

criterion_group!(benches, benchmark_motif, benchmark_entropy_filter);
criterion_main!(benches);
