// Benchmarks for the difficulty retarget algorithms
// Run with: cargo bench --bench difficulty_bench

use consensus_pow::{DifficultyCalculator, DifficultyConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn create_test_window(count: u64) -> (Vec<u64>, Vec<u64>) {
    let timestamps = (0..count).map(|i| 1_000_000 + i * 120 + (i * 7919) % 90).collect();
    let cumulative = (0..count).map(|i| i * 250_000).collect();
    (timestamps, cumulative)
}

fn bench_windowed_average(c: &mut Criterion) {
    let calculator = DifficultyCalculator::new(DifficultyConfig::default());
    let (timestamps, cumulative) = create_test_window(720);
    c.bench_function("next_difficulty_v1/720", |b| {
        b.iter(|| calculator.next_difficulty_v1(black_box(&timestamps), black_box(&cumulative)));
    });
}

fn bench_lwma(c: &mut Criterion) {
    let calculator = DifficultyCalculator::new(DifficultyConfig::default());
    let (timestamps, cumulative) = create_test_window(61);
    c.bench_function("next_difficulty_lwma/61", |b| {
        b.iter(|| calculator.next_difficulty(black_box(&timestamps), black_box(&cumulative), 61));
    });
}

criterion_group!(benches, bench_windowed_average, bench_lwma);
criterion_main!(benches);
