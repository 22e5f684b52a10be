//! Benchmarks for the product catalog.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- pattern_range
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

use product_catalog::{AvlIndex, MatchAlgorithm, PatternMatcher, QueryService, Record};

// ============================================================================
// HELPER FUNCTIONS - Deterministic catalog generation
// ============================================================================

const WORDS: &[&str] = &[
    "red", "blue", "green", "shoe", "hat", "scarf", "wool", "leather", "steel", "mug",
    "cotton", "linen", "ceramic", "glass", "oak",
];

/// Deterministic records with shuffled ids in `0..count`.
fn generate_records(count: usize, seed: u64) -> Vec<Record> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut ids: Vec<i64> = (0..count as i64).collect();
    for i in (1..ids.len()).rev() {
        ids.swap(i, rng.gen_range(0..=i));
    }

    ids.into_iter()
        .map(|id| {
            // 0.01 to 1000.00 in fixed-point
            let price = rng.gen_range(1_000_000..=100_000_000_000u64);
            let description = (0..rng.gen_range(2..=6))
                .map(|_| WORDS[rng.gen_range(0..WORDS.len())])
                .collect::<Vec<_>>()
                .join(" ");
            Record::new(id, price, description)
        })
        .collect()
}

fn populate(service: &mut QueryService, records: &[Record]) {
    for record in records {
        service
            .insert(record.id, record.price, record.description.clone())
            .unwrap();
    }
}

// ============================================================================
// BENCHMARK: Index Operations
// ============================================================================

fn bench_index_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_operations");
    group.measurement_time(Duration::from_secs(5));

    for size in [1_000usize, 10_000, 100_000] {
        let records = generate_records(size, 42);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("build", size), &records, |b, records| {
            b.iter_batched(
                || records.clone(),
                |records| {
                    let mut index = AvlIndex::with_capacity(records.len());
                    for record in records {
                        index.insert(record).unwrap();
                    }
                    black_box(index.height())
                },
                BatchSize::LargeInput,
            );
        });

        let mut index = AvlIndex::with_capacity(size);
        for record in &records {
            index.insert(record.clone()).unwrap();
        }

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("lookup", size), &index, |b, index| {
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            b.iter(|| black_box(index.get(rng.gen_range(0..size as i64))));
        });

        group.bench_with_input(BenchmarkId::new("remove", size), &index, |b, index| {
            b.iter_batched(
                || index.clone(),
                |mut index| black_box(index.remove(size as i64 / 2)),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Range Queries
// ============================================================================

fn bench_price_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("price_range");

    let records = generate_records(100_000, 42);
    let mut service = QueryService::new();
    populate(&mut service, &records);

    for width in [10i64, 1_000, 100_000] {
        group.throughput(Throughput::Elements(width as u64));
        group.bench_with_input(BenchmarkId::new("width", width), &width, |b, &width| {
            b.iter(|| black_box(service.range_by_price(0, width - 1, 50_000_000_000)));
        });
    }

    group.finish();
}

fn bench_pattern_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern_range");
    group.measurement_time(Duration::from_secs(5));

    let records = generate_records(50_000, 42);

    for algorithm in MatchAlgorithm::ALL {
        let mut service = QueryService::with_algorithm(algorithm);
        populate(&mut service, &records);

        for pattern in ["oak", "leather scarf"] {
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), pattern),
                &pattern,
                |b, &pattern| {
                    b.iter(|| black_box(service.range_by_pattern(0, 49_999, pattern)));
                },
            );
        }
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Matcher Comparison
// ============================================================================
// Long text, long pattern: where skip tables pay off

fn bench_matchers(c: &mut Criterion) {
    let mut group = c.benchmark_group("matchers");

    let mut text = "ab".repeat(50_000);
    text.push_str("abababababababababababababababac");
    let pattern = "abababababababababababababababac";

    group.throughput(Throughput::Bytes(text.len() as u64));
    for algorithm in MatchAlgorithm::ALL {
        let matcher = PatternMatcher::new(algorithm);
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| black_box(matcher.contains(black_box(&text), pattern)));
        });

        let compiled = matcher.compile(pattern);
        group.bench_function(format!("{}_precompiled", algorithm.name()), |b| {
            b.iter(|| black_box(compiled.is_match(black_box(&text))));
        });
    }

    group.finish();
}

// ============================================================================
// CRITERION ENTRY POINT
// ============================================================================

criterion_group!(
    benches,
    bench_index_operations,
    bench_price_range,
    bench_pattern_range,
    bench_matchers
);

criterion_main!(benches);
