//! Stress tests for the product catalog.
//!
//! These tests verify:
//! 1. AVL invariants survive long random insert/delete workloads
//! 2. Results match a `BTreeMap` model exactly
//! 3. Every matcher algorithm returns identical range results
//! 4. Digests are deterministic across runs and algorithms
//!
//! ## Running Stress Tests
//!
//! ```bash
//! cargo test --release --test stress_test -- --nocapture
//! ```

use std::collections::BTreeMap;
use std::time::Instant;

use product_catalog::index::max_avl_height;
use product_catalog::{AvlIndex, MatchAlgorithm, QueryService, Record};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

/// Operations in the main randomized workload
const STRESS_OP_COUNT: usize = 200_000;

/// Identifier domain; small enough that deletes often hit
const ID_RANGE: i64 = 20_000;

/// Words used to build descriptions
const WORDS: &[&str] = &[
    "red", "blue", "green", "shoe", "hat", "scarf", "wool", "leather", "steel", "mug",
];

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn random_description(rng: &mut ChaCha8Rng) -> String {
    let count = rng.gen_range(1..=3);
    (0..count)
        .map(|_| WORDS[rng.gen_range(0..WORDS.len())])
        .collect::<Vec<_>>()
        .join(" ")
}

/// Apply a seeded workload to a service and return it.
fn run_workload(seed: u64, ops: usize, algorithm: MatchAlgorithm) -> QueryService {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut service = QueryService::with_algorithm(algorithm);

    for _ in 0..ops {
        let id = rng.gen_range(-ID_RANGE..ID_RANGE);
        if rng.gen_bool(0.6) {
            let price = rng.gen_range(0..100_000_000_000u64);
            let description = random_description(&mut rng);
            service.insert(id, price, description).unwrap();
        } else {
            service.delete(id);
        }
    }
    service
}

// ============================================================================
// STRESS TESTS
// ============================================================================

/// Random inserts and deletes checked against a BTreeMap after every step.
#[test]
fn stress_random_ops_against_model() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut index = AvlIndex::with_capacity(4_096);
    let mut model: BTreeMap<i64, u64> = BTreeMap::new();

    for step in 0..20_000 {
        let id = rng.gen_range(-2_000i64..2_000);
        if rng.gen_bool(0.55) {
            let price = rng.gen_range(0..1_000_000u64);
            index.insert(Record::new(id, price, "x")).unwrap();
            model.insert(id, price);
        } else {
            let removed = index.remove(id).map(|r| r.price);
            assert_eq!(removed, model.remove(&id), "remove({id}) at step {step}");
        }

        if step % 97 == 0 {
            index.validate().unwrap_or_else(|e| panic!("step {step}: {e}"));
        }
        assert_eq!(index.len(), model.len());
        assert!(index.height() <= max_avl_height(index.len()));
    }

    index.validate().unwrap();
    let actual: Vec<(i64, u64)> = index.iter().map(|r| (r.id, r.price)).collect();
    let expected: Vec<(i64, u64)> = model.into_iter().collect();
    assert_eq!(actual, expected);
}

/// Large workload: timing plus final invariant check.
#[test]
fn stress_large_workload() {
    println!("\n=== STRESS TEST: {} operations ===\n", STRESS_OP_COUNT);

    let start = Instant::now();
    let service = run_workload(7, STRESS_OP_COUNT, MatchAlgorithm::BoyerMoore);
    let elapsed = start.elapsed();

    println!("  Final catalog size: {:>10}", service.len());
    println!("  Tree height:        {:>10}", service.index().height());
    println!("  Elapsed time:       {:>10.2?}", elapsed);

    service.index().validate().unwrap();
    assert!(service.index().height() <= max_avl_height(service.len()));
}

/// Sequential and reverse-sequential ids never degrade into a chain.
#[test]
fn stress_monotonic_inserts() {
    for ids in [
        (0..10_000).collect::<Vec<i64>>(),
        (0..10_000).rev().collect::<Vec<i64>>(),
    ] {
        let mut index = AvlIndex::with_capacity(ids.len());
        for id in ids {
            index.insert(Record::new(id, 0, "")).unwrap();
        }
        index.validate().unwrap();
        assert_eq!(index.height(), 14);
    }

    let mut index = AvlIndex::new();
    for id in 1..=100 {
        index.insert(Record::new(id, 0, "")).unwrap();
    }
    assert!(index.height() <= max_avl_height(100));
}

/// Range queries agree with a model and across matcher algorithms.
#[test]
fn stress_range_queries_agree() {
    let services: Vec<QueryService> = MatchAlgorithm::ALL
        .iter()
        .map(|&algorithm| run_workload(99, 20_000, algorithm))
        .collect();

    let mut rng = ChaCha8Rng::seed_from_u64(1234);
    for _ in 0..500 {
        let a = rng.gen_range(-ID_RANGE..ID_RANGE);
        let b = a + rng.gen_range(0..4_000);
        let tau = rng.gen_range(0..100_000_000_000u64);
        let pattern = WORDS[rng.gen_range(0..WORDS.len())];

        let reference = &services[0];
        let expected_price: Vec<i64> = reference
            .index()
            .iter()
            .filter(|r| r.id >= a && r.id <= b && r.price <= tau)
            .map(|r| r.id)
            .collect();
        let expected_pattern: Vec<i64> = reference
            .index()
            .iter()
            .filter(|r| r.id >= a && r.id <= b && r.description.contains(pattern))
            .map(|r| r.id)
            .collect();

        for service in &services {
            assert_eq!(service.range_by_price(a, b, tau), expected_price);
            assert_eq!(
                service.range_by_pattern(a, b, pattern),
                expected_pattern,
                "{} on pattern {pattern:?}",
                service.matcher().algorithm()
            );
        }
    }
}

/// Same seed, same catalog; different seed, different catalog.
#[test]
fn verify_determinism() {
    const OPS: usize = 10_000;

    let root1 = run_workload(12345, OPS, MatchAlgorithm::Kmp).digest().unwrap();
    let root2 = run_workload(12345, OPS, MatchAlgorithm::Naive).digest().unwrap();

    println!("  Run 1 state root: {}", root1.state_root_hex());
    println!("  Run 2 state root: {}", root2.state_root_hex());
    assert_eq!(root1, root2, "State roots must match for determinism");

    let root3 = run_workload(12346, OPS, MatchAlgorithm::Kmp).digest().unwrap();
    assert_ne!(root1.state_root, root3.state_root);
}
