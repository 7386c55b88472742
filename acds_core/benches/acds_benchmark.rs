//! Benchmarks for the ACDS reducer formulations.
//!
//! Compares the reference fold, the early-exit vector and the explicit
//! fraction list over suites with 0, 1, 2 and 5 reductions per calculation.
//!
//! Run with:
//!   cargo bench --package acds_core --bench acds_benchmark

use acds_core::{damage_reduction, EarlyExitVector, FractionList, ModifierContext, ModifierVector};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DAMAGE: i64 = 1000;

/// One workload, prepared in all three representations
struct Suite {
    label: &'static str,
    vectors: Vec<ModifierVector>,
    early_exit: Vec<EarlyExitVector>,
    lists: Vec<FractionList>,
}

impl Suite {
    fn new(label: &'static str, slots: &[[i32; 8]]) -> Self {
        let vectors: Vec<ModifierVector> = slots.iter().copied().map(ModifierVector::new).collect();
        Self::from_vectors(label, vectors)
    }

    fn from_vectors(label: &'static str, vectors: Vec<ModifierVector>) -> Self {
        let early_exit = vectors.iter().copied().map(EarlyExitVector::new).collect();
        let lists = vectors
            .iter()
            .map(|v| {
                FractionList::from_vector(ModifierContext::Reduction, v)
                    .expect("benchmark vectors stay under the step cap")
            })
            .collect();
        Suite {
            label,
            vectors,
            early_exit,
            lists,
        }
    }
}

fn run_default(damage: i64, suite: &[ModifierVector]) -> i64 {
    suite.iter().map(|v| damage_reduction(damage, v)).sum()
}

fn run_early_exit(damage: i64, suite: &[EarlyExitVector]) -> i64 {
    suite
        .iter()
        .map(|v| v.apply(ModifierContext::Reduction, damage))
        .sum()
}

fn run_list(damage: i64, suite: &[FractionList]) -> i64 {
    suite.iter().map(|list| list.apply(damage)).sum()
}

fn bench_suite(c: &mut Criterion, group_name: &str, suite: &Suite) {
    let mut group = c.benchmark_group(group_name);

    group.bench_with_input(
        BenchmarkId::new("ACDS default", suite.label),
        &suite.vectors,
        |b, vectors| b.iter(|| run_default(black_box(DAMAGE), vectors)),
    );

    group.bench_with_input(
        BenchmarkId::new("ACDS early exit", suite.label),
        &suite.early_exit,
        |b, vectors| b.iter(|| run_early_exit(black_box(DAMAGE), vectors)),
    );

    group.bench_with_input(
        BenchmarkId::new("Fraction List", suite.label),
        &suite.lists,
        |b, lists| b.iter(|| run_list(black_box(DAMAGE), lists)),
    );

    group.finish();
}

/// Benchmark with empty DR values.
fn bench_empty(c: &mut Criterion) {
    let suite = Suite::new("0 DRs", &[[0, 0, 0, 0, 0, 0, 0, 0]; 8]);
    bench_suite(c, "Empty", &suite);
}

/// Benchmark with 1 DR value per calculation.
fn bench_light(c: &mut Criterion) {
    let suite = Suite::new(
        "1 DR",
        &[
            [1, 0, 0, 0, 0, 0, 0, 0],
            [0, 1, 0, 0, 0, 0, 0, 0],
            [0, 0, 1, 0, 0, 0, 0, 0],
            [0, 0, 0, 1, 0, 0, 0, 0],
            [0, 0, 0, 0, 1, 0, 0, 0],
            [0, 0, 0, 0, 0, 1, 0, 0],
            [0, 0, 0, 0, 0, 0, 1, 0],
            [0, 0, 0, 0, 0, 0, 0, 1],
        ],
    );
    bench_suite(c, "Light", &suite);
}

/// Benchmark with 2 DR values per calculation.
fn bench_medium(c: &mut Criterion) {
    let suite = Suite::new(
        "2 DRs",
        &[
            [1, 1, 0, 0, 0, 0, 0, 0],
            [0, 1, 1, 0, 0, 0, 0, 0],
            [0, 0, 1, 1, 0, 0, 0, 0],
            [0, 0, 0, 1, 1, 0, 0, 0],
            [0, 0, 0, 0, 1, 1, 0, 0],
            [0, 0, 0, 0, 0, 1, 1, 0],
            [0, 0, 0, 0, 0, 0, 1, 1],
            [0, 0, 0, 0, 0, 0, 0, 2],
        ],
    );
    bench_suite(c, "Medium", &suite);
}

/// Benchmark with 5 DR values per calculation.
fn bench_heavy(c: &mut Criterion) {
    let suite = Suite::new(
        "5 DRs",
        &[
            [2, 1, 1, 1, 0, 0, 0, 0],
            [0, 2, 1, 1, 1, 0, 0, 0],
            [0, 0, 2, 1, 1, 1, 0, 0],
            [0, 0, 0, 2, 1, 1, 1, 0],
            [0, 0, 0, 0, 2, 1, 1, 1],
            [0, 0, 0, 0, 0, 2, 2, 1],
            [0, 0, 0, 0, 0, 0, 3, 2],
            [0, 0, 0, 0, 0, 0, 0, 5],
        ],
    );
    bench_suite(c, "Heavy", &suite);
}

/// Benchmark with a seeded mix of signed counts, mostly sparse.
fn bench_mixed(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xAC_D5);
    let vectors = (0..64)
        .map(|_| {
            let mut slots = [0i32; 8];
            for slot in slots.iter_mut() {
                if rng.gen_bool(0.3) {
                    *slot = rng.gen_range(-2..=2);
                }
            }
            ModifierVector::new(slots)
        })
        .collect();
    let suite = Suite::from_vectors("random", vectors);
    bench_suite(c, "Mixed", &suite);
}

criterion_group!(benches, bench_empty, bench_light, bench_medium, bench_heavy, bench_mixed);
criterion_main!(benches);
