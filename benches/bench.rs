//! Criterion benchmarks for the Orthos spell checker.
//!
//! Covers the three layers of the matching core:
//! - Edit distance computation
//! - BK-tree bounded search (against a linear scan baseline)
//! - Dictionary suggestion retrieval

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use orthos::spelling::bktree::BkTree;
use orthos::spelling::dictionary::Dictionary;
use orthos::spelling::distance::{damerau_levenshtein_distance, levenshtein_distance};

/// Generate a deterministic pseudo-random word list for benchmarking.
fn generate_words(count: usize) -> Vec<String> {
    let mut words = Vec::with_capacity(count);
    let mut state: u64 = 0x9e3779b97f4a7c15;

    for _ in 0..count {
        let len = 3 + (state % 8) as usize;
        let mut word = String::with_capacity(len);
        for _ in 0..len {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            word.push((b'a' + (state >> 33) as u8 % 26) as char);
        }
        words.push(word);
    }

    words
}

fn bench_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance");
    group.throughput(Throughput::Elements(1));

    group.bench_function("levenshtein", |b| {
        b.iter(|| levenshtein_distance(black_box("extraordinary"), black_box("extroardinary")))
    });

    group.bench_function("damerau_levenshtein", |b| {
        b.iter(|| {
            damerau_levenshtein_distance(black_box("extraordinary"), black_box("extroardinary"))
        })
    });

    group.finish();
}

fn bench_tree_search(c: &mut Criterion) {
    let words = generate_words(10_000);
    let mut tree = BkTree::new();
    for word in &words {
        tree.insert(word);
    }

    let mut group = c.benchmark_group("search");

    group.bench_function("bktree_radius_2", |b| {
        b.iter(|| tree.search(black_box("benchmark"), 2, 10, &[]))
    });

    group.bench_function("linear_scan_radius_2", |b| {
        b.iter(|| {
            words
                .iter()
                .filter(|w| damerau_levenshtein_distance(w, black_box("benchmark")) <= 2)
                .take(10)
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

fn bench_suggest(c: &mut Criterion) {
    let dictionary = Dictionary::from_words(generate_words(10_000));

    let mut group = c.benchmark_group("suggest");

    group.bench_function("suggest_limit_5", |b| {
        b.iter(|| dictionary.suggest(black_box("benchmark"), 5).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_distance, bench_tree_search, bench_suggest);
criterion_main!(benches);
