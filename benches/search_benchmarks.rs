//! Benchmarks for encoding, index construction, partitioning and queries.
//!
//! ```bash
//! cargo bench --bench search_benchmarks
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use soundseek::prelude::*;

const SEED: u64 = 42;

fn synthetic_tokens(count: usize, vocabulary: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let words: Vec<String> = (0..vocabulary)
        .map(|_| {
            let len = rng.gen_range(2..10);
            (0..len)
                .map(|_| (b'a' + rng.gen_range(0..26u8)) as char)
                .collect()
        })
        .collect();

    (0..count)
        .map(|_| words[rng.gen_range(0..words.len())].clone())
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let tokens = synthetic_tokens(10_000, 10_000);

    let mut group = c.benchmark_group("encode");
    group.throughput(Throughput::Elements(tokens.len() as u64));
    group.bench_function("soundex", |b| {
        b.iter(|| {
            for token in &tokens {
                black_box(soundex(black_box(token)));
            }
        })
    });
    group.bench_function("encode", |b| {
        b.iter(|| {
            for token in &tokens {
                black_box(encode(black_box(token)));
            }
        })
    });
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    group.sample_size(20);

    for &size in &[1_000usize, 10_000, 50_000] {
        let tokens = synthetic_tokens(size, size / 4);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("index", size), &tokens, |b, tokens| {
            b.iter(|| black_box(build_index(tokens)))
        });

        let index = build_index(&tokens);
        let config = PartitionConfig::default();
        group.bench_with_input(BenchmarkId::new("partition", size), &index, |b, index| {
            b.iter(|| black_box(partition(index.clone(), &config)))
        });
    }
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let tokens = synthetic_tokens(50_000, 12_000);
    let search = PhoneticSearch::build(&tokens, &SearchConfig::default())
        .expect("default settings are valid");
    let queries = synthetic_tokens(100, 100);

    let mut group = c.benchmark_group("query");
    group.throughput(Throughput::Elements(queries.len() as u64));
    for &k in &[1usize, 5, 20] {
        group.bench_with_input(BenchmarkId::new("find_top", k), &k, |b, &k| {
            b.iter(|| {
                for query in &queries {
                    black_box(search.find_top(black_box(query), k));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_build, bench_query);
criterion_main!(benches);
