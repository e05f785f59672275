//! Performance benchmarks for sacount
//!
//! Run with: cargo bench

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sacount::index::{BuildOptions, SuffixIndex};
use sacount::utils::Encoding;

const WORDS: &[&str] = &[
    "the", "suffix", "array", "counts", "every", "substring", "in", "corpus", "bigram", "window",
    "index", "letter", "prefix", "query", "range", "sort",
];

/// Generate a deterministic word corpus of roughly `words` words
fn generate_corpus(words: usize) -> Vec<u8> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut text = Vec::with_capacity(words * 7);
    for i in 0..words {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let word = WORDS[(state >> 33) as usize % WORDS.len()];
        text.extend_from_slice(word.as_bytes());
        text.push(if i % 12 == 11 { b'\n' } else { b' ' });
    }
    text
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    group.sample_size(10);

    for words in [10_000usize, 100_000] {
        let corpus = generate_corpus(words);

        group.bench_with_input(BenchmarkId::new("sequential", words), &corpus, |b, corpus| {
            let options = BuildOptions::default();
            b.iter(|| SuffixIndex::build("bench", black_box(corpus.clone()), &options).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("parallel", words), &corpus, |b, corpus| {
            let options = BuildOptions {
                parallel_sort: true,
                parallel_threshold: 0,
                ..BuildOptions::default()
            };
            b.iter(|| SuffixIndex::build("bench", black_box(corpus.clone()), &options).unwrap());
        });
    }

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let index =
        SuffixIndex::build("bench", generate_corpus(100_000), &BuildOptions::default()).unwrap();
    let engine = index.query();

    let mut group = c.benchmark_group("query");

    for query in ["s", "suffix", "arraycounts", "nonexistent"] {
        group.bench_with_input(BenchmarkId::new("count", query), &query, |b, query| {
            b.iter(|| engine.count(black_box(query.as_bytes())).unwrap());
        });
    }

    group.bench_function("bigram", |b| {
        b.iter(|| engine.bigram_count(black_box(b"suffix"), black_box(b"array")).unwrap());
    });

    let batch: Vec<&str> = WORDS.to_vec();
    group.bench_function("count_many", |b| {
        b.iter(|| engine.count_many(black_box(&batch)));
    });

    group.bench_function("top_ngrams_2", |b| {
        b.iter(|| engine.top_ngrams(black_box(2), 20, Encoding::SingleByte));
    });

    group.finish();
}

criterion_group!(benches, bench_build, bench_queries);
criterion_main!(benches);
