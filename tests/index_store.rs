//! Integration tests for building, storing and querying indexes.
//!
//! These tests go through the public API only: build from a corpus file,
//! persist, reload, and check counts against a brute force scan.

use sacount::index::build::build_index_with_progress;
use sacount::index::suffix_array::{common_prefix_length, compare_keys};
use sacount::index::{BuildOptions, IndexError, IndexReader, IndexWriter, SuffixIndex};
use sacount::utils::{Encoding, indexable_positions};
use std::cmp::Ordering;
use std::fs;
use tempfile::TempDir;

const SAMPLE: &str = "the cat sat on the mat.\nthe dog sat on the log!\n\
                      a cat and a dog met on the mat, then sat.\n";

fn single_byte() -> BuildOptions {
    BuildOptions {
        encoding: Encoding::SingleByte,
        ..BuildOptions::default()
    }
}

/// Occurrences of `query` starting at an indexable position
fn brute_count(text: &[u8], query: &[u8], encoding: Encoding) -> u32 {
    indexable_positions(text, encoding)
        .filter(|&pos| text[pos..].starts_with(query))
        .count() as u32
}

/// Pseudo-random corpus over a small alphabet with separators mixed in
fn random_corpus(len: usize, seed: u64) -> Vec<u8> {
    const ALPHABET: &[u8] = b"abcab cba,\nab";
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ALPHABET[(state >> 33) as usize % ALPHABET.len()]
        })
        .collect()
}

fn assert_well_formed(index: &SuffixIndex) {
    let text = index.text();
    let suffixes = index.suffixes();
    let lcp = index.lcp();
    assert_eq!(suffixes.len(), lcp.len());

    for i in 1..suffixes.len() {
        assert_ne!(
            compare_keys(text, suffixes[i - 1], suffixes[i], 0),
            Ordering::Greater,
            "suffixes {} and {} out of order",
            suffixes[i - 1],
            suffixes[i]
        );
        assert_eq!(
            lcp[i - 1] as usize,
            common_prefix_length(text, suffixes[i - 1], suffixes[i])
        );
    }
    if let Some(&last) = lcp.last() {
        assert_eq!(last, 0);
    }
}

#[test]
fn test_build_from_file_and_reload() {
    let tmp = TempDir::new().unwrap();
    let corpus = tmp.path().join("animals.txt");
    fs::write(&corpus, SAMPLE).unwrap();
    let index_dir = tmp.path().join("indexes");

    let built =
        build_index_with_progress(&corpus, "animals", &index_dir, &single_byte(), true).unwrap();
    assert!(index_dir.join("animals.dat").is_file());
    assert!(index_dir.join("animals.idx").is_file());
    assert!(index_dir.join("animals.lcp").is_file());

    let loaded = IndexReader::open(&index_dir, "animals").unwrap();
    assert_eq!(loaded, built);
    assert_well_formed(&loaded);

    let engine = loaded.query();
    assert_eq!(engine.count(b"the").unwrap(), 6);
    assert_eq!(engine.count(b"sat").unwrap(), 3);
    assert_eq!(engine.count(b"cat").unwrap(), 2);
    assert_eq!(engine.count(b"zebra").unwrap(), 0);
}

#[test]
fn test_idx_file_layout() {
    let tmp = TempDir::new().unwrap();
    let index = SuffixIndex::build("fruit", b"banana".to_vec(), &single_byte()).unwrap();
    IndexWriter::write(tmp.path(), &index).unwrap();

    let idx = fs::read(tmp.path().join("fruit.idx")).unwrap();
    assert_eq!(idx.len(), 4 + 128 + 6 * 4);
    assert_eq!(&idx[0..4], &6u32.to_le_bytes());
    assert_eq!(&idx[4..9], b"fruit");
    assert!(idx[9..132].iter().all(|&b| b == 0));

    let offsets: Vec<u32> = idx[132..]
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    assert_eq!(offsets, vec![5, 3, 1, 0, 4, 2]);

    let lcp = fs::read(tmp.path().join("fruit.lcp")).unwrap();
    let lcp: Vec<u32> = lcp
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    assert_eq!(lcp, vec![1, 3, 0, 0, 2, 0]);

    assert_eq!(fs::read(tmp.path().join("fruit.dat")).unwrap(), b"banana");
}

#[test]
fn test_rebuild_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    let corpus = random_corpus(4000, 7);

    let first = SuffixIndex::build("rand", corpus.clone(), &single_byte()).unwrap();
    IndexWriter::write(tmp.path(), &first).unwrap();
    let first_bytes = fs::read(tmp.path().join("rand.idx")).unwrap();

    let second = SuffixIndex::build("rand", corpus, &single_byte()).unwrap();
    IndexWriter::write(tmp.path(), &second).unwrap();
    let second_bytes = fs::read(tmp.path().join("rand.idx")).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn test_counts_match_brute_force() {
    let corpus = random_corpus(3000, 42);
    let index = SuffixIndex::build("rand", corpus.clone(), &single_byte()).unwrap();
    assert_well_formed(&index);
    let engine = index.query();

    let queries: [&[u8]; 10] = [
        b"a", b"b", b"c", b"ab", b"ba", b"abc", b"cab", b"aab", b"bbb", b"abcabc",
    ];
    for query in queries {
        assert_eq!(
            engine.count(query).unwrap(),
            brute_count(&corpus, query, Encoding::SingleByte),
            "count mismatch for {:?}",
            String::from_utf8_lossy(query)
        );
    }

    let pairs: [(&[u8], &[u8]); 3] = [
        (&b"ab"[..], &b"c"[..]),
        (&b"a"[..], &b"b"[..]),
        (&b"c"[..], &b"ab"[..]),
    ];
    for (first, second) in pairs {
        let result = engine.bigram_count(first, second).unwrap();
        let joined = [first, second].concat();
        assert_eq!(result.count_forward, brute_count(&corpus, first, Encoding::SingleByte));
        assert_eq!(result.count_back, brute_count(&corpus, &joined, Encoding::SingleByte));
    }
}

#[test]
fn test_parallel_build_matches_sequential() {
    let corpus = random_corpus(5000, 99);
    let sequential = SuffixIndex::build("seq", corpus.clone(), &single_byte()).unwrap();
    let parallel = SuffixIndex::build(
        "seq",
        corpus,
        &BuildOptions {
            encoding: Encoding::SingleByte,
            parallel_sort: true,
            parallel_threshold: 0,
        },
    )
    .unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn test_double_byte_corpus() {
    // "日本" in Shift_JIS followed by ASCII; trail bytes are never suffix starts
    let corpus = vec![0x93, 0xFA, 0x96, 0x7B, b' ', b'a', 0x93, 0xFA];
    let index = SuffixIndex::build("sjis", corpus.clone(), &BuildOptions::default()).unwrap();
    let mut starts = index.suffixes().to_vec();
    starts.sort_unstable();
    assert_eq!(starts, vec![0, 2, 5, 6]);

    let engine = index.query();
    assert_eq!(engine.count(&[0x93u8, 0xFA]).unwrap(), 2);
    assert_eq!(engine.count(&[0xFAu8]).unwrap(), 0);
}

#[test]
fn test_open_missing_index() {
    let tmp = TempDir::new().unwrap();
    let err = IndexReader::open(tmp.path(), "ghost").unwrap_err();
    assert!(matches!(err, IndexError::Io { .. }));
    assert!(!IndexReader::exists(tmp.path(), "ghost"));
}

#[test]
fn test_corrupted_lcp_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let index = SuffixIndex::build("fruit", b"banana".to_vec(), &single_byte()).unwrap();
    IndexWriter::write(tmp.path(), &index).unwrap();

    // Drop one LCP value
    let lcp_path = tmp.path().join("fruit.lcp");
    let mut lcp = fs::read(&lcp_path).unwrap();
    lcp.truncate(lcp.len() - 4);
    fs::write(&lcp_path, lcp).unwrap();

    let err = IndexReader::open(tmp.path(), "fruit").unwrap_err();
    assert!(matches!(err, IndexError::CorruptIndex { .. }));
}

#[test]
fn test_invalid_queries() {
    let index = SuffixIndex::build("fruit", b"banana".to_vec(), &single_byte()).unwrap();
    let engine = index.query();
    assert!(matches!(engine.count(b""), Err(IndexError::InvalidQuery(_))));
    assert!(matches!(engine.count(b"a\0"), Err(IndexError::InvalidQuery(_))));
    assert!(matches!(
        engine.bigram_count(b"an", b""),
        Err(IndexError::InvalidQuery(_))
    ));
}
