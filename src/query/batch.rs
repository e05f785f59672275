//! Parallel batch counting
//!
//! A built index is read-only, so any number of queries can run against it
//! at once without locking.

use super::range::{BigramCount, QueryEngine};
use crate::index::error::Result;
use rayon::prelude::*;

impl QueryEngine<'_> {
    /// Count every query in parallel; results keep the input order
    pub fn count_many<Q>(&self, queries: &[Q]) -> Vec<Result<u32>>
    where
        Q: AsRef<[u8]> + Sync,
    {
        queries
            .par_iter()
            .map(|query| self.count(query.as_ref()))
            .collect()
    }

    /// Run bigram counts for many word pairs in parallel
    pub fn bigram_count_many<Q>(&self, pairs: &[(Q, Q)]) -> Vec<Result<BigramCount>>
    where
        Q: AsRef<[u8]> + Sync,
    {
        pairs
            .par_iter()
            .map(|(first, second)| self.bigram_count(first.as_ref(), second.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::index::suffix_array::SuffixIndex;
    use crate::index::types::BuildOptions;

    #[test]
    fn test_count_many_keeps_order() {
        let index = SuffixIndex::build("magic", b"abracadabra".to_vec(), &BuildOptions::default()).unwrap();
        let engine = index.query();

        let queries = ["a", "abra", "ra", "z", ""];
        let counts = engine.count_many(&queries);
        assert_eq!(counts.len(), 5);
        assert_eq!(counts[0].as_ref().unwrap(), &5);
        assert_eq!(counts[1].as_ref().unwrap(), &2);
        assert_eq!(counts[2].as_ref().unwrap(), &2);
        assert_eq!(counts[3].as_ref().unwrap(), &0);
        assert!(counts[4].is_err());
    }

    #[test]
    fn test_bigram_count_many() {
        let index = SuffixIndex::build("magic", b"abracadabra".to_vec(), &BuildOptions::default()).unwrap();
        let pairs = vec![("ab", "ra"), ("a", "c"), ("q", "a")];
        let results = index.query().bigram_count_many(&pairs);
        let back: Vec<u32> = results.into_iter().map(|r| r.unwrap().count_back).collect();
        assert_eq!(back, vec![2, 1, 0]);
    }

    #[test]
    fn test_shared_across_threads() {
        let index = SuffixIndex::build("fruit", b"banana bandana".to_vec(), &BuildOptions::default()).unwrap();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| index.query().count(b"ana").unwrap()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), 3);
            }
        });
    }
}
