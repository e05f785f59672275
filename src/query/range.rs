//! Range queries over a suffix index
//!
//! A query is answered by binary searching the suffix array for any suffix
//! that begins with the query bytes, then widening around that hit with the
//! LCP array: neighbours whose shared prefix covers the whole query match too.

use crate::index::error::{IndexError, Result};
use crate::index::suffix_array::SuffixIndex;
use crate::index::suffix_array::comparator::compare_prefix;
use crate::index::types::TERMINATOR;
use serde::Serialize;
use std::cmp::Ordering;

/// Half-open interval of suffix array indices, plus the byte offset into each
/// suffix at which comparisons start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueryRange {
    pub low: usize,
    pub high: usize,
    pub offset: usize,
}

impl QueryRange {
    /// The whole suffix array, compared from the first byte
    pub fn full(len: usize) -> Self {
        Self {
            low: 0,
            high: len,
            offset: 0,
        }
    }

    /// The empty interval `[0, 0)`
    pub fn empty(offset: usize) -> Self {
        Self {
            low: 0,
            high: 0,
            offset,
        }
    }

    /// Number of suffixes in the interval
    #[inline]
    pub fn len(&self) -> usize {
        self.high.saturating_sub(self.low)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result of a two-word adjacency query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BigramCount {
    /// Occurrences of the first word
    pub count_forward: u32,
    /// Occurrences of the first word immediately followed by the second
    pub count_back: u32,
}

/// Query engine borrowing a built index
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    index: &'a SuffixIndex,
}

impl SuffixIndex {
    /// Query engine over this index
    pub fn query(&self) -> QueryEngine<'_> {
        QueryEngine::new(self)
    }
}

impl<'a> QueryEngine<'a> {
    pub fn new(index: &'a SuffixIndex) -> Self {
        Self { index }
    }

    /// Index being queried
    pub fn index(&self) -> &'a SuffixIndex {
        self.index
    }

    /// Find every suffix in `range` whose bytes from `range.offset` begin with
    /// `query`
    ///
    /// Returns `[0, 0)` when nothing matches. An empty query matches every
    /// suffix the LCP array links together; callers go through
    /// [`Self::count`] and [`Self::bigram_count`], which reject it.
    pub fn binary_search(&self, query: &[u8], range: QueryRange) -> QueryRange {
        let text = self.index.text();
        let suffixes = self.index.suffixes();
        let lcp = self.index.lcp();

        let high = range.high.min(suffixes.len());
        let (mut lo, mut hi) = (range.low, high);
        let mut hit = None;
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match compare_prefix(text, query, suffixes[mid], range.offset) {
                Ordering::Equal => {
                    hit = Some(mid);
                    break;
                }
                Ordering::Greater => lo = mid + 1,
                Ordering::Less => hi = mid,
            }
        }

        let Some(hit) = hit else {
            return QueryRange::empty(range.offset);
        };

        // Adjacent suffixes sharing at least offset + len(query) bytes match too
        let needed = range.offset + query.len();
        let mut low = hit;
        while low > range.low && lcp[low - 1] as usize >= needed {
            low -= 1;
        }
        let mut last = hit;
        while last + 1 < high && lcp[last] as usize >= needed {
            last += 1;
        }

        QueryRange {
            low,
            high: last + 1,
            offset: range.offset,
        }
    }

    /// Suffix array interval of `query`
    pub fn find(&self, query: &[u8]) -> Result<QueryRange> {
        check_query(query)?;
        Ok(self.binary_search(query, QueryRange::full(self.index.len())))
    }

    /// Number of indexed positions where `query` occurs
    pub fn count(&self, query: &[u8]) -> Result<u32> {
        Ok(self.find(query)?.len() as u32)
    }

    /// Count `first`, and `first` immediately followed by `second`
    ///
    /// Adjacency is literal: `second` must start exactly `first.len()` bytes
    /// after each occurrence of `first`.
    pub fn bigram_count(&self, first: &[u8], second: &[u8]) -> Result<BigramCount> {
        check_query(second)?;
        let forward = self.find(first)?;
        if forward.is_empty() {
            return Ok(BigramCount::default());
        }

        let back = self.binary_search(
            second,
            QueryRange {
                offset: first.len(),
                ..forward
            },
        );
        Ok(BigramCount {
            count_forward: forward.len() as u32,
            count_back: back.len() as u32,
        })
    }

    /// Corpus offsets of the suffixes in `range`
    pub fn positions(&self, range: QueryRange) -> &'a [u32] {
        let suffixes = self.index.suffixes();
        let high = range.high.min(suffixes.len());
        &suffixes[range.low.min(high)..high]
    }
}

fn check_query(query: &[u8]) -> Result<()> {
    if query.is_empty() {
        return Err(IndexError::InvalidQuery("query is empty"));
    }
    if query.contains(&TERMINATOR) {
        return Err(IndexError::InvalidQuery("query contains a NUL byte"));
    }
    Ok(())
}
