//! N-gram listing
//!
//! Walks the suffix array in order and groups suffixes by their first `n`
//! characters. Sorting guarantees equal grams are adjacent, so one pass is
//! enough.

use super::range::QueryEngine;
use crate::index::types::TERMINATOR;
use crate::utils::Encoding;

/// One distinct n-gram and how many indexed positions start with it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NgramCount {
    pub gram: Vec<u8>,
    pub count: u32,
}

/// The first `n` characters of the suffix at `pos`
///
/// A double-byte character counts once. The gram ends early at a terminator
/// or at the end of the corpus.
pub fn gram_at(text: &[u8], pos: usize, n: usize, encoding: Encoding) -> &[u8] {
    let mut end = pos;
    let mut chars = 0;
    while chars < n && end < text.len() && text[end] != TERMINATOR {
        end = (end + encoding.char_width(text[end])).min(text.len());
        chars += 1;
    }
    &text[pos..end]
}

impl QueryEngine<'_> {
    /// Distinct n-grams in suffix order with their counts
    pub fn ngram_counts(&self, n: usize, encoding: Encoding) -> Vec<NgramCount> {
        let index = self.index();
        let text = index.text();
        let mut counts: Vec<NgramCount> = Vec::new();
        if n == 0 {
            return counts;
        }

        for &pos in index.suffixes() {
            let gram = gram_at(text, pos as usize, n, encoding);
            match counts.last_mut() {
                Some(last) if last.gram == gram => last.count += 1,
                _ => counts.push(NgramCount {
                    gram: gram.to_vec(),
                    count: 1,
                }),
            }
        }
        counts
    }

    /// The `limit` most frequent n-grams; ties stay in byte order
    pub fn top_ngrams(&self, n: usize, limit: usize, encoding: Encoding) -> Vec<NgramCount> {
        let mut counts = self.ngram_counts(n, encoding);
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts.truncate(limit);
        counts
    }
}
