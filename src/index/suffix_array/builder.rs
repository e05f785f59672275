//! Suffix array builder
//!
//! Builds a suffix array over the indexable positions of a corpus by:
//! 1. Filtering positions (whitespace, punctuation, double-byte trail bytes)
//! 2. Bucketing them by their first byte with a counting sort
//! 3. Refining the buckets into full suffix order with multikey quicksort

use super::sort::{IgnoreDuplicates, multikey_sort};
use crate::index::error::{IndexError, Result, try_reserve};
use crate::index::types::{BuildOptions, TERMINATOR, TextPosition};
use crate::utils::{Encoding, indexable_positions};
use log::debug;
use rayon::prelude::*;

const BUCKETS: usize = 256;

/// Collect the indexable positions of `text`, in corpus order
pub fn collect_positions(text: &[u8], encoding: Encoding) -> Result<Vec<TextPosition>> {
    if text.len() > TextPosition::MAX as usize {
        return Err(IndexError::CorpusTooLarge { len: text.len() });
    }

    let iter = indexable_positions(text, encoding);
    let mut positions = Vec::new();
    try_reserve(&mut positions, iter.size_hint().1.unwrap_or(0), "position list")?;
    positions.extend(iter.map(|p| p as TextPosition));
    positions.shrink_to_fit();
    Ok(positions)
}

/// Stable counting sort of positions by the byte they point at
///
/// Returns the bucketed positions and the start offset of every bucket
/// (257 entries, the last one equal to the number of positions).
pub fn bucket_by_first_byte(
    text: &[u8],
    positions: &[TextPosition],
) -> Result<(Vec<TextPosition>, [usize; BUCKETS + 1])> {
    let mut count = [0usize; BUCKETS];
    for &pos in positions {
        count[text[pos as usize] as usize] += 1;
    }

    let mut starts = [0usize; BUCKETS + 1];
    for b in 0..BUCKETS {
        starts[b + 1] = starts[b] + count[b];
    }

    let mut bucketed = Vec::new();
    try_reserve(&mut bucketed, positions.len(), "bucket array")?;
    bucketed.resize(positions.len(), 0);

    let mut next = starts;
    for &pos in positions {
        let b = text[pos as usize] as usize;
        bucketed[next[b]] = pos;
        next[b] += 1;
    }

    Ok((bucketed, starts))
}

/// Build the sorted suffix array of `text`
///
/// An empty corpus (or one with no indexable positions) yields an empty array.
pub fn build_suffix_array(text: &[u8], options: &BuildOptions) -> Result<Vec<TextPosition>> {
    let positions = collect_positions(text, options.encoding)?;
    debug!(
        "{} indexable positions out of {} bytes",
        positions.len(),
        text.len()
    );

    let (mut suffixes, starts) = bucket_by_first_byte(text, &positions)?;
    drop(positions);

    if options.parallel_sort && suffixes.len() >= options.parallel_threshold {
        debug!("Refining {} buckets in parallel", BUCKETS);
        refine_buckets_parallel(text, &mut suffixes, &starts);
    } else {
        // The default handler never aborts
        multikey_sort(text, &mut suffixes, 0, &mut IgnoreDuplicates);
    }

    Ok(suffixes)
}

/// Sort every first-byte bucket independently on the rayon pool
///
/// Keys in a bucket already agree on their first letter, so each bucket is
/// sorted from depth 1. The terminator bucket is complete as it stands: its
/// keys are all equal at depth 0.
fn refine_buckets_parallel(
    text: &[u8],
    suffixes: &mut [TextPosition],
    starts: &[usize; BUCKETS + 1],
) {
    let mut buckets: Vec<&mut [TextPosition]> = Vec::with_capacity(BUCKETS);
    let mut rest = suffixes;
    for b in 0..BUCKETS {
        let (bucket, tail) = std::mem::take(&mut rest).split_at_mut(starts[b + 1] - starts[b]);
        if b != TERMINATOR as usize && bucket.len() > 1 {
            buckets.push(bucket);
        }
        rest = tail;
    }

    buckets.into_par_iter().for_each(|bucket| {
        multikey_sort(text, bucket, 1, &mut IgnoreDuplicates);
    });
}
