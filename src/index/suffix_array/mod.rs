//! Suffix array construction
//!
//! This module turns a corpus into a sorted suffix array and its LCP array.
//!
//! ## Architecture
//!
//! - `comparator`: letter lookup, key comparison, common prefix length
//! - `sort`: multikey quicksort with duplicate handling
//! - `builder`: position filtering, bucket pass, refinement
//! - `lcp`: LCP array over sorted suffixes
//! - `index`: the owning [`SuffixIndex`]

pub mod builder;
pub mod comparator;
pub mod index;
pub mod lcp;
pub mod sort;

// Re-exports for convenience
pub use builder::build_suffix_array;
pub use comparator::{common_prefix_length, compare_keys};
pub use index::SuffixIndex;
pub use lcp::build_lcp;
pub use sort::{DuplicateHandler, IgnoreDuplicates, multikey_sort};
