//! # sacount - Suffix Array Occurrence Counting
//!
//! sacount builds a suffix array over a byte corpus and answers exact
//! substring counts, adjacency (bigram) counts and n-gram listings from it.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - Suffix array construction, LCP array, on-disk storage
//! - [`query`] - LCP-accelerated range search, bigram and n-gram queries
//! - [`output`] - Result formatting (colored text or JSON)
//! - [`utils`] - Position filter, encoding helpers, configuration
//!
//! ## Quick Start
//!
//! ```no_run
//! use sacount::index::{BuildOptions, IndexReader, IndexWriter, SuffixIndex};
//! use std::path::Path;
//!
//! let index = SuffixIndex::build("magic", b"abracadabra".to_vec(), &BuildOptions::default()).unwrap();
//! assert_eq!(index.query().count(b"abra").unwrap(), 2);
//!
//! // Persist and reload without rebuilding
//! IndexWriter::write(Path::new("data"), &index).unwrap();
//! let loaded = IndexReader::open(Path::new("data"), "magic").unwrap();
//! let bigram = loaded.query().bigram_count(b"ab", b"ra").unwrap();
//! println!("{} {}", bigram.count_forward, bigram.count_back);
//! ```
//!
//! ## Construction
//!
//! 1. **Filter** - whitespace, punctuation and double-byte trail bytes are
//!    never indexed
//! 2. **Bucket pass** - 256-way counting sort on the first byte
//! 3. **Multikey quicksort** - ternary partitioning one letter at a time
//! 4. **LCP array** - common prefix lengths of sorted neighbours

pub mod index;
pub mod output;
pub mod query;
pub mod utils;
