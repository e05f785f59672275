//! Index construction and storage.
//!
//! - [`suffix_array`] - Sorting, LCP computation and the owning [`SuffixIndex`]
//! - [`writer`] / [`reader`] - The three-file on-disk layout
//! - [`build`] - Corpus file to stored index, with progress reporting
//! - [`stats`] - Index statistics and listings

pub mod build;
pub mod error;
pub mod reader;
pub mod stats;
pub mod suffix_array;
pub mod types;
pub mod writer;

pub use error::IndexError;
pub use reader::IndexReader;
pub use suffix_array::SuffixIndex;
pub use types::*;
pub use writer::IndexWriter;
