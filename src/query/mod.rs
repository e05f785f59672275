//! Queries over a built suffix index: occurrence counts, adjacency
//! (bigram) counts, batch counting and n-gram listings.

pub mod batch;
pub mod ngram;
pub mod range;

pub use ngram::{NgramCount, gram_at};
pub use range::{BigramCount, QueryEngine, QueryRange};
