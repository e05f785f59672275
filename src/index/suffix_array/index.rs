//! Owning suffix index
//!
//! A [`SuffixIndex`] holds the corpus, its sorted suffix array and the LCP
//! array together. All three are created by one build or one load and never
//! change afterwards, so a built index can be shared freely between threads.

use super::builder::build_suffix_array;
use super::lcp::build_lcp;
use crate::index::error::{IndexError, Result};
use crate::index::types::{BuildOptions, LcpValue, TextPosition, validate_name};
use log::info;
use std::time::Instant;

/// A named, immutable suffix index over a byte corpus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixIndex {
    name: String,
    text: Vec<u8>,
    suffixes: Vec<TextPosition>,
    lcp: Vec<LcpValue>,
}

impl SuffixIndex {
    /// Build an index over `text`
    pub fn build(name: &str, text: Vec<u8>, options: &BuildOptions) -> Result<Self> {
        validate_name(name)?;

        let start = Instant::now();
        let suffixes = build_suffix_array(&text, options)?;
        info!(
            "Sorted {} suffixes of '{}' in {:.2?}",
            suffixes.len(),
            name,
            start.elapsed()
        );

        let lcp = build_lcp(&text, &suffixes)?;
        info!("LCP array of '{}' built", name);

        Ok(Self {
            name: name.to_string(),
            text,
            suffixes,
            lcp,
        })
    }

    /// Reassemble an index from previously built arrays
    ///
    /// The arrays are trusted to be sorted; only their shapes are checked.
    pub fn from_parts(
        name: &str,
        text: Vec<u8>,
        suffixes: Vec<TextPosition>,
        lcp: Vec<LcpValue>,
    ) -> Result<Self> {
        validate_name(name)?;

        if suffixes.len() != lcp.len() {
            return Err(IndexError::corrupt(
                name,
                format!(
                    "{} suffixes but {} LCP values",
                    suffixes.len(),
                    lcp.len()
                ),
            ));
        }
        if suffixes.len() > text.len() {
            return Err(IndexError::corrupt(
                name,
                format!(
                    "{} suffixes for a corpus of {} bytes",
                    suffixes.len(),
                    text.len()
                ),
            ));
        }
        if let Some(&pos) = suffixes.iter().find(|&&p| p as usize >= text.len()) {
            return Err(IndexError::corrupt(
                name,
                format!("suffix offset {} is outside the corpus", pos),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            text,
            suffixes,
            lcp,
        })
    }

    /// Index name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Corpus bytes
    #[inline]
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// Sorted suffix offsets
    #[inline]
    pub fn suffixes(&self) -> &[TextPosition] {
        &self.suffixes
    }

    /// LCP values aligned with [`Self::suffixes`]
    #[inline]
    pub fn lcp(&self) -> &[LcpValue] {
        &self.lcp
    }

    /// Number of indexed suffixes
    #[inline]
    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    /// Whether no position was indexed
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }
}
