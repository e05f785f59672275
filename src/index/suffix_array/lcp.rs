//! LCP array construction
//!
//! `lcp[i]` is the length of the common prefix of the suffixes at
//! `suffixes[i]` and `suffixes[i + 1]`; the last slot is always 0.

use super::comparator::common_prefix_length;
use crate::index::error::{Result, try_reserve};
use crate::index::types::{LcpValue, TextPosition};

/// Build the LCP array of an already sorted suffix array
pub fn build_lcp(text: &[u8], suffixes: &[TextPosition]) -> Result<Vec<LcpValue>> {
    let mut lcp = Vec::new();
    try_reserve(&mut lcp, suffixes.len(), "LCP array")?;

    lcp.extend(
        suffixes
            .windows(2)
            .map(|pair| common_prefix_length(text, pair[0], pair[1]) as LcpValue),
    );
    if !suffixes.is_empty() {
        lcp.push(0);
    }
    Ok(lcp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banana() {
        let text = b"banana";
        let sa = [5, 3, 1, 0, 4, 2];
        // a | ana | anana | banana | na | nana
        assert_eq!(build_lcp(text, &sa).unwrap(), vec![1, 3, 0, 0, 2, 0]);
    }

    #[test]
    fn test_abracadabra() {
        let text = b"abracadabra";
        let sa = [10, 7, 0, 3, 5, 8, 1, 4, 6, 9, 2];
        assert_eq!(
            build_lcp(text, &sa).unwrap(),
            vec![1, 4, 1, 1, 0, 3, 0, 0, 0, 2, 0]
        );
    }

    #[test]
    fn test_empty_and_single() {
        assert!(build_lcp(b"", &[]).unwrap().is_empty());
        assert_eq!(build_lcp(b"x", &[0]).unwrap(), vec![0]);
    }

    #[test]
    fn test_suffixes_ending_at_corpus_end() {
        let text = b"aaaa";
        let sa = [3, 2, 1, 0];
        assert_eq!(build_lcp(text, &sa).unwrap(), vec![1, 2, 3, 0]);
    }
}
