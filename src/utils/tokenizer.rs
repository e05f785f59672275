//! Indexable position filter
//!
//! Decides which byte offsets of a corpus start an indexable word.
//! Whitespace and ASCII punctuation are skipped, and the trailing byte of a
//! double-byte character is never offered as a position of its own.

use super::encoding::Encoding;

/// Whether `byte` separates words rather than starting one
#[inline]
pub fn is_separator(byte: u8) -> bool {
    matches!(byte, b'\n' | b'\r' | b' ' | b'\t') || byte.is_ascii_punctuation()
}

/// Iterator over the indexable positions of a corpus, in corpus order
#[derive(Debug, Clone)]
pub struct IndexablePositions<'a> {
    text: &'a [u8],
    encoding: Encoding,
    pos: usize,
}

impl<'a> IndexablePositions<'a> {
    pub fn new(text: &'a [u8], encoding: Encoding) -> Self {
        Self {
            text,
            encoding,
            pos: 0,
        }
    }
}

impl Iterator for IndexablePositions<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.pos < self.text.len() {
            let start = self.pos;
            let byte = self.text[start];
            self.pos += 1;

            if is_separator(byte) {
                continue;
            }

            // Swallow the trailing byte of a double-byte character
            if self.encoding.is_lead_byte(byte) {
                self.pos += 1;
            }
            return Some(start);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.text.len().saturating_sub(self.pos)))
    }
}

/// Convenience wrapper returning an iterator over indexable positions
pub fn indexable_positions(text: &[u8], encoding: Encoding) -> IndexablePositions<'_> {
    IndexablePositions::new(text, encoding)
}
