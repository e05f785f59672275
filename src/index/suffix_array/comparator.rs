//! Key comparison over corpus positions
//!
//! A key is a corpus offset; its letters are the corpus bytes from that
//! offset on. Reading past the end of the corpus yields the terminator, so a
//! suffix behaves as if it were NUL-terminated.

use crate::index::types::{TERMINATOR, TextPosition};
use std::cmp::Ordering;

/// Letter of the key at `pos`, `depth` bytes in
#[inline]
pub fn letter(text: &[u8], pos: TextPosition, depth: usize) -> u8 {
    text.get(pos as usize + depth).copied().unwrap_or(TERMINATOR)
}

/// Compare two keys starting at `depth`
///
/// Stops at the first mismatch or when the left key reaches the terminator.
#[inline]
pub fn compare_keys(text: &[u8], a: TextPosition, b: TextPosition, mut depth: usize) -> Ordering {
    loop {
        let l = letter(text, a, depth);
        let r = letter(text, b, depth);
        if l != r {
            return l.cmp(&r);
        }
        if l == TERMINATOR {
            return Ordering::Equal;
        }
        depth += 1;
    }
}

/// Compare `query` with the key at `pos`, starting `offset` bytes in
///
/// Only `query.len()` letters take part, so a key that begins with the query
/// compares equal.
#[inline]
pub fn compare_prefix(text: &[u8], query: &[u8], pos: TextPosition, offset: usize) -> Ordering {
    for (i, &q) in query.iter().enumerate() {
        let t = letter(text, pos, offset + i);
        if q != t {
            return q.cmp(&t);
        }
        if q == TERMINATOR {
            break;
        }
    }
    Ordering::Equal
}

/// Number of leading bytes the suffixes at `a` and `b` share
///
/// Each suffix is bounded by its own remaining length.
pub fn common_prefix_length(text: &[u8], a: TextPosition, b: TextPosition) -> usize {
    let sa = text.get(a as usize..).unwrap_or(&[]);
    let sb = text.get(b as usize..).unwrap_or(&[]);
    sa.iter().zip(sb).take_while(|(x, y)| x == y).count()
}
