//! Multikey quicksort over corpus positions
//!
//! Sorts keys one letter at a time with three-way partitioning, so shared
//! prefixes are only inspected once per partition level. Runs of keys that
//! are equal all the way to the terminator are reported to a
//! [`DuplicateHandler`], which may stop the sort by returning `false`.
//!
//! Stack depth stays logarithmic: of the three zones produced by a partition
//! the two smaller ones are handled by recursion and the loop continues into
//! the largest.

use super::comparator::{compare_keys, letter};
use crate::index::types::{TERMINATOR, TextPosition};
use std::cmp::Ordering;

/// Ranges at or below this size are finished with insertion sort
pub const INSERTION_SORT_THRESHOLD: usize = 10;

/// Receives runs of keys that compare equal up to the terminator
pub trait DuplicateHandler {
    /// Handle one run; return `false` to abort the sort
    fn handle(&mut self, keys: &[TextPosition]) -> bool;
}

/// Handler that accepts every run
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreDuplicates;

impl DuplicateHandler for IgnoreDuplicates {
    #[inline]
    fn handle(&mut self, _keys: &[TextPosition]) -> bool {
        true
    }
}

impl<F> DuplicateHandler for F
where
    F: FnMut(&[TextPosition]) -> bool,
{
    #[inline]
    fn handle(&mut self, keys: &[TextPosition]) -> bool {
        self(keys)
    }
}

/// Sort `keys` into suffix order, comparing letters from `depth` on
///
/// Returns `false` if the handler aborted; the order of `keys` is then
/// unspecified.
pub fn multikey_sort<H: DuplicateHandler + ?Sized>(
    text: &[u8],
    keys: &mut [TextPosition],
    depth: usize,
    handler: &mut H,
) -> bool {
    sort_range(text, keys, 0, keys.len(), depth, handler)
}

/// Median of three letters
#[inline]
fn median_of_three(l: u8, m: u8, r: u8) -> u8 {
    if l < m {
        if m < r {
            m
        } else if l < r {
            r
        } else {
            l
        }
    } else if l < r {
        l
    } else if m < r {
        r
    } else {
        m
    }
}

fn sort_range<H: DuplicateHandler + ?Sized>(
    text: &[u8],
    keys: &mut [TextPosition],
    mut l: usize,
    mut r: usize,
    mut depth: usize,
    handler: &mut H,
) -> bool {
    while r - l > INSERTION_SORT_THRESHOLD {
        let pivot = median_of_three(
            letter(text, keys[l], depth),
            letter(text, keys[l + (r - l) / 2], depth),
            letter(text, keys[r - 1], depth),
        );

        // Equal keys are parked at both ends and swapped into the middle
        // once the less/greater split is known.
        let (mut pl, mut pr) = (l, r);
        let (mut pivot_l, mut pivot_r) = (l, r);
        loop {
            while pl < pr {
                let c = letter(text, keys[pl], depth);
                if c > pivot {
                    break;
                }
                if c == pivot {
                    keys.swap(pl, pivot_l);
                    pivot_l += 1;
                }
                pl += 1;
            }
            while pl < pr {
                pr -= 1;
                let c = letter(text, keys[pr], depth);
                if c < pivot {
                    break;
                }
                if c == pivot {
                    pivot_r -= 1;
                    keys.swap(pr, pivot_r);
                }
            }
            if pl >= pr {
                break;
            }
            keys.swap(pl, pr);
            pl += 1;
        }
        while pivot_l > l {
            pivot_l -= 1;
            pl -= 1;
            keys.swap(pivot_l, pl);
        }
        while pivot_r < r {
            keys.swap(pivot_r, pr);
            pivot_r += 1;
            pr += 1;
        }

        // [l, pl) < pivot, [pl, pr) == pivot, [pr, r) > pivot
        let less = pl - l;
        let equal = pr - pl;
        let greater = r - pr;

        if less > equal || greater > equal {
            if equal > 1 && !sort_equal_zone(text, keys, pl, pr, pivot, depth, handler) {
                return false;
            }
            if less < greater {
                if less > 1 && !sort_range(text, keys, l, pl, depth, handler) {
                    return false;
                }
                l = pr;
            } else {
                if greater > 1 && !sort_range(text, keys, pr, r, depth, handler) {
                    return false;
                }
                r = pl;
            }
        } else {
            if less > 1 && !sort_range(text, keys, l, pl, depth, handler) {
                return false;
            }
            if greater > 1 && !sort_range(text, keys, pr, r, depth, handler) {
                return false;
            }
            l = pl;
            r = pr;
            if equal > 1 {
                if pivot != TERMINATOR {
                    depth += 1;
                } else {
                    if !handler.handle(&keys[pl..pr]) {
                        return false;
                    }
                    l = r;
                }
            }
        }
    }

    if r - l > 1 {
        return insertion_sort(text, keys, l, r, depth, handler);
    }
    true
}

/// Resolve the zone whose keys all share the pivot letter
fn sort_equal_zone<H: DuplicateHandler + ?Sized>(
    text: &[u8],
    keys: &mut [TextPosition],
    pl: usize,
    pr: usize,
    pivot: u8,
    depth: usize,
    handler: &mut H,
) -> bool {
    if pivot != TERMINATOR {
        sort_range(text, keys, pl, pr, depth + 1, handler)
    } else {
        handler.handle(&keys[pl..pr])
    }
}

fn insertion_sort<H: DuplicateHandler + ?Sized>(
    text: &[u8],
    keys: &mut [TextPosition],
    l: usize,
    r: usize,
    depth: usize,
    handler: &mut H,
) -> bool {
    let mut saw_equal = false;
    for i in l + 1..r {
        let mut j = i;
        while j > l {
            let ord = compare_keys(text, keys[j - 1], keys[j], depth);
            saw_equal |= ord == Ordering::Equal;
            if ord != Ordering::Greater {
                break;
            }
            keys.swap(j - 1, j);
            j -= 1;
        }
    }

    if saw_equal {
        return report_equal_runs(text, &keys[l..r], depth, handler);
    }
    true
}

/// Call the handler for every run of equal keys in a sorted slice
fn report_equal_runs<H: DuplicateHandler + ?Sized>(
    text: &[u8],
    keys: &[TextPosition],
    depth: usize,
    handler: &mut H,
) -> bool {
    let mut start = 0;
    for i in 1..keys.len() {
        if compare_keys(text, keys[start], keys[i], depth) != Ordering::Equal {
            if i - start > 1 && !handler.handle(&keys[start..i]) {
                return false;
            }
            start = i;
        }
    }
    if keys.len() - start > 1 {
        return handler.handle(&keys[start..]);
    }
    true
}
