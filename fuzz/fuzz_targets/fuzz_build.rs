#![no_main]

use libfuzzer_sys::fuzz_target;
use sacount::index::BuildOptions;
use sacount::index::suffix_array::{common_prefix_length, compare_keys, SuffixIndex};
use std::cmp::Ordering;

fuzz_target!(|data: &[u8]| {
    // Construction must never panic, and the result must be sorted with a matching LCP array
    let Ok(index) = SuffixIndex::build("fuzz", data.to_vec(), &BuildOptions::default()) else {
        return;
    };
    let text = index.text();
    let suffixes = index.suffixes();
    let lcp = index.lcp();

    for i in 1..suffixes.len() {
        assert_ne!(
            compare_keys(text, suffixes[i - 1], suffixes[i], 0),
            Ordering::Greater
        );
        assert_eq!(
            lcp[i - 1] as usize,
            common_prefix_length(text, suffixes[i - 1], suffixes[i])
        );
    }
    if let Some(&last) = lcp.last() {
        assert_eq!(last, 0);
    }
});
