#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sacount::index::{BuildOptions, SuffixIndex};
use sacount::utils::Encoding;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    corpus: &'a [u8],
    first: &'a [u8],
    second: &'a [u8],
}

fuzz_target!(|input: Input| {
    // Counts from the index must agree with each other and never panic
    let options = BuildOptions {
        encoding: Encoding::SingleByte,
        ..BuildOptions::default()
    };
    let Ok(index) = SuffixIndex::build("fuzz", input.corpus.to_vec(), &options) else {
        return;
    };
    let engine = index.query();

    if let Ok(result) = engine.bigram_count(input.first, input.second) {
        assert!(result.count_back <= result.count_forward);
        let mut joined = input.first.to_vec();
        joined.extend_from_slice(input.second);
        assert_eq!(engine.count(&joined).ok(), Some(result.count_back));
    }
});
