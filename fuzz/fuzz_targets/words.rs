//! Fuzz harness for the word tokenizer
//!
//! The first byte picks the separator and flags, the rest is the text.

#![no_main]

use libfuzzer_sys::fuzz_target;
use stringtools_words::{WordTransform, WordsOptions, words};

const SEPARATORS: &[&str] = &["", " ", ",", "::", "é"];

fuzz_target!(|data: &[u8]| {
    let Some((&control, rest)) = data.split_first() else {
        return;
    };
    let Ok(input) = std::str::from_utf8(rest) else {
        return;
    };

    let mut options = WordsOptions::new()
        .with_separator(SEPARATORS[usize::from(control) % SEPARATORS.len()]);
    if control & 0x80 != 0 {
        options = options.only_alphabetic();
    }
    if control & 0x40 != 0 {
        options = options.with_transform(WordTransform::Capitalize);
    }

    let tokens = words(input, &options);
    assert!(tokens.iter().all(|t| !t.is_empty()));
});
