//! Fuzz harness for character and word truncation

#![no_main]

use libfuzzer_sys::fuzz_target;
use stringtools_whitespace::{truncate_characters, truncate_words};

fuzz_target!(|data: &[u8]| {
    let Some((&length, rest)) = data.split_first() else {
        return;
    };
    let Ok(input) = std::str::from_utf8(rest) else {
        return;
    };
    let length = usize::from(length);

    let cut = truncate_characters(input, length, "", false);
    assert!(cut.chars().count() <= length);

    let trimmed = truncate_characters(input, length, "…", true);
    assert!(trimmed.chars().count() <= length + 1);

    let _ = truncate_words(input, length % 16, "...");
});
