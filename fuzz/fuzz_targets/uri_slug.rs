//! Fuzz harness for slug generation

#![no_main]

use libfuzzer_sys::fuzz_target;
use stringtools_filter::{DEFAULT_SLUG_DELIMITER, to_number, uri_slug};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let slug = uri_slug(input, DEFAULT_SLUG_DELIMITER);
    assert!(
        slug.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    );

    let n = to_number(input);
    assert!(n.is_nan() || n >= 0.0);
});
