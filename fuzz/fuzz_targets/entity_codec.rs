//! Fuzz harness for the markup entity codec

#![no_main]

use libfuzzer_sys::fuzz_target;
use stringtools_codec::{HtmlEntityCodec, MarkupCodec, decode_special_characters};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let codec = HtmlEntityCodec;

    assert_eq!(codec.decode_entities(&codec.encode_entities(input)), input);

    // Arbitrary markup must not panic
    let _ = codec.strip_tags(input);
    let _ = codec.decode_entities(input);
    let _ = decode_special_characters(input);
});
