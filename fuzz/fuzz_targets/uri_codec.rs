//! Fuzz harness for the percent URI codec

#![no_main]

use libfuzzer_sys::fuzz_target;
use stringtools_codec::{PercentUriCodec, UriCodec};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let codec = PercentUriCodec;

    let encoded = codec.encode(input);
    assert!(encoded.is_ascii());
    assert_eq!(codec.decode(&encoded).ok().as_deref(), Some(input));

    // Malformed escapes are errors, never panics
    let _ = codec.decode(input);
});
