//! Fuzz harness for toolkit configuration files (stringtools.yaml / .json)

#![no_main]

use libfuzzer_sys::fuzz_target;
use stringtools_config::{ConfigFormat, parse_config};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    for format in [ConfigFormat::Yaml, ConfigFormat::Json] {
        if let Ok(config) = parse_config(input, format) {
            assert!(config.validate().is_ok());
        }
    }
});
