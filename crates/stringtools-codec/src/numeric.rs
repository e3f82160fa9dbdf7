use std::sync::LazyLock;

use regex::{Captures, Regex};

static DECIMAL_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#([0-9]{1,7});").expect("DECIMAL_REFERENCE regex should compile"));

/// Turns Latin-1 Supplement through Latin Extended-B (U+0080..=U+024F) into
/// decimal character references. Everything else passes through.
pub fn encode_special_characters(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        if ('\u{80}'..='\u{24f}').contains(&c) {
            result.push_str(&format!("&#{};", c as u32));
        } else {
            result.push(c);
        }
    }
    result
}

/// Resolves every decimal character reference. Values that are not Unicode
/// scalar values are left as written.
pub fn decode_special_characters(text: &str) -> String {
    DECIMAL_REFERENCE
        .replace_all(text, |caps: &Captures<'_>| {
            caps[1]
                .parse::<u32>()
                .ok()
                .and_then(char::from_u32)
                .map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_only_touches_latin_range() {
        assert_eq!(encode_special_characters("café"), "caf&#233;");
        assert_eq!(encode_special_characters("Ǆ ok €"), "&#452; ok €");
        assert_eq!(encode_special_characters("plain"), "plain");
    }

    #[test]
    fn decode_resolves_any_scalar() {
        assert_eq!(decode_special_characters("caf&#233;"), "café");
        assert_eq!(decode_special_characters("&#8364;"), "€");
        assert_eq!(decode_special_characters("&#55296;"), "&#55296;");
        assert_eq!(decode_special_characters("&#xE9;"), "&#xE9;");
    }
}
