use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::MarkupCodec;

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:#([0-9]{1,7})|#[xX]([0-9a-fA-F]{1,6})|([A-Za-z][A-Za-z0-9]{1,31}));")
        .expect("ENTITY regex should compile")
});
static HIDDEN_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>|<!--.*?-->")
        .expect("HIDDEN_BLOCK regex should compile")
});
static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"</?[A-Za-z][^>]*>|<![^>]*>").expect("TAG regex should compile")
});

/// Named entities understood by [`HtmlEntityCodec::decode_entities`].
const NAMED_ENTITIES: &[(&str, char)] = &[
    ("amp", '&'),
    ("lt", '<'),
    ("gt", '>'),
    ("quot", '"'),
    ("apos", '\''),
    ("nbsp", '\u{a0}'),
    ("copy", '©'),
    ("reg", '®'),
    ("trade", '™'),
    ("hellip", '…'),
    ("mdash", '—'),
    ("ndash", '–'),
    ("lsquo", '‘'),
    ("rsquo", '’'),
    ("ldquo", '“'),
    ("rdquo", '”'),
    ("laquo", '«'),
    ("raquo", '»'),
    ("bull", '•'),
    ("middot", '·'),
    ("deg", '°'),
    ("times", '×'),
    ("divide", '÷'),
    ("sect", '§'),
    ("para", '¶'),
    ("cent", '¢'),
    ("pound", '£'),
    ("yen", '¥'),
    ("euro", '€'),
];

/// Regex-based HTML entity codec.
///
/// Not an HTML parser: tags are recognised lexically, which is enough for
/// stripping markup from snippets but not for sanitizing untrusted documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEntityCodec;

impl MarkupCodec for HtmlEntityCodec {
    fn encode_entities(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => result.push_str("&amp;"),
                '<' => result.push_str("&lt;"),
                '>' => result.push_str("&gt;"),
                '"' => result.push_str("&quot;"),
                '\'' => result.push_str("&#39;"),
                _ => result.push(c),
            }
        }
        result
    }

    fn decode_entities(&self, text: &str) -> String {
        ENTITY
            .replace_all(text, |caps: &Captures<'_>| {
                resolve(caps).map_or_else(|| caps[0].to_string(), String::from)
            })
            .into_owned()
    }

    fn strip_tags(&self, text: &str) -> String {
        let visible = HIDDEN_BLOCK.replace_all(text, "");
        let bare = TAG.replace_all(&visible, "");
        self.decode_entities(&bare)
    }
}

/// The character an entity stands for, or `None` to leave it untouched.
/// Only unknown names are left as written.
fn resolve(caps: &Captures<'_>) -> Option<char> {
    if let Some(dec) = caps.get(1) {
        return Some(code_point(dec.as_str().parse().ok()?));
    }
    if let Some(hex) = caps.get(2) {
        return Some(code_point(u32::from_str_radix(hex.as_str(), 16).ok()?));
    }
    let name = caps.get(3)?.as_str();
    NAMED_ENTITIES
        .iter()
        .find(|(entity, _)| *entity == name)
        .map(|(_, c)| *c)
}

/// NUL, surrogates and values past U+10FFFF decode to U+FFFD.
fn code_point(value: u32) -> char {
    match char::from_u32(value) {
        Some('\0') | None => char::REPLACEMENT_CHARACTER,
        Some(c) => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_escapes_markup_characters() {
        let codec = HtmlEntityCodec;
        assert_eq!(
            codec.encode_entities(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(codec.encode_entities("plain"), "plain");
    }

    #[test]
    fn decode_named_and_numeric() {
        let codec = HtmlEntityCodec;
        assert_eq!(codec.decode_entities("&lt;p&gt; &amp; &quot;"), "<p> & \"");
        assert_eq!(codec.decode_entities("&#169; &#xA9; &#XA9;"), "© © ©");
        assert_eq!(codec.decode_entities("caf&eacute;&nbsp;&euro;"), "caf&eacute;\u{a0}€");
        assert_eq!(codec.decode_entities("&#0;"), "\u{fffd}");
    }

    #[test]
    fn decode_unrepresentable_numbers_to_replacement() {
        let codec = HtmlEntityCodec;
        assert_eq!(codec.decode_entities("&#55296;"), "\u{fffd}");
        assert_eq!(codec.decode_entities("&#xD800;"), "\u{fffd}");
        assert_eq!(codec.decode_entities("&#1114112;"), "\u{fffd}");
        assert_eq!(codec.decode_entities("&#x110000;"), "\u{fffd}");
        assert_eq!(codec.decode_entities("a&#9999999;b"), "a\u{fffd}b");
    }

    #[test]
    fn decode_leaves_invalid_references() {
        let codec = HtmlEntityCodec;
        assert_eq!(codec.decode_entities("AT&T"), "AT&T");
        assert_eq!(codec.decode_entities("&unknown;"), "&unknown;");
    }

    #[test]
    fn decode_is_single_pass() {
        let codec = HtmlEntityCodec;
        assert_eq!(codec.decode_entities("&amp;lt;"), "&lt;");
    }

    #[test]
    fn strip_tags_keeps_text() {
        let codec = HtmlEntityCodec;
        assert_eq!(codec.strip_tags("<p>Hello <b>World</b></p>"), "Hello World");
        assert_eq!(codec.strip_tags("<br/>a<BR>b"), "ab");
        assert_eq!(codec.strip_tags("1 < 2 and 3 > 2"), "1 < 2 and 3 > 2");
    }

    #[test]
    fn strip_tags_drops_hidden_content() {
        let codec = HtmlEntityCodec;
        let html = "<style>p{}</style><!-- note --><p>Tom &amp; Jerry</p><script>alert(1)</script>";
        insta::assert_snapshot!(codec.strip_tags(html), @"Tom & Jerry");
    }
}
