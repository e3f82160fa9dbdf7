//! Character filtering and slugging for stringtools.

use regex::{Regex, RegexBuilder};
use stringtools_error::{Result, invalid_argument};
use stringtools_whitespace::remove_whitespace;

/// Default delimiter used by [`uri_slug`].
pub const DEFAULT_SLUG_DELIMITER: &str = "-";

/// Compiles a negated character class from the body of `[...]`.
///
/// `"a-z0-9"` compiles to `[^a-z0-9]`, which matches everything that should
/// be removed.
pub fn compile_reject_class(class: &str, case_sensitive: bool) -> Result<Regex> {
    RegexBuilder::new(&format!("[^{class}]"))
        .case_insensitive(!case_sensitive)
        .build()
        .map_err(|e| {
            invalid_argument("invalid character class")
                .caused_by(e)
                .with_context("class", class)
        })
}

/// Keeps only the characters matched by the character class `class`.
///
/// ```
/// use stringtools_filter::only;
///
/// assert_eq!(only("abc-123", "a-z", true).unwrap(), "abc");
/// assert!(only("abc", "z-a", true).is_err());
/// ```
pub fn only(input: &str, class: &str, case_sensitive: bool) -> Result<String> {
    let reject = compile_reject_class(class, case_sensitive)?;
    Ok(reject.replace_all(input, "").into_owned())
}

/// Keeps ASCII letters of either case plus anything in `extra`.
pub fn only_letters(input: &str, extra: &[char]) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || extra.contains(c))
        .collect()
}

/// Keeps ASCII digits plus anything in `extra`, e.g. `.` for decimals.
pub fn only_numbers(input: &str, extra: &[char]) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || extra.contains(c))
        .collect()
}

/// Builds a lowercase slug whose words are joined by `delimiter`.
///
/// Anything that is not `a-z`, `0-9`, `-` or whitespace is dropped before the
/// words are joined, so punctuation disappears instead of turning into a
/// delimiter.
///
/// ```
/// use stringtools_filter::uri_slug;
///
/// assert_eq!(uri_slug("Hello, World!", "-"), "hello-world");
/// ```
pub fn uri_slug(input: &str, delimiter: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let kept: String = input
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || c.is_whitespace())
        .collect();
    remove_whitespace(kept.trim(), delimiter)
}

/// Alias for [`uri_slug`].
pub fn url_slug(input: &str, delimiter: &str) -> String {
    uri_slug(input, delimiter)
}

/// Extracts a number from free text.
///
/// Every character other than a digit or `.` is discarded, then the longest
/// leading `digits[.digits]` run is parsed. Signs are discarded too, so
/// `"-3"` reads as `3`. Returns `NaN` when no digit is left; check with
/// [`f64::is_nan`].
pub fn to_number(input: &str) -> f64 {
    let kept = only_numbers(input, &['.']);
    let prefix = float_prefix(&kept);
    if prefix.is_empty() {
        return f64::NAN;
    }
    prefix.parse().unwrap_or(f64::NAN)
}

/// The longest prefix of the form `digits[.digits]` containing at least one digit.
fn float_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }

    if seen_digit { &s[..end] } else { "" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only() {
        assert_eq!(only("abc-123", "a-z", true).unwrap(), "abc");
        assert_eq!(only("aBc-123", "a-z", true).unwrap(), "ac");
        assert_eq!(only("aBc-123", "a-z", false).unwrap(), "aBc");
        assert_eq!(only("a.b,c", "a-z.", true).unwrap(), "a.bc");
    }

    #[test]
    fn test_only_invalid_class() {
        let err = only("abc", "z-a", true).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err.context(), &[("class".to_string(), "z-a".to_string())]);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_only_letters() {
        assert_eq!(only_letters("Hello, World 42!", &[]), "HelloWorld");
        assert_eq!(only_letters("Hello, World 42!", &[' ']), "Hello World ");
        assert_eq!(only_letters("héllo", &[]), "hllo");
    }

    #[test]
    fn test_only_numbers() {
        assert_eq!(only_numbers("$1,234.50", &[]), "123450");
        assert_eq!(only_numbers("$1,234.50", &['.']), "1234.50");
        assert_eq!(only_numbers("-12.5", &['.', '-']), "-12.5");
    }

    #[test]
    fn test_uri_slug() {
        assert_eq!(uri_slug("Hello, World!", DEFAULT_SLUG_DELIMITER), "hello-world");
        assert_eq!(uri_slug("  Rust   is   fun  ", "_"), "rust_is_fun");
        assert_eq!(uri_slug("already-slugged", "-"), "already-slugged");
        assert_eq!(uri_slug("", "-"), "");
        assert_eq!(uri_slug("Crème brûlée 2024", "-"), "crme-brle-2024");
        assert_eq!(url_slug("A B", "+"), "a+b");
    }

    #[test]
    fn test_to_number() {
        assert_eq!(to_number("42"), 42.0);
        assert_eq!(to_number("$1,234.50"), 1234.5);
        assert_eq!(to_number("v1.2.3"), 1.2);
        assert_eq!(to_number(".5 cups"), 0.5);
        assert_eq!(to_number("-7"), 7.0);
        assert!(to_number("").is_nan());
        assert!(to_number("abc").is_nan());
        assert!(to_number("...").is_nan());
    }

    #[test]
    fn test_float_prefix() {
        assert_eq!(float_prefix("12.5.6"), "12.5");
        assert_eq!(float_prefix("7."), "7.");
        assert_eq!(float_prefix("."), "");
    }
}
