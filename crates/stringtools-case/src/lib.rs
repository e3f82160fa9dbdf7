//! Case conversion for stringtools.
//!
//! All conversions use Rust's locale-unaware Unicode case mapping. The
//! identifier-style conversions ([`camel_case`], [`pascal_case`]) only keep
//! ASCII letters, so their output is always a valid ASCII identifier or empty.

use stringtools_words::split_words;

/// Words left lower-case by [`heading_case`] unless they open the heading.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "and", "as", "at", "but", "by", "etc", "for", "if", "in", "into", "is", "nor", "of", "on",
    "onto", "or", "so", "the", "to",
];

/// Converts the entire string to lower case
pub fn lower_case(input: &str) -> String {
    input.to_lowercase()
}

/// Converts the entire string to upper case
pub fn upper_case(input: &str) -> String {
    input.to_uppercase()
}

/// Upper-cases the first character.
///
/// With `start_lower_case` the remainder is lower-cased first, otherwise it is
/// left untouched. Empty input comes back empty.
pub fn capitalize(input: &str, start_lower_case: bool) -> String {
    let mut chars = input.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut result = String::with_capacity(input.len());
    result.extend(first.to_uppercase());
    if start_lower_case {
        result.push_str(&chars.as_str().to_lowercase());
    } else {
        result.push_str(chars.as_str());
    }
    result
}

/// Converts to camelCase: `"Hello World"` becomes `"helloWorld"`.
///
/// Everything except ASCII letters and spaces is dropped, so digits and
/// punctuation never survive. The first word is always lower case.
pub fn camel_case(input: &str) -> String {
    let letters: String = input
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .collect();

    let mut result = String::with_capacity(letters.len());
    for (i, word) in split_words(&letters).iter().enumerate() {
        if i == 0 {
            result.push_str(word);
        } else {
            result.push_str(&capitalize(word, false));
        }
    }
    result
}

/// Converts to PascalCase: `"hello world"` becomes `"HelloWorld"`.
pub fn pascal_case(input: &str) -> String {
    capitalize(&camel_case(input), false)
}

/// Title-cases a heading, leaving `ignored_words` alone unless they come first.
///
/// ```
/// use stringtools_case::{heading_case, DEFAULT_STOP_WORDS};
///
/// assert_eq!(heading_case("the cat in the hat", false, DEFAULT_STOP_WORDS), "The Cat in the Hat");
/// ```
pub fn heading_case(input: &str, start_lower_case: bool, ignored_words: &[&str]) -> String {
    split_words(input)
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i != 0 && ignored_words.contains(&word.as_str()) {
                word.clone()
            } else {
                capitalize(word, start_lower_case)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Options for [`pluralize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluralizeOptions<'a> {
    pub postfix: &'a str,
    /// Drop the final character before appending, e.g. `y` for `ies`.
    pub remove_last_character: bool,
    /// The count at which the word stays singular.
    pub trigger: i64,
}

impl Default for PluralizeOptions<'_> {
    fn default() -> Self {
        Self {
            postfix: "s",
            remove_last_character: false,
            trigger: 1,
        }
    }
}

impl<'a> PluralizeOptions<'a> {
    pub fn with_postfix(postfix: &'a str, remove_last_character: bool) -> Self {
        Self {
            postfix,
            remove_last_character,
            ..Self::default()
        }
    }
}

/// Appends a plural postfix unless `count` equals the trigger.
pub fn pluralize(input: &str, count: i64, options: &PluralizeOptions<'_>) -> String {
    if count == options.trigger {
        return input.to_string();
    }

    let stem = if options.remove_last_character {
        let mut chars = input.chars();
        chars.next_back();
        chars.as_str()
    } else {
        input
    };
    format!("{stem}{}", options.postfix)
}

/// Applies `transform` only when `condition` holds.
pub fn when<F>(input: &str, condition: bool, transform: F) -> String
where
    F: FnOnce(&str) -> String,
{
    if condition { transform(input) } else { input.to_string() }
}

/// Applies `then` or `otherwise` depending on `condition`.
pub fn when_else<T, E>(input: &str, condition: bool, then: T, otherwise: E) -> String
where
    T: FnOnce(&str) -> String,
    E: FnOnce(&str) -> String,
{
    if condition { then(input) } else { otherwise(input) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_upper() {
        assert_eq!(lower_case("HeLLo"), "hello");
        assert_eq!(upper_case("straße"), "STRASSE");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("abc", false), "Abc");
        assert_eq!(capitalize("", false), "");
        assert_eq!(capitalize("aBC", false), "ABC");
        assert_eq!(capitalize("aBC", true), "Abc");
        assert_eq!(capitalize("éclair", false), "Éclair");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("Hello World"), "helloWorld");
        assert_eq!(camel_case("  the QUICK brown  fox "), "theQuickBrownFox");
        assert_eq!(camel_case("hello-world 2day"), "helloworldDay");
        assert_eq!(camel_case(""), "");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("hello world"), "HelloWorld");
        assert_eq!(pascal_case("Pascal case is awesome"), "PascalCaseIsAwesome");
        assert_eq!(pascal_case("!!!"), "");
    }

    #[test]
    fn test_heading_case() {
        assert_eq!(heading_case("the cat in the hat", false, DEFAULT_STOP_WORDS), "The Cat in the Hat");
        assert_eq!(heading_case("  a tale   of two cities ", false, DEFAULT_STOP_WORDS), "A Tale of Two Cities");
    }

    #[test]
    fn test_heading_case_start_lower_case() {
        insta::assert_snapshot!(
            heading_case("WAR AND PEACE", true, DEFAULT_STOP_WORDS),
            @"War And Peace"
        );
        assert_eq!(heading_case("war and peace", true, DEFAULT_STOP_WORDS), "War and Peace");
    }

    #[test]
    fn test_heading_case_custom_stop_words() {
        assert_eq!(heading_case("lord of the rings", false, &["of"]), "Lord of The Rings");
        assert_eq!(heading_case("lord of the rings", false, &[]), "Lord Of The Rings");
    }

    #[test]
    fn test_pluralize() {
        let defaults = PluralizeOptions::default();
        assert_eq!(pluralize("cat", 2, &defaults), "cats");
        assert_eq!(pluralize("cat", 1, &defaults), "cat");
        assert_eq!(pluralize("cat", 0, &defaults), "cats");
        assert_eq!(pluralize("category", 2, &PluralizeOptions::with_postfix("ies", true)), "categories");
        assert_eq!(pluralize("category", 1, &PluralizeOptions::with_postfix("ies", true)), "category");
    }

    #[test]
    fn test_pluralize_custom_trigger() {
        let opts = PluralizeOptions { trigger: 0, ..PluralizeOptions::default() };
        assert_eq!(pluralize("item", 0, &opts), "item");
        assert_eq!(pluralize("item", 1, &opts), "items");
    }

    #[test]
    fn test_when() {
        assert_eq!(when("abc", true, upper_case), "ABC");
        assert_eq!(when("abc", false, upper_case), "abc");
        assert_eq!(when_else("Abc", false, upper_case, lower_case), "abc");
        assert_eq!(when_else("Abc", true, upper_case, lower_case), "ABC");
    }
}
