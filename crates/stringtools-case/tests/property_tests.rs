//! Property tests for stringtools-case

use proptest::prelude::*;
use stringtools_case::{
    DEFAULT_STOP_WORDS, camel_case, capitalize, heading_case, lower_case, pascal_case, upper_case,
};

proptest! {
    /// Lower-casing twice is the same as lower-casing once
    #[test]
    fn prop_lower_case_idempotent(input in "[a-zA-ZÀ-ÿ0-9 ]{0,60}") {
        let once = lower_case(&input);
        prop_assert_eq!(lower_case(&once), once);
    }

    /// Upper-casing twice is the same as upper-casing once
    #[test]
    fn prop_upper_case_idempotent(input in "[a-zA-Z0-9 ]{0,60}") {
        let once = upper_case(&input);
        prop_assert_eq!(upper_case(&once), once);
    }

    /// camelCase output is ASCII letters only and starts lower case
    #[test]
    fn prop_camel_case_shape(input in "\\PC{0,60}") {
        let out = camel_case(&input);
        prop_assert!(out.chars().all(|c| c.is_ascii_alphabetic()));
        if let Some(first) = out.chars().next() {
            prop_assert!(first.is_ascii_lowercase());
        }
    }

    /// PascalCase differs from camelCase only in its first character
    #[test]
    fn prop_pascal_case_matches_camel(input in "[a-zA-Z ]{0,60}") {
        let camel = camel_case(&input);
        let pascal = pascal_case(&input);
        prop_assert_eq!(pascal.to_lowercase(), camel.to_lowercase());
        prop_assert_eq!(pascal.chars().skip(1).collect::<String>(), camel.chars().skip(1).collect::<String>());
    }

    /// Capitalize never changes the character count for ASCII input
    #[test]
    fn prop_capitalize_preserves_length(input in "[a-zA-Z ]{0,40}") {
        prop_assert_eq!(capitalize(&input, false).len(), input.len());
        prop_assert_eq!(capitalize(&input, true).len(), input.len());
    }

    /// The first word of a heading is always capitalized
    #[test]
    fn prop_heading_first_word_capitalized(words in proptest::collection::vec("[a-z]{1,8}", 1..8)) {
        let heading = heading_case(&words.join(" "), false, DEFAULT_STOP_WORDS);
        let first = heading.chars().next().unwrap();
        prop_assert!(first.is_ascii_uppercase());
        prop_assert_eq!(heading.split(' ').count(), words.len());
    }
}
