//! Property tests for stringtools-filter

use proptest::prelude::*;
use stringtools_filter::{only, only_letters, only_numbers, to_number, uri_slug};

proptest! {
    /// Default slugs only ever contain lowercase letters, digits and hyphens
    #[test]
    fn prop_slug_charset(input in "\\PC{0,80}") {
        let slug = uri_slug(&input, "-");
        prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }

    /// Slugging a slug changes nothing
    #[test]
    fn prop_slug_idempotent(input in "\\PC{0,80}") {
        let once = uri_slug(&input, "-");
        prop_assert_eq!(uri_slug(&once, "-"), once);
    }

    /// A custom delimiter never sits at either end of the slug
    #[test]
    fn prop_slug_delimiter_not_at_ends(input in "[a-zA-Z ,!]{0,60}") {
        let slug = uri_slug(&input, "_");
        prop_assert!(!slug.starts_with('_'));
        prop_assert!(!slug.ends_with('_'));
    }

    /// only_letters and only_numbers partition the ASCII alphanumerics
    #[test]
    fn prop_letters_and_numbers(input in "[a-zA-Z0-9 .,!]{0,60}") {
        let letters = only_letters(&input, &[]);
        let numbers = only_numbers(&input, &[]);
        let alnum = input.chars().filter(|c| c.is_ascii_alphanumeric()).count();
        prop_assert_eq!(letters.len() + numbers.len(), alnum);
    }

    /// The regex filter agrees with the dedicated letter filter
    #[test]
    fn prop_only_matches_only_letters(input in "\\PC{0,60}") {
        prop_assert_eq!(only(&input, "a-zA-Z", true).unwrap(), only_letters(&input, &[]));
    }

    /// Pure digit strings read back as themselves
    #[test]
    fn prop_to_number_digits(n in 0u32..1_000_000) {
        prop_assert_eq!(to_number(&format!("about {n} items")), f64::from(n));
    }

    /// Text without digits is NaN
    #[test]
    fn prop_to_number_nan(input in "[a-z .]{0,30}") {
        prop_assert!(to_number(&input).is_nan());
    }
}
