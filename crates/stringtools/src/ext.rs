use stringtools_case::{DEFAULT_STOP_WORDS, PluralizeOptions};
use stringtools_error::Result;
use stringtools_filter::DEFAULT_SLUG_DELIMITER;
use stringtools_words::WordsOptions;

/// Text transforms as methods on `str`.
///
/// Each method forwards to the free function of the same name, filling in
/// the defaults that function is usually called with. Reach for the free
/// function (or a [`Toolkit`](crate::Toolkit)) when a default does not fit.
pub trait StrExt {
    fn words(&self, options: &WordsOptions<'_>) -> Vec<String>;
    /// Whitespace-separated tokens.
    fn split_words(&self) -> Vec<String>;
    fn word_count(&self) -> usize;

    fn lower_case(&self) -> String;
    fn upper_case(&self) -> String;
    /// First character upper-cased, the rest left alone.
    fn capitalize(&self) -> String;
    fn camel_case(&self) -> String;
    fn pascal_case(&self) -> String;
    /// Title case with the default stop words.
    fn heading_case(&self) -> String;
    /// Appends `s` unless `count` is 1.
    fn pluralize(&self, count: i64) -> String;
    fn pluralize_with(&self, count: i64, options: &PluralizeOptions<'_>) -> String;
    fn when<F>(&self, condition: bool, transform: F) -> String
    where
        F: FnOnce(&str) -> String;
    fn when_else<T, E>(&self, condition: bool, then: T, otherwise: E) -> String
    where
        T: FnOnce(&str) -> String,
        E: FnOnce(&str) -> String;

    /// Trims first and appends nothing.
    fn truncate_characters(&self, length: usize) -> String;
    fn truncate_words(&self, word_count: usize) -> String;
    fn remove_whitespace(&self) -> String;
    /// Collapses whitespace runs to one space and trims.
    fn trim_whitespace(&self) -> String;
    /// `<br />` line breaks.
    fn nl2br(&self) -> String;
    fn show_whitespace_characters(&self) -> String;

    /// Case-sensitive character-class filter.
    fn only(&self, class: &str) -> Result<String>;
    fn only_letters(&self) -> String;
    fn only_numbers(&self) -> String;
    fn uri_slug(&self) -> String;
    fn url_slug(&self) -> String;
    fn to_number(&self) -> f64;

    fn shuffle(&self) -> String;
    fn shuffle_words(&self) -> String;
    fn shuffle_letters_in_word(&self) -> String;
    fn mix_words(&self) -> String;
    fn random_case(&self) -> String;

    fn encode_special_characters(&self) -> String;
    fn decode_special_characters(&self) -> String;
    fn byte_length(&self) -> usize;
}

impl StrExt for str {
    fn words(&self, options: &WordsOptions<'_>) -> Vec<String> {
        stringtools_words::words(self, options)
    }

    fn split_words(&self) -> Vec<String> {
        stringtools_words::split_words(self)
    }

    fn word_count(&self) -> usize {
        stringtools_words::word_count(self)
    }

    fn lower_case(&self) -> String {
        stringtools_case::lower_case(self)
    }

    fn upper_case(&self) -> String {
        stringtools_case::upper_case(self)
    }

    fn capitalize(&self) -> String {
        stringtools_case::capitalize(self, false)
    }

    fn camel_case(&self) -> String {
        stringtools_case::camel_case(self)
    }

    fn pascal_case(&self) -> String {
        stringtools_case::pascal_case(self)
    }

    fn heading_case(&self) -> String {
        stringtools_case::heading_case(self, false, DEFAULT_STOP_WORDS)
    }

    fn pluralize(&self, count: i64) -> String {
        stringtools_case::pluralize(self, count, &PluralizeOptions::default())
    }

    fn pluralize_with(&self, count: i64, options: &PluralizeOptions<'_>) -> String {
        stringtools_case::pluralize(self, count, options)
    }

    fn when<F>(&self, condition: bool, transform: F) -> String
    where
        F: FnOnce(&str) -> String,
    {
        stringtools_case::when(self, condition, transform)
    }

    fn when_else<T, E>(&self, condition: bool, then: T, otherwise: E) -> String
    where
        T: FnOnce(&str) -> String,
        E: FnOnce(&str) -> String,
    {
        stringtools_case::when_else(self, condition, then, otherwise)
    }

    fn truncate_characters(&self, length: usize) -> String {
        stringtools_whitespace::truncate_characters(self, length, "", true)
    }

    fn truncate_words(&self, word_count: usize) -> String {
        stringtools_whitespace::truncate_words(self, word_count, "")
    }

    fn remove_whitespace(&self) -> String {
        stringtools_whitespace::remove_whitespace(self, "")
    }

    fn trim_whitespace(&self) -> String {
        stringtools_whitespace::trim_whitespace(self, " ")
    }

    fn nl2br(&self) -> String {
        stringtools_whitespace::nl2br(self, true)
    }

    fn show_whitespace_characters(&self) -> String {
        stringtools_whitespace::show_whitespace_characters(self)
    }

    fn only(&self, class: &str) -> Result<String> {
        stringtools_filter::only(self, class, true)
    }

    fn only_letters(&self) -> String {
        stringtools_filter::only_letters(self, &[])
    }

    fn only_numbers(&self) -> String {
        stringtools_filter::only_numbers(self, &[])
    }

    fn uri_slug(&self) -> String {
        stringtools_filter::uri_slug(self, DEFAULT_SLUG_DELIMITER)
    }

    fn url_slug(&self) -> String {
        stringtools_filter::url_slug(self, DEFAULT_SLUG_DELIMITER)
    }

    fn to_number(&self) -> f64 {
        stringtools_filter::to_number(self)
    }

    fn shuffle(&self) -> String {
        stringtools_random::shuffle(self)
    }

    fn shuffle_words(&self) -> String {
        stringtools_random::shuffle_words(self)
    }

    fn shuffle_letters_in_word(&self) -> String {
        stringtools_random::shuffle_letters_in_word(self, " ")
    }

    fn mix_words(&self) -> String {
        stringtools_random::mix_words(self)
    }

    fn random_case(&self) -> String {
        stringtools_random::random_case(self)
    }

    fn encode_special_characters(&self) -> String {
        stringtools_codec::encode_special_characters(self)
    }

    fn decode_special_characters(&self) -> String {
        stringtools_codec::decode_special_characters(self)
    }

    fn byte_length(&self) -> usize {
        stringtools_codec::byte_length(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stringtools_words::WordTransform;

    #[test]
    fn methods_use_default_arguments() {
        assert_eq!("  a   b  ".split_words(), vec!["a", "b"]);
        assert_eq!("hello world".capitalize(), "Hello world");
        assert_eq!("hello world".pascal_case(), "HelloWorld");
        assert_eq!("cat".pluralize(2), "cats");
        assert_eq!("cat".pluralize(1), "cat");
        assert_eq!("  padded   text  ".truncate_characters(6), "padded");
        assert_eq!("one two three".truncate_words(2), "one two");
        assert_eq!("a\nb".nl2br(), "a<br />b");
        assert_eq!("a b\tc".remove_whitespace(), "abc");
        assert_eq!("Price: $12.50".to_number(), 12.5);
    }

    #[test]
    fn words_takes_options() {
        let options = WordsOptions::new()
            .with_separator(",")
            .with_transform(WordTransform::Upper);
        assert_eq!("a,b,,c".words(&options), vec!["A", "B", "C"]);
    }

    #[test]
    fn pluralize_with_options() {
        let options = PluralizeOptions::with_postfix("ies", true);
        assert_eq!("category".pluralize_with(2, &options), "categories");
    }

    #[test]
    fn only_is_case_sensitive() {
        assert_eq!("aBc123".only("a-z").unwrap(), "ac");
        assert!("abc".only("z-a").is_err());
    }

    #[test]
    fn conditional_transforms() {
        assert_eq!("abc".when(true, |s| s.to_uppercase()), "ABC");
        assert_eq!("abc".when_else(false, |s| s.to_uppercase(), |s| s.repeat(2)), "abcabc");
    }

    #[test]
    fn shuffles_keep_letters() {
        let mut shuffled: Vec<char> = "letters".shuffle().chars().collect();
        shuffled.sort_unstable();
        let mut original: Vec<char> = "letters".chars().collect();
        original.sort_unstable();
        assert_eq!(shuffled, original);
        assert_eq!("one".shuffle_words(), "one");
        assert_eq!("a b".shuffle_letters_in_word(), "a b");
    }
}
