//! Word tokenizer for stringtools.
//!
//! Every other crate in the workspace that works on "words" goes through
//! [`words`], so the tokenization rules live in exactly one place:
//!
//! - input is trimmed before splitting
//! - tokens are separated by runs of whitespace, or by a literal separator
//! - empty tokens are dropped, so blank input yields no tokens at all

use std::fmt;

/// Per-word transform applied by [`words`] after tokenization.
pub enum WordTransform<'a> {
    Lower,
    Upper,
    /// Upper-cases the first character and leaves the rest alone.
    Capitalize,
    /// Receives the token and its index among the kept tokens.
    Custom(&'a dyn Fn(&str, usize) -> String),
}

impl fmt::Debug for WordTransform<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordTransform::Lower => write!(f, "Lower"),
            WordTransform::Upper => write!(f, "Upper"),
            WordTransform::Capitalize => write!(f, "Capitalize"),
            WordTransform::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

impl WordTransform<'_> {
    fn apply(&self, word: &str, index: usize) -> String {
        match self {
            WordTransform::Lower => word.to_lowercase(),
            WordTransform::Upper => word.to_uppercase(),
            WordTransform::Capitalize => capitalize_first(word),
            WordTransform::Custom(f) => f(word, index),
        }
    }
}

/// Options for [`words`].
#[derive(Debug, Default)]
pub struct WordsOptions<'a> {
    /// Literal separator. `None` (or an empty string) splits on whitespace runs.
    pub separator: Option<&'a str>,
    /// Reduce every token to its ASCII letters before empty tokens are dropped.
    pub only_alphabetic: bool,
    pub transform: Option<WordTransform<'a>>,
}

impl<'a> WordsOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separator(mut self, separator: &'a str) -> Self {
        self.separator = Some(separator);
        self
    }

    pub fn only_alphabetic(mut self) -> Self {
        self.only_alphabetic = true;
        self
    }

    pub fn with_transform(mut self, transform: WordTransform<'a>) -> Self {
        self.transform = Some(transform);
        self
    }
}

/// Splits `input` into tokens according to `options`.
///
/// ```
/// use stringtools_words::{words, WordsOptions};
///
/// assert_eq!(words("  a   b  ", &WordsOptions::default()), vec!["a", "b"]);
/// assert!(words("", &WordsOptions::default()).is_empty());
/// ```
pub fn words(input: &str, options: &WordsOptions<'_>) -> Vec<String> {
    let trimmed = input.trim();
    let raw: Box<dyn Iterator<Item = &str>> = match options.separator {
        Some(sep) if !sep.is_empty() => Box::new(trimmed.split(sep)),
        _ => Box::new(trimmed.split_whitespace()),
    };

    raw.map(|token| {
        if options.only_alphabetic {
            token.chars().filter(|c| c.is_ascii_alphabetic()).collect()
        } else {
            token.to_string()
        }
    })
    .filter(|token| !token.is_empty())
    .enumerate()
    .map(|(i, token)| match &options.transform {
        Some(transform) => transform.apply(&token, i),
        None => token,
    })
    .collect()
}

/// Whitespace tokenization with default options.
pub fn split_words(input: &str) -> Vec<String> {
    words(input, &WordsOptions::default())
}

/// Number of whitespace-separated tokens.
pub fn word_count(input: &str) -> usize {
    input.split_whitespace().count()
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
