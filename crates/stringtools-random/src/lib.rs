//! Shuffling and random text generation for stringtools.
//!
//! Every operation comes in two flavours: a `*_with` function that takes the
//! random source as an argument, and a plain one that uses the thread-local
//! generator. Pass a [`seeded_rng`] to the `*_with` variants to get
//! reproducible output in tests.
//!
//! Nothing here is suitable for secrets. The generators are fast, not
//! cryptographically secure.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rng};
use stringtools_words::split_words;

/// Characters a random string position is drawn from before case randomization.
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Special characters mixed into [`random_string`] output by default.
pub const DEFAULT_SPECIAL_CHARACTERS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '`', '~', '-', '_', '+', '=',
];

/// Default odds (1 in N) that a position becomes a special character.
pub const DEFAULT_SPECIAL_ODDS: u32 = 7;

/// Creates a deterministic generator from a fixed seed.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Shuffles the characters of `input` (Fisher-Yates).
pub fn shuffle_with<R: Rng + ?Sized>(rng: &mut R, input: &str) -> String {
    let mut chars: Vec<char> = input.chars().collect();
    chars.shuffle(rng);
    chars.into_iter().collect()
}

pub fn shuffle(input: &str) -> String {
    shuffle_with(&mut rng(), input)
}

/// Shuffles the order of the words, keeping each word intact.
pub fn shuffle_words_with<R: Rng + ?Sized>(rng: &mut R, input: &str) -> String {
    let mut words = split_words(input);
    words.shuffle(rng);
    words.join(" ")
}

pub fn shuffle_words(input: &str) -> String {
    shuffle_words_with(&mut rng(), input)
}

/// Shuffles the letters inside every word, keeping word order.
pub fn shuffle_letters_in_word_with<R: Rng + ?Sized>(rng: &mut R, input: &str, separator: &str) -> String {
    split_words(input)
        .iter()
        .map(|word| shuffle_with(&mut *rng, word))
        .collect::<Vec<_>>()
        .join(separator)
}

pub fn shuffle_letters_in_word(input: &str, separator: &str) -> String {
    shuffle_letters_in_word_with(&mut rng(), input, separator)
}

/// Alias for [`shuffle_letters_in_word`] joined by a single space.
pub fn mix_words(input: &str) -> String {
    shuffle_letters_in_word(input, " ")
}

/// Flips a fair coin per character to pick upper or lower case.
pub fn random_case_with<R: Rng + ?Sized>(rng: &mut R, input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    for c in input.chars() {
        if rng.random::<bool>() {
            result.extend(c.to_uppercase());
        } else {
            result.extend(c.to_lowercase());
        }
    }
    result
}

pub fn random_case(input: &str) -> String {
    random_case_with(&mut rng(), input)
}

/// Options for [`random_string`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomStringOptions {
    pub length: usize,
    pub include_special: bool,
    pub special_characters: Vec<char>,
    /// A position becomes a special character with probability `1 / special_odds`.
    /// Zero disables special characters.
    pub special_odds: u32,
}

impl Default for RandomStringOptions {
    fn default() -> Self {
        Self {
            length: 8,
            include_special: true,
            special_characters: DEFAULT_SPECIAL_CHARACTERS.to_vec(),
            special_odds: DEFAULT_SPECIAL_ODDS,
        }
    }
}

impl RandomStringOptions {
    pub fn with_length(length: usize) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    /// Letters and digits only.
    pub fn alphanumeric(length: usize) -> Self {
        Self {
            length,
            include_special: false,
            ..Self::default()
        }
    }

    fn specials_enabled(&self) -> bool {
        self.include_special && self.special_odds > 0 && !self.special_characters.is_empty()
    }
}

/// Generates a random string of exactly `options.length` characters.
///
/// Each position is a random-cased base-36 digit, replaced by one of the
/// special characters with the configured odds.
///
/// **Not cryptographically secure.** Do not use the output as a password,
/// token or any other secret.
pub fn random_string_with<R: Rng + ?Sized>(rng: &mut R, options: &RandomStringOptions) -> String {
    let specials = options.specials_enabled();
    let mut result = String::with_capacity(options.length);

    for _ in 0..options.length {
        let base = BASE36[rng.random_range(0..BASE36.len())] as char;
        let mut c = if rng.random::<bool>() {
            base.to_ascii_uppercase()
        } else {
            base
        };

        if specials
            && rng.random_ratio(1, options.special_odds)
            && let Some(&special) = options.special_characters.choose(rng)
        {
            c = special;
        }
        result.push(c);
    }
    result
}

/// [`random_string_with`] using the thread-local generator.
///
/// **Not cryptographically secure.**
pub fn random_string(options: &RandomStringOptions) -> String {
    random_string_with(&mut rng(), options)
}
