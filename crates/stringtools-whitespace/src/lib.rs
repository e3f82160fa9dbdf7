//! Truncation and whitespace utilities for stringtools.
//!
//! Lengths are counted in `char`s, never bytes, so truncation cannot split a
//! multi-byte character.

use stringtools_words::split_words;

/// Glyph shown in place of a space by [`show_whitespace_characters`].
pub const SPACE_GLYPH: char = '◦';
/// Glyph inserted before a tab.
pub const TAB_GLYPH: char = '⇥';
/// Glyph inserted before a newline.
pub const NEWLINE_GLYPH: char = '⏎';

/// Replaces every whitespace run with `replacement`.
pub fn remove_whitespace(input: &str, replacement: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut in_run = false;

    for c in input.chars() {
        if c.is_whitespace() {
            if !in_run {
                result.push_str(replacement);
                in_run = true;
            }
        } else {
            result.push(c);
            in_run = false;
        }
    }
    result
}

/// Collapses whitespace runs into `replacement`, then trims both ends.
///
/// With the usual `" "` replacement this is idempotent.
pub fn trim_whitespace(input: &str, replacement: &str) -> String {
    remove_whitespace(input, replacement).trim().to_string()
}

/// Keeps the first `length` characters and appends `clamp` if anything was cut.
///
/// With `trim_first` the input goes through [`trim_whitespace`] before it is
/// cut. Whether the clamp is appended is decided from the character count of
/// the untrimmed input, so `"  ab  "` truncated to 4 still gets its clamp.
pub fn truncate_characters(input: &str, length: usize, clamp: &str, trim_first: bool) -> String {
    let trimmed;
    let text = if trim_first {
        trimmed = trim_whitespace(input, " ");
        trimmed.as_str()
    } else {
        input
    };

    let mut result: String = text.chars().take(length).collect();
    if input.chars().count() > length {
        result.push_str(clamp);
    }
    result
}

/// Keeps the first `word_count` words, joined by single spaces.
///
/// `clamp` is appended only when words were actually dropped.
pub fn truncate_words(input: &str, word_count: usize, clamp: &str) -> String {
    let words = split_words(input);
    let mut result = words.iter().take(word_count).map(String::as_str).collect::<Vec<_>>().join(" ");
    if words.len() > word_count {
        result.push_str(clamp);
    }
    result
}

/// Replaces every newline with a `<br />` (XHTML) or `<br>` tag.
pub fn nl2br(input: &str, xhtml: bool) -> String {
    if input.is_empty() {
        return String::new();
    }
    input.replace('\n', if xhtml { "<br />" } else { "<br>" })
}

/// Makes spaces, tabs and newlines visible.
///
/// Spaces become `◦`. Tabs and newlines keep their original character but
/// are preceded by `⇥` and `⏎` so the layout survives.
pub fn show_whitespace_characters(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            ' ' => result.push(SPACE_GLYPH),
            '\t' => {
                result.push(TAB_GLYPH);
                result.push(c);
            }
            '\n' => {
                result.push(NEWLINE_GLYPH);
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}
