//! Codecs for stringtools.
//!
//! Markup and URI handling are ports: the toolkit calls through
//! [`MarkupCodec`] and [`UriCodec`] so a caller can plug in a real HTML parser
//! or a platform primitive. [`HtmlEntityCodec`] and [`PercentUriCodec`] are
//! the small built-in adapters.

mod html;
mod numeric;
mod uri;

pub use html::HtmlEntityCodec;
pub use numeric::{decode_special_characters, encode_special_characters};
pub use uri::PercentUriCodec;

use stringtools_error::Result;

/// Markup entity encoding and tag stripping.
///
/// Implementations should be pure: text in, text out.
pub trait MarkupCodec: Send + Sync {
    /// Escapes characters that are unsafe to place literally in markup.
    fn encode_entities(&self, text: &str) -> String;

    /// Inverse of [`encode_entities`](Self::encode_entities). Also resolves
    /// numeric character references such as `&#169;`.
    fn decode_entities(&self, text: &str) -> String;

    /// Removes tags and returns only the readable text.
    fn strip_tags(&self, text: &str) -> String;
}

/// Percent-style URI escaping.
pub trait UriCodec: Send + Sync {
    fn encode(&self, text: &str) -> String;

    /// Fails when the input holds a malformed escape or decodes to invalid UTF-8.
    fn decode(&self, text: &str) -> Result<String>;
}

/// Number of bytes `text` occupies when encoded as UTF-8.
pub fn byte_length(text: &str) -> usize {
    text.len()
}
