use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use stringtools_error::{ErrorCategory, Result, TextError, codec_error};

use crate::UriCodec;

/// Everything a full URI may not carry literally. Reserved characters
/// (`;,/?:@&=+$#`) and unreserved marks (`-_.!~*'()`) stay as they are.
const URI_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Escapes of these bytes are kept verbatim on decode, since decoding them
/// would change how the URI is split into components.
const RESERVED: &[u8] = b";/?:@&=+$,#";

/// Whole-URI percent codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentUriCodec;

impl UriCodec for PercentUriCodec {
    fn encode(&self, text: &str) -> String {
        utf8_percent_encode(text, URI_ENCODE_SET).to_string()
    }

    fn decode(&self, text: &str) -> Result<String> {
        let bytes = text.as_bytes();
        let mut out = Vec::with_capacity(bytes.len());
        let mut i = 0;

        while i < bytes.len() {
            if bytes[i] != b'%' {
                out.push(bytes[i]);
                i += 1;
                continue;
            }

            let byte = bytes
                .get(i + 1..i + 3)
                .filter(|hex| hex.iter().all(u8::is_ascii_hexdigit))
                .and_then(|hex| std::str::from_utf8(hex).ok())
                .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                .ok_or_else(|| {
                    codec_error("malformed percent escape").with_context("offset", i.to_string())
                })?;

            if RESERVED.contains(&byte) {
                out.extend_from_slice(&bytes[i..i + 3]);
            } else {
                out.push(byte);
            }
            i += 3;
        }

        String::from_utf8(out).map_err(|e| {
            TextError::with_source("escapes decode to invalid UTF-8", ErrorCategory::Codec, Box::new(e))
        })
    }
}
