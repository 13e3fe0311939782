// File: ./src/encoding.rs
//! Best-effort text decoding for calendar exports.
//!
//! Calendar files in the wild arrive in UTF-8 (sometimes with a BOM), in
//! single-byte legacy encodings, or with stray bytes from broken exporters.
//! Decoding runs a fallback chain: strict UTF-8, then WINDOWS-1252 (the
//! WHATWG superset of latin-1), then ASCII with `?` substituted for anything
//! else. Every U+FEFF is stripped from the result.

use encoding_rs::WINDOWS_1252;
use std::fmt;

/// Which rung of the fallback chain produced the decoded text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Latin1,
    AsciiLossy,
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextEncoding::Utf8 => write!(f, "UTF-8"),
            TextEncoding::Latin1 => write!(f, "WINDOWS-1252"),
            TextEncoding::AsciiLossy => write!(f, "ASCII (lossy)"),
        }
    }
}

/// Decode raw input bytes, reporting which fallback was used.
///
/// The final rung accepts any byte sequence, so this cannot fail; it only
/// degrades.
pub fn decode_text(bytes: &[u8]) -> (String, TextEncoding) {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return (strip_bom(text), TextEncoding::Utf8);
    }

    let (decoded, _, had_errors) = WINDOWS_1252.decode(bytes);
    if !had_errors {
        return (strip_bom(&decoded), TextEncoding::Latin1);
    }

    let text: String = bytes
        .iter()
        .map(|&b| if b.is_ascii() { b as char } else { '?' })
        .collect();
    (strip_bom(&text), TextEncoding::AsciiLossy)
}

fn strip_bom(text: &str) -> String {
    if text.contains('\u{feff}') {
        text.replace('\u{feff}', "")
    } else {
        text.to_string()
    }
}

/// Coerce a string to the 7-bit ASCII subset, replacing everything else
/// with `?`. Lossy on purpose: downstream consumers of the extracted
/// records choke on anything wider.
pub fn fold_ascii(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii() { c } else { '?' })
        .collect()
}
