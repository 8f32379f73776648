//! Byte-to-text conversion for `readTextFile`
//!
//! Rhai strings are always valid UTF-8, so file bytes have to be mapped onto
//! characters somehow. The default maps every byte to the Latin-1 code point
//! of the same value, which can never fail: ASCII stays one byte, and each
//! byte `>= 0x80` becomes a two-byte UTF-8 sequence. Files that really are
//! multi-byte UTF-8 come out as mojibake under this policy; configure
//! [`TextEncoding::Utf8`] when that matters more than byte fidelity.

use serde::{Deserialize, Serialize};

/// How file bytes become script text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextEncoding {
    /// One character per byte, `U+0000..=U+00FF`.
    #[default]
    Latin1,
    /// Pass valid UTF-8 through; invalid sequences become `U+FFFD`.
    Utf8,
}

/// Convert file bytes to a string under `encoding`.
///
/// Never fails. Under [`TextEncoding::Latin1`] the output length in bytes is
/// `count(b < 0x80) + 2 * count(b >= 0x80)`; under [`TextEncoding::Utf8`] it
/// equals the input length whenever the input is valid UTF-8.
pub fn bytes_to_text(data: Vec<u8>, encoding: TextEncoding) -> String {
    match encoding {
        TextEncoding::Latin1 => latin1_to_utf8(&data),
        TextEncoding::Utf8 => match String::from_utf8(data) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        },
    }
}

fn latin1_to_utf8(data: &[u8]) -> String {
    let high = data.iter().filter(|&&b| b >= 0x80).count();
    let mut out = String::with_capacity(data.len() + high);
    out.extend(data.iter().map(|&b| char::from(b)));
    out
}
