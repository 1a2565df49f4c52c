//! Percent decoding and encoding per the
//! `application/x-www-form-urlencoded` convention.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{Error, Result};

/// Characters escaped when encoding a form component.
///
/// The form convention keeps alphanumerics and `*`, `-`, `.`, `_`
/// literal; space becomes `+` after encoding.
const FORM: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b' ')
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Strict percent decode of one form component (`%XX` -> byte, `+` -> space).
///
/// Unlike a lossy decode, malformed escapes are rejected: non-hex digits
/// report [`Error::InvalidEscape`] and a `%` cut off by the end of input
/// reports [`Error::TruncatedEscape`], each carrying the byte offset of
/// the `%` within `raw`. Decoded bytes that do not form valid UTF-8 are
/// replaced with U+FFFD.
pub fn decode_component(raw: &str) -> Result<String> {
    // Fast path: nothing to decode.
    if !raw.contains('%') && !raw.contains('+') {
        return Ok(raw.to_string());
    }

    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                if i + 2 >= bytes.len() {
                    return Err(Error::TruncatedEscape { index: i });
                }
                let hi = hex_value(bytes[i + 1]);
                let lo = hex_value(bytes[i + 2]);
                match (hi, lo) {
                    (Some(hi), Some(lo)) => out.push(hi << 4 | lo),
                    _ => return Err(Error::InvalidEscape { index: i }),
                }
                i += 3;
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Percent-encode one form component (space -> `+`).
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, FORM).to_string().replace(' ', "+")
}

/// Build a query string from name/value pairs.
///
/// The inverse of decoding: `decode` of the result yields the same pairs
/// in the same order.
pub fn encode_pairs<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut out = String::new();
    for (name, value) in pairs {
        if !out.is_empty() {
            out.push('&');
        }
        out.push_str(&encode_component(name));
        out.push('=');
        out.push_str(&encode_component(value));
    }
    out
}
