//! Reversible escaping of arbitrary text into the RFC1035 label alphabet.
//!
//! Encoded labels only contain `0-9`, `a-z` and `-`. Digits and lowercase ASCII letters
//! are copied as-is; every other byte of the input (uppercase letters, punctuation,
//! each byte of a multi-byte UTF-8 sequence) becomes an escape triple `-HH`, where
//! `HH` is the byte value in lowercase hexadecimal.
//!
//! This is URI percent-encoding with `-` standing in for `%`, and decoding relies on
//! exactly that: every `-` is turned back into `%` and the result is percent-decoded.
//! The substitution is blind, which is only sound because [`encode`] never emits a
//! literal `-`. Keep it that way so already stored labels keep decoding identically.
//!
//! # Examples
//! ```
//! use gcel_core::codec::{decode, encode};
//!
//! assert_eq!(encode("k8s-io"), "k8s-2dio");
//! assert_eq!(decode("k8s-2dio").unwrap(), "k8s-io");
//! ```
use tracing::debug;

use crate::error::{LabelError, LabelResult};

/// Escape marker in encoded labels.
pub const ESCAPE: char = '-';

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Encodes text into an RFC1035 compatible value, usable as a label key or value.
///
/// Never fails. Operates on the UTF-8 bytes of `s`, see [`encode_bytes`].
pub fn encode(s: &str) -> String {
    encode_bytes(s.as_bytes())
}

/// Encodes raw bytes into an RFC1035 compatible value.
pub fn encode_bytes(raw: &[u8]) -> String {
    let mut out = String::with_capacity(raw.len());
    for &c in raw {
        if c.is_ascii_digit() || c.is_ascii_lowercase() {
            out.push(c as char);
        } else {
            out.push(ESCAPE);
            out.push(HEX_DIGITS[(c >> 4) as usize] as char);
            out.push(HEX_DIGITS[(c & 0x0f) as usize] as char);
        }
    }
    out
}

/// Reverses [`encode`], returning the original text.
///
/// Fails with [`LabelError::Decode`] on a malformed escape and with
/// [`LabelError::NotUtf8`] when the decoded bytes are not text. Use
/// [`decode_bytes`] for values that were encoded from arbitrary bytes.
pub fn decode(label: &str) -> LabelResult<String> {
    let raw = decode_bytes(label)?;
    String::from_utf8(raw).map_err(|_| {
        debug!(label, "decoded label is not valid utf-8");
        LabelError::NotUtf8 {
            label: label.to_string(),
        }
    })
}

/// Reverses [`encode_bytes`].
///
/// Any input is accepted without panicking. A `-` that is not followed by two
/// hexadecimal digits makes the whole label invalid.
pub fn decode_bytes(label: &str) -> LabelResult<Vec<u8>> {
    let uri_form = label.replace(ESCAPE, "%");
    query_unescape(uri_form.as_bytes()).ok_or_else(|| {
        debug!(label, "malformed escape in label");
        LabelError::Decode {
            label: label.to_string(),
        }
    })
}

/// Percent-decoding with query-component rules: `%HH` becomes one byte (either hex
/// case) and `+` becomes a space. Returns `None` on a malformed or truncated escape.
fn query_unescape(s: &[u8]) -> Option<Vec<u8>> {
    let mut out = Vec::with_capacity(s.len());
    let mut i = 0;
    while i < s.len() {
        match s[i] {
            b'%' => {
                let pair = s.get(i + 1..i + 3)?;
                let mut byte = [0u8; 1];
                hex::decode_to_slice(pair, &mut byte).ok()?;
                out.push(byte[0]);
                i += 3;
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            c => {
                out.push(c);
                i += 1;
            }
        }
    }
    Some(out)
}
