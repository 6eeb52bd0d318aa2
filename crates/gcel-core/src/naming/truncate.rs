use serde::{Deserialize, Serialize};
use tracing::trace;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Lowercase base32 "extended hex" alphabet.
const BASE32_HEX: &[u8; 32] = b"0123456789abcdefghijklmnopqrstuv";

/// Longest hash [`hash_string`] can produce from a 32-bit digest.
pub const MAX_HASH_LENGTH: usize = 7;

/// Options for [`truncate_string`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TruncateOptions {
    /// Upper bound for the returned string, in bytes.
    pub max_length: usize,
    /// Number of hash characters appended when truncating.
    pub hash_length: usize,
    /// Append the hash even when the input already fits.
    pub always_add_hash: bool,
}

impl Default for TruncateOptions {
    fn default() -> Self {
        Self {
            max_length: gcel_model::MAX_LABEL_LENGTH,
            hash_length: 6,
            always_add_hash: false,
        }
    }
}

/// Shortens `s` to at most `max_length` bytes, keeping it distinguishable from other
/// inputs sharing the same prefix by appending `-<hash>` of the full input.
///
/// Inputs that already fit are returned unchanged unless `always_add_hash` is set.
pub fn truncate_string(s: &str, opts: &TruncateOptions) -> String {
    if !opts.always_add_hash && s.len() <= opts.max_length {
        return s.to_string();
    }

    let hash = hash_string(s, opts.hash_length);
    if hash.len() + 1 >= opts.max_length {
        return hash.chars().take(opts.max_length).collect();
    }

    let mut keep = (opts.max_length - hash.len() - 1).min(s.len());
    while !s.is_char_boundary(keep) {
        keep -= 1;
    }

    trace!(input = s, keep, %hash, "truncating name");
    format!("{}-{}", &s[..keep], hash)
}

/// First `n` characters of the lowercase base32hex FNV-1a digest of `s`.
///
/// `n` is capped at [`MAX_HASH_LENGTH`].
pub fn hash_string(s: &str, n: usize) -> String {
    let digest = fnv1a_32(s.as_bytes());
    // 32 bits padded to 35 so they split evenly into 5-bit groups.
    let bits = u64::from(digest) << 3;
    (0..n.min(MAX_HASH_LENGTH))
        .map(|i| {
            let shift = 30 - 5 * i;
            BASE32_HEX[((bits >> shift) & 0x1f) as usize] as char
        })
        .collect()
}

fn fnv1a_32(data: &[u8]) -> u32 {
    data.iter().fold(FNV_OFFSET_BASIS, |h, &b| {
        (h ^ u32::from(b)).wrapping_mul(FNV_PRIME)
    })
}
