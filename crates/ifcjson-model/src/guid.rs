// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Compressed IFC GlobalId codec
//!
//! IFC stores a 128-bit GUID as 22 characters of a custom base64 alphabet.
//! The first character carries the top two bits, each following character
//! six more.

use crate::{ParseError, Result};
use uuid::Uuid;

/// Length of a compressed GlobalId
pub const COMPRESSED_LEN: usize = 22;

const ALPHABET: &[u8; 64] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz_$";

fn digit(c: u8) -> Option<u128> {
    let value = match c {
        b'0'..=b'9' => c - b'0',
        b'A'..=b'Z' => c - b'A' + 10,
        b'a'..=b'z' => c - b'a' + 36,
        b'_' => 62,
        b'$' => 63,
        _ => return None,
    };
    Some(value as u128)
}

/// Expand a 22-character GlobalId into a UUID
pub fn expand(compressed: &str) -> Result<Uuid> {
    let bytes = compressed.as_bytes();
    if bytes.len() != COMPRESSED_LEN {
        return Err(ParseError::InvalidGuid(compressed.to_string()));
    }

    let mut value: u128 = 0;
    for (i, &c) in bytes.iter().enumerate() {
        let d = digit(c).ok_or_else(|| ParseError::InvalidGuid(compressed.to_string()))?;
        // Leading character only holds two bits
        if i == 0 && d > 3 {
            return Err(ParseError::InvalidGuid(compressed.to_string()));
        }
        value = (value << 6) | d;
    }

    Ok(Uuid::from_u128(value))
}

/// Compress a UUID into the 22-character GlobalId form
pub fn compress(uuid: &Uuid) -> String {
    let value = uuid.as_u128();
    let mut out = String::with_capacity(COMPRESSED_LEN);
    out.push(ALPHABET[(value >> 126) as usize & 0x3] as char);
    for i in (0..21).rev() {
        out.push(ALPHABET[(value >> (i * 6)) as usize & 0x3f] as char);
    }
    out
}

/// Whether a string has the shape of a compressed GlobalId
pub fn is_compressed(candidate: &str) -> bool {
    expand(candidate).is_ok()
}

/// Canonical GUID text for a native GlobalId
///
/// Lowercase hyphenated UUID; values that do not decode are returned as-is.
pub fn canonical(global_id: &str) -> String {
    match expand(global_id) {
        Ok(uuid) => uuid.hyphenated().to_string(),
        Err(_) => global_id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_known_value() {
        let uuid = expand("2XQ$n5SLP5MBLyL442paFx").unwrap();
        assert_eq!(
            uuid.hyphenated().to_string(),
            "a16bfc45-7156-4558-b57c-544102ce43fb"
        );
    }

    #[test]
    fn test_compress_inverts_expand() {
        for guid in ["2XQ$n5SLP5MBLyL442paFx", "1hOSvn6df7F8_7GcBWlR72", "0000000000000000000000"] {
            assert_eq!(compress(&expand(guid).unwrap()), guid);
        }
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(expand("short").is_err());
        assert!(expand("4XQ$n5SLP5MBLyL442paFx").is_err());
        assert!(expand("2XQ$n5SLP5MBLyL442pa-x").is_err());
    }

    #[test]
    fn test_canonical_falls_back_to_raw() {
        assert_eq!(canonical("guid"), "guid");
        assert_eq!(
            canonical("1hOSvn6df7F8_7GcBWlR72"),
            "6b61ce71-1a7a-473c-8f87-4262e0bdb1c2"
        );
    }

    #[test]
    fn test_max_value() {
        let max = Uuid::from_u128(u128::MAX);
        assert_eq!(compress(&max), "3$$$$$$$$$$$$$$$$$$$$$");
    }
}
