// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! STEP string escape decoding (ISO 10303-21 control directives)

/// Decode the escapes of a raw STEP string body (without the outer quotes)
///
/// Handles `''`, `\\`, `\X2\..\X0\` (UTF-16), `\X4\..\X0\` (UTF-32),
/// `\X\hh` (ISO-8859-1), `\S\c` (upper half) and drops `\Px\` code page
/// switches. Malformed escapes are copied through unchanged.
pub fn decode_step_string(raw: &str) -> String {
    // Fast path: nothing to decode
    if !raw.contains('\\') && !raw.contains("''") {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(c) = rest.chars().next() {
        if rest.starts_with("''") {
            out.push('\'');
            rest = &rest[2..];
        } else if rest.starts_with("\\\\") {
            out.push('\\');
            rest = &rest[2..];
        } else if let Some(body) = rest.strip_prefix("\\X2\\") {
            match decode_wide(body, 4) {
                Some((decoded, consumed)) => {
                    out.push_str(&decoded);
                    rest = &body[consumed..];
                }
                None => {
                    out.push(c);
                    rest = &rest[1..];
                }
            }
        } else if let Some(body) = rest.strip_prefix("\\X4\\") {
            match decode_wide(body, 8) {
                Some((decoded, consumed)) => {
                    out.push_str(&decoded);
                    rest = &body[consumed..];
                }
                None => {
                    out.push(c);
                    rest = &rest[1..];
                }
            }
        } else if let Some(body) = rest.strip_prefix("\\X\\") {
            match body.get(..2).and_then(|hex| u8::from_str_radix(hex, 16).ok()) {
                Some(byte) => {
                    out.push(byte as char);
                    rest = &body[2..];
                }
                None => {
                    out.push(c);
                    rest = &rest[1..];
                }
            }
        } else if let Some(body) = rest.strip_prefix("\\S\\") {
            match body.chars().next().filter(char::is_ascii) {
                Some(low) => {
                    out.push(char::from(low as u8 + 0x80));
                    rest = &body[1..];
                }
                None => {
                    out.push(c);
                    rest = &rest[1..];
                }
            }
        } else if is_code_page_switch(rest) {
            rest = &rest[4..];
        } else {
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }

    out
}

/// `\PA\` .. `\PI\`
fn is_code_page_switch(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() >= 4 && b[0] == b'\\' && b[1] == b'P' && b[2].is_ascii_uppercase() && b[3] == b'\\'
}

/// Decode hex code units up to the `\X0\` terminator
///
/// Returns the decoded text and the number of bytes consumed including the
/// terminator.
fn decode_wide(body: &str, width: usize) -> Option<(String, usize)> {
    let end = body.find("\\X0\\")?;
    let hex = &body[..end];
    if hex.len() % width != 0 {
        return None;
    }

    let mut units = Vec::with_capacity(hex.len() / width);
    for chunk in hex.as_bytes().chunks(width) {
        let chunk = std::str::from_utf8(chunk).ok()?;
        units.push(u32::from_str_radix(chunk, 16).ok()?);
    }

    let decoded = if width == 4 {
        let wide: Vec<u16> = units.iter().map(|&u| u as u16).collect();
        String::from_utf16(&wide).ok()?
    } else {
        units.into_iter().map(char::from_u32).collect::<Option<String>>()?
    };

    Some((decoded, end + 4))
}
