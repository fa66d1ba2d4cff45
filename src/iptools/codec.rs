// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversions between dotted-decimal text, octets and 32-bit integers.

use super::{strings::*, AddressError, IPV4_BITS, IPV4_OCTETS};

/**
Parse a prefix-free dotted-decimal string into its four octets.

Requires exactly four `.`-separated groups of decimal digits, each within
`0..=255`. Leading zeros are tolerated here; the stricter token grammar is
enforced by [super::is_ipv4].

## Errors
[AddressError::InvalidIpv4Format] if the group count is wrong or a group is
empty, non-numeric or out of range.
*/
pub fn text_to_bytes(text: &str) -> Result<[u8; 4], AddressError> {
    let invalid = || AddressError::InvalidIpv4Format(text.to_string());

    let parts: Vec<&str> = text.split(DOT).collect();
    if parts.len() != IPV4_OCTETS {
        return Err(invalid());
    }

    let mut bytes: [u8; 4] = [0; 4];
    for (byte, part) in bytes.iter_mut().zip(parts) {
        // u8::from_str would also take a leading '+'
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        *byte = part.parse::<u8>().map_err(|_| invalid())?;
    }
    Ok(bytes)
}

/// Render four octets as dotted-decimal text, f.ex. `[10, 0, 0, 1]` -> `"10.0.0.1"`.
pub fn bytes_to_text(bytes: [u8; 4]) -> String {
    let [a, b, c, d] = bytes;
    format!("{a}{DOT}{b}{DOT}{c}{DOT}{d}")
}

/**
Parse a prefix-free dotted-decimal string into a 32-bit integer,
`o0 * 2^24 + o1 * 2^16 + o2 * 2^8 + o3`.

Any `/prefix` suffix must have been removed with [strip_prefix] first.
*/
pub fn text_to_u32(text: &str) -> Result<u32, AddressError> {
    Ok(u32::from_be_bytes(text_to_bytes(text)?))
}

/// Remove a trailing `/1`..`/32` suffix. Text without a valid suffix is returned as-is.
pub fn strip_prefix(text: &str) -> &str {
    match text.rsplit_once(SLASH) {
        Some((head, tail)) if parse_prefix_token(tail).is_some() => head,
        _ => text,
    }
}

/// Prefix length from a trailing `/1`..`/32` suffix, or 32 when there is none.
pub fn extract_prefix_len(text: &str) -> u8 {
    text.rsplit_once(SLASH)
        .and_then(|(_, tail)| parse_prefix_token(tail))
        .unwrap_or(IPV4_BITS)
}

/* ---------------------------------- */

/**
Whether `token` is an acceptable octet in the address grammar.

Equivalent to `25[0-5]|2[0-4]\d|[0-1]?\d?\d`: one to three ASCII digits
with a value of at most 255. Leading zeros (`"010"`, `"00"`) pass.
*/
#[inline]
pub(crate) fn is_octet_token(token: &str) -> bool {
    (1..=3).contains(&token.len())
        && token.bytes().all(|b| b.is_ascii_digit())
        && token.parse::<u16>().is_ok_and(|v| v <= u8::MAX as u16)
}

/**
Parse a CIDR prefix token (without the slash).

Equivalent to `3[0-2]|2[0-9]|1[0-9]|[1-9]`: `1..=32`, no leading zero, so
`"0"`, `"08"` and `"33"` are all rejected.
*/
#[inline]
pub(crate) fn parse_prefix_token(token: &str) -> Option<u8> {
    if !(1..=2).contains(&token.len())
        || token.starts_with('0')
        || !token.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    token.parse::<u8>().ok().filter(|p| (1..=IPV4_BITS).contains(p))
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    const HOST: &str = "192.168.100.7";
    const CIDR: &str = "10.0.0.0/8";

    #[test]
    fn test_text_to_bytes() {
        assert_eq!(text_to_bytes(HOST).unwrap(), [192, 168, 100, 7]);
        assert_eq!(text_to_bytes("0.0.0.0").unwrap(), [0, 0, 0, 0]);
        assert_eq!(text_to_bytes("255.255.255.255").unwrap(), [255; 4]);
    }

    #[test]
    fn test_text_to_bytes_rejects() {
        for bad in ["10.0.0", "10.0.0.0.0", "256.0.0.0", "a.b.c.d", "1..2.3", "+1.2.3.4", "", CIDR] {
            assert!(
                matches!(text_to_bytes(bad), Err(AddressError::InvalidIpv4Format(ref s)) if s == bad),
                "accepted: '{bad}'"
            );
        }
    }

    #[test]
    fn test_bytes_roundtrip() {
        for ip in [HOST, "0.0.0.0", "255.255.255.255", "172.16.129.1"] {
            assert_eq!(bytes_to_text(text_to_bytes(ip).unwrap()), ip);
        }
    }

    #[test]
    fn test_text_to_u32() {
        assert_eq!(text_to_u32("0.0.0.0").unwrap(), 0);
        assert_eq!(text_to_u32("0.0.0.1").unwrap(), 1);
        assert_eq!(text_to_u32("1.0.0.0").unwrap(), 1 << 24);
        assert_eq!(text_to_u32("255.255.255.255").unwrap(), u32::MAX);
        assert_eq!(
            text_to_u32(HOST).unwrap(),
            192 * 256u32.pow(3) + 168 * 256u32.pow(2) + 100 * 256 + 7
        );
    }

    #[test]
    fn test_strip_prefix() {
        assert_eq!(strip_prefix("10.0.0.0"), "10.0.0.0");
        assert_eq!(strip_prefix(CIDR), "10.0.0.0");
        assert_eq!(strip_prefix("10.0.0.0/32"), "10.0.0.0");
        // not a valid prefix, left alone
        assert_eq!(strip_prefix("10.0.0.0/33"), "10.0.0.0/33");
        assert_eq!(strip_prefix("10.0.0.0/0"), "10.0.0.0/0");
    }

    #[test]
    fn test_extract_prefix_len() {
        assert_eq!(extract_prefix_len("10.0.0.0"), 32);
        assert_eq!(extract_prefix_len(CIDR), 8);
        assert_eq!(extract_prefix_len("10.0.0.0/16"), 16);
        assert_eq!(extract_prefix_len("172.16.0.0/12"), 12);
        assert_eq!(extract_prefix_len("10.0.0.0/01"), 32);
    }

    #[rustfmt::skip]
    #[test]
    fn test_octet_token_boundaries() {
        let tests: Vec<(&str, bool)> = vec![
            ("0", true),    ("00", true),   ("000", true),
            ("9", true),    ("010", true),  ("199", true),
            ("200", true),  ("249", true),  ("250", true),
            ("255", true),  ("256", false), ("260", false),
            ("300", false), ("0255", false), ("", false),
            ("-1", false),  ("1a", false),  (" 1", false),
        ];
        for (token, ok) in tests {
            assert_eq!(is_octet_token(token), ok, "Failed: '{token}'");
        }
    }

    #[rustfmt::skip]
    #[test]
    fn test_prefix_token_boundaries() {
        let tests: Vec<(&str, Option<u8>)> = vec![
            ("1", Some(1)),   ("9", Some(9)),   ("10", Some(10)),
            ("19", Some(19)), ("29", Some(29)), ("32", Some(32)),
            ("0", None),      ("01", None),     ("33", None),
            ("40", None),     ("100", None),    ("", None),
            ("+8", None),
        ];
        for (token, expected) in tests {
            assert_eq!(parse_prefix_token(token), expected, "Failed: '{token}'");
        }
    }
}
