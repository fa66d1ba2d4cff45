// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{addresses::IpAddress, strings::*, AddressError, MAX_IPV6_GROUPS};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use tracing::debug;

lazy_static! {
    /// empty, or 1-4 hex digits
    static ref HEXTET: Regex = Regex::new(r"\A[0-9A-Fa-f]{0,4}\z").unwrap();
}

/**
Loose IPv6 syntax check.

True if `text` contains a `:`, splits into at most [MAX_IPV6_GROUPS]
colon-delimited groups and every group is empty or one to four hex digits.
Trailing empty groups (f.ex. the tail of `"1111::"`) are not counted.

This does not validate the address: the number of `::` and the total
width are never checked.
*/
pub fn looks_like_ipv6(text: &str) -> bool {
    if !text.contains(COLON) {
        return false;
    }

    let mut groups: Vec<&str> = text.split(COLON).collect();
    while groups.last().is_some_and(|g| g.is_empty()) {
        groups.pop();
    }

    groups.len() <= MAX_IPV6_GROUPS && groups.iter().all(|g| HEXTET.is_match(g))
}

/**
Placeholder for an IPv6 address which only passed [looks_like_ipv6].

It carries no numeric meaning: the numeric value is always 0, raw bytes are
unsupported, it is never private, and `contains` compares text literally.
*/
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Ipv6Stub {
    text: String,
}

impl Ipv6Stub {
    /// Build from text passing [looks_like_ipv6], else [AddressError::UnrecognizedAddressFormat].
    pub fn new(text: impl AsRef<str>) -> Result<Self, AddressError> {
        let text: &str = text.as_ref();
        if !looks_like_ipv6(text) {
            debug!("rejected IPv6 input: '{text}'");
            return Err(AddressError::UnrecognizedAddressFormat(text.to_string()));
        }
        Ok(Self {
            text: text.to_string(),
        })
    }
}

impl IpAddress for Ipv6Stub {
    fn is_private(&self) -> bool {
        false
    }

    fn numeric_value(&self) -> u32 {
        0
    }

    fn raw_bytes(&self) -> Result<[u8; 4], AddressError> {
        Err(AddressError::UnsupportedOperation(OP_V6_BYTES))
    }

    /// Literal text equality, not range containment.
    fn contains(&self, other: &dyn IpAddress) -> bool {
        self.text == other.text_form()
    }

    fn text_form(&self) -> &str {
        &self.text
    }

    fn is_ipv4(&self) -> bool {
        false
    }

    fn is_ipv6(&self) -> bool {
        true
    }
}

impl fmt::Display for Ipv6Stub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/* -------------------------------------------------------------------------- */
