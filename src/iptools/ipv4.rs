// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    addresses::IpAddress,
    blocks::private_blocks,
    codec::{extract_prefix_len, is_octet_token, parse_prefix_token, strip_prefix, text_to_bytes},
    range::Ipv4Range,
    strings::*,
    AddressError, IPV4_OCTETS,
};
use ipnet::Ipv4Net;
use serde::{Deserialize, Serialize};
use std::{fmt, net::Ipv4Addr, str::FromStr};
use tracing::debug;

/**
Whether `text` is a dotted-quad IPv4 address with an optional CIDR prefix.

Accepted: four `.`-separated octets of one to three digits (`0..=255`,
leading zeros allowed), optionally followed by `/1` through `/32` written
without a leading zero. Nothing else, no surrounding whitespace.
*/
pub fn is_ipv4(text: &str) -> bool {
    let (addr, prefix) = match text.split_once(SLASH) {
        Some((addr, prefix)) => (addr, Some(prefix)),
        None => (text, None),
    };
    if prefix.is_some_and(|p| parse_prefix_token(p).is_none()) {
        return false;
    }
    let octets: Vec<&str> = addr.split(DOT).collect();
    octets.len() == IPV4_OCTETS && octets.iter().all(|o| is_octet_token(o))
}

/**
An IPv4 address or CIDR block, f.ex. `192.168.100.7` or `192.168.100.0/22`.

The text is kept exactly as given. The covered range is computed once at
construction: it starts at the address as written and ends at the highest
address of its block (a plain address is a single-host range).
*/
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ipv4Value {
    text: String,
    prefix: u8,
    range: Ipv4Range,
}

impl Ipv4Value {
    /// Validate and build. Empty or malformed text yields [AddressError::InvalidIpv4Format].
    pub fn new(text: impl AsRef<str>) -> Result<Self, AddressError> {
        let text: &str = text.as_ref();
        if text.is_empty() || !is_ipv4(text) {
            debug!("rejected IPv4 input: '{text}'");
            return Err(AddressError::InvalidIpv4Format(text.to_string()));
        }

        Ok(Self {
            text: text.to_string(),
            prefix: extract_prefix_len(text),
            range: Ipv4Range::from_text(text)?,
        })
    }

    /// CIDR prefix length, 32 for a plain address.
    pub fn prefix_len(&self) -> u8 {
        self.prefix
    }

    /// The inclusive range covered by this address or block.
    pub fn range(&self) -> Ipv4Range {
        self.range
    }

    /// Lowest address of the range as an integer (the address as written).
    pub fn range_start(&self) -> u32 {
        self.range.beg()
    }

    /// Highest address of the range as an integer.
    pub fn range_end(&self) -> u32 {
        self.range.end()
    }

    /// The address part as a std [Ipv4Addr], prefix dropped.
    pub fn addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.range.beg())
    }

    /**
    Convert to an [ipnet::Ipv4Net] with the same address and prefix.

    Host bits are kept as written, so `10.0.0.5/24` becomes `10.0.0.5/24`
    rather than `10.0.0.0/24`. Always `Some` for a constructed value.
    */
    pub fn to_ipv4net(&self) -> Option<Ipv4Net> {
        Ipv4Net::new(self.addr(), self.prefix).ok()
    }
}

impl IpAddress for Ipv4Value {
    fn is_private(&self) -> bool {
        private_blocks().contains(self)
    }

    fn numeric_value(&self) -> u32 {
        self.range.beg()
    }

    fn raw_bytes(&self) -> Result<[u8; 4], AddressError> {
        text_to_bytes(strip_prefix(&self.text))
    }

    /// NOTE: an IPv6 stub reports 0, so this only checks whether 0.0.0.0 is in range.
    fn contains(&self, other: &dyn IpAddress) -> bool {
        self.range.contains(other.numeric_value())
    }

    fn text_form(&self) -> &str {
        &self.text
    }

    fn is_ipv4(&self) -> bool {
        true
    }

    fn is_ipv6(&self) -> bool {
        false
    }
}

impl fmt::Display for Ipv4Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Ipv4Value {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Ipv4Value {
    type Error = AddressError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

/// An absent value is rejected like an empty string.
impl TryFrom<Option<&str>> for Ipv4Value {
    type Error = AddressError;

    fn try_from(text: Option<&str>) -> Result<Self, Self::Error> {
        Self::new(text.unwrap_or_default())
    }
}

impl TryFrom<Ipv4Net> for Ipv4Value {
    type Error = AddressError;

    /// Fails for `/0`, which the address grammar does not accept.
    fn try_from(net: Ipv4Net) -> Result<Self, Self::Error> {
        Self::new(net.to_string())
    }
}

impl From<Ipv4Value> for String {
    fn from(value: Ipv4Value) -> Self {
        value.text
    }
}

/* -------------------------------------------------------------------------- */
