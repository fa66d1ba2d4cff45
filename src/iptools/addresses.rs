// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    ipv4::{is_ipv4, Ipv4Value},
    ipv6::{looks_like_ipv6, Ipv6Stub},
    AddressError,
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use tracing::{debug, trace};

/// Classification and matching operations shared by all address kinds.
pub trait IpAddress {
    /// Inside one of the built-in private blocks.
    fn is_private(&self) -> bool;

    fn is_public(&self) -> bool {
        !self.is_private()
    }

    /// Integer used for containment checks. Always 0 for an IPv6 stub.
    fn numeric_value(&self) -> u32;

    /// The four octets of the address part.
    fn raw_bytes(&self) -> Result<[u8; 4], AddressError>;

    /// Whether `other` is matched by `self`.
    fn contains(&self, other: &dyn IpAddress) -> bool;

    /// The text exactly as it was given.
    fn text_form(&self) -> &str;

    fn is_ipv4(&self) -> bool;

    fn is_ipv6(&self) -> bool;
}

/* ---------------------------------- */

/// A parsed address, see [parse_address].
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Address {
    V4(Ipv4Value),
    V6(Ipv6Stub),
}

/**
Parse an IPv4 address/CIDR or a (loosely checked) IPv6 address.

The IPv4 grammar is tried first, then the IPv6 syntax check. The two cannot
overlap since IPv4 text never contains a `:`.

## Errors
[AddressError::UnrecognizedAddressFormat] if neither matches.
*/
pub fn parse_address(text: impl AsRef<str>) -> Result<Address, AddressError> {
    let text: &str = text.as_ref();

    if is_ipv4(text) {
        trace!("'{text}' parsed as IPv4");
        return Ok(Address::V4(Ipv4Value::new(text)?));
    }

    if looks_like_ipv6(text) {
        trace!("'{text}' parsed as IPv6");
        return Ok(Address::V6(Ipv6Stub::new(text)?));
    }

    debug!("unrecognized address: '{text}'");
    Err(AddressError::UnrecognizedAddressFormat(text.to_string()))
}

impl Address {
    #[inline]
    fn inner(&self) -> &dyn IpAddress {
        match self {
            Address::V4(v4) => v4,
            Address::V6(v6) => v6,
        }
    }

    /// The IPv4 value, if this is one.
    pub fn as_ipv4(&self) -> Option<&Ipv4Value> {
        match self {
            Address::V4(v4) => Some(v4),
            Address::V6(_) => None,
        }
    }
}

impl IpAddress for Address {
    fn is_private(&self) -> bool {
        self.inner().is_private()
    }

    fn numeric_value(&self) -> u32 {
        self.inner().numeric_value()
    }

    fn raw_bytes(&self) -> Result<[u8; 4], AddressError> {
        self.inner().raw_bytes()
    }

    fn contains(&self, other: &dyn IpAddress) -> bool {
        self.inner().contains(other)
    }

    fn text_form(&self) -> &str {
        self.inner().text_form()
    }

    fn is_ipv4(&self) -> bool {
        matches!(self, Address::V4(_))
    }

    fn is_ipv6(&self) -> bool {
        matches!(self, Address::V6(_))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text_form())
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_address(s)
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        parse_address(text)
    }
}

impl From<Address> for String {
    fn from(addr: Address) -> Self {
        addr.text_form().to_string()
    }
}

impl From<Ipv4Value> for Address {
    fn from(v4: Ipv4Value) -> Self {
        Address::V4(v4)
    }
}

impl From<Ipv6Stub> for Address {
    fn from(v6: Ipv6Stub) -> Self {
        Address::V6(v6)
    }
}

/* -------------------------------------------------------------------------- */
