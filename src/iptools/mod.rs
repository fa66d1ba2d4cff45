// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! IP address and/or CIDR parsing, classification and block containment.

mod addresses;
mod blocks;
mod codec;
mod ipv4;
mod ipv6;
mod range;
mod strings;

use std::{error, fmt, net::Ipv4Addr};
use strings::*;

pub use addresses::{parse_address, Address, IpAddress};
pub use blocks::{private_blocks, Ipv4BlockSet};
pub use codec::{bytes_to_text, extract_prefix_len, strip_prefix, text_to_bytes, text_to_u32};
pub use ipv4::{is_ipv4, Ipv4Value};
pub use ipv6::{looks_like_ipv6, Ipv6Stub};
pub use range::{highest_address_in_block, Ipv4Range};

pub(crate) const IPV4_BITS: u8 = 32;
pub(crate) const IPV4_OCTETS: usize = 4;
/// upper bound on colon-separated groups accepted by the IPv6 syntax check
pub(crate) const MAX_IPV6_GROUPS: usize = 9;

#[rustfmt::skip]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AddressError {
    /// empty, absent, or not a dotted-quad with optional `/1..32` prefix
    InvalidIpv4Format(String),
    /// neither IPv4 nor loosely IPv6-shaped
    UnrecognizedAddressFormat(String),
    /// operation has no meaning for this address family
    UnsupportedOperation(&'static str),
    /// range start is greater than its end
    RangeOrder(u32, u32),
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::InvalidIpv4Format(ip) => {
                write!(f, "{ERR_INVALID_V4}: '{ip}'")
            }
            AddressError::UnrecognizedAddressFormat(ip) => {
                write!(f, "{ERR_UNRECOGNIZED}: '{ip}'")
            }
            AddressError::UnsupportedOperation(op) => {
                write!(f, "{ERR_UNSUPPORTED}: {op}")
            }
            AddressError::RangeOrder(beg, end) => {
                write!(f, "{ERR_RNG_ORDER} ({} > {})", Ipv4Addr::from(*beg), Ipv4Addr::from(*end))
            }
        }
    }
}

impl error::Error for AddressError {}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = AddressError::InvalidIpv4Format("10.0.0".into());
        assert_eq!(e.to_string(), "invalid IPv4 address or CIDR: '10.0.0'");

        let e = AddressError::UnrecognizedAddressFormat("0.0.0.0.0".into());
        assert_eq!(e.to_string(), "unrecognized IP address format: '0.0.0.0.0'");

        let e = AddressError::UnsupportedOperation(OP_V6_BYTES);
        assert_eq!(e.to_string(), "operation not supported: raw bytes of an IPv6 address");

        let e = AddressError::RangeOrder(5, 1);
        assert_eq!(e.to_string(), "range start is greater than end (0.0.0.5 > 0.0.0.1)");
    }
}
