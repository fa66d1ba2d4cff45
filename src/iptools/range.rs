// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    codec::{bytes_to_text, extract_prefix_len, strip_prefix, text_to_bytes, text_to_u32},
    AddressError, IPV4_BITS,
};

/**
Highest (broadcast) address of the block starting at `bytes`.

The first `prefix` bits (most significant first) are kept as given, all
remaining host bits are set to 1. The network bits are *not* cleared, so
`10.0.0.5` with prefix 24 yields `10.0.0.255`.

- `prefix >= 32`: input returned unchanged (single host)
- `prefix == 0`: `255.255.255.255`
*/
pub fn highest_address_in_block(bytes: [u8; 4], prefix: u8) -> [u8; 4] {
    let ip: u32 = u32::from_be_bytes(bytes);
    (ip | host_mask(prefix)).to_be_bytes()
}

/// u32 with the low `32 - prefix` bits set.
#[inline]
fn host_mask(prefix: u8) -> u32 {
    if prefix >= IPV4_BITS {
        return 0;
    }
    // shifting a u32 by 32 overflows, hence the guard above
    u32::MAX >> prefix
}

/* ---------------------------------- */

/// Inclusive range `[beg, end]` covered by an IPv4 address or CIDR block.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Ipv4Range {
    beg: u32,
    /// inclusive
    end: u32,
}

impl Ipv4Range {
    /// Create a new [Ipv4Range]. Fails with [AddressError::RangeOrder] if `beg > end`.
    pub fn new(beg: u32, end: u32) -> Result<Self, AddressError> {
        if beg > end {
            return Err(AddressError::RangeOrder(beg, end));
        }
        Ok(Self { beg, end })
    }

    /**
    Compute the range of already validated text, f.ex. `"10.0.0.0/8"`.

    `beg` is the address as written (not masked down to the network
    address), `end` is the highest address of its block.
    */
    pub(crate) fn from_text(text: &str) -> Result<Self, AddressError> {
        let addr: &str = strip_prefix(text);
        let beg: u32 = text_to_u32(addr)?;
        let high: [u8; 4] = highest_address_in_block(text_to_bytes(addr)?, extract_prefix_len(text));
        let end: u32 = text_to_u32(&bytes_to_text(high))?;
        Self::new(beg, end)
    }

    /// Lowest address of the range.
    pub fn beg(&self) -> u32 {
        self.beg
    }

    /// Highest address of the range, inclusive.
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Whether `value` falls inside the range, both ends included.
    #[inline]
    pub fn contains(&self, value: u32) -> bool {
        self.beg <= value && value <= self.end
    }

    /// Number of addresses in the range. A /0 would not fit in a u32.
    pub fn len(&self) -> u64 {
        (self.end - self.beg) as u64 + 1
    }

    /// True if the range covers exactly one address.
    pub fn is_host(&self) -> bool {
        self.beg == self.end
    }
}

/* -------------------------------------------------------------------------- */
