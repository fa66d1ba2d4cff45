// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{addresses::IpAddress, ipv4::Ipv4Value, strings::*, AddressError};
use lazy_static::lazy_static;
use std::slice::Iter;

// Built once on first use, never mutated afterwards. The entries are
// constants, so a parse failure is a programming error.
lazy_static! {
    static ref PRIVATE: Ipv4BlockSet = Ipv4BlockSet::from_strings(&PRIVATE_BLOCKS)
        .unwrap_or_else(|e| panic!("{ERR_REGISTRY}: {e}"));
}

/// The built-in private blocks: `127.0.0.1`, `10.0.0.0/8`, `172.16.0.0/12`, `192.168.0.0/16`.
pub fn private_blocks() -> &'static Ipv4BlockSet {
    &PRIVATE
}

/**
A fixed list of IPv4 addresses and/or CIDR blocks, queried for membership.

An address is a member if any block [contains](IpAddress::contains) it,
i.e. its numeric value lies inside that block's range.
*/
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Ipv4BlockSet {
    blocks: Vec<Ipv4Value>,
}

impl Ipv4BlockSet {
    pub fn new(blocks: Vec<Ipv4Value>) -> Self {
        Self { blocks }
    }

    /// Parse every entry with [Ipv4Value::new]. Fails on the first invalid one.
    pub fn from_strings(input: &[impl AsRef<str>]) -> Result<Self, AddressError> {
        let blocks: Vec<Ipv4Value> = input
            .iter()
            .map(Ipv4Value::new)
            .collect::<Result<Vec<Ipv4Value>, AddressError>>()?;
        Ok(Self::new(blocks))
    }

    /// Whether any block contains `addr`.
    pub fn contains(&self, addr: &dyn IpAddress) -> bool {
        self.blocks.iter().any(|b| b.contains(addr))
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Ipv4Value> {
        self.blocks.iter()
    }
}

impl<'a> IntoIterator for &'a Ipv4BlockSet {
    type Item = &'a Ipv4Value;
    type IntoIter = Iter<'a, Ipv4Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

/* -------------------------------------------------------------------------- */
