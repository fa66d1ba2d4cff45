// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

pub(crate) static DOT: char = '.';
pub(crate) static SLASH: char = '/';
pub(crate) static COLON: char = ':';

// built-in private blocks (loopback host, RFC 1918)
pub(crate) static PRIVATE_BLOCKS: [&str; 4] = [
    "127.0.0.1",
    "10.0.0.0/8",
    "172.16.0.0/12",
    "192.168.0.0/16",
];

// mod.rs
pub(crate) static ERR_INVALID_V4: &str = "invalid IPv4 address or CIDR";
pub(crate) static ERR_UNRECOGNIZED: &str = "unrecognized IP address format";
pub(crate) static ERR_UNSUPPORTED: &str = "operation not supported";
pub(crate) static ERR_RNG_ORDER: &str = "range start is greater than end";

// ipv6.rs
pub(crate) static OP_V6_BYTES: &str = "raw bytes of an IPv6 address";

// blocks.rs
pub(crate) static ERR_REGISTRY: &str = "built-in private block failed to parse";
