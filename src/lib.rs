// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
Parse IPv4 addresses and CIDR blocks (plus a loose IPv6 syntax check) and
answer classification/containment questions about them.

```ignore
use ipmatch::{parse_address, IpAddress};

let net = parse_address("10.0.0.0/16")?;
assert!(net.contains(&parse_address("10.0.0.1")?));
assert!(parse_address("192.168.0.1")?.is_private());
```
*/

mod iptools;

pub use iptools::*;
