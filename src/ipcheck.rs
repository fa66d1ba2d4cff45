// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use ipmatch::{parse_address, Address, IpAddress};
use std::{
    env,
    io::{self, Write},
    process::ExitCode,
};

const USAGE: &str = "usage: ipcheck <address|cidr> [candidate ...]";
const EXIT_OK: u8 = 0;
const EXIT_FAIL: u8 = 1;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args, &mut io::stdout().lock(), &mut io::stderr().lock()) {
        Ok(code) => ExitCode::from(code),
        Err(_) => ExitCode::FAILURE,
    }
}

/**
Classify `args[0]` and report, for each further argument, whether the first
one contains it. Results go to `out`, usage and parse errors to `err`.

Returns the process exit code: 1 on missing or unparseable arguments.
*/
fn run(args: &[String], out: &mut impl Write, err: &mut impl Write) -> io::Result<u8> {
    let Some(first) = args.first() else {
        writeln!(err, "{USAGE}")?;
        return Ok(EXIT_FAIL);
    };

    let base: Address = match parse_address(first) {
        Ok(addr) => addr,
        Err(e) => {
            writeln!(err, "{e}")?;
            return Ok(EXIT_FAIL);
        }
    };

    writeln!(out, "{base}: {} {}", family(&base), scope(&base))?;

    for arg in &args[1..] {
        match parse_address(arg) {
            Ok(cand) => {
                let verdict = if base.contains(&cand) { "contains" } else { "does not contain" };
                writeln!(out, "{base} {verdict} {cand}")?;
            }
            Err(e) => {
                writeln!(err, "{e}")?;
                return Ok(EXIT_FAIL);
            }
        }
    }

    Ok(EXIT_OK)
}

fn family(addr: &Address) -> &'static str {
    if addr.is_ipv4() {
        "ipv4"
    } else {
        "ipv6"
    }
}

fn scope(addr: &Address) -> &'static str {
    if addr.is_private() {
        "private"
    } else {
        "public"
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    /// Run with string args, return (exit code, stdout, stderr).
    fn check(args: &[&str]) -> (u8, String, String) {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let code = run(&args, &mut out, &mut err).unwrap();
        (code, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_no_args_prints_usage() {
        let (code, out, err) = check(&[]);
        assert_eq!(code, EXIT_FAIL);
        assert!(out.is_empty());
        assert_eq!(err, format!("{USAGE}\n"));
    }

    #[test]
    fn test_bad_base_address() {
        let (code, out, err) = check(&["0.0.0.0.0", "10.0.0.1"]);
        assert_eq!(code, EXIT_FAIL);
        assert!(out.is_empty());
        assert_eq!(err, "unrecognized IP address format: '0.0.0.0.0'\n");
    }

    #[test]
    fn test_bad_candidate() {
        let (code, out, err) = check(&["10.0.0.0/16", "10.0.0.1", "nope"]);
        assert_eq!(code, EXIT_FAIL);
        assert_eq!(
            out,
            "10.0.0.0/16: ipv4 private\n10.0.0.0/16 contains 10.0.0.1\n"
        );
        assert_eq!(err, "unrecognized IP address format: 'nope'\n");
    }

    #[test]
    fn test_contains_report() {
        let (code, out, err) = check(&["10.0.0.0/16", "10.0.0.1", "10.1.0.1"]);
        assert_eq!(code, EXIT_OK);
        assert!(err.is_empty());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            [
                "10.0.0.0/16: ipv4 private",
                "10.0.0.0/16 contains 10.0.0.1",
                "10.0.0.0/16 does not contain 10.1.0.1",
            ]
        );
    }

    #[test]
    fn test_classify_only() {
        let (code, out, _) = check(&["50.16.224.25"]);
        assert_eq!(code, EXIT_OK);
        assert_eq!(out, "50.16.224.25: ipv4 public\n");

        let (code, out, _) = check(&["fe80::1"]);
        assert_eq!(code, EXIT_OK);
        assert_eq!(out, "fe80::1: ipv6 public\n");
    }
}
