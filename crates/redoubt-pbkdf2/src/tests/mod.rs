// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.


/// Parses a hexadecimal test vector, ignoring whitespace.
pub(crate) fn hex_to_bytes(hex: &str) -> Vec<u8> {
    let digits: Vec<u8> = hex.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    assert!(digits.len() % 2 == 0, "odd number of hex digits");

    digits
        .chunks_exact(2)
        .map(|pair| {
            let s = core::str::from_utf8(pair).expect("Failed to read hex pair");
            u8::from_str_radix(s, 16).expect("Failed to parse hex pair")
        })
        .collect()
}
