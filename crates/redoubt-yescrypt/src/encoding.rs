// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! crypt(3)-style base64 over `./0-9A-Za-z`
//!
//! Bytes are packed little-endian into groups of up to 24 bits and emitted
//! six bits at a time, least significant first. There is no padding.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::SettingError;

/// Encoding alphabet
pub const ITOA64: &[u8; 64] = b"./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const INVALID: u8 = 0xff;

const ATOI64: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ITOA64.len() {
        table[ITOA64[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Value of one alphabet character
pub fn atoi64(c: u8) -> Result<u8, SettingError> {
    match ATOI64[c as usize] {
        INVALID => Err(SettingError::BadCharacter),
        value => Ok(value),
    }
}

/// Alphabet character for the low six bits of `value`
pub fn itoa64(value: u8) -> u8 {
    ITOA64[(value & 0x3f) as usize]
}

/// Encodes `src`, producing `ceil(8 * len / 6)` characters.
pub fn encode64(src: &[u8]) -> String {
    let mut dst = String::with_capacity((src.len() * 8).div_ceil(6));

    for group in src.chunks(3) {
        let mut value = 0u32;
        let mut bits = 0u32;
        for &byte in group {
            value |= u32::from(byte) << bits;
            bits += 8;
        }

        while bits > 0 {
            dst.push(char::from(itoa64(value as u8)));
            value >>= 6;
            bits = bits.saturating_sub(6);
        }
    }

    dst
}

/// Decodes `src`.
///
/// # Errors
/// - [`SettingError::BadCharacter`] for bytes outside the alphabet
/// - [`SettingError::BadEncoding`] if a trailing group carries less than one
///   full byte or its unused bits are not zero
pub fn decode64(src: &[u8]) -> Result<Vec<u8>, SettingError> {
    let mut dst = Vec::with_capacity(src.len() * 3 / 4);

    for group in src.chunks(4) {
        let mut value = 0u32;
        let mut bits = 0u32;
        for &c in group {
            value |= u32::from(atoi64(c)?) << bits;
            bits += 6;
        }

        // At least one full byte
        if bits < 12 {
            return Err(SettingError::BadEncoding);
        }

        while bits >= 8 {
            dst.push(value as u8);
            value >>= 8;
            bits -= 8;
        }

        // 2 or 4 leftover bits must be zero
        if value != 0 {
            return Err(SettingError::BadEncoding);
        }
    }

    Ok(dst)
}
