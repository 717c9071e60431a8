// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! PBKDF2 per RFC 8018 Section 5.2, instantiated with HMAC-SHA256

use zeroize::Zeroize;

use crate::consts::{HASH_LEN, MAX_BLOCKS};
use crate::error::Pbkdf2Error;
use crate::hmac::HmacSha256;

/// PBKDF2-HMAC-SHA256 key derivation
///
/// Fills `out` with `out.len()` bytes derived from `password` and `salt`.
///
/// ```text
/// T(i) = U1 ^ U2 ^ ... ^ Uc
/// U1   = PRF(P, S || INT(i))
/// Uj   = PRF(P, Uj-1)
/// ```
///
/// # Errors
/// - [`Pbkdf2Error::ZeroRounds`] if `rounds == 0`
/// - [`Pbkdf2Error::OutputTooLong`] if `out` needs more than 2^32 - 1 blocks
pub fn pbkdf2_sha256(
    password: &[u8],
    salt: &[u8],
    rounds: u32,
    out: &mut [u8],
) -> Result<(), Pbkdf2Error> {
    if rounds == 0 {
        return Err(Pbkdf2Error::ZeroRounds);
    }

    let blocks = out.len().div_ceil(HASH_LEN) as u64;
    if blocks > MAX_BLOCKS {
        return Err(Pbkdf2Error::OutputTooLong);
    }

    let mut u = [0u8; HASH_LEN];
    let mut t = [0u8; HASH_LEN];

    for (i, chunk) in out.chunks_mut(HASH_LEN).enumerate() {
        // i < MAX_BLOCKS was checked above
        let counter = (i as u32) + 1;

        let mut mac = HmacSha256::new(password);
        mac.update(salt);
        mac.update(&counter.to_be_bytes());
        mac.finalize(&mut u);
        t.copy_from_slice(&u);

        for _ in 1..rounds {
            let mut mac = HmacSha256::new(password);
            mac.update(&u);
            mac.finalize(&mut u);
            for (ti, ui) in t.iter_mut().zip(u.iter()) {
                *ti ^= ui;
            }
        }

        chunk.copy_from_slice(&t[..chunk.len()]);
    }

    u.zeroize();
    t.zeroize();

    Ok(())
}
