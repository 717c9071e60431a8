// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Salsa20 core over eight 64-bit lanes
//!
//! Lanes hold the 16 Salsa20 words in the shuffled order used by yescrypt's
//! reference SIMD layout, so the lane -> word mapping below is not linear.

use crate::consts::BLOCK_WORDS;

/// (low word, high word) index of each lane
pub(crate) const LANE_WORDS: [(usize, usize); BLOCK_WORDS] = [
    (0, 5),
    (10, 15),
    (4, 9),
    (14, 3),
    (8, 13),
    (2, 7),
    (12, 1),
    (6, 11),
];

#[inline(always)]
fn quarter_round(x: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    x[b] ^= x[a].wrapping_add(x[d]).rotate_left(7);
    x[c] ^= x[b].wrapping_add(x[a]).rotate_left(9);
    x[d] ^= x[c].wrapping_add(x[b]).rotate_left(13);
    x[a] ^= x[d].wrapping_add(x[c]).rotate_left(18);
}

/// `tmp = Salsa20/rounds(tmp ^ input)`
///
/// `rounds` must be even: 8 for BlockMix, 2 for the pwxform finalization.
/// Callers that also need the result elsewhere copy `tmp` out afterwards.
pub(crate) fn salsa_xor(tmp: &mut [u64; BLOCK_WORDS], input: &[u64], rounds: usize) {
    debug_assert!(rounds % 2 == 0);

    for (t, i) in tmp.iter_mut().zip(input[..BLOCK_WORDS].iter()) {
        *t ^= i;
    }

    let mut x = [0u32; 16];
    for (lane, &(lo, hi)) in tmp.iter().zip(LANE_WORDS.iter()) {
        x[lo] = *lane as u32;
        x[hi] = (*lane >> 32) as u32;
    }
    let initial = x;

    for _ in (0..rounds).step_by(2) {
        // Columns
        quarter_round(&mut x, 0, 4, 8, 12);
        quarter_round(&mut x, 5, 9, 13, 1);
        quarter_round(&mut x, 10, 14, 2, 6);
        quarter_round(&mut x, 15, 3, 7, 11);

        // Rows
        quarter_round(&mut x, 0, 1, 2, 3);
        quarter_round(&mut x, 5, 6, 7, 4);
        quarter_round(&mut x, 10, 11, 8, 9);
        quarter_round(&mut x, 15, 12, 13, 14);
    }

    for (lane, &(lo, hi)) in tmp.iter_mut().zip(LANE_WORDS.iter()) {
        let l = x[lo].wrapping_add(initial[lo]);
        let h = x[hi].wrapping_add(initial[hi]);
        *lane = u64::from(l) | (u64::from(h) << 32);
    }
}

/// Salsa20 with the result written to both `tmp` and `out`.
#[inline(always)]
pub(crate) fn salsa_xor_into(
    tmp: &mut [u64; BLOCK_WORDS],
    input: &[u64],
    out: &mut [u64],
    rounds: usize,
) {
    salsa_xor(tmp, input, rounds);
    out[..BLOCK_WORDS].copy_from_slice(tmp);
}
