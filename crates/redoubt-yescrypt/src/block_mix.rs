// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! scrypt BlockMix_{Salsa20/8, r}

use crate::consts::BLOCK_WORDS;
use crate::salsa::salsa_xor_into;

/// Mixes `2r` 64-byte blocks of `input` into `output`.
///
/// Even-indexed results land in the first half of `output`, odd-indexed in
/// the second half, so integerify can always read the last block at
/// `(2r - 1) * 8`.
pub(crate) fn block_mix(tmp: &mut [u64; BLOCK_WORDS], input: &[u64], output: &mut [u64], r: usize) {
    let last = (2 * r - 1) * BLOCK_WORDS;
    tmp.copy_from_slice(&input[last..last + BLOCK_WORDS]);

    for i in (0..2 * r).step_by(2) {
        let even = i * BLOCK_WORDS;
        let odd = even + BLOCK_WORDS;
        let dst = i * 4;

        salsa_xor_into(tmp, &input[even..odd], &mut output[dst..], 8);
        salsa_xor_into(tmp, &input[odd..odd + BLOCK_WORDS], &mut output[dst + r * 8..], 8);
    }
}
