// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::block_mix::block_mix;
use crate::consts::BLOCK_WORDS;
use crate::salsa::salsa_xor;

fn sample_input(r: usize) -> Vec<u64> {
    (0..16 * r as u64)
        .map(|i| i.wrapping_mul(0x9e37_79b9_7f4a_7c15) ^ 0x5555)
        .collect()
}

#[test]
fn test_block_mix_chains_from_last_block() {
    let r = 1;
    let input = sample_input(r);
    let mut output = vec![0u64; 16 * r];
    let mut tmp = [0u64; BLOCK_WORDS];

    block_mix(&mut tmp, &input, &mut output, r);

    let mut expected = [0u64; BLOCK_WORDS];
    expected.copy_from_slice(&input[BLOCK_WORDS..]);
    salsa_xor(&mut expected, &input[..BLOCK_WORDS], 8);
    assert_eq!(output[..BLOCK_WORDS], expected);

    salsa_xor(&mut expected, &input[BLOCK_WORDS..], 8);
    assert_eq!(output[BLOCK_WORDS..], expected);
    assert_eq!(tmp, expected);
}

#[test]
fn test_block_mix_interleaves_even_and_odd() {
    let r = 3;
    let input = sample_input(r);
    let mut output = vec![0u64; 16 * r];
    let mut tmp = [0u64; BLOCK_WORDS];

    block_mix(&mut tmp, &input, &mut output, r);

    // Y_i for i = 0..2r, in order
    let mut chained = Vec::new();
    let mut x = [0u64; BLOCK_WORDS];
    x.copy_from_slice(&input[(2 * r - 1) * BLOCK_WORDS..]);
    for block in input.chunks_exact(BLOCK_WORDS) {
        salsa_xor(&mut x, block, 8);
        chained.push(x);
    }

    for (i, y) in chained.iter().enumerate() {
        let slot = if i % 2 == 0 { i / 2 } else { r + i / 2 };
        assert_eq!(
            output[slot * BLOCK_WORDS..(slot + 1) * BLOCK_WORDS],
            y[..],
            "block {} misplaced",
            i
        );
    }
}
