// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SMix: sequential fill of V followed by data-dependent reads

use zeroize::Zeroize;

use crate::block_mix::block_mix;
use crate::consts::BLOCK_WORDS;
use crate::pwxform::PwxformState;

/// Block mixing flavour of one SMix invocation.
pub(crate) enum Mode {
    /// scrypt BlockMix_{Salsa20/8}
    Classic,
    /// yescrypt BlockMix_pwxform with its S-box state
    Yescrypt(PwxformState),
}

/// Byte offset of the 32-bit word `j` (a multiple of 4) inside `B`.
///
/// Words are stored shuffled within each 64-byte block to match the SIMD
/// layout of the reference implementation.
#[inline(always)]
pub(crate) fn scramble(j: usize) -> usize {
    (j & !63) | ((j * 5) & 63)
}

/// Low 32 bits of the first lane of the last 64-byte block.
#[inline(always)]
pub(crate) fn integerify(x: &[u64], r: usize) -> u32 {
    x[(2 * r - 1) * BLOCK_WORDS] as u32
}

/// Largest power of two <= `x`. `x` must be non-zero.
#[inline(always)]
pub(crate) fn p2floor(mut x: u32) -> u32 {
    while x & (x - 1) != 0 {
        x &= x - 1;
    }
    x
}

/// Maps `x` into `[i - p2floor(i), i)`, i.e. into the most recently written
/// power-of-two window of V.
#[inline(always)]
pub(crate) fn wrap(x: u32, i: u32) -> u32 {
    let n = p2floor(i);
    (x & (n - 1)) + (i - n)
}

#[inline(always)]
fn xor_into(dst: &mut [u64], src: &[u64]) {
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d ^= s;
    }
}

/// Runs SMix over the first `128 * r` bytes of `b`.
///
/// `v` must hold at least `n * 16 * r` lanes, `xy` at least `32 * r`
/// (`16 * r` suffice in [`Mode::Yescrypt`]).
pub(crate) fn smix(
    b: &mut [u8],
    r: usize,
    n: usize,
    n_loop: usize,
    v: &mut [u64],
    xy: &mut [u64],
    mode: &mut Mode,
) {
    let lanes = 16 * r;
    let mask = (n - 1) as u32;
    let mut tmp = [0u64; BLOCK_WORDS];

    let (x, y) = xy.split_at_mut(lanes);

    let mut j = 0;
    for lane in x.iter_mut() {
        let lo = read_u32_le(b, scramble(j));
        let hi = read_u32_le(b, scramble(j + 4));
        *lane = u64::from(lo) | (u64::from(hi) << 32);
        j += 8;
    }

    match mode {
        Mode::Classic => {
            let y = &mut y[..lanes];

            for i in (0..n).step_by(2) {
                v[i * lanes..(i + 1) * lanes].copy_from_slice(x);
                block_mix(&mut tmp, x, y, r);

                v[(i + 1) * lanes..(i + 2) * lanes].copy_from_slice(y);
                block_mix(&mut tmp, y, x, r);
            }

            for _ in (0..n_loop).step_by(2) {
                let k = (integerify(x, r) & mask) as usize;
                xor_into(x, &v[k * lanes..(k + 1) * lanes]);
                block_mix(&mut tmp, x, y, r);

                let k = (integerify(y, r) & mask) as usize;
                xor_into(y, &v[k * lanes..(k + 1) * lanes]);
                block_mix(&mut tmp, y, x, r);
            }
        }
        Mode::Yescrypt(state) => {
            for i in 0..n {
                v[i * lanes..(i + 1) * lanes].copy_from_slice(x);
                if i > 1 {
                    let k = wrap(integerify(x, r), i as u32) as usize;
                    xor_into(x, &v[k * lanes..(k + 1) * lanes]);
                }
                state.block_mix(&mut tmp, x, r);
            }

            for _ in 0..n_loop {
                let k = (integerify(x, r) & mask) as usize;
                let slot = &mut v[k * lanes..(k + 1) * lanes];
                xor_into(x, slot);
                slot.copy_from_slice(x);
                state.block_mix(&mut tmp, x, r);
            }
        }
    }

    let mut j = 0;
    for lane in x.iter() {
        write_u32_le(b, scramble(j), *lane as u32);
        write_u32_le(b, scramble(j + 4), (*lane >> 32) as u32);
        j += 8;
    }

    tmp.zeroize();
}

#[inline(always)]
fn read_u32_le(b: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([b[at], b[at + 1], b[at + 2], b[at + 3]])
}

#[inline(always)]
fn write_u32_le(b: &mut [u8], at: usize, value: u32) {
    b[at..at + 4].copy_from_slice(&value.to_le_bytes());
}
