// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 implementation per FIPS 180-4 Section 6.2

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{BLOCK_LEN, HASH_LEN};

/// SHA-256 constants K per FIPS 180-4 Section 4.2.2
const K256: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

/// Initial hash values H(0) per FIPS 180-4 Section 5.3.3
const H0: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// SHA-256 streaming state
///
/// The message schedule and the partial input block live in the struct so
/// they are wiped together with the chaining value.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Sha256State {
    h: [u32; 8],
    w: [u32; 64],
    buffer: [u8; BLOCK_LEN],
    buffer_len: usize,
    total_len: u64,
}

impl Default for Sha256State {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha256State {
    /// Create new SHA-256 state initialized with H(0)
    pub fn new() -> Self {
        Self {
            h: H0,
            w: [0u32; 64],
            buffer: [0u8; BLOCK_LEN],
            buffer_len: 0,
            total_len: 0,
        }
    }

    /// Reset to H(0) for reuse
    pub fn reset(&mut self) {
        self.zeroize();
        self.h = H0;
    }

    /// Update state with data
    pub fn update(&mut self, data: &[u8]) {
        let mut offset = 0;
        self.total_len = self.total_len.wrapping_add(data.len() as u64);

        // Fill buffer if partially filled
        if self.buffer_len > 0 {
            let copy_len = core::cmp::min(BLOCK_LEN - self.buffer_len, data.len());
            self.buffer[self.buffer_len..self.buffer_len + copy_len]
                .copy_from_slice(&data[..copy_len]);
            self.buffer_len += copy_len;
            offset = copy_len;

            if self.buffer_len == BLOCK_LEN {
                compress(&mut self.h, &mut self.w, &self.buffer);
                self.buffer.zeroize();
                self.buffer_len = 0;
            }
        }

        // Process full blocks straight from the input
        while offset + BLOCK_LEN <= data.len() {
            compress(&mut self.h, &mut self.w, &data[offset..offset + BLOCK_LEN]);
            offset += BLOCK_LEN;
        }

        if offset < data.len() {
            let remaining = data.len() - offset;
            self.buffer[..remaining].copy_from_slice(&data[offset..]);
            self.buffer_len = remaining;
        }
    }

    /// Finalize, write the digest to `out` and reset to H(0)
    pub fn finalize(&mut self, out: &mut [u8; HASH_LEN]) {
        let bit_len = self.total_len.wrapping_mul(8);

        self.buffer[self.buffer_len] = 0x80;
        self.buffer_len += 1;

        // Not enough room for the 64-bit length: pad and compress
        if self.buffer_len > BLOCK_LEN - 8 {
            self.buffer[self.buffer_len..].fill(0);
            compress(&mut self.h, &mut self.w, &self.buffer);
            self.buffer_len = 0;
        }

        self.buffer[self.buffer_len..BLOCK_LEN - 8].fill(0);
        self.buffer[BLOCK_LEN - 8..].copy_from_slice(&bit_len.to_be_bytes());
        compress(&mut self.h, &mut self.w, &self.buffer);

        for (chunk, word) in out.chunks_exact_mut(4).zip(self.h.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }

        self.reset();
    }
}

/// SHA-256 compression of a single 64-byte block per FIPS 180-4 Section 6.2.2
fn compress(h: &mut [u32; 8], w: &mut [u32; 64], block: &[u8]) {
    debug_assert_eq!(block.len(), BLOCK_LEN);

    for (t, chunk) in block.chunks_exact(4).enumerate() {
        w[t] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    // W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
    for t in 16..64 {
        let s0 = w[t - 15].rotate_right(7) ^ w[t - 15].rotate_right(18) ^ (w[t - 15] >> 3);
        let s1 = w[t - 2].rotate_right(17) ^ w[t - 2].rotate_right(19) ^ (w[t - 2] >> 10);
        w[t] = s1
            .wrapping_add(w[t - 7])
            .wrapping_add(s0)
            .wrapping_add(w[t - 16]);
    }

    let mut wv = *h;

    for (k, wt) in K256.iter().zip(w.iter()) {
        let [a, b, c, d, e, f, g, hh] = wv;

        let bsig1 = e.rotate_right(6) ^ e.rotate_right(11) ^ e.rotate_right(25);
        let ch = (e & f) ^ (!e & g);
        let t1 = hh
            .wrapping_add(bsig1)
            .wrapping_add(ch)
            .wrapping_add(*k)
            .wrapping_add(*wt);

        let bsig0 = a.rotate_right(2) ^ a.rotate_right(13) ^ a.rotate_right(22);
        let maj = (a & b) ^ (a & c) ^ (b & c);
        let t2 = bsig0.wrapping_add(maj);

        wv = [t1.wrapping_add(t2), a, b, c, d.wrapping_add(t1), e, f, g];
    }

    for (hi, vi) in h.iter_mut().zip(wv.iter()) {
        *hi = hi.wrapping_add(*vi);
    }

    wv.zeroize();
    w.zeroize();
}

/// SHA-256 of a complete message
pub fn sha256(data: &[u8]) -> [u8; HASH_LEN] {
    let mut state = Sha256State::new();
    let mut out = [0u8; HASH_LEN];
    state.update(data);
    state.finalize(&mut out);
    out
}
