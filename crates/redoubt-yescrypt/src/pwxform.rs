// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! pwxform: yescrypt's S-box based block mixing
//!
//! The S-box memory is one array of three 512-lane regions. Each call reads
//! two regions (S0, S1) and writes into the third (S2) at cursor `w`; after
//! the call the roles rotate so the region just written becomes the next S0.

use alloc::vec::Vec;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{
    BLOCK_WORDS, PWX_BYTES, PWX_GATHER, PWX_ROUNDS, PWX_SIMPLE, PWX_WORDS, S_MASK, S_REGION_WORDS,
    S_WORDS,
};
use crate::salsa::salsa_xor;

/// Which S-box region currently plays which role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroize)]
pub(crate) struct SboxRoles {
    /// S0
    pub(crate) read_a: usize,
    /// S1
    pub(crate) read_b: usize,
    /// S2
    pub(crate) write: usize,
}

impl SboxRoles {
    /// Layout right after S-box initialization: S2 is the first region, S1
    /// the second, S0 the third.
    pub(crate) const INITIAL: Self = Self {
        read_a: 2,
        read_b: 1,
        write: 0,
    };

    /// (S0, S1, S2) <- (S2, S0, S1)
    pub(crate) fn rotate(self) -> Self {
        Self {
            read_a: self.write,
            read_b: self.read_a,
            write: self.read_b,
        }
    }
}

/// S-boxes, role assignment and write cursor of one derivation.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct PwxformState {
    sbox: Vec<u64>,
    roles: SboxRoles,
    w: usize,
}

impl PwxformState {
    /// Takes ownership of an initialized S-box array of `S_WORDS` lanes.
    pub(crate) fn new(sbox: Vec<u64>) -> Self {
        debug_assert_eq!(sbox.len(), S_WORDS);

        Self {
            sbox,
            roles: SboxRoles::INITIAL,
            w: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn roles(&self) -> SboxRoles {
        self.roles
    }

    #[cfg(test)]
    pub(crate) fn cursor(&self) -> usize {
        self.w
    }

    #[cfg(test)]
    pub(crate) fn sbox(&self) -> &[u64] {
        &self.sbox
    }

    /// One pwxform transformation of a 64-byte window.
    pub(crate) fn pwxform(&mut self, x: &mut [u64; PWX_WORDS]) {
        let s0 = self.roles.read_a * S_REGION_WORDS;
        let s1 = self.roles.read_b * S_REGION_WORDS;
        let s2 = self.roles.write * S_REGION_WORDS;
        let mut w = self.w;

        for round in 0..PWX_ROUNDS {
            for j in 0..PWX_GATHER {
                let lane = j * PWX_SIMPLE;

                let v = x[lane];
                let lo = v as u32;
                let hi = (v >> 32) as u32;
                let xl = ((lo & S_MASK) / 8) as usize;
                let xh = ((hi & S_MASK) / 8) as usize;

                let a = (u64::from(hi) * u64::from(lo)).wrapping_add(self.sbox[s0 + xl])
                    ^ self.sbox[s1 + xh];
                x[lane] = a;

                let y = x[lane + 1];
                let b = ((y >> 32) * u64::from(y as u32)).wrapping_add(self.sbox[s0 + xl + 1])
                    ^ self.sbox[s1 + xh + 1];
                x[lane + 1] = b;

                // Interior rounds feed the write region
                if round != 0 && round != PWX_ROUNDS - 1 {
                    self.sbox[s2 + w] = a;
                    self.sbox[s2 + w + 1] = b;
                    w += 2;
                }
            }
        }

        self.roles = self.roles.rotate();
        self.w = w & (S_REGION_WORDS - 1);
    }

    /// BlockMix_pwxform over the `2r` 64-byte windows of `b`, in place.
    ///
    /// The last block is finished with a 2-round Salsa20 pass so that the
    /// value integerify reads next is not raw pwxform output.
    pub(crate) fn block_mix(&mut self, tmp: &mut [u64; PWX_WORDS], b: &mut [u64], r: usize) {
        let r1 = 128 * r / PWX_BYTES;

        let last = (r1 - 1) * PWX_WORDS;
        tmp.copy_from_slice(&b[last..last + PWX_WORDS]);

        for window in b[..r1 * PWX_WORDS].chunks_exact_mut(PWX_WORDS) {
            for (t, s) in tmp.iter_mut().zip(window.iter()) {
                *t ^= s;
            }
            self.pwxform(tmp);
            window.copy_from_slice(tmp);
        }

        let i = (r1 - 1) * PWX_BYTES / 64;
        let block = &mut b[i * BLOCK_WORDS..(i + 1) * BLOCK_WORDS];

        // Plain Salsa20/2 of the block: no carry XOR
        tmp.zeroize();
        salsa_xor(tmp, block, 2);
        block.copy_from_slice(tmp);
    }
}
