// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC-SHA256 implementation per RFC 2104

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{BLOCK_LEN, HASH_LEN};
use crate::sha256::Sha256State;

/// Keyed HMAC-SHA256 state.
///
/// The inner hash is primed with `K ⊕ ipad` on construction; `K ⊕ opad` is
/// kept until [`finalize`](HmacSha256::finalize) so that one keyed state can
/// authenticate a message fed in several pieces (PBKDF2 needs `S || INT(i)`).
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct HmacSha256 {
    /// K ⊕ opad (0x5c repeated)
    k_opad: [u8; BLOCK_LEN],
    /// SHA256(K ⊕ ipad || message) in progress
    sha_inner: Sha256State,
    /// Scratch for SHA256(K ⊕ opad || inner)
    sha_outer: Sha256State,
    /// Inner hash result
    inner_hash: [u8; HASH_LEN],
}

impl HmacSha256 {
    /// Create a keyed HMAC-SHA256 state
    pub fn new(key: &[u8]) -> Self {
        let mut key_block = [0u8; BLOCK_LEN];
        let mut sha_inner = Sha256State::new();

        if key.len() > BLOCK_LEN {
            let mut hashed = [0u8; HASH_LEN];
            sha_inner.update(key);
            sha_inner.finalize(&mut hashed);
            key_block[..HASH_LEN].copy_from_slice(&hashed);
            hashed.zeroize();
        } else {
            key_block[..key.len()].copy_from_slice(key);
        }

        let mut k_ipad = [0x36u8; BLOCK_LEN];
        let mut k_opad = [0x5cu8; BLOCK_LEN];
        for ((ipad, opad), k) in k_ipad.iter_mut().zip(k_opad.iter_mut()).zip(key_block.iter()) {
            *ipad ^= k;
            *opad ^= k;
        }

        sha_inner.update(&k_ipad);

        k_ipad.zeroize();
        key_block.zeroize();

        Self {
            k_opad,
            sha_inner,
            sha_outer: Sha256State::new(),
            inner_hash: [0u8; HASH_LEN],
        }
    }

    /// Feed message bytes
    pub fn update(&mut self, data: &[u8]) {
        self.sha_inner.update(data);
    }

    /// Write the tag to `out`. The state is consumed and wiped on drop.
    pub fn finalize(mut self, out: &mut [u8; HASH_LEN]) {
        self.sha_inner.finalize(&mut self.inner_hash);

        self.sha_outer.update(&self.k_opad);
        self.sha_outer.update(&self.inner_hash);
        self.sha_outer.finalize(out);
    }
}

/// HMAC-SHA256(key, data) into `out`
pub fn hmac_sha256(key: &[u8], data: &[u8], out: &mut [u8; HASH_LEN]) {
    let mut mac = HmacSha256::new(key);
    mac.update(data);
    mac.finalize(out);
}
