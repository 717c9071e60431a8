// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// pwxform shape. Fixed by yescrypt 1.x; changing any of these changes the output.
pub(crate) const PWX_SIMPLE: usize = 2;
pub(crate) const PWX_GATHER: usize = 4;
pub(crate) const PWX_ROUNDS: usize = 6;
pub(crate) const S_WIDTH: usize = 8;

// Derived from the above
pub(crate) const PWX_BYTES: usize = PWX_GATHER * PWX_SIMPLE * 8;
pub(crate) const PWX_WORDS: usize = PWX_BYTES / 8;
pub(crate) const S_REGION_WORDS: usize = (1 << S_WIDTH) * PWX_SIMPLE;
pub(crate) const S_BYTES: usize = 3 * S_REGION_WORDS * 8;
pub(crate) const S_WORDS: usize = S_BYTES / 8;
pub(crate) const S_MASK: u32 = (((1 << S_WIDTH) - 1) * PWX_SIMPLE * 8) as u32;

/// Lanes in one 64-byte Salsa20 block
pub(crate) const BLOCK_WORDS: usize = 8;

/// Domain separation tag of the password prehash. The first 8 bytes
/// (`"yescrypt"`) key the final pass.
pub(crate) const PREHASH_TAG: &[u8; 16] = b"yescrypt-prehash";
pub(crate) const FINAL_TAG_LEN: usize = 8;

pub(crate) const CLIENT_KEY_TAG: &[u8] = b"Client Key";

// Thresholds for the reduced-cost prehash pass
pub(crate) const PREHASH_MIN_N: usize = 0x100;
pub(crate) const PREHASH_MIN_NR: usize = 0x20000;
pub(crate) const PREHASH_SHIFT: u32 = 6;

/// Length of the key encoded in a hash string
pub const KEY_LEN: usize = 32;

/// Salt length used for freshly generated settings
pub const SALT_LEN: usize = 16;

/// Flags implied by the `j` settings tag (yescrypt 1.x defaults)
pub const YESCRYPT_DEFAULTS: u32 = 0xb6;
