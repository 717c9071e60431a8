// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// SHA-256 output size in bytes
pub const HASH_LEN: usize = 32;

/// SHA-256 block size in bytes
pub const BLOCK_LEN: usize = 64;

/// Maximum PBKDF2 output: (2^32 - 1) blocks of HASH_LEN bytes
pub(crate) const MAX_BLOCKS: u64 = u32::MAX as u64;
