// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// PBKDF2 error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pbkdf2Error {
    /// Requested output length exceeds maximum ((2^32 - 1) * HashLen)
    #[error("requested output length exceeds maximum ((2^32 - 1) * HashLen)")]
    OutputTooLong,

    /// Iteration count must be at least 1
    #[error("iteration count must be at least 1")]
    ZeroRounds,
}
