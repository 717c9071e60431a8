// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use redoubt_pbkdf2::Pbkdf2Error;
use thiserror::Error;

/// Invalid cost parameters. Always reported before any scratch memory is
/// allocated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamError {
    /// N must be > 1 and a power of 2
    #[error("N must be > 1 and a power of 2")]
    NotPowerOfTwo,

    /// r must be > 0
    #[error("r must be > 0")]
    RZero,

    /// Only p = 1 is supported
    #[error("p must be 1")]
    PUnsupported,

    /// r * p >= 2^30, or a derived buffer size overflows
    #[error("parameters are too large")]
    TooLarge,
}

/// Malformed or unsupported settings string.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingError {
    /// Setting does not start with `$y$j` or lacks the `$` after the parameters
    #[error("unsupported setting prefix")]
    BadPrefix,

    /// Setting has the wrong length
    #[error("bad setting length")]
    BadLength,

    /// Byte outside of the `./0-9A-Za-z` alphabet
    #[error("invalid character in setting")]
    BadCharacter,

    /// Salt (or hash) segment does not decode to whole bytes
    #[error("bad salt encoding")]
    BadEncoding,

    /// log2(N) outside the supported range
    #[error("N out of supported range")]
    NOutOfRange,

    /// r outside the supported range
    #[error("r out of supported range")]
    ROutOfRange,
}

/// Entropy source error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    /// The system entropy source failed or is unavailable
    #[error("entropy source not available")]
    EntropyNotAvailable,
}

/// Top-level yescrypt error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum YescryptError {
    /// Cost parameters rejected
    #[error("invalid parameters: {0}")]
    InvalidParams(#[from] ParamError),

    /// Settings string rejected
    #[error("invalid setting: {0}")]
    Setting(#[from] SettingError),

    /// PBKDF2/HMAC layer failure
    #[error("digest failure: {0}")]
    Digest(#[from] Pbkdf2Error),

    /// Salt generation failure
    #[error("entropy failure: {0}")]
    Entropy(#[from] EntropyError),

    /// Scratch memory could not be reserved
    #[error("failed to allocate scratch memory")]
    AllocationFailed,
}
