// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::ParamError;

const MAX_INT: usize = isize::MAX as usize;

/// Validated yescrypt cost parameters.
///
/// Construction is the only validation point: every bound is checked here so
/// that a rejected parameter set never reaches an allocation.
///
/// ```rust
/// use redoubt_yescrypt::{ParamError, Params};
///
/// let params = Params::new(4096, 32, 1).expect("Failed to create Params");
/// assert_eq!(params.memory_bytes(), 4096 * 32 * 128);
///
/// assert_eq!(Params::new(1000, 8, 1), Err(ParamError::NotPowerOfTwo));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    n: usize,
    r: usize,
    p: usize,
}

impl Params {
    /// Validates `N`, `r` and `p`.
    ///
    /// # Errors
    /// - [`ParamError::NotPowerOfTwo`] if `n <= 1` or `n` is not a power of two
    /// - [`ParamError::RZero`] if `r == 0`
    /// - [`ParamError::PUnsupported`] if `p != 1`
    /// - [`ParamError::TooLarge`] if `r * p >= 2^30` or `N * r * 128`,
    ///   `r * 128 * p` or `r * 256` would overflow
    pub fn new(n: usize, r: usize, p: usize) -> Result<Self, ParamError> {
        if n <= 1 || !n.is_power_of_two() {
            return Err(ParamError::NotPowerOfTwo);
        }
        if r == 0 {
            return Err(ParamError::RZero);
        }
        if p != 1 {
            return Err(ParamError::PUnsupported);
        }
        if (r as u64) * (p as u64) >= 1 << 30
            || r > MAX_INT / 128 / p
            || r > MAX_INT / 256
            || n > MAX_INT / 128 / r
        {
            return Err(ParamError::TooLarge);
        }

        Ok(Self { n, r, p })
    }

    /// `Params::new(2^log_n, r, 1)`
    pub fn from_log_n(log_n: u32, r: usize) -> Result<Self, ParamError> {
        let n = 1usize.checked_shl(log_n).ok_or(ParamError::TooLarge)?;
        Self::new(n, r, 1)
    }

    /// CPU/memory cost N
    pub fn n(&self) -> usize {
        self.n
    }

    /// Block size multiplier r
    pub fn r(&self) -> usize {
        self.r
    }

    /// Parallelism p (always 1)
    pub fn p(&self) -> usize {
        self.p
    }

    /// Size of the lookup table V in bytes (`N * r * 128`)
    pub fn memory_bytes(&self) -> usize {
        self.n * self.r * 128
    }

    /// Whether derivation runs the reduced-cost prehash pass first.
    pub(crate) fn needs_prehash(&self) -> bool {
        let n_per_lane = self.n / self.p;
        n_per_lane >= crate::consts::PREHASH_MIN_N
            && n_per_lane * self.r >= crate::consts::PREHASH_MIN_NR
    }
}
