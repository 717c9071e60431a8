// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod block_mix;
mod hash;

use core::cell::Cell;

use crate::{EntropyError, EntropySource};

/// Deterministic entropy: counts up from `seed`, or fails on demand.
pub(crate) struct MockEntropySource {
    next: Cell<u8>,
    fail: bool,
}

impl MockEntropySource {
    pub(crate) fn new(seed: u8) -> Self {
        Self {
            next: Cell::new(seed),
            fail: false,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            next: Cell::new(0),
            fail: true,
        }
    }
}

impl EntropySource for MockEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        if self.fail {
            return Err(EntropyError::EntropyNotAvailable);
        }

        for byte in dest.iter_mut() {
            *byte = self.next.get();
            self.next.set(self.next.get().wrapping_add(1));
        }

        Ok(())
    }
}
