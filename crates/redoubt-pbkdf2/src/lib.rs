// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! PBKDF2-HMAC-SHA256 implementation with secure memory handling
//!
//! Implementation per RFC 8018 (PBKDF2), RFC 2104 (HMAC) and FIPS 180-4
//! (SHA-256). Hash states, HMAC pads and PBKDF2 blocks are zeroized when
//! they go out of scope.
//!
//! References:
//! - RFC 8018: PKCS #5: Password-Based Cryptography Specification Version 2.1
//!   <https://datatracker.ietf.org/doc/html/rfc8018>
//! - RFC 2104: HMAC: Keyed-Hashing for Message Authentication
//!   <https://datatracker.ietf.org/doc/html/rfc2104>
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf>
//!
//! ```rust
//! use redoubt_pbkdf2::{hmac_sha256, pbkdf2_sha256, sha256};
//!
//! let digest = sha256(b"abc");
//! assert_eq!(digest[0], 0xba);
//!
//! let mut mac = [0u8; 32];
//! hmac_sha256(b"key", b"message", &mut mac);
//!
//! let mut okm = [0u8; 64];
//! pbkdf2_sha256(b"passwd", b"salt", 1, &mut okm).expect("Failed to pbkdf2_sha256(..)");
//! assert_eq!(okm[..4], [0x55, 0xac, 0x04, 0x6e]);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod consts;
mod error;
mod hmac;
mod pbkdf2;
mod sha256;

pub use consts::{BLOCK_LEN, HASH_LEN};
pub use error::Pbkdf2Error;
pub use hmac::{HmacSha256, hmac_sha256};
pub use pbkdf2::pbkdf2_sha256;
pub use sha256::{Sha256State, sha256};
