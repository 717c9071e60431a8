// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! yescrypt memory-hard password hashing with secure memory handling
//!
//! Native yescrypt with the reference defaults of yescrypt 1.1 (flags
//! `0xb6`, `p = 1`, `t = 0`, no ROM), plus the `$y$` crypt(3) string format
//! as produced by libxcrypt.
//!
//! Scratch memory, S-boxes and intermediate password hashes are zeroized
//! when they go out of scope.
//!
//! References:
//! - yescrypt: <https://www.openwall.com/yescrypt/>
//! - RFC 7914: The scrypt Password-Based Key Derivation Function
//!   <https://datatracker.ietf.org/doc/html/rfc7914>
//!
//! ```rust
//! use redoubt_yescrypt::{Cost, Settings, SystemEntropySource, hash, verify};
//!
//! let settings = Settings::generate(Cost::MIN, &SystemEntropySource)
//!     .expect("Failed to generate(..)");
//! let hashed = hash(b"hunter2", settings.encode().as_bytes()).expect("Failed to hash(..)");
//!
//! assert!(verify(b"hunter2", &hashed).expect("Failed to verify(..)"));
//! assert!(!verify(b"hunter3", &hashed).expect("Failed to verify(..)"));
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod block_mix;
mod consts;
mod encoding;
mod entropy;
mod error;
mod hash;
mod kdf;
mod params;
mod pwxform;
mod salsa;
mod settings;
mod smix;

pub use consts::{KEY_LEN, SALT_LEN, YESCRYPT_DEFAULTS};
pub use encoding::{ITOA64, atoi64, decode64, encode64, itoa64};
pub use entropy::{EntropySource, SystemEntropySource};
pub use error::{EntropyError, ParamError, SettingError, YescryptError};
pub use hash::{hash, verify};
pub use kdf::{derive, derive_into};
pub use params::Params;
pub use settings::{
    Cost, LOG_N_RANGE, PREFIX, R_RANGE, Settings, decode_setting, encode_setting,
};
