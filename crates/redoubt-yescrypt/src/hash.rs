// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! crypt(3)-compatible `$y$` hashing

use alloc::string::String;

use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::consts::KEY_LEN;
use crate::encoding::encode64;
use crate::error::{SettingError, YescryptError};
use crate::kdf::derive_into;
use crate::settings::{Settings, salt_end};

/// Hashes `password` with the parameters and salt of `setting`.
///
/// `setting` may be a bare settings string (`$y$j9T$<salt>`) or a full hash,
/// whose key segment is replaced. The result is everything up to the last
/// `$` of `setting`, followed by `$` and the encoded 32-byte key.
///
/// ```rust
/// use redoubt_yescrypt::hash;
///
/// let hashed = hash(b"test2", b"$y$j85$uFLpki6/G99e8OAxVooij1").expect("Failed to hash(..)");
/// assert_eq!(
///     hashed,
///     "$y$j85$uFLpki6/G99e8OAxVooij1$64Rji3LKk1v85LYVULHKh2YKeKoDu0ADrGt4l1JhQy8"
/// );
/// ```
///
/// # Errors
/// - [`YescryptError::Setting`] for malformed or unsupported settings
/// - [`YescryptError::InvalidParams`] / [`YescryptError::AllocationFailed`]
///   from the key derivation
pub fn hash(password: &[u8], setting: &[u8]) -> Result<String, YescryptError> {
    let settings = Settings::parse(setting).inspect_err(|err| {
        log::debug!("yescrypt: rejected setting: {}", err);
    })?;
    let params = settings.params()?;

    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    derive_into(password, settings.salt(), &params, &mut *key)?;

    // Parsed above, so the head is ASCII
    let head = core::str::from_utf8(&setting[..salt_end(setting)])
        .map_err(|_| SettingError::BadCharacter)?;

    let encoded = encode64(&*key);
    let mut out = String::with_capacity(head.len() + 1 + encoded.len());
    out.push_str(head);
    out.push('$');
    out.push_str(&encoded);

    Ok(out)
}

/// Re-hashes `password` with the settings of `hashed` and compares the
/// result in constant time.
///
/// ```rust
/// use redoubt_yescrypt::verify;
///
/// let hashed = "$y$j85$uFLpki6/G99e8OAxVooij1$64Rji3LKk1v85LYVULHKh2YKeKoDu0ADrGt4l1JhQy8";
/// assert!(verify(b"test2", hashed).expect("Failed to verify(..)"));
/// assert!(!verify(b"test3", hashed).expect("Failed to verify(..)"));
/// ```
///
/// # Errors
/// See [`hash`]. A mismatch is `Ok(false)`, not an error.
pub fn verify(password: &[u8], hashed: &str) -> Result<bool, YescryptError> {
    let candidate = Zeroizing::new(hash(password, hashed.as_bytes())?);

    Ok(candidate.as_bytes().ct_eq(hashed.as_bytes()).into())
}
