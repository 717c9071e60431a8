// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! yescrypt key derivation pipeline
//!
//! ```text
//! pw   = HMAC-SHA256(tag, password)
//! B    = PBKDF2-SHA256(pw, salt, 1, 128 * r)
//! pw   = B[..32]
//! S    = SMix_classic(B, r = 1, N = 96)            (S-box fill)
//! pw   = HMAC-SHA256(B[last 64 bytes], pw)
//! B    = SMix_pwxform(B, r, N, Nloop)
//! key  = PBKDF2-SHA256(pw, B, 1, max(keyLen, 32))
//! key[..32] = SHA256(HMAC-SHA256(key[..32], "Client Key"))
//! ```
//!
//! Large parameter sets first run the same pipeline with `N >> 6` and feed
//! its 32-byte output in as the password of the full-cost pass.

use alloc::vec::Vec;

use redoubt_pbkdf2::{HASH_LEN, Pbkdf2Error, hmac_sha256, pbkdf2_sha256, sha256};
use zeroize::{Zeroize, Zeroizing};

use crate::consts::{CLIENT_KEY_TAG, FINAL_TAG_LEN, PREHASH_SHIFT, PREHASH_TAG, S_WORDS};
use crate::error::YescryptError;
use crate::params::Params;
use crate::pwxform::PwxformState;
use crate::smix::{Mode, smix};

/// Scratch memory owned by one derivation.
struct Scratch {
    /// N slots of 16 * r lanes
    v: Zeroizing<Vec<u64>>,
    /// X and Y working regions, 16 * r lanes each
    xy: Zeroizing<Vec<u64>>,
}

impl Scratch {
    fn allocate(params: &Params) -> Result<Self, YescryptError> {
        Ok(Self {
            v: Zeroizing::new(zeroed(16 * params.n() * params.r())?),
            xy: Zeroizing::new(zeroed(32 * params.r())?),
        })
    }
}

fn zeroed<T: Copy + Default>(len: usize) -> Result<Vec<T>, YescryptError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| YescryptError::AllocationFailed)?;
    buf.resize(len, T::default());
    Ok(buf)
}

/// PBKDF2 caps its output at 2^32 - 1 blocks of 32 bytes.
fn check_key_len(len: usize) -> Result<(), YescryptError> {
    let blocks = (len as u64).div_ceil(HASH_LEN as u64);
    if blocks > u64::from(u32::MAX) {
        return Err(Pbkdf2Error::OutputTooLong.into());
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    /// Reduced-cost pass with N >> 6
    Prehash,
    Final,
}

impl Pass {
    fn tag(self) -> &'static [u8] {
        match self {
            Pass::Prehash => PREHASH_TAG,
            Pass::Final => &PREHASH_TAG[..FINAL_TAG_LEN],
        }
    }
}

/// Fills the S-boxes from `b`, re-keys `password_sha256` with the last block
/// of `b`, then runs the pwxform SMix over all of `b`.
fn smix_yescrypt(
    b: &mut [u8],
    r: usize,
    n: usize,
    scratch: &mut Scratch,
    password_sha256: &mut [u8; HASH_LEN],
) -> Result<(), YescryptError> {
    let mut sbox = Zeroizing::new(zeroed::<u64>(S_WORDS)?);
    smix(
        b,
        1,
        S_WORDS / 16,
        0,
        &mut sbox,
        &mut scratch.xy,
        &mut Mode::Classic,
    );

    let mut rekeyed = Zeroizing::new([0u8; HASH_LEN]);
    hmac_sha256(&b[64 * (2 * r - 1)..128 * r], &*password_sha256, &mut rekeyed);
    password_sha256.copy_from_slice(&*rekeyed);

    let mut mode = Mode::Yescrypt(PwxformState::new(core::mem::take(&mut *sbox)));
    let n_loop = ((n + 2) / 3 + 1) & !1;
    smix(b, r, n, n_loop, &mut scratch.v, &mut scratch.xy, &mut mode);

    Ok(())
}

/// Derives `out.len()` bytes with validated `params`.
///
/// Output for lengths below 32 is the prefix of the 32-byte output.
///
/// # Errors
/// - [`YescryptError::AllocationFailed`] if the lookup table cannot be reserved
/// - [`YescryptError::Digest`] if PBKDF2 rejects the output length
pub fn derive_into(
    password: &[u8],
    salt: &[u8],
    params: &Params,
    out: &mut [u8],
) -> Result<(), YescryptError> {
    check_key_len(out.len())?;

    let r = params.r();
    let mut n = params.n();

    let mut scratch = Scratch::allocate(params)?;

    let passes: &[Pass] = if params.needs_prehash() {
        log::debug!(
            "yescrypt: N={} r={} selects a prehash pass with N={}",
            n,
            r,
            n >> PREHASH_SHIFT
        );
        n >>= PREHASH_SHIFT;
        &[Pass::Prehash, Pass::Final]
    } else {
        &[Pass::Final]
    };

    // Input of the current pass: the caller's password, then the prehash output
    let mut pass_password = Zeroizing::new(password.to_vec());
    let mut key = Zeroizing::new(zeroed::<u8>(out.len().max(HASH_LEN))?);
    let mut b = Zeroizing::new(alloc::vec![0u8; 128 * r]);
    let mut password_sha256 = Zeroizing::new([0u8; HASH_LEN]);

    for &pass in passes {
        hmac_sha256(pass.tag(), &pass_password, &mut password_sha256);

        pbkdf2_sha256(&*password_sha256, salt, 1, &mut b)?;
        password_sha256.copy_from_slice(&b[..HASH_LEN]);

        smix_yescrypt(&mut b, r, n, &mut scratch, &mut password_sha256)?;

        pbkdf2_sha256(&*password_sha256, &b, 1, &mut key)?;

        match pass {
            Pass::Prehash => {
                pass_password.zeroize();
                pass_password.extend_from_slice(&key[..HASH_LEN]);
                n <<= PREHASH_SHIFT;
            }
            Pass::Final => {
                let mut client_key = Zeroizing::new([0u8; HASH_LEN]);
                hmac_sha256(&key[..HASH_LEN], CLIENT_KEY_TAG, &mut client_key);
                let stored_key = Zeroizing::new(sha256(&*client_key));
                key[..HASH_LEN].copy_from_slice(&*stored_key);
            }
        }
    }

    out.copy_from_slice(&key[..out.len()]);

    Ok(())
}

/// yescrypt key derivation with the reference defaults (no ROM, t = 0,
/// flags `0xb6`).
///
/// Parameters and `key_len` are validated before any memory is allocated.
///
/// ```rust
/// use redoubt_yescrypt::derive;
///
/// let key = derive(b"p", b"s", 16, 8, 1, 32).expect("Failed to derive(..)");
/// assert_eq!(key[..4], [0xc8, 0xc7, 0xff, 0x11]);
/// ```
///
/// # Errors
/// - [`YescryptError::InvalidParams`] for invalid `n`, `r` or `p`
/// - [`YescryptError::Digest`] if `key_len` exceeds what PBKDF2 can produce
/// - [`YescryptError::AllocationFailed`] if the output cannot be reserved
/// - see [`derive_into`]
pub fn derive(
    password: &[u8],
    salt: &[u8],
    n: usize,
    r: usize,
    p: usize,
    key_len: usize,
) -> Result<Vec<u8>, YescryptError> {
    let params = Params::new(n, r, p).inspect_err(|err| {
        log::debug!("yescrypt: rejected N={} r={} p={}: {}", n, r, p, err);
    })?;
    check_key_len(key_len)?;

    let mut out = zeroed::<u8>(key_len)?;
    derive_into(password, salt, &params, &mut out)?;
    Ok(out)
}
