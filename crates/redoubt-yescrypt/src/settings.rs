// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `$y$j<N><r>$<salt>` settings strings
//!
//! Only the fixed-width `j` parameter form is understood: one character for
//! `log2(N) - 1` and one for `r - 1`. This covers what libxcrypt's
//! `crypt_gensalt("$y$", ..)` produces.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::ops::RangeInclusive;

use crate::consts::{SALT_LEN, YESCRYPT_DEFAULTS};
use crate::encoding::{atoi64, decode64, encode64, itoa64};
use crate::entropy::EntropySource;
use crate::error::{ParamError, SettingError, YescryptError};
use crate::params::Params;

/// Hash identifier
pub const PREFIX: &str = "$y$";

/// Parameter tag of the fixed-width settings form
const FLAVOR: u8 = b'j';

/// `$y$j` + two parameter characters + `$`
const MIN_LEN: usize = 7;

/// log2(N) accepted in settings strings
pub const LOG_N_RANGE: RangeInclusive<u32> = 10..=18;

/// r accepted in settings strings
pub const R_RANGE: RangeInclusive<u32> = 1..=32;

/// Encodes the three-character parameter field (`j9T` for N = 2^12, r = 32).
///
/// # Errors
/// [`SettingError::NOutOfRange`] / [`SettingError::ROutOfRange`] if a value
/// does not fit one alphabet character.
pub fn encode_setting(log_n: u32, r: u32) -> Result<[u8; 3], SettingError> {
    if !(1..=64).contains(&log_n) {
        return Err(SettingError::NOutOfRange);
    }
    if !(1..=64).contains(&r) {
        return Err(SettingError::ROutOfRange);
    }

    Ok(setting_field(log_n, r))
}

/// `j` + one character each for `log_n - 1` and `r - 1`. Both must be in
/// `1..=64`.
fn setting_field(log_n: u32, r: u32) -> [u8; 3] {
    [FLAVOR, itoa64((log_n - 1) as u8), itoa64((r - 1) as u8)]
}

/// Decodes the three-character parameter field into `(flags, log2(N), r)`.
///
/// # Errors
/// - [`SettingError::BadLength`] unless `setting` is exactly 3 bytes
/// - [`SettingError::BadPrefix`] unless it starts with `j`
/// - [`SettingError::BadCharacter`] for characters outside the alphabet
pub fn decode_setting(setting: &[u8]) -> Result<(u32, u32, u32), SettingError> {
    if setting.len() != 3 {
        return Err(SettingError::BadLength);
    }
    if setting[0] != FLAVOR {
        return Err(SettingError::BadPrefix);
    }

    let log_n = u32::from(atoi64(setting[1])?) + 1;
    let r = u32::from(atoi64(setting[2])?) + 1;

    Ok((YESCRYPT_DEFAULTS, log_n, r))
}

/// End of the salt segment: the last `$`, or the end of `setting` when the
/// only `$` signs belong to the prefix.
pub(crate) fn salt_end(setting: &[u8]) -> usize {
    match setting.iter().rposition(|&c| c == b'$') {
        Some(end) if end >= MIN_LEN => end,
        _ => setting.len(),
    }
}

/// Cost level of freshly generated settings, numbered like libxcrypt's
/// `crypt_gensalt` count.
///
/// | count | log2(N) | r  | memory  |
/// |-------|---------|----|---------|
/// | 1     | 10      | 8  | 1 MiB   |
/// | 2     | 11      | 8  | 2 MiB   |
/// | 3     | 10      | 32 | 4 MiB   |
/// | 5     | 12      | 32 | 16 MiB  |
/// | 11    | 18      | 32 | 1 GiB   |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cost(u8);

impl Cost {
    /// Cheapest cost
    pub const MIN: Cost = Cost(1);
    /// libxcrypt default (`j9T`)
    pub const DEFAULT: Cost = Cost(5);
    /// Most expensive cost that still fits the settings ranges
    pub const MAX: Cost = Cost(11);

    /// `0` selects [`Cost::DEFAULT`].
    ///
    /// # Errors
    /// [`SettingError::NOutOfRange`] for counts above 11.
    pub fn new(count: u8) -> Result<Self, SettingError> {
        match count {
            0 => Ok(Self::DEFAULT),
            1..=11 => Ok(Self(count)),
            _ => Err(SettingError::NOutOfRange),
        }
    }

    /// log2(N)
    pub fn log_n(self) -> u32 {
        if self.0 < 3 {
            9 + u32::from(self.0)
        } else {
            7 + u32::from(self.0)
        }
    }

    /// r
    pub fn r(self) -> u32 {
        if self.0 < 3 { 8 } else { 32 }
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Parsed settings: cost parameters, raw salt, and whether the salt was
/// closed by a `$`.
///
/// ```rust
/// use redoubt_yescrypt::Settings;
///
/// let settings = Settings::parse(b"$y$j9T$F5Jx5fExrKuPp53xLKQ..1").expect("Failed to parse(..)");
/// assert_eq!(settings.log_n(), 12);
/// assert_eq!(settings.r(), 32);
/// assert_eq!(settings.to_string(), "$y$j9T$F5Jx5fExrKuPp53xLKQ..1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    log_n: u32,
    r: u32,
    salt: Vec<u8>,
    salt_terminated: bool,
}

impl Settings {
    /// # Errors
    /// [`SettingError::NOutOfRange`] / [`SettingError::ROutOfRange`] outside
    /// [`LOG_N_RANGE`] / [`R_RANGE`].
    pub fn new(log_n: u32, r: u32, salt: &[u8]) -> Result<Self, SettingError> {
        if !LOG_N_RANGE.contains(&log_n) {
            return Err(SettingError::NOutOfRange);
        }
        if !R_RANGE.contains(&r) {
            return Err(SettingError::ROutOfRange);
        }

        Ok(Self {
            log_n,
            r,
            salt: salt.to_vec(),
            salt_terminated: false,
        })
    }

    /// Parses a settings string or a full hash.
    ///
    /// The salt runs up to the last `$`; a full hash's key segment is
    /// ignored. Without a `$` after the parameters the salt runs to the end.
    /// A `$` closing the salt is kept, so [`Settings::encode`] reproduces
    /// any settings string this accepts.
    ///
    /// # Errors
    /// - [`SettingError::BadLength`] for inputs shorter than `$y$jXY$`
    /// - [`SettingError::BadPrefix`] unless the input starts with `$y$j` and
    ///   has `$` after the parameter characters
    /// - [`SettingError::NOutOfRange`] / [`SettingError::ROutOfRange`]
    /// - [`SettingError::BadCharacter`] / [`SettingError::BadEncoding`] for a
    ///   malformed salt
    pub fn parse(setting: &[u8]) -> Result<Self, SettingError> {
        if setting.len() < MIN_LEN {
            return Err(SettingError::BadLength);
        }
        if !setting.starts_with(PREFIX.as_bytes()) || setting[MIN_LEN - 1] != b'$' {
            return Err(SettingError::BadPrefix);
        }

        let (_, log_n, r) = decode_setting(&setting[PREFIX.len()..MIN_LEN - 1])?;

        let end = salt_end(setting);
        let salt = decode64(&setting[MIN_LEN..end])?;

        let mut settings = Self::new(log_n, r, &[])?;
        settings.salt = salt;
        settings.salt_terminated = end < setting.len();
        Ok(settings)
    }

    /// New settings with a [`SALT_LEN`]-byte salt drawn from `entropy`.
    ///
    /// # Errors
    /// [`YescryptError::Entropy`] if the entropy source fails.
    pub fn generate<E: EntropySource>(cost: Cost, entropy: &E) -> Result<Self, YescryptError> {
        let mut salt = [0u8; SALT_LEN];
        entropy.fill_bytes(&mut salt)?;

        Ok(Self::new(cost.log_n(), cost.r(), &salt)?)
    }

    /// log2(N)
    pub fn log_n(&self) -> u32 {
        self.log_n
    }

    /// N
    pub fn n(&self) -> usize {
        1 << self.log_n
    }

    /// r
    pub fn r(&self) -> u32 {
        self.r
    }

    /// Decoded salt bytes
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// Whether the salt is followed by `$`
    pub fn salt_terminated(&self) -> bool {
        self.salt_terminated
    }

    /// Cost parameters for the key derivation (`p = 1`)
    pub fn params(&self) -> Result<Params, ParamError> {
        Params::from_log_n(self.log_n, self.r as usize)
    }

    /// `$y$j<N><r>$<salt>`, plus a closing `$` if the parsed salt had one.
    /// Parsing it yields `self` again.
    pub fn encode(&self) -> String {
        let salt = encode64(&self.salt);
        let mut out = String::with_capacity(MIN_LEN + salt.len() + 1);

        // Ranges are checked on construction
        let field = setting_field(self.log_n, self.r);

        out.push_str(PREFIX);
        out.extend(field.iter().map(|&c| char::from(c)));
        out.push('$');
        out.push_str(&salt);
        if self.salt_terminated {
            out.push('$');
        }

        out
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
