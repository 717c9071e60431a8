// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// References:
// [1] libxcrypt 4.4.36: crypt_gensalt("$y$", count) for count 1..=7, and
//     crypt() over "$y$j7.$" with salts of 0..=24 characters

use crate::{SettingError, YescryptError, hash, verify};

/// (password, expected hash). Entries shorter than a full hash must fail.
const HASHES: [(&str, &str); 35] = [
    ("test1", "$y$j75$z7ztFz2FayrKI79/jEwlL.$u5x/j193MQ09wbFaRGYr0AH/A/jh3kunjuhYRVRNkmC"),
    ("test2", "$y$j85$uFLpki6/G99e8OAxVooij1$64Rji3LKk1v85LYVULHKh2YKeKoDu0ADrGt4l1JhQy8"),
    ("test3", "$y$j7T$aoovSEloTaFiZVMrFisfy.$wLTAPbITTB/XIpAGwcX0xxRCFEcDgPWpXTsij0SEbC5"),
    ("test4", "$y$j8T$P9xODwGnzlle5VHuP1/qA1$bAd4BXv1GBqNQZFzR0Ey42/w0/DFmnFkX1fRpjalAO2"),
    ("test5", "$y$j9T$fqIAg4Vpv9o1MKgWMnyax.$BxkUx27fLJlPOfyIfNEBPzjrDQ95LXKgN5OJii3GL7."),
    ("test6", "$y$jAT$70Rw91iJgO8Uzi3CLWfOo1$aYky8YP.XurVMdZfcXHY1do2RZ7Caav5iliKEkmJjhD"),
    ("test7", "$y$jBT$/YBmADVZsSMw3xfv8M76X0$14s2oH3zHEKh44d5eRVxmDvF8jgM/8SXd8mI4NBQIS1"),
    ("salt length 0", "$y$j7.$$cmp7v9bzgyAhctAaiyqG56MBYN2IYzfI5LvybJCKacD"),
    ("salt length 1", "$y$j7.$/"),
    ("salt length 2", "$y$j7.$//$DcruwIS63Fs/rFjEN0XX6h83bZyXgBTDICvINmSWVp5"),
    ("salt length 3", "$y$j7.$///$uo0SD4Xn0Bn1leZVH50teLu3Rje5GAIA.BKYA/jL3/C"),
    ("salt length 4", "$y$j7.$////$WXGIKO.4sthsRPnpY0/.OhyrlEkLcS1pymEGTbJA/l."),
    ("salt length 5", "$y$j7.$/////"),
    ("salt length 6", "$y$j7.$//////$9/wDzXoL4.VS3Ztb.NPiOu4wTpTBKrnJTxBwH1fK70A"),
    ("salt length 7", "$y$j7.$///////$iFpkxOqqnskGorbt2d.daPYT2vUWCRsisu0jr4sNF1."),
    ("salt length 8", "$y$j7.$////////$caDf7LpLxRuDzYqMUDha1Nvm9zX2M89hTuCi.33hpMA"),
    ("salt length 9", "$y$j7.$/////////"),
    ("salt length 10", "$y$j7.$//////////$w8.ijckeAcw8QTQFtNDzf6GAbpM0GS1tPF9.moe8DA6"),
    ("salt length 11", "$y$j7.$///////////$aNlOwAA3WuQ2GScDBr/fTD34oO0ZN/BksJ8d6ilH4O8"),
    ("salt length 12", "$y$j7.$////////////$9YMdFtGt/uJi6XsLbYVhRfnneKsMgoos2r.7fZ8Xn.."),
    ("salt length 13", "$y$j7.$/////////////"),
    ("salt length 14", "$y$j7.$//////////////$fPBNb956TRLinNI/LHoThcqdVO5gIGIg/nRpmyzB/T/"),
    ("salt length 15", "$y$j7.$///////////////$lzaOauYlT250iKS8qtIlo8Ail.PbSHjKSjRpPsEqcI6"),
    ("salt length 16", "$y$j7.$////////////////$DlYtorMMW/M1IdFxGPdfFS.STo61kYy/eHnOanwVvrC"),
    ("salt length 17", "$y$j7.$/////////////////"),
    ("salt length 18", "$y$j7.$//////////////////$3P/0DYS.t.P2VC4rnF9kWURChONU4ehShDJyGUIoYZ9"),
    ("salt length 19", "$y$j7.$///////////////////$.M.DTam6fr/7j36F7Mo0g3QGSYAD7PbZkwe8X9bJyd8"),
    ("salt length 20", "$y$j7.$////////////////////$dHX43Z/x85XNKoOu4UDromlyoPcD9isScOP8ZeW6l27"),
    ("salt length 21", "$y$j7.$/////////////////////"),
    ("salt length 22", "$y$j7.$//////////////////////$XXf4WJAUsQCV6TUulO3H/f3OWOuK8j8FX9ZtJluydw4"),
    ("salt length 23", "$y$j7.$///////////////////////$FOmK9/DdyesVtGrimp4GNqRPMQ5V6Z8/wfRPWZ.XhjA"),
    ("salt length 24", "$y$j7.$////////////////////////$xW7NvvbWPmxoFVWCDe.WNwrrSfuN/iVvy/05.lD/MO9"),
    ("", ""),
    ("", "$y$.7.$$"),
    ("", "$y$j..$$"),
];

/// Shortest possible full hash: `$y$jXY$$` plus 43 key characters
const MIN_HASH_LEN: usize = 51;

/// N = 2^13 and 2^14 with r = 32 (32 and 64 MiB)
fn is_expensive(expected: &str) -> bool {
    expected.starts_with("$y$jA") || expected.starts_with("$y$jB")
}

fn check_vector(i: usize, password: &str, expected: &str) {
    // Odd entries drop the key or part of the salt separator
    let mut cut = expected.len();
    if cut > 29 && i % 2 == 1 {
        cut = 29 + i / 2;
    }

    match hash(password.as_bytes(), &expected.as_bytes()[..cut]) {
        Ok(hashed) => assert_eq!(hashed, expected, "vector {}", i),
        Err(err) => assert!(
            expected.len() < MIN_HASH_LEN,
            "vector {}: unexpected error {}",
            i,
            err
        ),
    }
}

#[test]
fn test_hash_reference_vectors() {
    for (i, (password, expected)) in HASHES.iter().enumerate() {
        if is_expensive(expected) {
            continue;
        }
        check_vector(i, password, expected);
    }
}

#[test]
#[ignore = "allocates up to 64 MiB per vector"]
fn test_hash_reference_vectors_large() {
    for (i, (password, expected)) in HASHES.iter().enumerate() {
        if is_expensive(expected) {
            check_vector(i, password, expected);
        }
    }
}

#[test]
fn test_hash_rejects_malformed_settings() {
    assert_eq!(
        hash(b"", b""),
        Err(YescryptError::Setting(SettingError::BadLength))
    );
    assert_eq!(
        hash(b"", b"$y$.7.$$"),
        Err(YescryptError::Setting(SettingError::BadPrefix))
    );
    assert_eq!(
        hash(b"", b"$y$j..$$"),
        Err(YescryptError::Setting(SettingError::NOutOfRange))
    );
    assert_eq!(
        hash(b"salt length 1", b"$y$j7.$/"),
        Err(YescryptError::Setting(SettingError::BadEncoding))
    );
}

#[test]
fn test_hash_replaces_existing_key() {
    let hashed = hash(b"test1", b"$y$j75$z7ztFz2FayrKI79/jEwlL.$not-a-real-key")
        .expect("Failed to hash(..)");

    assert_eq!(
        hashed,
        "$y$j75$z7ztFz2FayrKI79/jEwlL.$u5x/j193MQ09wbFaRGYr0AH/A/jh3kunjuhYRVRNkmC"
    );
}

#[test]
fn test_verify_accepts_matching_password() {
    let (password, hashed) = HASHES[0];

    assert_eq!(verify(password.as_bytes(), hashed), Ok(true));
}

#[test]
fn test_verify_rejects_wrong_password() {
    let (_, hashed) = HASHES[0];

    assert_eq!(verify(b"test0", hashed), Ok(false));
    assert_eq!(verify(b"", hashed), Ok(false));
}

#[test]
fn test_verify_rejects_bare_setting() {
    // Re-hashing a bare setting appends a key, so it never equals the input
    assert_eq!(verify(b"test1", "$y$j75$z7ztFz2FayrKI79/jEwlL."), Ok(false));
}

#[test]
fn test_verify_rejects_tampered_key() {
    let (password, hashed) = HASHES[0];
    let mut tampered = hashed.to_string();
    tampered.pop();
    tampered.push('D');

    assert_eq!(verify(password.as_bytes(), &tampered), Ok(false));
}

#[test]
fn test_verify_propagates_setting_errors() {
    assert_eq!(
        verify(b"test1", "$2b$10$abcdefghijklmnopqrstuv"),
        Err(YescryptError::Setting(SettingError::BadPrefix))
    );
}
