// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha1::Sha1;

use crate::consts::MAX_KEY_BYTES;
use crate::error::Fe26CryptoError;

/// Derives a key from `password` and `salt` via PBKDF2-HMAC-SHA1.
///
/// `salt` is whatever byte string the wire format specifies as the PBKDF2
/// salt — for `Fe26.1` tokens this is the *hex-encoded* salt characters, not
/// the raw salt bytes (preserved for interoperability; see `fe26`'s design
/// notes on this wire format's deliberate choice of PBKDF2-HMAC-SHA1 even
/// where the integrity tag itself uses HMAC-SHA256).
///
/// `out.len()` must not exceed [`MAX_KEY_BYTES`].
pub fn derive_key(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    out: &mut [u8],
) -> Result<(), Fe26CryptoError> {
    if out.len() > MAX_KEY_BYTES {
        return Err(Fe26CryptoError::KeyTooLong);
    }
    pbkdf2::<Hmac<Sha1>>(password, salt, iterations, out)
        .map_err(|_| Fe26CryptoError::KeyTooLong)
}
