// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::consts::HMAC_SHA256_BYTES;
use crate::error::Fe26CryptoError;

type HmacSha256 = Hmac<Sha256>;

/// Computes the HMAC-SHA256 tag of `data` under `key` into `out`.
///
/// `out` must be exactly [`HMAC_SHA256_BYTES`] long. `key` is the raw,
/// already-derived integrity key, not a password — callers run
/// [`crate::derive_key`] first.
pub fn hmac(key: &[u8], data: &[u8], out: &mut [u8]) -> Result<(), Fe26CryptoError> {
    if out.len() != HMAC_SHA256_BYTES {
        return Err(Fe26CryptoError::BufferTooSmall);
    }
    let mut mac =
        HmacSha256::new_from_slice(key).map_err(|_| Fe26CryptoError::KeyTooLong)?;
    mac.update(data);
    out.copy_from_slice(&mac.finalize().into_bytes());
    Ok(())
}
