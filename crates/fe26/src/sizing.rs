// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Pure functions computing exact buffer sizes for seal/unseal, so callers
//! never allocate inside this crate and never under- or over-size a buffer
//! by guesswork.

use fe26_codec::{base64url, hex};
use fe26_crypto::{CIPHER_BLOCK_BYTES, HMAC_SHA256_BYTES};

use crate::context::Context;
use crate::error::Fe26Error;

/// Size of the buffer needed to hold `data_len` bytes encrypted under any
/// CBC algorithm this crate supports, PKCS#7 padding included.
///
/// `data_len + block - (data_len % block)`, checked against overflow the
/// same way the original does: `data_len` must be at least two block sizes
/// below `usize::MAX`.
pub fn encryption_buffer_len(data_len: usize) -> Result<usize, Fe26Error> {
    let block = CIPHER_BLOCK_BYTES;
    if usize::MAX - data_len < 2 * block {
        return Err(Fe26Error::Overflow);
    }
    Ok(data_len + block - (data_len % block))
}

/// Size of the buffer needed to hold a sealed token for `data_len` bytes of
/// payload and a password ID of `password_id_len` bytes, under `ctx`.
pub fn seal_buffer_len(
    ctx: Context,
    data_len: usize,
    password_id_len: usize,
) -> Result<usize, Fe26Error> {
    let enc = ctx.encryption_options;
    let int = ctx.integrity_options;
    let encryption_buffer_length = encryption_buffer_len(data_len)?;

    let mut len = 6; // MAC_PREFIX
    len += 1; // delimiter
    len += password_id_len;
    len += 1; // delimiter
    len += hex::encoded_len(enc.salt_bytes()); // encryption salt, hex
    len += 1; // delimiter
    len += base64url::encoded_len(enc.algorithm.iv_bytes()); // IV, base64url
    len += 1; // delimiter
    len += base64url::encoded_len(encryption_buffer_length); // ciphertext, base64url
    len += 1; // delimiter
    len += hex::encoded_len(int.salt_bytes()); // integrity salt, hex
    len += 1; // delimiter
    len += base64url::encoded_len(HMAC_SHA256_BYTES); // HMAC tag, base64url

    Ok(len)
}

/// Size of the buffer needed to hold the unsealed result of a token that is
/// `data_len` bytes long, under `ctx`.
///
/// This is necessarily an overestimate of the true plaintext length by up
/// to one cipher block: the result has to accommodate the ciphertext
/// in-place before its PKCS#7 padding is stripped (see
/// [`fe26_crypto::decrypt`]'s contract).
pub fn unseal_buffer_len(ctx: Context, data_len: usize) -> Result<usize, Fe26Error> {
    let enc = ctx.encryption_options;
    let int = ctx.integrity_options;

    let mut len = i64::try_from(data_len).map_err(|_| Fe26Error::Overflow)?;
    len -= 6; // MAC_PREFIX
    len -= 1; // delimiter
              // password ID length is unknown at this point; not subtracted, which
              // only makes this estimate larger than strictly necessary.
    len -= 1; // delimiter
    len -= hex::encoded_len(enc.salt_bytes()) as i64; // encryption salt, hex
    len -= 1; // delimiter
    len -= base64url::encoded_len(enc.algorithm.iv_bytes()) as i64; // IV, base64url
    len -= 1; // delimiter
              // ciphertext length is exactly what remains; not subtracted here.
    len -= 1; // delimiter
    len -= hex::encoded_len(int.salt_bytes()) as i64; // integrity salt, hex
    len -= 1; // delimiter
    len -= base64url::encoded_len(HMAC_SHA256_BYTES) as i64; // HMAC tag, base64url

    if len < 0 {
        return Err(Fe26Error::Overflow);
    }

    Ok(base64url::decoded_len(len as usize))
}
