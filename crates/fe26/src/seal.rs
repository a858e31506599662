// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use fe26_codec::{base64url, hex};
use fe26_crypto::HMAC_SHA256_BYTES;
use zeroize::Zeroize;

use crate::consts::{DELIM, MAX_IV_BYTES, MAX_SALT_BYTES, PREFIX};
use crate::context::Context;
use crate::error::Fe26Error;
use crate::sizing::encryption_buffer_len;

/// Seals `payload` into a `Fe26.1` token under `password`, identified on the
/// wire by `password_id`.
///
/// `encryption_scratch` holds the ciphertext before it is base64url-encoded
/// into `out`; it must be at least `encryption_buffer_len(payload.len())`
/// bytes. `out` must be at least
/// `seal_buffer_len(ctx, payload.len(), password_id.len())` bytes.
///
/// `password_id` may be empty (no rotation), but `password` must not be.
/// Returns the number of bytes written to `out`.
pub fn seal(
    ctx: Context,
    payload: &[u8],
    password_id: &[u8],
    password: &[u8],
    encryption_scratch: &mut [u8],
    out: &mut [u8],
) -> Result<usize, Fe26Error> {
    let enc = ctx.encryption_options;
    let int = ctx.integrity_options;

    let mut salt_bytes = [0u8; MAX_SALT_BYTES];
    let mut enc_key = [0u8; 32];
    let mut int_key = [0u8; 32];
    let mut iv = [0u8; MAX_IV_BYTES];
    let mut tag = [0u8; HMAC_SHA256_BYTES];

    let result = (|| -> Result<usize, Fe26Error> {
        let cipher = enc.algorithm.to_cipher()?;
        let mut cursor = 0usize;

        out[cursor..cursor + PREFIX.len()].copy_from_slice(PREFIX);
        cursor += PREFIX.len();
        out[cursor] = DELIM;
        cursor += 1;

        out[cursor..cursor + password_id.len()].copy_from_slice(password_id);
        cursor += password_id.len();
        out[cursor] = DELIM;
        cursor += 1;

        // Encryption salt: generated as raw bytes, written hex-encoded
        // directly into `out`, then used (as hex characters, per the wire
        // format's PBKDF2-salt convention) to derive the encryption key.
        let enc_salt = &mut salt_bytes[..enc.salt_bytes()];
        fe26_crypto::random_bytes(enc_salt)?;
        let enc_salt_hex_len = hex::encoded_len(enc_salt.len());
        hex::bytes_to_hex_into(enc_salt, &mut out[cursor..cursor + enc_salt_hex_len]);
        let enc_salt_hex_start = cursor;
        cursor += enc_salt_hex_len;
        out[cursor] = DELIM;
        cursor += 1;

        let enc_key = &mut enc_key[..enc.algorithm.key_bytes()];
        fe26_crypto::derive_key(
            password,
            &out[enc_salt_hex_start..enc_salt_hex_start + enc_salt_hex_len],
            enc.iterations,
            enc_key,
        )?;

        let iv = &mut iv[..enc.algorithm.iv_bytes()];
        fe26_crypto::random_bytes(iv)?;
        let iv_b64_len = base64url::encoded_len(iv.len());
        base64url::encode_into(iv, &mut out[cursor..cursor + iv_b64_len]);
        cursor += iv_b64_len;
        out[cursor] = DELIM;
        cursor += 1;

        let ct_len = fe26_crypto::encrypt(cipher, enc_key, iv, payload, encryption_scratch)?;
        debug_assert_eq!(ct_len, encryption_buffer_len(payload.len())?);
        let ct_b64_len = base64url::encoded_len(ct_len);
        base64url::encode_into(
            &encryption_scratch[..ct_len],
            &mut out[cursor..cursor + ct_b64_len],
        );
        cursor += ct_b64_len;

        // The MAC base string stops here, before the delimiter that
        // introduces the integrity salt.
        let hmac_base_end = cursor;

        out[cursor] = DELIM;
        cursor += 1;

        let int_salt = &mut salt_bytes[..int.salt_bytes()];
        fe26_crypto::random_bytes(int_salt)?;
        let int_salt_hex_len = hex::encoded_len(int_salt.len());
        hex::bytes_to_hex_into(int_salt, &mut out[cursor..cursor + int_salt_hex_len]);
        let int_salt_hex_start = cursor;
        cursor += int_salt_hex_len;

        let int_key = &mut int_key[..int.algorithm.key_bytes()];
        fe26_crypto::derive_key(
            password,
            &out[int_salt_hex_start..int_salt_hex_start + int_salt_hex_len],
            int.iterations,
            int_key,
        )?;

        fe26_crypto::hmac(int_key, &out[..hmac_base_end], &mut tag)?;

        out[cursor] = DELIM;
        cursor += 1;

        let mac_b64_len = base64url::encoded_len(tag.len());
        base64url::encode_into(&tag, &mut out[cursor..cursor + mac_b64_len]);
        cursor += mac_b64_len;

        Ok(cursor)
    })();

    salt_bytes.zeroize();
    enc_key.zeroize();
    int_key.zeroize();
    iv.zeroize();
    tag.zeroize();

    result
}
