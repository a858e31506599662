// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use fe26_codec::base64url;
use fe26_crypto::HMAC_SHA256_BYTES;
use zeroize::Zeroize;

use crate::consts::{MAX_IV_B64URL_CHARS, MAX_IV_BYTES, MAX_MAC_B64URL_CHARS, PREFIX};
use crate::context::Context;
use crate::error::Fe26Error;
use crate::parser::{ParseBound, Reader};
use crate::password_table::{self, PasswordEntry};

/// Unseals a `Fe26.1` token, verifying its MAC and decrypting its payload.
///
/// `password_id` in the token selects an entry out of `password_table` by
/// exact byte match; if no table is given, or none of its entries match,
/// `password` is used as a fallback. At least one of the two must resolve to
/// a non-empty password, or this fails with
/// [`Fe26Error::PasswordRotation`].
///
/// `decryption_scratch` holds the base64url-decoded ciphertext before it is
/// decrypted; `out` receives the decrypted payload and must be at least as
/// large as `decryption_scratch`, since decryption happens by copying the
/// ciphertext into `out` and stripping its padding there (see
/// [`fe26_crypto::decrypt`]). Both must be at least
/// `unseal_buffer_len(ctx, token.len())` bytes. Returns the number of
/// plaintext bytes written to `out`.
pub fn unseal(
    ctx: Context,
    token: &[u8],
    password_table: Option<&[PasswordEntry]>,
    password: &[u8],
    decryption_scratch: &mut [u8],
    out: &mut [u8],
) -> Result<usize, Fe26Error> {
    let enc = ctx.encryption_options;
    let int = ctx.integrity_options;

    let mut enc_key = [0u8; 32];
    let mut int_key = [0u8; 32];
    let mut iv = [0u8; MAX_IV_BYTES];
    let mut tag = [0u8; HMAC_SHA256_BYTES];
    let mut incoming_tag = [0u8; HMAC_SHA256_BYTES];

    let result = (|| -> Result<usize, Fe26Error> {
        let cipher = enc.algorithm.to_cipher()?;
        let mut reader = Reader::new(token);

        let prefix = reader.field(ParseBound::Fixed(PREFIX.len()))?;
        if prefix != PREFIX {
            return Err(Fe26Error::TokenParse);
        }

        let token_password_id = reader.field(ParseBound::Delim)?;

        if token_password_id.is_empty() && password.is_empty() {
            return Err(Fe26Error::PasswordRotation);
        }
        let resolved_password = match password_table
            .and_then(|table| password_table::lookup(table, token_password_id))
        {
            Some(entry) => entry.password,
            None => {
                if password.is_empty() {
                    return Err(Fe26Error::PasswordRotation);
                }
                password
            }
        };

        let enc_salt_hex = reader.field(ParseBound::Fixed(enc.salt_bytes() * 2))?;
        let iv_b64 = reader.field(ParseBound::AtMost(MAX_IV_B64URL_CHARS))?;
        let ct_b64 = reader.field(ParseBound::Delim)?;

        // The MAC base string is everything parsed so far, minus the
        // delimiter that just terminated the ciphertext field.
        let hmac_base = &token[..reader.pos() - 1];

        let int_salt_hex = reader.field(ParseBound::Fixed(int.salt_bytes() * 2))?;
        let mac_b64 = reader.tail();
        if mac_b64.len() > MAX_MAC_B64URL_CHARS {
            return Err(Fe26Error::TokenParse);
        }

        let int_key = &mut int_key[..int.algorithm.key_bytes()];
        fe26_crypto::derive_key(resolved_password, int_salt_hex, int.iterations, int_key)?;

        fe26_crypto::hmac(int_key, hmac_base, &mut tag)?;

        let incoming_tag = &mut incoming_tag[..base64url::decoded_len(mac_b64.len())];
        base64url::decode_into(mac_b64, incoming_tag)?;

        if !fe26_crypto::fixed_time_eq(incoming_tag, &tag) {
            return Err(Fe26Error::TokenValidation);
        }

        let enc_key = &mut enc_key[..enc.algorithm.key_bytes()];
        fe26_crypto::derive_key(resolved_password, enc_salt_hex, enc.iterations, enc_key)?;

        let iv = &mut iv[..enc.algorithm.iv_bytes()];
        let iv_len = base64url::decode_into(iv_b64, iv)?;
        let iv = &iv[..iv_len];

        let ct_len = base64url::decode_into(ct_b64, decryption_scratch)?;

        let plaintext_len =
            fe26_crypto::decrypt(cipher, enc_key, iv, &decryption_scratch[..ct_len], out)?;

        Ok(plaintext_len)
    })();

    enc_key.zeroize();
    int_key.zeroize();
    iv.zeroize();
    tag.zeroize();
    incoming_tag.zeroize();

    result
}
