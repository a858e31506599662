// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// `Fe26.1` seal/unseal error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fe26Error {
    /// The token could not be tokenized into its seven delimited fields.
    #[error("token parse error")]
    TokenParse,

    /// The token parsed but its MAC did not verify against the recomputed tag.
    #[error("token validation failed")]
    TokenValidation,

    /// No password could be resolved: the token carries no password ID, a
    /// table lookup by ID found nothing, and no fallback password was given.
    #[error("no password available for this token")]
    PasswordRotation,

    /// An `Options` profile names an algorithm this crate does not implement.
    #[error("unknown algorithm")]
    UnknownAlgorithm,

    /// A crypto primitive (key derivation, cipher, HMAC, CSPRNG) failed.
    #[error("crypto primitive failed: {0}")]
    Crypto(#[from] fe26_crypto::Fe26CryptoError),

    /// A base64url or hex field failed to decode.
    #[error("codec error: {0}")]
    Base64(#[from] fe26_codec::Fe26CodecError),

    /// A buffer-sizing calculation would overflow or underflow `usize`.
    #[error("buffer size overflow")]
    Overflow,
}
