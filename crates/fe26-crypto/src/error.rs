// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Crypto adapter error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fe26CryptoError {
    /// The CSPRNG (`getrandom`) failed to fill the requested buffer.
    #[error("CSPRNG failed to fill buffer")]
    RandomUnavailable,

    /// The requested key length exceeds `MAX_KEY_BYTES`.
    #[error("requested key length exceeds the maximum supported size")]
    KeyTooLong,

    /// CBC decryption failed: either the PKCS#7 padding was malformed or the
    /// ciphertext length was not a multiple of the block size.
    #[error("decryption failed (bad padding or malformed ciphertext)")]
    DecryptionFailed,

    /// The ciphertext buffer provided for encryption was too small.
    #[error("output buffer too small for ciphertext")]
    BufferTooSmall,
}
