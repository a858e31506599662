// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Codec error for base64url and hex decoding.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fe26CodecError {
    /// Declared input length of exactly 1 character, which no base64url
    /// encoding (padded or not) can ever produce.
    #[error("base64url input of length 1 cannot be decoded")]
    InvalidLength,

    /// A byte outside the relevant alphabet (base64url or hex) was found.
    #[error("input byte outside the expected alphabet")]
    InvalidChar,
}
