// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Field delimiter, the single byte `'*'`.
pub(crate) const DELIM: u8 = b'*';

/// Wire-format prefix, including the format version.
pub(crate) const PREFIX: &[u8] = b"Fe26.1";

/// Upper bound on any salt this crate generates or accepts, in bytes.
pub(crate) const MAX_SALT_BYTES: usize = 32;

/// Upper bound on any IV this crate generates or accepts, in bytes.
pub(crate) const MAX_IV_BYTES: usize = 32;

/// Longest base64url-encoded IV field this crate accepts while unsealing.
///
/// `ceil(MAX_IV_BYTES * 4 / 3) = 43`. The original source reused a 44-byte
/// constant here (`MAX_IV_B64CHARS`, with a comment noting 43 is the
/// actually-correct value); this implementation uses the correct value
/// directly rather than carrying the off-by-one forward.
pub(crate) const MAX_IV_B64URL_CHARS: usize = 43;

/// Longest base64url-encoded MAC field this crate accepts while unsealing.
///
/// Numerically identical to [`MAX_IV_B64URL_CHARS`] (`ceil(32*4/3) = 43`)
/// but kept as its own named constant: the two fields bound unrelated
/// quantities (an IV and an HMAC tag) and happen to share a length only
/// because both cap out at 32 raw bytes.
pub(crate) const MAX_MAC_B64URL_CHARS: usize = 43;
