// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Block size, in bytes, of every cipher this adapter supports (AES).
pub const CIPHER_BLOCK_BYTES: usize = 16;

/// Largest key size, in bytes, this adapter will ever derive or accept.
pub const MAX_KEY_BYTES: usize = 32;

/// Length, in bytes, of an HMAC-SHA256 tag.
pub const HMAC_SHA256_BYTES: usize = 32;
