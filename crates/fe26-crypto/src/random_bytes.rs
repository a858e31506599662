// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::Fe26CryptoError;

/// Fills `out` with CSPRNG bytes via `getrandom`.
pub fn random_bytes(out: &mut [u8]) -> Result<(), Fe26CryptoError> {
    getrandom::fill(out).map_err(|_| Fe26CryptoError::RandomUnavailable)
}
