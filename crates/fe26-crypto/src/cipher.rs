// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Block ciphers this adapter knows how to drive.
///
/// `fe26-crypto` cannot depend on the `fe26` crate's algorithm catalog (the
/// dependency points the other way), so callers translate their own
/// algorithm identifiers into this small enum at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherAlgorithm {
    /// AES-128 in CBC mode.
    Aes128Cbc,
    /// AES-256 in CBC mode.
    Aes256Cbc,
}

impl CipherAlgorithm {
    /// Key length this algorithm requires, in bytes.
    pub const fn key_bytes(self) -> usize {
        match self {
            CipherAlgorithm::Aes128Cbc => 16,
            CipherAlgorithm::Aes256Cbc => 32,
        }
    }
}
