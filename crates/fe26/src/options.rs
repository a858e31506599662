// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::algorithm::{Algorithm, AES_256_CBC, SHA_256};

/// Salt width, algorithm, and iteration count for one phase (encryption or
/// integrity) of a seal/unseal call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Random salt width in bits, before hex encoding.
    pub salt_bits: u32,
    /// Algorithm this phase uses.
    pub algorithm: Algorithm,
    /// PBKDF2 iteration count for keys derived under this phase.
    pub iterations: u32,
}

impl Options {
    /// Salt width in bytes.
    pub const fn salt_bytes(self) -> usize {
        (self.salt_bits / 8) as usize
    }
}

/// Default encryption profile: 256-bit salt, AES-256-CBC, 1 iteration.
pub const DEFAULT_ENCRYPTION_OPTIONS: Options = Options {
    salt_bits: 256,
    algorithm: AES_256_CBC,
    iterations: 1,
};

/// Default integrity profile: 256-bit salt, HMAC-SHA256, 1 iteration.
pub const DEFAULT_INTEGRITY_OPTIONS: Options = Options {
    salt_bits: 256,
    algorithm: SHA_256,
    iterations: 1,
};
