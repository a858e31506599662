// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use fe26_crypto::CipherAlgorithm;

use crate::error::Fe26Error;

/// A named algorithm with its key and IV bit widths.
///
/// `iv_bits == 0` marks a MAC-only algorithm (no IV, e.g. [`SHA_256`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Algorithm {
    /// Wire-format algorithm name, e.g. `"aes-256-cbc"`.
    pub name: &'static str,
    /// Key size in bits.
    pub key_bits: u32,
    /// IV size in bits, or `0` if this algorithm has no IV.
    pub iv_bits: u32,
}

impl Algorithm {
    /// Key size in bytes.
    pub const fn key_bytes(self) -> usize {
        (self.key_bits / 8) as usize
    }

    /// IV size in bytes.
    pub const fn iv_bytes(self) -> usize {
        (self.iv_bits / 8) as usize
    }

    /// Maps this algorithm onto the cipher adapter's enum, by key size.
    ///
    /// The adapter crate cannot depend on this one (the dependency points
    /// the other way), so the mapping lives here rather than there.
    pub(crate) fn to_cipher(self) -> Result<CipherAlgorithm, Fe26Error> {
        match self.key_bits {
            128 => Ok(CipherAlgorithm::Aes128Cbc),
            256 => Ok(CipherAlgorithm::Aes256Cbc),
            _ => Err(Fe26Error::UnknownAlgorithm),
        }
    }
}

/// AES-128 in CBC mode.
pub const AES_128_CBC: Algorithm = Algorithm {
    name: "aes-128-cbc",
    key_bits: 128,
    iv_bits: 128,
};

/// AES-256 in CBC mode.
pub const AES_256_CBC: Algorithm = Algorithm {
    name: "aes-256-cbc",
    key_bits: 256,
    iv_bits: 128,
};

/// SHA-256, used as the integrity (HMAC) algorithm. `iv_bits` is `0`: this
/// is a MAC algorithm, not a cipher.
pub const SHA_256: Algorithm = Algorithm {
    name: "sha256",
    key_bits: 256,
    iv_bits: 0,
};
