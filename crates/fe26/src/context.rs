// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::options::{Options, DEFAULT_ENCRYPTION_OPTIONS, DEFAULT_INTEGRITY_OPTIONS};

/// The options pair a single seal/unseal call runs under.
///
/// Carries no mutable state: `seal`/`unseal` return `Result<_, Fe26Error>`
/// directly, so there is nothing here for a last-error field to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    /// Options governing encryption key derivation, IV generation, and the
    /// cipher itself.
    pub encryption_options: Options,
    /// Options governing integrity key derivation and the HMAC tag.
    pub integrity_options: Options,
}

impl Context {
    /// Builds a context from an explicit options pair.
    pub const fn new(encryption_options: Options, integrity_options: Options) -> Self {
        Self {
            encryption_options,
            integrity_options,
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self {
            encryption_options: DEFAULT_ENCRYPTION_OPTIONS,
            integrity_options: DEFAULT_INTEGRITY_OPTIONS,
        }
    }
}
