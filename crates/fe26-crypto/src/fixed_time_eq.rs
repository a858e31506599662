// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use subtle::ConstantTimeEq;

/// Compares `a` and `b` for equality in constant time with respect to their
/// contents.
///
/// Unequal lengths are rejected immediately (that comparison is not
/// secret-dependent, so no attempt is made to mask it).
pub fn fixed_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
