// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Password-rotation table: each token carries an opaque ID that selects a
//! password out of a caller-supplied table, falling back to a directly
//! supplied password when the table has no match.

/// One entry in a password-rotation table.
///
/// `id` must not contain the token delimiter byte `'*'`; the token format
/// has no way to escape it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordEntry<'a> {
    /// The password ID as it appears on the wire.
    pub id: &'a [u8],
    /// The password bound to that ID.
    pub password: &'a [u8],
}

/// Returns the first entry in `table` whose `id` equals `password_id`.
///
/// O(n) over the table; intentionally not hash-indexed since rotation
/// tables are expected to be small. Duplicate IDs are legal — the first
/// match wins.
pub(crate) fn lookup<'a>(
    table: &[PasswordEntry<'a>],
    password_id: &[u8],
) -> Option<PasswordEntry<'a>> {
    table.iter().find(|entry| entry.id == password_id).copied()
}
