// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `Fe26.1` password-authenticated encrypted tokens: PBKDF2-HMAC-SHA1 key
//! derivation, AES-CBC encryption, HMAC-SHA256 integrity, and a strict
//! delimited wire format, wire-compatible with the `iron`/`ciron` token
//! format this crate's test vectors are drawn from.
//!
//! Every public entry point takes its buffers from the caller and never
//! allocates; use [`seal_buffer_len`] / [`unseal_buffer_len`] /
//! [`encryption_buffer_len`] to size them ahead of time.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod algorithm;
mod consts;
mod context;
mod error;
mod options;
mod parser;
mod password_table;
mod seal;
mod sizing;
mod unseal;

pub use algorithm::{Algorithm, AES_128_CBC, AES_256_CBC, SHA_256};
pub use context::Context;
pub use error::Fe26Error;
pub use options::{Options, DEFAULT_ENCRYPTION_OPTIONS, DEFAULT_INTEGRITY_OPTIONS};
pub use password_table::PasswordEntry;
pub use seal::seal;
pub use sizing::{encryption_buffer_len, seal_buffer_len, unseal_buffer_len};
pub use unseal::unseal;
