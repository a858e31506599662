// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! PBKDF2-HMAC-SHA1 key derivation, AES-CBC encryption, HMAC-SHA256 tagging,
//! constant-time comparison, and CSPRNG access for the `Fe26.1` wire format.
//!
//! Every function here operates on caller-provided buffers and never
//! allocates; [`fe26`](https://docs.rs/fe26)'s seal/unseal pipelines own the
//! one real buffer and slice into it.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod cipher;
mod consts;
mod decrypt;
mod derive_key;
mod encrypt;
mod error;
mod fixed_time_eq;
mod hmac_tag;
mod random_bytes;

pub use cipher::CipherAlgorithm;
pub use consts::{CIPHER_BLOCK_BYTES, HMAC_SHA256_BYTES, MAX_KEY_BYTES};
pub use decrypt::decrypt;
pub use derive_key::derive_key;
pub use encrypt::encrypt;
pub use error::Fe26CryptoError;
pub use fixed_time_eq::fixed_time_eq;
pub use hmac_tag::hmac;
pub use random_bytes::random_bytes;
