// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Strict base64url (no padding) and lowercase-hex byte codecs for the
//! `Fe26.1` wire format.
//!
//! Both codecs write directly into a caller-provided buffer (`*_into`
//! functions) so that [`fe26`](https://docs.rs/fe26)'s seal/unseal pipelines
//! never allocate; allocating convenience wrappers are provided for callers
//! who don't need that.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;

pub mod base64url;
pub mod hex;

pub use error::Fe26CodecError;
