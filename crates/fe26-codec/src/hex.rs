// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Lowercase hex byte-array codec.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::error::Fe26CodecError;

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Number of characters produced by hex-encoding `n` bytes.
pub const fn encoded_len(n: usize) -> usize {
    2 * n
}

fn decode_nibble(c: u8) -> Result<u8, Fe26CodecError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(Fe26CodecError::InvalidChar),
    }
}

/// Encodes `bytes` as lowercase hex into `out`, returning the number of
/// characters written (always `2 * bytes.len()`). Does not NUL-terminate.
pub fn bytes_to_hex_into(bytes: &[u8], out: &mut [u8]) -> usize {
    for (i, &b) in bytes.iter().enumerate() {
        out[i * 2] = HEX[(b >> 4) as usize];
        out[i * 2 + 1] = HEX[(b & 0x0f) as usize];
    }
    bytes.len() * 2
}

/// Allocating convenience wrapper around [`bytes_to_hex_into`].
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut out = vec![0u8; encoded_len(bytes.len())];
    let written = bytes_to_hex_into(bytes, &mut out);
    debug_assert_eq!(written, out.len());
    String::from_utf8(out).expect("hex alphabet is ASCII")
}

/// Decodes `chars` (case-insensitive hex digits) into `out`, returning the
/// number of bytes written. Fails with [`Fe26CodecError::InvalidLength`] on
/// odd input length, [`Fe26CodecError::InvalidChar`] on a non-hex digit.
pub fn hex_to_bytes_into(chars: &[u8], out: &mut [u8]) -> Result<usize, Fe26CodecError> {
    if chars.len() % 2 != 0 {
        return Err(Fe26CodecError::InvalidLength);
    }
    for (i, pair) in chars.chunks_exact(2).enumerate() {
        let hi = decode_nibble(pair[0])?;
        let lo = decode_nibble(pair[1])?;
        out[i] = (hi << 4) | lo;
    }
    Ok(chars.len() / 2)
}

/// Allocating convenience wrapper around [`hex_to_bytes_into`].
pub fn hex_to_bytes(chars: &[u8]) -> Result<Vec<u8>, Fe26CodecError> {
    let mut out = vec![0u8; chars.len() / 2];
    let written = hex_to_bytes_into(chars, &mut out)?;
    debug_assert_eq!(written, out.len());
    Ok(out)
}
