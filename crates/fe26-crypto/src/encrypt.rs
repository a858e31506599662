// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockEncryptMut, KeyIvInit};
use aes::{Aes128, Aes256};

use crate::cipher::CipherAlgorithm;
use crate::consts::CIPHER_BLOCK_BYTES;
use crate::error::Fe26CryptoError;

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes256CbcEnc = cbc::Encryptor<Aes256>;

/// Encrypts `data` in place inside `buf` with PKCS#7 padding.
///
/// `buf[..data.len()]` is overwritten with `data` and then padded and
/// encrypted in place, so `buf.len()` must be at least
/// `encryption_buffer_len(data.len())` bytes (the smallest multiple of the
/// cipher block size strictly greater than `data.len()`). Returns the number
/// of ciphertext bytes written, which is always `buf.len()`'s required
/// minimum, never more.
pub fn encrypt(
    algorithm: CipherAlgorithm,
    key: &[u8],
    iv: &[u8],
    data: &[u8],
    buf: &mut [u8],
) -> Result<usize, Fe26CryptoError> {
    let padded_len = (data.len() / CIPHER_BLOCK_BYTES + 1) * CIPHER_BLOCK_BYTES;
    if buf.len() < padded_len {
        return Err(Fe26CryptoError::BufferTooSmall);
    }
    buf[..data.len()].copy_from_slice(data);

    let written = match algorithm {
        CipherAlgorithm::Aes128Cbc => {
            let enc = Aes128CbcEnc::new_from_slices(key, iv)
                .map_err(|_| Fe26CryptoError::BufferTooSmall)?;
            enc.encrypt_padded_mut::<Pkcs7>(buf, data.len())
                .map_err(|_| Fe26CryptoError::BufferTooSmall)?
                .len()
        }
        CipherAlgorithm::Aes256Cbc => {
            let enc = Aes256CbcEnc::new_from_slices(key, iv)
                .map_err(|_| Fe26CryptoError::BufferTooSmall)?;
            enc.encrypt_padded_mut::<Pkcs7>(buf, data.len())
                .map_err(|_| Fe26CryptoError::BufferTooSmall)?
                .len()
        }
    };

    Ok(written)
}
