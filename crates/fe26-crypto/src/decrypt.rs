// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, KeyIvInit};
use aes::{Aes128, Aes256};

use crate::cipher::CipherAlgorithm;
use crate::error::Fe26CryptoError;

type Aes128CbcDec = cbc::Decryptor<Aes128>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Decrypts `data` in place inside `buf`, stripping PKCS#7 padding.
///
/// `buf[..data.len()]` is overwritten with `data` and then decrypted and
/// unpadded in place. Returns the number of plaintext bytes recovered, which
/// is always `<= data.len()`.
///
/// Fails with [`Fe26CryptoError::DecryptionFailed`] if `data.len()` is not a
/// multiple of the cipher block size, or if the padding bytes recovered after
/// decryption are not valid PKCS#7 padding — both observable-in-the-clear
/// failure cases so no attempt is made to distinguish them at a finer
/// granularity or hide timing differences between them.
pub fn decrypt(
    algorithm: CipherAlgorithm,
    key: &[u8],
    iv: &[u8],
    data: &[u8],
    buf: &mut [u8],
) -> Result<usize, Fe26CryptoError> {
    if buf.len() < data.len() {
        return Err(Fe26CryptoError::BufferTooSmall);
    }
    buf[..data.len()].copy_from_slice(data);
    let buf = &mut buf[..data.len()];

    let plaintext_len = match algorithm {
        CipherAlgorithm::Aes128Cbc => {
            let dec = Aes128CbcDec::new_from_slices(key, iv)
                .map_err(|_| Fe26CryptoError::DecryptionFailed)?;
            dec.decrypt_padded_mut::<Pkcs7>(buf)
                .map_err(|_| Fe26CryptoError::DecryptionFailed)?
                .len()
        }
        CipherAlgorithm::Aes256Cbc => {
            let dec = Aes256CbcDec::new_from_slices(key, iv)
                .map_err(|_| Fe26CryptoError::DecryptionFailed)?;
            dec.decrypt_padded_mut::<Pkcs7>(buf)
                .map_err(|_| Fe26CryptoError::DecryptionFailed)?
                .len()
        }
    };

    Ok(plaintext_len)
}
