// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::cipher::CipherAlgorithm;
use crate::encrypt::encrypt;
use crate::error::Fe26CryptoError;

#[test]
fn aes_128_cbc_known_vector() {
    let key: [u8; 16] = core::array::from_fn(|i| i as u8);
    let iv: [u8; 16] = core::array::from_fn(|i| (i + 16) as u8);
    let pt = b"hello world this is a test message";
    let expected: [u8; 48] = [
        0x45, 0x43, 0x4b, 0x7c, 0x26, 0xae, 0x07, 0xf9, 0xde, 0xc5, 0x2a, 0xf0, 0xf3, 0x09, 0xb8,
        0xae, 0xa9, 0x92, 0x83, 0xba, 0x69, 0xda, 0x1b, 0xb8, 0xcd, 0xda, 0xa0, 0xc9, 0x1a, 0x03,
        0x3e, 0x79, 0xf4, 0x59, 0xee, 0x5f, 0x36, 0x32, 0xba, 0xb7, 0xad, 0x18, 0x22, 0x67, 0xd2,
        0x9f, 0xd4, 0xbc,
    ];

    let mut buf = [0u8; 48];
    let written = encrypt(CipherAlgorithm::Aes128Cbc, &key, &iv, pt, &mut buf).unwrap();

    assert_eq!(written, 48);
    assert_eq!(&buf[..written], &expected[..]);
}

#[test]
fn aes_256_cbc_known_vector() {
    let key: [u8; 32] = core::array::from_fn(|i| i as u8);
    let iv: [u8; 16] = core::array::from_fn(|i| i as u8);
    let pt = b"short";
    let expected: [u8; 16] = [
        0x94, 0x5b, 0x45, 0xd6, 0x25, 0xfa, 0xfe, 0x2c, 0x67, 0xda, 0xb4, 0x06, 0xb4, 0xae, 0x5d,
        0x90,
    ];

    let mut buf = [0u8; 16];
    let written = encrypt(CipherAlgorithm::Aes256Cbc, &key, &iv, pt, &mut buf).unwrap();

    assert_eq!(written, 16);
    assert_eq!(&buf[..written], &expected[..]);
}

#[test]
fn rejects_buffer_too_small() {
    let key = [0u8; 16];
    let iv = [0u8; 16];
    let mut buf = [0u8; 4];
    assert_eq!(
        encrypt(
            CipherAlgorithm::Aes128Cbc,
            &key,
            &iv,
            b"too long for this buffer",
            &mut buf
        ),
        Err(Fe26CryptoError::BufferTooSmall)
    );
}

#[test]
fn empty_plaintext_produces_one_padding_block() {
    let key = [0u8; 16];
    let iv = [0u8; 16];
    let mut buf = [0u8; 16];
    let written = encrypt(CipherAlgorithm::Aes128Cbc, &key, &iv, b"", &mut buf).unwrap();
    assert_eq!(written, 16);
}
