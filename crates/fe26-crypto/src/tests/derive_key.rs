// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::derive_key::derive_key;
use crate::error::Fe26CryptoError;

fn hex(bytes: &[u8]) -> alloc::string::String {
    use core::fmt::Write;
    let mut s = alloc::string::String::new();
    for b in bytes {
        write!(s, "{b:02x}").unwrap();
    }
    s
}

/// RFC 6070 test vector 1.
#[test]
fn rfc6070_vector_1() {
    let mut out = [0u8; 20];
    derive_key(b"password", b"salt", 1, &mut out).unwrap();
    assert_eq!(hex(&out), "0c60c80f961f0e71f3a9b524af6012062fe037a6");
}

/// RFC 6070 test vector 2.
#[test]
fn rfc6070_vector_2() {
    let mut out = [0u8; 20];
    derive_key(b"password", b"salt", 2, &mut out).unwrap();
    assert_eq!(hex(&out), "ea6c014dc72d6f8ccd1ed92ace1d41f0d8de8957");
}

/// RFC 6070 test vector 3.
#[test]
fn rfc6070_vector_3() {
    let mut out = [0u8; 20];
    derive_key(b"password", b"salt", 4096, &mut out).unwrap();
    assert_eq!(hex(&out), "4b007901b765489abead49d926f721d065a429c1");
}

/// RFC 6070 test vector 5 (long password and salt).
#[test]
fn rfc6070_vector_5() {
    let mut out = [0u8; 25];
    derive_key(
        b"passwordPASSWORDpassword",
        b"saltSALTsaltSALTsaltSALTsaltSALTsalt",
        4096,
        &mut out,
    )
    .unwrap();
    assert_eq!(
        hex(&out),
        "3d2eec4fe41c849b80c8d83662c0e44a8b291a964cf2f07038"
    );
}

/// RFC 6070 test vector 6 (embedded NUL bytes in password and salt).
#[test]
fn rfc6070_vector_6_embedded_nul() {
    let mut out = [0u8; 16];
    derive_key(b"pass\0word", b"sa\0lt", 4096, &mut out).unwrap();
    assert_eq!(hex(&out), "56fa6aa75548099dcc37d7f03425e0c3");
}

#[test]
fn rejects_output_longer_than_max_key_bytes() {
    let mut out = [0u8; 64];
    assert_eq!(
        derive_key(b"password", b"salt", 1, &mut out),
        Err(Fe26CryptoError::KeyTooLong)
    );
}

#[test]
fn different_salts_give_different_keys() {
    let mut a = [0u8; 16];
    let mut b = [0u8; 16];
    derive_key(b"password", b"salt1", 1000, &mut a).unwrap();
    derive_key(b"password", b"salt2", 1000, &mut b).unwrap();
    assert_ne!(a, b);
}
