// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::consts::DELIM;
use crate::context::Context;
use crate::seal::seal;
use crate::sizing::{encryption_buffer_len, seal_buffer_len};

#[test]
fn seal_writes_exactly_seal_buffer_len_bytes() {
    let ctx = Context::default();
    let payload = b"test";
    let password_id = b"148";
    let mut encryption_scratch = [0u8; 64];
    let mut out = [0u8; 300];

    let written = seal(
        ctx,
        payload,
        password_id,
        b"secret",
        &mut encryption_scratch[..encryption_buffer_len(payload.len()).unwrap()],
        &mut out,
    )
    .unwrap();

    assert_eq!(
        written,
        seal_buffer_len(ctx, payload.len(), password_id.len()).unwrap()
    );
    assert_eq!(written, 227 + 3);
}

#[test]
fn seal_output_has_the_expected_field_count() {
    let ctx = Context::default();
    let payload = b"x";
    let mut encryption_scratch = [0u8; 32];
    let mut out = [0u8; 300];

    let written = seal(
        ctx,
        payload,
        b"",
        b"secret",
        &mut encryption_scratch[..encryption_buffer_len(payload.len()).unwrap()],
        &mut out,
    )
    .unwrap();

    assert!(out[..written].starts_with(b"Fe26.1"));
    let delimiters = out[..written].iter().filter(|&&b| b == DELIM).count();
    assert_eq!(delimiters, 6);
}

#[test]
fn seal_accepts_an_empty_password_id() {
    let ctx = Context::default();
    let payload = b"payload";
    let mut encryption_scratch = [0u8; 32];
    let mut out = [0u8; 300];

    let written = seal(
        ctx,
        payload,
        b"",
        b"secret",
        &mut encryption_scratch[..encryption_buffer_len(payload.len()).unwrap()],
        &mut out,
    )
    .unwrap();
    assert!(written > 0);
}
