// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::context::Context;
use crate::sizing::{encryption_buffer_len, seal_buffer_len, unseal_buffer_len};

#[test]
fn encryption_buffer_len_rounds_up_to_the_next_block() {
    for n in [0, 1, 10, 15] {
        assert_eq!(encryption_buffer_len(n).unwrap(), 16, "n={n}");
    }
    for n in [16, 17, 30] {
        assert_eq!(encryption_buffer_len(n).unwrap(), 32, "n={n}");
    }
    assert_eq!(encryption_buffer_len(200).unwrap(), 208);
    assert_eq!(encryption_buffer_len(200_665).unwrap(), 200_672);
}

#[test]
fn encryption_buffer_len_rejects_overflow() {
    assert!(encryption_buffer_len(usize::MAX).is_err());
}

#[test]
fn seal_buffer_len_matches_known_sizes() {
    let ctx = Context::default();
    for n in [1, 10, 15] {
        assert_eq!(seal_buffer_len(ctx, n, 6).unwrap(), 227 + 6, "n={n}");
    }
}

#[test]
fn seal_buffer_len_grows_with_password_id_length() {
    let ctx = Context::default();
    assert_eq!(seal_buffer_len(ctx, 4, 3).unwrap(), 227 + 3);
    assert_eq!(seal_buffer_len(ctx, 4, 0).unwrap(), 227);
}

#[test]
fn unseal_buffer_len_overestimates_but_bounds_the_overestimate() {
    let ctx = Context::default();
    for n in [1usize, 10, 100, 100_000] {
        let sealed = seal_buffer_len(ctx, n, 6).unwrap();
        let unsealed = unseal_buffer_len(ctx, sealed).unwrap();
        assert!(unsealed > n, "n={n} sealed={sealed} unsealed={unsealed}");
        assert!(
            unsealed - n <= 16 + 6,
            "n={n} sealed={sealed} unsealed={unsealed}"
        );
    }
}

#[test]
fn unseal_buffer_len_rejects_tokens_shorter_than_the_fixed_overhead() {
    let ctx = Context::default();
    assert!(unseal_buffer_len(ctx, 1).is_err());
}
