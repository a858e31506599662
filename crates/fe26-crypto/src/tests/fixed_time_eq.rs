// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::fixed_time_eq::fixed_time_eq;

#[test]
fn equal_single_bytes_match() {
    assert!(fixed_time_eq(&[0], &[0]));
}

#[test]
fn equal_byte_strings_match() {
    assert!(fixed_time_eq(&[255, 0, 255, 0], &[255, 0, 255, 0]));
}

#[test]
fn unequal_single_bytes_differ() {
    assert!(!fixed_time_eq(&[0], &[255]));
}

#[test]
fn unequal_byte_strings_differ() {
    assert!(!fixed_time_eq(&[10, 10, 10, 10], &[255, 0, 255, 0]));
}

#[test]
fn different_lengths_are_unequal() {
    assert!(!fixed_time_eq(&[1, 2, 3], &[1, 2]));
}

#[test]
fn empty_slices_are_equal() {
    assert!(fixed_time_eq(&[], &[]));
}
