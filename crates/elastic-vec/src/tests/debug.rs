// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt::Write;

use crate::vector::Vector;

#[test]
fn test_write_debug() {
    let vector = Vector::import(&[1, 2, 3]).expect("Failed to import(..)");
    let mut out = String::new();

    vector
        .write_debug(&mut out, |elmt, out| write!(out, "{elmt}"))
        .expect("Failed to write_debug(..)");

    assert_eq!(out, "[1, 2, 3]\n");
}

#[test]
fn test_write_debug_empty() {
    let vector: Vector<u8> = Vector::new();
    let mut out = String::new();

    vector
        .write_debug(&mut out, |elmt, out| write!(out, "{elmt}"))
        .expect("Failed to write_debug(..)");

    assert_eq!(out, "[]\n");
}

#[test]
fn test_write_debug_custom_rendering() {
    let vector = Vector::import(&[(1, 'a'), (2, 'b')]).expect("Failed to import(..)");
    let mut out = String::new();

    vector
        .write_debug(&mut out, |(n, c), out| write!(out, "{c}={n:02}"))
        .expect("Failed to write_debug(..)");

    assert_eq!(out, "[a=01, b=02]\n");
}

#[test]
fn test_write_debug_propagates_errors() {
    let vector = Vector::import(&[1, 2]).expect("Failed to import(..)");
    let mut out = String::new();

    let result = vector.write_debug(&mut out, |_, _| Err(core::fmt::Error));

    assert!(result.is_err());
    assert_eq!(out, "[");
}

#[test]
fn test_debug_to_stderr() {
    let vector = Vector::import(&[7u8]).expect("Failed to import(..)");

    vector.debug(|elmt, out| write!(out, "{elmt:#04x}"));
}

#[test]
fn test_fmt_debug() {
    let mut vector = Vector::with_capacity(4).expect("Failed to with_capacity(4)");
    vector.extend(&[1u8, 2]).expect("Failed to extend(..)");

    assert_eq!(
        format!("{vector:?}"),
        "Vector { data: [1, 2], len: 2, capacity: 4 }"
    );
}
