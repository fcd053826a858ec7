// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{ArithmeticError, ERROR_CODE_BASE, HoardError};

#[test]
fn test_codes_follow_base() {
    assert_eq!(HoardError::Overflow.code(), ERROR_CODE_BASE + 1);
    assert_eq!(HoardError::Underflow.code(), 102);
    assert_eq!(HoardError::IndexOverflow { index: 3, len: 1 }.code(), 103);
    assert_eq!(HoardError::InvalidTarget.code(), 104);
    assert_eq!(HoardError::InstanceNotPresent.code(), 106);
    assert_eq!(HoardError::ArgNotPresent.code(), 107);
}

#[test]
fn test_allocation_code_is_outside_library_range() {
    let err = HoardError::Allocation { bytes: 64 };
    assert_eq!(err.code(), i32::MIN + 1);
    assert!(err.code() < ERROR_CODE_BASE);
}

#[test]
fn test_codes_are_unique() {
    let errors = [
        HoardError::Overflow,
        HoardError::Underflow,
        HoardError::IndexOverflow { index: 0, len: 0 },
        HoardError::InvalidTarget,
        HoardError::InstanceNotPresent,
        HoardError::ArgNotPresent,
        HoardError::Allocation { bytes: 0 },
    ];

    for (i, a) in errors.iter().enumerate() {
        for b in &errors[i + 1..] {
            assert_ne!(a.code(), b.code(), "{a:?} and {b:?} share a code");
        }
    }
}

#[test]
fn test_display_carries_context() {
    let err = HoardError::IndexOverflow { index: 7, len: 3 };
    assert_eq!(
        err.to_string(),
        "index overflow: index 7 is out of bounds for length 3"
    );
    assert_eq!(err.message(), "index overflow");

    let err = HoardError::Allocation { bytes: 4096 };
    assert_eq!(err.to_string(), "allocation of 4096 bytes failed");
}

#[test]
fn test_arithmetic_error_conversion() {
    assert_eq!(HoardError::from(ArithmeticError::Overflow), HoardError::Overflow);
    assert_eq!(HoardError::from(ArithmeticError::Underflow), HoardError::Underflow);
}
