// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::checked::{add_size, allocation_size, mul_size, sub_size};
use crate::{ArithmeticError, Bounds, HoardError};

// =============================================================================
// Bounds::add / Bounds::sub
// =============================================================================

#[test]
fn test_add_within_bounds() {
    let bounds = Bounds::new(-10, 10);
    assert_eq!(bounds.add(4, 6), Ok(10));
    assert_eq!(bounds.add(-4, -6), Ok(-10));
    assert_eq!(bounds.add(3, 0), Ok(3));
}

#[test]
fn test_add_overflow_and_underflow() {
    let bounds = Bounds::new(-10, 10);
    assert_eq!(bounds.add(5, 6), Err(ArithmeticError::Overflow));
    assert_eq!(bounds.add(-5, -6), Err(ArithmeticError::Underflow));
}

#[test]
fn test_add_at_i128_edges() {
    let full = Bounds::new(i128::MIN, i128::MAX);
    assert_eq!(full.add(i128::MAX, 1), Err(ArithmeticError::Overflow));
    assert_eq!(full.add(i128::MIN, -1), Err(ArithmeticError::Underflow));
    assert_eq!(full.add(i128::MAX, i128::MIN), Ok(-1));
}

#[test]
fn test_sub_overflow_and_underflow() {
    let bounds = Bounds::new(0, 100);
    assert_eq!(bounds.sub(10, 10), Ok(0));
    assert_eq!(bounds.sub(10, 11), Err(ArithmeticError::Underflow));
    assert_eq!(bounds.sub(99, -2), Err(ArithmeticError::Overflow));

    let full = Bounds::new(i128::MIN, i128::MAX);
    assert_eq!(full.sub(i128::MIN, 1), Err(ArithmeticError::Underflow));
    assert_eq!(full.sub(i128::MAX, -1), Err(ArithmeticError::Overflow));
}

// =============================================================================
// Bounds::mul
// =============================================================================

#[test]
fn test_mul_sign_aware() {
    let bounds = Bounds::new(-100, 50);
    assert_eq!(bounds.mul(7, 7), Ok(49));
    assert_eq!(bounds.mul(-10, 10), Ok(-100));
    assert_eq!(bounds.mul(-10, -5), Ok(50));
    assert_eq!(bounds.mul(-11, 10), Err(ArithmeticError::Underflow));
    assert_eq!(bounds.mul(-6, -9), Err(ArithmeticError::Overflow));
    assert_eq!(bounds.mul(0, i128::MAX), Ok(0));
}

#[test]
fn test_mul_minimum_edge() {
    let full = Bounds::new(i128::MIN, i128::MAX);
    assert_eq!(full.mul(i128::MIN, 1), Ok(i128::MIN));
    assert_eq!(full.mul(i128::MIN, -1), Err(ArithmeticError::Overflow));
    assert_eq!(full.mul(-1, i128::MIN), Err(ArithmeticError::Overflow));
    assert_eq!(full.mul(i128::MIN / 2, 2), Ok(i128::MIN));
    assert_eq!(full.mul(i128::MAX, 2), Err(ArithmeticError::Overflow));
}

#[test]
fn test_mul_negative_in_non_negative_range() {
    assert_eq!(Bounds::SIZE.mul(-1, 1), Err(ArithmeticError::Underflow));
}

// =============================================================================
// size helpers
// =============================================================================

#[test]
fn test_size_helpers() {
    assert_eq!(add_size(usize::MAX - 1, 1), Ok(usize::MAX));
    assert_eq!(add_size(usize::MAX, 1), Err(HoardError::Overflow));
    assert_eq!(sub_size(0, 1), Err(HoardError::Underflow));
    assert_eq!(mul_size(usize::MAX / 2, 2), Ok(usize::MAX - 1));
    assert_eq!(mul_size(usize::MAX / 2 + 1, 2), Err(HoardError::Overflow));
}

#[test]
fn test_allocation_size_limits() {
    assert_eq!(allocation_size(10, 4), Ok(40));
    assert_eq!(allocation_size(usize::MAX, 0), Ok(0));
    assert_eq!(allocation_size(isize::MAX as usize, 1), Ok(isize::MAX as usize));
    assert_eq!(
        allocation_size(isize::MAX as usize / 4 + 1, 4),
        Err(HoardError::Overflow)
    );
}

// =============================================================================
// Fuzzy
// =============================================================================

proptest! {
    #[test]
    fn test_add_matches_reference(a in any::<i64>(), b in any::<i64>(), lo in any::<i64>(), span in any::<u32>()) {
        let bounds = Bounds::new(lo as i128, lo as i128 + span as i128);
        let exact = a as i128 + b as i128;
        let expected = if exact > bounds.max() {
            Err(ArithmeticError::Overflow)
        } else if exact < bounds.min() {
            Err(ArithmeticError::Underflow)
        } else {
            Ok(exact)
        };
        prop_assert_eq!(bounds.add(a as i128, b as i128), expected);
    }

    #[test]
    fn test_mul_matches_reference(a in any::<i32>(), b in any::<i32>(), lo in any::<i32>(), span in any::<u32>()) {
        let bounds = Bounds::new(lo as i128, lo as i128 + span as i128);
        let exact = a as i128 * b as i128;
        let expected = if exact > bounds.max() {
            Err(ArithmeticError::Overflow)
        } else if exact < bounds.min() {
            Err(ArithmeticError::Underflow)
        } else {
            Ok(exact)
        };
        prop_assert_eq!(bounds.mul(a as i128, b as i128), expected);
    }

    #[test]
    fn test_mul_size_matches_checked_mul(a in any::<usize>(), b in 0usize..1024) {
        prop_assert_eq!(mul_size(a, b).ok(), a.checked_mul(b));
    }
}
