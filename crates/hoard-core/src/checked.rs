// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Overflow-checked arithmetic against a closed numeric range.
//!
//! Every capacity, and every `unit_size * capacity` product, passes through
//! these guards before it is handed to the allocator. A failed check never
//! produces a partial value: the caller gets an error and nothing else.
//!
//! # Example
//!
//! ```rust
//! use hoard_core::{ArithmeticError, Bounds};
//!
//! let byte = Bounds::new(0, 255);
//!
//! assert_eq!(byte.add(200, 55), Ok(255));
//! assert_eq!(byte.add(200, 56), Err(ArithmeticError::Overflow));
//! assert_eq!(byte.sub(3, 4), Err(ArithmeticError::Underflow));
//! assert_eq!(byte.mul(15, 17), Ok(255));
//! ```

use thiserror::Error;

use crate::error::HoardError;

/// Failure of a guarded arithmetic operation.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ArithmeticError {
    /// Result would be greater than the upper bound.
    #[error("result exceeds the upper bound")]
    Overflow,

    /// Result would be lower than the lower bound.
    #[error("result falls below the lower bound")]
    Underflow,
}

impl From<ArithmeticError> for HoardError {
    fn from(err: ArithmeticError) -> Self {
        match err {
            ArithmeticError::Overflow => HoardError::Overflow,
            ArithmeticError::Underflow => HoardError::Underflow,
        }
    }
}

/// A closed range `[min, max]` that guarded results must stay within.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Bounds {
    min: i128,
    max: i128,
}

impl Bounds {
    /// Range of a `usize` value: `[0, usize::MAX]`.
    pub const SIZE: Self = Self::new(0, usize::MAX as i128);

    /// Range of a byte count the global allocator accepts: `[0, isize::MAX]`.
    pub const ALLOCATION: Self = Self::new(0, isize::MAX as i128);

    /// Creates a new range. `min` must not be greater than `max`.
    pub const fn new(min: i128, max: i128) -> Self {
        debug_assert!(min <= max);
        Self { min, max }
    }

    /// Lower bound.
    pub const fn min(&self) -> i128 {
        self.min
    }

    /// Upper bound.
    pub const fn max(&self) -> i128 {
        self.max
    }

    /// Checks that `value` lies inside the range.
    pub const fn contain(&self, value: i128) -> Result<i128, ArithmeticError> {
        if value > self.max {
            return Err(ArithmeticError::Overflow);
        }

        if value < self.min {
            return Err(ArithmeticError::Underflow);
        }

        Ok(value)
    }

    /// Computes `acc + addend`.
    ///
    /// A positive addend overflows once `acc > max - addend`; a negative
    /// addend underflows once `acc < min - addend`.
    pub fn add(&self, acc: i128, addend: i128) -> Result<i128, ArithmeticError> {
        match acc.checked_add(addend) {
            Some(sum) => self.contain(sum),
            None if addend > 0 => Err(ArithmeticError::Overflow),
            None => Err(ArithmeticError::Underflow),
        }
    }

    /// Computes `acc - subtrahend`.
    pub fn sub(&self, acc: i128, subtrahend: i128) -> Result<i128, ArithmeticError> {
        match acc.checked_sub(subtrahend) {
            Some(diff) => self.contain(diff),
            None if subtrahend < 0 => Err(ArithmeticError::Overflow),
            None => Err(ArithmeticError::Underflow),
        }
    }

    /// Computes `acc * factor` by bounding the magnitude of the product.
    ///
    /// Magnitudes are taken with `unsigned_abs`, so `i128::MIN` (whose
    /// magnitude has no positive `i128` counterpart) is handled without a
    /// special branch: a negative product of magnitude `2^127` is only
    /// accepted when `min == i128::MIN`.
    pub fn mul(&self, acc: i128, factor: i128) -> Result<i128, ArithmeticError> {
        if acc == 0 || factor == 0 {
            return self.contain(0);
        }

        let negative = (acc < 0) != (factor < 0);
        let magnitude = acc.unsigned_abs().checked_mul(factor.unsigned_abs());

        if negative {
            let limit = if self.min < 0 { self.min.unsigned_abs() } else { 0 };

            match magnitude {
                Some(m) if m <= limit => self.contain((m as i128).wrapping_neg()),
                _ => Err(ArithmeticError::Underflow),
            }
        } else {
            let limit = if self.max > 0 { self.max as u128 } else { 0 };

            match magnitude {
                Some(m) if m <= limit => self.contain(m as i128),
                _ => Err(ArithmeticError::Overflow),
            }
        }
    }
}

#[inline]
fn to_usize(value: i128) -> Result<usize, HoardError> {
    usize::try_from(value).map_err(|_| HoardError::Overflow)
}

/// Guarded `a + b` over [`Bounds::SIZE`].
#[inline]
pub fn add_size(a: usize, b: usize) -> Result<usize, HoardError> {
    to_usize(Bounds::SIZE.add(a as i128, b as i128)?)
}

/// Guarded `a - b` over [`Bounds::SIZE`].
#[inline]
pub fn sub_size(a: usize, b: usize) -> Result<usize, HoardError> {
    to_usize(Bounds::SIZE.sub(a as i128, b as i128)?)
}

/// Guarded `a * b` over [`Bounds::SIZE`].
#[inline]
pub fn mul_size(a: usize, b: usize) -> Result<usize, HoardError> {
    to_usize(Bounds::SIZE.mul(a as i128, b as i128)?)
}

/// Byte size of a buffer holding `capacity` slots of `unit_size` bytes.
///
/// Fails with [`HoardError::Overflow`] when the product does not fit in
/// [`Bounds::ALLOCATION`].
pub fn allocation_size(capacity: usize, unit_size: usize) -> Result<usize, HoardError> {
    match Bounds::ALLOCATION.mul(capacity as i128, unit_size as i128) {
        Ok(bytes) => to_usize(bytes),
        Err(err) => {
            tracing::debug!(capacity, unit_size, "allocation size rejected by overflow guard");
            Err(err.into())
        }
    }
}
