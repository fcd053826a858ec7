// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Capacity-growth strategies.
//!
//! A strategy maps `(capacity, size)` to a proposed capacity, measured in
//! element slots. A proposal that is still not larger than `size` is fed back
//! into the strategy, so policies only need to make progress, not to be right
//! on the first call.

use crate::checked::{add_size, mul_size};
use crate::error::HoardError;

/// Signature of a caller-provided capacity policy.
///
/// Receives the current capacity and the size that must now fit.
pub type CapacityFn = fn(usize, usize) -> Result<usize, HoardError>;

/// Policy deciding the next buffer capacity when a container is full.
#[derive(Debug, Clone, Copy, Default)]
pub enum CapacityStrategy {
    /// `size + 1`: reallocates on every insertion past capacity.
    Strict,
    /// `(size + 1) + ceil((size + 1) / 2)`: roughly 50% headroom.
    #[default]
    Half,
    /// `max(1, capacity) * 2`: ignores `size`, amortized O(1) appends.
    Double,
    /// Caller-provided policy.
    Custom(CapacityFn),
}

impl CapacityStrategy {
    /// Proposes the next capacity for a buffer of `capacity` slots that must
    /// now hold `size` elements.
    pub fn next_capacity(&self, capacity: usize, size: usize) -> Result<usize, HoardError> {
        match self {
            Self::Strict => add_size(size, 1),
            Self::Half => {
                let base = add_size(size, 1)?;
                add_size(base, base.div_ceil(2))
            }
            Self::Double => mul_size(capacity.max(1), 2),
            Self::Custom(policy) => policy(capacity, size),
        }
    }
}

/// Computes the capacity a full buffer must grow to so that `required`
/// elements fit with at least one spare slot.
///
/// The strategy is invoked until its proposal exceeds `required`; the result
/// is then floored by `required + min_extra`. A custom policy that proposes a
/// capacity not larger than its input is rejected with
/// [`HoardError::InvalidTarget`].
pub fn grow_capacity(
    strategy: &CapacityStrategy,
    capacity: usize,
    required: usize,
    min_extra: usize,
) -> Result<usize, HoardError> {
    let mut next = capacity;

    while next <= required {
        let proposed = strategy.next_capacity(next, required)?;

        if proposed <= next {
            tracing::debug!(next, proposed, required, "capacity strategy stalled");
            return Err(HoardError::InvalidTarget);
        }

        next = proposed;
    }

    let floor = add_size(required, min_extra)?;

    Ok(next.max(floor))
}
