// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growth configuration shared by hoard containers.

use crate::error::HoardError;
use crate::strategy::{CapacityStrategy, grow_capacity};

/// Growth parameters of a container.
///
/// # Example
///
/// ```rust
/// use hoard_core::{CapacityStrategy, GrowthConfig};
///
/// let config = GrowthConfig::new()
///     .with_min_capacity(8)
///     .with_strategy(CapacityStrategy::Double);
///
/// assert_eq!(config.min_capacity, 8);
/// assert_eq!(config.min_extra, GrowthConfig::DEFAULT_MIN_EXTRA);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GrowthConfig {
    /// Capacity allocated at construction. Zero defers allocation.
    pub min_capacity: usize,
    /// Floor added to every growth computation.
    pub min_extra: usize,
    /// Policy used whenever the container is full.
    pub strategy: CapacityStrategy,
}

impl GrowthConfig {
    /// Default initial capacity (lazy).
    pub const DEFAULT_MIN_CAPACITY: usize = 0;
    /// Default growth floor.
    pub const DEFAULT_MIN_EXTRA: usize = 20;
    /// Default growth policy.
    pub const DEFAULT_STRATEGY: CapacityStrategy = CapacityStrategy::Half;

    /// Creates a configuration with the default values.
    pub const fn new() -> Self {
        Self {
            min_capacity: Self::DEFAULT_MIN_CAPACITY,
            min_extra: Self::DEFAULT_MIN_EXTRA,
            strategy: Self::DEFAULT_STRATEGY,
        }
    }

    /// Sets the initial capacity.
    pub const fn with_min_capacity(mut self, min_capacity: usize) -> Self {
        self.min_capacity = min_capacity;
        self
    }

    /// Sets the growth floor.
    pub const fn with_min_extra(mut self, min_extra: usize) -> Self {
        self.min_extra = min_extra;
        self
    }

    /// Sets the growth policy.
    pub const fn with_strategy(mut self, strategy: CapacityStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Capacity a buffer of `capacity` slots grows to so `required` elements fit.
    ///
    /// See [`grow_capacity`].
    pub fn grow(&self, capacity: usize, required: usize) -> Result<usize, HoardError> {
        grow_capacity(&self.strategy, capacity, required, self.min_extra)
    }
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self::new()
    }
}
