// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared building blocks for hoard containers.
//!
//! Every container in the hoard family grows the same way: when the logical
//! size catches up with the allocated capacity, a [`CapacityStrategy`] proposes
//! a new capacity, the proposal is floored by `size + min_extra`, and every
//! value that ends up as an allocation size is run through the overflow guard
//! in [`checked`] before it reaches the allocator.
//!
//! # Example
//!
//! ```rust
//! use hoard_core::{CapacityStrategy, GrowthConfig, HoardError};
//!
//! fn example() -> Result<(), HoardError> {
//!     let config = GrowthConfig::new()
//!         .with_strategy(CapacityStrategy::Strict)
//!         .with_min_extra(0);
//!
//!     // Appending the first element into an empty buffer.
//!     assert_eq!(config.grow(0, 1)?, 2);
//!
//!     // Half strategy with the default floor of 20 extra slots.
//!     assert_eq!(GrowthConfig::default().grow(0, 1)?, 21);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

pub mod checked;

mod config;
mod error;
mod strategy;
mod traits;

#[cfg(test)]
mod tests;

pub use checked::{ArithmeticError, Bounds};
pub use config::GrowthConfig;
pub use error::{ERROR_CODE_BASE, HoardError};
pub use strategy::{CapacityFn, CapacityStrategy, grow_capacity};
pub use traits::ListOps;
