// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable array with pluggable capacity strategies.
//!
//! [`ArrayList<T>`] owns one contiguous buffer and decides its own growth:
//! when an insertion makes the size reach the capacity, the configured
//! [`CapacityStrategy`](hoard_core::CapacityStrategy) proposes a new
//! capacity, the proposal is floored by `size + min_extra`, checked against
//! the allocator's size limit, and the elements are moved into a fresh
//! allocation of exactly that size. Nothing is ever resized in place.
//!
//! # Core Guarantees
//!
//! - **Strategy-driven growth**: the growth policy is injected, never the
//!   runtime's default growth factor.
//! - **No partial mutation**: a failing operation returns an error and
//!   leaves size, capacity and contents unchanged.
//! - **Order-preserving removal**: removals shift the tail, they never swap
//!   with the last element.
//! - **Identity lookup**: `*_by_reference` operations compare slot
//!   addresses, not values.
//!
//! # Example
//!
//! ```rust
//! use hoard_array::ArrayList;
//! use hoard_core::HoardError;
//!
//! fn example() -> Result<(), HoardError> {
//!     let mut list = ArrayList::new();
//!     list.add_all([30, 10, 20])?;
//!
//!     list.sort(|a, b| a.cmp(b));
//!     assert_eq!(list.as_slice(), &[10, 20, 30]);
//!
//!     assert_eq!(list.remove_at(0), Some(10));
//!     assert_eq!(list.get_at(0), Some(&20));
//!     assert_eq!(list.get_at(5), None);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inject allocator failures:
//!
//! ```toml
//! [dev-dependencies]
//! hoard-array = { version = "*", features = ["test_utils"] }
//! ```
//!
//! Then use [`ArrayListBehaviour`] to exercise the allocation error path.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod array_list;
mod descriptor;
mod sort;
mod storage;

#[cfg(test)]
mod tests;

pub use array_list::ArrayList;
pub use descriptor::ElementDescriptor;

#[cfg(any(test, feature = "test_utils"))]
pub use storage::ArrayListBehaviour;
