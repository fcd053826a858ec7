// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Containers whose growth policy is chosen by the caller.
//!
//! Hoard is a family of small `no_std` crates sharing one growth model: a
//! full container asks a [`CapacityStrategy`] for its next capacity, floors
//! the proposal by `size + min_extra`, checks the byte count against the
//! allocator's limit and only then moves its contents into a fresh buffer.
//! Every failure is reported as a [`HoardError`] and leaves the container as
//! it was.
//!
//! # Crates
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`array`] | [`ArrayList<T>`](array::ArrayList), contiguous storage with randomized quicksort |
//! | [`linked_list`] | [`LinkedList<T>`](linked_list::LinkedList), singly linked node chain |
//! | [`string`] | [`DynString`](string::DynString), growable byte string |
//! | [`checked`] | Overflow-checked size arithmetic |
//!
//! Both list containers implement [`ListOps`], and [`List<T>`] dispatches to
//! whichever one backs it.
//!
//! # Quick Start
//!
//! ```rust
//! use hoard::array::ArrayList;
//! use hoard::{CapacityStrategy, GrowthConfig, HoardError, List, ListOps};
//!
//! fn example() -> Result<(), HoardError> {
//!     let config = GrowthConfig::new()
//!         .with_min_extra(0)
//!         .with_strategy(CapacityStrategy::Double);
//!
//!     let mut list = List::from(ArrayList::with_config(config)?);
//!     list.add(2)?;
//!     list.add_at(1, 0)?;
//!     list.add(3)?;
//!
//!     assert_eq!(list.get_at(0), Some(&1));
//!     assert_eq!(list.remove_at(1), Some(2));
//!     assert_eq!(list.clear().collect::<Vec<_>>(), [1, 3]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Features
//!
//! - `std` (default): line reading for [`DynString`](string::DynString).
//! - `full`: every optional feature.
//! - `test_utils`: allocator failure injection on arrays and strings.
//!
//! # License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod list;

#[cfg(test)]
mod tests;

pub use hoard_array as array;
pub use hoard_core::checked;
pub use hoard_list as linked_list;
pub use hoard_string as string;

pub use hoard_core::{CapacityFn, CapacityStrategy, GrowthConfig, HoardError, ListOps, grow_capacity};
pub use list::{Drain, List};
