// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Singly linked list implementing the hoard list contract.
//!
//! [`LinkedList<T>`] keeps an owning chain of heap nodes plus a cached tail,
//! so appending and pushing to the top are O(1) while indexed access walks
//! the chain. It implements [`ListOps`](hoard_core::ListOps) with the same
//! indices, errors and identity semantics as the array container, which
//! makes the two interchangeable behind a `List` facade.
//!
//! # Example
//!
//! ```rust
//! use hoard_core::HoardError;
//! use hoard_list::LinkedList;
//!
//! fn example() -> Result<(), HoardError> {
//!     let mut list = LinkedList::new();
//!     list.add(2)?;
//!     list.add(3)?;
//!     list.add_top(1)?;
//!
//!     assert_eq!(list.top(), Some(&1));
//!     assert_eq!(list.get_at(2), Some(&3));
//!     assert_eq!(list.remove_top(), Some(1));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod linked_list;

#[cfg(test)]
mod tests;

pub use linked_list::{IntoIter, Iter, LinkedList};
