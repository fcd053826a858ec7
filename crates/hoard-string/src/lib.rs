// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable byte string driven by hoard capacity strategies.
//!
//! [`DynString`] is the `unit_size = 1` member of the hoard family: it grows
//! with the same [`CapacityStrategy`](hoard_core::CapacityStrategy) policies
//! and the same overflow guard as the array container, and always keeps one
//! spare byte past its content once a buffer exists.
//!
//! # Example
//!
//! ```rust
//! use hoard_core::HoardError;
//! use hoard_string::DynString;
//!
//! fn example() -> Result<(), HoardError> {
//!     let mut s = DynString::try_from("key=value")?;
//!     s.cat(b";other=1")?;
//!
//!     assert_eq!(s.find_sub(b"="), Some(3));
//!     assert_eq!(s.size_split(b";"), 2);
//!
//!     let parts = s.split(b";")?;
//!     assert_eq!(parts.get_at(1).map(|p| p.as_bytes()), Some(&b"other=1"[..]));
//!
//!     let replaced = s.replace_all(b"=", b": ")?;
//!     assert_eq!(replaced, "key: value;other: 1");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Features
//!
//! - `std` (default): enables [`DynString::read_full_line`] over `std::io::BufRead`.
//! - `test_utils`: enables [`DynStringBehaviour`] failure injection.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod dyn_string;
#[cfg(any(test, feature = "std"))]
mod read_line;

#[cfg(test)]
mod tests;

pub use dyn_string::DynString;
#[cfg(any(test, feature = "std"))]
pub use read_line::ReadLineError;

#[cfg(any(test, feature = "test_utils"))]
pub use dyn_string::DynStringBehaviour;
