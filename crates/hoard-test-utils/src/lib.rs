// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for hoard crates.
//!
//! ## License
//!
//! GPL-3.0-only

mod drops;
mod permutations;

pub use drops::{DropCounter, Tracked};
pub use permutations::{apply_permutation, index_permutations};
