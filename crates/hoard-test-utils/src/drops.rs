// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Drop tracking for ownership tests.

use std::cell::Cell;
use std::ops::Deref;
use std::rc::Rc;

/// Counts how many [`Tracked`] values created from it have been dropped.
///
/// # Example
/// ```
/// use hoard_test_utils::DropCounter;
///
/// let counter = DropCounter::new();
/// let a = counter.track(1);
/// let b = counter.track(2);
///
/// drop(a);
/// assert_eq!(counter.drops(), 1);
/// drop(b);
/// assert_eq!(counter.drops(), 2);
/// ```
#[derive(Debug, Default, Clone)]
pub struct DropCounter {
    drops: Rc<Cell<usize>>,
}

impl DropCounter {
    /// Creates a counter with no drops recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps `value` so that dropping it bumps this counter.
    pub fn track<T>(&self, value: T) -> Tracked<T> {
        Tracked {
            value,
            drops: Rc::clone(&self.drops),
        }
    }

    /// Number of tracked values dropped so far.
    pub fn drops(&self) -> usize {
        self.drops.get()
    }
}

/// A value whose drop is recorded by a [`DropCounter`].
#[derive(Debug)]
pub struct Tracked<T> {
    value: T,
    drops: Rc<Cell<usize>>,
}

impl<T> Tracked<T> {
    /// Borrows the wrapped value.
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T> Deref for Tracked<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
