// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Randomized in-place quicksort (Lomuto partitioning).

use core::cmp::Ordering;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use hoard_core::HoardError;

use crate::array_list::ArrayList;
use crate::descriptor::ElementDescriptor;

/// Seed used when the operating system cannot provide entropy.
const FALLBACK_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

fn pivot_rng(len: usize) -> SmallRng {
    SmallRng::try_from_os_rng().unwrap_or_else(|_| {
        tracing::debug!(len, "os entropy unavailable, seeding sort pivots from fallback");
        SmallRng::seed_from_u64(FALLBACK_SEED ^ len as u64)
    })
}

/// Sorts `slots` in place.
///
/// Each round picks a uniformly random pivot, parks it in the last slot,
/// moves every element with `cmp(element, pivot) != Greater` to the front
/// and swaps the pivot right after them. The smaller side is sorted
/// recursively and the larger one iteratively, so stack depth stays
/// logarithmic.
fn quicksort<T, R, F>(descriptor: ElementDescriptor<T>, rng: &mut R, slots: &mut [T], cmp: &mut F)
where
    R: Rng + ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut slots = slots;

    while slots.len() > 1 {
        let last = slots.len() - 1;
        let pivot = rng.random_range(0..slots.len());
        descriptor.swap(slots, pivot, last);

        let mut store = 0;
        for i in 0..last {
            let ordering = cmp(descriptor.get(slots, i), descriptor.get(slots, last));

            if ordering != Ordering::Greater {
                descriptor.swap(slots, i, store);
                store += 1;
            }
        }
        descriptor.swap(slots, store, last);

        let (left, right) = core::mem::take(&mut slots).split_at_mut(store);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort(descriptor, rng, left, cmp);
            slots = right;
        } else {
            quicksort(descriptor, rng, right, cmp);
            slots = left;
        }
    }
}

impl<T> ArrayList<T> {
    /// Sorts the whole list with `cmp`, using OS-seeded random pivots.
    ///
    /// Not stable. `cmp` must be a strict weak ordering for the result to be
    /// sorted; otherwise the order is unspecified but the list keeps exactly
    /// the same elements.
    ///
    /// ```rust
    /// use hoard_array::ArrayList;
    ///
    /// let mut list = ArrayList::new();
    /// list.add_all([5, 3, 9, 1]).unwrap();
    /// list.sort(|a, b| a.cmp(b));
    ///
    /// assert_eq!(list.as_slice(), &[1, 3, 5, 9]);
    /// ```
    pub fn sort<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut rng = pivot_rng(self.len());
        let descriptor = self.storage_descriptor();

        quicksort(descriptor, &mut rng, self.slots_mut(), &mut cmp);
    }

    /// Sorts the half-open range `[begin, end)` with `cmp`.
    ///
    /// # Errors
    ///
    /// [`HoardError::IndexOverflow`] if `end > len()`,
    /// [`HoardError::InvalidTarget`] if `begin > end`.
    pub fn sort_range<F>(&mut self, begin: usize, end: usize, cmp: F) -> Result<(), HoardError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut rng = pivot_rng(end.saturating_sub(begin));
        self.sort_range_with_rng(&mut rng, begin, end, cmp)
    }

    /// Sorts `[begin, end)` drawing pivots from `rng`.
    ///
    /// With a seeded generator the sequence of swaps is reproducible.
    pub fn sort_range_with_rng<R, F>(
        &mut self,
        rng: &mut R,
        begin: usize,
        end: usize,
        mut cmp: F,
    ) -> Result<(), HoardError>
    where
        R: Rng + ?Sized,
        F: FnMut(&T, &T) -> Ordering,
    {
        let len = self.len();

        if end > len {
            return Err(HoardError::IndexOverflow { index: end, len });
        }

        if begin > end {
            return Err(HoardError::InvalidTarget);
        }

        let descriptor = self.storage_descriptor();
        quicksort(descriptor, rng, &mut self.slots_mut()[begin..end], &mut cmp);

        Ok(())
    }
}
