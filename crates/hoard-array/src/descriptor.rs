// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::marker::PhantomData;
use core::mem;

/// Slot-level access to the elements of an [`ArrayList`](crate::ArrayList).
///
/// The descriptor is the only code that reads, writes or exchanges slots;
/// the container itself never looks inside an element. It is zero-sized and
/// monomorphized per element type.
///
/// Passing an index that is not below the slice length is a precondition
/// violation, not a reportable error. Callers inside the container validate
/// indices before reaching the descriptor.
pub struct ElementDescriptor<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> ElementDescriptor<T> {
    /// Creates the descriptor for `T`.
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    /// Size of one slot in bytes.
    #[inline(always)]
    pub const fn unit_size(&self) -> usize {
        mem::size_of::<T>()
    }

    /// Element stored at `index`.
    #[inline(always)]
    pub fn get<'a>(&self, slots: &'a [T], index: usize) -> &'a T {
        debug_assert!(index < slots.len());
        &slots[index]
    }

    /// Stores `value` at `index`, returning the displaced element.
    #[inline(always)]
    pub fn set(&self, slots: &mut [T], index: usize, value: T) -> T {
        debug_assert!(index < slots.len());
        mem::replace(&mut slots[index], value)
    }

    /// Exchanges the elements at `i` and `j`.
    #[inline(always)]
    pub fn swap(&self, slots: &mut [T], i: usize, j: usize) {
        debug_assert!(i < slots.len() && j < slots.len());
        slots.swap(i, j);
    }
}

impl<T> Clone for ElementDescriptor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ElementDescriptor<T> {}

impl<T> Default for ElementDescriptor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for ElementDescriptor<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ElementDescriptor")
            .field("type", &core::any::type_name::<T>())
            .field("unit_size", &self.unit_size())
            .finish()
    }
}
