// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::ptr;

use hoard_core::HoardError;
use hoard_core::checked::allocation_size;

use crate::descriptor::ElementDescriptor;

/// Test behaviour for injecting failures in [`ArrayList`](crate::ArrayList)
/// reallocations.
///
/// This is only available with the `test_utils` feature and lets users
/// exercise the allocator-failure path of their own code.
///
/// The behaviour is sticky: once set, it remains active until changed.
///
/// # Example
///
/// ```rust,ignore
/// // test_utils feature required in dev-dependencies
/// use hoard_array::{ArrayList, ArrayListBehaviour};
/// use hoard_core::HoardError;
///
/// let mut list = ArrayList::<u32>::new();
/// list.change_behaviour(ArrayListBehaviour::FailAtAllocation);
///
/// assert!(matches!(list.add(1), Err(HoardError::Allocation { .. })));
/// assert!(list.is_empty());
///
/// list.change_behaviour(ArrayListBehaviour::None);
/// assert!(list.add(1).is_ok());
/// ```
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum ArrayListBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every reallocation fails with `HoardError::Allocation`.
    FailAtAllocation,
}

/// Owner of the element buffer.
///
/// `slots.len()` is the logical size. `capacity` is the number of slots
/// requested from the allocator; it is tracked here because the backing
/// `Vec` may report more (always, for zero-sized types).
pub(crate) struct ArrayStorage<T> {
    slots: Vec<T>,
    capacity: usize,
    descriptor: ElementDescriptor<T>,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: ArrayListBehaviour,
}

impl<T> ArrayStorage<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            capacity: 0,
            descriptor: ElementDescriptor::new(),
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: ArrayListBehaviour::None,
        }
    }

    #[cfg(any(test, feature = "test_utils"))]
    pub(crate) fn change_behaviour(&mut self, behaviour: ArrayListBehaviour) {
        self.behaviour = behaviour;
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub(crate) fn descriptor(&self) -> ElementDescriptor<T> {
        self.descriptor
    }

    #[inline(always)]
    pub(crate) fn slots(&self) -> &[T] {
        &self.slots
    }

    #[inline(always)]
    pub(crate) fn slots_mut(&mut self) -> &mut [T] {
        &mut self.slots
    }

    #[inline(always)]
    pub(crate) fn as_ptr(&self) -> *const T {
        self.slots.as_ptr()
    }

    /// Moves the buffer into a fresh allocation of exactly `new_capacity`
    /// slots: allocate, copy, free. Never resizes in place.
    ///
    /// On error nothing is modified.
    #[cold]
    #[inline(never)]
    pub(crate) fn reallocate(&mut self, new_capacity: usize) -> Result<(), HoardError> {
        let len = self.len();
        debug_assert!(new_capacity >= len);

        let unit_size = self.descriptor.unit_size();
        let bytes = allocation_size(new_capacity, unit_size)?;

        #[cfg(any(test, feature = "test_utils"))]
        if self.behaviour == ArrayListBehaviour::FailAtAllocation {
            return Err(HoardError::Allocation { bytes });
        }

        // 1. Allocate
        let mut fresh: Vec<T> = Vec::new();
        fresh
            .try_reserve_exact(new_capacity)
            .map_err(|_| HoardError::Allocation { bytes })?;

        // 2. Copy
        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): `fresh` has room for new_capacity >= len
            // elements, the source holds exactly len initialized elements and the two
            // allocations are distinct.
            ptr::copy_nonoverlapping(self.slots.as_ptr(), fresh.as_mut_ptr(), len);
            // SAFETY (PRECONDITIONS ARE MET): the elements were moved bitwise into
            // `fresh`; the old buffer must release its memory without dropping them.
            self.slots.set_len(0);
            fresh.set_len(len);
        }

        // 3. Free
        let old_capacity = self.capacity;
        self.slots = fresh;
        self.capacity = new_capacity;

        tracing::trace!(old_capacity, new_capacity, unit_size, bytes, "array storage reallocated");

        Ok(())
    }

    /// Allocates one slot if no buffer exists yet.
    pub(crate) fn materialize(&mut self) -> Result<(), HoardError> {
        if self.capacity == 0 {
            self.reallocate(1)?;
        }

        Ok(())
    }

    /// Appends into reserved room. The caller guarantees `len() < capacity()`.
    #[inline(always)]
    pub(crate) fn push(&mut self, value: T) {
        debug_assert!(self.len() < self.capacity);
        self.slots.push(value);
    }

    /// Removes the element at `index`, shifting the tail left by one.
    #[inline(always)]
    pub(crate) fn remove(&mut self, index: usize) -> T {
        self.slots.remove(index)
    }

    /// Detaches every element together with the buffer, leaving no allocation behind.
    pub(crate) fn take(&mut self) -> Vec<T> {
        self.capacity = 0;
        core::mem::take(&mut self.slots)
    }
}
