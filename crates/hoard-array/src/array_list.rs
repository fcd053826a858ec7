// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec;
use core::ops::{ControlFlow, Deref};
use core::ptr;

use hoard_core::checked::add_size;
use hoard_core::{CapacityStrategy, GrowthConfig, HoardError, ListOps};

use crate::storage::ArrayStorage;

#[cfg(any(test, feature = "test_utils"))]
use crate::storage::ArrayListBehaviour;

/// Growable array with an injectable capacity-growth policy.
///
/// Whenever an insertion makes the logical size reach the allocated
/// capacity, the configured [`CapacityStrategy`] is asked for a new capacity
/// (repeatedly, until one is large enough), the proposal is floored by
/// `size + min_extra`, and the buffer is moved into a fresh allocation of
/// exactly that many slots. After every successful insertion at least one
/// slot is spare.
///
/// Every fallible operation either succeeds or leaves the list untouched.
///
/// # Aliasing
///
/// References returned by [`get_at`](Self::get_at), and addresses taken from
/// them, are only valid until the next mutating call: growth moves every
/// element to a new buffer. The borrow checker enforces this for references;
/// raw addresses used as identity probes must not be kept across mutations.
///
/// # Example
///
/// ```rust
/// use hoard_array::ArrayList;
/// use hoard_core::{CapacityStrategy, GrowthConfig, HoardError};
///
/// fn example() -> Result<(), HoardError> {
///     let config = GrowthConfig::new()
///         .with_min_extra(0)
///         .with_strategy(CapacityStrategy::Strict);
///     let mut list = ArrayList::<i32>::with_config(config)?;
///
///     list.add(1)?;
///     list.add(2)?;
///     list.add(3)?;
///     assert_eq!(list.capacity(), 4);
///
///     list.add_at(99, 1)?;
///     assert_eq!(list.as_slice(), &[1, 99, 2, 3]);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct ArrayList<T> {
    storage: ArrayStorage<T>,
    min_extra: usize,
    strategy: CapacityStrategy,
}

impl<T> ArrayList<T> {
    /// Creates an empty list with the default growth configuration.
    ///
    /// No buffer is allocated until the first insertion or
    /// [`materialize`](Self::materialize).
    pub const fn new() -> Self {
        Self {
            storage: ArrayStorage::new(),
            min_extra: GrowthConfig::DEFAULT_MIN_EXTRA,
            strategy: GrowthConfig::DEFAULT_STRATEGY,
        }
    }

    /// Creates an empty list with `min_capacity` slots allocated up front.
    pub fn with_capacity(min_capacity: usize) -> Result<Self, HoardError> {
        Self::with_config(GrowthConfig::new().with_min_capacity(min_capacity))
    }

    /// Creates an empty list using `config`.
    ///
    /// # Errors
    ///
    /// [`HoardError::Overflow`] if `config.min_capacity` slots cannot be
    /// addressed, [`HoardError::Allocation`] if the allocator refuses them.
    pub fn with_config(config: GrowthConfig) -> Result<Self, HoardError> {
        let mut list = Self {
            storage: ArrayStorage::new(),
            min_extra: config.min_extra,
            strategy: config.strategy,
        };

        if config.min_capacity > 0 {
            list.storage.reallocate(config.min_capacity)?;
        }

        Ok(list)
    }

    /// Changes the failure-injection behaviour.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: ArrayListBehaviour) {
        self.storage.change_behaviour(behaviour);
    }

    /// Number of stored elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Allocated capacity in element slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Growth floor added to every capacity computation.
    pub fn min_extra(&self) -> usize {
        self.min_extra
    }

    /// Active growth policy.
    pub fn strategy(&self) -> CapacityStrategy {
        self.strategy
    }

    /// Replaces the growth floor. Takes effect at the next growth.
    pub fn set_min_extra(&mut self, min_extra: usize) {
        self.min_extra = min_extra;
    }

    /// Replaces the growth policy. Takes effect at the next growth.
    pub fn set_strategy(&mut self, strategy: CapacityStrategy) {
        self.strategy = strategy;
    }

    /// Pointer to the first slot.
    ///
    /// Never allocates: on a list with no buffer the pointer is dangling.
    /// Call [`materialize`](Self::materialize) first when a real slot is
    /// needed.
    pub fn as_ptr(&self) -> *const T {
        self.storage.as_ptr()
    }

    /// Allocates a single slot if the list has no buffer yet.
    pub fn materialize(&mut self) -> Result<(), HoardError> {
        self.storage.materialize()
    }

    /// Borrows the stored elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.storage.slots()
    }

    /// Iterates over the stored elements in index order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline(always)]
    pub(crate) fn storage_descriptor(&self) -> crate::descriptor::ElementDescriptor<T> {
        self.storage.descriptor()
    }

    #[inline(always)]
    pub(crate) fn slots_mut(&mut self) -> &mut [T] {
        self.storage.slots_mut()
    }

    /// Grows the buffer, if needed, so `required` elements fit with a spare slot.
    fn reserve_for(&mut self, required: usize) -> Result<(), HoardError> {
        let capacity = self.capacity();

        if capacity > required {
            return Ok(());
        }

        let new_capacity =
            hoard_core::grow_capacity(&self.strategy, capacity, required, self.min_extra)?;

        self.storage.reallocate(new_capacity)
    }

    #[inline(always)]
    fn check_index(&self, index: usize) -> Result<(), HoardError> {
        let len = self.len();

        if index >= len {
            return Err(HoardError::IndexOverflow { index, len });
        }

        Ok(())
    }

    #[inline(always)]
    fn check_insert_index(&self, index: usize) -> Result<(), HoardError> {
        let len = self.len();

        if index > len {
            return Err(HoardError::IndexOverflow { index, len });
        }

        Ok(())
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Element at `index`, or `None` if `index >= len()`.
    pub fn get_at(&self, index: usize) -> Option<&T> {
        if index >= self.len() {
            return None;
        }

        Some(self.storage.descriptor().get(self.storage.slots(), index))
    }

    /// Mutable element at `index`, or `None` if `index >= len()`.
    pub fn get_at_mut(&mut self, index: usize) -> Option<&mut T> {
        self.storage.slots_mut().get_mut(index)
    }

    /// Overwrites the element at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// [`HoardError::IndexOverflow`] if `index >= len()`.
    pub fn set_at(&mut self, index: usize, value: T) -> Result<T, HoardError> {
        self.check_index(index)?;

        let descriptor = self.storage.descriptor();
        Ok(descriptor.set(self.storage.slots_mut(), index, value))
    }

    /// Lowest index whose slot lives at `probe`.
    ///
    /// Compares addresses, not values. Zero-sized elements all share one
    /// address and always resolve to index 0.
    ///
    /// ```rust
    /// use hoard_array::ArrayList;
    ///
    /// let mut list = ArrayList::new();
    /// list.add_all([7, 7, 7]).unwrap();
    ///
    /// let probe: *const i32 = list.get_at(2).unwrap();
    /// assert_eq!(list.find_index_by_reference(probe), Some(2));
    /// assert_eq!(list.find_index_by_reference(&7), None);
    /// ```
    pub fn find_index_by_reference(&self, probe: *const T) -> Option<usize> {
        self.iter().position(|slot| ptr::eq(slot, probe))
    }

    /// Exchanges the elements at `i` and `j`.
    ///
    /// # Errors
    ///
    /// [`HoardError::IndexOverflow`] if either index is `>= len()`.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), HoardError> {
        self.check_index(i)?;
        self.check_index(j)?;

        let descriptor = self.storage.descriptor();
        descriptor.swap(self.storage.slots_mut(), i, j);

        Ok(())
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    /// Appends `value`, growing the buffer through the active strategy if
    /// the list is full.
    ///
    /// # Errors
    ///
    /// [`HoardError::Overflow`] if the grown buffer cannot be addressed,
    /// [`HoardError::Allocation`] if the allocator refuses it. `value` is
    /// dropped and the list is unchanged.
    pub fn add(&mut self, value: T) -> Result<(), HoardError> {
        let required = add_size(self.len(), 1)?;
        self.reserve_for(required)?;
        self.storage.push(value);

        Ok(())
    }

    /// Inserts `value` at `index` by appending it and walking it left with
    /// adjacent swaps.
    ///
    /// # Errors
    ///
    /// [`HoardError::IndexOverflow`] if `index > len()`, plus the errors of
    /// [`add`](Self::add).
    pub fn add_at(&mut self, value: T, index: usize) -> Result<(), HoardError> {
        self.check_insert_index(index)?;
        self.add(value)?;

        let descriptor = self.storage.descriptor();
        let slots = self.storage.slots_mut();

        for i in (index..slots.len() - 1).rev() {
            descriptor.swap(slots, i, i + 1);
        }

        Ok(())
    }

    /// Appends every value, growing at most once.
    ///
    /// The iterator's reported length decides the growth; values beyond it
    /// are ignored.
    pub fn add_all<I>(&mut self, values: I) -> Result<(), HoardError>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let values = values.into_iter();
        let count = values.len();

        if count == 0 {
            return Ok(());
        }

        let required = add_size(self.len(), count)?;
        self.reserve_for(required)?;

        for value in values.take(count) {
            self.storage.push(value);
        }

        Ok(())
    }

    /// Inserts every value, in order, starting at `index`.
    ///
    /// # Errors
    ///
    /// [`HoardError::IndexOverflow`] if `index > len()`, plus the errors of
    /// [`add`](Self::add).
    pub fn add_all_at<I>(&mut self, values: I, index: usize) -> Result<(), HoardError>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        self.check_insert_index(index)?;

        let before = self.len();
        self.add_all(values)?;
        let inserted = self.len() - before;

        self.storage.slots_mut()[index..].rotate_right(inserted);

        Ok(())
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Removes and returns the element at `index`, shifting the tail left.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.len() {
            return None;
        }

        Some(self.storage.remove(index))
    }

    /// Removes and returns the element living at `probe`.
    pub fn remove_by_reference(&mut self, probe: *const T) -> Option<T> {
        let index = self.find_index_by_reference(probe)?;
        self.remove_at(index)
    }

    /// Removes and drops the element at `index`.
    pub fn eraser_at(&mut self, index: usize) -> bool {
        self.remove_at(index).is_some()
    }

    /// Removes and drops the element living at `probe`.
    pub fn eraser_by_reference(&mut self, probe: *const T) -> bool {
        self.remove_by_reference(probe).is_some()
    }

    /// Empties the list and releases its buffer, handing the elements back.
    ///
    /// ```rust
    /// use hoard_array::ArrayList;
    ///
    /// let mut list = ArrayList::new();
    /// list.add_all(["a", "b"]).unwrap();
    ///
    /// let taken: Vec<_> = list.clear().collect();
    /// assert_eq!(taken, ["a", "b"]);
    /// assert_eq!(list.capacity(), 0);
    /// ```
    pub fn clear(&mut self) -> vec::IntoIter<T> {
        self.storage.take().into_iter()
    }

    /// Empties the list and releases its buffer, dropping the elements.
    pub fn clear_eraser(&mut self) {
        drop(self.storage.take());
    }

    /// Empties the list and releases its buffer, moving each element into
    /// `destructor`, last element first.
    pub fn clear_eraser_destructor<F>(&mut self, mut destructor: F)
    where
        F: FnMut(T),
    {
        let mut slots = self.storage.take();

        while let Some(value) = slots.pop() {
            destructor(value);
        }
    }

    /// Consumes the list, handing the elements back.
    pub fn free(mut self) -> vec::IntoIter<T> {
        self.clear()
    }

    /// Consumes the list, dropping the elements.
    pub fn free_eraser(mut self) {
        self.clear_eraser();
    }

    /// Consumes the list, moving each element into `destructor`.
    pub fn free_eraser_destructor<F>(mut self, destructor: F)
    where
        F: FnMut(T),
    {
        self.clear_eraser_destructor(destructor);
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Visits elements in index order until `visitor` breaks.
    ///
    /// ```rust
    /// use core::ops::ControlFlow;
    /// use hoard_array::ArrayList;
    ///
    /// let mut list = ArrayList::new();
    /// list.add_all([1, 2, 3, 4]).unwrap();
    ///
    /// let mut seen = Vec::new();
    /// let flow = list.for_each(|value, index| {
    ///     seen.push(*value);
    ///     if index == 1 { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
    /// });
    ///
    /// assert!(flow.is_break());
    /// assert_eq!(seen, [1, 2]);
    /// ```
    pub fn for_each<F>(&self, mut visitor: F) -> ControlFlow<()>
    where
        F: FnMut(&T, usize) -> ControlFlow<()>,
    {
        for (index, value) in self.iter().enumerate() {
            if visitor(value, index).is_break() {
                return ControlFlow::Break(());
            }
        }

        ControlFlow::Continue(())
    }

    // =========================================================================
    // Capacity control
    // =========================================================================

    /// Grows the buffer to exactly `capacity` slots if it is smaller.
    ///
    /// Returns whether a reallocation happened.
    pub fn set_min_capacity(&mut self, capacity: usize) -> Result<bool, HoardError> {
        if self.capacity() >= capacity {
            return Ok(false);
        }

        self.storage.reallocate(capacity)?;
        Ok(true)
    }

    /// Shrinks the buffer to exactly `capacity` slots if it is larger and
    /// the elements still fit with a spare slot.
    ///
    /// Returns whether a reallocation happened.
    pub fn set_max_capacity(&mut self, capacity: usize) -> Result<bool, HoardError> {
        if self.capacity() <= capacity || self.len() >= capacity {
            return Ok(false);
        }

        self.storage.reallocate(capacity)?;
        Ok(true)
    }

    /// Reallocates the buffer to exactly `capacity` slots unless the
    /// elements would not fit with a spare slot.
    ///
    /// Returns whether a reallocation happened.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<bool, HoardError> {
        if self.len() >= capacity || self.capacity() == capacity {
            return Ok(false);
        }

        self.storage.reallocate(capacity)?;
        Ok(true)
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for ArrayList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ArrayList")
            .field("data", &self.as_slice())
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("min_extra", &self.min_extra)
            .field("strategy", &self.strategy)
            .finish()
    }
}

impl<T> ListOps<T> for ArrayList<T> {
    type Drain = vec::IntoIter<T>;

    fn len(&self) -> usize {
        ArrayList::len(self)
    }

    fn get_at(&self, index: usize) -> Option<&T> {
        ArrayList::get_at(self, index)
    }

    fn set_at(&mut self, index: usize, value: T) -> Result<T, HoardError> {
        ArrayList::set_at(self, index, value)
    }

    fn find_index_by_reference(&self, probe: *const T) -> Option<usize> {
        ArrayList::find_index_by_reference(self, probe)
    }

    fn add(&mut self, value: T) -> Result<(), HoardError> {
        ArrayList::add(self, value)
    }

    fn add_at(&mut self, value: T, index: usize) -> Result<(), HoardError> {
        ArrayList::add_at(self, value, index)
    }

    fn remove_at(&mut self, index: usize) -> Option<T> {
        ArrayList::remove_at(self, index)
    }

    fn clear(&mut self) -> Self::Drain {
        ArrayList::clear(self)
    }

    fn clear_eraser(&mut self) {
        ArrayList::clear_eraser(self);
    }

    fn clear_eraser_destructor<F>(&mut self, destructor: F)
    where
        F: FnMut(T),
    {
        ArrayList::clear_eraser_destructor(self, destructor);
    }

    fn for_each<F>(&self, visitor: F) -> ControlFlow<()>
    where
        F: FnMut(&T, usize) -> ControlFlow<()>,
    {
        ArrayList::for_each(self, visitor)
    }
}
