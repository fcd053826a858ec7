// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Operation contract shared by list containers.

use core::ops::ControlFlow;

use crate::error::HoardError;

/// Core operations every hoard list implements.
///
/// Any two implementors are interchangeable: they agree on indices, error
/// classes and the identity semantics of the `*_by_reference` operations.
///
/// # Identity
///
/// `find_index_by_reference`, `remove_by_reference` and `eraser_by_reference`
/// compare the address of each stored element with `probe`; two equal values
/// stored in different slots are different elements. A probe is usually
/// obtained from [`get_at`](ListOps::get_at) and stays meaningful only until
/// the next mutating call, since growth may move every element.
///
/// Contiguous backings store zero-sized elements at a single address, so
/// for zero-sized `T` a probe into them always resolves to the first element.
pub trait ListOps<T> {
    /// Owning iterator over the elements detached by [`clear`](ListOps::clear).
    type Drain: Iterator<Item = T>;

    /// Number of stored elements.
    fn len(&self) -> usize;

    /// Returns `true` if the list holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index`, or `None` if `index >= len()`.
    fn get_at(&self, index: usize) -> Option<&T>;

    /// Overwrites the element at `index` and returns the previous value.
    ///
    /// # Errors
    ///
    /// [`HoardError::IndexOverflow`] if `index >= len()`.
    fn set_at(&mut self, index: usize, value: T) -> Result<T, HoardError>;

    /// Lowest index whose element lives at `probe`.
    fn find_index_by_reference(&self, probe: *const T) -> Option<usize>;

    /// Appends `value`.
    fn add(&mut self, value: T) -> Result<(), HoardError>;

    /// Inserts `value` so that it ends up at `index`, shifting later
    /// elements one position to the right.
    ///
    /// # Errors
    ///
    /// [`HoardError::IndexOverflow`] if `index > len()`.
    fn add_at(&mut self, value: T, index: usize) -> Result<(), HoardError>;

    /// Removes and returns the element at `index`, preserving the order of
    /// the remaining elements.
    fn remove_at(&mut self, index: usize) -> Option<T>;

    /// Removes and returns the element living at `probe`.
    fn remove_by_reference(&mut self, probe: *const T) -> Option<T> {
        let index = self.find_index_by_reference(probe)?;
        self.remove_at(index)
    }

    /// Removes and drops the element at `index`. Returns `false` if there
    /// was no such element.
    fn eraser_at(&mut self, index: usize) -> bool {
        self.remove_at(index).is_some()
    }

    /// Removes and drops the element living at `probe`.
    fn eraser_by_reference(&mut self, probe: *const T) -> bool {
        self.remove_by_reference(probe).is_some()
    }

    /// Empties the list, handing every element back to the caller.
    fn clear(&mut self) -> Self::Drain;

    /// Empties the list, dropping every element.
    fn clear_eraser(&mut self) {
        self.clear().for_each(drop);
    }

    /// Empties the list, moving every element into `destructor` exactly once.
    fn clear_eraser_destructor<F>(&mut self, destructor: F)
    where
        F: FnMut(T);

    /// Visits elements in index order until `visitor` breaks.
    ///
    /// The element that produced the break has been fully visited. Returns
    /// [`ControlFlow::Break`] if the visit stopped early.
    fn for_each<F>(&self, visitor: F) -> ControlFlow<()>
    where
        F: FnMut(&T, usize) -> ControlFlow<()>;

    /// Consumes the list, handing every element back to the caller.
    fn free(mut self) -> Self::Drain
    where
        Self: Sized,
    {
        self.clear()
    }

    /// Consumes the list, dropping every element.
    fn free_eraser(mut self)
    where
        Self: Sized,
    {
        self.clear_eraser();
    }

    /// Consumes the list, moving every element into `destructor`.
    fn free_eraser_destructor<F>(mut self, destructor: F)
    where
        Self: Sized,
        F: FnMut(T),
    {
        self.clear_eraser_destructor(destructor);
    }
}
