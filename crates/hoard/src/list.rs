// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec;
use core::ops::ControlFlow;

use hoard_array::ArrayList;
use hoard_core::{HoardError, ListOps};
use hoard_list::LinkedList;

macro_rules! dispatch {
    ($list:expr, $inner:ident => $body:expr) => {
        match $list {
            List::Array($inner) => $body,
            List::Linked($inner) => $body,
        }
    };
}

/// A list backed by either an [`ArrayList`] or a [`LinkedList`].
///
/// Every [`ListOps`] call is forwarded to the backing store, so code written
/// against `List<T>` behaves identically whichever store is chosen.
#[derive(Debug)]
pub enum List<T> {
    /// Contiguous storage.
    Array(ArrayList<T>),
    /// Node chain.
    Linked(LinkedList<T>),
}

impl<T> List<T> {
    /// Builds a list from optional backing stores, exactly one of which must
    /// be present.
    ///
    /// # Errors
    ///
    /// - [`HoardError::InstanceNotPresent`] if both are `None`.
    /// - [`HoardError::InvalidTarget`] if both are `Some`.
    pub fn from_parts(
        linked: Option<LinkedList<T>>,
        array: Option<ArrayList<T>>,
    ) -> Result<Self, HoardError> {
        match (linked, array) {
            (Some(linked), None) => Ok(Self::Linked(linked)),
            (None, Some(array)) => Ok(Self::Array(array)),
            (None, None) => Err(HoardError::InstanceNotPresent),
            (Some(_), Some(_)) => Err(HoardError::InvalidTarget),
        }
    }

    /// Returns `true` if backed by an [`ArrayList`].
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Returns `true` if backed by a [`LinkedList`].
    pub fn is_linked(&self) -> bool {
        matches!(self, Self::Linked(_))
    }

    /// The backing array, if any.
    pub fn as_array(&self) -> Option<&ArrayList<T>> {
        match self {
            Self::Array(array) => Some(array),
            Self::Linked(_) => None,
        }
    }

    /// The backing linked list, if any.
    pub fn as_linked(&self) -> Option<&LinkedList<T>> {
        match self {
            Self::Linked(linked) => Some(linked),
            Self::Array(_) => None,
        }
    }
}

impl<T> From<ArrayList<T>> for List<T> {
    fn from(array: ArrayList<T>) -> Self {
        Self::Array(array)
    }
}

impl<T> From<LinkedList<T>> for List<T> {
    fn from(linked: LinkedList<T>) -> Self {
        Self::Linked(linked)
    }
}

/// Owning iterator returned by [`List::clear`](ListOps::clear).
#[derive(Debug)]
pub enum Drain<T> {
    /// Elements detached from an [`ArrayList`].
    Array(vec::IntoIter<T>),
    /// Elements detached from a [`LinkedList`].
    Linked(hoard_list::IntoIter<T>),
}

impl<T> Iterator for Drain<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self {
            Self::Array(iter) => iter.next(),
            Self::Linked(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Array(iter) => iter.size_hint(),
            Self::Linked(iter) => iter.size_hint(),
        }
    }
}

impl<T> ExactSizeIterator for Drain<T> {}

impl<T> ListOps<T> for List<T> {
    type Drain = Drain<T>;

    fn len(&self) -> usize {
        dispatch!(self, list => list.len())
    }

    fn get_at(&self, index: usize) -> Option<&T> {
        dispatch!(self, list => list.get_at(index))
    }

    fn set_at(&mut self, index: usize, value: T) -> Result<T, HoardError> {
        dispatch!(self, list => list.set_at(index, value))
    }

    fn find_index_by_reference(&self, probe: *const T) -> Option<usize> {
        dispatch!(self, list => list.find_index_by_reference(probe))
    }

    fn add(&mut self, value: T) -> Result<(), HoardError> {
        dispatch!(self, list => list.add(value))
    }

    fn add_at(&mut self, value: T, index: usize) -> Result<(), HoardError> {
        dispatch!(self, list => list.add_at(value, index))
    }

    fn remove_at(&mut self, index: usize) -> Option<T> {
        dispatch!(self, list => list.remove_at(index))
    }

    fn clear(&mut self) -> Drain<T> {
        match self {
            Self::Array(array) => Drain::Array(array.clear()),
            Self::Linked(linked) => Drain::Linked(linked.clear()),
        }
    }

    fn clear_eraser_destructor<F>(&mut self, destructor: F)
    where
        F: FnMut(T),
    {
        dispatch!(self, list => list.clear_eraser_destructor(destructor))
    }

    fn for_each<F>(&self, visitor: F) -> ControlFlow<()>
    where
        F: FnMut(&T, usize) -> ControlFlow<()>,
    {
        dispatch!(self, list => list.for_each(visitor))
    }
}
