// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use core::marker::PhantomData;
use core::ops::ControlFlow;
use core::ptr::{self, NonNull};

use hoard_core::checked::add_size;
use hoard_core::{HoardError, ListOps};

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    fn alloc(value: T, next: Link<T>) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node { value, next })))
    }

    /// Releases an unlinked node and returns its value.
    ///
    /// # Safety
    ///
    /// `node` must come from [`Node::alloc`], must no longer be reachable
    /// from any list and must not be used afterwards.
    unsafe fn release(node: NonNull<Node<T>>) -> T {
        // SAFETY (PRECONDITIONS ARE MET): the caller hands over sole ownership
        // of a node allocated by `Box`.
        let boxed = unsafe { Box::from_raw(node.as_ptr()) };
        boxed.value
    }
}

/// Singly linked list with a cached tail.
///
/// Nodes are owned by the list and freed when their element is removed.
/// The address of an element stays stable until that element is removed,
/// so identity probes survive unrelated insertions and removals (unlike in
/// the array container).
pub struct LinkedList<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

// SAFETY: the list owns its nodes exclusively, exactly like `Box<Node<T>>`.
unsafe impl<T: Send> Send for LinkedList<T> {}
// SAFETY: shared access never mutates nodes.
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Number of stored elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates over the elements from top to bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    fn node_at(&self, index: usize) -> Link<T> {
        if index >= self.len {
            return None;
        }

        let mut current = self.head;
        for _ in 0..index {
            // SAFETY (PRECONDITIONS ARE MET): every node reachable from `head`
            // within `len` steps is live.
            current = current.and_then(|node| unsafe { (*node.as_ptr()).next });
        }

        current
    }

    // =========================================================================
    // Top
    // =========================================================================

    /// First element.
    pub fn top(&self) -> Option<&T> {
        // SAFETY (PRECONDITIONS ARE MET): `head` is live while the list is borrowed.
        self.head.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Pushes `value` in front of the first element.
    pub fn add_top(&mut self, value: T) -> Result<(), HoardError> {
        let len = add_size(self.len, 1)?;
        let node = Node::alloc(value, self.head);

        self.head = Some(node);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.len = len;

        Ok(())
    }

    /// Unlinks and returns the first element.
    pub fn remove_top(&mut self) -> Option<T> {
        let head = self.head?;

        // SAFETY (PRECONDITIONS ARE MET): `head` is live and owned by this list.
        self.head = unsafe { (*head.as_ptr()).next };
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;

        // SAFETY (PRECONDITIONS ARE MET): `head` was just unlinked.
        Some(unsafe { Node::release(head) })
    }

    /// Unlinks and drops the first element.
    pub fn eraser_top(&mut self) -> bool {
        self.remove_top().is_some()
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Element at `index`, or `None` if `index >= len()`.
    pub fn get_at(&self, index: usize) -> Option<&T> {
        // SAFETY (PRECONDITIONS ARE MET): nodes returned by `node_at` are live.
        self.node_at(index)
            .map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Mutable element at `index`, or `None` if `index >= len()`.
    pub fn get_at_mut(&mut self, index: usize) -> Option<&mut T> {
        // SAFETY (PRECONDITIONS ARE MET): nodes returned by `node_at` are live
        // and `&mut self` guarantees exclusive access.
        self.node_at(index)
            .map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    /// Overwrites the element at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// [`HoardError::IndexOverflow`] if `index >= len()`.
    pub fn set_at(&mut self, index: usize, value: T) -> Result<T, HoardError> {
        let len = self.len;
        let slot = self
            .get_at_mut(index)
            .ok_or(HoardError::IndexOverflow { index, len })?;

        Ok(core::mem::replace(slot, value))
    }

    /// Lowest index whose element lives at `probe`.
    pub fn find_index_by_reference(&self, probe: *const T) -> Option<usize> {
        self.iter().position(|value| ptr::eq(value, probe))
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    /// Appends `value` after the last element.
    pub fn add(&mut self, value: T) -> Result<(), HoardError> {
        let len = add_size(self.len, 1)?;
        let node = Node::alloc(value, None);

        match self.tail {
            // SAFETY (PRECONDITIONS ARE MET): `tail` is live and owned by this list.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len = len;

        Ok(())
    }

    /// Inserts `value` so that it ends up at `index`.
    ///
    /// # Errors
    ///
    /// [`HoardError::IndexOverflow`] if `index > len()`.
    pub fn add_at(&mut self, value: T, index: usize) -> Result<(), HoardError> {
        let len = self.len;

        if index > len {
            return Err(HoardError::IndexOverflow { index, len });
        }

        if index == 0 {
            return self.add_top(value);
        }

        if index == len {
            return self.add(value);
        }

        let Some(previous) = self.node_at(index - 1) else {
            return Err(HoardError::IndexOverflow { index, len });
        };
        let new_len = add_size(len, 1)?;

        // SAFETY (PRECONDITIONS ARE MET): `previous` is live; it is not the tail
        // since `index < len`.
        unsafe {
            let next = (*previous.as_ptr()).next;
            (*previous.as_ptr()).next = Some(Node::alloc(value, next));
        }
        self.len = new_len;

        Ok(())
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Unlinks and returns the element at `index`.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }

        if index == 0 {
            return self.remove_top();
        }

        let previous = self.node_at(index - 1)?;

        // SAFETY (PRECONDITIONS ARE MET): `previous` and its successor are live
        // because `index < len`.
        let target = unsafe {
            let target = (*previous.as_ptr()).next?;
            (*previous.as_ptr()).next = (*target.as_ptr()).next;
            target
        };

        if self.tail == Some(target) {
            self.tail = Some(previous);
        }
        self.len -= 1;

        // SAFETY (PRECONDITIONS ARE MET): `target` was just unlinked.
        Some(unsafe { Node::release(target) })
    }

    /// Unlinks and returns the element living at `probe`.
    pub fn remove_by_reference(&mut self, probe: *const T) -> Option<T> {
        let index = self.find_index_by_reference(probe)?;
        self.remove_at(index)
    }

    /// Unlinks and drops the element at `index`.
    pub fn eraser_at(&mut self, index: usize) -> bool {
        self.remove_at(index).is_some()
    }

    /// Unlinks and drops the element living at `probe`.
    pub fn eraser_by_reference(&mut self, probe: *const T) -> bool {
        self.remove_by_reference(probe).is_some()
    }

    /// Detaches the whole chain, handing the elements back in order.
    pub fn clear(&mut self) -> IntoIter<T> {
        IntoIter {
            list: core::mem::take(self),
        }
    }

    /// Drops every element.
    pub fn clear_eraser(&mut self) {
        while self.remove_top().is_some() {}
    }

    /// Moves every element, first to last, into `destructor`.
    pub fn clear_eraser_destructor<F>(&mut self, mut destructor: F)
    where
        F: FnMut(T),
    {
        while let Some(value) = self.remove_top() {
            destructor(value);
        }
    }

    /// Consumes the list, handing the elements back.
    pub fn free(self) -> IntoIter<T> {
        IntoIter { list: self }
    }

    /// Consumes the list, dropping the elements.
    pub fn free_eraser(self) {
        drop(self);
    }

    /// Consumes the list, moving each element into `destructor`.
    pub fn free_eraser_destructor<F>(mut self, destructor: F)
    where
        F: FnMut(T),
    {
        self.clear_eraser_destructor(destructor);
    }

    /// Visits elements in order until `visitor` breaks.
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
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear_eraser();
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Borrowing iterator over a [`LinkedList`].
pub struct Iter<'a, T> {
    next: Link<T>,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.next?;

        // SAFETY (PRECONDITIONS ARE MET): the list is borrowed for 'a, so every
        // node reachable from it stays live and unmodified.
        let node = unsafe { &*node.as_ptr() };
        self.next = node.next;
        self.remaining -= 1;

        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator over the elements of a [`LinkedList`].
#[derive(Debug)]
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.remove_top()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        self.free()
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> ListOps<T> for LinkedList<T> {
    type Drain = IntoIter<T>;

    fn len(&self) -> usize {
        self.len
    }

    fn get_at(&self, index: usize) -> Option<&T> {
        LinkedList::get_at(self, index)
    }

    fn set_at(&mut self, index: usize, value: T) -> Result<T, HoardError> {
        LinkedList::set_at(self, index, value)
    }

    fn find_index_by_reference(&self, probe: *const T) -> Option<usize> {
        LinkedList::find_index_by_reference(self, probe)
    }

    fn add(&mut self, value: T) -> Result<(), HoardError> {
        LinkedList::add(self, value)
    }

    fn add_at(&mut self, value: T, index: usize) -> Result<(), HoardError> {
        LinkedList::add_at(self, value, index)
    }

    fn remove_at(&mut self, index: usize) -> Option<T> {
        LinkedList::remove_at(self, index)
    }

    fn clear(&mut self) -> Self::Drain {
        LinkedList::clear(self)
    }

    fn clear_eraser(&mut self) {
        LinkedList::clear_eraser(self);
    }

    fn clear_eraser_destructor<F>(&mut self, destructor: F)
    where
        F: FnMut(T),
    {
        LinkedList::clear_eraser_destructor(self, destructor);
    }

    fn for_each<F>(&self, visitor: F) -> ControlFlow<()>
    where
        F: FnMut(&T, usize) -> ControlFlow<()>,
    {
        LinkedList::for_each(self, visitor)
    }
}
