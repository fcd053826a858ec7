// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};

use hoard_array::ArrayList;
use hoard_core::checked::{add_size, allocation_size};
use hoard_core::{CapacityStrategy, GrowthConfig, HoardError, grow_capacity};

/// Test behaviour for injecting failures in [`DynString`] reallocations.
///
/// Only available with the `test_utils` feature. Sticky until changed.
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum DynStringBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every reallocation fails with `HoardError::Allocation`.
    FailAtAllocation,
}

/// Growable byte string.
///
/// Capacity is counted in bytes. Once a buffer exists the capacity is
/// strictly greater than the length: the last byte is always spare.
/// Growth follows the configured [`CapacityStrategy`], floored by
/// `len + 1 + min_extra`.
///
/// Content is arbitrary bytes; [`to_str`](Self::to_str) validates UTF-8 on
/// demand.
pub struct DynString {
    bytes: Vec<u8>,
    capacity: usize,
    min_extra: usize,
    strategy: CapacityStrategy,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: DynStringBehaviour,
}

impl DynString {
    /// Creates an empty string without allocating.
    pub const fn new() -> Self {
        Self {
            bytes: Vec::new(),
            capacity: 0,
            min_extra: GrowthConfig::DEFAULT_MIN_EXTRA,
            strategy: GrowthConfig::DEFAULT_STRATEGY,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: DynStringBehaviour::None,
        }
    }

    /// Creates a string holding a copy of `bytes` with the default growth
    /// configuration.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HoardError> {
        Self::with_config(bytes, GrowthConfig::default())
    }

    /// Creates a string holding a copy of `bytes`.
    ///
    /// The initial capacity is what the strategy reaches starting from one
    /// byte, floored by `len + 1 + min_extra` and by `config.min_capacity`.
    pub fn with_config(bytes: &[u8], config: GrowthConfig) -> Result<Self, HoardError> {
        let mut s = Self {
            min_extra: config.min_extra,
            strategy: config.strategy,
            ..Self::new()
        };

        let floor = add_size(config.min_extra, 1)?;
        let capacity = grow_capacity(&config.strategy, 1, bytes.len(), floor)?
            .max(config.min_capacity);

        s.reallocate(capacity)?;
        s.bytes.extend_from_slice(bytes);

        Ok(s)
    }

    /// Empty string sharing this string's growth configuration and
    /// failure-injection behaviour. Does not allocate.
    pub(crate) fn sibling(&self) -> Self {
        Self {
            min_extra: self.min_extra,
            strategy: self.strategy,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: self.behaviour,
            ..Self::new()
        }
    }

    /// Copy of this string, with the same growth configuration.
    pub fn try_clone(&self) -> Result<Self, HoardError> {
        let mut copy = self.sibling();
        copy.set(&self.bytes)?;
        Ok(copy)
    }

    /// Changes the failure-injection behaviour.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: DynStringBehaviour) {
        self.behaviour = behaviour;
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the string is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Allocated capacity in bytes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Growth floor.
    pub fn min_extra(&self) -> usize {
        self.min_extra
    }

    /// Active growth policy.
    pub fn strategy(&self) -> CapacityStrategy {
        self.strategy
    }

    /// Content as bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Content as UTF-8.
    pub fn to_str(&self) -> Result<&str, core::str::Utf8Error> {
        core::str::from_utf8(&self.bytes)
    }

    /// Moves the content into a fresh buffer of exactly `new_capacity` bytes.
    #[cold]
    #[inline(never)]
    fn reallocate(&mut self, new_capacity: usize) -> Result<(), HoardError> {
        debug_assert!(new_capacity > self.len() || new_capacity == 0);

        let bytes = allocation_size(new_capacity, 1)?;

        #[cfg(any(test, feature = "test_utils"))]
        if self.behaviour == DynStringBehaviour::FailAtAllocation {
            return Err(HoardError::Allocation { bytes });
        }

        let mut fresh = Vec::new();
        fresh
            .try_reserve_exact(new_capacity)
            .map_err(|_| HoardError::Allocation { bytes })?;
        fresh.extend_from_slice(&self.bytes);

        let old_capacity = self.capacity;
        self.bytes = fresh;
        self.capacity = new_capacity;

        tracing::trace!(old_capacity, new_capacity, "string storage reallocated");

        Ok(())
    }

    /// Grows, if needed, so `len` bytes fit with a spare byte.
    fn reserve_for(&mut self, len: usize) -> Result<(), HoardError> {
        if self.capacity > len {
            return Ok(());
        }

        let floor = add_size(self.min_extra, 1)?;
        let new_capacity = grow_capacity(&self.strategy, self.capacity, len, floor)?;

        self.reallocate(new_capacity)
    }

    // =========================================================================
    // Assignment
    // =========================================================================

    /// Replaces the content with `bytes`.
    pub fn set(&mut self, bytes: &[u8]) -> Result<(), HoardError> {
        self.reserve_for(bytes.len())?;
        self.bytes.clear();
        self.bytes.extend_from_slice(bytes);

        Ok(())
    }

    /// Appends `bytes`.
    pub fn cat(&mut self, bytes: &[u8]) -> Result<(), HoardError> {
        let len = add_size(self.len(), bytes.len())?;
        self.reserve_for(len)?;
        self.bytes.extend_from_slice(bytes);

        Ok(())
    }

    /// Drops the last byte, keeping the buffer.
    #[cfg(any(test, feature = "std"))]
    pub(crate) fn truncate_by_one(&mut self) {
        self.bytes.pop();
    }

    /// Empties the string and releases its buffer.
    pub fn clear(&mut self) {
        self.bytes = Vec::new();
        self.capacity = 0;
    }

    // =========================================================================
    // Capacity control
    // =========================================================================

    /// Grows the buffer to exactly `capacity` bytes if it is smaller.
    ///
    /// Returns whether a reallocation happened.
    pub fn set_min_capacity(&mut self, capacity: usize) -> Result<bool, HoardError> {
        if self.capacity >= capacity {
            return Ok(false);
        }

        self.reallocate(capacity)?;
        Ok(true)
    }

    /// Shrinks the buffer to exactly `capacity` bytes if it is larger and
    /// the content still fits with a spare byte.
    pub fn set_max_capacity(&mut self, capacity: usize) -> Result<bool, HoardError> {
        if self.capacity <= capacity || self.len() >= capacity {
            return Ok(false);
        }

        self.reallocate(capacity)?;
        Ok(true)
    }

    /// Reallocates to exactly `capacity` bytes unless the content would not
    /// fit with a spare byte.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<bool, HoardError> {
        if self.len() >= capacity || self.capacity == capacity {
            return Ok(false);
        }

        self.reallocate(capacity)?;
        Ok(true)
    }

    // =========================================================================
    // Searching and slicing
    // =========================================================================

    /// Bytes `[start, end)` as a new string with this string's configuration.
    ///
    /// # Errors
    ///
    /// [`HoardError::IndexOverflow`] if `end > len()`,
    /// [`HoardError::InvalidTarget`] if `start > end`.
    pub fn sub(&self, start: usize, end: usize) -> Result<Self, HoardError> {
        let len = self.len();

        if end > len {
            return Err(HoardError::IndexOverflow { index: end, len });
        }

        if start > end {
            return Err(HoardError::InvalidTarget);
        }

        let mut sub = self.sibling();
        sub.set(&self.bytes[start..end])?;

        Ok(sub)
    }

    /// Position of the first occurrence of `needle` at or after `from`.
    fn find_from(&self, needle: &[u8], from: usize) -> Option<usize> {
        if needle.is_empty() {
            return Some(from);
        }

        self.bytes
            .get(from..)?
            .windows(needle.len())
            .position(|window| window == needle)
            .map(|offset| from + offset)
    }

    /// Position of the first occurrence of `needle`. An empty needle matches
    /// at 0.
    pub fn find_sub(&self, needle: &[u8]) -> Option<usize> {
        self.find_from(needle, 0)
    }

    /// Number of parts [`split`](Self::split) produces for `sep`.
    ///
    /// An empty separator yields one part per byte; an empty string yields
    /// no parts.
    pub fn size_split(&self, sep: &[u8]) -> usize {
        if sep.is_empty() || self.is_empty() {
            return self.len();
        }

        let mut parts = 1;
        let mut from = 0;
        while let Some(at) = self.find_from(sep, from) {
            parts += 1;
            from = at + sep.len();
        }

        parts
    }

    /// Splits on every non-overlapping occurrence of `sep`, scanning left
    /// to right.
    ///
    /// ```rust
    /// use hoard_string::DynString;
    ///
    /// let s = DynString::try_from("a,,b").unwrap();
    /// let parts = s.split(b",").unwrap();
    ///
    /// let parts: Vec<&[u8]> = parts.iter().map(|p| p.as_bytes()).collect();
    /// assert_eq!(parts, [&b"a"[..], b"", b"b"]);
    /// ```
    pub fn split(&self, sep: &[u8]) -> Result<ArrayList<Self>, HoardError> {
        // One slot past the part count keeps the last add from growing.
        let mut parts = ArrayList::with_capacity(add_size(self.size_split(sep), 1)?)?;

        if self.is_empty() {
            return Ok(parts);
        }

        if sep.is_empty() {
            for byte in self.bytes.chunks(1) {
                let mut part = self.sibling();
                part.set(byte)?;
                parts.add(part)?;
            }

            return Ok(parts);
        }

        let mut from = 0;
        while let Some(at) = self.find_from(sep, from) {
            parts.add(self.sub(from, at)?)?;
            from = at + sep.len();
        }
        parts.add(self.sub(from, self.len())?)?;

        Ok(parts)
    }

    fn replace_n(&self, from: &[u8], to: &[u8], limit: usize) -> Result<Self, HoardError> {
        if self.is_empty() || from.is_empty() {
            return self.try_clone();
        }

        let mut out = self.sibling();
        let mut cursor = 0;
        let mut replaced = 0;

        while replaced < limit {
            let Some(at) = self.find_from(from, cursor) else {
                break;
            };

            out.cat(&self.bytes[cursor..at])?;
            out.cat(to)?;
            cursor = at + from.len();
            replaced += 1;
        }
        out.cat(&self.bytes[cursor..])?;

        Ok(out)
    }

    /// Copy with the first occurrence of `from` replaced by `to`.
    ///
    /// An empty pattern, or an empty string, yields an unchanged copy.
    pub fn replace(&self, from: &[u8], to: &[u8]) -> Result<Self, HoardError> {
        self.replace_n(from, to, 1)
    }

    /// Copy with every non-overlapping occurrence of `from` replaced by `to`.
    pub fn replace_all(&self, from: &[u8], to: &[u8]) -> Result<Self, HoardError> {
        self.replace_n(from, to, usize::MAX)
    }
}

impl Default for DynString {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<&str> for DynString {
    type Error = HoardError;

    fn try_from(s: &str) -> Result<Self, HoardError> {
        Self::from_bytes(s.as_bytes())
    }
}

impl TryFrom<&[u8]> for DynString {
    type Error = HoardError;

    fn try_from(bytes: &[u8]) -> Result<Self, HoardError> {
        Self::from_bytes(bytes)
    }
}

impl PartialEq for DynString {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for DynString {}

impl PartialEq<str> for DynString {
    fn eq(&self, other: &str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<&str> for DynString {
    fn eq(&self, other: &&str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<[u8]> for DynString {
    fn eq(&self, other: &[u8]) -> bool {
        self.bytes == other
    }
}

impl fmt::Display for DynString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.bytes.utf8_chunks() {
            f.write_str(chunk.valid())?;
            if !chunk.invalid().is_empty() {
                f.write_char(char::REPLACEMENT_CHARACTER)?;
            }
        }

        Ok(())
    }
}

impl fmt::Debug for DynString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynString")
            .field("data", &String::from_utf8_lossy(&self.bytes))
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}
