// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Reference-counted element buffers shared between a storage and its views.
//!
//! # Ownership Model
//!
//! ```text
//! Storage::from_nested(..)        owning, value cells
//!       │
//!       ▼
//!   SharedBuffer ◄──── Rc handle ──── view / reshape / transpose
//!       │
//!       │  last handle dropped
//!       ▼
//!   elements freed
//! ```
//!
//! Every storage that reads or writes a buffer holds its own `Rc` handle, so
//! the buffer lives exactly as long as the last view of it. Elements sit in
//! `Cell`s: writes through one handle are immediately visible through every
//! other handle without any borrow bookkeeping.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// A shared, fixed-length buffer of copyable elements.
pub struct SharedBuffer<T> {
    slots: Rc<[Cell<T>]>,
}

impl<T: Copy> SharedBuffer<T> {
    /// Moves `values` into a fresh buffer with a single handle.
    pub fn from_vec(values: Vec<T>) -> Self {
        Self {
            slots: values.into_iter().map(Cell::new).collect(),
        }
    }

    /// Creates a buffer of `len` copies of `value`.
    pub fn filled(len: usize, value: T) -> Self {
        Self {
            slots: (0..len).map(|_| Cell::new(value)).collect(),
        }
    }

    /// Reads the element in `slot`.
    ///
    /// # Panics
    /// Panics if `slot >= self.len()`. Storages only hand out slots they
    /// computed from their own cell map.
    pub fn get(&self, slot: usize) -> T {
        self.slots[slot].get()
    }

    /// Overwrites the element in `slot`.
    ///
    /// # Panics
    /// Panics if `slot >= self.len()`.
    pub fn set(&self, slot: usize, value: T) {
        self.slots[slot].set(value);
    }
}

impl<T> SharedBuffer<T> {
    /// Returns the number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the buffer has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns `true` if both handles point at the same buffer.
    pub fn ptr_eq(&self, other: &SharedBuffer<T>) -> bool {
        Rc::ptr_eq(&self.slots, &other.slots)
    }

    /// Returns the number of live handles to this buffer.
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.slots)
    }
}

impl<T> Clone for SharedBuffer<T> {
    fn clone(&self) -> Self {
        Self {
            slots: Rc::clone(&self.slots),
        }
    }
}

impl<T> fmt::Debug for SharedBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedBuffer")
            .field("len", &self.len())
            .field("handles", &self.handle_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let buf = SharedBuffer::from_vec(vec![1, 2, 3]);
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.get(1), 2);
        buf.set(1, 20);
        assert_eq!(buf.get(1), 20);
    }

    #[test]
    fn test_writes_visible_through_clones() {
        let a = SharedBuffer::filled(4, 0.0f64);
        let b = a.clone();
        b.set(3, 2.5);
        assert_eq!(a.get(3), 2.5);
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn test_handle_count() {
        let a = SharedBuffer::from_vec(vec![0u8; 8]);
        assert_eq!(a.handle_count(), 1);
        let b = a.clone();
        assert_eq!(a.handle_count(), 2);
        drop(b);
        assert_eq!(a.handle_count(), 1);
    }

    #[test]
    fn test_empty() {
        let buf = SharedBuffer::<i32>::from_vec(Vec::new());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_debug_format() {
        let buf = SharedBuffer::from_vec(vec![1, 2]);
        let debug = format!("{buf:?}");
        assert!(debug.contains("SharedBuffer"));
        assert!(debug.contains("handles"));
    }
}
