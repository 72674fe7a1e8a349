// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate import
use crate::vec::GrowableArray;

// Core imports
use core::ptr;

impl<T> GrowableArray<T> {
    /// Shrinks to `new_len` if `new_len < len`, dropping the tail; otherwise a no-op.
    ///
    /// Capacity is unchanged.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        let len = self.len;
        if new_len >= len {
            return;
        }
        let tail: *mut [T] = &mut self.as_mut_slice()[new_len..];
        // Shorten first: if a destructor panics the rest of the tail leaks
        // instead of being dropped twice.
        self.len = new_len;
        // SAFETY: `tail` covers `buf[new_len..len]`, which was initialized and
        // is no longer part of the live prefix, so each element is dropped
        // exactly once.
        unsafe { ptr::drop_in_place(tail) }
    }

    /// Drops every element. Capacity is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Retains only the elements specified by the predicate `f`, preserving order.
    ///
    /// The predicate is applied to each element in iteration order.
    #[inline]
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        let mut write = 0;
        for read in 0..self.len {
            if f(&self.as_slice()[read]) {
                if write != read {
                    self.as_mut_slice().swap(write, read);
                }
                write += 1;
            }
        }
        // Rejected elements have been swapped past `write`.
        self.truncate(write);
    }
}
