// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::GrowableArray};

impl<T> GrowableArray<T> {
    /// Removes and returns the element at `index`, shifting subsequent elements left.
    ///
    /// Returns [`Error::OutOfBounds`] if `index >= len`, leaving the array
    /// unchanged. Relative order of the surviving elements is preserved.
    /// `O(len - index)`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Result<T, Error> {
        let len = self.len;
        if index >= len {
            return Err(Error::OutOfBounds { index, len });
        }

        // Shift left: [index+1..len) -> [index..len-1), moving the removed
        // element into the old last slot.
        self.buf[index..len].rotate_left(1);
        self.len = len - 1;

        // SAFETY: The rotation only permuted slots of the initialized prefix,
        // so `buf[len - 1]` holds the removed `T`. It is now outside the live
        // prefix and is read exactly once.
        let out = unsafe { self.buf[len - 1].assume_init_read() };
        Ok(out)
    }

    /// Removes and returns the element at `index` by moving the last element into its place.
    ///
    /// Does not preserve order. Returns [`Error::OutOfBounds`] when
    /// `index >= len`. `O(1)`.
    #[inline]
    pub fn swap_remove(&mut self, index: usize) -> Result<T, Error> {
        let len = self.len;
        if index >= len {
            return Err(Error::OutOfBounds { index, len });
        }
        let last = len - 1;

        // Move the last slot into the hole (self-swap when `index == last`).
        self.buf.swap(index, last);
        self.len = last;

        // SAFETY: Both swapped slots were inside the initialized prefix, so
        // `buf[last]` holds the removed `T`. It is now outside the live prefix
        // and is read exactly once.
        let out = unsafe { self.buf[last].assume_init_read() };
        Ok(out)
    }
}
