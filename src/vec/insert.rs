// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::GrowableArray};

impl<T> GrowableArray<T> {
    /// Inserts `item` at `index`, shifting elements to the right.
    ///
    /// - Returns [`Error::OutOfBounds`] if `index > len`; the array is unchanged.
    /// - Grows by one policy step when full, like [`push`](GrowableArray::push).
    ///
    /// `O(len - index)` element moves.
    #[inline]
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), Error> {
        let len = self.len;
        if index > len {
            return Err(Error::OutOfBounds { index, len });
        }
        if len == self.capacity() {
            self.grow();
        }

        // Shift right: [index..len) -> [index+1..len+1), bringing the spare
        // slot at `len` down to `index`.
        self.buf[index..=len].rotate_right(1);
        self.buf[index].write(item);

        self.len = len + 1;
        Ok(())
    }
}
