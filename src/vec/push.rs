// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowableArray;

impl<T> GrowableArray<T> {
    /// Appends `item` at index `len`.
    ///
    /// If the buffer is full it first grows by one policy step
    /// (`ceil(capacity * 1.5)`, at least one slot). Amortized `O(1)`.
    ///
    /// # Panics
    ///
    /// Panics with `"capacity overflow"` if the grown capacity overflows `usize`.
    #[inline]
    pub fn push(&mut self, item: T) {
        if self.len == self.capacity() {
            self.grow();
        }

        self.buf[self.len].write(item);

        self.len += 1;
    }
}
