// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::{DEFAULT_CAPACITY, GrowableArray};

impl<T> GrowableArray<T> {
    /// Constructs an empty array with [`DEFAULT_CAPACITY`] slots.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Constructs an empty array with exactly `capacity` slots.
    ///
    /// Note: the initial **length** is `0`. `capacity` only pre-sizes the
    /// buffer; it never creates placeholder elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Self::alloc_buf(capacity),
            len: 0,
        }
    }
}
