// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowableArray;

impl<T> GrowableArray<T> {
    /// Returns the live prefix as a shared slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: By invariant, all elements in `buf[..self.len]` are initialized,
        // and `self.len <= capacity`, so this creates a valid shared slice of
        // initialized `T`.
        unsafe { core::slice::from_raw_parts(self.buf.as_ptr().cast::<T>(), self.len) }
    }

    /// Returns the live prefix as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: By invariant, all elements in `buf[..self.len]` are initialized,
        // and `self.len <= capacity`. We have exclusive access via `&mut self`, so
        // it is sound to create a mutable slice over `buf[..self.len]`.
        unsafe { core::slice::from_raw_parts_mut(self.buf.as_mut_ptr().cast::<T>(), self.len) }
    }

    /// Returns a raw pointer to the start of the backing buffer.
    ///
    /// Only the first `len` elements are initialized. The pointer is
    /// invalidated by any operation that may reallocate (`push`, `insert`,
    /// `append_all`, `reserve`, `shrink_to_fit`).
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr().cast::<T>()
    }

    /// Returns a mutable raw pointer to the start of the backing buffer.
    ///
    /// Same validity rules as [`as_ptr`](GrowableArray::as_ptr).
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr().cast::<T>()
    }
}
