// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`GrowableArray`](crate::GrowableArray).
//!
//! - `IntoIter<T>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`. Elements it never yields are
//!   dropped with the iterator.
//! - `&GrowableArray` and `&mut GrowableArray` iterate as slices.

// Crate imports
use crate::vec::GrowableArray;

// Alloc imports
use alloc::boxed::Box;

// Core imports
use core::{fmt, iter::FusedIterator, mem::MaybeUninit, ptr};

/// Owned iterator returned by `GrowableArray::into_iter()`.
///
/// Takes over the array's buffer and yields elements by value from front to
/// back; supports double-ended iteration via [`DoubleEndedIterator`].
pub struct IntoIter<T> {
    buf: Box<[MaybeUninit<T>]>,
    front: usize,
    back: usize, // exclusive
}

impl<T> IntoIter<T> {
    /// Returns the elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `buf[front..back]` holds the initialized elements that have
        // not been moved out yet.
        unsafe {
            core::slice::from_raw_parts(
                self.buf.as_ptr().add(self.front).cast::<T>(),
                self.back - self.front,
            )
        }
    }

    /// Drops the `n` remaining elements starting at `from`.
    ///
    /// The caller must already have moved `front`/`back` past them.
    fn drop_range(&mut self, from: usize, n: usize) {
        let skipped: *mut [T] = ptr::slice_from_raw_parts_mut(
            self.buf[from..from + n].as_mut_ptr().cast::<T>(),
            n,
        );
        // SAFETY: `buf[from..from + n]` was inside the unyielded window and
        // the window has been shrunk past it, so these elements are dropped
        // exactly once and never read again.
        unsafe { ptr::drop_in_place(skipped) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: `i` was the first slot of the unyielded window, which
            // holds initialized elements; advancing `front` hands ownership to
            // the caller.
            Some(unsafe { self.buf[i].assume_init_read() })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        let skip = n.min(self.back - self.front);
        let from = self.front;
        self.front += skip;
        self.drop_range(from, skip);
        self.next()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: the old last slot of the unyielded window is initialized;
            // shrinking `back` hands ownership to the caller.
            Some(unsafe { self.buf[self.back].assume_init_read() })
        } else {
            None
        }
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        let skip = n.min(self.back - self.front);
        self.back -= skip;
        let from = self.back;
        self.drop_range(from, skip);
        self.next_back()
    }
}
impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let (from, n) = (self.front, self.back - self.front);
        self.front = self.back;
        self.drop_range(from, n);
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T> IntoIterator for &'a mut GrowableArray<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T> IntoIterator for GrowableArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(mut self) -> Self::IntoIter {
        let back = self.len;
        // Leave `self` empty so its own `Drop` has nothing to release.
        self.len = 0;
        IntoIter {
            buf: core::mem::take(&mut self.buf),
            front: 0,
            back,
        }
    }
}
