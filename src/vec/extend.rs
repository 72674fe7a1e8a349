// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowableArray;

impl<T> GrowableArray<T> {
    /// Appends every element of `source` in iteration order.
    ///
    /// Equivalent to calling [`push`](GrowableArray::push) once per element,
    /// so capacity evolves by the same growth policy. An empty source leaves
    /// length, capacity and contents untouched.
    #[inline]
    pub fn append_all<I: IntoIterator<Item = T>>(&mut self, source: I) {
        for item in source {
            self.push(item);
        }
    }

    /// Clones and appends every element of `src`.
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[T])
    where
        T: Clone,
    {
        self.append_all(src.iter().cloned());
    }
}

impl<T> Extend<T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append_all(iter);
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.append_all(iter.into_iter().copied());
    }
}
