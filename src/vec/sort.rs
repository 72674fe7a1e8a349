// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowableArray;

// Core imports
use core::cmp::Ordering;

impl<T> GrowableArray<T> {
    /// Sorts the live elements in non-descending order by `compare`.
    ///
    /// The sort is stable: elements that compare equal keep their original
    /// relative order. Sorting an already sorted array is `O(len)`.
    #[inline]
    pub fn sort_in_place_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.as_mut_slice().sort_by(compare);
    }

    /// Stable sort by the natural order of `T`.
    #[inline]
    pub fn sort_in_place(&mut self)
    where
        T: Ord,
    {
        self.as_mut_slice().sort();
    }

    /// Stable sort by a key extracted from each element.
    #[inline]
    pub fn sort_in_place_by_key<K, F>(&mut self, key: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.as_mut_slice().sort_by_key(key);
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::GrowableArray;

    #[test]
    fn test_sort_in_place() {
        let mut a = GrowableArray::from([5, 3, 9, 1, 3]);
        a.sort_in_place();
        assert_eq!(a.as_slice(), &[1, 3, 3, 5, 9]);
    }

    #[test]
    fn test_sort_by_comparator_descending() {
        let mut a = GrowableArray::from([300, 1000, 400, 710, 700, 950]);
        a.sort_in_place_by(|x, y| y.cmp(x));
        assert_eq!(a.as_slice(), &[1000, 950, 710, 700, 400, 300]);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut a = GrowableArray::from([("b", 1), ("a", 2), ("b", 0), ("a", 1)]);
        a.sort_in_place_by(|x, y| x.0.cmp(y.0));
        assert_eq!(a.as_slice(), &[("a", 2), ("a", 1), ("b", 1), ("b", 0)]);
    }

    #[test]
    fn test_sort_ignores_spare_capacity_and_small_inputs() {
        let mut empty: GrowableArray<i32> = GrowableArray::with_capacity(4);
        empty.sort_in_place();
        assert!(empty.is_empty());

        let mut one = GrowableArray::new();
        one.push(7);
        one.sort_in_place();
        assert_eq!(one.as_slice(), &[7]);
        assert_eq!(one.capacity(), 10);
    }

    #[test]
    fn test_sort_by_key() {
        let mut a = GrowableArray::from(["ccc", "a", "bb"]);
        a.sort_in_place_by_key(|s| s.len());
        assert_eq!(a.as_slice(), &["a", "bb", "ccc"]);
    }
}
