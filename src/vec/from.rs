// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowableArray;

// Alloc imports
use alloc::vec::Vec;

impl<T> GrowableArray<T> {
    /// Constructs an array holding the elements of `source`, in order.
    ///
    /// The capacity is exactly the length reported by the iterator, so a
    /// correctly sized source produces `len == capacity`. An iterator that
    /// yields more than it reported still works (the extra elements are pushed
    /// and grow the buffer); one that yields fewer leaves spare capacity.
    #[inline]
    pub fn from_sequence<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = source.into_iter();
        let mut out = Self::with_capacity(iter.len());
        out.append_all(iter);
        out
    }
}

impl<T> From<Vec<T>> for GrowableArray<T> {
    fn from(src: Vec<T>) -> Self {
        Self::from_sequence(src)
    }
}

impl<T, const M: usize> From<[T; M]> for GrowableArray<T> {
    fn from(src: [T; M]) -> Self {
        Self::from_sequence(src)
    }
}

impl<T: Clone> From<&[T]> for GrowableArray<T> {
    fn from(src: &[T]) -> Self {
        Self::from_sequence(src.iter().cloned())
    }
}

impl<T> From<GrowableArray<T>> for Vec<T> {
    fn from(src: GrowableArray<T>) -> Self {
        src.into_iter().collect()
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    /// Pre-sizes from the iterator's lower size hint, then pushes every element.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut out = Self::with_capacity(iter.size_hint().0);
        out.append_all(iter);
        out
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::GrowableArray;

    #[test]
    fn test_from_sequence_is_tight() {
        let a = GrowableArray::from_sequence(vec![3, 1, 2]);
        assert_eq!(a.as_slice(), &[3, 1, 2]);
        assert_eq!(a.len(), 3);
        assert_eq!(a.capacity(), 3);
    }

    #[test]
    fn test_from_empty_sequence_then_push() {
        let mut a: GrowableArray<char> = GrowableArray::from_sequence(Vec::new());
        assert_eq!(a.len(), 0);
        assert_eq!(a.capacity(), 0);
        a.push('x');
        assert_eq!(a.len(), 1);
        assert_eq!(a.get(0), Ok(&'x'));
    }

    #[test]
    fn test_from_sequence_with_lying_length() {
        struct Liar {
            yielded: usize,
            total: usize,
            claimed: usize,
        }
        impl Iterator for Liar {
            type Item = usize;
            fn next(&mut self) -> Option<usize> {
                (self.yielded < self.total).then(|| {
                    self.yielded += 1;
                    self.yielded
                })
            }
            fn size_hint(&self) -> (usize, Option<usize>) {
                let left = self.claimed.saturating_sub(self.yielded);
                (left, Some(left))
            }
        }
        impl ExactSizeIterator for Liar {}

        let longer = GrowableArray::from_sequence(Liar { yielded: 0, total: 5, claimed: 2 });
        assert_eq!(longer.as_slice(), &[1, 2, 3, 4, 5]);
        assert!(longer.capacity() >= 5);

        let shorter = GrowableArray::from_sequence(Liar { yielded: 0, total: 1, claimed: 4 });
        assert_eq!(shorter.as_slice(), &[1]);
        assert_eq!(shorter.capacity(), 4);
    }

    #[test]
    fn test_from_array_and_slice() {
        let a: GrowableArray<i32> = [1, 2, 3].into();
        assert_eq!(a.spare_capacity(), 0);

        let src = [String::from("a"), String::from("b")];
        let b = GrowableArray::from(&src[..]);
        assert_eq!(b.as_slice(), &src);
    }

    #[test]
    fn test_collect_and_back_to_vec() {
        let a: GrowableArray<u32> = (1..=4).map(|x| x * x).collect();
        assert_eq!(a.as_slice(), &[1, 4, 9, 16]);
        assert_eq!(a.capacity(), 4);

        let evens: GrowableArray<u32> = (0..10).filter(|x| x % 2 == 0).collect();
        assert_eq!(evens.as_slice(), &[0, 2, 4, 6, 8]);

        let v: Vec<u32> = a.into();
        assert_eq!(v, vec![1, 4, 9, 16]);
    }
}
