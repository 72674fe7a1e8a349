// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`GrowableArray`](crate::GrowableArray).
//!
//! This module provides `Index` and `IndexMut` impls that mirror slice behavior:
//! - panics on out-of-bounds;
//! - supports all standard range forms, including inclusive ranges;
//! - views are restricted to the live prefix `[0..len)`, never the spare capacity.

// Crate imports
use crate::vec::GrowableArray;

// Core imports
use core::ops::{
    Index, IndexMut, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};

impl<T> Index<usize> for GrowableArray<T> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.as_slice()[i]
    }
}
impl<T> IndexMut<usize> for GrowableArray<T> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[i]
    }
}

// Every range form delegates to the live slice.
macro_rules! impl_range_index {
    ($($range:ty),+ $(,)?) => {$(
        impl<T> Index<$range> for GrowableArray<T> {
            type Output = [T];
            fn index(&self, r: $range) -> &Self::Output {
                &self.as_slice()[r]
            }
        }
        impl<T> IndexMut<$range> for GrowableArray<T> {
            fn index_mut(&mut self, r: $range) -> &mut Self::Output {
                &mut self.as_mut_slice()[r]
            }
        }
    )+};
}

impl_range_index!(
    Range<usize>,
    RangeFrom<usize>,
    RangeTo<usize>,
    RangeToInclusive<usize>,
    RangeInclusive<usize>,
    RangeFull,
);
