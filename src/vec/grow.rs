// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowableArray;

// Alloc imports
use alloc::boxed::Box;

// Core imports
use core::{mem::MaybeUninit, ptr};

/// Returns the capacity that follows `capacity` under the growth policy:
/// `ceil(capacity * 1.5)`, and never less than `capacity + 1`.
///
/// # Panics
///
/// Panics with `"capacity overflow"` if the result does not fit in `usize`.
#[inline]
pub(crate) const fn grown_capacity(capacity: usize) -> usize {
    let step = match capacity.div_ceil(2) {
        0 => 1,
        half => half,
    };
    match capacity.checked_add(step) {
        Some(next) => next,
        None => capacity_overflow(),
    }
}

#[cold]
#[track_caller]
const fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

impl<T> GrowableArray<T> {
    /// Allocates a buffer of `capacity` uninitialized slots.
    #[inline]
    pub(crate) fn alloc_buf(capacity: usize) -> Box<[MaybeUninit<T>]> {
        Box::new_uninit_slice(capacity)
    }

    /// Moves the live prefix into a fresh buffer of exactly `capacity` slots.
    fn realloc(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.len);
        let mut fresh = Self::alloc_buf(capacity);
        // SAFETY: both buffers have at least `len` slots and are distinct
        // allocations. The first `len` source slots are initialized. The old
        // buffer is a box of `MaybeUninit`, so dropping it below frees the
        // memory without dropping the moved elements; each element keeps
        // exactly one owner.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), fresh.as_mut_ptr(), self.len);
        }
        self.buf = fresh;
    }

    /// Grows the buffer by one policy step.
    #[inline]
    pub(crate) fn grow(&mut self) {
        self.realloc(grown_capacity(self.capacity()));
    }

    /// Ensures room for at least `additional` more elements without reallocating.
    ///
    /// If the buffer must grow, the new capacity is the larger of one policy
    /// step (`ceil(capacity * 1.5)`) and `len + additional`, so repeated
    /// small reservations keep amortized `O(1)` behavior.
    ///
    /// # Panics
    ///
    /// Panics with `"capacity overflow"` if `len + additional` overflows `usize`.
    pub fn reserve(&mut self, additional: usize) {
        let needed = match self.len.checked_add(additional) {
            Some(needed) => needed,
            None => capacity_overflow(),
        };
        if needed <= self.capacity() {
            return;
        }
        self.realloc(grown_capacity(self.capacity()).max(needed));
    }

    /// Shrinks the capacity to exactly `len`. No-op when there is no spare room.
    pub fn shrink_to_fit(&mut self) {
        if self.capacity() > self.len {
            self.realloc(self.len);
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::grown_capacity;
    use crate::GrowableArray;
    use std::rc::Rc;

    #[test]
    fn test_growth_from_zero_always_makes_progress() {
        let mut cap = 0;
        let mut seen = Vec::new();
        for _ in 0..7 {
            cap = grown_capacity(cap);
            seen.push(cap);
        }
        assert_eq!(seen, [1, 2, 3, 5, 8, 12, 18]);
    }

    #[test]
    fn test_growth_is_ceil_one_and_a_half() {
        assert_eq!(grown_capacity(10), 15);
        assert_eq!(grown_capacity(15), 23);
        assert_eq!(grown_capacity(23), 35);
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn test_growth_overflow_panics() {
        let _ = grown_capacity(usize::MAX - 1);
    }

    #[test]
    fn test_push_into_full_buffer_grows_by_policy() {
        let mut a = GrowableArray::new();
        for i in 0..10 {
            a.push(i);
        }
        assert_eq!(a.capacity(), 10);
        a.push(10);
        assert_eq!(a.capacity(), 15);
        assert_eq!(a.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_reserve() {
        let mut a: GrowableArray<u8> = GrowableArray::with_capacity(4);
        a.reserve(4);
        assert_eq!(a.capacity(), 4);

        // One policy step is enough.
        a.reserve(5);
        assert_eq!(a.capacity(), 6);

        // A large request jumps straight to `len + additional`.
        a.push(1);
        a.reserve(100);
        assert_eq!(a.capacity(), 101);
        assert_eq!(a.as_slice(), &[1]);
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn test_reserve_overflow_panics() {
        let mut a = GrowableArray::new();
        a.push(1u8);
        a.reserve(usize::MAX);
    }

    #[test]
    fn test_shrink_to_fit() {
        let mut a = GrowableArray::new();
        a.append_all([1, 2, 3]);
        assert_eq!(a.capacity(), 10);
        a.shrink_to_fit();
        assert_eq!(a.capacity(), 3);
        assert_eq!(a.as_slice(), &[1, 2, 3]);

        // Growth resumes from the shrunk capacity.
        a.push(4);
        assert_eq!(a.capacity(), 5);

        let mut empty: GrowableArray<i32> = GrowableArray::new();
        empty.shrink_to_fit();
        assert_eq!(empty.capacity(), 0);
        empty.push(1);
        assert_eq!(empty.capacity(), 1);
    }

    #[test]
    fn test_growth_moves_without_dropping() {
        let token = Rc::new(());
        let mut a: GrowableArray<Rc<()>> = GrowableArray::with_capacity(1);
        for _ in 0..50 {
            a.push(Rc::clone(&token));
        }
        assert_eq!(Rc::strong_count(&token), 51);
        a.shrink_to_fit();
        assert_eq!(Rc::strong_count(&token), 51);
        drop(a);
        assert_eq!(Rc::strong_count(&token), 1);
    }
}
