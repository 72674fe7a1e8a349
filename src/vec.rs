// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `GrowableArray` type and its inherent API.
//!
//! `GrowableArray<T>` is a heap-backed vector with an explicit growth policy.
//! It owns a boxed buffer of `MaybeUninit<T>` slots and tracks a logical length.
//! Methods generally mirror slice/vector semantics, with `Result`-returning
//! variants for index-checked operations.

// Invariants:
// - `0 <= len <= buf.len()` always holds; `buf.len()` is the capacity.
// - Elements in `buf[..len]` are initialized `T` values owned by the array.
// - Elements in `buf[len..]` are logically uninitialized and must never be
//   read as `T` or dropped.
// - All public methods maintain these invariants, including on panic.

mod default;
mod extend;
mod from;
mod grow;
mod insert;
mod new;
mod pop;
mod push;
mod remove;
mod retain;
mod slice;
mod sort;

// Crate imports
use crate::error::Error;

// Alloc imports
use alloc::boxed::Box;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    mem::MaybeUninit,
    ops::{Deref, DerefMut},
    ptr,
};

/// Capacity of an array created by [`GrowableArray::new`] or [`Default::default`].
pub const DEFAULT_CAPACITY: usize = 10;

/// A contiguous, index-addressed, growable array.
///
/// `GrowableArray<T>` stores its elements in a heap buffer of `capacity` slots
/// and tracks a logical length `len ∈ 0..=capacity`. Capacity and length are
/// decoupled: pushing into spare capacity is a plain write, and only a push
/// into a full buffer reallocates.
///
/// # Layout and invariants
///
/// Internally, `GrowableArray<T>` maintains:
///
/// - a boxed buffer of `capacity` slots of `MaybeUninit<T>`; and
/// - a logical length `len` with `0 <= len <= capacity`.
///
/// Only the prefix `buf[..len]` is initialized and visible through safe APIs.
/// Methods such as [`as_slice`](GrowableArray::as_slice),
/// [`as_mut_slice`](GrowableArray::as_mut_slice), indexing, and iteration are
/// all restricted to this prefix. The buffer is never exposed beyond a borrow
/// of the array.
///
/// # Growth policy
///
/// When [`push`](GrowableArray::push) or [`insert`](GrowableArray::insert)
/// finds the buffer full, the capacity becomes `ceil(capacity * 1.5)`, and
/// at least `capacity + 1`. Growth allocates a new buffer and moves the live
/// elements into it in order; existing elements are never reordered, cloned
/// or dropped by growth.
///
/// # Complexity characteristics
///
/// - [`push`](GrowableArray::push): amortized `O(1)`; a growth event costs
///   `O(len)`, and since each growth multiplies the capacity by a constant,
///   `n` pushes cost `O(n)` in total.
/// - [`get`](GrowableArray::get), indexing, [`pop`](GrowableArray::pop),
///   [`swap_remove`](GrowableArray::swap_remove): `O(1)`.
/// - [`remove`](GrowableArray::remove) / [`insert`](GrowableArray::insert):
///   `O(len - index)` element moves.
/// - [`append_all`](GrowableArray::append_all): `O(k)` amortized for `k`
///   new elements.
///
/// # Checked operations
///
/// Index-taking operations that can fail return [`Error::OutOfBounds`] and
/// leave the array unchanged:
///
/// - [`get`](GrowableArray::get) / [`get_mut`](GrowableArray::get_mut)
/// - [`remove`](GrowableArray::remove)
/// - [`swap_remove`](GrowableArray::swap_remove)
/// - [`insert`](GrowableArray::insert)
///
/// Indexing with `[]` panics instead, like slices.
///
/// # Examples
///
/// ```rust
/// use growable_array::{Error, GrowableArray};
///
/// let mut a: GrowableArray<u32> = GrowableArray::with_capacity(2);
/// a.push(1);
/// a.push(2);
/// a.push(3); // grows 2 -> 3
/// assert_eq!(a.capacity(), 3);
/// assert_eq!(a.as_slice(), &[1, 2, 3]);
/// assert_eq!(a.get(3), Err(Error::OutOfBounds { index: 3, len: 3 }));
/// ```
pub struct GrowableArray<T> {
    pub(crate) buf: Box<[MaybeUninit<T>]>,
    pub(crate) len: usize,
}

impl<T> GrowableArray<T> {
    /// Returns the number of allocated slots, occupied or not.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the current logical length (`0..=capacity`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `capacity - len`, the number of pushes that will not reallocate.
    #[inline]
    pub fn spare_capacity(&self) -> usize {
        self.capacity() - self.len
    }

    /// Returns the live element at `index`.
    ///
    /// Returns [`Error::OutOfBounds`] if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(Error::OutOfBounds { index, len })
    }

    /// Returns the live element at `index` mutably.
    ///
    /// Returns [`Error::OutOfBounds`] if `index >= len`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::OutOfBounds { index, len })
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns `true` if the array contains `x` (linear search on the live prefix).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }
}

impl<T> Drop for GrowableArray<T> {
    fn drop(&mut self) {
        let live: *mut [T] = self.as_mut_slice();
        // SAFETY: `buf[..len]` holds initialized elements owned by the array,
        // and nothing reads them after this point. The boxed `MaybeUninit`
        // buffer is freed afterwards without touching its contents.
        unsafe { ptr::drop_in_place(live) }
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for GrowableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for GrowableArray<T> {}
impl<T: Ord> Ord for GrowableArray<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for GrowableArray<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for GrowableArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: Clone> Clone for GrowableArray<T> {
    /// Clones the live elements into a new array whose capacity equals `len`.
    fn clone(&self) -> Self {
        Self::from(self.as_slice())
    }
}

impl<T> Deref for GrowableArray<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for GrowableArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for GrowableArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for GrowableArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T> Borrow<[T]> for GrowableArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for GrowableArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
