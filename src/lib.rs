// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `growable-array`
//!
//! A `no_std` + `alloc`, heap-backed, index-addressed growable array with an
//! **explicit capacity growth policy**.
//!
//! The core type, [`GrowableArray<T>`], owns a contiguous buffer of `capacity`
//! slots and tracks a logical length `len ∈ 0..=capacity`. Only the prefix
//! `[0..len)` holds live elements; the tail is uninitialized spare room that
//! lets [`GrowableArray::push`] run in amortized `O(1)`.
//!
//! ## Growth policy
//!
//! - [`GrowableArray::new`] starts with [`DEFAULT_CAPACITY`] (10) slots.
//! - When a push finds the buffer full, the capacity becomes
//!   `ceil(capacity * 1.5)`, with a minimum growth of one slot, so an empty
//!   zero-capacity array grows `0 → 1 → 2 → 3 → 5 → 8 → 12 → …`.
//! - Growth moves the live elements bitwise into the new buffer; it never
//!   reorders or clones them.
//!
//! The 1.5x factor leaves at most 50% slack right after a growth event, and
//! reallocates less often than smaller factors would.
//!
//! ## Checked vs panicking access
//!
//! - [`GrowableArray::get`], [`GrowableArray::get_mut`],
//!   [`GrowableArray::remove`], [`GrowableArray::swap_remove`] and
//!   [`GrowableArray::insert`] return [`Error::OutOfBounds`] for an invalid
//!   index and leave the array unchanged.
//! - Indexing (`a[i]`, `a[start..end]`, …) **panics** on out-of-bounds or
//!   inverted ranges, exactly like built-in slices.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `GrowableArray<T>` as a plain
//!     sequence of its live elements.
//!
//! ## Example
//!
//! ```rust
//! use growable_array::GrowableArray;
//!
//! let mut a = GrowableArray::new();
//! a.push(300);
//! a.append_all([1000, 400]);
//! assert_eq!(a.get(0), Ok(&300));
//! assert_eq!(a.remove(0), Ok(300));
//! assert_eq!(a.as_slice(), &[1000, 400]);
//! assert_eq!(a.capacity(), 10);
//! ```
//!
//! See [`GrowableArray`] for detailed behavior, complexity, and ownership notes.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::IntoIter;
pub use vec::{DEFAULT_CAPACITY, GrowableArray};
