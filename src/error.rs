// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `GrowableArray`.
//!
//! The only recoverable failure is an index outside the live prefix.
//! The error is `Copy` and implements `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by checked operations on [`GrowableArray`](crate::GrowableArray).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An index was outside the current logical bounds.
    ///
    /// `len` is the array length at the time of the call. For
    /// [`insert`](crate::GrowableArray::insert) the valid range is `0..=len`,
    /// for every other operation it is `0..len`.
    OutOfBounds { index: usize, len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
        }
    }
}

impl CoreError for Error {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::OutOfBounds { index: 3, len: 1 });
        assert!(s.contains("out of bounds"));
    }

    #[test]
    fn test_display_names_index_and_len() {
        let e = Error::OutOfBounds { index: 7, len: 0 };
        assert_eq!(e.to_string(), "index 7 out of bounds for length 0");
    }
}
