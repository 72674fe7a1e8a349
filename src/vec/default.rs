// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowableArray;

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}
