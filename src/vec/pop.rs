// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowableArray;

impl<T> GrowableArray<T> {
    /// Removes and returns the last element, if any. Capacity is unchanged.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: Before decrementing, all elements in `buf[..old_len]` are
            // initialized by invariant, so `buf[self.len]` (the old last slot)
            // still contains a `T`. It is now outside the live prefix, so the
            // value read here has exactly one owner.
            let out = unsafe { self.buf[self.len].assume_init_read() };
            Some(out)
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::GrowableArray;

    #[test]
    fn test_push_pop() {
        let mut a = GrowableArray::with_capacity(2);
        a.push(1);
        a.push(2);
        assert_eq!(a.pop(), Some(2));
        assert_eq!(a.pop(), Some(1));
        assert_eq!(a.pop(), None);
        assert!(a.is_empty());
        assert_eq!(a.capacity(), 2);
    }

    #[test]
    fn test_pop_moves_ownership_out() {
        let mut a = GrowableArray::new();
        a.push(String::from("owned"));
        let s = a.pop();
        assert_eq!(s.as_deref(), Some("owned"));
        a.push(String::from("reused slot"));
        assert_eq!(a.as_slice(), &["reused slot"]);
    }
}
