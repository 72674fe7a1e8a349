// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`GrowableArray`](crate::GrowableArray).
//!
//! - **Serialize**: as a sequence of the live elements (length `len`);
//!   capacity is not part of the format.
//! - **Deserialize**: from any sequence. When the format reports a length,
//!   it pre-sizes the buffer (bounded, so a hostile length hint cannot force
//!   a huge allocation); the array then grows by the usual policy.

// Crate imports
use crate::vec::{DEFAULT_CAPACITY, GrowableArray};

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

/// Upper bound on the capacity pre-sized from a format's length hint.
const MAX_PREALLOC: usize = 4096;

impl<T: Serialize> Serialize for GrowableArray<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct ArrayVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> de::Visitor<'de> for ArrayVisitor<T> {
    type Value = GrowableArray<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let capacity = a
            .size_hint()
            .map_or(DEFAULT_CAPACITY, |n| n.min(MAX_PREALLOC));
        let mut out = GrowableArray::with_capacity(capacity);
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem);
        }
        Ok(out)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for GrowableArray<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(ArrayVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::GrowableArray;

    #[test]
    fn test_serde_roundtrip_json() {
        let mut a: GrowableArray<i32> = GrowableArray::new();
        a.append_all([1, 2, 3]);
        let s = serde_json::to_string(&a).unwrap();
        assert_eq!(s, "[1,2,3]");
        let back: GrowableArray<i32> = serde_json::from_str(&s).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn test_serde_roundtrip_empty_json() {
        let a: GrowableArray<i32> = GrowableArray::with_capacity(32);
        let s = serde_json::to_string(&a).unwrap();
        assert_eq!(s, "[]");
        let back: GrowableArray<i32> = serde_json::from_str(&s).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn test_deserialize_grows_past_default_capacity() {
        let json = serde_json::to_string(&(0..40).collect::<Vec<u8>>()).unwrap();
        let back: GrowableArray<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 40);
        assert!(back.capacity() >= 40);
        assert_eq!(back.get(39), Ok(&39));
    }

    #[test]
    fn test_non_copy_elements() {
        let a = GrowableArray::from([String::from("x"), String::from("y")]);
        let s = serde_json::to_string(&a).unwrap();
        assert_eq!(s, r#"["x","y"]"#);
        let back: GrowableArray<String> = serde_json::from_str(&s).unwrap();
        assert_eq!(back.as_slice(), &["x", "y"]);
    }

    #[test]
    fn test_visitor_expecting_message() {
        let err =
            serde_json::from_str::<GrowableArray<i32>>(r#"{"not":"an array"}"#).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("a sequence"), "unexpected error message: {msg}");
    }
}
