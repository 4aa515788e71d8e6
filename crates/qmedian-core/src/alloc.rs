//! Fallible allocation helpers
//!
//! Every buffer the quantizer sizes from caller input goes through these
//! helpers so that an exhausted allocator surfaces as
//! [`Error::AllocationFailed`] instead of aborting the process.

use crate::error::{Error, Result};
use std::collections::HashSet;
use std::hash::Hash;

/// Create an empty vector with room for at least `capacity` elements.
pub fn try_with_capacity<T>(capacity: usize) -> Result<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(capacity)
        .map_err(|_| Error::AllocationFailed {
            requested: capacity,
        })?;
    Ok(v)
}

/// Create a vector of `len` copies of `value`.
pub fn try_filled<T: Clone>(value: T, len: usize) -> Result<Vec<T>> {
    let mut v = try_with_capacity(len)?;
    v.resize(len, value);
    Ok(v)
}

/// Reserve room for `additional` more elements in `v`.
///
/// On failure `v` is left untouched.
pub fn try_grow<T>(v: &mut Vec<T>, additional: usize) -> Result<()> {
    v.try_reserve(additional)
        .map_err(|_| Error::AllocationFailed {
            requested: v.len().saturating_add(additional),
        })
}

/// Create an empty set with room for at least `capacity` elements.
pub fn try_set_with_capacity<T: Eq + Hash>(capacity: usize) -> Result<HashSet<T>> {
    let mut set = HashSet::new();
    set.try_reserve(capacity)
        .map_err(|_| Error::AllocationFailed {
            requested: capacity,
        })?;
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_filled() {
        let v = try_filled(7u8, 5).unwrap();
        assert_eq!(v, vec![7, 7, 7, 7, 7]);
    }

    #[test]
    fn test_try_with_capacity_is_empty() {
        let v: Vec<u32> = try_with_capacity(64).unwrap();
        assert!(v.is_empty());
        assert!(v.capacity() >= 64);
    }

    #[test]
    fn test_impossible_request_is_reported() {
        let result: Result<Vec<u64>> = try_with_capacity(usize::MAX);
        assert!(matches!(result, Err(Error::AllocationFailed { .. })));
    }

    #[test]
    fn test_try_grow_failure_keeps_contents() {
        let mut v = vec![1u64, 2, 3];
        assert!(try_grow(&mut v, usize::MAX).is_err());
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn test_try_set_with_capacity() {
        let set: HashSet<u32> = try_set_with_capacity(16).unwrap();
        assert!(set.is_empty());
        assert!(set.capacity() >= 16);
        let result: Result<HashSet<u64>> = try_set_with_capacity(usize::MAX);
        assert!(matches!(result, Err(Error::AllocationFailed { .. })));
    }
}
