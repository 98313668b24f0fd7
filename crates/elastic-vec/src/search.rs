// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Linear and binary search.
//!
//! "Not found" is `None`; no valid index is ever reserved as a sentinel.

use core::cmp::Ordering;

use crate::error::VectorError;
use crate::raw::RawAllocator;
use crate::vector::Vector;

impl<T, A> Vector<T, A>
where
    T: Copy,
    A: RawAllocator,
{
    /// Returns the index of the first element satisfying `pred`.
    pub fn find<P>(&self, pred: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.as_slice().iter().position(pred)
    }

    /// Returns the index of the first element at or after `index` that
    /// satisfies `pred`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::IndexOutOfBounds`] if `index > len()`. Starting
    /// at `len()` is allowed and finds nothing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use elastic_vec::{Vector, VectorError};
    ///
    /// fn example() -> Result<(), VectorError> {
    ///     let vector = Vector::import(&[1, 2, 2, 3, 3, 3, 5, 5, 5, 5, 5])?;
    ///
    ///     assert_eq!(vector.find_next(2, |&e| e == 3)?, Some(3));
    ///     assert_eq!(vector.find_next(4, |&e| e == 3)?, Some(4));
    ///     assert_eq!(vector.find_next(0, |&e| e == 7)?, None);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn find_next<P>(&self, index: usize, pred: P) -> Result<Option<usize>, VectorError>
    where
        P: FnMut(&T) -> bool,
    {
        if index > self.length {
            return Err(VectorError::IndexOutOfBounds {
                index,
                length: self.length,
            });
        }

        Ok(self.as_slice()[index..]
            .iter()
            .position(pred)
            .map(|offset| index + offset))
    }

    /// Returns the index of the last element strictly before `index` that
    /// satisfies `pred`, scanning backward.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::IndexOutOfBounds`] if `index > len()`.
    pub fn find_last<P>(&self, index: usize, pred: P) -> Result<Option<usize>, VectorError>
    where
        P: FnMut(&T) -> bool,
    {
        if index > self.length {
            return Err(VectorError::IndexOutOfBounds {
                index,
                length: self.length,
            });
        }

        Ok(self.as_slice()[..index].iter().rposition(pred))
    }

    /// Binary search with a probe returning how an element orders relative
    /// to the sought value.
    ///
    /// The vector must be partitioned by `probe`: every `Less` before every
    /// `Equal`, every `Equal` before every `Greater`. On a match the index of
    /// the first `Equal` element is returned, not an arbitrary one.
    pub fn search_by<F>(&self, mut probe: F) -> Option<usize>
    where
        F: FnMut(&T) -> Ordering,
    {
        let elmts = self.as_slice();
        let mut index = elmts.binary_search_by(&mut probe).ok()?;

        while index > 0 && probe(&elmts[index - 1]) == Ordering::Equal {
            index -= 1;
        }

        Some(index)
    }

    /// Binary search for `key`; `cmp(elmt, key)` orders an element relative
    /// to the key.
    ///
    /// Returns the index of the first element equal to `key`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use elastic_vec::{Vector, VectorError};
    ///
    /// fn example() -> Result<(), VectorError> {
    ///     let vector = Vector::import(&[1, 2, 2, 3, 3, 3, 5, 5, 5, 5, 5])?;
    ///
    ///     assert_eq!(vector.search(&5, |a, b| a.cmp(b)), Some(6));
    ///     assert_eq!(vector.search(&4, |a, b| a.cmp(b)), None);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn search<F>(&self, key: &T, mut cmp: F) -> Option<usize>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.search_by(|elmt| cmp(elmt, key))
    }
}
