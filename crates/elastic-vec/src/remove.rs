// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Removal: one copy-out-and-shift algorithm and its specialisations.
//!
//! Removals never fail for lack of memory. When a removal leaves the vector
//! at most half full it tries to give memory back; a refused shrink is
//! skipped silently.

use crate::error::VectorError;
use crate::raw::RawAllocator;
use crate::vector::Vector;

impl<T, A> Vector<T, A>
where
    T: Copy,
    A: RawAllocator,
{
    /// Closes `[index, index + count)`. Caller checked the range.
    fn close_gap(&mut self, index: usize, count: usize) {
        debug_assert!(index + count <= self.length);

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): [index, length) is initialised
            // and inside the allocation; `copy` handles the overlap.
            let gap = self.buf.as_mut_ptr().add(index);
            core::ptr::copy(gap.add(count), gap, self.length - index - count);
        }

        let length = self.length - count;
        self.auto_shrink(length);
        self.length = length;
    }

    /// Removes `count` elements starting at `index`, shifting later
    /// elements toward the head.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::RangeOutOfBounds`] if `index + count > len()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use elastic_vec::{Vector, VectorError};
    ///
    /// fn example() -> Result<(), VectorError> {
    ///     let mut vector = Vector::import(&[1, 2, 3, 5, 8, 13, 21, 34, 55, 89])?;
    ///     vector.excise(2, 3)?;
    ///
    ///     assert_eq!(vector.as_slice(), &[1, 2, 13, 21, 34, 55, 89]);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn excise(&mut self, index: usize, count: usize) -> Result<(), VectorError> {
        match index.checked_add(count) {
            Some(end) if end <= self.length => {}
            _ => {
                return Err(VectorError::RangeOutOfBounds {
                    index,
                    count,
                    length: self.length,
                });
            }
        }

        self.close_gap(index, count);

        Ok(())
    }

    /// Removes and returns element `index`.
    pub fn remove(&mut self, index: usize) -> Result<T, VectorError> {
        self.check_index(index)?;

        let value = self.as_slice()[index];
        self.close_gap(index, 1);

        Ok(value)
    }

    /// Shortens the vector to `length` elements.
    ///
    /// Does nothing if `length >= len()`.
    pub fn truncate(&mut self, length: usize) {
        if length < self.length {
            self.close_gap(length, self.length - length);
        }
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Removes and returns the last element.
    pub fn pull(&mut self) -> Result<T, VectorError> {
        match self.length {
            0 => Err(VectorError::Empty),
            length => self.remove(length - 1),
        }
    }

    /// Alias of [`pull`](Self::pull).
    #[inline]
    pub fn pop(&mut self) -> Result<T, VectorError> {
        self.pull()
    }

    /// Removes and returns the first element.
    pub fn shift(&mut self) -> Result<T, VectorError> {
        match self.length {
            0 => Err(VectorError::Empty),
            _ => self.remove(0),
        }
    }
}
