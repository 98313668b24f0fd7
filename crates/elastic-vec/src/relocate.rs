// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Relocation of elements within bounds. Never allocates.

use crate::error::VectorError;
use crate::raw::RawAllocator;
use crate::vector::Vector;

impl<T, A> Vector<T, A>
where
    T: Copy,
    A: RawAllocator,
{
    /// Moves element `source` to position `target`, shifting the elements in
    /// between by one to close the gap.
    ///
    /// The relative order of every other element is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::IndexOutOfBounds`] if either index is
    /// `>= len()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use elastic_vec::{Vector, VectorError};
    ///
    /// fn example() -> Result<(), VectorError> {
    ///     let mut vector = Vector::import(&[2, 4, 6, 8, 10, 12])?;
    ///     vector.move_to(2, 4)?;
    ///
    ///     assert_eq!(vector.as_slice(), &[2, 4, 10, 6, 8, 12]);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn move_to(&mut self, target: usize, source: usize) -> Result<(), VectorError> {
        self.check_index(target)?;
        self.check_index(source)?;

        let elmts = self.as_mut_slice();

        if target < source {
            for i in (target..source).rev() {
                elmts.swap(i, i + 1);
            }
        } else {
            for i in source..target {
                elmts.swap(i, i + 1);
            }
        }

        Ok(())
    }

    /// Exchanges elements `i` and `j`.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), VectorError> {
        self.check_index(i)?;
        self.check_index(j)?;

        if i != j {
            self.as_mut_slice().swap(i, j);
        }

        Ok(())
    }
}
