// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Element access: index/pointer conversion and checked copies.

use crate::error::VectorError;
use crate::raw::RawAllocator;
use crate::vector::Vector;

impl<T, A> Vector<T, A>
where
    T: Copy,
    A: RawAllocator,
{
    #[inline(always)]
    pub(crate) fn check_index(&self, index: usize) -> Result<(), VectorError> {
        if index >= self.length {
            return Err(VectorError::IndexOutOfBounds {
                index,
                length: self.length,
            });
        }

        Ok(())
    }

    /// Converts a reference to one of this vector's elements into its index.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::NotAnElement`] if `elmt` does not point at an
    /// element of this vector.
    ///
    /// # Example
    ///
    /// ```rust
    /// use elastic_vec::Vector;
    ///
    /// let vector = Vector::import(&[10u16, 20, 30]).expect("Failed to import(..)");
    /// let elmt = &vector[2];
    ///
    /// assert_eq!(vector.index_of(elmt), Ok(2));
    /// assert!(vector.index_of(&30).is_err());
    /// ```
    pub fn index_of(&self, elmt: &T) -> Result<usize, VectorError> {
        let size = core::mem::size_of::<T>();

        if size == 0 {
            // Every zero-sized element shares one address.
            return match self.length {
                0 => Err(VectorError::NotAnElement),
                _ => Ok(0),
            };
        }

        let offset = (elmt as *const T as usize)
            .checked_sub(self.as_ptr() as usize)
            .ok_or(VectorError::NotAnElement)?;

        if offset % size != 0 || offset / size >= self.length {
            return Err(VectorError::NotAnElement);
        }

        Ok(offset / size)
    }

    /// Returns the address of element `index`, or the one-past-the-end
    /// address when `index == len()`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::IndexOutOfBounds`] if `index > len()`.
    pub fn at(&self, index: usize) -> Result<*const T, VectorError> {
        if index > self.length {
            return Err(VectorError::IndexOutOfBounds {
                index,
                length: self.length,
            });
        }

        // SAFETY: index <= length <= capacity, so the result stays inside
        // (or one past) the allocation.
        Ok(unsafe { self.as_ptr().add(index) })
    }

    /// Mutable counterpart of [`at`](Self::at).
    pub fn at_mut(&mut self, index: usize) -> Result<*mut T, VectorError> {
        if index > self.length {
            return Err(VectorError::IndexOutOfBounds {
                index,
                length: self.length,
            });
        }

        // SAFETY: see `at`.
        Ok(unsafe { self.as_mut_ptr().add(index) })
    }

    /// Returns a copy of element `index`.
    pub fn get(&self, index: usize) -> Result<T, VectorError> {
        self.check_index(index)?;

        Ok(self.as_slice()[index])
    }

    /// Copies element `index` into `out`.
    pub fn get_into(&self, index: usize, out: &mut T) -> Result<(), VectorError> {
        *out = self.get(index)?;

        Ok(())
    }

    /// Overwrites element `index` with `value`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use elastic_vec::{Vector, VectorError};
    ///
    /// fn example() -> Result<(), VectorError> {
    ///     let mut vector = Vector::import(&['a', 'b', 'c'])?;
    ///     vector.set(1, 'z')?;
    ///
    ///     assert_eq!(vector.get(1)?, 'z');
    ///     assert!(vector.set(3, 'x').is_err());
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<(), VectorError> {
        self.check_index(index)?;
        self.as_mut_slice()[index] = value;

        Ok(())
    }

    /// Returns the last element.
    pub fn tail(&self) -> Result<&T, VectorError> {
        self.as_slice().last().ok_or(VectorError::Empty)
    }

    /// Returns the last element mutably.
    pub fn tail_mut(&mut self) -> Result<&mut T, VectorError> {
        self.as_mut_slice().last_mut().ok_or(VectorError::Empty)
    }
}
