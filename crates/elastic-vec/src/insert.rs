// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Insertion: one shift-and-copy-in algorithm and its specialisations.

use crate::error::VectorError;
use crate::raw::RawAllocator;
use crate::vector::Vector;

/// Closes a gap opened by `open_gap` when dropped.
struct GapGuard<T> {
    gap: *mut T,
    count: usize,
    tail: usize,
}

impl<T> Drop for GapGuard<T> {
    fn drop(&mut self) {
        // SAFETY (PRECONDITIONS ARE MET): the `tail` elements were moved to
        // [gap + count, gap + count + tail) by `open_gap`, inside the same
        // allocation; `copy` handles the overlap.
        unsafe { core::ptr::copy(self.gap.add(self.count), self.gap, self.tail) };
    }
}

impl<T, A> Vector<T, A>
where
    T: Copy,
    A: RawAllocator,
{
    /// Opens a gap of `count` slots at `index` and lets `fill` write them.
    ///
    /// `fill` receives a pointer to the first gap slot and must initialise
    /// all `count` slots.
    fn open_gap<F>(&mut self, index: usize, count: usize, fill: F) -> Result<(), VectorError>
    where
        F: FnOnce(*mut T),
    {
        if index > self.length {
            return Err(VectorError::IndexOutOfBounds {
                index,
                length: self.length,
            });
        }

        let length = self
            .length
            .checked_add(count)
            .ok_or(VectorError::CapacityOverflow)?;

        self.ensure(length)?;

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): ensure() guarantees capacity for
            // `length` slots, so both [index, old_length) and its destination
            // [index + count, length) are inside the allocation. `copy` handles
            // the overlap.
            let gap = self.buf.as_mut_ptr().add(index);
            let tail = self.length - index;
            core::ptr::copy(gap, gap.add(count), tail);

            // If `fill` unwinds, the tail moves back and the length was never
            // committed, so the vector is as before the call.
            let guard = GapGuard { gap, count, tail };
            fill(gap);
            core::mem::forget(guard);
        }

        self.length = length;

        Ok(())
    }

    /// Inserts a copy of `elmts` at `index`, shifting later elements toward
    /// the tail.
    ///
    /// # Errors
    ///
    /// - [`VectorError::IndexOutOfBounds`] if `index > len()`.
    /// - An out-of-memory error if the new length overflows or growing
    ///   fails. The vector is left untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use elastic_vec::{Vector, VectorError};
    ///
    /// fn example() -> Result<(), VectorError> {
    ///     let mut vector = Vector::import(&[1, 2, 3, 5])?;
    ///     vector.inject(2, &[9, 11])?;
    ///
    ///     assert_eq!(vector.as_slice(), &[1, 2, 9, 11, 3, 5]);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn inject(&mut self, index: usize, elmts: &[T]) -> Result<(), VectorError> {
        self.open_gap(index, elmts.len(), |gap| unsafe {
            // SAFETY (PRECONDITIONS ARE MET): the gap has elmts.len() slots and
            // `elmts` cannot borrow from `self` while it is mutably borrowed.
            core::ptr::copy_nonoverlapping(elmts.as_ptr(), gap, elmts.len());
        })
    }

    /// Inserts `count` elements produced by `f` at `index`.
    ///
    /// `f` is called with `0..count` in order; element `k` lands at
    /// `index + k`. If `f` panics the vector keeps its previous contents
    /// and length.
    pub fn inject_with<F>(&mut self, index: usize, count: usize, mut f: F) -> Result<(), VectorError>
    where
        F: FnMut(usize) -> T,
    {
        self.open_gap(index, count, |gap| {
            for k in 0..count {
                // SAFETY: k < count, the gap size.
                unsafe { gap.add(k).write(f(k)) };
            }
        })
    }

    /// Inserts `value` at `index`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), VectorError> {
        self.inject(index, core::slice::from_ref(&value))
    }

    /// Appends `value` at the tail.
    pub fn append(&mut self, value: T) -> Result<(), VectorError> {
        self.insert(self.length, value)
    }

    /// Alias of [`append`](Self::append).
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), VectorError> {
        self.append(value)
    }

    /// Appends a copy of `elmts` at the tail.
    pub fn extend(&mut self, elmts: &[T]) -> Result<(), VectorError> {
        self.inject(self.length, elmts)
    }

    /// Inserts `value` at the head.
    pub fn unshift(&mut self, value: T) -> Result<(), VectorError> {
        self.insert(0, value)
    }
}
