// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ops::{Deref, DerefMut};

use crate::error::VectorError;
use crate::header::Header;
use crate::raw::{Global, RawAllocator, RawBuf};

/// A growable, contiguous array of `Copy` elements with explicit, fallible
/// capacity management.
///
/// Unlike `Vec<T>`, every operation that may allocate returns a `Result`
/// instead of aborting, the growth and shrink ratios are fixed (see
/// [`policy`](crate::policy)), and removals give memory back automatically
/// once the vector is less than half full.
///
/// On error a vector is always left exactly as it was: same address, same
/// capacity, same length, same contents.
///
/// # Example
///
/// ```rust
/// use elastic_vec::{Vector, VectorError};
///
/// fn example() -> Result<(), VectorError> {
///     let mut vector = Vector::new();
///
///     for i in 0u32..20 {
///         vector.append(i)?;
///     }
///
///     assert_eq!(vector.len(), 20);
///     assert!(vector.capacity() >= 20);
///     assert_eq!(vector[7], 7);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct Vector<T, A = Global>
where
    T: Copy,
    A: RawAllocator,
{
    pub(crate) buf: RawBuf<T, A>,
    pub(crate) length: usize,
}

impl<T: Copy> Vector<T, Global> {
    /// Creates an empty vector. Does not allocate.
    pub const fn new() -> Self {
        Self::new_in(Global)
    }

    /// Creates an empty vector with exactly `capacity` slots.
    ///
    /// # Errors
    ///
    /// Fails with an out-of-memory error if the size overflows or the
    /// allocation is refused.
    pub fn with_capacity(capacity: usize) -> Result<Self, VectorError> {
        Self::with_capacity_in(capacity, Global)
    }

    /// Creates a vector holding a copy of `data`, with `capacity == len`.
    ///
    /// # Errors
    ///
    /// Fails with an out-of-memory error if the size overflows or the
    /// allocation is refused.
    ///
    /// # Example
    ///
    /// ```rust
    /// use elastic_vec::Vector;
    ///
    /// let vector = Vector::import(&[1u8, 2, 3]).expect("Failed to import(..)");
    /// assert_eq!(vector.as_slice(), &[1, 2, 3]);
    /// assert_eq!(vector.capacity(), 3);
    /// ```
    pub fn import(data: &[T]) -> Result<Self, VectorError> {
        Self::import_in(data, Global)
    }
}

impl<T, A> Vector<T, A>
where
    T: Copy,
    A: RawAllocator,
{
    /// Creates an empty vector backed by `alloc`. Does not allocate.
    pub const fn new_in(alloc: A) -> Self {
        Self {
            buf: RawBuf::new_in(alloc),
            length: 0,
        }
    }

    /// Creates an empty vector with exactly `capacity` slots from `alloc`.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Result<Self, VectorError> {
        let mut vector = Self::new_in(alloc);
        vector.buf.resize(capacity)?;

        Ok(vector)
    }

    /// Creates a vector holding a copy of `data` from `alloc`.
    pub fn import_in(data: &[T], alloc: A) -> Result<Self, VectorError> {
        let mut vector = Self::with_capacity_in(data.len(), alloc)?;

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): the buffer has exactly
            // data.len() fresh slots, disjoint from `data`.
            core::ptr::copy_nonoverlapping(data.as_ptr(), vector.buf.as_mut_ptr(), data.len());
        }
        vector.length = data.len();

        Ok(vector)
    }

    /// Creates an independent copy of this vector.
    ///
    /// The copy keeps this vector's spare capacity if possible. If that
    /// allocation is refused and there is spare capacity to give up, it
    /// retries with exactly `len()` slots.
    ///
    /// # Errors
    ///
    /// Fails with an out-of-memory error only if every attempt fails.
    pub fn duplicate(&self) -> Result<Self, VectorError>
    where
        A: Clone,
    {
        let mut copy = Self::new_in(self.buf.allocator().clone());

        if let Err(e) = copy.buf.resize(self.capacity()) {
            if self.length == self.capacity() {
                return Err(e);
            }

            tracing::debug!(
                capacity = self.capacity(),
                length = self.length,
                "duplicate falling back to exact length"
            );
            copy.buf.resize(self.length)?;
        }

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): `copy` has at least
            // self.length slots and is a different allocation.
            core::ptr::copy_nonoverlapping(self.buf.as_ptr(), copy.buf.as_mut_ptr(), self.length);
        }
        copy.length = self.length;

        Ok(copy)
    }

    /// Reallocates to hold exactly `capacity` elements.
    ///
    /// If `capacity < len()`, the elements past `capacity` are discarded.
    ///
    /// # Errors
    ///
    /// Fails with an out-of-memory error, leaving the vector untouched, if
    /// the size overflows or the reallocation is refused.
    ///
    /// # Example
    ///
    /// ```rust
    /// use elastic_vec::{Vector, VectorError};
    ///
    /// fn example() -> Result<(), VectorError> {
    ///     let mut vector = Vector::import(&[1u8, 2, 3, 4])?;
    ///
    ///     vector.resize(2)?;
    ///     assert_eq!(vector.as_slice(), &[1, 2]);
    ///
    ///     vector.resize(10)?;
    ///     assert_eq!(vector.capacity(), 10);
    ///     assert_eq!(vector.len(), 2);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn resize(&mut self, capacity: usize) -> Result<(), VectorError> {
        self.buf.resize(capacity)?;

        if capacity < self.length {
            self.length = capacity;
        }

        Ok(())
    }

    /// Shrinks the capacity to exactly `len()`.
    ///
    /// # Errors
    ///
    /// If the reallocation is refused the vector is left unchanged and the
    /// error is returned; the vector remains fully usable.
    pub fn shrink(&mut self) -> Result<(), VectorError> {
        self.resize(self.length)
    }

    /// Returns the capacity and length of the vector.
    #[inline]
    pub fn header(&self) -> Header {
        Header {
            capacity: self.buf.capacity(),
            length: self.length,
        }
    }

    /// Returns the number of elements in the vector.
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Alias of [`len`](Self::len).
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns `true` if the vector contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the number of elements the vector can hold without
    /// reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Alias of [`capacity`](Self::capacity).
    #[inline]
    pub fn volume(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the allocator backing this vector.
    #[inline]
    pub fn allocator(&self) -> &A {
        self.buf.allocator()
    }

    /// Returns a slice containing the entire vector.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `length` slots are initialised and the pointer
        // is non-null and aligned (dangling only when nothing is read).
        unsafe { core::slice::from_raw_parts(self.buf.as_ptr(), self.length) }
    }

    /// Returns a mutable slice containing the entire vector.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, and `&mut self` guarantees uniqueness.
        unsafe { core::slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.length) }
    }

    /// Returns a raw pointer to the first slot.
    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Returns a raw mutable pointer to the first slot.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }
}

impl<T: Copy> Default for Vector<T, Global> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A> Deref for Vector<T, A>
where
    T: Copy,
    A: RawAllocator,
{
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, A> DerefMut for Vector<T, A>
where
    T: Copy,
    A: RawAllocator,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}
