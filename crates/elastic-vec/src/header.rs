// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Buffer metadata and the overflow-checked size arithmetic behind it.

use core::alloc::Layout;

use crate::error::VectorError;

/// Capacity and length of a vector.
///
/// Held inline next to the data pointer. `length <= capacity` after every
/// successful operation.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct Header {
    /// Element slots allocated.
    pub capacity: usize,
    /// Element slots in use.
    pub length: usize,
}

impl Header {
    /// Slots that can be filled without reallocating.
    #[inline]
    pub fn spare(&self) -> usize {
        self.capacity - self.length
    }
}

/// Computes the layout of an array of `capacity` elements of `T`.
///
/// # Errors
///
/// Returns [`VectorError::CapacityOverflow`] if `capacity * size_of::<T>()`
/// overflows `usize` or exceeds `isize::MAX`.
#[inline]
pub fn array_layout<T>(capacity: usize) -> Result<Layout, VectorError> {
    let bytes = core::mem::size_of::<T>()
        .checked_mul(capacity)
        .ok_or(VectorError::CapacityOverflow)?;

    Layout::from_size_align(bytes, core::mem::align_of::<T>())
        .map_err(|_| VectorError::CapacityOverflow)
}
