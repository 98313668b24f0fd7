// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Capacity policy: how much to grow, when and how much to shrink.
//!
//! Growth over-allocates by 8:5 (about 1.6x). After a removal leaves the
//! vector at most half full, capacity drops to 6:5 (1.2x) of the new
//! length. Using two different ratios keeps alternating inserts and
//! removals near a boundary from reallocating every time.
//!
//! All ratios are computed as `n / 5 * k + ((n % 5) * k + r) / 5`, which
//! never forms the intermediate product `n * k`.

use crate::error::VectorError;
use crate::raw::RawAllocator;
use crate::vector::Vector;

const GROW_NUMERATOR: usize = 8;
const SHRINK_NUMERATOR: usize = 6;
const DENOMINATOR: usize = 5;

/// Capacity to request when growing to hold `min_length` elements.
///
/// Returns `None` if the target overflows `usize` (or does not exceed
/// `min_length`), in which case the caller should fall back to exactly
/// `min_length`.
#[inline]
pub fn grow_target(min_length: usize) -> Option<usize> {
    let target = (min_length / DENOMINATOR)
        .checked_mul(GROW_NUMERATOR)?
        .checked_add(((min_length % DENOMINATOR) * GROW_NUMERATOR + 3) / DENOMINATOR)?;

    (target > min_length).then_some(target)
}

/// Whether a vector with `length` elements in `capacity` slots should give
/// memory back.
#[inline]
pub fn should_shrink(length: usize, capacity: usize) -> bool {
    length <= capacity.saturating_sub(1) / 2
}

/// Capacity to keep after shrinking to `length` elements.
///
/// Only meaningful when [`should_shrink`] holds, where it cannot overflow.
#[inline]
pub fn shrink_target(length: usize) -> usize {
    (length / DENOMINATOR) * SHRINK_NUMERATOR
        + ((length % DENOMINATOR) * SHRINK_NUMERATOR + 4) / DENOMINATOR
}

impl<T, A> Vector<T, A>
where
    T: Copy,
    A: RawAllocator,
{
    /// Makes room for at least `min_length` elements in total.
    ///
    /// Does nothing if the capacity already suffices. Otherwise tries to
    /// grow to [`grow_target`], and falls back to exactly `min_length` if
    /// that target overflows or is refused.
    ///
    /// After success, growing up to `min_length` elements needs no further
    /// reallocation, until an operation that can shrink the capacity runs.
    ///
    /// # Errors
    ///
    /// Fails with an out-of-memory error, leaving the vector untouched, if
    /// even the exact resize fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use elastic_vec::{Vector, VectorError};
    ///
    /// fn example() -> Result<(), VectorError> {
    ///     let mut vector = Vector::<u64>::new();
    ///     vector.ensure(40)?;
    ///
    ///     assert_eq!(vector.capacity(), 64);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn ensure(&mut self, min_length: usize) -> Result<(), VectorError> {
        if min_length <= self.capacity() {
            return Ok(());
        }

        if let Some(target) = grow_target(min_length) {
            match self.resize(target) {
                Ok(()) => return Ok(()),
                Err(e) => tracing::debug!(
                    requested = target,
                    min_length,
                    error = %e,
                    "growth target refused, falling back to exact length"
                ),
            }
        }

        self.resize(min_length)
    }

    /// Gives memory back after the length dropped to `length`.
    ///
    /// Must run before the new length is committed. A refused shrink is
    /// not an error: the vector keeps its current capacity.
    pub(crate) fn auto_shrink(&mut self, length: usize) {
        let capacity = self.capacity();

        if !should_shrink(length, capacity) {
            return;
        }

        let target = shrink_target(length);

        if let Err(e) = self.resize(target) {
            tracing::debug!(
                capacity,
                requested = target,
                error = %e,
                "auto-shrink skipped"
            );
        }
    }
}
