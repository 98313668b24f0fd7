// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cmp::Ordering;

use crate::raw::RawAllocator;
use crate::vector::Vector;

impl<T, A> Vector<T, A>
where
    T: Copy,
    A: RawAllocator,
{
    /// Sorts the elements with `cmp`. Not stable.
    ///
    /// The stable `<[T]>::sort_by` stays reachable through `Deref`.
    pub fn sort_unstable_by<F>(&mut self, cmp: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.as_mut_slice().sort_unstable_by(cmp);
    }

    /// Sorts the elements with a comparator that receives an explicit
    /// context. Not stable.
    pub fn sort_with<C, F>(&mut self, ctx: &mut C, mut cmp: F)
    where
        F: FnMut(&T, &T, &mut C) -> Ordering,
    {
        self.sort_unstable_by(|a, b| cmp(a, b, ctx));
    }

    /// Sorts the elements by their natural order. Not stable.
    pub fn sort_ord(&mut self)
    where
        T: Ord,
    {
        self.as_mut_slice().sort_unstable();
    }
}
