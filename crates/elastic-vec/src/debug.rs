// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Human-readable rendering of a vector's elements.

use core::fmt;

use crate::raw::RawAllocator;
use crate::vector::Vector;

impl<T, A> Vector<T, A>
where
    T: Copy,
    A: RawAllocator,
{
    /// Writes `[e0, e1, ..., en]` followed by a newline to `out`, rendering
    /// each element with `elmt_debug`. An empty vector renders as `[]`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use core::fmt::Write;
    /// use elastic_vec::Vector;
    ///
    /// let vector = Vector::import(&[1, 2, 3]).expect("Failed to import(..)");
    /// let mut rendered = String::new();
    ///
    /// vector
    ///     .write_debug(&mut rendered, |elmt, out| write!(out, "{elmt}"))
    ///     .expect("Failed to write_debug(..)");
    ///
    /// assert_eq!(rendered, "[1, 2, 3]\n");
    /// ```
    pub fn write_debug<W, F>(&self, out: &mut W, mut elmt_debug: F) -> fmt::Result
    where
        W: fmt::Write + ?Sized,
        F: FnMut(&T, &mut W) -> fmt::Result,
    {
        out.write_char('[')?;

        for (i, elmt) in self.iter().enumerate() {
            if i > 0 {
                out.write_str(", ")?;
            }
            elmt_debug(elmt, out)?;
        }

        out.write_str("]\n")
    }

    /// Writes the [`write_debug`](Self::write_debug) rendering to standard
    /// error.
    #[cfg(feature = "std")]
    pub fn debug<F>(&self, elmt_debug: F)
    where
        F: FnMut(&T, &mut alloc::string::String) -> fmt::Result,
    {
        let mut rendered = alloc::string::String::new();

        if self.write_debug(&mut rendered, elmt_debug).is_ok() {
            std::eprint!("{rendered}");
        }
    }
}

impl<T, A> fmt::Debug for Vector<T, A>
where
    T: Copy + fmt::Debug,
    A: RawAllocator,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("data", &self.as_slice())
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}
