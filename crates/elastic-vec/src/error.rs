// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for elastic-vec.

use thiserror::Error;

/// Error type for `Vector` operations.
///
/// Every fallible operation leaves the vector exactly as it was before the
/// call when it returns one of these.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum VectorError {
    /// A size computation would exceed `usize::MAX` (or the platform's
    /// `isize::MAX` allocation limit) before reaching the allocator.
    #[error("capacity overflow: allocation size would exceed the addressable limit")]
    CapacityOverflow,

    /// The allocator refused a request for `bytes` bytes.
    #[error("allocation of {bytes} bytes failed")]
    AllocationFailed {
        /// Size of the refused request.
        bytes: usize,
    },

    /// An index was past the end of the vector.
    #[error("index {index} out of bounds for length {length}")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Length of the vector at the time of the call.
        length: usize,
    },

    /// A range `[index, index + count)` was not contained in the vector.
    #[error("range of {count} elements at {index} out of bounds for length {length}")]
    RangeOutOfBounds {
        /// Start of the range.
        index: usize,
        /// Number of elements in the range.
        count: usize,
        /// Length of the vector at the time of the call.
        length: usize,
    },

    /// A reference did not address an element of the vector.
    #[error("reference does not address an element of this vector")]
    NotAnElement,

    /// An element was requested from an empty vector.
    #[error("vector is empty")]
    Empty,
}

impl VectorError {
    /// Returns `true` for the out-of-memory class of errors: refused
    /// allocations and size computations that overflowed.
    pub fn is_out_of_memory(&self) -> bool {
        matches!(self, Self::CapacityOverflow | Self::AllocationFailed { .. })
    }
}
