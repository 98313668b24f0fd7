// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable array with explicit, fallible capacity management.
//!
//! `Vector<T>` is a contiguous buffer of `Copy` elements that tracks its own
//! capacity and length. It differs from `Vec<T>` in three ways:
//!
//! - **Fallible growth**: every operation that may allocate returns
//!   `Result<_, VectorError>` instead of aborting. On error the vector is
//!   left exactly as before the call.
//! - **Fixed capacity policy**: growth over-allocates by 8:5, and removals
//!   that leave the vector at most half full shrink it to 6:5 of its
//!   length. See [`policy`].
//! - **Checked preconditions**: out-of-range indices and foreign references
//!   are reported as errors, never panics.
//!
//! # Example
//!
//! ```rust
//! use elastic_vec::{Vector, VectorError};
//!
//! fn example() -> Result<(), VectorError> {
//!     let mut vector = elastic_vec::vector![1, 2, 3, 5]?;
//!
//!     vector.inject(2, &[9, 11])?;
//!     assert_eq!(vector.as_slice(), &[1, 2, 9, 11, 3, 5]);
//!
//!     vector.excise(1, 3)?;
//!     assert_eq!(vector.as_slice(), &[1, 3, 5]);
//!
//!     assert_eq!(vector.pull()?, 5);
//!     assert_eq!(vector.shift()?, 1);
//!     assert_eq!(vector.as_slice(), &[3]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Custom Allocators
//!
//! Allocation goes through the [`RawAllocator`] trait. [`Global`] is the
//! default; any other implementation can be plugged in with
//! [`Vector::new_in`].
//!
//! # Test Utilities
//!
//! Enable the `test-utils` feature to inject allocation failures:
//!
//! ```toml
//! [dev-dependencies]
//! elastic-vec = { version = "*", features = ["test-utils"] }
//! ```
//!
//! Then back a vector with a [`FailingAllocator`]:
//!
//! ```rust
//! // test-utils feature required in dev-dependencies
//! #[cfg(test)]
//! mod tests {
//!     use elastic_vec::{AllocatorBehaviour, FailingAllocator, Vector};
//!
//!     #[test]
//!     fn test_handles_out_of_memory() {
//!         let alloc = FailingAllocator::new();
//!         let mut vector = Vector::new_in(alloc.clone());
//!         alloc.change_behaviour(AllocatorBehaviour::FailAlways);
//!
//!         let err = vector.push(1u8).unwrap_err();
//!         assert!(err.is_out_of_memory());
//!     }
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(all(feature = "std", not(test)))]
extern crate std;

mod access;
mod debug;
mod error;
mod header;
mod insert;
mod raw;
mod relocate;
mod remove;
mod search;
mod sort;
mod vector;

#[cfg(any(test, feature = "test-utils"))]
mod behaviour;

#[cfg(test)]
mod tests;

pub mod compare;
pub mod policy;

pub use error::VectorError;
pub use header::{Header, array_layout};
pub use raw::{Global, RawAllocator};
pub use vector::Vector;

#[cfg(any(test, feature = "test-utils"))]
pub use behaviour::{AllocatorBehaviour, FailingAllocator};

/// Creates a [`Vector`] holding the listed elements, with `capacity == len`.
///
/// Expands to a call to [`Vector::import`], so it evaluates to a
/// `Result<Vector<T>, VectorError>`.
///
/// ```rust
/// let vector = elastic_vec::vector![2u8, 4, 6].expect("Failed to vector![..]");
/// assert_eq!(vector.as_slice(), &[2, 4, 6]);
/// assert_eq!(vector.capacity(), 3);
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::Vector::import(&[])
    };
    ($($elmt:expr),+ $(,)?) => {
        $crate::Vector::import(&[$($elmt),+])
    };
}
