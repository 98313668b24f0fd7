// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for elastic crates.
//!
//! Exhaustive orderings for algorithms whose result must not depend on
//! the initial arrangement of their input (sorting, relocation, search).
//!
//! ## License
//!
//! GPL-3.0-only

mod permutations;

pub use permutations::{apply_permutation, for_each_permutation, index_permutations, permuted};
