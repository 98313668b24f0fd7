// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod behaviour;
mod debug;

use crate::behaviour::FailingAllocator;
use crate::vector::Vector;

/// Vector of `0..length` backed by a fresh [`FailingAllocator`], together
/// with a handle on that allocator.
pub(crate) fn counted(length: u32) -> (FailingAllocator, Vector<u32, FailingAllocator>) {
    let alloc = FailingAllocator::new();
    let elmts: Vec<u32> = (0..length).collect();
    let vector = Vector::import_in(&elmts, alloc.clone()).expect("Failed to import_in(..)");

    (alloc, vector)
}
