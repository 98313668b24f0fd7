// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;

use crate::behaviour::{AllocatorBehaviour, FailingAllocator};
use crate::raw::RawAllocator;

fn try_allocate(alloc: &FailingAllocator) -> bool {
    let layout = Layout::new::<u64>();

    match alloc.allocate(layout) {
        Some(ptr) => {
            unsafe { alloc.release(ptr, layout) };
            true
        }
        None => false,
    }
}

#[test]
fn test_default_behaviour_is_none() {
    let alloc = FailingAllocator::new();

    assert_eq!(alloc.behaviour(), AllocatorBehaviour::None);
    assert!(try_allocate(&alloc));
    assert_eq!(alloc.requests(), 1);
    assert_eq!(alloc.refused(), 0);
}

#[test]
fn test_fail_always_is_sticky() {
    let alloc = FailingAllocator::new();
    alloc.change_behaviour(AllocatorBehaviour::FailAlways);

    for _ in 0..5 {
        assert!(!try_allocate(&alloc));
    }

    assert_eq!(alloc.behaviour(), AllocatorBehaviour::FailAlways);
    assert_eq!(alloc.refused(), 5);
}

#[test]
fn test_fail_next_runs_out() {
    let alloc = FailingAllocator::new();
    alloc.change_behaviour(AllocatorBehaviour::FailNext(2));

    assert!(!try_allocate(&alloc));
    assert_eq!(alloc.behaviour(), AllocatorBehaviour::FailNext(1));

    assert!(!try_allocate(&alloc));
    assert_eq!(alloc.behaviour(), AllocatorBehaviour::None);

    assert!(try_allocate(&alloc));
    assert_eq!(alloc.refused(), 2);
}

#[test]
fn test_fail_next_zero_admits() {
    let alloc = FailingAllocator::new();
    alloc.change_behaviour(AllocatorBehaviour::FailNext(0));

    assert!(try_allocate(&alloc));
    assert_eq!(alloc.behaviour(), AllocatorBehaviour::None);
}

#[test]
fn test_fail_after_counts_down() {
    let alloc = FailingAllocator::new();
    alloc.change_behaviour(AllocatorBehaviour::FailAfter(2));

    assert!(try_allocate(&alloc));
    assert!(try_allocate(&alloc));
    assert!(!try_allocate(&alloc));
    assert!(!try_allocate(&alloc));

    assert_eq!(alloc.behaviour(), AllocatorBehaviour::FailAfter(0));
    assert_eq!(alloc.requests(), 4);
    assert_eq!(alloc.refused(), 2);
}

#[test]
fn test_clones_share_state() {
    let alloc = FailingAllocator::new();
    let other = alloc.clone();

    other.change_behaviour(AllocatorBehaviour::FailAlways);
    assert!(!try_allocate(&alloc));

    assert_eq!(other.refused(), 1);
    assert_eq!(alloc.behaviour(), AllocatorBehaviour::FailAlways);
}

#[test]
fn test_reallocate_counts_as_request() {
    let alloc = FailingAllocator::new();
    let old = Layout::array::<u8>(4).expect("Failed to Layout::array(4)");
    let new = Layout::array::<u8>(8).expect("Failed to Layout::array(8)");

    let ptr = alloc.allocate(old).expect("Failed to allocate(..)");
    alloc.change_behaviour(AllocatorBehaviour::FailNext(1));

    let refused = unsafe { alloc.reallocate(ptr, old, new) };
    assert!(refused.is_none());

    let ptr = unsafe { alloc.reallocate(ptr, old, new) }.expect("Failed to reallocate(..)");
    assert_eq!(alloc.live_blocks(), 1);

    unsafe { alloc.release(ptr, new) };
    assert_eq!(alloc.live_blocks(), 0);
    assert_eq!(alloc.requests(), 3);
}
