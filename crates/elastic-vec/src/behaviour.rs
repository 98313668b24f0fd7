// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Failure injection for allocation paths.
//!
//! Only available with the `test-utils` feature (and always under
//! `cfg(test)`).

use alloc::rc::Rc;
use core::alloc::Layout;
use core::cell::Cell;
use core::ptr::NonNull;

use crate::raw::{Global, RawAllocator};

/// Script deciding which allocator requests a [`FailingAllocator`] refuses.
///
/// Allocations and reallocations count as requests; releases never fail.
/// The behaviour is sticky: once set it stays active until changed or
/// until a counted script runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AllocatorBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every request is refused.
    FailAlways,
    /// The next `n` requests are refused, then behaviour returns to `None`.
    FailNext(usize),
    /// The next `n` requests succeed, every later one is refused.
    FailAfter(usize),
}

#[derive(Debug, Default)]
struct State {
    behaviour: Cell<AllocatorBehaviour>,
    requests: Cell<usize>,
    refused: Cell<usize>,
    live_blocks: Cell<usize>,
}

/// Allocator wrapper that refuses requests according to an
/// [`AllocatorBehaviour`].
///
/// Clones share their script and counters, so a handle kept by a test
/// observes every request made by the vector that owns the other clone.
///
/// # Example
///
/// ```rust
/// use elastic_vec::{AllocatorBehaviour, FailingAllocator, Vector};
///
/// let alloc = FailingAllocator::new();
/// let mut vector = Vector::new_in(alloc.clone());
///
/// alloc.change_behaviour(AllocatorBehaviour::FailAlways);
/// let result = vector.push(1u32);
///
/// assert!(result.is_err());
/// assert!(vector.is_empty());
/// // Both the growth target and the exact fallback were refused.
/// assert_eq!(alloc.refused(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FailingAllocator<A: RawAllocator = Global> {
    inner: A,
    state: Rc<State>,
}

impl FailingAllocator<Global> {
    /// Wraps the global allocator with no injected failures.
    pub fn new() -> Self {
        Self::wrap(Global)
    }
}

impl<A: RawAllocator> FailingAllocator<A> {
    /// Wraps `inner` with no injected failures.
    pub fn wrap(inner: A) -> Self {
        Self {
            inner,
            state: Rc::new(State::default()),
        }
    }

    /// Replaces the active script.
    pub fn change_behaviour(&self, behaviour: AllocatorBehaviour) {
        self.state.behaviour.set(behaviour);
    }

    /// Returns the active script.
    pub fn behaviour(&self) -> AllocatorBehaviour {
        self.state.behaviour.get()
    }

    /// Number of allocate/reallocate requests seen so far.
    pub fn requests(&self) -> usize {
        self.state.requests.get()
    }

    /// Number of requests refused so far.
    pub fn refused(&self) -> usize {
        self.state.refused.get()
    }

    /// Number of blocks handed out and not yet released.
    pub fn live_blocks(&self) -> usize {
        self.state.live_blocks.get()
    }

    fn admit(&self) -> bool {
        let state = &self.state;
        state.requests.set(state.requests.get() + 1);

        let admitted = match state.behaviour.get() {
            AllocatorBehaviour::None => true,
            AllocatorBehaviour::FailAlways => false,
            AllocatorBehaviour::FailNext(0) => {
                state.behaviour.set(AllocatorBehaviour::None);
                true
            }
            AllocatorBehaviour::FailNext(n) => {
                let next = match n - 1 {
                    0 => AllocatorBehaviour::None,
                    left => AllocatorBehaviour::FailNext(left),
                };
                state.behaviour.set(next);
                false
            }
            AllocatorBehaviour::FailAfter(0) => false,
            AllocatorBehaviour::FailAfter(n) => {
                state.behaviour.set(AllocatorBehaviour::FailAfter(n - 1));
                true
            }
        };

        if !admitted {
            state.refused.set(state.refused.get() + 1);
        }

        admitted
    }
}

unsafe impl<A: RawAllocator> RawAllocator for FailingAllocator<A> {
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        if !self.admit() {
            return None;
        }

        let ptr = self.inner.allocate(layout)?;
        self.state.live_blocks.set(self.state.live_blocks.get() + 1);

        Some(ptr)
    }

    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old: Layout,
        new: Layout,
    ) -> Option<NonNull<u8>> {
        if !self.admit() {
            return None;
        }

        // SAFETY (PRECONDITIONS ARE MET): forwarded from the caller.
        unsafe { self.inner.reallocate(ptr, old, new) }
    }

    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        self.state.live_blocks.set(self.state.live_blocks.get() - 1);

        // SAFETY (PRECONDITIONS ARE MET): forwarded from the caller.
        unsafe { self.inner.release(ptr, layout) }
    }
}
