// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Allocation core: the allocator capability and the raw element buffer.
//!
//! This is the only module that talks to an allocator. Every size handed to
//! the allocator has already been overflow-checked by [`array_layout`].

use core::alloc::Layout;
use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::error::VectorError;
use crate::header::array_layout;

/// Allocator capability consumed by [`Vector`](crate::Vector).
///
/// Requests never carry a zero-sized layout; empty buffers and zero-sized
/// element types are handled without calling the allocator.
///
/// # Safety
///
/// Implementations must return blocks that are valid for reads and writes
/// of `layout.size()` bytes and aligned to `layout.align()`, and must keep a
/// block valid until it is passed to `release` or successfully reallocated.
pub unsafe trait RawAllocator {
    /// Allocates a block for `layout`, or returns `None` if the request is
    /// refused.
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>>;

    /// Resizes the block at `ptr` from `old` to `new`, preserving the first
    /// `min(old.size(), new.size())` bytes.
    ///
    /// On `None` the original block is still valid and untouched.
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by this allocator for `old`, and
    /// `old.align() == new.align()`.
    unsafe fn reallocate(&self, ptr: NonNull<u8>, old: Layout, new: Layout)
    -> Option<NonNull<u8>>;

    /// Releases the block at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by this allocator for `layout` and not
    /// released since.
    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout);
}

/// The global allocator from `alloc::alloc`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Global;

unsafe impl RawAllocator for Global {
    #[inline]
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        debug_assert!(layout.size() != 0);
        // SAFETY: callers never pass a zero-sized layout.
        NonNull::new(unsafe { alloc::alloc::alloc(layout) })
    }

    #[inline]
    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old: Layout,
        new: Layout,
    ) -> Option<NonNull<u8>> {
        debug_assert_eq!(old.align(), new.align());
        debug_assert!(new.size() != 0);
        // SAFETY (PRECONDITIONS ARE MET): ptr came from `alloc` with `old`,
        // new size is non-zero and was produced by a valid `Layout`.
        NonNull::new(unsafe { alloc::alloc::realloc(ptr.as_ptr(), old, new.size()) })
    }

    #[inline]
    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY (PRECONDITIONS ARE MET): ptr came from `alloc` with `layout`.
        unsafe { alloc::alloc::dealloc(ptr.as_ptr(), layout) }
    }
}

/// Owned allocation of `capacity` slots of `T`.
///
/// Knows nothing about which slots are initialised; the length lives in
/// [`Vector`](crate::Vector).
pub(crate) struct RawBuf<T, A: RawAllocator> {
    ptr: NonNull<T>,
    capacity: usize,
    alloc: A,
    _marker: PhantomData<T>,
}

// SAFETY: RawBuf uniquely owns its allocation.
unsafe impl<T: Send, A: RawAllocator + Send> Send for RawBuf<T, A> {}
unsafe impl<T: Sync, A: RawAllocator + Sync> Sync for RawBuf<T, A> {}

impl<T, A: RawAllocator> RawBuf<T, A> {
    pub(crate) const fn new_in(alloc: A) -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            alloc,
            _marker: PhantomData,
        }
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub(crate) fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[inline(always)]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    #[inline(always)]
    pub(crate) fn allocator(&self) -> &A {
        &self.alloc
    }

    fn current_layout(&self) -> Layout {
        // SAFETY: this exact layout was validated by `array_layout` when the
        // current capacity was committed.
        unsafe {
            Layout::from_size_align_unchecked(
                core::mem::size_of::<T>() * self.capacity,
                core::mem::align_of::<T>(),
            )
        }
    }

    /// Reallocates to exactly `capacity` slots.
    ///
    /// On error nothing changes: pointer, capacity and contents are the same
    /// as before the call.
    pub(crate) fn resize(&mut self, capacity: usize) -> Result<(), VectorError> {
        let new_layout = array_layout::<T>(capacity)?;
        let old_layout = self.current_layout();

        let ptr = match (old_layout.size(), new_layout.size()) {
            (0, 0) => self.ptr,
            (0, _) => self
                .alloc
                .allocate(new_layout)
                .ok_or_else(|| refused(new_layout))?
                .cast(),
            (_, 0) => {
                // SAFETY (PRECONDITIONS ARE MET): the block was allocated by
                // `self.alloc` with `old_layout`.
                unsafe { self.alloc.release(self.ptr.cast(), old_layout) };
                NonNull::dangling()
            }
            (_, _) => {
                // SAFETY (PRECONDITIONS ARE MET): the block was allocated by
                // `self.alloc` with `old_layout`; both layouts share T's
                // alignment.
                unsafe {
                    self.alloc
                        .reallocate(self.ptr.cast(), old_layout, new_layout)
                }
                .ok_or_else(|| refused(new_layout))?
                .cast()
            }
        };

        tracing::trace!(
            old_capacity = self.capacity,
            new_capacity = capacity,
            "resized vector buffer"
        );

        self.ptr = ptr;
        self.capacity = capacity;

        Ok(())
    }
}

impl<T, A: RawAllocator> Drop for RawBuf<T, A> {
    fn drop(&mut self) {
        let layout = self.current_layout();

        if layout.size() != 0 {
            // SAFETY (PRECONDITIONS ARE MET): the block was allocated by
            // `self.alloc` with `layout` and is released exactly once.
            unsafe { self.alloc.release(self.ptr.cast(), layout) };
        }
    }
}

#[cold]
fn refused(layout: Layout) -> VectorError {
    tracing::debug!(bytes = layout.size(), "allocator refused request");

    VectorError::AllocationFailed {
        bytes: layout.size(),
    }
}
