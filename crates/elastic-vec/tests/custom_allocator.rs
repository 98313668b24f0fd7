// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod custom_allocator_tests {
    use core::alloc::Layout;
    use core::cell::Cell;
    use core::ptr::NonNull;

    use elastic_vec::{Global, RawAllocator, Vector, VectorError};

    /// Refuses any request that would push the bytes in use past a budget.
    struct Budget<'a> {
        limit: usize,
        in_use: &'a Cell<usize>,
    }

    unsafe impl RawAllocator for Budget<'_> {
        fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
            if self.in_use.get() + layout.size() > self.limit {
                return None;
            }

            let ptr = Global.allocate(layout)?;
            self.in_use.set(self.in_use.get() + layout.size());

            Some(ptr)
        }

        unsafe fn reallocate(
            &self,
            ptr: NonNull<u8>,
            old: Layout,
            new: Layout,
        ) -> Option<NonNull<u8>> {
            let in_use = self.in_use.get() - old.size();

            if in_use + new.size() > self.limit {
                return None;
            }

            let ptr = unsafe { Global.reallocate(ptr, old, new) }?;
            self.in_use.set(in_use + new.size());

            Some(ptr)
        }

        unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
            self.in_use.set(self.in_use.get() - layout.size());

            unsafe { Global.release(ptr, layout) }
        }
    }

    #[test]
    fn test_growth_falls_back_under_budget() {
        let in_use = Cell::new(0);
        let mut vector = Vector::new_in(Budget {
            limit: 100,
            in_use: &in_use,
        });

        for i in 0u8..100 {
            vector.push(i).expect("Failed to push(..)");
        }

        assert_eq!(vector.capacity(), 100);
        assert_eq!(in_use.get(), 100);

        let result = vector.push(100);

        assert_eq!(result, Err(VectorError::AllocationFailed { bytes: 101 }));
        assert_eq!(vector.len(), 100);
    }

    #[test]
    fn test_shrink_returns_bytes_to_budget() {
        let in_use = Cell::new(0);
        let mut vector = Vector::new_in(Budget {
            limit: 1_000,
            in_use: &in_use,
        });

        vector.inject_with(0, 500, |k| k as u16).expect("Failed to inject_with(..)");
        assert_eq!(in_use.get(), 1_000);

        vector.truncate(100);
        assert_eq!(vector.capacity(), 120);
        assert_eq!(in_use.get(), 240);

        vector.clear();
        assert_eq!(in_use.get(), 0);
    }

    #[test]
    fn test_drop_returns_every_byte() {
        let in_use = Cell::new(0);

        {
            let mut vector = Vector::new_in(Budget {
                limit: usize::MAX,
                in_use: &in_use,
            });
            vector.extend(&[7u64; 33]).expect("Failed to extend(..)");
            assert!(in_use.get() >= 33 * 8);
        }

        assert_eq!(in_use.get(), 0);
    }
}
