// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Permutation generators for exhaustive testing.

/// Heap's algorithm, iterative form. Visits every ordering of `indices`
/// exactly once, starting with the ordering it was given.
fn heap_visit<F>(indices: &mut [usize], visit: &mut F)
where
    F: FnMut(&[usize]),
{
    let n = indices.len();
    let mut counters = vec![0usize; n];

    visit(indices);

    let mut level = 1;
    while level < n {
        if counters[level] < level {
            let other = if level % 2 == 0 { 0 } else { counters[level] };
            indices.swap(other, level);
            visit(indices);

            counters[level] += 1;
            level = 1;
        } else {
            counters[level] = 0;
            level += 1;
        }
    }
}

/// Calls `visit` with every permutation of `[0, 1, ..., len - 1]`.
///
/// Nothing is visited for `len == 0`.
///
/// # Example
/// ```
/// use elastic_test_utils::index_permutations;
///
/// let mut seen = 0;
/// index_permutations(4, |_perm| seen += 1);
/// assert_eq!(seen, 24);
/// ```
pub fn index_permutations<F>(len: usize, mut visit: F)
where
    F: FnMut(&[usize]),
{
    if len == 0 {
        return;
    }

    let mut indices: Vec<usize> = (0..len).collect();
    heap_visit(&mut indices, &mut visit);
}

/// Rearranges `slice` in place so that position `i` receives the element
/// previously at `perm[i]`.
///
/// # Panics
///
/// Panics if `perm` is not a permutation of `0..slice.len()`.
///
/// # Example
/// ```
/// use elastic_test_utils::apply_permutation;
///
/// let mut letters = ['w', 'x', 'y', 'z'];
/// apply_permutation(&mut letters, &[1, 2, 3, 0]);
/// assert_eq!(letters, ['x', 'y', 'z', 'w']);
/// ```
pub fn apply_permutation<T>(slice: &mut [T], perm: &[usize]) {
    assert_eq!(slice.len(), perm.len(), "permutation length mismatch");

    let mut placed = vec![false; slice.len()];

    for start in 0..slice.len() {
        if placed[start] {
            continue;
        }

        // Walk the cycle through `start`, pulling each source into place.
        let mut dst = start;
        loop {
            placed[dst] = true;
            let src = perm[dst];

            if src == start {
                break;
            }

            assert!(!placed[src], "not a permutation: {src} appears twice");
            slice.swap(dst, src);
            dst = src;
        }
    }
}

/// Returns a copy of `items` rearranged by `perm`.
pub fn permuted<T: Clone>(items: &[T], perm: &[usize]) -> Vec<T> {
    assert_eq!(items.len(), perm.len(), "permutation length mismatch");

    perm.iter().map(|&src| items[src].clone()).collect()
}

/// Calls `visit` with every ordering of `items`.
///
/// # Example
/// ```
/// use elastic_test_utils::for_each_permutation;
///
/// let mut orderings = Vec::new();
/// for_each_permutation(&[1, 2, 3], |ordering| orderings.push(ordering.to_vec()));
///
/// orderings.sort();
/// orderings.dedup();
/// assert_eq!(orderings.len(), 6);
/// ```
pub fn for_each_permutation<T, F>(items: &[T], mut visit: F)
where
    T: Clone,
    F: FnMut(&[T]),
{
    index_permutations(items.len(), |perm| visit(&permuted(items, perm)));
}
