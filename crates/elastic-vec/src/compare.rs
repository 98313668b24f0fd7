// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Whole-vector equality and lexicographic ordering.
//!
//! The free functions accept `Option<&Vector>` so that "no vector" can be
//! compared too: two absent vectors are equal, and an absent vector orders
//! before every present one (including an empty one).

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use crate::raw::RawAllocator;
use crate::vector::Vector;

/// Equality of two possibly absent vectors under `pred`.
///
/// `pred` is never called when the lengths differ, and evaluation stops at
/// the first pair it rejects.
///
/// # Example
///
/// ```rust
/// use elastic_vec::{Vector, compare};
///
/// let a = Vector::import(&[1, 2, 3]).expect("Failed to import(..)");
/// let b = Vector::import(&[1, 2, 3]).expect("Failed to import(..)");
///
/// let absent: Option<&Vector<i32>> = None;
///
/// assert!(compare::eq(Some(&a), Some(&b), |x, y| x == y));
/// assert!(compare::eq(absent, absent, |x, y| x == y));
/// assert!(!compare::eq(Some(&a), absent, |x, y| x == y));
/// ```
pub fn eq<T, U, A, B, F>(a: Option<&Vector<T, A>>, b: Option<&Vector<U, B>>, pred: F) -> bool
where
    T: Copy,
    U: Copy,
    A: RawAllocator,
    B: RawAllocator,
    F: FnMut(&T, &U) -> bool,
{
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.eq_by(b, pred),
        _ => false,
    }
}

/// [`eq`] with a predicate that receives an explicit context.
pub fn eq_with<T, U, A, B, C, F>(
    a: Option<&Vector<T, A>>,
    b: Option<&Vector<U, B>>,
    mut pred: F,
    ctx: &mut C,
) -> bool
where
    T: Copy,
    U: Copy,
    A: RawAllocator,
    B: RawAllocator,
    F: FnMut(&T, &U, &mut C) -> bool,
{
    eq(a, b, |x, y| pred(x, y, ctx))
}

/// Lexicographic ordering of two possibly absent vectors under `cmp`.
///
/// Elements are compared pairwise until one differs; if one vector is a
/// prefix of the other, the shorter orders first.
pub fn cmp<T, U, A, B, F>(a: Option<&Vector<T, A>>, b: Option<&Vector<U, B>>, cmp: F) -> Ordering
where
    T: Copy,
    U: Copy,
    A: RawAllocator,
    B: RawAllocator,
    F: FnMut(&T, &U) -> Ordering,
{
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.cmp_by(b, cmp),
    }
}

/// [`cmp`] with a comparator that receives an explicit context.
pub fn cmp_with<T, U, A, B, C, F>(
    a: Option<&Vector<T, A>>,
    b: Option<&Vector<U, B>>,
    mut cmp_fn: F,
    ctx: &mut C,
) -> Ordering
where
    T: Copy,
    U: Copy,
    A: RawAllocator,
    B: RawAllocator,
    F: FnMut(&T, &U, &mut C) -> Ordering,
{
    cmp(a, b, |x, y| cmp_fn(x, y, ctx))
}

impl<T, A> Vector<T, A>
where
    T: Copy,
    A: RawAllocator,
{
    /// Equality with `other` under `pred`, short-circuiting on a length
    /// mismatch and on the first rejected pair.
    pub fn eq_by<U, B, F>(&self, other: &Vector<U, B>, mut pred: F) -> bool
    where
        U: Copy,
        B: RawAllocator,
        F: FnMut(&T, &U) -> bool,
    {
        if self.len() != other.len() {
            return false;
        }

        self.iter().zip(other.iter()).all(|(a, b)| pred(a, b))
    }

    /// Lexicographic ordering against `other` under `cmp`.
    pub fn cmp_by<U, B, F>(&self, other: &Vector<U, B>, mut cmp: F) -> Ordering
    where
        U: Copy,
        B: RawAllocator,
        F: FnMut(&T, &U) -> Ordering,
    {
        for (a, b) in self.iter().zip(other.iter()) {
            match cmp(a, b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }

        self.len().cmp(&other.len())
    }
}

impl<T, U, A, B> PartialEq<Vector<U, B>> for Vector<T, A>
where
    T: Copy + PartialEq<U>,
    U: Copy,
    A: RawAllocator,
    B: RawAllocator,
{
    fn eq(&self, other: &Vector<U, B>) -> bool {
        self.eq_by(other, |a, b| a == b)
    }
}

impl<T, A> Eq for Vector<T, A>
where
    T: Copy + Eq,
    A: RawAllocator,
{
}

impl<T, A> PartialOrd for Vector<T, A>
where
    T: Copy + PartialOrd,
    A: RawAllocator,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T, A> Ord for Vector<T, A>
where
    T: Copy + Ord,
    A: RawAllocator,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_by(other, Ord::cmp)
    }
}

impl<T, A> Hash for Vector<T, A>
where
    T: Copy + Hash,
    A: RawAllocator,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}
