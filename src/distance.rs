//! Euclidean distance between points of equal dimension.

use crate::r#type::IndexableNum;

/// The squared Euclidean distance between `a` and `b`.
///
/// Both slices must have the same length; search entry points assert this once per query, so
/// here it is only checked in debug builds.
#[inline]
pub fn squared_distance<N: IndexableNum>(a: &[N], b: &[N]) -> N {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).fold(N::zero(), |acc, (&x, &y)| {
        let d = x - y;
        acc + d * d
    })
}

/// The Euclidean (L2) distance between `a` and `b`.
#[inline]
pub fn euclidean_distance<N: IndexableNum>(a: &[N], b: &[N]) -> N {
    squared_distance(a, b).sqrt()
}
