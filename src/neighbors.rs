//! A bounded, always-sorted set of the best candidates seen so far during a search.

use std::cmp::Ordering;

use crate::r#type::IndexableNum;

/// The index reported for a slot that was never filled. This only happens when fewer than `k`
/// points exist.
pub const EMPTY_INDEX: i32 = -1;

/// A candidate point and its distance from the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor<N: IndexableNum> {
    /// Index of the point in its [`PointSet`][crate::PointSet].
    pub index: u32,
    /// Euclidean distance from the query.
    pub distance: N,
}

/// The `k` closest candidates seen so far, kept sorted ascending by distance.
///
/// The set only changes through [`consider`][NeighborSet::consider]. On exactly equal
/// distances the candidate seen first wins: it is never evicted by an equally distant one,
/// and it stays ahead of equally distant candidates seen later.
#[derive(Debug, Clone)]
pub struct NeighborSet<N: IndexableNum> {
    k: usize,
    entries: Vec<Neighbor<N>>,
}

impl<N: IndexableNum> NeighborSet<N> {
    /// Create an empty set holding at most `k` neighbors.
    ///
    /// Panics if `k` is zero.
    pub fn new(k: usize) -> Self {
        assert!(k > 0, "k must be positive");
        Self {
            k,
            entries: Vec::with_capacity(k),
        }
    }

    /// Offer a candidate to the set.
    ///
    /// While the set has free slots the candidate is always inserted. Once full, the candidate
    /// replaces the farthest entry only if it is strictly closer. Returns `true` iff the
    /// contents changed.
    pub fn consider(&mut self, index: u32, distance: N) -> bool {
        if self.is_full() {
            // the farthest entry is last; evict the first one among equally far entries
            let farthest = self.entries[self.k - 1].distance;
            if distance.partial_cmp(&farthest) != Some(Ordering::Less) {
                return false;
            }
            let evict = self.entries.partition_point(|n| n.distance < farthest);
            self.entries.remove(evict);
        }

        // insert after any entries at an equal distance
        let pos = self.entries.partition_point(|n| n.distance <= distance);
        self.entries.insert(pos, Neighbor { index, distance });
        true
    }

    /// The distance beyond which no candidate can enter the set.
    ///
    /// This is infinite until the set is full, since any point, however far, is still needed
    /// to complete it.
    #[inline]
    pub fn current_radius(&self) -> N {
        if self.is_full() {
            self.entries[self.k - 1].distance
        } else {
            N::infinity()
        }
    }

    /// Point indexes in ascending distance order, padded to length `k` with [`EMPTY_INDEX`].
    pub fn to_ordered_indices(&self) -> Vec<i32> {
        let mut result: Vec<i32> = self.entries.iter().map(|n| n.index as i32).collect();
        result.resize(self.k, EMPTY_INDEX);
        result
    }

    /// The filled entries, in ascending distance order.
    pub fn neighbors(&self) -> &[Neighbor<N>] {
        &self.entries
    }

    /// The maximum number of neighbors this set holds.
    pub fn capacity(&self) -> usize {
        self.k
    }

    /// The number of filled slots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no candidate has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` once all `k` slots are filled.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.entries.len() == self.k
    }
}
