//! Exhaustive k-nearest-neighbor search, the baseline every index must agree with.

use crate::distance::euclidean_distance;
use crate::neighbors::NeighborSet;
use crate::points::PointSetRef;
use crate::r#trait::NearestNeighbors;
use crate::r#type::IndexableNum;

/// Answers k-nearest-neighbor queries by scanning every point.
///
/// Points are offered to the [`NeighborSet`] in ascending index order, so among points at
/// exactly equal distances the lowest index wins.
///
/// ```
/// use knn_index::{BruteForce, NearestNeighbors, PointSet};
///
/// let points = PointSet::try_new(vec![0., 0., 1., 0., 0., 1.], 2).unwrap();
/// let search = BruteForce::new(points.as_ref());
/// assert_eq!(search.knn(2, &[0.9, 0.1]), vec![1, 0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BruteForce<'a, N: IndexableNum> {
    points: PointSetRef<'a, N>,
}

impl<'a, N: IndexableNum> BruteForce<'a, N> {
    /// Search over `points`.
    pub fn new(points: PointSetRef<'a, N>) -> Self {
        Self { points }
    }
}

impl<N: IndexableNum> NearestNeighbors<N> for BruteForce<'_, N> {
    fn points(&self) -> PointSetRef<'_, N> {
        self.points
    }

    fn nearest(&self, k: usize, query: &[N]) -> NeighborSet<N> {
        assert_eq!(
            query.len(),
            self.points.dim(),
            "query dimension does not match the indexed points"
        );

        let mut neighbors = NeighborSet::new(k);
        for (i, point) in self.points.iter().enumerate() {
            neighbors.consider(i as u32, euclidean_distance(point, query));
        }
        neighbors
    }
}
