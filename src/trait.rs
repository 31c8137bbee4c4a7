use geo_traits::CoordTrait;
#[cfg(feature = "rayon")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::indices::IndexMatrix;
use crate::neighbors::NeighborSet;
use crate::points::PointSetRef;
use crate::r#type::IndexableNum;

/// A trait for answering exact k-nearest-neighbor queries over a fixed set of points.
///
/// Every implementation returns the same neighbors for the same query, up to the order in
/// which it visits points that lie at exactly equal distances.
pub trait NearestNeighbors<N: IndexableNum>: Sync {
    /// The points being searched.
    fn points(&self) -> PointSetRef<'_, N>;

    /// Search for the `k` nearest points to `query`, returning them with their distances.
    ///
    /// Panics if `k` is zero or `query` does not have the dimension of the points.
    fn nearest(&self, k: usize, query: &[N]) -> NeighborSet<N>;

    /// Search for the `k` nearest points to `query`.
    ///
    /// Returns exactly `k` point indexes in ascending distance order. If fewer than `k`
    /// points exist, the remaining slots hold
    /// [`EMPTY_INDEX`][crate::neighbors::EMPTY_INDEX].
    fn knn(&self, k: usize, query: &[N]) -> Vec<i32> {
        self.nearest(k, query).to_ordered_indices()
    }

    /// Search for the `k` nearest points to a coordinate.
    fn knn_coord(&self, k: usize, coord: &impl CoordTrait<T = N>) -> Vec<i32> {
        let query: Vec<N> = (0..coord.dim().size())
            .map(|n| coord.nth_or_panic(n))
            .collect();
        self.knn(k, &query)
    }

    /// Run one query per point in `queries`, collecting the results row by row.
    ///
    /// With the `rayon` feature, queries run in parallel. Each query owns its own
    /// [`NeighborSet`], so nothing is shared between them but the immutable points and index.
    fn knn_batch(&self, k: usize, queries: PointSetRef<'_, N>) -> IndexMatrix {
        assert_eq!(
            queries.dim(),
            self.points().dim(),
            "query dimension does not match the indexed points"
        );

        #[cfg(feature = "rayon")]
        let rows: Vec<Vec<i32>> = (0..queries.num_items())
            .into_par_iter()
            .map(|i| self.knn(k, queries.point(i)))
            .collect();

        #[cfg(not(feature = "rayon"))]
        let rows: Vec<Vec<i32>> = queries.iter().map(|query| self.knn(k, query)).collect();

        IndexMatrix::new(k, rows.concat())
    }
}
