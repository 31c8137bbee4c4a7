use crate::distance::euclidean_distance;
use crate::kdtree::KDTree;
use crate::neighbors::NeighborSet;
use crate::points::PointSetRef;
use crate::r#trait::NearestNeighbors;
use crate::r#type::IndexableNum;

impl<N: IndexableNum> NearestNeighbors<N> for KDTree<'_, N> {
    fn points(&self) -> PointSetRef<'_, N> {
        self.points
    }

    fn nearest(&self, k: usize, query: &[N]) -> NeighborSet<N> {
        assert_eq!(
            query.len(),
            self.dim(),
            "query dimension does not match the indexed points"
        );

        let mut search = NearestSearch {
            tree: self,
            query,
            neighbors: NeighborSet::new(k),
            radius: N::infinity(),
            visited: 0,
        };
        search.visit(if self.is_empty() { None } else { Some(0) });

        log::trace!(
            "k-d tree knn (k = {}) visited {} of {} nodes",
            k,
            search.visited,
            self.num_items()
        );

        search.neighbors
    }
}

/// Per-query state shared by the whole traversal.
struct NearestSearch<'t, 'q, N: IndexableNum> {
    tree: &'t KDTree<'t, N>,
    query: &'q [N],
    neighbors: NeighborSet<N>,
    /// The current k-th best distance; subtrees farther than this from the query are skipped.
    radius: N,
    visited: usize,
}

impl<N: IndexableNum> NearestSearch<'_, '_, N> {
    fn visit(&mut self, slot: Option<u32>) {
        let Some(slot) = slot else {
            return;
        };
        let node = *self.tree.node(slot);
        let point = self.tree.points.point(node.point_index as usize);
        self.visited += 1;

        if self
            .neighbors
            .consider(node.point_index, euclidean_distance(point, self.query))
        {
            self.radius = self.neighbors.current_radius();
        }

        // signed distance from the query to the splitting plane
        let axis = node.axis as usize;
        let diff = point[axis] - self.query[axis];

        if diff >= N::zero() || self.radius > diff.abs() {
            self.visit(node.left);
        }

        // the left subtree may have shrunk the radius
        if diff <= N::zero() || self.radius > diff.abs() {
            self.visit(node.right);
        }
    }
}
