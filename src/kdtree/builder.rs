use std::cmp::Ordering;

use crate::kdtree::index::{KDNode, KDTree};
use crate::points::PointSetRef;
use crate::r#type::IndexableNum;

/// A builder to create a [`KDTree`].
///
/// The tree is built by recursive median splitting: at depth `depth` the remaining point
/// indexes are sorted by their coordinate on axis `depth % dim`, the point at position
/// `len / 2` becomes the node, and the halves before and after it become the left and right
/// subtrees.
pub struct KDTreeBuilder<'a, N: IndexableNum> {
    points: PointSetRef<'a, N>,
}

impl<'a, N: IndexableNum> KDTreeBuilder<'a, N> {
    /// Create a new builder over the provided points.
    pub fn new(points: PointSetRef<'a, N>) -> Self {
        assert!(points.dim() > 0, "dimension must be positive");
        assert!(points.num_items() <= i32::MAX as usize);
        Self { points }
    }

    /// Consume this builder, performing the median splits and generating a KDTree ready for
    /// queries.
    pub fn finish(self) -> KDTree<'a, N> {
        let num_items = self.points.num_items();
        let mut ids: Vec<u32> = (0..num_items as u32).collect();

        let mut build = TreeBuild {
            points: self.points,
            nodes: Vec::with_capacity(num_items),
            height: 0,
        };
        build.node(&mut ids, 0);

        log::debug!(
            "built k-d tree over {} points of dimension {} with height {}",
            num_items,
            self.points.dim(),
            build.height
        );

        KDTree {
            points: self.points,
            nodes: build.nodes,
            height: build.height,
        }
    }
}

/// State threaded through the recursive construction.
struct TreeBuild<'a, N: IndexableNum> {
    points: PointSetRef<'a, N>,
    nodes: Vec<KDNode>,
    height: usize,
}

impl<N: IndexableNum> TreeBuild<'_, N> {
    /// Build the subtree over `ids` at `depth`, returning the arena slot of its root.
    ///
    /// Nodes are pushed in pre-order, so the root of the whole tree lands in slot 0.
    fn node(&mut self, ids: &mut [u32], depth: usize) -> Option<u32> {
        if ids.is_empty() {
            return None;
        }

        let dim = self.points.dim();
        let axis = depth % dim;
        let coords = self.points.coords();

        // a stable sort keeps node placement reproducible when coordinates tie
        ids.sort_by(|&a, &b| {
            let a = coords[a as usize * dim + axis];
            let b = coords[b as usize * dim + axis];
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        });

        let median = ids.len() / 2;
        let slot = self.nodes.len() as u32;
        self.nodes.push(KDNode {
            point_index: ids[median],
            axis: axis as u32,
            left: None,
            right: None,
        });
        self.height = self.height.max(depth + 1);

        let (left_ids, rest) = ids.split_at_mut(median);
        let left = self.node(left_ids, depth + 1);
        let right = self.node(&mut rest[1..], depth + 1);

        let node = &mut self.nodes[slot as usize];
        node.left = left;
        node.right = right;

        Some(slot)
    }
}
