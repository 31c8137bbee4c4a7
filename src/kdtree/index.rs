use crate::kdtree::builder::KDTreeBuilder;
use crate::kdtree::traversal::Node;
use crate::points::PointSetRef;
use crate::r#type::IndexableNum;

/// A node of the tree as stored in the arena.
///
/// Children are arena slots rather than owned boxes; every slot is referenced by at most one
/// parent, so the arena still forms a strict binary tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct KDNode {
    /// Index of this node's point in the point set.
    pub(crate) point_index: u32,
    /// Axis along which this node splits its children.
    pub(crate) axis: u32,
    pub(crate) left: Option<u32>,
    pub(crate) right: Option<u32>,
}

/// An immutable, balanced k-d tree.
///
/// The tree borrows the points it was built from and cannot outlive them. Usually this will
/// be created via [`KDTreeBuilder`] or [`KDTree::new`].
///
/// ```
/// use knn_index::kdtree::KDTree;
/// use knn_index::{NearestNeighbors, PointSet};
///
/// let points = PointSet::try_new(vec![0., 0., 1., 0., 0., 1., 5., 5., 5., 6.], 2).unwrap();
/// let tree = KDTree::new(points.as_ref());
/// assert_eq!(tree.knn(2, &[0., 0.1]), vec![0, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct KDTree<'a, N: IndexableNum> {
    pub(crate) points: PointSetRef<'a, N>,
    pub(crate) nodes: Vec<KDNode>,
    pub(crate) height: usize,
}

impl<'a, N: IndexableNum> KDTree<'a, N> {
    /// Build a tree over `points`.
    pub fn new(points: PointSetRef<'a, N>) -> Self {
        KDTreeBuilder::new(points).finish()
    }

    /// The number of points in this tree.
    pub fn num_items(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree holds no points.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The dimension of the indexed points.
    pub fn dim(&self) -> usize {
        self.points.dim()
    }

    /// The number of levels of the tree: `ceil(log2(n + 1))` for `n` points.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Access the root node of the KDTree for manual traversal, or `None` if it is empty.
    pub fn root(&self) -> Option<Node<'_, N>> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(Node::new(self, 0))
        }
    }

    #[inline]
    pub(crate) fn node(&self, slot: u32) -> &KDNode {
        &self.nodes[slot as usize]
    }
}
