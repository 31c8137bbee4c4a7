//! Utilities to traverse the KDTree structure.

use crate::kdtree::KDTree;
use crate::r#type::IndexableNum;

/// A node in the KDTree.
#[derive(Debug, Clone, Copy)]
pub struct Node<'a, N: IndexableNum> {
    /// The tree that this node is a reference onto
    tree: &'a KDTree<'a, N>,

    /// The arena slot of this node
    slot: u32,
}

impl<'a, N: IndexableNum> Node<'a, N> {
    pub(crate) fn new(tree: &'a KDTree<'a, N>, slot: u32) -> Self {
        Self { tree, slot }
    }

    /// The index of this node's point in the point set.
    #[inline]
    pub fn point_index(&self) -> u32 {
        self.tree.node(self.slot).point_index
    }

    /// The axis that the children of this node are split over.
    #[inline]
    pub fn axis(&self) -> usize {
        self.tree.node(self.slot).axis as usize
    }

    /// The coordinates of this node's point.
    #[inline]
    pub fn point(&self) -> &'a [N] {
        self.tree.points.point(self.point_index() as usize)
    }

    /// The coordinate of the splitting plane on [`axis`][Node::axis].
    #[inline]
    pub fn split_value(&self) -> N {
        self.point()[self.axis()]
    }

    /// The child node holding points at or below the split value.
    pub fn left_child(&self) -> Option<Node<'a, N>> {
        self.tree
            .node(self.slot)
            .left
            .map(|slot| Node::new(self.tree, slot))
    }

    /// The child node holding points at or above the split value.
    pub fn right_child(&self) -> Option<Node<'a, N>> {
        self.tree
            .node(self.slot)
            .right
            .map(|slot| Node::new(self.tree, slot))
    }

    /// Returns `true` if this is a leaf node without children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        let node = self.tree.node(self.slot);
        node.left.is_none() && node.right.is_none()
    }

    /// Returns `true` if this is an intermediate node with children.
    #[inline]
    pub fn is_parent(&self) -> bool {
        !self.is_leaf()
    }
}
