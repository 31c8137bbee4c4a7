use crate::kdtree::{KDTree, Node};
use crate::neighbors::EMPTY_INDEX;
use crate::points::PointSet;
use crate::r#trait::NearestNeighbors;
use crate::test::{five_points, random_points};

fn walk_height(node: Option<Node<'_, f64>>) -> usize {
    match node {
        None => 0,
        Some(node) => 1 + walk_height(node.left_child()).max(walk_height(node.right_child())),
    }
}

/// Collect the point indexes of a subtree.
fn subtree_points(node: Option<Node<'_, f64>>, out: &mut Vec<u32>) {
    if let Some(node) = node {
        out.push(node.point_index());
        subtree_points(node.left_child(), out);
        subtree_points(node.right_child(), out);
    }
}

fn check_split_invariant(points: &PointSet<f64>, node: Option<Node<'_, f64>>, depth: usize) {
    let Some(node) = node else {
        return;
    };
    assert_eq!(node.axis(), depth % points.dim());
    let axis = node.axis();
    let split = node.split_value();

    let mut left = vec![];
    subtree_points(node.left_child(), &mut left);
    for i in left {
        assert!(points.point(i as usize)[axis] <= split);
    }

    let mut right = vec![];
    subtree_points(node.right_child(), &mut right);
    for i in right {
        assert!(points.point(i as usize)[axis] >= split);
    }

    check_split_invariant(points, node.left_child(), depth + 1);
    check_split_invariant(points, node.right_child(), depth + 1);
}

#[test]
fn height_is_balanced() {
    for num_items in [1, 2, 3, 4, 7, 8, 9, 100, 1023, 1024, 1025] {
        let points = random_points(num_items as u64, num_items, 2);
        let tree = KDTree::new(points.as_ref());
        let expected = (num_items as f64 + 1.0).log2().ceil() as usize;

        assert_eq!(tree.height(), expected, "n = {num_items}");
        assert_eq!(walk_height(tree.root()), expected, "n = {num_items}");
    }
}

#[test]
fn every_point_appears_once() {
    let points = random_points(21, 333, 3);
    let tree = KDTree::new(points.as_ref());

    let mut seen = vec![];
    subtree_points(tree.root(), &mut seen);
    seen.sort();
    let expected: Vec<u32> = (0..333).collect();
    assert_eq!(seen, expected);
    assert_eq!(tree.num_items(), 333);
}

#[test]
fn splits_respect_axis_order() {
    for dim in [1, 2, 3, 5] {
        let points = random_points(30 + dim as u64, 257, dim);
        let tree = KDTree::new(points.as_ref());
        check_split_invariant(&points, tree.root(), 0);
    }
}

#[test]
fn splits_respect_axis_order_with_duplicates() {
    // many equal coordinates on both axes
    let coords: Vec<f64> = (0..200).flat_map(|i| [(i % 4) as f64, (i % 3) as f64]).collect();
    let points = PointSet::try_new(coords, 2).unwrap();
    let tree = KDTree::new(points.as_ref());
    check_split_invariant(&points, tree.root(), 0);
}

#[test]
fn median_placement() {
    let points = five_points();
    let tree = KDTree::new(points.as_ref());

    // sorted by x: [0, 2, 1, 3, 4]; the median position 2 holds point 1 = (1, 0)
    let root = tree.root().unwrap();
    assert_eq!(root.point_index(), 1);
    assert_eq!(root.axis(), 0);

    // left half [0, 2] sorted by y: [0, 2]; median position 1 holds point 2 = (0, 1)
    let left = root.left_child().unwrap();
    assert_eq!(left.point_index(), 2);
    assert_eq!(left.axis(), 1);
    assert_eq!(left.left_child().unwrap().point_index(), 0);
    assert!(left.right_child().is_none());

    // right half [3, 4] sorted by y: [3, 4]; median position 1 holds point 4 = (5, 6)
    let right = root.right_child().unwrap();
    assert_eq!(right.point_index(), 4);
    assert_eq!(right.left_child().unwrap().point_index(), 3);
    assert!(right.left_child().unwrap().is_leaf());
    assert!(right.is_parent());
}

#[test]
fn construction_is_deterministic() {
    let coords: Vec<f64> = (0..300).flat_map(|i| [(i % 5) as f64, (i % 7) as f64]).collect();
    let points = PointSet::try_new(coords, 2).unwrap();
    let a = KDTree::new(points.as_ref());
    let b = KDTree::new(points.as_ref());
    assert_eq!(a.nodes, b.nodes);
}

#[test]
fn empty_tree() {
    let points = PointSet::<f64>::try_new(vec![], 2).unwrap();
    let tree = KDTree::new(points.as_ref());
    assert!(tree.is_empty());
    assert!(tree.root().is_none());
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.knn(3, &[1., 1.]), vec![EMPTY_INDEX; 3]);
}

#[test]
fn f32_points() {
    let points = PointSet::<f32>::try_new(vec![0., 0., 3., 4., -1., 0.5], 2).unwrap();
    let tree = KDTree::new(points.as_ref());
    assert_eq!(tree.knn(2, &[2.5_f32, 3.5]), vec![1, 0]);
}

#[test]
#[should_panic]
fn rejects_query_of_wrong_dimension() {
    let points = five_points();
    KDTree::new(points.as_ref()).knn(1, &[0.]);
}

#[test]
#[should_panic]
fn rejects_zero_k() {
    let points = five_points();
    KDTree::new(points.as_ref()).knn(0, &[0., 0.]);
}
