//! A balanced k-d tree over a borrowed point set, for exact k-nearest-neighbor search.

#![warn(missing_docs)]

mod builder;
mod index;
mod search;
mod svg;
mod traversal;

pub use builder::KDTreeBuilder;
pub use index::KDTree;
pub use svg::SplitSegment;
pub use traversal::Node;

#[cfg(test)]
mod test;
