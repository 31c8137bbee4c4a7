#![doc = include_str!("../README.md")]

pub mod brute_force;
pub mod distance;
mod error;
pub mod indices;
pub mod io;
pub mod kdtree;
pub mod neighbors;
pub mod points;
mod r#trait;
mod r#type;

pub use brute_force::BruteForce;
pub use error::{KnnIndexError, Result};
pub use indices::IndexMatrix;
pub use kdtree::KDTree;
pub use neighbors::{Neighbor, NeighborSet, EMPTY_INDEX};
pub use points::{PointSet, PointSetRef};
pub use r#trait::NearestNeighbors;
pub use r#type::{Coord, IndexableNum};

#[cfg(test)]
pub(crate) mod test;
