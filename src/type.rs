use std::fmt::Debug;

use geo_traits::CoordTrait;
use num_traits::{Float, NumCast, ToPrimitive};

/// A trait for types that can be used for indexed coordinates.
///
/// This trait is sealed and cannot be implemented for external types. Searches need a real
/// square root and an infinity value for the pruning radius, so only floating point types
/// qualify.
pub trait IndexableNum:
    private::Sealed + Float + NumCast + ToPrimitive + Default + Debug + Send + Sync + bytemuck::Pod
{
    /// The number of bytes per element
    const BYTES_PER_ELEMENT: usize;
}

impl IndexableNum for f32 {
    const BYTES_PER_ELEMENT: usize = 4;
}

impl IndexableNum for f64 {
    const BYTES_PER_ELEMENT: usize = 8;
}

/// A single 2-D coordinate.
///
/// Used for the endpoints of the splitting segments produced by
/// [`split_segments`][crate::kdtree::KDTree::split_segments].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Coord<N: IndexableNum> {
    pub(crate) x: N,
    pub(crate) y: N,
}

impl<N: IndexableNum> Coord<N> {
    /// Create a new coordinate.
    pub fn new(x: N, y: N) -> Self {
        Self { x, y }
    }
}

impl<N: IndexableNum> CoordTrait for Coord<N> {
    type T = N;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.x,
            1 => self.y,
            _ => panic!("Invalid index of coord"),
        }
    }
}

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
