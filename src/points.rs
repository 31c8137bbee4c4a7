//! Row-major storage of the points every search strategy queries.
//!
//! A [`PointSet`] owns its coordinates. Indexes and brute-force searches never take ownership;
//! they hold a [`PointSetRef`] borrowed from it, so the borrow checker guarantees that no index
//! outlives the points it was built from.

use crate::error::{KnnIndexError, Result};
use crate::r#type::IndexableNum;

/// An owned, immutable set of `num_items` points of dimension `dim`, stored contiguously in
/// point-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet<N: IndexableNum> {
    pub(crate) coords: Vec<N>,
    pub(crate) dim: usize,
}

impl<N: IndexableNum> PointSet<N> {
    /// Create a point set from interleaved coordinates.
    ///
    /// Fails if `dim` is zero, if the number of coordinates is not a multiple of `dim`, if any
    /// coordinate is NaN, or if there are more points than fit in an `i32` point index.
    pub fn try_new(coords: Vec<N>, dim: usize) -> Result<Self> {
        validate(&coords, dim)?;
        Ok(Self { coords, dim })
    }

    /// Create a point set of dimension `dim` from an iterator of points.
    pub fn from_points<P: AsRef<[N]>>(
        dim: usize,
        points: impl IntoIterator<Item = P>,
    ) -> Result<Self> {
        let mut coords = vec![];
        for point in points {
            let point = point.as_ref();
            if point.len() != dim {
                return Err(KnnIndexError::DimensionMismatch {
                    expected: dim,
                    actual: point.len(),
                });
            }
            coords.extend_from_slice(point);
        }
        Self::try_new(coords, dim)
    }

    /// Consume this point set, returning the interleaved coordinates.
    pub fn into_inner(self) -> Vec<N> {
        self.coords
    }

    /// Borrow this point set.
    pub fn as_ref(&self) -> PointSetRef<'_, N> {
        PointSetRef {
            coords: &self.coords,
            dim: self.dim,
        }
    }

    /// The number of points.
    pub fn num_items(&self) -> usize {
        self.coords.len() / self.dim
    }

    /// The dimension of every point.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The coordinates of point `index`.
    pub fn point(&self, index: usize) -> &[N] {
        &self.coords[index * self.dim..(index + 1) * self.dim]
    }
}

impl<N: IndexableNum> AsRef<[N]> for PointSet<N> {
    fn as_ref(&self) -> &[N] {
        &self.coords
    }
}

/// A borrowed view onto a set of points.
///
/// Usually this will be created from a [`PointSet`] via its [`as_ref`][PointSet::as_ref]
/// method, but it can also be created from any existing coordinate slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointSetRef<'a, N: IndexableNum> {
    pub(crate) coords: &'a [N],
    pub(crate) dim: usize,
}

impl<'a, N: IndexableNum> PointSetRef<'a, N> {
    /// Wrap an existing slice of interleaved coordinates, with the same validation as
    /// [`PointSet::try_new`].
    pub fn try_new(coords: &'a [N], dim: usize) -> Result<Self> {
        validate(coords, dim)?;
        Ok(Self { coords, dim })
    }

    /// The number of points.
    #[inline]
    pub fn num_items(&self) -> usize {
        self.coords.len() / self.dim
    }

    /// Returns `true` if there are no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// The dimension of every point.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The underlying interleaved coordinates.
    #[inline]
    pub fn coords(&self) -> &'a [N] {
        self.coords
    }

    /// The coordinates of point `index`.
    #[inline]
    pub fn point(&self, index: usize) -> &'a [N] {
        &self.coords[index * self.dim..(index + 1) * self.dim]
    }

    /// Iterate over all points in index order.
    pub fn iter(&self) -> impl Iterator<Item = &'a [N]> + 'a {
        self.coords.chunks_exact(self.dim)
    }
}

fn validate<N: IndexableNum>(coords: &[N], dim: usize) -> Result<()> {
    if dim == 0 {
        return Err(KnnIndexError::General(
            "Point dimension must be positive.".to_string(),
        ));
    }
    if coords.len() % dim != 0 {
        return Err(KnnIndexError::General(format!(
            "{} coordinates do not divide into points of dimension {}.",
            coords.len(),
            dim
        )));
    }
    if coords.len() / dim > i32::MAX as usize {
        return Err(KnnIndexError::General(format!(
            "Too many points: {}.",
            coords.len() / dim
        )));
    }
    if let Some(pos) = coords.iter().position(|c| c.is_nan()) {
        return Err(KnnIndexError::NanCoordinate {
            point: pos / dim,
            axis: pos % dim,
        });
    }
    Ok(())
}
