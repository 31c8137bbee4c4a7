//! A row-major matrix of neighbor indexes, one row of `k` indexes per query.

/// The results of a batch of k-nearest-neighbor queries.
///
/// Row `i` holds the neighbors of query `i` in ascending distance order. Slots that could not
/// be filled hold [`EMPTY_INDEX`][crate::neighbors::EMPTY_INDEX].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexMatrix {
    pub(crate) indices: Vec<i32>,
    pub(crate) k: usize,
}

impl IndexMatrix {
    /// Wrap `indices`, which must hold a whole number of rows of length `k`.
    pub fn new(k: usize, indices: Vec<i32>) -> Self {
        assert!(k > 0, "k must be positive");
        assert_eq!(
            indices.len() % k,
            0,
            "{} indices do not divide into rows of {}",
            indices.len(),
            k
        );
        Self { indices, k }
    }

    /// The number of neighbors per query.
    pub fn k(&self) -> usize {
        self.k
    }

    /// The number of queries.
    pub fn num_queries(&self) -> usize {
        self.indices.len() / self.k
    }

    /// The neighbors of query `i`.
    pub fn row(&self, i: usize) -> &[i32] {
        &self.indices[i * self.k..(i + 1) * self.k]
    }

    /// Iterate over rows in query order.
    pub fn rows(&self) -> impl Iterator<Item = &[i32]> {
        self.indices.chunks_exact(self.k)
    }

    /// The flat row-major indexes.
    pub fn as_slice(&self) -> &[i32] {
        &self.indices
    }

    /// Consume this matrix, returning the flat row-major indexes.
    pub fn into_inner(self) -> Vec<i32> {
        self.indices
    }
}
