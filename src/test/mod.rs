
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::points::PointSet;

/// `{(0,0), (1,0), (0,1), (5,5), (5,6)}`
pub(crate) fn five_points() -> PointSet<f64> {
    PointSet::try_new(vec![0., 0., 1., 0., 0., 1., 5., 5., 5., 6.], 2).unwrap()
}

/// `num_items` points of dimension `dim`, uniform in `[-100, 100)`.
pub(crate) fn random_points(seed: u64, num_items: usize, dim: usize) -> PointSet<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let coords = (0..num_items * dim)
        .map(|_| rng.gen_range(-100.0..100.0))
        .collect();
    PointSet::try_new(coords, dim).unwrap()
}
