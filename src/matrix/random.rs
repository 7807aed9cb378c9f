use rand::Rng;

use crate::matrix::Matrix;

/// Sample an N×N matrix with entries drawn i.i.d. uniformly from the
/// half-open range `[low, high)`.
///
/// The caller owns the RNG so a whole batch can run off one seeded
/// generator and reproduce byte-identical fixtures.
///
/// # Panics
///
/// Panics if `low >= high` (empty sampling range).
pub fn random_matrix<R: Rng>(size: usize, low: i64, high: i64, rng: &mut R) -> Matrix {
    let data: Vec<i64> = (0..size * size).map(|_| rng.gen_range(low..high)).collect();
    Matrix::from_vec(size, data)
}
