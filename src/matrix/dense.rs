use crate::matrix::multiply::matmul_ikj;

/// A square N×N integer matrix, stored row-major in a flat `Vec<i64>`.
///
/// Flat storage keeps the multiply loop stride-1 over both the right
/// operand and the accumulator, and makes serialization a single pass
/// over contiguous rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    size: usize,
    data: Vec<i64>,
}

impl Matrix {
    /// All-zero N×N matrix.
    pub fn zeros(size: usize) -> Self {
        Matrix {
            size,
            data: vec![0; size * size],
        }
    }

    /// Build a matrix from a flat row-major buffer.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != size * size`.
    pub fn from_vec(size: usize, data: Vec<i64>) -> Self {
        assert_eq!(
            data.len(),
            size * size,
            "expected {}x{}={} elements, got {}",
            size,
            size,
            size * size,
            data.len()
        );
        Matrix { size, data }
    }

    /// Build a matrix from nested rows. Handy in tests.
    ///
    /// # Panics
    ///
    /// Panics if the rows don't form a square matrix.
    pub fn from_rows(rows: &[Vec<i64>]) -> Self {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for row in rows {
            assert_eq!(row.len(), size, "matrix must be square");
            data.extend_from_slice(row);
        }
        Matrix { size, data }
    }

    /// Row and column count.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Entry at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> i64 {
        self.data[i * self.size + j]
    }

    /// The flat row-major buffer.
    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[i64]> {
        self.data.chunks(self.size)
    }

    /// Exact matrix product `self · rhs`.
    ///
    /// # Panics
    ///
    /// Panics if the operand sizes differ.
    pub fn multiply(&self, rhs: &Matrix) -> Matrix {
        assert_eq!(self.size, rhs.size, "operand sizes must match");
        let mut out = Matrix::zeros(self.size);
        matmul_ikj(&self.data, &rhs.data, &mut out.data, self.size);
        out
    }
}
