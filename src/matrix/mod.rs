//! Square integer matrices and the exact multiply primitive.
//!
//! Everything here is exact i64 arithmetic: entries are bounded by the
//! sampling range, so a 64-bit accumulator never overflows at the
//! sizes this tool generates (100 × 2000² ≈ 4×10⁸ per result entry).

pub mod dense;
pub mod multiply;
pub mod random;

pub use dense::Matrix;
pub use random::random_matrix;
