//! Test fixture generator for matrix multiplication.
//!
//! I wrote this to stop hand-rolling inputs for matmul implementations.
//! It samples pairs of random square integer matrices, computes their
//! exact product with 64-bit accumulation, and writes all three to
//! tab-separated `.mtx` text files that a downstream multiplier can
//! read back and check itself against.
//!
//! ## Usage
//!
//! ```no_run
//! use mtxgen::{FixtureConfig, generate};
//!
//! let config = FixtureConfig {
//!     matrix_size: 8,
//!     trial_count: 3,
//!     seed: Some(42),
//!     ..FixtureConfig::default()
//! };
//!
//! generate(&config).unwrap();
//! ```
//!
//! Each trial `i` produces `left<i>.mtx`, `right<i>.mtx` and
//! `result<i>.mtx` in the output directory. With a fixed seed the
//! output is byte-identical between runs.
//!
//! ## What's inside
//!
//! - Flat row-major `i64` matrices with an exact i-k-j multiply
//! - Uniform sampling over a half-open integer range
//! - A `.mtx` writer/reader (tab-separated, trailing tab per row)
//! - A batch driver with an optional per-trial progress callback

pub mod fixture;
pub mod matrix;

pub use fixture::config::FixtureConfig;
pub use fixture::error::Error;
pub use fixture::generate::{generate, generate_with_progress};
pub use matrix::Matrix;
pub use matrix::multiply::matmul_ikj;
