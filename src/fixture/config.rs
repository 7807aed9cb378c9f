use std::path::PathBuf;

/// Parameters for one fixture batch.
///
/// The defaults reproduce the historical generator: nine trials of
/// 100×100 matrices with entries in `[-2000, 2000)`, written under
/// `tests/` relative to the working directory.
#[derive(Clone, Debug)]
pub struct FixtureConfig {
    /// Destination directory. Must already exist; the generator does
    /// not create it.
    pub output_dir: PathBuf,
    /// Number of (left, right, result) file triples to produce.
    pub trial_count: usize,
    /// Dimension of the square matrices.
    pub matrix_size: usize,
    /// Inclusive lower bound for sampled entries.
    pub value_low: i64,
    /// Exclusive upper bound for sampled entries.
    pub value_high: i64,
    /// RNG seed. `Some` makes repeated runs byte-identical; `None`
    /// seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        FixtureConfig {
            output_dir: PathBuf::from("tests"),
            trial_count: 9,
            matrix_size: 100,
            value_low: -2000,
            value_high: 2000,
            seed: None,
        }
    }
}
