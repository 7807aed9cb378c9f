//! The batch driver: sample, multiply, write, repeat.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::fixture::config::FixtureConfig;
use crate::fixture::error::Error;
use crate::fixture::io::write_matrix;
use crate::matrix::random::random_matrix;

/// Generate the whole fixture batch described by `config`.
///
/// For each trial `i` in `1..=trial_count`, samples two independent
/// random matrices, computes their exact product and writes
/// `left<i>.mtx`, `right<i>.mtx` and `result<i>.mtx` into the output
/// directory. Existing files are overwritten.
///
/// The first failure aborts the remaining trials; partially written
/// files from the failing trial are left in place.
pub fn generate(config: &FixtureConfig) -> Result<(), Error> {
    generate_with_progress(config, |_| {})
}

/// Same as [`generate`], invoking `on_trial` with the trial index
/// after each completed (left, right, result) triple.
///
/// Progress display is a caller concern; the library never prints.
pub fn generate_with_progress<F>(config: &FixtureConfig, mut on_trial: F) -> Result<(), Error>
where
    F: FnMut(usize),
{
    if !config.output_dir.is_dir() {
        return Err(Error::OutputDirMissing {
            path: config.output_dir.clone(),
        });
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for trial in 1..=config.trial_count {
        let left = random_matrix(config.matrix_size, config.value_low, config.value_high, &mut rng);
        let right = random_matrix(config.matrix_size, config.value_low, config.value_high, &mut rng);
        let result = left.multiply(&right);

        write_matrix(&left, &config.output_dir.join(format!("left{trial}.mtx")))?;
        write_matrix(&right, &config.output_dir.join(format!("right{trial}.mtx")))?;
        write_matrix(&result, &config.output_dir.join(format!("result{trial}.mtx")))?;

        on_trial(trial);
    }

    Ok(())
}
