use std::fs;
use std::path::Path;

use mtxgen::fixture::io::{read_matrix, write_matrix};
use mtxgen::{Error, FixtureConfig, Matrix, generate, generate_with_progress};

fn small_config(dir: &Path, seed: u64) -> FixtureConfig {
    FixtureConfig {
        output_dir: dir.to_path_buf(),
        trial_count: 3,
        matrix_size: 4,
        value_low: -50,
        value_high: 50,
        seed: Some(seed),
    }
}

// ============================================================
// Batch shape: files produced, naming, progress
// ============================================================

#[test]
fn test_generates_three_files_per_trial() {
    let dir = tempfile::tempdir().unwrap();
    let config = small_config(dir.path(), 1);

    generate(&config).unwrap();

    for trial in 1..=3 {
        for role in ["left", "right", "result"] {
            let path = dir.path().join(format!("{role}{trial}.mtx"));
            assert!(path.is_file(), "missing {}", path.display());
        }
    }
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 9);
}

#[test]
fn test_progress_callback_sees_every_trial() {
    let dir = tempfile::tempdir().unwrap();
    let config = small_config(dir.path(), 2);

    let mut seen = Vec::new();
    generate_with_progress(&config, |trial| seen.push(trial)).unwrap();

    assert_eq!(seen, vec![1, 2, 3]);
}

// ============================================================
// Invariants: correctness, range, shape
// ============================================================

#[test]
fn test_result_is_exact_product() {
    let dir = tempfile::tempdir().unwrap();
    let config = small_config(dir.path(), 3);

    generate(&config).unwrap();

    for trial in 1..=3 {
        let left = read_matrix(&dir.path().join(format!("left{trial}.mtx")), 4).unwrap();
        let right = read_matrix(&dir.path().join(format!("right{trial}.mtx")), 4).unwrap();
        let result = read_matrix(&dir.path().join(format!("result{trial}.mtx")), 4).unwrap();

        assert_eq!(result, left.multiply(&right), "trial {} product mismatch", trial);
    }
}

#[test]
fn test_operand_entries_within_half_open_range() {
    let dir = tempfile::tempdir().unwrap();
    let config = FixtureConfig {
        output_dir: dir.path().to_path_buf(),
        trial_count: 2,
        matrix_size: 10,
        value_low: -7,
        value_high: 7,
        seed: Some(4),
    };

    generate(&config).unwrap();

    for trial in 1..=2 {
        for role in ["left", "right"] {
            let m = read_matrix(&dir.path().join(format!("{role}{trial}.mtx")), 10).unwrap();
            for &v in m.as_slice() {
                assert!((-7..7).contains(&v), "{role}{trial}: entry {v} out of range");
            }
        }
    }
}

#[test]
fn test_known_2x2_fixture() {
    let dir = tempfile::tempdir().unwrap();

    let left = Matrix::from_rows(&[vec![3, 7], vec![1, 4]]);
    let right = Matrix::from_rows(&[vec![2, 0], vec![5, 9]]);
    let result = left.multiply(&right);

    let path = dir.path().join("result1.mtx");
    write_matrix(&result, &path).unwrap();

    let back = read_matrix(&path, 2).unwrap();
    assert_eq!(back, Matrix::from_rows(&[vec![41, 63], vec![22, 36]]));
}

// ============================================================
// Determinism and independence
// ============================================================

#[test]
fn test_fixed_seed_gives_byte_identical_runs() {
    let dir_a = tempfile::tempdir().unwrap();
    let dir_b = tempfile::tempdir().unwrap();

    generate(&small_config(dir_a.path(), 42)).unwrap();
    generate(&small_config(dir_b.path(), 42)).unwrap();

    for trial in 1..=3 {
        for role in ["left", "right", "result"] {
            let name = format!("{role}{trial}.mtx");
            let a = fs::read(dir_a.path().join(&name)).unwrap();
            let b = fs::read(dir_b.path().join(&name)).unwrap();
            assert_eq!(a, b, "{name} differs between identically seeded runs");
        }
    }
}

#[test]
fn test_different_seeds_give_different_fixtures() {
    let dir_a = tempfile::tempdir().unwrap();
    let dir_b = tempfile::tempdir().unwrap();

    generate(&small_config(dir_a.path(), 1)).unwrap();
    generate(&small_config(dir_b.path(), 2)).unwrap();

    let a = fs::read(dir_a.path().join("left1.mtx")).unwrap();
    let b = fs::read(dir_b.path().join("left1.mtx")).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_rerun_overwrites_stale_fixtures() {
    let dir = tempfile::tempdir().unwrap();

    generate(&small_config(dir.path(), 1)).unwrap();
    generate(&small_config(dir.path(), 2)).unwrap();

    // Still exactly one file set, and still internally consistent.
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 9);
    let left = read_matrix(&dir.path().join("left1.mtx"), 4).unwrap();
    let right = read_matrix(&dir.path().join("right1.mtx"), 4).unwrap();
    let result = read_matrix(&dir.path().join("result1.mtx"), 4).unwrap();
    assert_eq!(result, left.multiply(&right));
}

// ============================================================
// Failure modes
// ============================================================

#[test]
fn test_missing_output_dir_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = small_config(&dir.path().join("does_not_exist"), 1);

    let err = generate(&config).unwrap_err();
    assert!(matches!(err, Error::OutputDirMissing { .. }));
    assert!(err.to_string().contains("does_not_exist"));
}

#[test]
fn test_zero_trials_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = FixtureConfig {
        trial_count: 0,
        ..small_config(dir.path(), 1)
    };

    generate(&config).unwrap();
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
