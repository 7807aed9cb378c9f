use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while generating or reading fixtures.
#[derive(Debug, Error)]
pub enum Error {
    #[error("output directory {} does not exist or is not a directory", path.display())]
    OutputDirMissing { path: PathBuf },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: malformed matrix entry {token:?}", path.display())]
    Parse { path: PathBuf, token: String },

    #[error("{}: expected {expected} entries for a {size}x{size} matrix, found {found}", path.display())]
    Shape {
        path: PathBuf,
        size: usize,
        expected: usize,
        found: usize,
    },
}
