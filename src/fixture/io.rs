//! Reading and writing the `.mtx` text format.
//!
//! Not MatrixMarket, despite the extension: one line per row, every
//! entry in base 10 followed by a single tab (including the last entry
//! of the row), every row terminated by a single newline. Downstream
//! readers split on whitespace, so the trailing tab is harmless to
//! parse but must be preserved for byte-compatibility.

use std::fs;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::fixture::error::Error;
use crate::matrix::Matrix;

/// Serialize a matrix to `path`, overwriting any existing file.
///
/// No cleanup is attempted on failure; a partially written file may
/// remain.
pub fn write_matrix(matrix: &Matrix, path: &Path) -> Result<(), Error> {
    let wrap = |source: io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(wrap)?;
    let mut out = BufWriter::new(file);
    write_rows(&mut out, matrix).map_err(wrap)
}

fn write_rows<W: Write>(out: &mut W, matrix: &Matrix) -> io::Result<()> {
    for row in matrix.rows() {
        for &v in row {
            write!(out, "{v}\t")?;
        }
        writeln!(out)?;
    }
    out.flush()
}

/// Parse a `.mtx` file back into an N×N matrix.
///
/// The inverse of [`write_matrix`]: split on whitespace, parse
/// integers, reshape to `size` × `size`.
pub fn read_matrix(path: &Path, size: usize) -> Result<Matrix, Error> {
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut data = Vec::with_capacity(size * size);
    for token in text.split_whitespace() {
        let value: i64 = token.parse().map_err(|_| Error::Parse {
            path: path.to_path_buf(),
            token: token.to_string(),
        })?;
        data.push(value);
    }

    if data.len() != size * size {
        return Err(Error::Shape {
            path: path.to_path_buf(),
            size,
            expected: size * size,
            found: data.len(),
        });
    }

    Ok(Matrix::from_vec(size, data))
}
