//! contizob.half reader.
//!
//! The file has no header: one line per grid cell, each holding two
//! whitespace-separated integers `continent_code soil_code`, in row-major
//! order starting at the north-west corner.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use tracing::debug;

use crate::error::{Result, ZoblerError};
use crate::grid::{REFERENCE_COLS, REFERENCE_ROWS};

/// Codes for a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellCodes {
    pub continent: i32,
    pub soil: i32,
}

/// Two-column code matrix, one entry per cell, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeMatrix {
    cells: Vec<CellCodes>,
}

impl CodeMatrix {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[CellCodes] {
        &self.cells
    }
}

impl From<Vec<CellCodes>> for CodeMatrix {
    fn from(cells: Vec<CellCodes>) -> Self {
        Self { cells }
    }
}

/// Load `path` and require exactly `expected_cells` records.
pub fn load_codes(path: impl AsRef<Path>, expected_cells: usize) -> Result<CodeMatrix> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ZoblerError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), expected_cells, "reading code matrix");
    read_codes(BufReader::new(file), expected_cells).map_err(|e| match e {
        // The reader has no path of its own; attach it to read failures.
        ZoblerError::FileNotFound { source, .. } => ZoblerError::FileNotFound {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

/// Parse a code matrix from any buffered reader.
///
/// Every line, blank ones included, must be exactly two integers. Line
/// numbers in errors are 1-based.
pub fn read_codes<R: BufRead>(reader: R, expected_cells: usize) -> Result<CodeMatrix> {
    // expected_cells comes from user config; grow past the reference size on demand.
    let mut cells = Vec::with_capacity(expected_cells.min(REFERENCE_ROWS * REFERENCE_COLS));

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| match source.kind() {
            ErrorKind::InvalidData => ZoblerError::malformed_at(line_no, "line is not valid UTF-8"),
            _ => ZoblerError::FileNotFound { path: Default::default(), source },
        })?;
        cells.push(parse_line(&line, line_no)?);
    }

    if cells.len() != expected_cells {
        return Err(ZoblerError::malformed(format!(
            "expected {expected_cells} records, found {}",
            cells.len()
        )));
    }
    Ok(CodeMatrix { cells })
}

fn parse_line(line: &str, line_no: usize) -> Result<CellCodes> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [continent, soil] = tokens.as_slice() else {
        return Err(ZoblerError::malformed_at(
            line_no,
            format!("expected 2 integers, found {} tokens", tokens.len()),
        ));
    };
    Ok(CellCodes {
        continent: parse_code(continent, line_no)?,
        soil: parse_code(soil, line_no)?,
    })
}

fn parse_code(token: &str, line_no: usize) -> Result<i32> {
    token
        .parse()
        .map_err(|_| ZoblerError::malformed_at(line_no, format!("not an integer: {token:?}")))
}
