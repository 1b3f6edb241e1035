use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Result, ZoblerError};

/// CSV column order. Matches the field order of [`CellRecord`].
pub const HEADER: [&str; 6] = [
    "latitude",
    "longitude",
    "continent_code",
    "soil_type",
    "soil_type_name",
    "continent_name",
];

/// One annotated grid cell, one CSV row.
///
/// Unknown labels are `None` and serialize as an empty field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CellRecord {
    pub latitude: f64,
    pub longitude: f64,
    pub continent_code: i32,
    pub soil_type: i32,
    pub soil_type_name: Option<&'static str>,
    pub continent_name: Option<&'static str>,
}

/// Write `records` as CSV to any writer. Returns the number of data rows.
///
/// Floats are written in shortest round-trip form (`89.5`, `-180.0`).
pub fn write_records<W: Write>(writer: W, records: &[CellRecord]) -> io::Result<usize> {
    let mut csv = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    csv.write_record(HEADER)?;
    for record in records {
        csv.serialize(record)?;
    }
    csv.flush()?;
    Ok(records.len())
}

/// Write `records` to `path`, replacing any existing file.
///
/// Rows go to a temp file beside `path` which is renamed over it only after
/// a successful flush, so a failed run never leaves a half-written CSV.
pub fn write_csv(path: impl AsRef<Path>, records: &[CellRecord]) -> Result<usize> {
    let path = path.as_ref();
    let io_err = |source: io::Error| ZoblerError::Io { path: path.to_path_buf(), source };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    debug!(tmp = %tmp.path().display(), "writing CSV to temp file");

    let rows = write_records(io::BufWriter::new(tmp.as_file_mut()), records).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(rows)
}
