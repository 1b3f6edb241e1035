//! Pipeline orchestrator: load → grid → annotate → export.

use std::collections::BTreeSet;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::classes::Annotation;
use crate::error::{Result, ZoblerError};
use crate::export::{write_csv, CellRecord};
use crate::grid::{Grid, GridParams};
use crate::loader::{load_codes, CodeMatrix};

/// Everything one run needs.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub grid: GridParams,
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub output: PathBuf,
    pub records: usize,
    /// Cells whose soil code has no label.
    pub unmapped_soil: usize,
    /// Cells whose continent code has no label.
    pub unmapped_continent: usize,
}

/// Pair each grid coordinate with the codes at the same row-major index and
/// attach labels.
///
/// The loader and the grid both enumerate cells north-west first, latitude
/// slowest. A length mismatch means the two orders cannot line up.
pub fn build_records(grid: &Grid, codes: &CodeMatrix) -> Result<Vec<CellRecord>> {
    if grid.len() != codes.len() {
        return Err(ZoblerError::malformed(format!(
            "grid has {} cells but input has {} records",
            grid.len(),
            codes.len()
        )));
    }

    let records = grid
        .cells()
        .zip(codes.cells())
        .map(|(ll, c)| {
            let labels = Annotation::of(c.continent, c.soil);
            CellRecord {
                latitude: ll.lat,
                longitude: ll.lon,
                continent_code: c.continent,
                soil_type: c.soil,
                soil_type_name: labels.soil,
                continent_name: labels.continent,
            }
        })
        .collect();
    Ok(records)
}

/// Codes present in `records` that have no label, per table.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UnmappedCodes {
    pub soil: BTreeSet<i32>,
    pub continent: BTreeSet<i32>,
    pub soil_cells: usize,
    pub continent_cells: usize,
}

pub fn unmapped_codes(records: &[CellRecord]) -> UnmappedCodes {
    let mut out = UnmappedCodes::default();
    for r in records {
        if r.soil_type_name.is_none() {
            out.soil.insert(r.soil_type);
            out.soil_cells += 1;
        }
        if r.continent_name.is_none() {
            out.continent.insert(r.continent_code);
            out.continent_cells += 1;
        }
    }
    out
}

/// Last `n` records (all of them if `n` exceeds the length).
pub fn preview_tail(records: &[CellRecord], n: usize) -> &[CellRecord] {
    &records[records.len().saturating_sub(n)..]
}

/// Run the full pipeline and return the annotated records with the summary.
pub fn run_with_records(config: &PipelineConfig) -> Result<(Vec<CellRecord>, ExportSummary)> {
    let grid = Grid::new(config.grid)?;
    info!(
        rows = config.grid.rows,
        cols = config.grid.cols,
        cellsize = config.grid.cellsize,
        "grid reconstructed"
    );

    let codes = load_codes(&config.input, grid.len())?;
    info!(input = %config.input.display(), records = codes.len(), "input loaded");

    let records = build_records(&grid, &codes)?;

    let unmapped = unmapped_codes(&records);
    if unmapped.soil_cells > 0 {
        warn!(cells = unmapped.soil_cells, codes = ?unmapped.soil, "soil codes without a label");
    }
    if unmapped.continent_cells > 0 {
        warn!(
            cells = unmapped.continent_cells,
            codes = ?unmapped.continent,
            "continent codes without a label"
        );
    }

    let written = write_csv(&config.output, &records)?;
    info!(output = %config.output.display(), rows = written, "CSV written");

    let summary = ExportSummary {
        output: config.output.clone(),
        records: written,
        unmapped_soil: unmapped.soil_cells,
        unmapped_continent: unmapped.continent_cells,
    };
    Ok((records, summary))
}

/// Run the full pipeline.
pub fn run(config: &PipelineConfig) -> Result<ExportSummary> {
    run_with_records(config).map(|(_, summary)| summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::CellCodes;

    fn codes(pairs: &[(i32, i32)]) -> CodeMatrix {
        pairs
            .iter()
            .map(|&(continent, soil)| CellCodes { continent, soil })
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn records_align_with_codes_by_index() {
        let grid = Grid::new(GridParams::new(2, 3, 0.0, 0.0, 1.0).unwrap()).unwrap();
        let m = codes(&[(0, 0), (2, 1), (3, 2), (4, 3), (5, 4), (6, 5)]);
        let recs = build_records(&grid, &m).unwrap();
        assert_eq!(recs.len(), 6);
        for (i, r) in recs.iter().enumerate() {
            assert_eq!(r.soil_type, i as i32);
            assert_eq!(r.latitude, (1 - i / 3) as f64);
            assert_eq!(r.longitude, (i % 3) as f64);
        }
        assert_eq!(recs[1].continent_name, Some("NAMERICA"));
        assert_eq!(recs[5].soil_type_name, Some("AP PLINTHIC ACRISOL"));
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let grid = Grid::new(GridParams::new(2, 2, 0.0, 0.0, 1.0).unwrap()).unwrap();
        let err = build_records(&grid, &codes(&[(0, 0); 3])).unwrap_err();
        assert!(matches!(err, ZoblerError::MalformedInput { line: None, .. }));
    }

    #[test]
    fn unmapped_codes_are_counted_not_dropped() {
        let grid = Grid::new(GridParams::new(1, 4, 0.0, 0.0, 1.0).unwrap()).unwrap();
        let recs = build_records(&grid, &codes(&[(0, 0), (11, 999), (-3, 108), (1, 999)])).unwrap();
        assert_eq!(recs.len(), 4);
        let u = unmapped_codes(&recs);
        assert_eq!(u.soil_cells, 3);
        assert_eq!(u.soil.iter().copied().collect::<Vec<_>>(), vec![108, 999]);
        assert_eq!(u.continent_cells, 2);
        assert_eq!(u.continent.iter().copied().collect::<Vec<_>>(), vec![-3, 11]);
        assert_eq!(recs[3].continent_name, Some("not used"));
    }

    #[test]
    fn preview_tail_clamps() {
        let grid = Grid::new(GridParams::new(1, 3, 0.0, 0.0, 1.0).unwrap()).unwrap();
        let recs = build_records(&grid, &codes(&[(0, 0), (0, 1), (0, 2)])).unwrap();
        assert_eq!(preview_tail(&recs, 2).len(), 2);
        assert_eq!(preview_tail(&recs, 2)[0].soil_type, 1);
        assert_eq!(preview_tail(&recs, 10).len(), 3);
        assert!(preview_tail(&recs, 0).is_empty());
    }
}
