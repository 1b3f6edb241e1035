use serde::{Deserialize, Serialize};

use crate::coords::LatLon;
use crate::error::{Result, ZoblerError};

// ── Reference grid ────────────────────────────────────────────────────────────

/// Half-degree global grid: 180° / 0.5 rows, 360° / 0.5 columns.
pub const REFERENCE_ROWS: usize = 360;
pub const REFERENCE_COLS: usize = 720;
pub const REFERENCE_XLLCORNER: f64 = -180.0;
pub const REFERENCE_YLLCORNER: f64 = -90.0;
pub const REFERENCE_CELLSIZE: f64 = 0.5;

/// Regular lat/lon grid layout. contizob.half carries no header, so these
/// values come from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridParams {
    pub rows: usize,
    pub cols: usize,
    /// Lower-left corner longitude in degrees.
    pub xllcorner: f64,
    /// Lower-left corner latitude in degrees.
    pub yllcorner: f64,
    /// Cell spacing in degrees.
    pub cellsize: f64,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            rows: REFERENCE_ROWS,
            cols: REFERENCE_COLS,
            xllcorner: REFERENCE_XLLCORNER,
            yllcorner: REFERENCE_YLLCORNER,
            cellsize: REFERENCE_CELLSIZE,
        }
    }
}

impl GridParams {
    /// Build and validate a parameter set.
    pub fn new(rows: usize, cols: usize, xllcorner: f64, yllcorner: f64, cellsize: f64) -> Result<Self> {
        let params = Self { rows, cols, xllcorner, yllcorner, cellsize };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ZoblerError::InvalidGrid(format!(
                "grid must have at least one row and column, got {}×{}",
                self.rows, self.cols
            )));
        }
        if self.rows.checked_mul(self.cols).is_none() {
            return Err(ZoblerError::InvalidGrid(format!(
                "{}×{} cells overflows the addressable cell count",
                self.rows, self.cols
            )));
        }
        if !(self.cellsize.is_finite() && self.cellsize > 0.0) {
            return Err(ZoblerError::InvalidGrid(format!(
                "cellsize must be positive and finite, got {}",
                self.cellsize
            )));
        }
        if !(self.xllcorner.is_finite() && self.yllcorner.is_finite()) {
            return Err(ZoblerError::InvalidGrid("corner coordinates must be finite".into()));
        }
        Ok(())
    }

    /// `rows × cols`. Saturates for parameters that failed [`validate`](Self::validate).
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// Latitude of the northernmost row.
    pub fn max_lat(&self) -> f64 {
        self.yllcorner + self.rows.saturating_sub(1) as f64 * self.cellsize
    }

    /// Longitude of the easternmost column.
    pub fn max_lon(&self) -> f64 {
        self.xllcorner + self.cols.saturating_sub(1) as f64 * self.cellsize
    }
}

/// `n` evenly spaced values from `start` to `stop` inclusive.
///
/// Each point is `start + i * step` rather than a running sum, and the last
/// point is pinned to `stop`, so neither endpoint drifts.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            out[n - 1] = stop;
            out
        }
    }
}

/// Cell-centre coordinates for every cell of a [`GridParams`] layout.
///
/// Storage order matches contizob.half: row 0 = northernmost band, rows run
/// N→S and columns W→E. Cell `i` sits at latitude index `i / cols` and
/// longitude index `i % cols`.
#[derive(Debug, Clone)]
pub struct Grid {
    params: GridParams,
    /// Descending, length = rows.
    latitudes: Vec<f64>,
    /// Ascending, length = cols.
    longitudes: Vec<f64>,
}

impl Grid {
    pub fn new(params: GridParams) -> Result<Self> {
        params.validate()?;
        let latitudes = linspace(params.max_lat(), params.yllcorner, params.rows);
        let longitudes = linspace(params.xllcorner, params.max_lon(), params.cols);
        Ok(Self { params, latitudes, longitudes })
    }

    pub fn latitudes(&self) -> &[f64] {
        &self.latitudes
    }

    pub fn longitudes(&self) -> &[f64] {
        &self.longitudes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.params.cell_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Coordinate of row-major cell `i`, or `None` past the end of the grid.
    pub fn coordinate(&self, i: usize) -> Option<LatLon> {
        if i >= self.len() {
            return None;
        }
        let cols = self.params.cols;
        Some(LatLon::new(self.latitudes[i / cols], self.longitudes[i % cols]))
    }

    /// All cell coordinates in row-major order (latitude slowest).
    pub fn cells(&self) -> impl Iterator<Item = LatLon> + '_ {
        self.latitudes
            .iter()
            .flat_map(move |&lat| self.longitudes.iter().map(move |&lon| LatLon::new(lat, lon)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn linspace_pins_endpoints() {
        let v = linspace(89.5, -90.0, 360);
        assert_eq!(v.len(), 360);
        assert_eq!(v[0], 89.5);
        assert_eq!(v[359], -90.0);
        assert_relative_eq!(v[1], 89.0);
    }

    #[test]
    fn linspace_single_point_is_start() {
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
        assert!(linspace(3.0, 7.0, 0).is_empty());
    }

    #[test]
    fn reference_axes_are_exact_half_degrees() {
        let grid = Grid::new(GridParams::default()).unwrap();
        for (r, &lat) in grid.latitudes().iter().enumerate() {
            assert_eq!(lat, 89.5 - r as f64 * 0.5, "row {r}");
        }
        for (c, &lon) in grid.longitudes().iter().enumerate() {
            assert_eq!(lon, -180.0 + c as f64 * 0.5, "col {c}");
        }
    }

    #[test]
    fn coordinate_matches_row_major_formula() {
        let p = GridParams::default();
        let grid = Grid::new(p).unwrap();
        for i in [0usize, 1, 719, 720, 1441, 129_600, 259_199] {
            let ll = grid.coordinate(i).unwrap();
            let expect_lat = p.yllcorner + (p.rows - 1 - i / p.cols) as f64 * p.cellsize;
            let expect_lon = p.xllcorner + (i % p.cols) as f64 * p.cellsize;
            assert_eq!(ll.lat, expect_lat, "cell {i}");
            assert_eq!(ll.lon, expect_lon, "cell {i}");
        }
        assert!(grid.coordinate(259_200).is_none());
    }

    #[test]
    fn cells_iterator_agrees_with_coordinate() {
        let grid = Grid::new(GridParams::new(3, 5, 10.0, 20.0, 2.0).unwrap()).unwrap();
        let cells: Vec<LatLon> = grid.cells().collect();
        assert_eq!(cells.len(), 15);
        for (i, ll) in cells.iter().enumerate() {
            assert_eq!(Some(*ll), grid.coordinate(i));
        }
        // First cell is the north-west corner, last the south-east.
        assert_eq!(cells[0], LatLon::new(24.0, 10.0));
        assert_eq!(cells[14], LatLon::new(20.0, 18.0));
    }

    #[test]
    fn reference_cells_stay_in_bounds() {
        let p = GridParams::default();
        let grid = Grid::new(p).unwrap();
        assert!(grid.cells().all(|ll| {
            (p.yllcorner..=p.max_lat()).contains(&ll.lat) && (p.xllcorner..=p.max_lon()).contains(&ll.lon)
        }));
    }

    #[test]
    fn rejects_degenerate_params() {
        assert!(matches!(GridParams::new(0, 4, 0.0, 0.0, 1.0), Err(ZoblerError::InvalidGrid(_))));
        assert!(matches!(GridParams::new(4, 0, 0.0, 0.0, 1.0), Err(ZoblerError::InvalidGrid(_))));
        assert!(GridParams::new(4, 4, 0.0, 0.0, 0.0).is_err());
        assert!(GridParams::new(4, 4, 0.0, 0.0, -0.5).is_err());
        assert!(GridParams::new(4, 4, 0.0, 0.0, f64::NAN).is_err());
        assert!(GridParams::new(4, 4, f64::INFINITY, 0.0, 1.0).is_err());
    }

    #[test]
    fn rejects_overflowing_cell_count() {
        let err = GridParams::new(usize::MAX / 2, 4, 0.0, 0.0, 1.0).unwrap_err();
        assert!(matches!(err, ZoblerError::InvalidGrid(_)), "{err}");

        let p = GridParams { rows: usize::MAX / 2, cols: 4, ..GridParams::default() };
        assert_eq!(p.cell_count(), usize::MAX);
        assert!(Grid::new(p).is_err());
    }

    #[test]
    fn params_deserialize_from_json() {
        let json = r#"{"rows":4,"cols":4,"xllcorner":-2.0,"yllcorner":-2.0,"cellsize":1.0}"#;
        let p: GridParams = serde_json::from_str(json).unwrap();
        assert_eq!(p, GridParams::new(4, 4, -2.0, -2.0, 1.0).unwrap());
    }
}
