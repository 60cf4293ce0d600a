use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A cell address in an [`ElevationGrid`], `row` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct GridLocation {
    pub row: usize,
    pub col: usize,
}

impl GridLocation {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for GridLocation {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<GridLocation> for (usize, usize) {
    fn from(loc: GridLocation) -> Self {
        (loc.row, loc.col)
    }
}

impl fmt::Display for GridLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("elevation grid must have at least one row and one column, got {rows}x{cols}")]
    DegenerateGrid { rows: usize, cols: usize },
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("expected {expected} elevation values for the grid, got {found}")]
    ValueCountMismatch { expected: usize, found: usize },
    #[error("elevation at {location} is not a number")]
    NanElevation { location: GridLocation },
    #[error("water source {location} lies outside the {rows}x{cols} grid")]
    SourceOutOfBounds {
        location: GridLocation,
        rows: usize,
        cols: usize,
    },
    #[error("cell {location} lies outside the {rows}x{cols} grid")]
    CellOutOfBounds {
        location: GridLocation,
        rows: usize,
        cols: usize,
    },
}

// N, S, W, E
static AXIAL_OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

// Axial first, then NW, NE, SW, SE.
static SURROUNDING_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Immutable row-major matrix of terrain heights.
///
/// Cloning is cheap: the values live behind an [`Arc`], so the same grid can
/// back several analyzers or be handed to other threads.
#[derive(Debug, Clone, PartialEq)]
pub struct ElevationGrid {
    rows: usize,
    cols: usize,
    values: Arc<Vec<f64>>,
}

impl ElevationGrid {
    pub fn new(rows: usize, cols: usize, values: Vec<f64>) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::DegenerateGrid { rows, cols });
        }
        let expected = rows.saturating_mul(cols);
        if values.len() != expected {
            return Err(GridError::ValueCountMismatch {
                expected,
                found: values.len(),
            });
        }
        if let Some(idx) = values.iter().position(|v| v.is_nan()) {
            return Err(GridError::NanElevation {
                location: GridLocation::new(idx / cols, idx % cols),
            });
        }
        Ok(Self {
            rows,
            cols,
            values: Arc::new(values),
        })
    }

    /// Build a grid from nested rows, as terrain documents store them.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, GridError> {
        let row_count = rows.len();
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if row_count == 0 || cols == 0 {
            return Err(GridError::DegenerateGrid {
                rows: row_count,
                cols,
            });
        }
        let mut values = Vec::with_capacity(row_count * cols);
        for (row, heights) in rows.into_iter().enumerate() {
            if heights.len() != cols {
                return Err(GridError::RaggedRow {
                    row,
                    expected: cols,
                    found: heights.len(),
                });
            }
            values.extend(heights);
        }
        Self::new(row_count, cols, values)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn contains(&self, loc: GridLocation) -> bool {
        loc.row < self.rows && loc.col < self.cols
    }

    /// Row-major index of `loc`, or `None` outside the grid.
    #[inline]
    pub fn index(&self, loc: GridLocation) -> Option<usize> {
        if self.contains(loc) {
            Some(loc.row * self.cols + loc.col)
        } else {
            None
        }
    }

    #[inline]
    pub fn location(&self, idx: usize) -> GridLocation {
        debug_assert!(idx < self.values.len());
        GridLocation::new(idx / self.cols, idx % self.cols)
    }

    #[inline]
    pub fn elevation(&self, loc: GridLocation) -> Option<f64> {
        self.index(loc).map(|idx| self.values[idx])
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (GridLocation, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(move |(idx, &v)| (self.location(idx), v))
    }

    /// In-bounds axial neighbours (N, S, W, E) of `loc`.
    pub fn neighbors4(&self, loc: GridLocation) -> impl Iterator<Item = GridLocation> + '_ {
        AXIAL_OFFSETS
            .iter()
            .filter_map(move |&offset| self.offset(loc, offset))
    }

    /// In-bounds axial and diagonal neighbours of `loc`.
    pub fn neighbors8(&self, loc: GridLocation) -> impl Iterator<Item = GridLocation> + '_ {
        SURROUNDING_OFFSETS
            .iter()
            .filter_map(move |&offset| self.offset(loc, offset))
    }

    fn offset(&self, loc: GridLocation, (dr, dc): (isize, isize)) -> Option<GridLocation> {
        let row = loc.row.checked_add_signed(dr)?;
        let col = loc.col.checked_add_signed(dc)?;
        let next = GridLocation::new(row, col);
        self.contains(next).then_some(next)
    }

    pub(crate) fn check_cell(&self, loc: GridLocation) -> Result<usize, GridError> {
        self.index(loc).ok_or(GridError::CellOutOfBounds {
            location: loc,
            rows: self.rows,
            cols: self.cols,
        })
    }

    pub(crate) fn check_sources(&self, sources: &[GridLocation]) -> Result<(), GridError> {
        match sources.iter().find(|src| !self.contains(**src)) {
            Some(&location) => Err(GridError::SourceOutOfBounds {
                location,
                rows: self.rows,
                cols: self.cols,
            }),
            None => Ok(()),
        }
    }
}

/// An elevation grid paired with the water sources that feed it.
///
/// Sources are checked against the grid once, here, so every query made
/// through a `Terrain` can skip the check.
#[derive(Debug, Clone, PartialEq)]
pub struct Terrain {
    grid: ElevationGrid,
    sources: Vec<GridLocation>,
}

impl Terrain {
    pub fn new(grid: ElevationGrid, sources: Vec<GridLocation>) -> Result<Self, GridError> {
        grid.check_sources(&sources)?;
        Ok(Self { grid, sources })
    }

    pub fn grid(&self) -> &ElevationGrid {
        &self.grid
    }

    pub fn sources(&self) -> &[GridLocation] {
        &self.sources
    }

    pub fn is_source(&self, loc: GridLocation) -> bool {
        self.sources.contains(&loc)
    }
}
