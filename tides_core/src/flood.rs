//! Multi-source flood fill.
//!
//! Water starts at every source cell and spreads axially (N, S, W, E) into any
//! neighbour whose elevation is at or below the water height. Sources are
//! always flooded, even when they sit above the water line.

use std::collections::VecDeque;

use serde::Serialize;

use crate::grid::{ElevationGrid, GridError, GridLocation};

/// Which cells are underwater at one water height. `true` means flooded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmersionMask {
    rows: usize,
    cols: usize,
    flooded: Vec<bool>,
}

impl SubmersionMask {
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `loc` is underwater, or `None` when it lies outside the mask.
    #[inline]
    pub fn is_flooded(&self, loc: GridLocation) -> Option<bool> {
        if loc.row < self.rows && loc.col < self.cols {
            Some(self.flooded[loc.row * self.cols + loc.col])
        } else {
            None
        }
    }

    #[inline]
    pub(crate) fn flooded_at(&self, idx: usize) -> bool {
        self.flooded[idx]
    }

    pub fn flooded_count(&self) -> usize {
        self.flooded.iter().filter(|&&f| f).count()
    }

    pub fn dry_count(&self) -> usize {
        self.flooded.len() - self.flooded_count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (GridLocation, bool)> + '_ {
        let cols = self.cols;
        self.flooded
            .iter()
            .enumerate()
            .map(move |(idx, &f)| (GridLocation::new(idx / cols, idx % cols), f))
    }

    /// Flooded state per row, top to bottom.
    pub fn row_slices(&self) -> impl Iterator<Item = &[bool]> {
        self.flooded.chunks(self.cols)
    }
}

/// Compute the submersion mask for `height`, checking `sources` first.
pub fn compute_mask(
    grid: &ElevationGrid,
    sources: &[GridLocation],
    height: f64,
) -> Result<SubmersionMask, GridError> {
    grid.check_sources(sources)?;
    Ok(spread(grid, sources, height))
}

/// Flood fill over sources already known to lie inside `grid`.
pub(crate) fn spread(grid: &ElevationGrid, sources: &[GridLocation], height: f64) -> SubmersionMask {
    let mut flooded = vec![false; grid.cell_count()];
    let mut queue = VecDeque::with_capacity(sources.len());

    for &src in sources {
        let Some(idx) = grid.index(src) else {
            continue;
        };
        if !flooded[idx] {
            flooded[idx] = true;
            queue.push_back(src);
        }
    }

    let values = grid.values();
    while let Some(cell) = queue.pop_front() {
        for next in grid.neighbors4(cell) {
            let ni = next.row * grid.cols() + next.col;
            if !flooded[ni] && values[ni] <= height {
                flooded[ni] = true;
                queue.push_back(next);
            }
        }
    }

    let mask = SubmersionMask {
        rows: grid.rows(),
        cols: grid.cols(),
        flooded,
    };
    tracing::debug!(
        target: "rising_tides::flood",
        height,
        sources = sources.len(),
        flooded = mask.flooded_count(),
        "flood_mask.computed"
    );
    mask
}
