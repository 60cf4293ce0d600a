//! Water-level queries over a fixed terrain.
//!
//! Every query floods the terrain from scratch at the requested height; the
//! analyzer keeps no state between calls and can be shared across threads.

use serde::Serialize;

use crate::{
    flood::{self, SubmersionMask},
    grid::{GridError, GridLocation, Terrain},
    union_find::UnionFind,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElevationExtrema {
    pub lowest: f64,
    pub highest: f64,
}

/// Headline numbers for one water height.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloodSummary {
    pub height: f64,
    pub extrema: ElevationExtrema,
    pub visible_land: usize,
    pub flooded_cells: usize,
    pub islands: usize,
}

#[derive(Debug, Clone)]
pub struct TerrainAnalyzer {
    terrain: Terrain,
}

impl TerrainAnalyzer {
    pub fn new(terrain: Terrain) -> Self {
        Self { terrain }
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    /// Lowest and highest elevation anywhere on the terrain.
    pub fn elevation_extrema(&self) -> ElevationExtrema {
        let values = self.terrain.grid().values();
        // Grids are never empty, so seeding from the first cell is safe.
        let first = values[0];
        let (lowest, highest) = values[1..]
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        ElevationExtrema { lowest, highest }
    }

    /// Submersion mask for the whole terrain at `height`.
    pub fn flooded_regions(&self, height: f64) -> SubmersionMask {
        flood::spread(self.terrain.grid(), self.terrain.sources(), height)
    }

    pub fn is_flooded(&self, height: f64, cell: GridLocation) -> Result<bool, GridError> {
        let idx = self.terrain.grid().check_cell(cell)?;
        Ok(self.flooded_regions(height).flooded_at(idx))
    }

    /// Signed distance from the water surface to the cell: positive above the
    /// water, negative below it.
    pub fn height_above_water(&self, height: f64, cell: GridLocation) -> Result<f64, GridError> {
        let idx = self.terrain.grid().check_cell(cell)?;
        Ok(self.terrain.grid().values()[idx] - height)
    }

    /// Number of cells left dry at `height`.
    pub fn total_visible_land(&self, height: f64) -> usize {
        self.flooded_regions(height).dry_count()
    }

    /// `total_visible_land(height) - total_visible_land(new_height)`.
    ///
    /// Positive when land is lost going from `height` to `new_height`.
    pub fn land_delta(&self, height: f64, new_height: f64) -> i64 {
        self.total_visible_land(height) as i64 - self.total_visible_land(new_height) as i64
    }

    /// Count the dry land masses at `height`, where land cells touching on a
    /// side or a corner belong to the same island.
    pub fn number_of_islands(&self, height: f64) -> usize {
        let mask = self.flooded_regions(height);
        count_islands(&self.terrain, &mask)
    }

    pub fn summary(&self, height: f64) -> FloodSummary {
        let mask = self.flooded_regions(height);
        let visible_land = mask.dry_count();
        FloodSummary {
            height,
            extrema: self.elevation_extrema(),
            visible_land,
            flooded_cells: mask.flooded_count(),
            islands: count_islands(&self.terrain, &mask),
        }
    }
}

fn count_islands(terrain: &Terrain, mask: &SubmersionMask) -> usize {
    let grid = terrain.grid();
    let mut islands = UnionFind::new(grid.rows(), grid.cols());
    let mut land_cells = 0usize;
    let mut merges = 0usize;

    for idx in 0..grid.cell_count() {
        if mask.flooded_at(idx) {
            continue;
        }
        land_cells += 1;
        for next in grid.neighbors8(grid.location(idx)) {
            let ni = next.row * grid.cols() + next.col;
            if !mask.flooded_at(ni) && islands.union_indices(idx, ni) {
                merges += 1;
            }
        }
    }

    let count = land_cells - merges;
    tracing::debug!(
        target: "rising_tides::islands",
        land_cells,
        islands = count,
        "islands.counted"
    );
    count
}
