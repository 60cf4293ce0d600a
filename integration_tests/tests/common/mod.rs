#![allow(dead_code)]

use std::path::PathBuf;

use rand::{rngs::SmallRng, Rng, SeedableRng};
use tides_core::{ElevationGrid, GridLocation, Terrain, TerrainAnalyzer};

pub fn analyzer(rows: Vec<Vec<f64>>, sources: &[(usize, usize)]) -> TerrainAnalyzer {
    let grid = ElevationGrid::from_rows(rows).expect("test grid should be valid");
    let sources = sources.iter().copied().map(GridLocation::from).collect();
    TerrainAnalyzer::new(Terrain::new(grid, sources).expect("test sources should be in bounds"))
}

/// Rough terrain with values in `[-10, 10)` and sources along the top edge.
pub fn random_analyzer(rows: usize, cols: usize, seed: u64) -> TerrainAnalyzer {
    let mut rng = SmallRng::seed_from_u64(seed);
    let values = (0..rows * cols)
        .map(|_| (rng.gen_range(-10.0..10.0_f64) * 4.0).round() / 4.0)
        .collect();
    let grid = ElevationGrid::new(rows, cols, values).expect("random grid");
    let source_count = rng.gen_range(1..=cols.min(3));
    let sources = (0..source_count)
        .map(|_| GridLocation::new(0, rng.gen_range(0..cols)))
        .collect();
    TerrainAnalyzer::new(Terrain::new(grid, sources).expect("random sources"))
}

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
