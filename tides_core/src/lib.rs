//! Rising-tide analysis over elevation grids.
//!
//! Water enters a terrain at fixed source cells and spreads to every axially
//! connected cell at or below the water height. [`TerrainAnalyzer`] answers
//! questions about what is left above water: how much land, how many islands,
//! and how far any one cell sits above or below the surface.

pub mod analyzer;
pub mod flood;
pub mod grid;
pub mod terrain_file;
pub mod union_find;

pub use analyzer::{ElevationExtrema, FloodSummary, TerrainAnalyzer};
pub use flood::{compute_mask, SubmersionMask};
pub use grid::{ElevationGrid, GridError, GridLocation, Terrain};
pub use terrain_file::{
    load_terrain_file, load_terrain_from_env, TerrainDocument, TerrainFileError, TerrainOrigin,
    BUILTIN_TERRAIN, TERRAIN_PATH_ENV,
};
pub use union_find::UnionFind;
