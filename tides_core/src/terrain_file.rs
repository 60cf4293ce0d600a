//! Terrain documents.
//!
//! A terrain is described in JSON as a name, a matrix of heights and a list of
//! `[row, col]` water sources. The sample terrain shipped with the crate is
//! used when `TIDES_TERRAIN_PATH` is unset or unusable.

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::{ElevationGrid, GridError, GridLocation, Terrain};

pub const BUILTIN_TERRAIN: &str = include_str!("data/sample_terrain.json");
pub const TERRAIN_PATH_ENV: &str = "TIDES_TERRAIN_PATH";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainDocument {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub heights: Vec<Vec<f64>>,
    #[serde(default)]
    pub sources: Vec<GridLocation>,
}

impl TerrainDocument {
    pub fn builtin() -> Result<Self, TerrainFileError> {
        Self::from_json_str(BUILTIN_TERRAIN)
    }

    pub fn from_json_str(json: &str) -> Result<Self, TerrainFileError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, TerrainFileError> {
        let contents = fs::read_to_string(path).map_err(|source| TerrainFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Validate the heights and sources into a [`Terrain`].
    pub fn into_terrain(self) -> Result<Terrain, TerrainFileError> {
        let grid = ElevationGrid::from_rows(self.heights)?;
        Ok(Terrain::new(grid, self.sources)?)
    }
}

#[derive(Debug, Error)]
pub enum TerrainFileError {
    #[error("failed to parse terrain document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read terrain document from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid terrain: {0}")]
    Grid(#[from] GridError),
}

/// Where a loaded terrain came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerrainOrigin {
    File(PathBuf),
    Builtin,
}

/// Load a terrain from `path`, logging the outcome.
pub fn load_terrain_file(path: &Path) -> Result<(String, Terrain), TerrainFileError> {
    let document = TerrainDocument::from_file(path)?;
    let name = document.name.clone();
    let terrain = document.into_terrain()?;
    tracing::info!(
        target: "rising_tides::config",
        path = %path.display(),
        name = %name,
        rows = terrain.grid().rows(),
        cols = terrain.grid().cols(),
        sources = terrain.sources().len(),
        "terrain.loaded=file"
    );
    Ok((name, terrain))
}

/// Load the terrain named by `TIDES_TERRAIN_PATH`, falling back to the
/// builtin sample when the variable is unset or the file is unusable.
pub fn load_terrain_from_env() -> Result<(String, Terrain, TerrainOrigin), TerrainFileError> {
    if let Some(path) = env::var_os(TERRAIN_PATH_ENV).map(PathBuf::from) {
        match load_terrain_file(&path) {
            Ok((name, terrain)) => return Ok((name, terrain, TerrainOrigin::File(path))),
            Err(err) => {
                tracing::warn!(
                    target: "rising_tides::config",
                    path = %path.display(),
                    error = %err,
                    "terrain.load_failed"
                );
            }
        }
    }

    let document = TerrainDocument::builtin()?;
    let name = document.name.clone();
    let terrain = document.into_terrain()?;
    tracing::info!(
        target: "rising_tides::config",
        name = %name,
        "terrain.loaded=builtin"
    );
    Ok((name, terrain, TerrainOrigin::Builtin))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_terrain_parses_and_validates() {
        let document = TerrainDocument::builtin().unwrap();
        assert_eq!(document.name, "sample_atoll");
        let terrain = document.into_terrain().unwrap();
        assert_eq!(terrain.grid().rows(), 7);
        assert_eq!(terrain.grid().cols(), 8);
        assert_eq!(terrain.sources().len(), 2);
    }

    #[test]
    fn sources_default_to_empty() {
        let document =
            TerrainDocument::from_json_str(r#"{ "name": "dry", "heights": [[1.0, 2.0]] }"#)
                .unwrap();
        assert!(document.sources.is_empty());
        assert!(document.description.is_empty());
    }

    #[test]
    fn source_outside_grid_is_reported() {
        let document = TerrainDocument::from_json_str(
            r#"{ "name": "bad", "heights": [[1.0, 2.0]], "sources": [[0, 2]] }"#,
        )
        .unwrap();
        let err = document.into_terrain().unwrap_err();
        assert!(matches!(
            err,
            TerrainFileError::Grid(GridError::SourceOutOfBounds { .. })
        ));
    }

    #[test]
    fn empty_heights_are_degenerate() {
        let document =
            TerrainDocument::from_json_str(r#"{ "name": "void", "heights": [] }"#).unwrap();
        assert!(matches!(
            document.into_terrain(),
            Err(TerrainFileError::Grid(GridError::DegenerateGrid { .. }))
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = TerrainDocument::from_json_str("{ \"name\": ").unwrap_err();
        assert!(matches!(err, TerrainFileError::Parse(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let path = Path::new("definitely/not/here/terrain.json");
        let err = TerrainDocument::from_file(path).unwrap_err();
        assert!(matches!(err, TerrainFileError::Read { .. }));
    }
}
