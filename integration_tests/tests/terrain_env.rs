mod common;

use tides_core::{load_terrain_from_env, TerrainOrigin, TERRAIN_PATH_ENV};

// Environment variables are process-wide, so every case runs in one test.
#[test]
fn terrain_path_override_and_fallback() -> anyhow::Result<()> {
    let fixture = common::fixture("twin_strips.json");

    std::env::set_var(TERRAIN_PATH_ENV, &fixture);
    let (name, terrain, origin) = load_terrain_from_env()?;
    assert_eq!(name, "twin_strips");
    assert_eq!(origin, TerrainOrigin::File(fixture));
    assert_eq!(terrain.grid().rows(), 6);

    std::env::set_var(TERRAIN_PATH_ENV, common::fixture("missing.json"));
    let (name, _, origin) = load_terrain_from_env()?;
    assert_eq!(name, "sample_atoll");
    assert_eq!(origin, TerrainOrigin::Builtin);

    std::env::remove_var(TERRAIN_PATH_ENV);
    let (_, _, origin) = load_terrain_from_env()?;
    assert_eq!(origin, TerrainOrigin::Builtin);
    Ok(())
}
