//! Human-readable rendering of analyzer results.

use tides_core::{ElevationExtrema, FloodSummary, GridLocation, SubmersionMask, Terrain};

pub fn describe_extrema(extrema: &ElevationExtrema) -> String {
    format!(
        "Lowest point: {:.2} meters\nHighest point: {:.2} meters",
        extrema.lowest, extrema.highest
    )
}

pub fn describe_flooded(height: f64, cell: GridLocation, flooded: bool) -> String {
    let state = if flooded { "underwater" } else { "above water" };
    format!("Cell {cell} is {state} at a water height of {height:.2} meters")
}

/// Label the signed offset from `height_above_water` by direction; the
/// printed magnitude is always positive.
pub fn describe_height_above_water(cell: GridLocation, offset: f64) -> String {
    let direction = if offset < 0.0 { "below" } else { "above" };
    format!("Cell {cell} is {:.2} meters {direction} water", offset.abs())
}

pub fn describe_visible_land(height: f64, land: usize) -> String {
    format!("{land} cells of land remain above water at {height:.2} meters")
}

/// Positive deltas mean land disappears under the new height.
pub fn describe_land_delta(height: f64, new_height: f64, delta: i64) -> String {
    let change = match delta.signum() {
        1 => format!("Will lose {} cells of land", delta),
        -1 => format!("Will gain {} cells of land", delta.unsigned_abs()),
        _ => "No change in land".to_string(),
    };
    format!("{change} going from {height:.2} to {new_height:.2} meters")
}

pub fn describe_islands(height: f64, islands: usize) -> String {
    let noun = if islands == 1 { "island" } else { "islands" };
    format!("{islands} {noun} at a water height of {height:.2} meters")
}

pub fn describe_summary(name: &str, summary: &FloodSummary) -> String {
    format!(
        "Terrain: {name}\nWater height: {:.2}\nElevation range: {:.2} to {:.2}\nVisible land: {}\nFlooded cells: {}\nIslands: {}",
        summary.height,
        summary.extrema.lowest,
        summary.extrema.highest,
        summary.visible_land,
        summary.flooded_cells,
        summary.islands,
    )
}

/// Draw the mask as text: `S` for sources, `~` for water, `#` for land.
pub fn render_mask(terrain: &Terrain, mask: &SubmersionMask) -> String {
    let mut out = String::with_capacity((mask.cols() + 1) * mask.rows());
    for (row, cells) in mask.row_slices().enumerate() {
        for (col, &flooded) in cells.iter().enumerate() {
            let glyph = if terrain.is_source(GridLocation::new(row, col)) {
                'S'
            } else if flooded {
                '~'
            } else {
                '#'
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}
