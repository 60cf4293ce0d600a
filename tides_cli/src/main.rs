use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tides_core::{load_terrain_file, load_terrain_from_env, GridLocation, TerrainAnalyzer};
use tracing::info;

mod report;

#[derive(Parser, Debug)]
#[command(author, version, about = "Rising-tide terrain analysis", long_about = None)]
struct Cli {
    /// Terrain document to analyse (defaults to $TIDES_TERRAIN_PATH, then the builtin sample)
    #[arg(long, global = true)]
    terrain: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lowest and highest elevation on the terrain
    Extrema,
    /// Whether a cell is underwater at a water height
    Flooded {
        #[arg(long, allow_hyphen_values = true)]
        height: f64,
        #[arg(long)]
        row: usize,
        #[arg(long)]
        col: usize,
    },
    /// How far a cell sits above or below the water
    Height {
        #[arg(long, allow_hyphen_values = true)]
        height: f64,
        #[arg(long)]
        row: usize,
        #[arg(long)]
        col: usize,
    },
    /// Cells of land left above water
    Land {
        #[arg(long, allow_hyphen_values = true)]
        height: f64,
    },
    /// Land lost or gained moving between two water heights
    Delta {
        #[arg(long, allow_hyphen_values = true)]
        height: f64,
        #[arg(long, allow_hyphen_values = true)]
        new_height: f64,
    },
    /// Number of islands at a water height
    Islands {
        #[arg(long, allow_hyphen_values = true)]
        height: f64,
    },
    /// Draw the flooded terrain as text
    Render {
        #[arg(long, allow_hyphen_values = true)]
        height: f64,
    },
    /// All headline numbers for one water height
    Summary {
        #[arg(long, allow_hyphen_values = true)]
        height: f64,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let (name, terrain) = match &cli.terrain {
        Some(path) => load_terrain_file(path)
            .with_context(|| format!("Failed to load terrain from {}", path.display()))?,
        None => {
            let (name, terrain, origin) =
                load_terrain_from_env().with_context(|| "Failed to load builtin terrain")?;
            info!(?origin, "terrain.selected");
            (name, terrain)
        }
    };
    let analyzer = TerrainAnalyzer::new(terrain);

    let output = match cli.command {
        Command::Extrema => report::describe_extrema(&analyzer.elevation_extrema()),
        Command::Flooded { height, row, col } => {
            let cell = GridLocation::new(row, col);
            let flooded = analyzer
                .is_flooded(height, cell)
                .with_context(|| format!("Cannot check cell {cell}"))?;
            report::describe_flooded(height, cell, flooded)
        }
        Command::Height { height, row, col } => {
            let cell = GridLocation::new(row, col);
            let offset = analyzer
                .height_above_water(height, cell)
                .with_context(|| format!("Cannot measure cell {cell}"))?;
            report::describe_height_above_water(cell, offset)
        }
        Command::Land { height } => {
            report::describe_visible_land(height, analyzer.total_visible_land(height))
        }
        Command::Delta { height, new_height } => report::describe_land_delta(
            height,
            new_height,
            analyzer.land_delta(height, new_height),
        ),
        Command::Islands { height } => {
            report::describe_islands(height, analyzer.number_of_islands(height))
        }
        Command::Render { height } => {
            let mask = analyzer.flooded_regions(height);
            report::render_mask(analyzer.terrain(), &mask)
        }
        Command::Summary { height, json } => {
            let summary = analyzer.summary(height);
            if json {
                serde_json::to_string_pretty(&summary)?
            } else {
                report::describe_summary(&name, &summary)
            }
        }
    };

    println!("{}", output.trim_end());
    Ok(())
}
