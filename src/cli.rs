use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cubeworld_geom::Vec3;

#[derive(Parser, Debug)]
#[command(name = "cubeworld", about = "Inspect cube geometry and sector indexing")]
pub struct Cli {
    /// Config file with [sector] and [cube] tables
    #[arg(long, default_value = "cubeworld.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Block and sector containing a world position
    #[command(allow_negative_numbers = true)]
    Sector { x: f32, y: f32, z: f32 },

    /// Columns (x, z) belonging to a sector
    #[command(allow_negative_numbers = true)]
    Columns { sx: i32, sz: i32 },

    /// Vertices and shades of one cube
    #[command(allow_negative_numbers = true)]
    Cube {
        x: f32,
        y: f32,
        z: f32,
        /// Overrides cube.half_extent from the config
        #[arg(long)]
        half_extent: Option<f32>,
    },

    /// Vertices for many cubes at once, positions given as x,y,z
    Batch {
        #[arg(allow_hyphen_values = true, value_parser = parse_position)]
        positions: Vec<Vec3>,
    },
}

pub fn parse_position(s: &str) -> Result<Vec3, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("bad number in {:?}: {}", s, e))?;
    Vec3::try_from(parts.as_slice()).map_err(|e| e.to_string())
}
