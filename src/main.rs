use std::error::Error;
use std::io::{self, Write};

use clap::Parser;
use cubeworld_mesh::{CUBE_SHADE, Face, batch_cube_vertices_sized, cube_shade, cube_vertices};
use cubeworld_sector::normalize;

mod cli;
mod config;

use cli::{Cli, Command};
use config::Settings;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    // Validated once here; every command shares the same grid.
    let settings = config::load_config(&cli.config)?.validate()?;
    log::debug!(
        "sector size {} half extent {}",
        settings.grid.size(),
        settings.half_extent
    );
    let mut out = io::stdout().lock();
    execute(&cli.command, &settings, &mut out)
}

fn execute(cmd: &Command, settings: &Settings, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    match cmd {
        Command::Sector { x, y, z } => {
            let p = (*x, *y, *z).into();
            let block = normalize(p)?;
            let sector = settings.grid.sector_of_block(block);
            let (sx, sy, sz) = sector.to_tuple();
            writeln!(out, "block  ({}, {}, {})", block.x, block.y, block.z)?;
            writeln!(out, "sector ({}, {}, {})", sx, sy, sz)?;
        }
        Command::Columns { sx, sz } => {
            let columns = settings.grid.reverse_sectorize((*sx, *sz).into())?;
            log::info!("{} columns in sector ({}, 0, {})", columns.len(), sx, sz);
            for (x, z) in columns {
                writeln!(out, "{} {}", x, z)?;
            }
        }
        Command::Cube {
            x,
            y,
            z,
            half_extent,
        } => {
            let center = (*x, *y, *z).into();
            let n = half_extent.unwrap_or(settings.half_extent);
            let verts = cube_vertices(center, n);
            let shade = cube_shade(center, n);
            for face in Face::ALL {
                let vs = &verts[face.index() * 12..face.index() * 12 + 12];
                writeln!(
                    out,
                    "{:<6} shade {:.1} {:?}",
                    format!("{:?}", face).to_lowercase(),
                    shade[face.index() * 4],
                    vs
                )?;
            }
        }
        Command::Batch { positions } => {
            let cubes = batch_cube_vertices_sized(positions, settings.half_extent);
            log::info!("generated {} cubes", cubes.len());
            for cube in &cubes {
                let line = cube
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                writeln!(out, "{}", line)?;
            }
            writeln!(out, "# shade {:?}", CUBE_SHADE)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubeworld_sector::SectorGrid;

    fn settings() -> Settings {
        Settings {
            grid: SectorGrid::default(),
            half_extent: 0.5,
        }
    }

    fn run_to_string(cmd: Command) -> String {
        let mut buf = Vec::new();
        execute(&cmd, &settings(), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn sector_command_reports_floor_sector() {
        let s = run_to_string(Command::Sector {
            x: -1.0,
            y: 0.0,
            z: -1.0,
        });
        assert!(s.contains("sector (-1, 0, -1)"), "{}", s);
    }

    #[test]
    fn columns_command_lists_every_column() {
        let s = run_to_string(Command::Columns { sx: 0, sz: 0 });
        assert_eq!(s.lines().count(), 256);
        assert_eq!(s.lines().next(), Some("0 0"));
    }

    #[test]
    fn cube_command_prints_six_faces() {
        let s = run_to_string(Command::Cube {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            half_extent: None,
        });
        assert_eq!(s.lines().count(), 6);
        assert!(s.starts_with("top"));
    }

    #[test]
    fn batch_command_handles_empty_input() {
        let s = run_to_string(Command::Batch { positions: vec![] });
        assert_eq!(s.lines().count(), 1);
    }

    #[test]
    fn non_finite_position_is_an_error() {
        let mut buf = Vec::new();
        let cmd = Command::Sector {
            x: f32::NAN,
            y: 0.0,
            z: 0.0,
        };
        assert!(execute(&cmd, &settings(), &mut buf).is_err());
    }
}
