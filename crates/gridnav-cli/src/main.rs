//! gridnav CLI.
//!
//! - `gridnav map <scene>` - build the node grid and print it
//! - `gridnav simulate <scene>` - run the navigation action against the scene's actor and path

mod render;
mod scene;
mod sim;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use scene::Scene;

#[derive(Parser)]
#[command(name = "gridnav")]
#[command(about = "Inspect node grids and simulate grid navigation", version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the scene's node grid and print it
    Map {
        /// Scene file (YAML)
        scene: PathBuf,

        /// Show clearance above the surface below, in whole cells
        #[arg(long)]
        clearance: bool,
    },

    /// Drive the scene's actor along its path until the action finishes
    Simulate {
        /// Scene file (YAML)
        scene: PathBuf,

        /// Maximum number of ticks
        #[arg(long, default_value_t = 3000)]
        ticks: u64,

        /// Seconds per tick
        #[arg(long, default_value_t = 0.02)]
        dt: f32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Map { scene, clearance } => show_map(&Scene::load(&scene)?, clearance),
        Commands::Simulate { scene, ticks, dt } => run_simulation(&Scene::load(&scene)?, ticks, dt),
    }
}

fn show_map(scene: &Scene, clearance: bool) -> Result<()> {
    let grid = scene.build_grid()?;
    let path = scene.resolve_path(&grid)?;

    println!("{}", render::describe(&grid));
    print!(
        "{}",
        render::render_map(&grid, (!path.is_empty()).then_some(&path), clearance)
    );
    Ok(())
}

fn run_simulation(scene: &Scene, ticks: u64, dt: f32) -> Result<()> {
    let report = sim::simulate(scene, ticks, dt)?;
    println!(
        "{:?} after {} ticks at ({:.2}, {:.2}), mode {:?}",
        report.status, report.ticks, report.position.x, report.position.y, report.mode
    );
    Ok(())
}
