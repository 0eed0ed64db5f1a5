//! CLI run flow: load a grid, run the timed simulation, then search for the
//! first nova.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crate::config::{DEFAULT_NOVA_BOUND, DEFAULT_STEPS};
use crate::render::{render, PrintOptions};
use crate::simulation::{first_nova, simulate, Grid};

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to the grid input file (rows of digits)
    pub input: PathBuf,

    /// Number of steps for the timed run
    #[arg(short, long, default_value_t = DEFAULT_STEPS)]
    pub steps: u32,

    /// Upper bound (exclusive) for the nova search
    #[arg(long, default_value_t = DEFAULT_NOVA_BOUND)]
    pub max_steps: u32,

    /// Highlight freshly reset cells in the printed grid
    #[arg(short, long)]
    pub fancy: bool,

    /// Stop after the timed run instead of searching for a nova
    #[arg(long)]
    pub skip_search: bool,
}

/// Execute the full run described by `args`.
pub fn run(args: &CliArgs) -> anyhow::Result<()> {
    let input = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let grid = Grid::parse(&input)?;

    log::info!("Grid size: {}x{}", grid.width(), grid.height());
    log::info!("Running {} steps...", args.steps);

    let result = simulate(&grid, args.steps);

    println!("{}", render(&result.grid, PrintOptions { fancy: args.fancy }));
    log::info!(
        "Total flashes after {} steps: {}",
        args.steps,
        result.flashes
    );
    if result.novas.is_empty() {
        log::info!("No novas during the timed run");
    } else {
        log::info!("Novas at steps: {:?}", result.novas);
    }

    if args.skip_search {
        return Ok(());
    }

    log::info!("Searching for the first nova (bound {})...", args.max_steps);
    let step = first_nova(&grid, args.max_steps)?;
    log::info!("First nova at step {}", step);

    Ok(())
}
