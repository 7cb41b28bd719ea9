use std::fs;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use map_core::mapgen::{AgentState, Grid, WalkParams, apply_agent_walk, apply_automaton};
use map_core::types::{Cell, Direction, Pos};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};
use serde::Deserialize;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the map noise, agent placement, and both passes
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Map width in cells
    #[arg(long, default_value_t = 30)]
    width: usize,
    /// Map height in cells
    #[arg(long, default_value_t = 20)]
    height: usize,
    /// Path to a JSON file overriding the simulation parameters
    #[arg(short, long)]
    params: Option<String>,
    /// Pause between iterations, for watching the map evolve
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
struct SimulationParams {
    iterations: u32,
    radius: i32,
    threshold: f64,
    walker: WalkParams,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self { iterations: 3, radius: 1, threshold: 5.0, walker: WalkParams::default() }
    }
}

fn load_params(path: Option<&str>) -> Result<SimulationParams> {
    let Some(path) = path else {
        return Ok(SimulationParams::default());
    };
    let data =
        fs::read_to_string(path).with_context(|| format!("Failed to read params file: {path}"))?;
    serde_json::from_str(&data).with_context(|| "Failed to deserialize params JSON")
}

fn print_grid(grid: &Grid) {
    println!("--- Current Map ---");
    for row in grid.cells().chunks(grid.width()) {
        let line: Vec<&str> =
            row.iter().map(|&cell| if cell == Cell::Open { "." } else { "#" }).collect();
        println!("{}", line.join(" "));
    }
    println!("-------------------");
}

fn main() -> Result<()> {
    let args = Args::parse();
    let params = load_params(args.params.as_deref())?;

    println!("--- Cellular automata and drunk agent simulation (seed {}) ---", args.seed);

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut grid = Grid::random(args.width, args.height, &mut rng);
    let start = Pos {
        y: (rng.next_u32() as usize % args.height) as i32,
        x: (rng.next_u32() as usize % args.width) as i32,
    };
    let mut agent =
        AgentState::starting_at(start, Direction::from_index(rng.next_u32()), &params.walker);

    println!("\nInitial map state:");
    print_grid(&grid);

    for iteration in 0..params.iterations {
        println!("\n--- Iteration {} ---", iteration + 1);

        grid = apply_automaton(&grid, args.width, args.height, params.radius, params.threshold)
            .map_err(|error| anyhow::anyhow!("Automaton pass failed: {error:?}"))?;
        println!("Cellular automata:");
        print_grid(&grid);

        let (carved, next_agent) =
            apply_agent_walk(&grid, args.width, args.height, &params.walker, agent, &mut rng)
                .map_err(|error| anyhow::anyhow!("Agent walk failed: {error:?}"))?;
        grid = carved;
        agent = next_agent;
        println!("\nDrunk agent:");
        print_grid(&grid);

        thread::sleep(Duration::from_millis(args.delay_ms));
    }

    println!("\n--- Simulation finished ---");
    println!("Map fingerprint: {}", grid.fingerprint());

    Ok(())
}
