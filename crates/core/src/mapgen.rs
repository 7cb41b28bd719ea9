//! Procedural tile-map generation built from two cooperating passes over one
//! grid: cellular-automaton smoothing and a drunk-agent carver.

mod automaton;
mod grid;
mod rng;
mod walker;

use rand_chacha::rand_core::RngCore;

use crate::types::MapGenError;

pub use automaton::smooth_step;
pub use grid::Grid;
pub use walker::{AgentState, WalkParams, drunk_walk};

/// One cellular-automaton smoothing iteration, validating the caller's view
/// of the grid dimensions first.
pub fn apply_automaton(
    grid: &Grid,
    width: usize,
    height: usize,
    radius: i32,
    threshold: f64,
) -> Result<Grid, MapGenError> {
    check_dimensions(grid, width, height)?;
    automaton::smooth_step(grid, radius, threshold)
}

/// One multi-walk carving pass, threading the agent state through by value.
pub fn apply_agent_walk<R: RngCore>(
    grid: &Grid,
    width: usize,
    height: usize,
    params: &WalkParams,
    agent: AgentState,
    rng: &mut R,
) -> Result<(Grid, AgentState), MapGenError> {
    check_dimensions(grid, width, height)?;
    walker::drunk_walk(grid, params, agent, rng)
}

fn check_dimensions(grid: &Grid, width: usize, height: usize) -> Result<(), MapGenError> {
    if grid.width() != width || grid.height() != height {
        return Err(MapGenError::InvalidParameter("grid dimensions do not match width and height"));
    }
    Ok(())
}
