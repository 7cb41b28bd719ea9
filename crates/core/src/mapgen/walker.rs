//! Drunk-agent pass that carves connected corridors and rooms into the grid.

use rand_chacha::rand_core::RngCore;
use serde::{Deserialize, Serialize};

use crate::types::{Cell, Direction, MapGenError, Pos};

use super::grid::Grid;
use super::rng::{random_direction, unit_f64};

/// Tuning knobs for one carving pass. The growth values ramp the matching
/// probability toward 1.0 on every step or walk where its event did not fire.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkParams {
    pub walks: i32,
    pub steps_per_walk: i32,
    pub room_width: i32,
    pub room_height: i32,
    pub prob_room: f64,
    pub prob_room_growth: f64,
    pub prob_dir: f64,
    pub prob_dir_growth: f64,
}

impl Default for WalkParams {
    fn default() -> Self {
        Self {
            walks: 5,
            steps_per_walk: 10,
            room_width: 5,
            room_height: 3,
            prob_room: 0.1,
            prob_room_growth: 0.05,
            prob_dir: 0.2,
            prob_dir_growth: 0.03,
        }
    }
}

/// Transient walker state threaded by value through each call.
///
/// The caller holds the single owning copy between calls, so repeated walks
/// continue the same logical agent instead of restarting it. Both momentum
/// probabilities live here and only reset on their trigger events.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgentState {
    pub pos: Pos,
    pub dir: Direction,
    pub prob_dir: f64,
    pub prob_room: f64,
}

impl AgentState {
    /// Fresh agent with both momentum probabilities at their configured bases.
    pub fn starting_at(pos: Pos, dir: Direction, params: &WalkParams) -> Self {
        Self { pos, dir, prob_dir: params.prob_dir, prob_room: params.prob_room }
    }
}

/// Runs `walks` walks of `steps_per_walk` steps each and returns the carved
/// grid together with the updated agent.
///
/// Each step marks the agent's cell `Open`, decides whether to resample the
/// heading, then tries to advance one cell. A candidate cell outside the grid
/// consumes the step without displacement and resamples the heading instead.
/// After each walk the agent may stamp an `Open` rectangle centered on its
/// position, clamped to the grid.
pub fn drunk_walk<R: RngCore>(
    grid: &Grid,
    params: &WalkParams,
    mut agent: AgentState,
    rng: &mut R,
) -> Result<(Grid, AgentState), MapGenError> {
    if params.walks < 0 {
        return Err(MapGenError::InvalidParameter("walk count must be non-negative"));
    }
    if params.steps_per_walk < 0 {
        return Err(MapGenError::InvalidParameter("steps per walk must be non-negative"));
    }
    if !grid.in_bounds(agent.pos) {
        return Err(MapGenError::OutOfBounds { pos: agent.pos });
    }

    let mut next = grid.clone();
    for _walk in 0..params.walks {
        for _step in 0..params.steps_per_walk {
            next.set_cell(agent.pos, Cell::Open)?;

            if unit_f64(rng) < agent.prob_dir {
                agent.dir = random_direction(rng);
                agent.prob_dir = params.prob_dir;
            } else {
                agent.prob_dir = (agent.prob_dir + params.prob_dir_growth).min(1.0);
            }

            let (dy, dx) = agent.dir.offset();
            let candidate = Pos { y: agent.pos.y + dy, x: agent.pos.x + dx };
            if next.in_bounds(candidate) {
                agent.pos = candidate;
            } else {
                // Blocked at the edge: stay put, pick a fresh heading.
                agent.dir = random_direction(rng);
            }
        }

        if unit_f64(rng) < agent.prob_room {
            carve_room_around(&mut next, agent.pos, params.room_width, params.room_height)?;
            agent.prob_room = params.prob_room;
        } else {
            agent.prob_room = (agent.prob_room + params.prob_room_growth).min(1.0);
        }
    }

    Ok((next, agent))
}

fn carve_room_around(
    grid: &mut Grid,
    center: Pos,
    room_width: i32,
    room_height: i32,
) -> Result<(), MapGenError> {
    let max_y = grid.height() as i32 - 1;
    let max_x = grid.width() as i32 - 1;
    let top = (center.y - room_height / 2).clamp(0, max_y);
    let bottom = (center.y + room_height / 2).clamp(0, max_y);
    let left = (center.x - room_width / 2).clamp(0, max_x);
    let right = (center.x + room_width / 2).clamp(0, max_x);

    for y in top..=bottom {
        for x in left..=right {
            grid.set_cell(Pos { y, x }, Cell::Open)?;
        }
    }
    Ok(())
}
