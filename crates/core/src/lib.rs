pub mod mapgen;
pub mod types;

pub use mapgen::{AgentState, Grid, WalkParams, apply_agent_walk, apply_automaton};
pub use types::*;
