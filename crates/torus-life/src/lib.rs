//! Two-state life on a toroidal grid, stepped in parallel row bands.

mod rules;
mod simulation;

pub use rules::{BIRTH, SURVIVAL, count_neighbors, evaluate, next_state};
pub use simulation::LifeSimulation;
pub use torus_core::{
    Cell, ConfigError, DEFAULT_GENERATIONS, Grid, MalformedGridError, RemainderPolicy,
    SimulationConfig, SimulationError, SimulationResult, WorkerFailure,
};

use torus_core::Coordinator;

/// Simulate `config.generations` generations of `initial` using
/// `config.workers` parallel bands and return the final grid.
pub fn run(initial: Grid, config: &SimulationConfig) -> SimulationResult<Grid> {
    Coordinator::new(initial, LifeSimulation, *config)?.run()
}
