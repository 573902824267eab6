//! Toroidal grid core.
//!
//! Splits a wrapping grid into row bands padded with one halo row on each
//! side, evaluates every band on its own worker thread and stitches the
//! results back together once all workers have returned.
//!
//! ```text
//! Generation N:
//! ┌──────────────────────────────────────────────┐
//! │  Phase 1: Partition grid into halo bands     │
//! │  Phase 2: Step every band in parallel        │
//! │  Phase 3: Barrier                            │
//! │  Phase 4: Stitch core rows into next grid    │
//! └──────────────────────────────────────────────┘
//! ```

mod band;
mod cell;
mod config;
mod coordinator;
mod error;
mod grid;
mod neighborhood;
mod partition;
mod simulation;

pub use band::Band;
pub use cell::Cell;
pub use config::{DEFAULT_GENERATIONS, RemainderPolicy, SimulationConfig};
pub use coordinator::{Coordinator, State};
pub use error::{
    BandError, ConfigError, MalformedGridError, SimulationError, SimulationResult, WorkerFailure,
};
pub use grid::Grid;
pub use neighborhood::Neighborhood;
pub use partition::Partition;
pub use simulation::Simulation;
