use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, info};

use crate::band::Band;
use crate::cell::Cell;
use crate::config::SimulationConfig;
use crate::error::{BandError, ConfigError, SimulationResult, WorkerFailure};
use crate::grid::Grid;
use crate::neighborhood::Neighborhood;
use crate::partition::Partition;
use crate::simulation::Simulation;

/// Where a run is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// No generation has been simulated yet.
    Loading,
    /// The given number of generations have completed.
    Simulating(usize),
    /// Every configured generation has completed.
    Done,
}

/// Owns the canonical grid between generations and drives the
/// partition, parallel step and stitch cycle.
pub struct Coordinator<S: Simulation> {
    grid: Grid,
    simulation: S,
    config: SimulationConfig,
    pool: ThreadPool,
    generation: usize,
}

impl<S: Simulation> Coordinator<S> {
    /// Validate the configuration against `grid` and start a pool of exactly
    /// `config.workers` threads.
    pub fn new(grid: Grid, simulation: S, config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate(grid.rows())?;

        let pool = ThreadPoolBuilder::new()
            .num_threads(config.workers)
            .thread_name(|i| format!("torus-worker-{i}"))
            .build()?;

        Ok(Self {
            grid,
            simulation,
            config,
            pool,
            generation: 0,
        })
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Generations completed so far.
    #[must_use]
    pub const fn generation(&self) -> usize {
        self.generation
    }

    #[must_use]
    pub const fn state(&self) -> State {
        if self.generation >= self.config.generations {
            State::Done
        } else if self.generation == 0 {
            State::Loading
        } else {
            State::Simulating(self.generation)
        }
    }

    /// Simulate one generation.
    ///
    /// Every band is stepped on the pool and the call returns only once all
    /// of them have finished. If any band fails the grid is left untouched.
    /// Once every configured generation has run this is a no-op.
    pub fn step(&mut self) -> SimulationResult<()> {
        if self.state() == State::Done {
            return Ok(());
        }

        let generation = self.generation + 1;

        let next = {
            let partition = Partition::new(&self.grid, self.config.workers, self.config.remainder)?;
            let simulation = &self.simulation;

            let outputs = self.pool.install(|| {
                partition
                    .bands()
                    .par_iter()
                    .map(|band| step_band(simulation, band, generation))
                    .collect::<Result<Vec<_>, _>>()
            })?;

            Grid::stitch(partition.cols(), outputs)?
        };

        self.grid = next;
        self.generation = generation;

        debug!(
            generation,
            rows = self.grid.rows(),
            population = self.grid.population(),
            "generation complete"
        );

        Ok(())
    }

    /// Simulate every remaining generation and hand back the final grid.
    pub fn run(mut self) -> SimulationResult<Grid> {
        info!(
            rows = self.grid.rows(),
            cols = self.grid.cols(),
            workers = self.config.workers,
            generations = self.config.generations,
            "starting simulation"
        );

        while self.state() != State::Done {
            self.step()?;
        }

        info!(
            generations = self.generation,
            population = self.grid.population(),
            "simulation finished"
        );

        Ok(self.grid)
    }
}

/// Run one worker, turning errors, panics and misshapen output into a
/// [`WorkerFailure`] for the whole generation.
fn step_band<S: Simulation>(
    simulation: &S,
    band: &Band<'_>,
    generation: usize,
) -> Result<Vec<Cell>, WorkerFailure> {
    let fail = |reason| WorkerFailure {
        generation,
        band: band.index(),
        reason,
    };

    let output = panic::catch_unwind(AssertUnwindSafe(|| simulation.step_band(band)))
        .map_err(|payload| fail(BandError::Panicked(panic_message(payload.as_ref()))))?
        .map_err(fail)?;

    let expected = band.core_rows() * band.width();
    if output.len() != expected {
        return Err(fail(BandError::OutputShape {
            expected,
            found: output.len(),
        }));
    }

    Ok(output)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
