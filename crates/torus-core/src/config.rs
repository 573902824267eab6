//! Immutable run configuration.

use crate::error::ConfigError;

/// Generations simulated when nothing else is configured.
pub const DEFAULT_GENERATIONS: usize = 100;

/// What happens to the `rows % workers` rows left over after every band
/// receives `rows / workers` core rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RemainderPolicy {
    /// The last band also owns the leftover rows. The grid keeps its shape.
    #[default]
    ExtendLast,
    /// Leftover rows belong to no band and are dropped from the next
    /// generation, so the grid shrinks to `workers * (rows / workers)` rows.
    Truncate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SimulationConfig {
    /// Number of bands, and of worker threads stepping them.
    pub workers: usize,
    /// Number of generations to simulate.
    pub generations: usize,
    pub remainder: RemainderPolicy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            workers: 1,
            generations: DEFAULT_GENERATIONS,
            remainder: RemainderPolicy::default(),
        }
    }
}

impl SimulationConfig {
    #[must_use]
    pub fn new(workers: usize) -> Self {
        Self {
            workers,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    #[must_use]
    pub const fn with_remainder(mut self, remainder: RemainderPolicy) -> Self {
        self.remainder = remainder;
        self
    }

    /// Check the worker count against a grid with `rows` rows.
    pub fn validate(&self, rows: usize) -> Result<(), ConfigError> {
        if self.workers == 0 || self.workers > rows {
            return Err(ConfigError::InvalidWorkerCount {
                workers: self.workers,
                rows,
            });
        }
        Ok(())
    }
}
