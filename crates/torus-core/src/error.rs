//! Error types for grid loading, configuration and simulation.

use thiserror::Error;

/// Invalid simulation configuration, detected before the first generation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Worker count must be between 1 and the grid's row count.
    #[error("invalid worker count {workers}: must be between 1 and the row count {rows}")]
    InvalidWorkerCount { workers: usize, rows: usize },

    /// The worker thread pool could not be created.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Grid input that is not a non-empty rectangle of `.` and `O`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedGridError {
    #[error("grid has no rows")]
    Empty,

    #[error("line {line}: row has no cells")]
    EmptyRow { line: usize },

    #[error("line {line}: expected {expected} cells, found {found}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}, column {column}: unrecognized cell {found:?}")]
    UnknownCell {
        line: usize,
        column: usize,
        found: char,
    },

    /// Flat cell buffer does not match the declared dimensions.
    #[error("expected {rows}x{cols} cells, found {found}")]
    Dimensions {
        rows: usize,
        cols: usize,
        found: usize,
    },
}

/// Why a single band could not be stepped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BandError {
    #[error("band rows do not match width {cols}")]
    Shape { cols: usize },

    #[error("worker returned {found} cells, expected {expected}")]
    OutputShape { expected: usize, found: usize },

    #[error("worker panicked: {0}")]
    Panicked(String),

    #[error("{0}")]
    Other(String),
}

/// A band failed, so the whole generation failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("generation {generation}, band {band}: {reason}")]
pub struct WorkerFailure {
    pub generation: usize,
    pub band: usize,
    pub reason: BandError,
}

/// Any error that aborts a simulation run.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    MalformedGrid(#[from] MalformedGridError),

    #[error(transparent)]
    Worker(#[from] WorkerFailure),
}

/// Result type for simulation operations.
pub type SimulationResult<T> = Result<T, SimulationError>;
