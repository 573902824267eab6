use crate::band::Band;
use crate::cell::Cell;
use crate::error::BandError;

/// Per-band update rule run by each worker.
///
/// Implementations read the whole band, halo rows included, and return the
/// next state of the core rows only, row-major, `core_rows() * width()`
/// cells long. They must not touch shared mutable state.
pub trait Simulation: Send + Sync {
    fn step_band(&self, band: &Band<'_>) -> Result<Vec<Cell>, BandError>;
}
