use torus_core::{Band, BandError, Cell, Neighborhood, Simulation};

use crate::rules;

/// Worker that applies the life rules to every core cell of a band.
///
/// Vertical neighbors of the first and last core rows come from the band's
/// halo rows; columns wrap within each row.
#[derive(Clone, Copy, Debug, Default)]
pub struct LifeSimulation;

impl Simulation for LifeSimulation {
    fn step_band(&self, band: &Band<'_>) -> Result<Vec<Cell>, BandError> {
        let cols = band.width();
        let mut next = Vec::with_capacity(band.core_rows() * cols);

        for row in 1..=band.core_rows() {
            for col in 0..cols {
                next.push(rules::evaluate(band, row, col));
            }
        }

        Ok(next)
    }
}
