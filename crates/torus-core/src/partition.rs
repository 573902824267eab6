use tracing::warn;

use crate::band::Band;
use crate::config::{RemainderPolicy, SimulationConfig};
use crate::error::ConfigError;
use crate::grid::Grid;

/// The bands of one generation, in row order.
///
/// Bands borrow their rows from the grid; nothing is copied until workers
/// write their outputs.
#[derive(Debug)]
pub struct Partition<'a> {
    bands: Vec<Band<'a>>,
    cols: usize,
}

impl<'a> Partition<'a> {
    /// Split `grid` into `workers` bands of `rows / workers` core rows each.
    ///
    /// Band `i` gets `grid.row(i*s - 1)` as its top halo (the last row for
    /// band 0) and `grid.row((i+1)*s)` as its bottom halo (the first row for
    /// the last band).
    pub fn new(
        grid: &'a Grid,
        workers: usize,
        remainder: RemainderPolicy,
    ) -> Result<Self, ConfigError> {
        let rows = grid.rows();
        SimulationConfig::new(workers).validate(rows)?;

        let size = rows / workers;
        let leftover = rows % workers;
        if leftover != 0 && remainder == RemainderPolicy::Truncate {
            warn!(
                rows,
                workers,
                dropped = leftover,
                "row count not divisible by worker count, dropping trailing rows"
            );
        }

        let last = workers - 1;
        let bands = (0..workers)
            .map(|i| {
                let start = i * size;
                let end = match remainder {
                    RemainderPolicy::ExtendLast if i == last => rows,
                    _ => start + size,
                };

                let top = if i > 0 { start - 1 } else { rows - 1 };
                let bottom = if i < last { end } else { 0 };

                Band::from_parts(
                    i,
                    start,
                    grid.cols(),
                    grid.row(top),
                    grid.row_range(start, end),
                    grid.row(bottom),
                )
            })
            .collect();

        Ok(Self {
            bands,
            cols: grid.cols(),
        })
    }

    #[must_use]
    pub fn bands(&self) -> &[Band<'a>] {
        &self.bands
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total core rows across all bands.
    #[must_use]
    pub fn core_rows(&self) -> usize {
        self.bands.iter().map(Band::core_rows).sum()
    }
}
