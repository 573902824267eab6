use crate::cell::Cell;
use crate::error::BandError;
use crate::neighborhood::Neighborhood;

/// One worker's unit of work: a run of core rows borrowed from the grid,
/// padded with a read-only halo row above and below.
///
/// Viewed as a [`Neighborhood`], row `0` is the top halo, rows
/// `1..=core_rows()` are the core and row `core_rows() + 1` is the bottom halo.
#[derive(Clone, Copy, Debug)]
pub struct Band<'a> {
    index: usize,
    first_row: usize,
    cols: usize,
    top: &'a [Cell],
    core: &'a [Cell],
    bottom: &'a [Cell],
}

impl<'a> Band<'a> {
    /// Build a band, checking every slice is made of whole rows of width `cols`.
    pub fn new(
        index: usize,
        first_row: usize,
        cols: usize,
        top: &'a [Cell],
        core: &'a [Cell],
        bottom: &'a [Cell],
    ) -> Result<Self, BandError> {
        let whole_rows = cols > 0
            && top.len() == cols
            && bottom.len() == cols
            && !core.is_empty()
            && core.len() % cols == 0;

        if !whole_rows {
            return Err(BandError::Shape { cols });
        }

        Ok(Self::from_parts(index, first_row, cols, top, core, bottom))
    }

    pub(crate) const fn from_parts(
        index: usize,
        first_row: usize,
        cols: usize,
        top: &'a [Cell],
        core: &'a [Cell],
        bottom: &'a [Cell],
    ) -> Self {
        Self {
            index,
            first_row,
            cols,
            top,
            core,
            bottom,
        }
    }

    /// Position of this band within its partition.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Grid row index of the first core row.
    #[must_use]
    pub const fn first_row(&self) -> usize {
        self.first_row
    }

    #[must_use]
    pub const fn core_rows(&self) -> usize {
        self.core.len() / self.cols
    }

    /// Core rows as one row-major slice.
    #[must_use]
    pub const fn core(&self) -> &'a [Cell] {
        self.core
    }

    #[must_use]
    pub const fn top_halo(&self) -> &'a [Cell] {
        self.top
    }

    #[must_use]
    pub const fn bottom_halo(&self) -> &'a [Cell] {
        self.bottom
    }

    /// All rows in band order: top halo, core rows, bottom halo.
    pub fn rows(self) -> impl Iterator<Item = &'a [Cell]> {
        std::iter::once(self.top)
            .chain(self.core.chunks_exact(self.cols))
            .chain(std::iter::once(self.bottom))
    }

    fn row(&self, row: usize) -> &'a [Cell] {
        let core_rows = self.core_rows();
        if row == 0 {
            self.top
        } else if row <= core_rows {
            let start = (row - 1) * self.cols;
            &self.core[start..start + self.cols]
        } else {
            self.bottom
        }
    }
}

impl Neighborhood for Band<'_> {
    fn height(&self) -> usize {
        self.core_rows() + 2
    }

    fn width(&self) -> usize {
        self.cols
    }

    fn cell(&self, row: usize, col: usize) -> Cell {
        self.row(row)[col]
    }
}
