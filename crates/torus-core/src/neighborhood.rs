use crate::cell::Cell;

/// A rectangular view of cells whose edges wrap around.
///
/// Implemented by [`Grid`](crate::Grid), which wraps on both axes, and by
/// [`Band`](crate::Band), which wraps columns and reaches neighboring rows
/// through its halo.
pub trait Neighborhood {
    /// Number of rows visible through this view.
    fn height(&self) -> usize;

    /// Number of columns in every row.
    fn width(&self) -> usize;

    /// Cell at an in-range position. `row < height()` and `col < width()`.
    fn cell(&self, row: usize, col: usize) -> Cell;

    /// Cell at a signed position, reduced modulo the view's dimensions.
    fn wrapped(&self, row: isize, col: isize) -> Cell {
        let row = row.rem_euclid(self.height() as isize) as usize;
        let col = col.rem_euclid(self.width() as isize) as usize;
        self.cell(row, col)
    }
}
