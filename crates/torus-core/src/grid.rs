//! Rectangular toroidal grid of cells.

use std::fmt;
use std::str::FromStr;

use crate::cell::Cell;
use crate::error::MalformedGridError;
use crate::neighborhood::Neighborhood;

/// A `rows × cols` grid stored row-major.
///
/// A `Grid` is always a non-empty rectangle. It is never mutated while a
/// generation reads it; each generation produces a new grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from a row-major cell buffer.
    pub fn new(rows: usize, cols: usize, cells: Vec<Cell>) -> Result<Self, MalformedGridError> {
        if rows == 0 {
            return Err(MalformedGridError::Empty);
        }
        if cols == 0 {
            return Err(MalformedGridError::EmptyRow { line: 1 });
        }
        if cells.len() != rows * cols {
            return Err(MalformedGridError::Dimensions {
                rows,
                cols,
                found: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Build a grid from nested rows, checking they are all the same length.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, MalformedGridError>
    where
        R: AsRef<[Cell]>,
    {
        let mut cells = Vec::new();
        let mut cols = None;
        let mut count = 0;

        for (index, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            check_width(&mut cols, row.len(), index + 1)?;
            cells.extend_from_slice(row);
            count += 1;
        }

        let cols = cols.ok_or(MalformedGridError::Empty)?;
        Self::new(count, cols, cells)
    }

    /// Concatenate per-band outputs, in band order, into one grid.
    ///
    /// Every output is a row-major run of whole rows of width `cols`.
    pub fn stitch(
        cols: usize,
        outputs: impl IntoIterator<Item = Vec<Cell>>,
    ) -> Result<Self, MalformedGridError> {
        let mut cells = Vec::new();
        for output in outputs {
            if cells.is_empty() {
                cells = output;
            } else {
                cells.extend(output);
            }
        }

        if cols == 0 {
            return Err(MalformedGridError::EmptyRow { line: 1 });
        }
        if cells.len() % cols != 0 {
            return Err(MalformedGridError::Dimensions {
                rows: cells.len() / cols + 1,
                cols,
                found: cells.len(),
            });
        }

        Self::new(cells.len() / cols, cols, cells)
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Row `index` as a slice. `index < rows()`.
    #[must_use]
    pub fn row(&self, index: usize) -> &[Cell] {
        let start = index * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Contiguous run of rows `[start, end)` as one row-major slice.
    #[must_use]
    pub fn row_range(&self, start: usize, end: usize) -> &[Cell] {
        &self.cells[start * self.cols..end * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.cols)
    }

    /// Bounds-checked lookup.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols).then(|| self.cells[row * self.cols + col])
    }

    /// Number of live cells.
    #[must_use]
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }
}

impl Neighborhood for Grid {
    fn height(&self) -> usize {
        self.rows
    }

    fn width(&self) -> usize {
        self.cols
    }

    fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }
}

fn check_width(
    cols: &mut Option<usize>,
    width: usize,
    line: usize,
) -> Result<(), MalformedGridError> {
    match *cols {
        None if width == 0 => Err(MalformedGridError::EmptyRow { line }),
        None => {
            *cols = Some(width);
            Ok(())
        }
        Some(expected) if expected != width => Err(MalformedGridError::Ragged {
            line,
            expected,
            found: width,
        }),
        Some(_) => Ok(()),
    }
}

/// Parses the `.`/`O` text format, one row per line.
///
/// Surrounding whitespace on each line and trailing blank lines are ignored.
impl FromStr for Grid {
    type Err = MalformedGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::new();
        let mut cols = None;
        let mut rows = 0;

        for (index, line) in s.trim_end().lines().enumerate() {
            let line_number = index + 1;
            let start = cells.len();

            for (column, c) in line.trim().chars().enumerate() {
                let cell = Cell::from_char(c).ok_or(MalformedGridError::UnknownCell {
                    line: line_number,
                    column: column + 1,
                    found: c,
                })?;
                cells.push(cell);
            }

            check_width(&mut cols, cells.len() - start, line_number)?;
            rows += 1;
        }

        let cols = cols.ok_or(MalformedGridError::Empty)?;
        Self::new(rows, cols, cells)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for cell in row {
                write!(f, "{}", cell.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
