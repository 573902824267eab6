//! Fixed birth and survival tables.
//!
//! These are not Conway's B3/S23: a dead cell is born with an even number of
//! live neighbors and a live cell survives with 2, 3, 5 or 7.

use torus_core::{Cell, Neighborhood};

/// `BIRTH[k]`: whether a dead cell with `k` live neighbors comes alive.
pub const BIRTH: [bool; 9] = table(&[2, 4, 6, 8]);

/// `SURVIVAL[k]`: whether a live cell with `k` live neighbors stays alive.
pub const SURVIVAL: [bool; 9] = table(&[2, 3, 5, 7]);

const fn table(counts: &[usize]) -> [bool; 9] {
    let mut out = [false; 9];
    let mut i = 0;
    while i < counts.len() {
        out[counts[i]] = true;
        i += 1;
    }
    out
}

/// Live cells among the 8 wrapped neighbors of `(row, col)`.
///
/// On grids narrower or shorter than 3 the same cell is reached through
/// more than one offset and counted each time.
pub fn count_neighbors<N: Neighborhood + ?Sized>(cells: &N, row: usize, col: usize) -> u8 {
    let row = row as isize;
    let col = col as isize;
    let mut count = 0;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            if cells.wrapped(row + dy, col + dx).is_alive() {
                count += 1;
            }
        }
    }
    count
}

/// Next state of a cell given its live neighbor count.
#[must_use]
pub fn next_state(cell: Cell, neighbors: u8) -> Cell {
    let table = match cell {
        Cell::Alive => &SURVIVAL,
        Cell::Dead => &BIRTH,
    };
    Cell::from(table.get(neighbors as usize).copied().unwrap_or(false))
}

/// Next state of the cell at `(row, col)`.
pub fn evaluate<N: Neighborhood + ?Sized>(cells: &N, row: usize, col: usize) -> Cell {
    next_state(cells.cell(row, col), count_neighbors(cells, row, col))
}
