//! End-to-end tests for banded life runs.

use torus_life::{
    Cell, ConfigError, Grid, RemainderPolicy, SimulationConfig, SimulationError, next_state, run,
};

// ============================================================================
// Helpers
// ============================================================================

fn grid(text: &str) -> Grid {
    text.parse().unwrap()
}

/// Deterministic pseudo-random grid (xorshift), roughly one cell in three alive.
fn noise(rows: usize, cols: usize, seed: u64) -> Grid {
    let mut state = seed | 1;
    let cells = (0..rows * cols)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            Cell::from(state % 3 == 0)
        })
        .collect();
    Grid::new(rows, cols, cells).unwrap()
}

fn generations(workers: usize, generations: usize) -> SimulationConfig {
    SimulationConfig::new(workers).with_generations(generations)
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn all_dead_stays_dead() {
    let start = grid("...\n...\n...\n");
    for n in [0, 1, 7, 100] {
        let done = run(start.clone(), &generations(1, n)).unwrap();
        assert_eq!(done, start, "after {n} generations");
    }
}

#[test]
fn lone_center_cell_dies() {
    let start = grid("...\n.O.\n...\n");
    let done = run(start, &generations(1, 1)).unwrap();
    assert_eq!(done.to_string(), "...\n...\n...\n");
    assert_eq!(done.population(), 0);
}

#[test]
fn alternating_rows_same_for_one_and_two_workers() {
    let start = grid("OOOO\n....\nOOOO\n....\n");

    let one = run(start.clone(), &generations(1, 1)).unwrap();
    let two = run(start, &generations(2, 1)).unwrap();

    assert_eq!(one, two);
    // Live cells see 2 live neighbors and survive, dead cells see 6 and are born.
    assert_eq!(one.to_string(), "OOOO\nOOOO\nOOOO\nOOOO\n");
}

#[test]
fn default_config_runs_one_hundred_generations() {
    let start = noise(8, 8, 7);
    let config = SimulationConfig::default();
    assert_eq!(config.generations, 100);

    let by_default = run(start.clone(), &config).unwrap();
    let explicit = run(start, &generations(1, 100)).unwrap();
    assert_eq!(by_default, explicit);
}

// ============================================================================
// Parallel properties
// ============================================================================

#[test]
fn runs_are_deterministic() {
    let start = noise(24, 17, 0x5eed);
    let config = generations(4, 100);

    let first = run(start.clone(), &config).unwrap();
    let second = run(start, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn result_independent_of_worker_count() {
    let start = noise(12, 10, 42);
    let baseline = run(start.clone(), &generations(1, 100)).unwrap();

    for workers in [2, 3, 4, 6, 12] {
        let result = run(start.clone(), &generations(workers, 100)).unwrap();
        assert_eq!(result, baseline, "workers = {workers}");
    }
}

#[test]
fn uneven_split_extends_last_band() {
    let start = noise(7, 9, 3);
    let baseline = run(start.clone(), &generations(1, 20)).unwrap();

    for workers in [2, 3, 4, 5] {
        let result = run(start.clone(), &generations(workers, 20)).unwrap();
        assert_eq!(result.rows(), 7);
        assert_eq!(result, baseline, "workers = {workers}");
    }
}

#[test]
fn uneven_split_truncates_when_asked() {
    let start = noise(5, 3, 11);
    let config = generations(2, 1).with_remainder(RemainderPolicy::Truncate);

    // Two bands of two rows: row 4 is only ever band 0's top halo, and the
    // last band's bottom halo wraps to row 0.
    let above = [4, 0, 1, 2];
    let below = [1, 2, 3, 0];
    let cols = start.cols() as isize;

    let mut expected = Vec::new();
    for row in 0..4 {
        for col in 0..start.cols() {
            let mut neighbors = 0;
            for dc in -1..=1_isize {
                let c = (col as isize + dc).rem_euclid(cols) as usize;
                for r in [above[row], below[row]] {
                    neighbors += u8::from(start.get(r, c) == Some(Cell::Alive));
                }
                if dc != 0 {
                    neighbors += u8::from(start.get(row, c) == Some(Cell::Alive));
                }
            }
            expected.push(next_state(start.get(row, col).unwrap(), neighbors));
        }
    }

    let done = run(start.clone(), &config).unwrap();
    assert_eq!(done.rows(), 4);
    assert_eq!(done, Grid::new(4, 3, expected).unwrap());

    let shrunk_twice = run(start, &generations(2, 3).with_remainder(RemainderPolicy::Truncate));
    assert_eq!(shrunk_twice.unwrap().rows(), 4);
}

#[test]
fn single_row_and_single_cell_grids() {
    let dot = run(grid("O\n"), &generations(1, 1)).unwrap();
    assert_eq!(dot.to_string(), ".\n");

    let line = run(grid("O.O\n"), &generations(1, 1)).unwrap();
    assert_eq!(line.to_string(), "OOO\n");
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn invalid_worker_counts_rejected() {
    let start = grid("..\n..\n..\n");

    for workers in [0, 4] {
        let err = run(start.clone(), &generations(workers, 1)).unwrap_err();
        assert!(
            matches!(
                err,
                SimulationError::Config(ConfigError::InvalidWorkerCount { rows: 3, .. })
            ),
            "workers = {workers}: {err}"
        );
    }
}
