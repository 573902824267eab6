//! Grid file loading and saving.

use std::fs;
use std::path::Path;

use eyre::WrapErr;
use torus_life::Grid;

pub fn load_grid(path: &Path) -> eyre::Result<Grid> {
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read input file {}", path.display()))?;

    text.parse::<Grid>()
        .wrap_err_with(|| format!("malformed grid in {}", path.display()))
}

pub fn write_grid(path: &Path, grid: &Grid) -> eyre::Result<()> {
    fs::write(path, grid.to_string())
        .wrap_err_with(|| format!("failed to write output file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_then_write() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.txt");
        let output = dir.path().join("output.txt");
        fs::write(&input, "O..\n.O.\n..O\n").unwrap();

        let grid = load_grid(&input).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.population(), 3);

        write_grid(&output, &grid).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "O..\n.O.\n..O\n");
    }

    #[test]
    fn missing_input_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        let err = load_grid(&missing).unwrap_err();
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn malformed_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bad.txt");
        fs::write(&input, "O.\nO\n").unwrap();

        let err = load_grid(&input).unwrap_err();
        assert!(format!("{err:#}").contains("expected 2 cells, found 1"));
    }

    #[test]
    fn unwritable_output_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("missing-dir").join("out.txt");
        let grid: Grid = "O\n".parse().unwrap();

        assert!(write_grid(&output, &grid).is_err());
    }
}
