//! Random puzzle generation

use rand::Rng;

use crate::core::{CELL_COUNT, Cell, Grid, Symbol};

/// Generate a random 4x4 grid: uniform letters, then 0-2 wildcard tiles
///
/// The wildcard count is itself uniform in {0, 1, 2}. A second wildcard
/// cell is resampled while adjacent to the first; landing on the first cell
/// again is allowed and collapses the grid to a single wildcard. There is
/// no solvability feedback against any dictionary: a generated puzzle may
/// have zero solutions.
#[must_use]
pub fn randomize_grid() -> Grid {
    randomize_with(&mut rand::rng())
}

/// Generate a random grid from a caller-supplied source of randomness
pub fn randomize_with<R: Rng + ?Sized>(rng: &mut R) -> Grid {
    let mut symbols = [Symbol::Wildcard; CELL_COUNT];
    for symbol in &mut symbols {
        *symbol = Symbol::Letter(rng.random_range(b'a'..=b'z'));
    }

    let wildcards = rng.random_range(0..=2u8);
    if wildcards > 0 {
        let first = random_cell(rng);
        symbols[first.index()] = Symbol::Wildcard;

        if wildcards == 2 {
            // the grid is less difficult when wildcards are not adjacent
            let mut second = random_cell(rng);
            while first.neighbors().contains(&second) {
                second = random_cell(rng);
            }
            symbols[second.index()] = Symbol::Wildcard;
        }
    }

    Grid::new(symbols)
}

fn random_cell<R: Rng + ?Sized>(rng: &mut R) -> Cell {
    let row = rng.random_range(0..4u8);
    let col = rng.random_range(0..4u8);
    Cell::from_indices(row, col).expect("indices in range")
}
