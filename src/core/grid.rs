//! Tile symbols and the immutable grid
//!
//! A grid is a total mapping from all 16 cells to symbols, fixed at
//! construction and consumed read-only by every search operation. Wildcard
//! policy (at most 2 per board) belongs to the generator, not to `Grid`.

use std::fmt;
use std::str::FromStr;

use super::cell::{CELL_COUNT, Cell};

/// Marker character standing for "any single letter" during comparisons
pub const WILDCARD: char = '*';

/// A tile's content: one lowercase letter or the wildcard marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Letter(u8),
    Wildcard,
}

impl Symbol {
    /// True when this tile can stand for `letter` on a path
    #[inline]
    #[must_use]
    pub const fn matches(self, letter: u8) -> bool {
        match self {
            Self::Wildcard => true,
            Self::Letter(l) => l == letter,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_wildcard(self) -> bool {
        matches!(self, Self::Wildcard)
    }

    /// The character this symbol contributes to a letter sequence
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Letter(l) => l as char,
            Self::Wildcard => WILDCARD,
        }
    }
}

impl TryFrom<char> for Symbol {
    type Error = GridError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            WILDCARD => Ok(Self::Wildcard),
            'a'..='z' => Ok(Self::Letter(c as u8)),
            _ => Err(GridError::InvalidSymbol(c)),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Error type for invalid grid descriptions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    InvalidLength(usize),
    InvalidSymbol(char),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Grid must have exactly {CELL_COUNT} tiles, got {len}")
            }
            Self::InvalidSymbol(c) => {
                write!(f, "Tile must be a lowercase letter or '{WILDCARD}', got '{c}'")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Immutable 4x4 board: a total mapping from cell to symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    symbols: [Symbol; CELL_COUNT],
}

impl Grid {
    /// Create a grid from symbols in row-major (cell-identity) order
    #[must_use]
    pub const fn new(symbols: [Symbol; CELL_COUNT]) -> Self {
        Self { symbols }
    }

    /// The symbol on `cell`
    #[inline]
    #[must_use]
    pub const fn symbol(&self, cell: Cell) -> Symbol {
        self.symbols[cell.index()]
    }

    /// All `(cell, symbol)` pairs in cell-identity order
    pub fn entries(&self) -> impl Iterator<Item = (Cell, Symbol)> + '_ {
        Cell::all().map(move |cell| (cell, self.symbol(cell)))
    }

    /// The letter sequence spelled by walking `path`
    ///
    /// Wildcard tiles contribute the wildcard marker.
    #[must_use]
    pub fn letters_along(&self, path: &[Cell]) -> String {
        path.iter().map(|&cell| self.symbol(cell).as_char()).collect()
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parse 16 tiles in row-major order, e.g. `"cazzstzzzzzzzzzz"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count = s.chars().count();
        if count != CELL_COUNT {
            return Err(GridError::InvalidLength(count));
        }

        let mut symbols = [Symbol::Wildcard; CELL_COUNT];
        for (slot, c) in symbols.iter_mut().zip(s.chars()) {
            *slot = Symbol::try_from(c)?;
        }
        Ok(Self::new(symbols))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display_round_trip() {
        let text = "cazzstzzzzzzzzz*";
        let grid: Grid = text.parse().unwrap();
        assert_eq!(grid.to_string(), text);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(matches!(
            Grid::from_str("abc"),
            Err(GridError::InvalidLength(3))
        ));
        assert!(matches!(
            Grid::from_str(""),
            Err(GridError::InvalidLength(0))
        ));
    }

    #[test]
    fn parse_rejects_invalid_symbols() {
        assert!(matches!(
            Grid::from_str("ABCDEFGHIJKLMNOP"),
            Err(GridError::InvalidSymbol('A'))
        ));
        assert!(matches!(
            Grid::from_str("abcdefgh1jklmnop"),
            Err(GridError::InvalidSymbol('1'))
        ));
    }

    #[test]
    fn symbol_lookup_is_row_major() {
        let grid: Grid = "abcdefghijklmnop".parse().unwrap();
        assert_eq!(grid.symbol("A1".parse().unwrap()), Symbol::Letter(b'a'));
        assert_eq!(grid.symbol("A4".parse().unwrap()), Symbol::Letter(b'd'));
        assert_eq!(grid.symbol("B1".parse().unwrap()), Symbol::Letter(b'e'));
        assert_eq!(grid.symbol("D4".parse().unwrap()), Symbol::Letter(b'p'));
    }

    #[test]
    fn wildcard_matches_any_letter() {
        assert!(Symbol::Wildcard.matches(b'a'));
        assert!(Symbol::Wildcard.matches(b'z'));
        assert!(Symbol::Letter(b'q').matches(b'q'));
        assert!(!Symbol::Letter(b'q').matches(b'r'));
    }

    #[test]
    fn letters_along_path() {
        let grid: Grid = "ca*zstzzzzzzzzzz".parse().unwrap();
        let path: Vec<Cell> = ["A1", "A2", "A3"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        assert_eq!(grid.letters_along(&path), "ca*");
        assert_eq!(grid.letters_along(&[]), "");
    }
}
