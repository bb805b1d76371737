//! Board cell identity and adjacency
//!
//! A cell is one of 16 fixed positions on the 4x4 board, named by a row
//! letter A-D and a column digit 1-4 (e.g. "B2"). Adjacency is purely
//! four-directional and depends on cell identity alone, never on tile
//! content.

use std::fmt;
use std::str::FromStr;

/// Row labels in board order
pub(crate) const ROWS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Column labels in board order
pub(crate) const COLS: [char; 4] = ['1', '2', '3', '4'];

/// Board side length
const SIDE: u8 = 4;

/// Number of cells on the board
pub const CELL_COUNT: usize = 16;

/// One of the 16 fixed positions on the 4x4 board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    row: u8,
    col: u8,
}

/// Error type for invalid cell names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellError {
    InvalidLength(usize),
    InvalidRow(char),
    InvalidColumn(char),
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Cell name must be exactly 2 characters, got {len}")
            }
            Self::InvalidRow(c) => write!(f, "Row must be one of A-D, got '{c}'"),
            Self::InvalidColumn(c) => write!(f, "Column must be one of 1-4, got '{c}'"),
        }
    }
}

impl std::error::Error for CellError {}

impl Cell {
    /// Create a cell from zero-based row and column indices
    ///
    /// Returns `None` if either index lies outside the 4x4 board.
    #[must_use]
    pub const fn from_indices(row: u8, col: u8) -> Option<Self> {
        if row < SIDE && col < SIDE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// All 16 cells in row-major order (sorted by cell identity: A1..D4)
    pub fn all() -> impl Iterator<Item = Self> {
        (0..SIDE).flat_map(|row| (0..SIDE).map(move |col| Self { row, col }))
    }

    /// Zero-based row index (0-3)
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Zero-based column index (0-3)
    #[inline]
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Row-major position of this cell (0-15)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * SIDE as usize + self.col as usize
    }

    /// Cells reachable in one four-directional step
    ///
    /// Corner cells have 2 neighbors, edge cells 3, interior cells 4.
    /// Order is row+1, row-1, col+1, col-1, filtered to the board bounds.
    #[must_use]
    pub fn neighbors(self) -> Vec<Self> {
        let mut neighbors = Vec::with_capacity(4);
        if self.row + 1 < SIDE {
            neighbors.push(Self {
                row: self.row + 1,
                col: self.col,
            });
        }
        if self.row > 0 {
            neighbors.push(Self {
                row: self.row - 1,
                col: self.col,
            });
        }
        if self.col + 1 < SIDE {
            neighbors.push(Self {
                row: self.row,
                col: self.col + 1,
            });
        }
        if self.col > 0 {
            neighbors.push(Self {
                row: self.row,
                col: self.col - 1,
            });
        }
        neighbors
    }
}

impl FromStr for Cell {
    type Err = CellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(row_ch), Some(col_ch), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CellError::InvalidLength(s.chars().count()));
        };

        let row = ROWS
            .iter()
            .position(|&r| r == row_ch)
            .ok_or(CellError::InvalidRow(row_ch))?;
        let col = COLS
            .iter()
            .position(|&c| c == col_ch)
            .ok_or(CellError::InvalidColumn(col_ch))?;

        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            ROWS[self.row as usize], COLS[self.col as usize]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(name: &str) -> Cell {
        name.parse().unwrap()
    }

    fn names(cells: &[Cell]) -> Vec<String> {
        cells.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn parse_valid_names() {
        assert_eq!(cell("A1"), Cell::from_indices(0, 0).unwrap());
        assert_eq!(cell("D4"), Cell::from_indices(3, 3).unwrap());
        assert_eq!(cell("B3"), Cell::from_indices(1, 2).unwrap());
    }

    #[test]
    fn parse_invalid_names() {
        assert!(matches!(Cell::from_str("A"), Err(CellError::InvalidLength(1))));
        assert!(matches!(Cell::from_str("A12"), Err(CellError::InvalidLength(3))));
        assert!(matches!(Cell::from_str("E1"), Err(CellError::InvalidRow('E'))));
        assert!(matches!(Cell::from_str("A5"), Err(CellError::InvalidColumn('5'))));
        assert!(matches!(Cell::from_str("1A"), Err(CellError::InvalidRow('1'))));
    }

    #[test]
    fn display_round_trips() {
        for c in Cell::all() {
            assert_eq!(cell(&c.to_string()), c);
        }
    }

    #[test]
    fn all_yields_sixteen_cells_in_identity_order() {
        let cells: Vec<Cell> = Cell::all().collect();
        assert_eq!(cells.len(), CELL_COUNT);
        let mut sorted = names(&cells);
        sorted.sort();
        assert_eq!(names(&cells), sorted);
        assert_eq!(cells[0].to_string(), "A1");
        assert_eq!(cells[15].to_string(), "D4");
    }

    #[test]
    fn interior_cell_has_four_neighbors() {
        assert_eq!(names(&cell("B2").neighbors()), ["C2", "A2", "B3", "B1"]);
    }

    #[test]
    fn corner_cell_has_two_neighbors() {
        assert_eq!(names(&cell("D4").neighbors()), ["C4", "D3"]);
        assert_eq!(names(&cell("A1").neighbors()), ["B1", "A2"]);
    }

    #[test]
    fn edge_cell_has_three_neighbors() {
        assert_eq!(names(&cell("A3").neighbors()), ["B3", "A4", "A2"]);
        assert_eq!(names(&cell("C1").neighbors()), ["D1", "B1", "C2"]);
    }

    #[test]
    fn adjacency_is_symmetric() {
        for c in Cell::all() {
            for n in c.neighbors() {
                assert!(n.neighbors().contains(&c), "{n} not adjacent to {c}");
            }
        }
    }
}
