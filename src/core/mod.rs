//! Core domain types for the word grid
//!
//! This module contains the fundamental board types with zero external
//! dependencies: cell identity, adjacency, tile symbols, and the immutable
//! grid itself.

mod cell;
mod grid;

pub use cell::{CELL_COUNT, Cell, CellError};
pub use grid::{Grid, GridError, Symbol, WILDCARD};

/// Ordered sequence of distinct, pairwise-adjacent cells
pub type Path = Vec<Cell>;
