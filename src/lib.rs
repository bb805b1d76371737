//! Grid Word Solver
//!
//! Finds every dictionary word spellable on a 4x4 letter grid by walking
//! paths of adjacent, non-repeated tiles. Wildcard tiles match any letter.
//!
//! # Quick Start
//!
//! ```rust
//! use gridword::core::Grid;
//! use gridword::lexicon::Lexicon;
//! use gridword::solver::{Solver, search};
//!
//! // Dictionary built once, shared read-only across solves
//! let lexicon = Lexicon::new(["at", "cat", "cats"]).unwrap();
//!
//! // 16 tiles in row-major order: c-a across row A, s-t below them
//! let grid: Grid = "cazzstzzzzzzzzzz".parse().unwrap();
//!
//! let solutions = Solver::new(&lexicon).solve(&grid);
//! assert!(solutions.contains_key("cats"));
//!
//! // Direct search needs no dictionary
//! let paths = search(&grid, "cats");
//! assert_eq!(paths.len(), 1);
//! ```

// Core domain types
pub mod core;

// Dictionary with prefix and wildcard queries
pub mod lexicon;

// Search algorithms
pub mod solver;

// Generation, fingerprinting, caching
pub mod puzzle;

// Word lists
pub mod wordlists;

// Terminal output formatting
pub mod output;
