//! Puzzle generation and the collaborator surface around solved puzzles
//!
//! Random grid generation, the deterministic grid fingerprint used as a
//! cache key, and the time-boxed solution cache.

mod cache;
mod create;
mod fingerprint;
mod generator;

pub use cache::{DEFAULT_TTL_MINUTES, SolutionCache, spawn_sweeper};
pub use create::{create_puzzle, fetch_solutions};
pub use fingerprint::grid_fingerprint;
pub use generator::{randomize_grid, randomize_with};
