//! Grid search algorithms
//!
//! Maximal-sequence enumeration, substring pruning, the orchestrating
//! solver, and the dictionary-free direct path search.

mod direct;
mod engine;
mod enumerate;
mod prune;

pub use direct::search;
pub use engine::{SolutionMap, Solver};
pub use enumerate::{SequenceRecords, maximal_sequences};
pub use prune::prune_substrings;
