//! Puzzle creation flow
//!
//! The operations a serving layer consumes: create a random puzzle and
//! cache its solutions under the grid fingerprint, then fetch those
//! solutions back by fingerprint until they expire.

use crate::core::Grid;
use crate::lexicon::Lexicon;
use crate::solver::{SolutionMap, Solver};

use super::cache::{DEFAULT_TTL_MINUTES, SolutionCache};
use super::fingerprint::grid_fingerprint;
use super::generator::randomize_grid;

/// Create a random puzzle, solve it, and cache the solution map under the
/// grid's fingerprint for [`DEFAULT_TTL_MINUTES`]
///
/// Returns the grid and its fingerprint. The cached value may be an empty
/// map when the puzzle has no solutions; that is still a cache hit.
pub fn create_puzzle(lexicon: &Lexicon, cache: &SolutionCache<SolutionMap>) -> (Grid, String) {
    let grid = randomize_grid();
    let fingerprint = grid_fingerprint(&grid);

    let solutions = Solver::new(lexicon).solve(&grid);
    cache.set(fingerprint.clone(), solutions, DEFAULT_TTL_MINUTES);

    (grid, fingerprint)
}

/// Fetch cached solutions by grid fingerprint
///
/// `None` means unknown or expired, never "solved with zero words".
#[must_use]
pub fn fetch_solutions(
    cache: &SolutionCache<SolutionMap>,
    fingerprint: &str,
) -> Option<SolutionMap> {
    cache.get(fingerprint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_puzzle_is_fetchable_by_fingerprint() {
        let lexicon = Lexicon::new(["at", "cat", "cats"]).unwrap();
        let cache = SolutionCache::new();

        let (grid, fingerprint) = create_puzzle(&lexicon, &cache);
        assert_eq!(fingerprint, grid_fingerprint(&grid));
        assert!(fetch_solutions(&cache, &fingerprint).is_some());
    }

    #[test]
    fn unknown_fingerprint_is_a_miss() {
        let cache = SolutionCache::new();
        assert!(fetch_solutions(&cache, "deadbeef").is_none());
    }

    #[test]
    fn cached_solutions_match_a_fresh_solve() {
        let lexicon = Lexicon::new(["at", "cat", "cats"]).unwrap();
        let cache = SolutionCache::new();

        let (grid, fingerprint) = create_puzzle(&lexicon, &cache);
        let cached = fetch_solutions(&cache, &fingerprint).unwrap();
        assert_eq!(cached, Solver::new(&lexicon).solve(&grid));
    }
}
