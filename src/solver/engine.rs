//! Puzzle solving orchestration

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::debug;

use super::enumerate::maximal_sequences;
use super::prune::prune_substrings;
use crate::core::{Grid, Path, WILDCARD};
use crate::lexicon::Lexicon;

/// Mapping from each found dictionary word to the paths that spell it
pub type SolutionMap = FxHashMap<String, Vec<Path>>;

/// Grid puzzle solver
///
/// Holds a shared reference to the process-wide lexicon; independent grids
/// can be solved concurrently with no coordination.
pub struct Solver<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Solver<'a> {
    #[must_use]
    pub const fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Find every dictionary word spellable on `grid`, mapped to the paths
    /// that realize it
    ///
    /// Maximal sequences are enumerated, keys subsumed as substrings of
    /// longer keys are pruned, and each surviving key is expanded into the
    /// words it matches. Paths attached to a word are the full
    /// maximal-sequence paths as recorded, not truncated to the word: this
    /// mirrors the maximal-sequence record and lets callers decide whether
    /// to clip. (Under the clipping rule in
    /// [`Lexicon::matching_words`], every matched word has the same length
    /// as its sequence key, so in practice word and path lengths coincide.)
    ///
    /// Solving never fails; an unsolvable grid yields an empty map. The
    /// word set is deterministic for a given grid and lexicon.
    #[must_use]
    pub fn solve(&self, grid: &Grid) -> SolutionMap {
        let records = maximal_sequences(grid, self.lexicon);
        let keys: Vec<&String> = records.keys().collect();
        let surviving = prune_substrings(&keys);
        debug!(
            sequences = records.len(),
            surviving = surviving.len(),
            "pruned maximal sequences"
        );

        // Per-key wildcard expansion only reads shared immutable state.
        let matched: Vec<(Vec<String>, &[Path])> = surviving
            .par_iter()
            .map(|key| {
                let words = if key.contains(WILDCARD) {
                    self.lexicon.matching_words(key)
                } else if self.lexicon.is_word(key) {
                    vec![key.clone()]
                } else {
                    Vec::new()
                };
                (words, records[key.as_str()].as_slice())
            })
            .collect();

        let mut solutions = SolutionMap::default();
        for (words, paths) in matched {
            for word in words {
                for path in paths {
                    solutions.entry(word.clone()).or_default().push(path.clone());
                }
            }
        }
        solutions
    }
}
