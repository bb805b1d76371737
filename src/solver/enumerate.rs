//! Maximal-sequence enumeration
//!
//! Depth-first traversal of the grid, pruned by dictionary prefix validity,
//! producing every letter sequence whose realizing path cannot be extended
//! further, together with the distinct paths that realize it.

use rustc_hash::FxHashMap;

use crate::core::{CELL_COUNT, Cell, Grid, Path, WILDCARD};
use crate::lexicon::Lexicon;

/// Mapping from each maximal letter sequence to the distinct paths realizing it
pub type SequenceRecords = FxHashMap<String, Vec<Path>>;

/// Enumerate every maximal sequence on `grid`
///
/// The empty path expands to all 16 cells unconditionally. A non-empty path
/// keeps extending while its letters remain a valid (wildcard-aware)
/// dictionary prefix and an unvisited neighbor exists; once it cannot, the
/// path one cell short of the dead end is recorded under its letter
/// sequence. A grid where no starting letter is a valid prefix records the
/// empty sequence mapped to the empty path.
///
/// Termination is guaranteed: paths never repeat a cell, so depth is
/// bounded by the 16-cell board.
#[must_use]
pub fn maximal_sequences(grid: &Grid, lexicon: &Lexicon) -> SequenceRecords {
    let mut records = SequenceRecords::default();
    let mut path = Path::with_capacity(CELL_COUNT);
    extend(grid, lexicon, &mut path, &mut records);
    records
}

fn extend(grid: &Grid, lexicon: &Lexicon, path: &mut Path, records: &mut SequenceRecords) {
    debug_assert!(path.len() <= CELL_COUNT);

    let candidates: Vec<Cell> = if path.is_empty() {
        Cell::all().collect()
    } else {
        let letters = grid.letters_along(path);
        let viable = if letters.contains(WILDCARD) {
            lexicon.has_prefix_with_wildcard(&letters)
        } else {
            lexicon.has_prefix(&letters)
        };
        if viable {
            let last = path[path.len() - 1];
            last.neighbors()
                .into_iter()
                .filter(|cell| !path.contains(cell))
                .collect()
        } else {
            Vec::new()
        }
    };

    if candidates.is_empty() {
        // Dead end: the path without its last cell is maximal.
        let dead_end = &path[..path.len().saturating_sub(1)];
        let sequence = grid.letters_along(dead_end);
        let entry = records.entry(sequence).or_default();
        if !entry.iter().any(|recorded| recorded == dead_end) {
            entry.push(dead_end.to_vec());
        }
        return;
    }

    for cell in candidates {
        path.push(cell);
        extend(grid, lexicon, path, records);
        path.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(names: &[&str]) -> Path {
        names.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn hopeless_grid_records_only_the_empty_sequence() {
        let lexicon = Lexicon::new(["cat"]).unwrap();
        let grid: Grid = "zzzzzzzzzzzzzzzz".parse().unwrap();

        let records = maximal_sequences(&grid, &lexicon);
        assert_eq!(records.len(), 1);
        assert_eq!(records[""], vec![Path::new()]);
    }

    #[test]
    fn records_maximal_sequences_with_their_paths() {
        let lexicon = Lexicon::new(["at", "cat", "cats"]).unwrap();
        // A1=c A2=a B1=s B2=t, everything else z
        let grid: Grid = "cazzstzzzzzzzzzz".parse().unwrap();

        let records = maximal_sequences(&grid, &lexicon);
        assert_eq!(records["cats"], vec![path(&["A1", "A2", "B2", "B1"])]);
        assert_eq!(records["cat"], vec![path(&["A1", "A2", "B2"])]);
        assert_eq!(records["at"], vec![path(&["A2", "B2"])]);
        assert_eq!(records["ca"], vec![path(&["A1", "A2"])]);
        assert!(records.contains_key(""));
    }

    #[test]
    fn duplicate_dead_ends_are_recorded_once() {
        let lexicon = Lexicon::new(["at"]).unwrap();
        // A2=a B2=t; the "at" path dead-ends into several invalid extensions
        let grid: Grid = "zazzztzzzzzzzzzz".parse().unwrap();

        let records = maximal_sequences(&grid, &lexicon);
        assert_eq!(records["at"], vec![path(&["A2", "B2"])]);
    }

    #[test]
    fn every_recorded_path_spells_its_key() {
        let lexicon = Lexicon::new(["at", "cat", "cats", "tea", "eat"]).unwrap();
        let grid: Grid = "cazzstzzaetzzzzz".parse().unwrap();

        for (sequence, paths) in maximal_sequences(&grid, &lexicon) {
            for p in paths {
                assert_eq!(grid.letters_along(&p), sequence);
                // simple path: distinct cells, consecutive cells adjacent
                for pair in p.windows(2) {
                    assert!(pair[0].neighbors().contains(&pair[1]));
                }
                let mut dedup = p.clone();
                dedup.sort();
                dedup.dedup();
                assert_eq!(dedup.len(), p.len());
            }
        }
    }

    #[test]
    fn wildcard_paths_extend_through_the_marker() {
        let lexicon = Lexicon::new(["cat", "cot"]).unwrap();
        // A1=c A2=* B2=t
        let grid: Grid = "c*zzztzzzzzzzzzz".parse().unwrap();

        let records = maximal_sequences(&grid, &lexicon);
        assert_eq!(records["c*t"], vec![path(&["A1", "A2", "B2"])]);
    }
}
