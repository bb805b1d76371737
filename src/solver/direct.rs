//! Literal-pattern path search
//!
//! Finds every simple adjacent path spelling one exact target sequence.
//! Wildcard tiles match any target character; no dictionary is involved.

use crate::core::{Cell, Grid, Path};

/// Find all paths on `grid` spelling `target` position by position
///
/// At depth 0 every cell whose tile matches the first target character is a
/// candidate; deeper candidates are unvisited neighbors of the previous
/// cell under the same match rule. A path is recorded once the whole target
/// is consumed. The empty target yields exactly one empty path.
#[must_use]
pub fn search(grid: &Grid, target: &str) -> Vec<Path> {
    let mut found = Vec::new();
    let mut path = Path::new();
    descend(grid, target.as_bytes(), &mut path, &mut found);
    found
}

fn descend(grid: &Grid, remaining: &[u8], path: &mut Path, found: &mut Vec<Path>) {
    let Some((&next, rest)) = remaining.split_first() else {
        found.push(path.clone());
        return;
    };

    let candidates: Vec<Cell> = match path.last() {
        None => Cell::all()
            .filter(|&cell| grid.symbol(cell).matches(next))
            .collect(),
        Some(&last) => last
            .neighbors()
            .into_iter()
            .filter(|cell| !path.contains(cell) && grid.symbol(*cell).matches(next))
            .collect(),
    };

    for cell in candidates {
        path.push(cell);
        descend(grid, rest, path, found);
        path.pop();
    }
}
