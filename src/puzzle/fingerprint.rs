//! Deterministic puzzle fingerprint

use sha2::{Digest, Sha256};

use crate::core::Grid;

/// Compute the content hash of a grid
///
/// SHA-256 over `cell:symbol` pairs joined by commas in cell-identity order
/// (`A1:x,A2:y,...,D4:z`), hex-encoded. Independent of any map iteration
/// order, so equal grids always hash equal; callers use it as a cache key.
#[must_use]
pub fn grid_fingerprint(grid: &Grid) -> String {
    let joined = grid
        .entries()
        .map(|(cell, symbol)| format!("{cell}:{symbol}"))
        .collect::<Vec<_>>()
        .join(",");

    let mut hasher = Sha256::new();
    hasher.update(joined.as_bytes());
    format!("{:x}", hasher.finalize())
}
