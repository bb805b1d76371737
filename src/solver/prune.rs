//! Substring pruning over sequence keys

/// Remove keys subsumed as substrings of a longer surviving key
///
/// A distinct key containing `k` as a literal substring makes `k`
/// redundant: any path realizing the longer key truncates to a path
/// realizing `k`. Exact duplicate keys are kept. Returned keys are sorted
/// by length, then lexicographically; the surviving set itself is
/// independent of input order.
#[must_use]
pub fn prune_substrings<S: AsRef<str>>(keys: &[S]) -> Vec<String> {
    let mut sorted: Vec<&str> = keys.iter().map(AsRef::as_ref).collect();
    sorted.sort_unstable_by(|a, b| a.len().cmp(&b.len()).then(a.cmp(b)));

    // After the length sort only later keys can be supersets.
    let mut surviving = Vec::new();
    for (i, key) in sorted.iter().enumerate() {
        if sorted[i + 1..]
            .iter()
            .all(|other| key == other || !other.contains(*key))
        {
            surviving.push((*key).to_string());
        }
    }
    surviving
}
