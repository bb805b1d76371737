//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded
//! dictionary.

use std::fs;
use std::io;
use std::path::Path;

/// Load a newline-delimited word list from a file
///
/// Blank lines and surrounding whitespace are skipped; words are expected
/// lowercase.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect();

    Ok(words)
}

/// The dictionary bundled into the binary
#[must_use]
pub fn bundled_words() -> Vec<String> {
    super::WORDS.iter().map(|&w| w.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_words_match_embedded_list() {
        let words = bundled_words();
        assert_eq!(words.len(), super::super::WORDS_COUNT);
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        assert!(load_from_file("/nonexistent/words.txt").is_err());
    }
}
