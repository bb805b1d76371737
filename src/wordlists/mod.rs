//! Dictionary word lists
//!
//! Provides the bundled dictionary compiled into the binary plus file
//! loading.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_lowercase_ascii() {
        for &word in WORDS {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
            assert!(!word.is_empty());
        }
    }

    #[test]
    fn words_are_sorted_and_unique() {
        for pair in WORDS.windows(2) {
            assert!(pair[0] < pair[1], "'{}' >= '{}'", pair[0], pair[1]);
        }
    }

    #[test]
    fn scenario_words_are_present() {
        for word in ["at", "cat", "cats", "throw", "thrower", "throwers"] {
            assert!(WORDS.contains(&word), "'{word}' missing from dictionary");
        }
    }
}
