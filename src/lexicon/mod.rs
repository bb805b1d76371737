//! Immutable dictionary with prefix, membership, and wildcard queries
//!
//! Built once at process start from a word list and shared read-only across
//! arbitrarily many concurrent searches. Backed by an [`fst::Set`]; literal
//! prefix queries run a `starts_with` automaton over it, and the
//! wildcard-aware layer enumerates candidates by literal prefix and tests
//! them position by position.

mod pattern;

use std::collections::BTreeSet;
use std::fmt;

use fst::automaton::Str;
use fst::{Automaton, IntoStreamer, Set, Streamer};

use crate::core::WILDCARD;
use pattern::{candidate_prefixes, matches_start};

/// Error type for dictionary construction
#[derive(Debug)]
pub enum LexiconError {
    Build(fst::Error),
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Build(e) => write!(f, "Failed to build dictionary set: {e}"),
        }
    }
}

impl std::error::Error for LexiconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Build(e) => Some(e),
        }
    }
}

/// The immutable dictionary
pub struct Lexicon {
    set: Set<Vec<u8>>,
}

impl Lexicon {
    /// Build the lexicon from an iterable of lowercase words
    ///
    /// Words are sorted and deduplicated before construction. Queries on any
    /// string, including the empty one, are defined afterwards.
    pub fn new<I, S>(words: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sorted: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().to_string())
            .collect();
        sorted.sort_unstable();
        sorted.dedup();

        let set = Set::from_iter(sorted).map_err(LexiconError::Build)?;
        Ok(Self { set })
    }

    /// Number of words in the dictionary
    #[must_use]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// True when `s` is a dictionary word
    #[must_use]
    pub fn is_word(&self, s: &str) -> bool {
        self.set.contains(s)
    }

    /// True when some dictionary word starts with the literal prefix `s`
    ///
    /// The empty prefix matches every word.
    #[must_use]
    pub fn has_prefix(&self, s: &str) -> bool {
        self.set
            .search(Str::new(s).starts_with())
            .into_stream()
            .next()
            .is_some()
    }

    /// All dictionary words starting with the literal prefix `p`, in key order
    #[must_use]
    pub fn words_with_prefix(&self, p: &str) -> Vec<String> {
        self.set
            .search(Str::new(p).starts_with())
            .into_stream()
            .into_strs()
            // dictionary words are ASCII, so this never drops anything
            .unwrap_or_default()
    }

    /// Wildcard-aware prefix check used to decide whether a partial path is
    /// worth extending
    ///
    /// A single symbol always extends; a wildcard in final position reduces
    /// to a literal prefix query on everything before it; any other wildcard
    /// placement falls through to the full match in early-termination mode.
    #[must_use]
    pub fn has_prefix_with_wildcard(&self, letters: &str) -> bool {
        if letters.len() == 1 {
            return true;
        }
        match letters.find(WILDCARD) {
            Some(i) if i == letters.len() - 1 => self.has_prefix(&letters[..i]),
            Some(_) => self.matches_wildcard(letters),
            None => self.has_prefix(letters),
        }
    }

    /// True when some dictionary word starts with `letters`, with wildcard
    /// positions standing for any letter
    ///
    /// Stops at the first satisfying candidate.
    #[must_use]
    pub fn matches_wildcard(&self, letters: &str) -> bool {
        candidate_prefixes(letters)
            .iter()
            .any(|prefix| self.visit_words_with_prefix(prefix, |word| matches_start(letters, word)))
    }

    /// Every dictionary word realized by `letters`
    ///
    /// Candidates are enumerated by literal prefix, matched position by
    /// position, clipped to the sequence length, and kept only when the
    /// clipped word is itself a dictionary member. Returned sorted and
    /// deduplicated.
    #[must_use]
    pub fn matching_words(&self, letters: &str) -> Vec<String> {
        let mut found = BTreeSet::new();
        for prefix in candidate_prefixes(letters) {
            self.visit_words_with_prefix(&prefix, |word| {
                if matches_start(letters, word) {
                    let clipped = &word[..letters.len()];
                    if self.set.contains(clipped) {
                        found.insert(clipped.to_string());
                    }
                }
                false
            });
        }
        found.into_iter().collect()
    }

    /// Stream words with the given literal prefix through `visit`, stopping
    /// early (and returning true) as soon as `visit` does
    fn visit_words_with_prefix<F>(&self, prefix: &str, mut visit: F) -> bool
    where
        F: FnMut(&str) -> bool,
    {
        let mut stream = self
            .set
            .search(Str::new(prefix).starts_with())
            .into_stream();
        while let Some(bytes) = stream.next() {
            if let Ok(word) = std::str::from_utf8(bytes) {
                if visit(word) {
                    return true;
                }
            }
        }
        false
    }
}
