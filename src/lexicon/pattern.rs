//! Wildcard-aware sequence matching
//!
//! A letter sequence read off the grid may contain the wildcard marker.
//! Matching treats each wildcard position as "any single letter"; every
//! other position is literal. One match operation serves both the
//! wildcard-at-start and wildcard-later cases.

use crate::core::WILDCARD;

const ALPHABET: std::ops::RangeInclusive<u8> = b'a'..=b'z';

/// True when `word` begins with `letters`, with wildcard positions in
/// `letters` standing for any letter
///
/// `word` must be at least as long as `letters`; a shorter word never
/// matches.
pub(super) fn matches_start(letters: &str, word: &str) -> bool {
    word.len() >= letters.len()
        && letters
            .bytes()
            .zip(word.bytes())
            .all(|(wanted, got)| wanted == WILDCARD as u8 || wanted == got)
}

/// Literal prefixes whose dictionary entries are candidates for `letters`
///
/// With the first wildcard at position `i > 0`, the literal run before it
/// is the only prefix needed. With a leading wildcard, one prefix per
/// alphabet letter is produced, each followed by the literal run up to the
/// next wildcard (or the end of the sequence). Only the first wildcard is
/// ever expanded this way; later wildcards are left to positional matching
/// in [`matches_start`]. This asymmetry keeps the expansion linear in the
/// alphabet instead of exponential in the wildcard count.
pub(super) fn candidate_prefixes(letters: &str) -> Vec<String> {
    match letters.find(WILDCARD) {
        None => vec![letters.to_string()],
        Some(0) => {
            let rest = &letters[1..];
            let run = rest.find(WILDCARD).map_or(rest, |j| &rest[..j]);
            ALPHABET
                .map(|c| {
                    let mut prefix = String::with_capacity(run.len() + 1);
                    prefix.push(char::from(c));
                    prefix.push_str(run);
                    prefix
                })
                .collect()
        }
        Some(i) => vec![letters[..i].to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_sequences_match_prefixes() {
        assert!(matches_start("cat", "cat"));
        assert!(matches_start("cat", "cats"));
        assert!(matches_start("", "anything"));
        assert!(!matches_start("cat", "ca"));
        assert!(!matches_start("cat", "cot"));
    }

    #[test]
    fn wildcards_match_any_single_letter() {
        assert!(matches_start("c*t", "cat"));
        assert!(matches_start("c*t", "cotton"));
        assert!(matches_start("**", "ab"));
        assert!(!matches_start("c*t", "cab"));
        assert!(!matches_start("c*t", "ca"));
    }

    #[test]
    fn literal_input_yields_itself_as_prefix() {
        assert_eq!(candidate_prefixes("cat"), ["cat"]);
    }

    #[test]
    fn interior_wildcard_yields_run_before_it() {
        assert_eq!(candidate_prefixes("th*ow"), ["th"]);
        assert_eq!(candidate_prefixes("throw*rs"), ["throw"]);
    }

    #[test]
    fn leading_wildcard_expands_the_alphabet() {
        let prefixes = candidate_prefixes("*at");
        assert_eq!(prefixes.len(), 26);
        assert_eq!(prefixes[0], "aat");
        assert_eq!(prefixes[25], "zat");
    }

    #[test]
    fn leading_wildcard_run_stops_at_next_wildcard() {
        let prefixes = candidate_prefixes("*a*b");
        assert_eq!(prefixes.len(), 26);
        assert_eq!(prefixes[0], "aa");
        assert_eq!(prefixes[25], "za");
    }

    #[test]
    fn lone_wildcard_expands_to_bare_letters() {
        let prefixes = candidate_prefixes("*");
        assert_eq!(prefixes.len(), 26);
        assert_eq!(prefixes[0], "a");
    }
}
