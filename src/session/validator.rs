//! Submission validation
//!
//! Ordered fail-fast checks applied to each submitted word. The first failing
//! check wins; rejection never mutates round state here — streak handling is
//! the session's job, driven by [`RejectReason::resets_streak`].

use crate::puzzle::WordSet;
use std::fmt;

/// Why a submission was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Shorter than the round minimum
    TooShort { min: usize },
    /// Already in the round's found list
    AlreadyFound,
    /// Uses letters not available in the pool (or too many copies)
    UnavailableLetters,
    /// Buildable from the pool but not a dictionary word
    NotAWord,
    /// No round has been started
    RoundNotStarted,
}

impl RejectReason {
    /// Whether this rejection resets the streak
    ///
    /// Resubmitting an already-found word is not a letter or dictionary
    /// failure, so it carries no streak penalty.
    #[must_use]
    pub const fn resets_streak(self) -> bool {
        match self {
            Self::TooShort { .. } | Self::UnavailableLetters | Self::NotAWord => true,
            Self::AlreadyFound | Self::RoundNotStarted => false,
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { min } => {
                write!(f, "Word must be at least {min} letters long")
            }
            Self::AlreadyFound => write!(f, "Word already found"),
            Self::UnavailableLetters => write!(f, "Invalid letters used"),
            Self::NotAWord => write!(f, "Not a valid word"),
            Self::RoundNotStarted => write!(f, "No round in progress"),
        }
    }
}

impl std::error::Error for RejectReason {}

/// Validate a raw submission against the round's word set
///
/// Checks run in order: length, prior use, letter availability, dictionary
/// membership. Returns the normalized (trimmed, lowercased) word on success.
///
/// # Errors
///
/// Returns the first failing [`RejectReason`].
pub fn validate(raw: &str, word_set: &WordSet, min_len: usize) -> Result<String, RejectReason> {
    let word = raw.trim().to_lowercase();

    if word.len() < min_len {
        return Err(RejectReason::TooShort { min: min_len });
    }

    if word_set.found_words().iter().any(|w| *w == word) {
        return Err(RejectReason::AlreadyFound);
    }

    if !word_set.letters().can_build(&word) {
        return Err(RejectReason::UnavailableLetters);
    }

    // possible_words was derived from the dictionary, so membership here is
    // equivalent to a dictionary lookup
    if !word_set.possible_words().contains(&word) {
        return Err(RejectReason::NotAWord);
    }

    Ok(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterMultiset;
    use crate::dictionary::DictionaryIndex;
    use crate::puzzle::resolve;

    fn round_set() -> WordSet {
        let dict = DictionaryIndex::from_words(["cat", "dog", "cot", "tag", "act", "coat"]);
        let pool = LetterMultiset::new("catdog".chars().collect());
        let words = resolve(&pool, 3, &dict);
        WordSet::new(pool, words)
    }

    #[test]
    fn accepts_and_normalizes() {
        let set = round_set();
        assert_eq!(validate("  CaT ", &set, 3), Ok("cat".to_string()));
    }

    #[test]
    fn rejects_too_short() {
        let set = round_set();
        assert_eq!(validate("at", &set, 3), Err(RejectReason::TooShort { min: 3 }));
        assert_eq!(validate("", &set, 3), Err(RejectReason::TooShort { min: 3 }));
        // Round minimum can exceed the global floor
        assert_eq!(validate("cat", &set, 4), Err(RejectReason::TooShort { min: 4 }));
    }

    #[test]
    fn rejects_duplicates_before_letter_check() {
        let mut set = round_set();
        set.record_found("cat".to_string());

        // Duplicate wins even though the word is otherwise valid
        assert_eq!(validate("cat", &set, 3), Err(RejectReason::AlreadyFound));
    }

    #[test]
    fn rejects_unavailable_letters() {
        let set = round_set();
        assert_eq!(
            validate("carts", &set, 3),
            Err(RejectReason::UnavailableLetters)
        );
    }

    #[test]
    fn rejects_overused_letters() {
        let dict = DictionaryIndex::from_words(["cat", "tact"]);
        let pool = LetterMultiset::new("cat".chars().collect());
        let words = resolve(&pool, 3, &dict);
        let set = WordSet::new(pool, words);

        assert_eq!(
            validate("tact", &set, 3),
            Err(RejectReason::UnavailableLetters)
        );
    }

    #[test]
    fn rejects_non_dictionary_words() {
        let set = round_set();
        // Buildable from the pool but not a word
        assert_eq!(validate("gdo", &set, 3), Err(RejectReason::NotAWord));
    }

    #[test]
    fn streak_reset_policy() {
        assert!(RejectReason::TooShort { min: 3 }.resets_streak());
        assert!(RejectReason::UnavailableLetters.resets_streak());
        assert!(RejectReason::NotAWord.resets_streak());
        assert!(!RejectReason::AlreadyFound.resets_streak());
        assert!(!RejectReason::RoundNotStarted.resets_streak());
    }

    #[test]
    fn reasons_are_displayable() {
        assert_eq!(
            RejectReason::TooShort { min: 3 }.to_string(),
            "Word must be at least 3 letters long"
        );
        assert_eq!(RejectReason::NotAWord.to_string(), "Not a valid word");
    }
}
