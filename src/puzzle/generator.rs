//! Puzzle generation loop
//!
//! Repeatedly draws letter pools and resolves their possible words until one
//! lands in the target band, bounding attempts so generation never hangs. On
//! exhaustion it degrades to the best pool seen rather than failing.

use crate::core::{Difficulty, LetterMultiset, TimeLimit};
use crate::dictionary::DictionaryIndex;
use crate::puzzle::pool::generate_pool;
use crate::puzzle::resolver::resolve;
use log::debug;
use rand::Rng;
use rustc_hash::FxHashSet;

/// Maximum pools drawn before settling for the best seen
pub const MAX_ATTEMPTS: usize = 100;

/// Pools admitting fewer possible words than this are never accepted mid-loop
pub const MIN_POSSIBLE_WORDS: usize = 3;

/// Possible-word target for untimed rounds, before difficulty scaling
pub const UNTIMED_BASELINE_TARGET: usize = 20;

/// One round's puzzle: the letter pool and the words it admits
///
/// Invariant: every entry in `possible_words` is dictionary-valid, at least
/// the round minimum length, and buildable from `letters`. `found_words` is an
/// insertion-ordered subset of `possible_words` with no duplicates.
#[derive(Debug, Clone)]
pub struct WordSet {
    letters: LetterMultiset,
    possible_words: FxHashSet<String>,
    found_words: Vec<String>,
}

impl WordSet {
    pub(crate) fn new(letters: LetterMultiset, possible_words: FxHashSet<String>) -> Self {
        Self {
            letters,
            possible_words,
            found_words: Vec::new(),
        }
    }

    /// The round's letter pool
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &LetterMultiset {
        &self.letters
    }

    /// Every word buildable from the pool
    #[inline]
    #[must_use]
    pub fn possible_words(&self) -> &FxHashSet<String> {
        &self.possible_words
    }

    /// Accepted submissions, in submission order
    #[inline]
    #[must_use]
    pub fn found_words(&self) -> &[String] {
        &self.found_words
    }

    /// Possible words the player has not found yet
    pub fn missed_words(&self) -> impl Iterator<Item = &String> {
        self.possible_words
            .iter()
            .filter(|w| !self.found_words.iter().any(|f| f == *w))
    }

    pub(crate) fn shuffle_letters<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.letters.shuffle(rng);
    }

    pub(crate) fn record_found(&mut self, word: String) {
        self.found_words.push(word);
    }
}

/// Outcome of a generation run, with retry diagnostics
#[derive(Debug, Clone)]
pub struct Generation {
    pub word_set: WordSet,
    /// Pools drawn before settling on this one
    pub attempts: usize,
    /// The possible-word count the loop was aiming for
    pub target: usize,
    /// False when the attempt bound was hit and the best pool was kept
    pub hit_target: bool,
}

/// Possible-word count a pool must reach to be accepted
///
/// Derived from the round duration (a fixed baseline when untimed) and scaled
/// by difficulty: easy pools are expected to admit more words, hard fewer.
/// Never below [`MIN_POSSIBLE_WORDS`].
#[must_use]
pub fn target_word_count(difficulty: Difficulty, time_limit: TimeLimit) -> usize {
    let base = match time_limit {
        TimeLimit::Untimed => UNTIMED_BASELINE_TARGET,
        // One fresh word expected roughly every six seconds
        TimeLimit::Seconds(s) => ((s / 6) as usize).max(5),
    };

    ((base as f64 * difficulty.target_scale()).round() as usize).max(MIN_POSSIBLE_WORDS)
}

/// Generate a puzzle for the given settings
///
/// Draws up to [`MAX_ATTEMPTS`] letter pools, accepting the first whose
/// possible-word count reaches the target (and the absolute
/// [`MIN_POSSIBLE_WORDS`] floor). If no pool qualifies, the best pool seen is
/// returned — generation never hangs and never fails outright.
pub fn generate<R: Rng + ?Sized>(
    dictionary: &DictionaryIndex,
    difficulty: Difficulty,
    time_limit: TimeLimit,
    letter_count: usize,
    rng: &mut R,
) -> Generation {
    let min_len = difficulty.min_word_len();
    let target = target_word_count(difficulty, time_limit);

    let mut best: Option<(LetterMultiset, FxHashSet<String>)> = None;

    for attempt in 1..=MAX_ATTEMPTS {
        let pool = generate_pool(letter_count, difficulty, rng);
        let words = resolve(&pool, min_len, dictionary);

        if words.len() >= target && words.len() >= MIN_POSSIBLE_WORDS {
            debug!(
                "Pool '{pool}' accepted on attempt {attempt}: {} words (target {target})",
                words.len()
            );
            return Generation {
                word_set: WordSet::new(pool, words),
                attempts: attempt,
                target,
                hit_target: true,
            };
        }

        debug!(
            "Pool '{pool}' rejected on attempt {attempt}: {} words (target {target})",
            words.len()
        );

        if best.as_ref().is_none_or(|(_, w)| words.len() > w.len()) {
            best = Some((pool, words));
        }
    }

    // MAX_ATTEMPTS >= 1, so at least one pool was recorded
    let (pool, words) = best.unwrap_or_else(|| {
        let pool = generate_pool(letter_count, difficulty, rng);
        let words = resolve(&pool, min_len, dictionary);
        (pool, words)
    });

    debug!(
        "Attempt bound hit; keeping best-effort pool '{pool}' with {} words",
        words.len()
    );

    Generation {
        word_set: WordSet::new(pool, words),
        attempts: MAX_ATTEMPTS,
        target,
        hit_target: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn targets_scale_with_difficulty() {
        let limit = TimeLimit::Seconds(120);
        let easy = target_word_count(Difficulty::Easy, limit);
        let medium = target_word_count(Difficulty::Medium, limit);
        let hard = target_word_count(Difficulty::Hard, limit);

        assert!(easy > medium);
        assert!(medium > hard);
        assert!(hard >= MIN_POSSIBLE_WORDS);
    }

    #[test]
    fn untimed_uses_baseline() {
        assert_eq!(
            target_word_count(Difficulty::Medium, TimeLimit::Untimed),
            UNTIMED_BASELINE_TARGET
        );
    }

    #[test]
    fn generated_words_are_buildable_and_long_enough() {
        let dict = DictionaryIndex::embedded();
        let mut rng = StdRng::seed_from_u64(11);

        for difficulty in Difficulty::ALL {
            let generation = generate(&dict, difficulty, TimeLimit::Seconds(60), 7, &mut rng);
            let set = &generation.word_set;

            for word in set.possible_words() {
                assert!(set.letters().can_build(word), "'{word}' not buildable");
                assert!(word.len() >= difficulty.min_word_len());
            }
            assert!(set.found_words().is_empty());
            assert!(generation.attempts <= MAX_ATTEMPTS);
        }
    }

    #[test]
    fn easy_generation_hits_target() {
        let dict = DictionaryIndex::embedded();
        let mut rng = StdRng::seed_from_u64(12);

        let generation = generate(&dict, Difficulty::Easy, TimeLimit::Seconds(60), 7, &mut rng);
        assert!(generation.hit_target);
        assert!(generation.word_set.possible_words().len() >= generation.target);
    }

    #[test]
    fn sparse_dictionary_terminates_with_best_effort() {
        // No pool can ever build these; the loop must still terminate
        let dict = DictionaryIndex::from_words(["qqq", "jjjj", "xxxxx"]);
        let mut rng = StdRng::seed_from_u64(13);

        let generation = generate(&dict, Difficulty::Easy, TimeLimit::Seconds(60), 6, &mut rng);
        assert!(!generation.hit_target);
        assert_eq!(generation.attempts, MAX_ATTEMPTS);
        assert_eq!(generation.word_set.letters().len(), 6);
    }

    #[test]
    fn empty_dictionary_terminates() {
        let dict = DictionaryIndex::from_words(Vec::<String>::new());
        let mut rng = StdRng::seed_from_u64(14);

        let generation = generate(&dict, Difficulty::Hard, TimeLimit::Untimed, 8, &mut rng);
        assert!(!generation.hit_target);
        assert!(generation.word_set.possible_words().is_empty());
    }

    #[test]
    fn missed_words_excludes_found() {
        let dict = DictionaryIndex::from_words(["cat", "cot", "act"]);
        let pool = LetterMultiset::new("cato".chars().collect());
        let words = resolve(&pool, 3, &dict);
        let mut set = WordSet::new(pool, words);

        set.record_found("cat".to_string());
        let missed: Vec<_> = set.missed_words().collect();
        assert_eq!(missed.len(), 2);
        assert!(!missed.iter().any(|w| *w == "cat"));
    }
}
