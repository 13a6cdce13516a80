//! Puzzle preview command
//!
//! Generates one puzzle and exposes everything the generator knows about it:
//! the pool, the full possible-word list grouped by length, and the retry
//! diagnostics.

use crate::core::{Difficulty, TimeLimit};
use crate::dictionary::DictionaryIndex;
use crate::puzzle;
use std::collections::BTreeMap;

/// A generated puzzle, laid out for display
pub struct PreviewResult {
    pub difficulty: Difficulty,
    pub time_limit: TimeLimit,
    pub letters: Vec<char>,
    /// Possible words keyed by length, each group sorted
    pub words_by_length: BTreeMap<usize, Vec<String>>,
    pub total_words: usize,
    pub target: usize,
    pub attempts: usize,
    pub hit_target: bool,
}

/// Generate one puzzle for the given settings
#[must_use]
pub fn preview_puzzle(
    dictionary: &DictionaryIndex,
    difficulty: Difficulty,
    time_limit: TimeLimit,
    letter_count: usize,
) -> PreviewResult {
    let generation = puzzle::generate(
        dictionary,
        difficulty,
        time_limit,
        letter_count,
        &mut rand::rng(),
    );

    let set = &generation.word_set;
    let mut words_by_length: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for word in set.possible_words() {
        words_by_length
            .entry(word.len())
            .or_default()
            .push(word.clone());
    }
    for group in words_by_length.values_mut() {
        group.sort();
    }

    PreviewResult {
        difficulty,
        time_limit,
        letters: set.letters().display().to_vec(),
        total_words: set.possible_words().len(),
        words_by_length,
        target: generation.target,
        attempts: generation.attempts,
        hit_target: generation.hit_target,
    }
}
