//! Letter multiset representation
//!
//! A `LetterMultiset` is the bag of letters available in a round, with repetition
//! counted. It keeps a separate display order so shuffling never touches the
//! underlying counts.

use rand::seq::SliceRandom;
use rustc_hash::FxHashMap;
use std::fmt;

/// The five English vowels
pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// A bag of lowercase letters with repetition
///
/// Stores a letter→count map for availability checks plus an ordered sequence
/// for display. The counts are fixed at construction; only the display order
/// can change (via [`LetterMultiset::shuffle`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterMultiset {
    display: Vec<char>,
    counts: FxHashMap<char, u8>,
}

impl LetterMultiset {
    /// Create a multiset from a sequence of letters, preserving their order
    /// for display.
    ///
    /// # Examples
    /// ```
    /// use gramjam::core::LetterMultiset;
    ///
    /// let pool = LetterMultiset::new("catdog".chars().collect());
    /// assert_eq!(pool.len(), 6);
    /// assert_eq!(pool.count('a'), 1);
    /// ```
    #[must_use]
    pub fn new(letters: Vec<char>) -> Self {
        let mut counts = FxHashMap::default();
        for &c in &letters {
            *counts.entry(c).or_insert(0u8) += 1;
        }
        Self {
            display: letters,
            counts,
        }
    }

    /// Number of letters in the bag (with repetition)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.display.len()
    }

    /// Whether the bag is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.display.is_empty()
    }

    /// The current display order of the letters
    #[inline]
    #[must_use]
    pub fn display(&self) -> &[char] {
        &self.display
    }

    /// How many copies of `letter` the bag holds
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0) as usize
    }

    /// Number of vowels in the bag (with repetition)
    #[must_use]
    pub fn vowel_count(&self) -> usize {
        self.display.iter().filter(|c| VOWELS.contains(c)).count()
    }

    /// Test whether `word` is subset-constructible from this bag
    ///
    /// A word is constructible if, for every distinct letter it uses, it needs
    /// no more copies than the bag contains. Letter order is irrelevant and the
    /// word may be shorter than the bag. Expects lowercase input.
    ///
    /// # Examples
    /// ```
    /// use gramjam::core::LetterMultiset;
    ///
    /// let pool = LetterMultiset::new("cat".chars().collect());
    /// assert!(pool.can_build("cat"));
    /// assert!(pool.can_build("act"));
    /// assert!(!pool.can_build("tact")); // needs two t's
    /// ```
    #[must_use]
    pub fn can_build(&self, word: &str) -> bool {
        if word.len() > self.display.len() {
            return false;
        }

        let mut needed: FxHashMap<char, u8> = FxHashMap::default();
        for c in word.chars() {
            *needed.entry(c).or_insert(0) += 1;
        }

        needed
            .iter()
            .all(|(c, &n)| self.counts.get(c).copied().unwrap_or(0) >= n)
    }

    /// Re-permute the display order in place
    ///
    /// The underlying multiset is unchanged; only the order letters are shown
    /// in differs afterwards.
    pub fn shuffle<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        self.display.shuffle(rng);
    }
}

impl fmt::Display for LetterMultiset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.display {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
