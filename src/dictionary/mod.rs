//! Dictionary index
//!
//! A static, pre-filtered lookup set built once at startup. Entries are
//! lowercased and must be at least [`MIN_WORD_LEN`] letters; the index is
//! immutable for the process lifetime.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use log::info;
use rustc_hash::FxHashSet;

/// Words shorter than this never enter the index
pub const MIN_WORD_LEN: usize = 3;

/// Read-only dictionary with fast membership lookup
///
/// Holds the filtered word list twice: a `Vec` for iteration (the resolver
/// scans it in parallel) and an `FxHashSet` for O(1) membership checks.
#[derive(Debug, Clone)]
pub struct DictionaryIndex {
    words: Vec<String>,
    index: FxHashSet<String>,
}

impl DictionaryIndex {
    /// Build an index from any iterator of words
    ///
    /// Input is lowercased, filtered to length ≥ [`MIN_WORD_LEN`], and
    /// deduplicated.
    ///
    /// # Examples
    /// ```
    /// use gramjam::dictionary::DictionaryIndex;
    ///
    /// let index = DictionaryIndex::from_words(["cat", "Dog", "at"]);
    /// assert_eq!(index.len(), 2); // "at" filtered, "Dog" lowercased
    /// assert!(index.contains("dog"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = FxHashSet::default();
        let mut list = Vec::new();

        for word in words {
            let word = word.as_ref().to_lowercase();
            if word.len() >= MIN_WORD_LEN && index.insert(word.clone()) {
                list.push(word);
            }
        }

        Self { words: list, index }
    }

    /// Build the index from the embedded word list
    #[must_use]
    pub fn embedded() -> Self {
        let dict = Self::from_words(WORDS.iter().copied());
        info!("Dictionary index built: {} words (embedded)", dict.len());
        dict
    }

    /// Whether `word` is in the dictionary (expects lowercase)
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// Number of indexed words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the index is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All indexed words, for full scans
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}
