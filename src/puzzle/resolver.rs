//! Subset-word resolution
//!
//! Given a letter multiset, finds every dictionary word constructible from it.
//! This is a multiset-subset test, not an anagram test: letter order is
//! irrelevant and a word may be shorter than the pool.

use crate::core::LetterMultiset;
use crate::dictionary::DictionaryIndex;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Find all dictionary words buildable from `letters`
///
/// Accepts a word iff its length is at least `min_len` and, for every distinct
/// letter it uses, it needs no more copies than the pool contains.
/// Deterministic given its inputs; the scan over the dictionary is
/// parallelized but the resulting set is order-free.
///
/// # Examples
/// ```
/// use gramjam::core::LetterMultiset;
/// use gramjam::dictionary::DictionaryIndex;
/// use gramjam::puzzle::resolve;
///
/// let dict = DictionaryIndex::from_words(["cat", "cot", "coat", "cabs"]);
/// let pool = LetterMultiset::new("catdog".chars().collect());
/// let words = resolve(&pool, 3, &dict);
///
/// assert!(words.contains("cat"));
/// assert!(words.contains("coat"));
/// assert!(!words.contains("cabs")); // no b or s in the pool
/// ```
#[must_use]
pub fn resolve(
    letters: &LetterMultiset,
    min_len: usize,
    dictionary: &DictionaryIndex,
) -> FxHashSet<String> {
    dictionary
        .words()
        .par_iter()
        .filter(|word| word.len() >= min_len && letters.can_build(word))
        .cloned()
        .collect()
}
