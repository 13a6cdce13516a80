//! Letter pool generation
//!
//! Produces a multiset of letters biased toward a vowel ratio band, with
//! consonants drawn from a difficulty-dependent tier. The vowel fraction is
//! difficulty-independent; difficulty only changes consonant *character*.

use crate::core::letters::VOWELS;
use crate::core::{Difficulty, LetterMultiset};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Lower bound of the per-pool vowel fraction
pub const VOWEL_RATIO_MIN: f64 = 0.30;

/// Upper bound of the per-pool vowel fraction
pub const VOWEL_RATIO_MAX: f64 = 0.50;

/// Generate a pool of exactly `count` letters
///
/// The vowel quota is a fraction of `count` chosen uniformly in
/// [[`VOWEL_RATIO_MIN`], [`VOWEL_RATIO_MAX`]] per call (never below one vowel
/// for a non-empty pool). Consonants come from the tier's pool. The result is
/// shuffled so no positional bias leaks from the vowel-then-consonant
/// construction order. Always succeeds.
pub fn generate_pool<R: Rng + ?Sized>(
    count: usize,
    difficulty: Difficulty,
    rng: &mut R,
) -> LetterMultiset {
    if count == 0 {
        return LetterMultiset::new(Vec::new());
    }

    let ratio = rng.random_range(VOWEL_RATIO_MIN..=VOWEL_RATIO_MAX);
    let vowel_quota = ((count as f64 * ratio).round() as usize).clamp(1, count);

    let consonants = difficulty.consonant_pool();
    let mut letters = Vec::with_capacity(count);

    for _ in 0..vowel_quota {
        // Non-empty const array, choose cannot fail
        if let Some(&v) = VOWELS.choose(rng) {
            letters.push(v);
        }
    }
    while letters.len() < count {
        if let Some(&c) = consonants.choose(rng) {
            letters.push(c);
        }
    }

    let mut pool = LetterMultiset::new(letters);
    pool.shuffle(rng);
    pool
}
