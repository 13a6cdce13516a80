//! Word scoring
//!
//! Per-word score is a length-based base (super-linear via a lookup table)
//! scaled by difficulty, plus a streak bonus evaluated before the streak is
//! incremented for the scored word.

use crate::core::Difficulty;

/// Points added per consecutive word already in the streak
pub const STREAK_BONUS_STEP: u32 = 5;

/// Length-based score multiplier, rewarding longer words super-linearly
///
/// Lengths of nine and above share the top multiplier.
#[must_use]
pub fn length_multiplier(len: usize) -> f64 {
    match len {
        0..=3 => 1.0,
        4 => 1.2,
        5 => 1.4,
        6 => 1.6,
        7 => 1.8,
        8 => 2.0,
        _ => 2.5,
    }
}

/// Score awarded for one accepted word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub base: u32,
    pub streak_bonus: u32,
}

impl ScoreBreakdown {
    /// Total points awarded
    #[inline]
    #[must_use]
    pub const fn total(self) -> u32 {
        self.base + self.streak_bonus
    }
}

/// Score a word of length `len` under `difficulty` with the current `streak`
///
/// `streak` is the count of consecutive accepted words *before* this one.
///
/// # Examples
/// ```
/// use gramjam::core::Difficulty;
/// use gramjam::session::scoring::score_word;
///
/// let score = score_word(4, Difficulty::Medium, 0);
/// assert_eq!(score.base, 72); // floor(4 * 10 * 1.2 * 1.5)
/// assert_eq!(score.streak_bonus, 0);
/// ```
#[must_use]
pub fn score_word(len: usize, difficulty: Difficulty, streak: u32) -> ScoreBreakdown {
    let base =
        ((len * 10) as f64 * length_multiplier(len) * difficulty.multiplier()).floor() as u32;
    ScoreBreakdown {
        base,
        streak_bonus: streak * STREAK_BONUS_STEP,
    }
}
