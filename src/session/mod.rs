//! Game session
//!
//! One session owns at most one active round's mutable state and tracks the
//! cross-round high score through an injected [`HighScoreStore`]. All
//! operations run synchronously to completion; there is exactly one logical
//! thread of control.

pub mod highscore;
pub mod scoring;
pub mod validator;

pub use highscore::{FileHighScore, HighScoreStore, MemoryHighScore};
pub use scoring::ScoreBreakdown;
pub use validator::RejectReason;

use crate::core::{Difficulty, TimeLimit};
use crate::dictionary::DictionaryIndex;
use crate::puzzle::{self, WordSet};
use crate::session::scoring::score_word;
use crate::session::validator::validate;
use rand::Rng;
use std::time::{Duration, Instant};

/// Settings for one round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSettings {
    pub difficulty: Difficulty,
    pub time_limit: TimeLimit,
    pub letter_count: usize,
}

impl Default for RoundSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            time_limit: TimeLimit::Seconds(60),
            letter_count: 7,
        }
    }
}

/// One accepted submission, as recorded in the performance history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    pub word: String,
    pub points: u32,
    /// Streak length before this word was counted (what the bonus was paid on)
    pub streak_at_submission: u32,
    /// Time into the round at submission
    pub elapsed: Duration,
}

/// Snapshot of session counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub score: u32,
    pub high_score: u32,
    pub streak: u32,
    pub longest_streak: u32,
    pub words_found: usize,
    pub elapsed: Duration,
}

/// Result of a word submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted {
        word: String,
        score: ScoreBreakdown,
        new_high_score: bool,
    },
    Rejected {
        reason: RejectReason,
    },
}

impl SubmitOutcome {
    /// Whether the submission was accepted
    #[must_use]
    pub const fn accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Points awarded, when accepted
    #[must_use]
    pub const fn points_awarded(&self) -> Option<u32> {
        match self {
            Self::Accepted { score, .. } => Some(score.total()),
            Self::Rejected { .. } => None,
        }
    }

    /// User-displayable outcome message
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Accepted { score, .. } => format!(
                "+{} points! ({} + {} streak bonus)",
                score.total(),
                score.base,
                score.streak_bonus
            ),
            Self::Rejected { reason } => reason.to_string(),
        }
    }
}

struct Round {
    word_set: WordSet,
    settings: RoundSettings,
    score: u32,
    streak: u32,
    longest_streak: u32,
    history: Vec<WordRecord>,
    started: Instant,
}

/// Stateful session tracker over a read-only dictionary
///
/// Starting a new round atomically discards all prior round state; only the
/// high score survives (and, via the store, survives process restarts).
///
/// # Examples
/// ```
/// use gramjam::dictionary::DictionaryIndex;
/// use gramjam::session::{GameSession, MemoryHighScore, RoundSettings};
///
/// let dict = DictionaryIndex::embedded();
/// let mut session = GameSession::new(&dict, Box::new(MemoryHighScore::default()));
///
/// session.start_round(RoundSettings::default());
/// let outcome = session.submit("cat");
/// println!("{}", outcome.message());
/// ```
pub struct GameSession<'a> {
    dictionary: &'a DictionaryIndex,
    store: Box<dyn HighScoreStore>,
    high_score: u32,
    round: Option<Round>,
}

impl<'a> GameSession<'a> {
    /// Create a session, reading the persisted high score from the store
    #[must_use]
    pub fn new(dictionary: &'a DictionaryIndex, store: Box<dyn HighScoreStore>) -> Self {
        let high_score = store.load();
        Self {
            dictionary,
            store,
            high_score,
            round: None,
        }
    }

    /// Start a new round, replacing any round in progress
    ///
    /// Always succeeds: generation degrades to a best-effort pool when the
    /// target band cannot be hit (see [`puzzle::generate`]).
    pub fn start_round(&mut self, settings: RoundSettings) -> &WordSet {
        self.start_round_with_rng(settings, &mut rand::rng())
    }

    /// Start a new round with a caller-supplied RNG (for reproducible puzzles)
    pub fn start_round_with_rng<R: Rng + ?Sized>(
        &mut self,
        settings: RoundSettings,
        rng: &mut R,
    ) -> &WordSet {
        let generation = puzzle::generate(
            self.dictionary,
            settings.difficulty,
            settings.time_limit,
            settings.letter_count,
            rng,
        );
        self.begin_round(generation.word_set, settings)
    }

    fn begin_round(&mut self, word_set: WordSet, settings: RoundSettings) -> &WordSet {
        let round = self.round.insert(Round {
            word_set,
            settings,
            score: 0,
            streak: 0,
            longest_streak: 0,
            history: Vec::new(),
            started: Instant::now(),
        });
        &round.word_set
    }

    /// The active round's word set, if a round is in progress
    #[must_use]
    pub fn word_set(&self) -> Option<&WordSet> {
        self.round.as_ref().map(|r| &r.word_set)
    }

    /// The active round's settings
    #[must_use]
    pub fn settings(&self) -> Option<RoundSettings> {
        self.round.as_ref().map(|r| r.settings)
    }

    /// Re-permute the letter display order
    ///
    /// Pure reordering: the underlying multiset and the possible-word set are
    /// untouched. Returns the new order, or `None` without an active round.
    pub fn shuffle(&mut self) -> Option<&[char]> {
        let round = self.round.as_mut()?;
        round.word_set.shuffle_letters(&mut rand::rng());
        Some(round.word_set.letters().display())
    }

    /// Submit a word for the active round
    ///
    /// Runs the ordered validation checks; on success scores the word, appends
    /// it to the found list, advances the streak and updates the high score.
    /// Rejections reset the streak only for letter/dictionary/length failures;
    /// the duplicate path has no side effects at all.
    pub fn submit(&mut self, raw: &str) -> SubmitOutcome {
        let Some(round) = self.round.as_mut() else {
            return SubmitOutcome::Rejected {
                reason: RejectReason::RoundNotStarted,
            };
        };

        let min_len = round.settings.difficulty.min_word_len();
        match validate(raw, &round.word_set, min_len) {
            Err(reason) => {
                if reason.resets_streak() {
                    round.streak = 0;
                }
                SubmitOutcome::Rejected { reason }
            }
            Ok(word) => {
                let score = score_word(word.len(), round.settings.difficulty, round.streak);
                let streak_at_submission = round.streak;

                round.score += score.total();
                round.streak += 1;
                round.longest_streak = round.longest_streak.max(round.streak);
                round.word_set.record_found(word.clone());
                round.history.push(WordRecord {
                    word: word.clone(),
                    points: score.total(),
                    streak_at_submission,
                    elapsed: round.started.elapsed(),
                });

                // Compared after adding this word's points; the stored value
                // only ever increases
                let new_high_score = round.score > self.high_score;
                if new_high_score {
                    self.high_score = round.score;
                    self.store.save(self.high_score);
                }

                SubmitOutcome::Accepted {
                    word,
                    score,
                    new_high_score,
                }
            }
        }
    }

    /// Current session counters
    #[must_use]
    pub fn stats(&self) -> SessionStats {
        match &self.round {
            Some(round) => SessionStats {
                score: round.score,
                high_score: self.high_score,
                streak: round.streak,
                longest_streak: round.longest_streak,
                words_found: round.word_set.found_words().len(),
                elapsed: round.started.elapsed(),
            },
            None => SessionStats {
                score: 0,
                high_score: self.high_score,
                streak: 0,
                longest_streak: 0,
                words_found: 0,
                elapsed: Duration::ZERO,
            },
        }
    }

    /// Performance history of the active round, in submission order
    #[must_use]
    pub fn history(&self) -> &[WordRecord] {
        self.round.as_ref().map_or(&[], |r| r.history.as_slice())
    }

    /// The cross-round high score
    #[must_use]
    pub const fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Whether the timed round's limit has elapsed (always false untimed)
    #[must_use]
    pub fn time_expired(&self) -> bool {
        self.round.as_ref().is_some_and(|round| {
            round
                .settings
                .time_limit
                .seconds()
                .is_some_and(|s| round.started.elapsed().as_secs() >= u64::from(s))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterMultiset;
    use crate::puzzle::resolve;

    fn fixed_session<'d>(
        dict: &'d DictionaryIndex,
        letters: &str,
        difficulty: Difficulty,
    ) -> GameSession<'d> {
        let mut session = GameSession::new(dict, Box::new(MemoryHighScore::default()));
        install_round(&mut session, dict, letters, difficulty);
        session
    }

    fn install_round(
        session: &mut GameSession<'_>,
        dict: &DictionaryIndex,
        letters: &str,
        difficulty: Difficulty,
    ) {
        let pool = LetterMultiset::new(letters.chars().collect());
        let words = resolve(&pool, difficulty.min_word_len(), dict);
        let settings = RoundSettings {
            difficulty,
            ..RoundSettings::default()
        };
        session.begin_round(WordSet::new(pool, words), settings);
    }

    fn catdog_dict() -> DictionaryIndex {
        DictionaryIndex::from_words(["cat", "dog", "cot", "tag", "act", "cod", "coat", "tact"])
    }

    #[test]
    fn accepted_word_scores_and_extends_streak() {
        let dict = catdog_dict();
        let mut session = fixed_session(&dict, "catdog", Difficulty::Easy);

        let outcome = session.submit("cat");
        assert!(outcome.accepted());
        assert_eq!(outcome.points_awarded(), Some(30));

        let stats = session.stats();
        assert_eq!(stats.score, 30);
        assert_eq!(stats.streak, 1);
        assert_eq!(stats.words_found, 1);
    }

    #[test]
    fn duplicate_rejected_without_streak_penalty() {
        let dict = catdog_dict();
        let mut session = fixed_session(&dict, "catdog", Difficulty::Easy);

        assert!(session.submit("cat").accepted());
        let before = session.stats();

        let outcome = session.submit("cat");
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                reason: RejectReason::AlreadyFound
            }
        );

        let after = session.stats();
        assert_eq!(after.streak, before.streak);
        assert_eq!(after.score, before.score);
        assert_eq!(after.words_found, before.words_found);
    }

    #[test]
    fn unavailable_letters_reject_and_reset_streak() {
        let dict = catdog_dict();
        let mut session = fixed_session(&dict, "catdog", Difficulty::Easy);

        assert!(session.submit("cat").accepted());
        assert_eq!(session.stats().streak, 1);

        // "tact" needs two t's; only one in the pool
        let outcome = session.submit("tact");
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                reason: RejectReason::UnavailableLetters
            }
        );
        assert_eq!(session.stats().streak, 0);
        // Longest streak is retained
        assert_eq!(session.stats().longest_streak, 1);
    }

    #[test]
    fn non_word_rejects_and_resets_streak() {
        let dict = catdog_dict();
        let mut session = fixed_session(&dict, "catdog", Difficulty::Easy);

        assert!(session.submit("dog").accepted());
        let outcome = session.submit("gdo");
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                reason: RejectReason::NotAWord
            }
        );
        assert_eq!(session.stats().streak, 0);
    }

    #[test]
    fn streak_bonus_grows_across_consecutive_words() {
        let dict = DictionaryIndex::from_words(["tale", "late", "teal"]);
        let mut session = fixed_session(&dict, "taleptr", Difficulty::Medium);

        let p1 = session.submit("tale").points_awarded().unwrap();
        let p2 = session.submit("late").points_awarded().unwrap();
        let p3 = session.submit("teal").points_awarded().unwrap();

        // Equal 4-letter bases, bonuses 0 / 5 / 10
        assert_eq!(p1, 72);
        assert_eq!(p2, 77);
        assert_eq!(p3, 82);
    }

    #[test]
    fn history_records_submissions_in_order() {
        let dict = catdog_dict();
        let mut session = fixed_session(&dict, "catdog", Difficulty::Easy);

        session.submit("cat");
        session.submit("dog");

        let history = session.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].word, "cat");
        assert_eq!(history[0].streak_at_submission, 0);
        assert_eq!(history[1].word, "dog");
        assert_eq!(history[1].streak_at_submission, 1);
    }

    #[test]
    fn high_score_updates_after_adding_points() {
        let dict = catdog_dict();
        let mut session = fixed_session(&dict, "catdog", Difficulty::Easy);

        let outcome = session.submit("cat");
        assert!(matches!(
            outcome,
            SubmitOutcome::Accepted {
                new_high_score: true,
                ..
            }
        ));
        assert_eq!(session.high_score(), 30);
    }

    #[test]
    fn high_score_never_decreases() {
        let dict = catdog_dict();
        let mut session = GameSession::new(&dict, Box::new(MemoryHighScore::new(500)));
        install_round(&mut session, &dict, "catdog", Difficulty::Easy);

        session.submit("cat");
        assert_eq!(session.high_score(), 500);

        // Restarting keeps the stored value too
        install_round(&mut session, &dict, "catdog", Difficulty::Easy);
        assert_eq!(session.stats().high_score, 500);
    }

    #[test]
    fn restart_clears_round_state_but_not_high_score() {
        let dict = catdog_dict();
        let mut session = fixed_session(&dict, "catdog", Difficulty::Easy);

        session.submit("cat");
        session.submit("dog");
        let high = session.high_score();
        assert!(high > 0);

        install_round(&mut session, &dict, "catdog", Difficulty::Easy);
        let stats = session.stats();
        assert_eq!(stats.score, 0);
        assert_eq!(stats.streak, 0);
        assert_eq!(stats.longest_streak, 0);
        assert_eq!(stats.words_found, 0);
        assert_eq!(stats.high_score, high);
        assert!(session.history().is_empty());
    }

    #[test]
    fn submit_without_round_is_rejected() {
        let dict = catdog_dict();
        let mut session = GameSession::new(&dict, Box::new(MemoryHighScore::default()));

        let outcome = session.submit("cat");
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                reason: RejectReason::RoundNotStarted
            }
        );
    }

    #[test]
    fn shuffle_reorders_display_only() {
        let dict = catdog_dict();
        let mut session = fixed_session(&dict, "catdog", Difficulty::Easy);

        let possible_before = session.word_set().unwrap().possible_words().clone();
        session.shuffle().unwrap();

        let set = session.word_set().unwrap();
        assert_eq!(set.possible_words(), &possible_before);
        for c in "catdog".chars() {
            assert_eq!(set.letters().count(c), 1);
        }
        // Pool is still usable after shuffling
        assert!(session.submit("cat").accepted());
    }

    #[test]
    fn generated_round_starts_clean() {
        let dict = DictionaryIndex::embedded();
        let mut session = GameSession::new(&dict, Box::new(MemoryHighScore::default()));

        let set = session.start_round(RoundSettings::default());
        assert_eq!(set.letters().len(), 7);
        assert!(set.found_words().is_empty());

        let stats = session.stats();
        assert_eq!(stats.score, 0);
        assert_eq!(stats.streak, 0);
    }

    #[test]
    fn hard_round_enforces_four_letter_minimum() {
        let dict = DictionaryIndex::from_words(["wavy", "way", "yaw"]);
        let mut session = fixed_session(&dict, "wavyo", Difficulty::Hard);

        let outcome = session.submit("way");
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                reason: RejectReason::TooShort { min: 4 }
            }
        );
        assert!(session.submit("wavy").accepted());
    }

    #[test]
    fn accepted_message_mirrors_breakdown() {
        let dict = catdog_dict();
        let mut session = fixed_session(&dict, "catdog", Difficulty::Easy);

        session.submit("cat");
        let outcome = session.submit("dog");
        assert_eq!(outcome.message(), "+35 points! (30 + 5 streak bonus)");
    }
}
