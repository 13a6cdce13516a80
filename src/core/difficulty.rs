//! Difficulty tiers and round time limits
//!
//! Difficulty affects three things: which consonants letter pools draw from,
//! the minimum accepted word length, and how the possible-word target scales.

use std::fmt;

/// Consonants common enough to appear in easy pools
pub const COMMON_CONSONANTS: [char; 12] =
    ['b', 'c', 'd', 'g', 'h', 'l', 'm', 'n', 'p', 'r', 's', 't'];

/// Rarer consonants, reserved for harder pools
pub const UNCOMMON_CONSONANTS: [char; 9] = ['f', 'j', 'k', 'q', 'v', 'w', 'x', 'y', 'z'];

/// All consonants, for medium pools
pub const ALL_CONSONANTS: [char; 21] = [
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w', 'x',
    'y', 'z',
];

/// Difficulty tier of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers, in ascending order
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Parse a difficulty from its name (case-insensitive)
    ///
    /// # Examples
    /// ```
    /// use gramjam::core::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_name("hard"), Some(Difficulty::Hard));
    /// assert_eq!(Difficulty::from_name("brutal"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    /// Scalar applied to every base word score
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Easy => 1.0,
            Self::Medium => 1.5,
            Self::Hard => 2.0,
        }
    }

    /// Minimum accepted word length for this tier
    ///
    /// Hard rounds require 4-letter words; easy and medium accept 3.
    #[must_use]
    pub const fn min_word_len(self) -> usize {
        match self {
            Self::Easy | Self::Medium => 3,
            Self::Hard => 4,
        }
    }

    /// Scaling applied to the time-derived possible-word target
    ///
    /// Easier pools are expected to admit more words, so easy targets are
    /// larger and hard targets smaller.
    #[must_use]
    pub const fn target_scale(self) -> f64 {
        match self {
            Self::Easy => 1.5,
            Self::Medium => 1.0,
            Self::Hard => 0.6,
        }
    }

    /// The consonant pool letter generation draws from at this tier
    #[must_use]
    pub const fn consonant_pool(self) -> &'static [char] {
        match self {
            Self::Easy => &COMMON_CONSONANTS,
            Self::Medium => &ALL_CONSONANTS,
            Self::Hard => &UNCOMMON_CONSONANTS,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        };
        write!(f, "{name}")
    }
}

/// Round duration, or untimed play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeLimit {
    Seconds(u32),
    Untimed,
}

impl TimeLimit {
    /// Parse a time limit from a flag value: a number of seconds or "untimed"
    #[must_use]
    pub fn from_flag(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "untimed" | "none" => Some(Self::Untimed),
            other => other.parse::<u32>().ok().filter(|&s| s > 0).map(Self::Seconds),
        }
    }

    /// Duration in seconds, if timed
    #[must_use]
    pub const fn seconds(self) -> Option<u32> {
        match self {
            Self::Seconds(s) => Some(s),
            Self::Untimed => None,
        }
    }
}

impl fmt::Display for TimeLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seconds(s) => write!(f, "{s}s"),
            Self::Untimed => write!(f, "untimed"),
        }
    }
}
