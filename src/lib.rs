//! GramJam
//!
//! A letter-tile word puzzle engine: generates letter pools guaranteed to
//! admit a target number of dictionary words, validates submissions against
//! letter availability and the dictionary, and scores a timed session with a
//! streak model.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use gramjam::dictionary::DictionaryIndex;
//! use gramjam::session::{GameSession, MemoryHighScore, RoundSettings};
//!
//! let dictionary = DictionaryIndex::embedded();
//! let mut session = GameSession::new(&dictionary, Box::new(MemoryHighScore::default()));
//!
//! let word_set = session.start_round(RoundSettings::default());
//! println!("Letters: {}", word_set.letters());
//!
//! let outcome = session.submit("cat");
//! println!("{}", outcome.message());
//! ```

// Core domain types
pub mod core;

// Dictionary index and word lists
pub mod dictionary;

// Puzzle generation
pub mod puzzle;

// Session state: validation, scoring, high-score persistence
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
