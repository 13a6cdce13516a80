//! Core domain types

pub mod difficulty;
pub mod letters;

pub use difficulty::{Difficulty, TimeLimit};
pub use letters::LetterMultiset;
