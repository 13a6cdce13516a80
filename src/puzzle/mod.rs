//! Puzzle generation
//!
//! Builds letter pools, resolves which dictionary words they admit, and
//! retries within a bounded attempt count until a pool lands in the
//! difficulty/time-derived target band.

pub mod generator;
pub mod pool;
pub mod resolver;

pub use generator::{Generation, WordSet, generate, target_word_count};
pub use pool::generate_pool;
pub use resolver::resolve;
