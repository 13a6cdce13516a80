//! Generation benchmark command
//!
//! Measures how hard the generator has to work for a difficulty tier: attempts
//! per puzzle, target hit rate, possible-word spread, and throughput.

use crate::core::{Difficulty, TimeLimit};
use crate::dictionary::DictionaryIndex;
use crate::puzzle;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Result of a generation benchmark run
pub struct GenerationBenchmark {
    pub difficulty: Difficulty,
    pub rounds: usize,
    pub total_attempts: usize,
    pub average_attempts: f64,
    /// Puzzles that hit the target band (vs. best-effort fallbacks)
    pub target_hits: usize,
    pub min_words: usize,
    pub max_words: usize,
    pub average_words: f64,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

/// Generate `rounds` puzzles and collect retry statistics
#[must_use]
pub fn run_generation_benchmark(
    dictionary: &DictionaryIndex,
    difficulty: Difficulty,
    time_limit: TimeLimit,
    letter_count: usize,
    rounds: usize,
) -> GenerationBenchmark {
    let pb = ProgressBar::new(rounds as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb.set_message(format!("generating {difficulty} puzzles"));

    let mut rng = rand::rng();
    let mut total_attempts = 0;
    let mut target_hits = 0;
    let mut total_words = 0;
    let mut min_words = usize::MAX;
    let mut max_words = 0;

    let start = Instant::now();
    for _ in 0..rounds {
        let generation =
            puzzle::generate(dictionary, difficulty, time_limit, letter_count, &mut rng);

        let words = generation.word_set.possible_words().len();
        total_attempts += generation.attempts;
        total_words += words;
        min_words = min_words.min(words);
        max_words = max_words.max(words);
        if generation.hit_target {
            target_hits += 1;
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();
    let rounds_f = rounds.max(1) as f64;

    GenerationBenchmark {
        difficulty,
        rounds,
        total_attempts,
        average_attempts: total_attempts as f64 / rounds_f,
        target_hits,
        min_words: if rounds == 0 { 0 } else { min_words },
        max_words,
        average_words: total_words as f64 / rounds_f,
        duration,
        puzzles_per_second: rounds_f / duration.as_secs_f64().max(f64::EPSILON),
    }
}
